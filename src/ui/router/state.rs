use crate::ui::mvi::UiState;

/// Top-level screen identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    Login,
    Register,
    Home,
    Learn,
    Rewards,
    Events,
}

impl View {
    pub const ALL: [View; 6] = [
        View::Login,
        View::Register,
        View::Home,
        View::Learn,
        View::Rewards,
        View::Events,
    ];

    /// Views listed in the bottom navigation, in order.
    pub const TABS: [View; 4] = [View::Home, View::Learn, View::Rewards, View::Events];

    /// Header and bottom navigation are shown everywhere except the auth screens.
    pub fn shows_chrome(self) -> bool {
        !matches!(self, View::Login | View::Register)
    }

    pub fn title(self) -> &'static str {
        match self {
            View::Login => "Login",
            View::Register => "Register",
            View::Home => "Home",
            View::Learn => "Learn",
            View::Rewards => "Rewards",
            View::Events => "Events",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RouterState {
    pub view: View,
}

impl UiState for RouterState {}
