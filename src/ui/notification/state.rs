use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    #[default]
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NotificationState {
    #[default]
    Hidden,
    Visible {
        /// Identifies which scheduled clear may dismiss this banner.
        id: u64,
        message: String,
        kind: NotificationKind,
    },
}

impl UiState for NotificationState {}

impl NotificationState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Visible { message, .. } => Some(message),
            Self::Hidden => None,
        }
    }

    pub fn kind(&self) -> Option<NotificationKind> {
        match self {
            Self::Visible { kind, .. } => Some(*kind),
            Self::Hidden => None,
        }
    }
}
