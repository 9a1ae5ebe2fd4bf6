use crate::api::Credentials;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

impl LoginField {
    pub fn next(self) -> Self {
        match self {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Email,
        }
    }
}

#[derive(Clone, PartialEq, Eq, Default)]
pub struct LoginFormState {
    pub email: String,
    pub password: String,
    pub focused: LoginField,
}

impl UiState for LoginFormState {}

impl std::fmt::Debug for LoginFormState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginFormState")
            .field("email", &self.email)
            .field("password", &"••••••••")
            .field("focused", &self.focused)
            .finish()
    }
}

impl LoginFormState {
    /// Snapshot of the form as submit-ready credentials.
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.email.clone(), self.password.clone())
    }

    /// Password rendered as bullets.
    pub fn masked_password(&self) -> String {
        "•".repeat(self.password.chars().count())
    }
}
