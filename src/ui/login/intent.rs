use super::state::LoginField;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum LoginIntent {
    /// Replace a field's whole value.
    UpdateField { field: LoginField, value: String },
    /// Append a typed character to the focused field.
    Input(char),
    Backspace,
    FocusNext,
}

impl Intent for LoginIntent {}
