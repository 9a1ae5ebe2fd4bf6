use crate::ui::mvi::Reducer;

use super::intent::LoginIntent;
use super::state::{LoginField, LoginFormState};

pub struct LoginReducer;

impl Reducer for LoginReducer {
    type State = LoginFormState;
    type Intent = LoginIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LoginIntent::UpdateField { field, value } => {
                *field_mut(&mut state, field) = value;
            }
            LoginIntent::Input(ch) => {
                let focused = state.focused;
                field_mut(&mut state, focused).push(ch);
            }
            LoginIntent::Backspace => {
                let focused = state.focused;
                field_mut(&mut state, focused).pop();
            }
            LoginIntent::FocusNext => {
                state.focused = state.focused.next();
            }
        }
        state
    }
}

fn field_mut(state: &mut LoginFormState, field: LoginField) -> &mut String {
    match field {
        LoginField::Email => &mut state.email,
        LoginField::Password => &mut state.password,
    }
}
