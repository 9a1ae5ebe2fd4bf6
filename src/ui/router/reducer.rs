use crate::ui::mvi::Reducer;

use super::intent::RouterIntent;
use super::state::RouterState;

pub struct RouterReducer;

impl Reducer for RouterReducer {
    type State = RouterState;
    type Intent = RouterIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            RouterIntent::Navigate(view) => RouterState { view },
        }
    }
}
