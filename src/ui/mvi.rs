//! State/intent/reducer split shared by the router, the login form and the
//! notification banner.
//!
//! Each slice of UI state only changes by feeding an intent through its
//! reducer. The app owns the slices and calls [`Reducer::apply`]; renderers
//! only ever read them.

/// A self-contained slice of UI state. `Default` is the state at startup.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Something that happened to a state slice: a key press, a timer, a reply.
pub trait Intent: Send + 'static {}

pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Next state from the current one. No side effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;

    /// Reduce `state` in place.
    fn apply(state: &mut Self::State, intent: Self::Intent) {
        *state = Self::reduce(std::mem::take(state), intent);
    }
}
