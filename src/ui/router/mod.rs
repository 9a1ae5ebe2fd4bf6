//! Screen selection.
//!
//! Uses MVI pattern:
//! - `state.rs` - `View` enum and the current-view holder
//! - `intent.rs` - Navigation request
//! - `reducer.rs` - Unconstrained transition: any view is reachable from any view

mod intent;
mod reducer;
mod state;

pub use intent::RouterIntent;
pub use reducer::RouterReducer;
pub use state::{RouterState, View};
