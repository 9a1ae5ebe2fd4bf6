//! Transient status banner.
//!
//! At most one notification is visible. Showing a new one replaces the old one
//! and restarts the auto-clear countdown.
//!
//! - `state.rs` - Hidden / Visible banner
//! - `intent.rs` - Show and Expire
//! - `reducer.rs` - Transitions; Expire only clears the banner it was scheduled for
//! - `scheduler.rs` - Cancellable auto-clear task

mod intent;
mod reducer;
mod scheduler;
mod state;

pub use intent::NotificationIntent;
pub use reducer::NotificationReducer;
pub use scheduler::ClearScheduler;
pub use state::{NotificationKind, NotificationState};
