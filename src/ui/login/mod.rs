//! Login form.
//!
//! Holds the email/password being typed. The form lives in the top-level app,
//! so it survives navigating away from the Login screen.

mod intent;
mod reducer;
mod state;

pub use intent::LoginIntent;
pub use reducer::LoginReducer;
pub use state::{LoginField, LoginFormState};
