//! Terminal client for CTF Life, a gamified personal-finance learning app.
//!
//! Users log in against the remote token endpoint, then browse lessons,
//! redeem K Dollar rewards and look through upcoming events.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod logging;
pub mod ui;
