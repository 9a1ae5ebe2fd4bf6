//! Terminal view layer: a single view controller plus one renderer per screen.

pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod login;
pub mod mvi;
pub mod notification;
pub mod render;
pub mod router;
pub mod runtime;
pub mod screens;
pub mod theme;
pub mod tui;
