use super::state::NotificationKind;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum NotificationIntent {
    Show {
        id: u64,
        message: String,
        kind: NotificationKind,
    },
    /// Display window for notification `id` elapsed.
    Expire { id: u64 },
}

impl Intent for NotificationIntent {}
