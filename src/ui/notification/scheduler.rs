use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use crate::ui::events::AppEvent;

/// Owns the single pending auto-clear task.
///
/// Scheduling aborts whatever clear is still pending before spawning a new one,
/// so only the newest notification's timer can fire.
pub struct ClearScheduler {
    runtime: Handle,
    display: Duration,
    next_id: u64,
    pending: Option<JoinHandle<()>>,
}

impl ClearScheduler {
    pub fn new(runtime: Handle, display: Duration) -> Self {
        Self {
            runtime,
            display,
            next_id: 0,
            pending: None,
        }
    }

    pub fn display(&self) -> Duration {
        self.display
    }

    /// Allocate an id for a new notification and start its countdown.
    pub fn schedule(&mut self, events: &UnboundedSender<AppEvent>) -> u64 {
        self.cancel();
        self.next_id += 1;
        let id = self.next_id;
        let display = self.display;
        let events = events.clone();
        self.pending = Some(self.runtime.spawn(async move {
            tokio::time::sleep(display).await;
            let _ = events.send(AppEvent::NotificationExpired { id });
        }));
        id
    }

    pub fn cancel(&mut self) {
        if let Some(task) = self.pending.take() {
            task.abort();
        }
    }
}

impl Drop for ClearScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
