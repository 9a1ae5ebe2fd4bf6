use std::sync::atomic::{AtomicBool, Ordering};
use std::io;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};
use tokio::sync::mpsc::UnboundedSender;

use crate::api::AuthError;

pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    /// Outcome of a spawned login attempt.
    LoginFinished(Result<(), AuthError>),
    /// Auto-clear timer for notification `id` fired.
    NotificationExpired { id: u64 },
}

impl std::fmt::Debug for AppEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppEvent::Key(key) => f.debug_tuple("Key").field(&key.code).finish(),
            AppEvent::Resize(cols, rows) => f.debug_tuple("Resize").field(cols).field(rows).finish(),
            AppEvent::LoginFinished(result) => {
                f.debug_tuple("LoginFinished").field(&result.is_ok()).finish()
            }
            AppEvent::NotificationExpired { id } => {
                f.debug_struct("NotificationExpired").field("id", id).finish()
            }
        }
    }
}

/// Blocking terminal reader forwarding key and resize events to the UI loop.
pub struct InputReader {
    stop: Arc<AtomicBool>,
    handle: thread::JoinHandle<()>,
}

impl InputReader {
    /// Start forwarding terminal input into `events`.
    ///
    /// Fails if the OS refuses to start the reader thread; without it the UI
    /// could never receive a key press.
    pub fn spawn(events: UnboundedSender<AppEvent>) -> io::Result<Self> {
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);

        let handle = thread::Builder::new()
            .name("input".to_string())
            .spawn(move || {
                while !stop_flag.load(Ordering::Relaxed) {
                    // Short poll timeout to check the stop flag frequently
                    match event::poll(Duration::from_millis(50)) {
                        Ok(false) => continue,
                        Ok(true) => {}
                        Err(err) => {
                            tracing::error!("Terminal poll failed: {}", err);
                            break;
                        }
                    }
                    let forwarded = match event::read() {
                        Ok(Event::Key(key)) => events.send(AppEvent::Key(key)),
                        Ok(Event::Resize(cols, rows)) => events.send(AppEvent::Resize(cols, rows)),
                        Ok(_) => Ok(()),
                        Err(err) => {
                            tracing::error!("Terminal read failed: {}", err);
                            break;
                        }
                    };
                    if forwarded.is_err() {
                        break;
                    }
                }
            })?;

        Ok(Self { stop, handle })
    }

    pub fn stop(self) {
        self.stop.store(true, Ordering::Relaxed);
        if self.handle.join().is_err() {
            tracing::error!("Input thread panicked");
        }
    }
}
