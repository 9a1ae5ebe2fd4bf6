//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_token;

use ctflife::api::{ApiClient, AuthGateway};
use ctflife::config::RemoteConfig;
use ctflife::ui::app::App;
use ctflife::ui::events::AppEvent;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver};

pub const DISPLAY: Duration = Duration::from_millis(3000);

/// Remote config pointing at `origin` with the default route prefixes.
pub fn remote(origin: &str) -> RemoteConfig {
    RemoteConfig {
        origin: origin.to_string(),
        ..RemoteConfig::default()
    }
}

pub fn make_gateway(origin: &str) -> AuthGateway {
    let remote = remote(origin);
    let client = Arc::new(ApiClient::new(&remote).expect("client"));
    AuthGateway::new(client, remote.token_path)
}

/// Build an `App` on the current runtime. Must be called inside a tokio test.
///
/// Returns `(app, event_receiver)`.
pub fn make_app(origin: &str) -> (App, UnboundedReceiver<AppEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let app = App::new(Arc::new(make_gateway(origin)), Handle::current(), tx, DISPLAY);
    (app, rx)
}

/// Origin nothing listens on.
pub fn dead_origin() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

/// Wait for the next login outcome, skipping unrelated events.
pub async fn next_login_event(rx: &mut UnboundedReceiver<AppEvent>) -> AppEvent {
    loop {
        let event = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("timed out waiting for login result")
            .expect("event channel closed");
        if matches!(event, AppEvent::LoginFinished(_)) {
            return event;
        }
    }
}
