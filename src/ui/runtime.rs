use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::api::{ApiClient, AuthGateway};
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::InputReader;
use crate::ui::tui::Tui;

const TICK_RATE: Duration = Duration::from_millis(250);

/// Build the session and drive the UI loop until the user quits.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let client = Arc::new(ApiClient::new(&config.remote)?);
    let gateway = Arc::new(AuthGateway::new(client, config.remote.token_path.clone()));
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut app = App::new(
        gateway,
        Handle::current(),
        tx.clone(),
        config.notifications.display_duration(),
    );

    let mut tui = Tui::enter()?;
    let input = InputReader::spawn(tx)?;
    let mut tick = tokio::time::interval(TICK_RATE);
    tracing::info!(origin = %config.remote.origin, "Session started");

    loop {
        tui.draw(&app)?;
        if app.should_quit() {
            break;
        }

        tokio::select! {
            Some(event) = rx.recv() => app.handle_event(event),
            _ = tick.tick() => {}
        }
    }

    input.stop();
    drop(tui);
    tracing::info!("Session ended");
    Ok(())
}
