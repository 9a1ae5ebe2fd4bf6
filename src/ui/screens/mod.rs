//! One renderer per view. Exactly one runs per frame.

pub mod events;
pub mod home;
pub mod learn;
pub mod login;
pub mod register;
pub mod rewards;

use ratatui::layout::Rect;
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::router::View;

pub fn render_body(frame: &mut Frame<'_>, area: Rect, app: &App) {
    match app.view() {
        View::Login => login::render(frame, area, app),
        View::Register => register::render(frame, area),
        View::Home => home::render(frame, area, app),
        View::Learn => learn::render(frame, area, app),
        View::Rewards => rewards::render(frame, area, app),
        View::Events => events::render(frame, area, app),
    }
}
