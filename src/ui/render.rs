use crate::ui::app::App;
use crate::ui::footer::BottomNav;
use crate::ui::header::Header;
use crate::ui::layout::{banner_rect, layout_regions};
use crate::ui::notification::NotificationKind;
use crate::ui::screens::render_body;
use crate::ui::theme::{BRAND_TEAL, HEADER_TEXT, STATUS_ERROR};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

const BANNER_PADDING: u16 = 6;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let regions = layout_regions(frame.area(), app.shows_chrome());

    if let Some(header) = regions.header {
        let user = app.user();
        frame.render_widget(Header::new(&user.username, user.k_dollars).widget(), header);
    }

    frame.render_widget(Clear, regions.body);
    render_body(frame, regions.body, app);

    if let Some(footer) = regions.footer {
        frame.render_widget(BottomNav::new(app.view()).widget(footer), footer);
    }

    draw_notification(frame, app);
}

/// Terminal columns the banner needs for `message`, padding included.
/// Wide glyphs count as two columns.
pub fn banner_width(message: &str) -> u16 {
    let text = u16::try_from(Line::from(message).width()).unwrap_or(u16::MAX);
    text.saturating_add(BANNER_PADDING)
}

fn draw_notification(frame: &mut Frame<'_>, app: &App) {
    let notification = app.notification();
    let (Some(message), Some(kind)) = (notification.message(), notification.kind()) else {
        return;
    };

    let background = match kind {
        NotificationKind::Success => BRAND_TEAL,
        NotificationKind::Error => STATUS_ERROR,
    };
    let area = banner_rect(frame.area(), banner_width(message), 1, 1);

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(message.to_string())
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(HEADER_TEXT)
                    .bg(background)
                    .add_modifier(Modifier::BOLD),
            ),
        area,
    );
}
