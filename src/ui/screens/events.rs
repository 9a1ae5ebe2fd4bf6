use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, PROMO_ORANGE};

pub fn render(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let partition = app.event_partition();
    let mut lines = vec![
        Line::from(Span::styled(
            "Events & Classes",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Join offline workshops and earn badges.",
            Style::default().fg(MUTED_TEXT),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "FEATURED CLASSES (AD)",
            Style::default().fg(PROMO_ORANGE).add_modifier(Modifier::BOLD),
        )),
    ];

    for event in &partition.classes {
        lines.push(Line::from(Span::styled(
            event.name.clone(),
            Style::default().fg(PROMO_ORANGE).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("{} • {}", event.location, event.date),
            Style::default().fg(PROMO_ORANGE),
        )));
        lines.push(Line::from(Span::styled(
            format!("[ {} ]", event.register_label()),
            Style::default().fg(HEADER_TEXT).bg(PROMO_ORANGE),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "UPCOMING WORKSHOPS",
        Style::default().fg(MUTED_TEXT).add_modifier(Modifier::BOLD),
    )));
    for event in &partition.others {
        lines.push(Line::from(Span::styled(
            event.name.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("📍 {}   📅 {}", event.location, event.date),
            Style::default().fg(MUTED_TEXT),
        )));
    }

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        ),
        area,
    );
}
