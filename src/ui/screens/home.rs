use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::theme::{BRAND_TEAL, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, PROMO_ORANGE};

pub fn render(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let user = app.user();
    let [summary, goal, shortcuts] = Layout::vertical([
        Constraint::Length(7),
        Constraint::Length(3),
        Constraint::Min(0),
    ])
    .areas(area);

    let badges = user.badges.iter().cloned().collect::<Vec<_>>().join(", ");
    let text_style = Style::default().fg(HEADER_TEXT);
    let lines = vec![
        Line::from(Span::styled(
            format!("Hi, {}!", user.username),
            Style::default().fg(BRAND_TEAL).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(format!("Level {}", user.level), text_style),
            Span::styled("  •  ", Style::default().fg(MUTED_TEXT)),
            Span::styled(
                format!("🔥 {} day streak", user.streak_days),
                Style::default().fg(PROMO_ORANGE),
            ),
        ]),
        Line::from(Span::styled(format!("Badges: {}", badges), text_style)),
        Line::from(Span::styled(
            format!("{} upcoming events", app.events().len()),
            text_style,
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        ),
        summary,
    );

    let savings = &user.savings_goal;
    frame.render_widget(
        Gauge::default()
            .block(Block::default().title(format!(
                "Savings goal: {} / {} by {}",
                savings.current, savings.amount, savings.target_date
            )))
            .gauge_style(Style::default().fg(BRAND_TEAL))
            .percent(savings.percent()),
        goal,
    );

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "2: Learn │ 3: Rewards │ 4: Events │ ←/→: Switch tab",
            Style::default().fg(MUTED_TEXT),
        ))),
        shortcuts,
    );
}
