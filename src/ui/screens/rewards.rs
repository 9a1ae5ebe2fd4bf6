use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, BRAND_TEAL, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};

pub fn render(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let user = app.user();
    let [title, list_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(
                "Rewards  ",
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{} K$ Available", user.k_dollars),
                Style::default().fg(BRAND_TEAL),
            ),
        ])),
        title,
    );

    let items: Vec<ListItem> = app
        .rewards()
        .iter()
        .map(|reward| {
            // Unaffordable rewards render dimmed; Enter still reports the shortfall
            let (cost_style, name_style) = if user.can_afford(reward) {
                (
                    Style::default().fg(BRAND_TEAL).add_modifier(Modifier::BOLD),
                    Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
                )
            } else {
                (
                    Style::default().fg(MUTED_TEXT),
                    Style::default().fg(MUTED_TEXT),
                )
            };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(reward.name.clone(), name_style),
                    Span::raw("  "),
                    Span::styled(format!("{} K$", reward.cost), cost_style),
                ]),
                Line::from(Span::styled(
                    reward.description.clone(),
                    Style::default().fg(MUTED_TEXT),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" ↑/↓: Select │ Enter: Redeem ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT));
    let mut state = ListState::default().with_selected(Some(app.reward_selection()));
    frame.render_stateful_widget(list, list_area, &mut state);
}
