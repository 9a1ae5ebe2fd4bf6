use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, BRAND_TEAL, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};

pub struct Lesson {
    pub title: &'static str,
    pub summary: &'static str,
}

pub const LESSONS: [Lesson; 3] = [
    Lesson {
        title: "Budgeting Basics",
        summary: "Track where every dollar goes.",
    },
    Lesson {
        title: "Saving vs Investing",
        summary: "When to park cash and when to grow it.",
    },
    Lesson {
        title: "Understanding Credit",
        summary: "How interest and credit scores work.",
    },
];

pub fn render(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let items: Vec<ListItem> = LESSONS
        .iter()
        .map(|lesson| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    lesson.title,
                    Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(lesson.summary, Style::default().fg(MUTED_TEXT))),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(Span::styled("Learn", Style::default().fg(BRAND_TEAL)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT));
    let mut state = ListState::default().with_selected(Some(app.lesson_selection()));
    frame.render_stateful_widget(list, area, &mut state);
}
