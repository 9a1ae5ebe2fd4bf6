use crate::ui::router::View;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, BRAND_TEAL, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Bottom navigation bar with the active tab highlighted.
pub struct BottomNav {
    current: View,
}

impl BottomNav {
    pub fn new(current: View) -> Self {
        Self { current }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let active_style = Style::default()
            .fg(BRAND_TEAL)
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = Vec::new();
        for (idx, view) in View::TABS.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled(" │ ", separator_style));
            }
            let style = if *view == self.current {
                active_style
            } else {
                text_style
            };
            spans.push(Span::styled(format!(" {} {} ", idx + 1, view.title()), style));
        }

        let version = format!("v{} ", VERSION);
        let tabs_width: usize = spans.iter().map(Span::width).sum();
        let content_width = usize::from(area.width.saturating_sub(2));
        let padding = content_width
            .saturating_sub(tabs_width)
            .saturating_sub(Line::from(version.as_str()).width());
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(version, text_style.add_modifier(Modifier::DIM)));

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
