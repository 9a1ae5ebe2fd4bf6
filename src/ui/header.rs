use crate::ui::theme::{BRAND_TEAL, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Top bar: user identity and balance.
pub struct Header<'a> {
    username: &'a str,
    k_dollars: u32,
}

impl<'a> Header<'a> {
    pub fn new(username: &'a str, k_dollars: u32) -> Self {
        Self {
            username,
            k_dollars,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let line = Line::from(vec![
            Span::styled(
                "  CTF Life",
                Style::default().fg(BRAND_TEAL).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(self.username.to_string(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(
                format!("{} K$", self.k_dollars),
                Style::default().fg(BRAND_TEAL),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled("Ctrl+L: Logout", separator_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
