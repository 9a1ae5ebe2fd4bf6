use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::login::LoginField;
use crate::ui::theme::{BRAND_TEAL, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};

pub fn render(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let form = app.login_form();
    let [title, email, password, hints] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(0),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(
                "Welcome back",
                Style::default().fg(BRAND_TEAL).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Log in to keep your streak going.",
                Style::default().fg(MUTED_TEXT),
            )),
        ]),
        title,
    );

    let fields = [
        (LoginField::Email, "Email", form.email.clone(), email),
        (LoginField::Password, "Password", form.masked_password(), password),
    ];
    for (field, label, value, rect) in fields {
        let focused = form.focused == field;
        let border = if focused { BRAND_TEAL } else { GLOBAL_BORDER };
        let input = Paragraph::new(value.clone())
            .style(Style::default().fg(HEADER_TEXT))
            .block(
                Block::default()
                    .title(label)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border)),
            );
        frame.render_widget(input, rect);

        if focused && rect.width > 2 && rect.height > 2 {
            let offset = cursor_offset(&value, rect.width);
            frame.set_cursor_position(Position::new(rect.x + 1 + offset, rect.y + 1));
        }
    }

    frame.render_widget(
        Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Tab: Next field │ Enter: Log in │ Ctrl+R: Register │ Ctrl+Q: Quit",
                Style::default().fg(MUTED_TEXT),
            )),
        ]),
        hints,
    );
}

/// Column of the cursor inside a bordered input `field_width` wide, kept on
/// the last inner column once the value overflows.
fn cursor_offset(value: &str, field_width: u16) -> u16 {
    let max = field_width.saturating_sub(3);
    u16::try_from(Line::from(value).width()).map_or(max, |width| width.min(max))
}
