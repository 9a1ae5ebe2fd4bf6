use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::App;
use crate::ui::login::LoginIntent;
use crate::ui::router::View;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match app.view() {
        View::Login => handle_login_key(app, key),
        View::Register => handle_register_key(app, key),
        view => handle_chrome_key(app, view, key),
    }
}

fn handle_login_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'r') {
        app.set_view(View::Register);
        return;
    }
    match key.code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.dispatch_login(LoginIntent::FocusNext)
        }
        KeyCode::Enter => {
            app.submit_login();
        }
        KeyCode::Backspace => app.dispatch_login(LoginIntent::Backspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch_login(LoginIntent::Input(ch))
        }
        _ => {}
    }
}

fn handle_register_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.set_view(View::Login),
        KeyCode::Enter => app.submit_registration(),
        _ if is_ctrl_char(key, 'l') => app.set_view(View::Login),
        _ => {}
    }
}

fn handle_chrome_key(app: &mut App, view: View, key: KeyEvent) {
    if is_ctrl_char(key, 'l') {
        app.logout();
        return;
    }

    match key.code {
        KeyCode::Char(ch @ '1'..='4') => {
            let index = ch.to_digit(10).unwrap_or(1) as usize - 1;
            app.set_view(View::TABS[index]);
        }
        KeyCode::Left => app.cycle_tab(-1),
        KeyCode::Right => app.cycle_tab(1),
        KeyCode::Up => match view {
            View::Rewards => app.move_reward_selection(-1),
            View::Learn => app.move_lesson_selection(-1),
            _ => {}
        },
        KeyCode::Down => match view {
            View::Rewards => app.move_reward_selection(1),
            View::Learn => app.move_lesson_selection(1),
            _ => {}
        },
        KeyCode::Enter => match view {
            View::Rewards => {
                app.redeem_selected();
            }
            View::Learn => app.open_selected_lesson(),
            _ => {}
        },
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
