use crate::{App, AppState};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

pub fn handle_chat_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc => {
            app.state = AppState::QuitConfirm;
        }
        KeyCode::Enter => {
            // Shift+Enter keeps typing; plain Enter sends. The key event
            // is consumed either way, so no stray newline lands in the
            // buffer on send.
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.widget.push_newline();
            } else {
                app.widget.submit();
            }
        }
        KeyCode::PageUp => app.widget.scroll_up(),
        KeyCode::PageDown => app.widget.scroll_down(),
        KeyCode::Backspace => app.widget.backspace(),
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'c' => app.state = AppState::QuitConfirm,
                    'r' => app.widget.reset(),
                    'o' => app.widget.minimize(Instant::now()),
                    'x' => app.widget.close(Instant::now()),
                    _ => {}
                }
            } else {
                app.widget.push_char(c);
            }
        }
        _ => {}
    }
}

pub fn handle_quit_confirm_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => {
            app.state = AppState::Quit;
        }
        KeyCode::Char('n') | KeyCode::Esc => {
            app.state = AppState::Chat;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            handle_chat_input(press(KeyCode::Char(c), KeyModifiers::NONE), app);
        }
    }

    #[test]
    fn test_plain_enter_submits() {
        let mut app = App::new();
        type_text(&mut app, "Hello world");
        handle_chat_input(press(KeyCode::Enter, KeyModifiers::NONE), &mut app);

        assert_eq!(app.widget.transcript.len(), 1);
        assert_eq!(app.widget.transcript.messages()[0].text, "Hello world");
        assert_eq!(app.widget.input, "");
    }

    #[test]
    fn test_shift_enter_inserts_newline_instead_of_submitting() {
        let mut app = App::new();
        type_text(&mut app, "line1");
        handle_chat_input(press(KeyCode::Enter, KeyModifiers::SHIFT), &mut app);
        type_text(&mut app, "line2");

        // Still three canned messages: nothing was sent
        assert_eq!(app.widget.transcript.len(), 3);
        assert_eq!(app.widget.input, "line1\nline2");

        handle_chat_input(press(KeyCode::Enter, KeyModifiers::NONE), &mut app);
        assert_eq!(app.widget.transcript.len(), 1);
        assert_eq!(app.widget.transcript.messages()[0].text, "line1\nline2");
    }

    #[test]
    fn test_ctrl_r_resets() {
        let mut app = App::new();
        type_text(&mut app, "hi");
        handle_chat_input(press(KeyCode::Enter, KeyModifiers::NONE), &mut app);
        assert_eq!(app.widget.transcript.len(), 1);

        handle_chat_input(press(KeyCode::Char('r'), KeyModifiers::CONTROL), &mut app);
        assert_eq!(app.widget.transcript.len(), 3);
        assert_eq!(app.widget.input, "");
    }

    #[test]
    fn test_ctrl_o_pulses_minimize() {
        let mut app = App::new();
        handle_chat_input(press(KeyCode::Char('o'), KeyModifiers::CONTROL), &mut app);
        assert_eq!(app.widget.modal.scale, 0.8);
        assert_eq!(app.widget.modal.opacity, 0.5);
    }

    #[test]
    fn test_ctrl_x_pulses_close() {
        let mut app = App::new();
        handle_chat_input(press(KeyCode::Char('x'), KeyModifiers::CONTROL), &mut app);
        assert!(app.widget.modal.is_hidden());
    }

    #[test]
    fn test_esc_opens_quit_confirm_and_n_returns() {
        let mut app = App::new();
        handle_chat_input(press(KeyCode::Esc, KeyModifiers::NONE), &mut app);
        assert_eq!(app.state, AppState::QuitConfirm);

        handle_quit_confirm_input(press(KeyCode::Char('n'), KeyModifiers::NONE), &mut app);
        assert_eq!(app.state, AppState::Chat);

        handle_chat_input(press(KeyCode::Esc, KeyModifiers::NONE), &mut app);
        handle_quit_confirm_input(press(KeyCode::Char('y'), KeyModifiers::NONE), &mut app);
        assert_eq!(app.state, AppState::Quit);
    }
}
