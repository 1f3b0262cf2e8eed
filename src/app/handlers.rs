//! Key event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, Focus};

impl App {
    /// Dispatch a key press. Global bindings run first, then the focused
    /// component's bindings.
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Global keybinds (always active)
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit();
                return;
            }
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.create_conversation();
                return;
            }
            KeyCode::Char('b') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.toggle_sidebar();
                return;
            }
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.delete_active();
                return;
            }
            KeyCode::Tab => {
                self.cycle_focus();
                return;
            }
            KeyCode::Esc => {
                if self.is_narrow() && self.sidebar_visible {
                    self.sidebar_visible = false;
                }
                self.focus = Focus::Input;
                self.mark_dirty();
                return;
            }
            KeyCode::PageUp => {
                self.scroll_up();
                return;
            }
            KeyCode::PageDown => {
                self.scroll_down();
                return;
            }
            _ => {}
        }

        match self.focus {
            Focus::Input => self.handle_input_key(key),
            Focus::Sidebar => self.handle_sidebar_key(key),
        }
    }

    fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Input if self.sidebar_visible => Focus::Sidebar,
            Focus::Input => Focus::Input,
            Focus::Sidebar => Focus::Input,
        };
        self.mark_dirty();
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_input(),
            KeyCode::Backspace => {
                self.input_box.backspace();
                self.mark_dirty();
            }
            KeyCode::Delete => {
                self.input_box.delete_char();
                self.mark_dirty();
            }
            KeyCode::Left => {
                self.input_box.move_cursor_left();
                self.mark_dirty();
            }
            KeyCode::Right => {
                self.input_box.move_cursor_right();
                self.mark_dirty();
            }
            KeyCode::Home => {
                self.input_box.move_cursor_home();
                self.mark_dirty();
            }
            KeyCode::End => {
                self.input_box.move_cursor_end();
                self.mark_dirty();
            }
            KeyCode::Up => self.scroll_up(),
            KeyCode::Down => self.scroll_down(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input_box.insert_char(c);
                self.mark_dirty();
            }
            _ => {}
        }
    }

    fn handle_sidebar_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.sidebar_move_up(),
            KeyCode::Down | KeyCode::Char('j') => self.sidebar_move_down(),
            KeyCode::Enter => self.open_selected(),
            KeyCode::Char('n') => self.create_conversation(),
            KeyCode::Char('d') | KeyCode::Delete => self.delete_selected(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::responder::SequenceResponder;
    use std::sync::Arc;

    fn test_app() -> App {
        let responder = Arc::new(SequenceResponder::new(vec!["stub reply"]));
        let mut app = App::with_config(Config::default(), responder);
        app.update_terminal_dimensions(100, 30);
        app
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(press(KeyCode::Char(c)));
        }
    }

    #[tokio::test]
    async fn test_ctrl_c_quits() {
        let mut app = test_app();
        app.handle_key(ctrl('c'));
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_typing_and_enter_submits() {
        let mut app = test_app();
        type_text(&mut app, "What is 2+2?");
        app.handle_key(press(KeyCode::Enter));

        let current = app.controller.current_conversation();
        assert_eq!(current.message_count(), 2);
        assert_eq!(current.messages[1].content, "What is 2+2?");
        assert_eq!(current.title, "What is 2+2?");
    }

    #[tokio::test]
    async fn test_ctrl_n_creates_conversation() {
        let mut app = test_app();
        app.handle_key(ctrl('n'));
        assert_eq!(app.controller.conversations().len(), 2);
        assert_eq!(app.focus, Focus::Input);
    }

    #[tokio::test]
    async fn test_sidebar_navigation_and_selection() {
        let mut app = test_app();
        let first_id = app.controller.active_conversation_id().to_string();
        app.handle_key(ctrl('n'));

        app.handle_key(press(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Sidebar);

        app.handle_key(press(KeyCode::Up));
        app.handle_key(press(KeyCode::Enter));
        assert_eq!(app.controller.active_conversation_id(), first_id);
        assert_eq!(app.focus, Focus::Input);
    }

    #[tokio::test]
    async fn test_sidebar_delete_key() {
        let mut app = test_app();
        app.handle_key(ctrl('n'));
        app.handle_key(press(KeyCode::Tab));
        app.handle_key(press(KeyCode::Char('d')));
        assert_eq!(app.controller.conversations().len(), 1);
    }

    #[tokio::test]
    async fn test_ctrl_d_deletes_active_conversation() {
        let mut app = test_app();
        let first_id = app.controller.active_conversation_id().to_string();
        app.handle_key(ctrl('n'));
        app.handle_key(ctrl('d'));
        assert_eq!(app.controller.conversations().len(), 1);
        assert_eq!(app.controller.active_conversation_id(), first_id);
    }

    #[tokio::test]
    async fn test_ctrl_chars_do_not_insert() {
        let mut app = test_app();
        app.handle_key(ctrl('b')); // toggles sidebar, must not type 'b'
        assert!(app.input_box.is_empty());
    }

    #[tokio::test]
    async fn test_esc_closes_narrow_overlay() {
        let mut app = test_app();
        app.update_terminal_dimensions(50, 20);
        app.sidebar_visible = true;
        app.handle_key(press(KeyCode::Esc));
        assert!(!app.sidebar_visible);
        assert_eq!(app.focus, Focus::Input);
    }
}
