use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crate::App;
use super::Focus;

impl App {
    /// Route a key press to the focused widget. Returns `false` to exit.
    pub fn handle_key_input(&mut self, key: KeyEvent) -> Result<bool> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(false);
        }

        match key.code {
            KeyCode::Tab => {
                self.set_focus(self.focus.next());
                return Ok(true);
            }
            KeyCode::BackTab => {
                self.set_focus(self.focus.previous());
                return Ok(true);
            }
            KeyCode::Esc => {
                self.set_focus(Focus::None);
                return Ok(true);
            }
            _ => {}
        }

        match self.focus {
            Focus::None => return Ok(self.handle_dashboard_key(key.code)),
            Focus::Search => self.handle_search_key(key.code)?,
            Focus::Feedback => self.handle_feedback_key(key.code),
        }
        Ok(true) // Continue running
    }

    fn handle_dashboard_key(&mut self, key_code: KeyCode) -> bool {
        match key_code {
            KeyCode::Char('q') => return false,
            KeyCode::Char('/') | KeyCode::Char('s') => self.set_focus(Focus::Search),
            KeyCode::Char('f') => self.set_focus(Focus::Feedback),
            _ => {}
        }
        true
    }

    fn handle_search_key(&mut self, key_code: KeyCode) -> Result<()> {
        match key_code {
            KeyCode::Char(ch) => {
                self.search.focus();
                self.search.push_char(ch);
            }
            KeyCode::Backspace => self.search.pop_char(),
            KeyCode::Up => self.search.highlight_previous(),
            KeyCode::Down => self.search.highlight_next(),
            KeyCode::Enter => {
                // Using the store outside its provider is a bug, so it aborts the app
                if self.search.select_highlighted()?.is_some() {
                    self.focus = Focus::None;
                }
            }
            _ => return Ok(()),
        }
        self.request_redraw();
        Ok(())
    }

    fn handle_feedback_key(&mut self, key_code: KeyCode) {
        match key_code {
            KeyCode::Char(ch) => self.feedback.push_char(ch),
            KeyCode::Backspace => self.feedback.pop_char(),
            KeyCode::Enter => {
                // The submit button is disabled while a request is in flight
                if !self.feedback.is_submitting() {
                    self.submit_feedback();
                }
            }
            _ => return,
        }
        self.request_redraw();
    }
}
