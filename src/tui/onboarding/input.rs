use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::types::*;
use super::wizard::OnboardingWizard;

impl OnboardingWizard {
    /// Handle a key press for the focused control
    /// Returns `WizardAction` indicating what the app should do
    pub fn handle_key(&mut self, event: KeyEvent) -> WizardAction {
        // Global keys first
        if event.code == KeyCode::Esc
            || (event.code == KeyCode::Char('c') && event.modifiers.contains(KeyModifiers::CONTROL))
        {
            return WizardAction::Cancel;
        }
        match event.code {
            KeyCode::Tab => {
                self.focus_next();
                return WizardAction::None;
            }
            KeyCode::BackTab => {
                self.focus_prev();
                return WizardAction::None;
            }
            _ => {}
        }

        match self.focus {
            Focus::Username => self.handle_username_key(event),
            Focus::Language => self.handle_language_key(event),
            Focus::Size => self.handle_size_key(event),
            Focus::Actions => self.handle_actions_key(event),
        }
    }

    /// Handle a paste event. Only the username field accepts text.
    pub fn handle_paste(&mut self, text: &str) {
        // First line only, no stray newlines
        let clean = text.split(['\r', '\n']).next().unwrap_or("");
        if clean.is_empty() || self.focus != Focus::Username {
            return;
        }
        tracing::debug!("[paste] username pasted ({} chars)", clean.len());
        let mut draft = self.username.clone();
        draft.push_str(clean);
        self.set_username_draft(draft);
    }

    fn handle_username_key(&mut self, event: KeyEvent) -> WizardAction {
        match event.code {
            KeyCode::Char(c) if !event.modifiers.contains(KeyModifiers::CONTROL) => {
                let mut draft = self.username.clone();
                draft.push(c);
                self.set_username_draft(draft);
            }
            KeyCode::Backspace => {
                let mut draft = self.username.clone();
                draft.pop();
                self.set_username_draft(draft);
            }
            KeyCode::Enter => {
                self.confirm_username();
                self.focus_revealed(Focus::Language);
            }
            _ => {}
        }
        WizardAction::None
    }

    fn handle_language_key(&mut self, event: KeyEvent) -> WizardAction {
        let count = LANGUAGE_OPTIONS.len();
        match event.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.language_cursor = self.language_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.language_cursor = (self.language_cursor + 1).min(count - 1);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let code = LANGUAGE_OPTIONS[self.language_cursor.min(count - 1)].value;
                self.select_language(code);
                self.focus_revealed(Focus::Size);
            }
            _ => {}
        }
        WizardAction::None
    }

    fn handle_size_key(&mut self, event: KeyEvent) -> WizardAction {
        let count = InstanceSize::CHOICES.len();
        match event.code {
            KeyCode::Up | KeyCode::Left | KeyCode::Char('k') | KeyCode::Char('h') => {
                self.size_cursor = self.size_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Right | KeyCode::Char('j') | KeyCode::Char('l') => {
                self.size_cursor = (self.size_cursor + 1).min(count - 1);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let size = InstanceSize::CHOICES[self.size_cursor.min(count - 1)];
                self.select_instance_size(size);
                self.focus_revealed(Focus::Actions);
            }
            _ => {}
        }
        WizardAction::None
    }

    fn handle_actions_key(&mut self, event: KeyEvent) -> WizardAction {
        let count = ConfirmButton::ALL.len();
        match event.code {
            KeyCode::Up | KeyCode::Left | KeyCode::Char('k') | KeyCode::Char('h') => {
                self.button_cursor = self.button_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Right | KeyCode::Char('j') | KeyCode::Char('l') => {
                self.button_cursor = (self.button_cursor + 1).min(count - 1);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                match ConfirmButton::ALL[self.button_cursor.min(count - 1)] {
                    ConfirmButton::Join => return self.join(),
                    ConfirmButton::AnotherInstance => self.another_instance(),
                    ConfirmButton::BackUp => self.back_to_start(),
                }
            }
            _ => {}
        }
        WizardAction::None
    }
}
