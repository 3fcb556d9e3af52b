use crate::models::{ProfilePatch, UserKind};
use crate::screens::ScreenEvent;
use crate::store::SessionStore;
use crossterm::event::{KeyCode, KeyEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Name,
    Age,
}

/// The login form. The only validation in the whole app lives here: a
/// required-field check on the name. The age is clamped, never rejected.
#[derive(Debug, Clone)]
pub struct LoginScreen {
    pub name_input: String,
    pub age_input: String,
    pub focused: LoginField,
    pub message: Option<String>,
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginScreen {
    pub fn new() -> Self {
        Self {
            name_input: String::new(),
            age_input: String::new(),
            focused: LoginField::Name,
            message: None,
        }
    }

    pub fn handle_input(&mut self, key: KeyEvent, store: &mut SessionStore) -> ScreenEvent {
        match key.code {
            KeyCode::Tab | KeyCode::Up | KeyCode::Down => {
                self.focused = match self.focused {
                    LoginField::Name => LoginField::Age,
                    LoginField::Age => LoginField::Name,
                };
                ScreenEvent::Stay
            }
            KeyCode::Backspace => {
                match self.focused {
                    LoginField::Name => self.name_input.pop(),
                    LoginField::Age => self.age_input.pop(),
                };
                ScreenEvent::Stay
            }
            KeyCode::Char(c) => {
                match self.focused {
                    LoginField::Name => self.name_input.push(c),
                    LoginField::Age => {
                        if c.is_ascii_digit() && self.age_input.len() < 2 {
                            self.age_input.push(c);
                        }
                    }
                }
                ScreenEvent::Stay
            }
            KeyCode::Enter => self.submit(store),
            KeyCode::Esc => ScreenEvent::Quit,
            _ => ScreenEvent::Stay,
        }
    }

    fn submit(&mut self, store: &mut SessionStore) -> ScreenEvent {
        let name = self.name_input.trim();
        if name.len() < 2 {
            self.message = Some("Name must be at least 2 characters.".to_string());
            return ScreenEvent::Stay;
        }
        let Ok(age) = self.age_input.parse::<u8>() else {
            self.message = Some("Please enter an age between 3 and 10.".to_string());
            return ScreenEvent::Stay;
        };
        let age = age.clamp(3, 10);
        store.update_user(ProfilePatch {
            name: Some(name.to_string()),
            age: Some(age),
            kind: Some(UserKind::from_age(age)),
        });
        self.message = Some(format!("Welcome, {}! You're now logged in.", name));
        ScreenEvent::LoggedIn
    }
}
