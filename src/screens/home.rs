use crate::catalog::{is_available, CATALOG};
use crate::screens::ScreenEvent;
use crate::store::SessionStore;
use crossterm::event::{KeyCode, KeyEvent};

/// The card grid plus the side actions (profile, parental controls,
/// theme toggle, log out).
#[derive(Debug, Clone)]
pub struct HomeScreen {
    pub selected: usize,
    pub locked_notice: Option<String>,
}

impl Default for HomeScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeScreen {
    pub fn new() -> Self {
        Self {
            selected: 0,
            locked_notice: None,
        }
    }

    pub fn handle_input(&mut self, key: KeyEvent, store: &mut SessionStore) -> ScreenEvent {
        match key.code {
            KeyCode::Left | KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                self.locked_notice = None;
                ScreenEvent::Stay
            }
            KeyCode::Right | KeyCode::Down => {
                if self.selected < CATALOG.len() - 1 {
                    self.selected += 1;
                }
                self.locked_notice = None;
                ScreenEvent::Stay
            }
            KeyCode::Enter => {
                let module = &CATALOG[self.selected];
                if is_available(store.profile.kind, module.age_group) {
                    ScreenEvent::OpenModule(module.id)
                } else {
                    self.locked_notice = Some(format!(
                        "{} is for {}",
                        module.title,
                        module.age_group.band_label()
                    ));
                    ScreenEvent::Stay
                }
            }
            KeyCode::Char('p') => ScreenEvent::OpenProfile,
            KeyCode::Char('c') => ScreenEvent::OpenParental,
            KeyCode::Char('t') => {
                store.toggle_theme();
                ScreenEvent::Stay
            }
            KeyCode::Char('l') => {
                store.log_out();
                ScreenEvent::LoggedOut
            }
            KeyCode::Char('q') | KeyCode::Esc => ScreenEvent::Quit,
            _ => ScreenEvent::Stay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ModuleId;
    use crate::models::{ProfilePatch, ThemeSetting, UserKind};
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn student_store() -> SessionStore {
        let mut store = SessionStore::new();
        store.update_user(ProfilePatch {
            name: Some("Mia".to_string()),
            age: Some(7),
            kind: Some(UserKind::Student),
        });
        store
    }

    #[test]
    fn test_enter_opens_available_module() {
        let mut store = student_store();
        let mut screen = HomeScreen::new();
        let event = screen.handle_input(key(KeyCode::Enter), &mut store);
        assert_eq!(event, ScreenEvent::OpenModule(ModuleId::Alphabet));
    }

    #[test]
    fn test_locked_module_shows_notice_and_stays() {
        // Default store is a pre-student Guest; Math (index 2) is locked.
        let mut store = SessionStore::new();
        let mut screen = HomeScreen::new();
        screen.selected = 2;
        let event = screen.handle_input(key(KeyCode::Enter), &mut store);
        assert_eq!(event, ScreenEvent::Stay);
        assert!(screen.locked_notice.as_deref().unwrap().contains("Ages 6-8"));
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut store = student_store();
        let mut screen = HomeScreen::new();
        screen.handle_input(key(KeyCode::Left), &mut store);
        assert_eq!(screen.selected, 0);
        for _ in 0..10 {
            screen.handle_input(key(KeyCode::Right), &mut store);
        }
        assert_eq!(screen.selected, CATALOG.len() - 1);
    }

    #[test]
    fn test_theme_toggle_key() {
        let mut store = student_store();
        let mut screen = HomeScreen::new();
        screen.handle_input(key(KeyCode::Char('t')), &mut store);
        assert_eq!(store.theme, ThemeSetting::Dark);
    }

    #[test]
    fn test_log_out_resets_profile() {
        let mut store = student_store();
        store.update_progress("alphabet", true, 2);
        let mut screen = HomeScreen::new();
        let event = screen.handle_input(key(KeyCode::Char('l')), &mut store);
        assert_eq!(event, ScreenEvent::LoggedOut);
        assert_eq!(store.profile.name, "Guest");
        assert!(store.profile.progress.is_empty());
    }

    #[test]
    fn test_side_actions() {
        let mut store = student_store();
        let mut screen = HomeScreen::new();
        assert_eq!(
            screen.handle_input(key(KeyCode::Char('p')), &mut store),
            ScreenEvent::OpenProfile
        );
        assert_eq!(
            screen.handle_input(key(KeyCode::Char('c')), &mut store),
            ScreenEvent::OpenParental
        );
    }
}
