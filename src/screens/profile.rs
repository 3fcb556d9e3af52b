use crate::models::{ProfilePatch, UserKind};
use crate::screens::ScreenEvent;
use crate::store::SessionStore;
use crossterm::event::{KeyCode, KeyEvent};

pub const AVATARS: [&str; 7] = ["👦", "👧", "👨", "👩", "🧒", "👶", "🧑"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Age,
    Avatar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileMode {
    View,
    Edit,
}

/// Profile card with an edit mode for name, age and avatar. The avatar
/// is cosmetic and lives only for the session.
#[derive(Debug, Clone)]
pub struct ProfileScreen {
    pub mode: ProfileMode,
    pub name_input: String,
    pub age_input: String,
    pub avatar_index: usize,
    pub focused: ProfileField,
}

impl ProfileScreen {
    pub fn new(store: &SessionStore) -> Self {
        Self {
            mode: ProfileMode::View,
            name_input: store.profile.name.clone(),
            age_input: store.profile.age.to_string(),
            avatar_index: 0,
            focused: ProfileField::Name,
        }
    }

    pub fn avatar(&self) -> &'static str {
        AVATARS[self.avatar_index]
    }

    pub fn handle_input(&mut self, key: KeyEvent, store: &mut SessionStore) -> ScreenEvent {
        match self.mode {
            ProfileMode::View => match key.code {
                KeyCode::Char('e') => {
                    self.name_input = store.profile.name.clone();
                    self.age_input = store.profile.age.to_string();
                    self.focused = ProfileField::Name;
                    self.mode = ProfileMode::Edit;
                    ScreenEvent::Stay
                }
                KeyCode::Char('m') | KeyCode::Esc => ScreenEvent::GoHome,
                _ => ScreenEvent::Stay,
            },
            ProfileMode::Edit => match key.code {
                KeyCode::Tab | KeyCode::Down => {
                    self.focused = match self.focused {
                        ProfileField::Name => ProfileField::Age,
                        ProfileField::Age => ProfileField::Avatar,
                        ProfileField::Avatar => ProfileField::Name,
                    };
                    ScreenEvent::Stay
                }
                KeyCode::Left if self.focused == ProfileField::Avatar => {
                    self.avatar_index = (self.avatar_index + AVATARS.len() - 1) % AVATARS.len();
                    ScreenEvent::Stay
                }
                KeyCode::Right if self.focused == ProfileField::Avatar => {
                    self.avatar_index = (self.avatar_index + 1) % AVATARS.len();
                    ScreenEvent::Stay
                }
                KeyCode::Backspace => {
                    match self.focused {
                        ProfileField::Name => self.name_input.pop(),
                        ProfileField::Age => self.age_input.pop(),
                        ProfileField::Avatar => None,
                    };
                    ScreenEvent::Stay
                }
                KeyCode::Char(c) => {
                    match self.focused {
                        ProfileField::Name => self.name_input.push(c),
                        ProfileField::Age => {
                            if c.is_ascii_digit() && self.age_input.len() < 2 {
                                self.age_input.push(c);
                            }
                        }
                        ProfileField::Avatar => {}
                    }
                    ScreenEvent::Stay
                }
                KeyCode::Enter => {
                    self.save(store);
                    self.mode = ProfileMode::View;
                    ScreenEvent::Stay
                }
                KeyCode::Esc => {
                    self.mode = ProfileMode::View;
                    ScreenEvent::Stay
                }
                _ => ScreenEvent::Stay,
            },
        }
    }

    fn save(&self, store: &mut SessionStore) {
        let name = self.name_input.trim();
        let age = self.age_input.parse::<u8>().ok().map(|a| a.clamp(3, 10));
        store.update_user(ProfilePatch {
            name: (name.len() >= 2).then(|| name.to_string()),
            age,
            kind: age.map(UserKind::from_age),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn type_str(screen: &mut ProfileScreen, store: &mut SessionStore, s: &str) {
        for c in s.chars() {
            screen.handle_input(key(KeyCode::Char(c)), store);
        }
    }

    #[test]
    fn test_edit_and_save_updates_profile() {
        let mut store = SessionStore::new();
        let mut screen = ProfileScreen::new(&store);
        screen.handle_input(key(KeyCode::Char('e')), &mut store);
        for _ in 0.."Guest".len() {
            screen.handle_input(key(KeyCode::Backspace), &mut store);
        }
        type_str(&mut screen, &mut store, "Noah");
        screen.handle_input(key(KeyCode::Tab), &mut store);
        screen.handle_input(key(KeyCode::Backspace), &mut store);
        type_str(&mut screen, &mut store, "8");
        screen.handle_input(key(KeyCode::Enter), &mut store);
        assert_eq!(screen.mode, ProfileMode::View);
        assert_eq!(store.profile.name, "Noah");
        assert_eq!(store.profile.age, 8);
        assert_eq!(store.profile.kind, UserKind::Student);
    }

    #[test]
    fn test_too_short_name_keeps_old_name() {
        let mut store = SessionStore::new();
        let mut screen = ProfileScreen::new(&store);
        screen.handle_input(key(KeyCode::Char('e')), &mut store);
        for _ in 0.."Guest".len() {
            screen.handle_input(key(KeyCode::Backspace), &mut store);
        }
        type_str(&mut screen, &mut store, "N");
        screen.handle_input(key(KeyCode::Enter), &mut store);
        assert_eq!(store.profile.name, "Guest");
    }

    #[test]
    fn test_escape_cancels_edit() {
        let mut store = SessionStore::new();
        let mut screen = ProfileScreen::new(&store);
        screen.handle_input(key(KeyCode::Char('e')), &mut store);
        type_str(&mut screen, &mut store, "xyz");
        screen.handle_input(key(KeyCode::Esc), &mut store);
        assert_eq!(screen.mode, ProfileMode::View);
        assert_eq!(store.profile.name, "Guest");
    }

    #[test]
    fn test_avatar_cycles_both_ways() {
        let mut store = SessionStore::new();
        let mut screen = ProfileScreen::new(&store);
        screen.handle_input(key(KeyCode::Char('e')), &mut store);
        screen.handle_input(key(KeyCode::Tab), &mut store);
        screen.handle_input(key(KeyCode::Tab), &mut store);
        assert_eq!(screen.focused, ProfileField::Avatar);
        screen.handle_input(key(KeyCode::Left), &mut store);
        assert_eq!(screen.avatar_index, AVATARS.len() - 1);
        screen.handle_input(key(KeyCode::Right), &mut store);
        assert_eq!(screen.avatar_index, 0);
    }

    #[test]
    fn test_view_mode_goes_home() {
        let mut store = SessionStore::new();
        let mut screen = ProfileScreen::new(&store);
        assert_eq!(
            screen.handle_input(key(KeyCode::Esc), &mut store),
            ScreenEvent::GoHome
        );
    }
}
