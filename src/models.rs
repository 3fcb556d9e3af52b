use std::collections::HashMap;

/// The two supported age bands. Module availability is decided purely
/// from this value, never from the raw age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserKind {
    PreStudent,
    Student,
}

impl UserKind {
    pub fn label(&self) -> &'static str {
        match self {
            UserKind::PreStudent => "Pre-Student (Ages 3-5)",
            UserKind::Student => "Student (Ages 6-8)",
        }
    }

    /// Age 5 and under is pre-student, everyone else is student.
    pub fn from_age(age: u8) -> Self {
        if age <= 5 {
            UserKind::PreStudent
        } else {
            UserKind::Student
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSetting {
    Light,
    Dark,
}

impl ThemeSetting {
    pub fn toggled(&self) -> Self {
        match self {
            ThemeSetting::Light => ThemeSetting::Dark,
            ThemeSetting::Dark => ThemeSetting::Light,
        }
    }
}

/// Placeholder only: the selector is rendered disabled and nothing ever
/// switches away from English.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Spanish,
    French,
}

impl Language {
    pub fn label(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::French => "French",
        }
    }
}

/// One progress entry per module id. Overwritten wholesale on quiz
/// completion, never merged or deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleProgress {
    pub completed: bool,
    pub stars: u8,
}

#[derive(Debug, Clone)]
pub struct UserProfile {
    pub name: String,
    pub age: u8,
    pub kind: UserKind,
    pub progress: HashMap<String, ModuleProgress>,
}

impl UserProfile {
    /// The logged-out default. Guest is pre-student, age 4, no progress.
    pub fn guest() -> Self {
        Self {
            name: "Guest".to_string(),
            age: 4,
            kind: UserKind::PreStudent,
            progress: HashMap::new(),
        }
    }
}

/// Field-wise update for `SessionStore::update_user`. `None` fields are
/// left untouched.
#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub age: Option<u8>,
    pub kind: Option<UserKind>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParentalControls {
    pub difficulty_level: u8,
    pub time_limit_minutes: u8,
    pub enabled: bool,
}

impl Default for ParentalControls {
    fn default() -> Self {
        Self {
            difficulty_level: 1,
            time_limit_minutes: 30,
            enabled: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ParentalPatch {
    pub difficulty_level: Option<u8>,
    pub time_limit_minutes: Option<u8>,
    pub enabled: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guest_defaults() {
        let guest = UserProfile::guest();
        assert_eq!(guest.name, "Guest");
        assert_eq!(guest.age, 4);
        assert_eq!(guest.kind, UserKind::PreStudent);
        assert!(guest.progress.is_empty());
    }

    #[test]
    fn test_kind_from_age_boundary() {
        assert_eq!(UserKind::from_age(3), UserKind::PreStudent);
        assert_eq!(UserKind::from_age(5), UserKind::PreStudent);
        assert_eq!(UserKind::from_age(6), UserKind::Student);
        assert_eq!(UserKind::from_age(10), UserKind::Student);
    }

    #[test]
    fn test_theme_toggle_round_trip() {
        assert_eq!(ThemeSetting::Light.toggled(), ThemeSetting::Dark);
        assert_eq!(ThemeSetting::Light.toggled().toggled(), ThemeSetting::Light);
    }

    #[test]
    fn test_parental_defaults() {
        let controls = ParentalControls::default();
        assert_eq!(controls.difficulty_level, 1);
        assert_eq!(controls.time_limit_minutes, 30);
        assert!(controls.enabled);
    }
}
