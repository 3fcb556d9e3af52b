use crate::logger;
use crate::models::{
    Language, ModuleProgress, ParentalControls, ParentalPatch, ProfilePatch, ThemeSetting,
    UserProfile,
};

/// The whole mutable session state: one profile, one theme, one language,
/// one set of parental controls. Lives for the process lifetime only.
///
/// Every mutator is a total function; callers are trusted to pass shaped
/// data and out-of-range numbers are clamped rather than rejected.
#[derive(Debug, Clone)]
pub struct SessionStore {
    pub profile: UserProfile,
    pub theme: ThemeSetting,
    pub language: Language,
    pub parental: ParentalControls,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            profile: UserProfile::guest(),
            theme: ThemeSetting::Light,
            language: Language::English,
            parental: ParentalControls::default(),
        }
    }

    /// Merge the given fields into the current profile.
    pub fn update_user(&mut self, patch: ProfilePatch) {
        if let Some(name) = patch.name {
            self.profile.name = name;
        }
        if let Some(age) = patch.age {
            self.profile.age = age.clamp(3, 10);
        }
        if let Some(kind) = patch.kind {
            self.profile.kind = kind;
        }
    }

    /// Overwrite (never merge) the progress entry for `module_id`.
    pub fn update_progress(&mut self, module_id: &str, completed: bool, stars: u8) {
        let entry = ModuleProgress {
            completed,
            stars: stars.min(3),
        };
        self.profile.progress.insert(module_id.to_string(), entry);
        logger::log(&format!(
            "progress: {} completed={} stars={}",
            module_id, completed, entry.stars
        ));
    }

    pub fn update_theme(&mut self, theme: ThemeSetting) {
        self.theme = theme;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn update_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn update_parental(&mut self, patch: ParentalPatch) {
        if let Some(level) = patch.difficulty_level {
            self.parental.difficulty_level = level.clamp(1, 3);
        }
        if let Some(minutes) = patch.time_limit_minutes {
            self.parental.time_limit_minutes = minutes.clamp(10, 60);
        }
        if let Some(enabled) = patch.enabled {
            self.parental.enabled = enabled;
        }
    }

    /// Back to the Guest defaults: pre-student, age 4, empty progress.
    pub fn log_out(&mut self) {
        self.profile = UserProfile::guest();
        logger::log("logged out");
    }

    pub fn is_logged_in(&self) -> bool {
        self.profile.name != "Guest"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserKind;

    fn logged_in_store() -> SessionStore {
        let mut store = SessionStore::new();
        store.update_user(ProfilePatch {
            name: Some("Mia".to_string()),
            age: Some(7),
            kind: Some(UserKind::Student),
        });
        store
    }

    #[test]
    fn test_update_user_merges_fields() {
        let mut store = logged_in_store();
        store.update_user(ProfilePatch {
            age: Some(8),
            ..ProfilePatch::default()
        });
        assert_eq!(store.profile.name, "Mia");
        assert_eq!(store.profile.age, 8);
        assert_eq!(store.profile.kind, UserKind::Student);
    }

    #[test]
    fn test_update_user_clamps_age() {
        let mut store = SessionStore::new();
        store.update_user(ProfilePatch {
            age: Some(99),
            ..ProfilePatch::default()
        });
        assert_eq!(store.profile.age, 10);
        store.update_user(ProfilePatch {
            age: Some(1),
            ..ProfilePatch::default()
        });
        assert_eq!(store.profile.age, 3);
    }

    #[test]
    fn test_update_progress_overwrites() {
        let mut store = logged_in_store();
        store.update_progress("counting", true, 2);
        store.update_progress("counting", true, 1);
        assert_eq!(
            store.profile.progress.get("counting"),
            Some(&ModuleProgress {
                completed: true,
                stars: 1
            })
        );
        assert_eq!(store.profile.progress.len(), 1);
    }

    #[test]
    fn test_update_progress_clamps_stars() {
        let mut store = logged_in_store();
        store.update_progress("alphabet", true, 9);
        assert_eq!(store.profile.progress["alphabet"].stars, 3);
    }

    #[test]
    fn test_log_out_resets_to_guest() {
        let mut store = logged_in_store();
        store.update_progress("alphabet", true, 3);
        store.log_out();
        assert_eq!(store.profile.name, "Guest");
        assert_eq!(store.profile.age, 4);
        assert_eq!(store.profile.kind, UserKind::PreStudent);
        assert!(store.profile.progress.is_empty());
    }

    #[test]
    fn test_log_out_keeps_theme_and_language() {
        let mut store = logged_in_store();
        store.update_theme(ThemeSetting::Dark);
        store.log_out();
        assert_eq!(store.theme, ThemeSetting::Dark);
        assert_eq!(store.language, Language::English);
    }

    #[test]
    fn test_is_logged_in() {
        let mut store = SessionStore::new();
        assert!(!store.is_logged_in());
        store.update_user(ProfilePatch {
            name: Some("Leo".to_string()),
            ..ProfilePatch::default()
        });
        assert!(store.is_logged_in());
        store.log_out();
        assert!(!store.is_logged_in());
    }

    #[test]
    fn test_update_parental_clamps() {
        let mut store = SessionStore::new();
        store.update_parental(ParentalPatch {
            difficulty_level: Some(7),
            time_limit_minutes: Some(5),
            enabled: Some(false),
        });
        assert_eq!(store.parental.difficulty_level, 3);
        assert_eq!(store.parental.time_limit_minutes, 10);
        assert!(!store.parental.enabled);
    }

    #[test]
    fn test_toggle_theme() {
        let mut store = SessionStore::new();
        store.toggle_theme();
        assert_eq!(store.theme, ThemeSetting::Dark);
        store.toggle_theme();
        assert_eq!(store.theme, ThemeSetting::Light);
    }
}
