pub mod arithmetic;
pub mod catalog;
pub mod content;
pub mod logger;
pub mod models;
pub mod quiz;
pub mod screens;
pub mod speech;
pub mod store;
pub mod ui;
pub mod utils;

// Re-exports for convenience
pub use catalog::{available_modules, is_available, ModuleId, CATALOG};
pub use content::ContentBank;
pub use models::{Language, ThemeSetting, UserKind, UserProfile};
pub use quiz::{stars_for, QuizOutcome, QuizRunner, REVEAL_DELAY};
pub use screens::{Screen, ScreenEvent};
pub use speech::{spawn_speech_worker, SpeechHandle};
pub use store::SessionStore;
pub use ui::Palette;
