use crate::models::ParentalPatch;
use crate::screens::ScreenEvent;
use crate::store::SessionStore;
use crossterm::event::{KeyCode, KeyEvent};

pub const PARENTAL_PIN: &str = "1234";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentalRow {
    Difficulty,
    TimeLimit,
    Enabled,
}

const ROWS: [ParentalRow; 3] = [
    ParentalRow::Difficulty,
    ParentalRow::TimeLimit,
    ParentalRow::Enabled,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParentalMode {
    Locked { pin_input: String, error: bool },
    Unlocked { row: usize },
}

/// PIN-gated parental settings. A fixed PIN keeps children out; this is
/// a child-proofing speed bump, not a security boundary.
#[derive(Debug, Clone)]
pub struct ParentalScreen {
    pub mode: ParentalMode,
}

impl Default for ParentalScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ParentalScreen {
    pub fn new() -> Self {
        Self {
            mode: ParentalMode::Locked {
                pin_input: String::new(),
                error: false,
            },
        }
    }

    pub fn selected_row(&self) -> Option<ParentalRow> {
        match &self.mode {
            ParentalMode::Locked { .. } => None,
            ParentalMode::Unlocked { row } => Some(ROWS[*row]),
        }
    }

    pub fn handle_input(&mut self, key: KeyEvent, store: &mut SessionStore) -> ScreenEvent {
        match &mut self.mode {
            ParentalMode::Locked { pin_input, error } => match key.code {
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    if pin_input.len() < PARENTAL_PIN.len() {
                        pin_input.push(c);
                        *error = false;
                    }
                    ScreenEvent::Stay
                }
                KeyCode::Backspace => {
                    pin_input.pop();
                    ScreenEvent::Stay
                }
                KeyCode::Enter => {
                    if pin_input == PARENTAL_PIN {
                        self.mode = ParentalMode::Unlocked { row: 0 };
                    } else {
                        pin_input.clear();
                        *error = true;
                    }
                    ScreenEvent::Stay
                }
                KeyCode::Esc => ScreenEvent::GoHome,
                _ => ScreenEvent::Stay,
            },
            ParentalMode::Unlocked { row } => match key.code {
                KeyCode::Up => {
                    *row = row.saturating_sub(1);
                    ScreenEvent::Stay
                }
                KeyCode::Down => {
                    if *row + 1 < ROWS.len() {
                        *row += 1;
                    }
                    ScreenEvent::Stay
                }
                KeyCode::Left | KeyCode::Right | KeyCode::Enter => {
                    let step_up = key.code != KeyCode::Left;
                    adjust(store, ROWS[*row], step_up);
                    ScreenEvent::Stay
                }
                KeyCode::Esc | KeyCode::Char('m') => ScreenEvent::GoHome,
                _ => ScreenEvent::Stay,
            },
        }
    }
}

fn adjust(store: &mut SessionStore, row: ParentalRow, step_up: bool) {
    let patch = match row {
        ParentalRow::Difficulty => ParentalPatch {
            difficulty_level: Some(if step_up {
                store.parental.difficulty_level + 1
            } else {
                store.parental.difficulty_level.saturating_sub(1)
            }),
            ..ParentalPatch::default()
        },
        ParentalRow::TimeLimit => ParentalPatch {
            time_limit_minutes: Some(if step_up {
                store.parental.time_limit_minutes.saturating_add(5)
            } else {
                store.parental.time_limit_minutes.saturating_sub(5)
            }),
            ..ParentalPatch::default()
        },
        ParentalRow::Enabled => ParentalPatch {
            enabled: Some(!store.parental.enabled),
            ..ParentalPatch::default()
        },
    };
    store.update_parental(patch);
}
