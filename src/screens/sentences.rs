use crate::catalog::ModuleId;
use crate::content::SentenceLevel;
use crate::screens::ScreenEvent;
use crate::speech::SpeechHandle;
use crate::store::SessionStore;
use crossterm::event::{KeyCode, KeyEvent};
use rand::seq::SliceRandom;
use rand::Rng;
use std::time::{Duration, Instant};

/// Sentence checks get a slightly longer reveal than the option quizzes
/// so the child can re-read the whole line.
pub const CHECK_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentencePhase {
    Building,
    Revealing { correct: bool, until: Instant },
    Complete,
}

/// Word-tile sentence builder: pick shuffled words into a sentence, check
/// it, advance through five levels.
pub struct SentenceScreen {
    levels: Vec<SentenceLevel>,
    pub level_index: usize,
    pub available: Vec<String>,
    pub selected: Vec<String>,
    pub cursor: usize,
    pub phase: SentencePhase,
}

impl SentenceScreen {
    pub fn new(levels: Vec<SentenceLevel>, rng: &mut impl Rng) -> Self {
        let mut screen = Self {
            levels,
            level_index: 0,
            available: Vec::new(),
            selected: Vec::new(),
            cursor: 0,
            phase: SentencePhase::Building,
        };
        screen.load_level(rng);
        screen
    }

    pub fn level(&self) -> &SentenceLevel {
        &self.levels[self.level_index.min(self.levels.len() - 1)]
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    fn load_level(&mut self, rng: &mut impl Rng) {
        self.available = self.level().words.clone();
        self.available.shuffle(rng);
        self.selected.clear();
        self.cursor = 0;
        self.phase = SentencePhase::Building;
    }

    pub fn handle_input(
        &mut self,
        key: KeyEvent,
        now: Instant,
        speech: &SpeechHandle,
    ) -> ScreenEvent {
        match self.phase {
            SentencePhase::Building => match key.code {
                KeyCode::Left => {
                    self.cursor = self.cursor.saturating_sub(1);
                    ScreenEvent::Stay
                }
                KeyCode::Right => {
                    if self.cursor + 1 < self.available.len() {
                        self.cursor += 1;
                    }
                    ScreenEvent::Stay
                }
                KeyCode::Enter => {
                    if self.cursor < self.available.len() {
                        let word = self.available.remove(self.cursor);
                        speech.say(&word);
                        self.selected.push(word);
                        if self.cursor >= self.available.len() && self.cursor > 0 {
                            self.cursor -= 1;
                        }
                    }
                    ScreenEvent::Stay
                }
                KeyCode::Backspace => {
                    if let Some(word) = self.selected.pop() {
                        self.available.push(word);
                    }
                    ScreenEvent::Stay
                }
                KeyCode::Char('c') => {
                    if self.available.is_empty() && !self.selected.is_empty() {
                        let correct = self.selected.join(" ") == self.level().correct_sentence();
                        self.phase = SentencePhase::Revealing {
                            correct,
                            until: now + CHECK_DELAY,
                        };
                        speech.say(if correct {
                            "Great job! That's right!"
                        } else {
                            "Not quite. Let's try again!"
                        });
                    }
                    ScreenEvent::Stay
                }
                KeyCode::Esc => ScreenEvent::GoHome,
                _ => ScreenEvent::Stay,
            },
            SentencePhase::Revealing { .. } => {
                if key.code == KeyCode::Esc {
                    ScreenEvent::GoHome
                } else {
                    ScreenEvent::Stay
                }
            }
            SentencePhase::Complete => match key.code {
                KeyCode::Char('r') | KeyCode::Enter => {
                    self.level_index = 0;
                    self.load_level(&mut rand::thread_rng());
                    ScreenEvent::Stay
                }
                KeyCode::Char('m') | KeyCode::Esc => ScreenEvent::GoHome,
                _ => ScreenEvent::Stay,
            },
        }
    }

    /// Resolve a pending check: advance on a correct sentence, reshuffle
    /// the same level on a wrong one. Finishing the last level writes the
    /// progress entry.
    pub fn tick(&mut self, now: Instant, store: &mut SessionStore) {
        let SentencePhase::Revealing { correct, until } = self.phase else {
            return;
        };
        if now < until {
            return;
        }
        if correct {
            self.level_index += 1;
            if self.level_index >= self.levels.len() {
                store.update_progress(ModuleId::SentenceFormation.as_str(), true, 3);
                self.level_index = self.levels.len() - 1;
                self.phase = SentencePhase::Complete;
                return;
            }
        }
        self.load_level(&mut rand::thread_rng());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::sentence_levels;
    use crossterm::event::KeyModifiers;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn new_screen() -> SentenceScreen {
        let mut rng = StdRng::seed_from_u64(21);
        SentenceScreen::new(sentence_levels().unwrap(), &mut rng)
    }

    /// Pick every word of the current level in correct order.
    fn build_correct(screen: &mut SentenceScreen, speech: &SpeechHandle) {
        let words = screen.level().words.clone();
        let now = Instant::now();
        for word in &words {
            let pos = screen.available.iter().position(|w| w == word).unwrap();
            screen.cursor = pos;
            screen.handle_input(key(KeyCode::Enter), now, speech);
        }
    }

    #[test]
    fn test_picking_moves_words_between_lists() {
        let speech = SpeechHandle::disconnected();
        let mut screen = new_screen();
        let total = screen.available.len();
        screen.handle_input(key(KeyCode::Enter), Instant::now(), &speech);
        assert_eq!(screen.available.len(), total - 1);
        assert_eq!(screen.selected.len(), 1);
        screen.handle_input(key(KeyCode::Backspace), Instant::now(), &speech);
        assert_eq!(screen.available.len(), total);
        assert!(screen.selected.is_empty());
    }

    #[test]
    fn test_check_requires_all_words_selected() {
        let speech = SpeechHandle::disconnected();
        let mut screen = new_screen();
        screen.handle_input(key(KeyCode::Char('c')), Instant::now(), &speech);
        assert_eq!(screen.phase, SentencePhase::Building);
    }

    #[test]
    fn test_wrong_sentence_reshuffles_same_level() {
        let speech = SpeechHandle::disconnected();
        let mut store = SessionStore::new();
        let mut screen = new_screen();
        // Select everything in whatever shuffled order it sits in, then
        // force a wrong answer by swapping the first two picks if needed.
        while !screen.available.is_empty() {
            screen.cursor = 0;
            screen.handle_input(key(KeyCode::Enter), Instant::now(), &speech);
        }
        if screen.selected.join(" ") == screen.level().correct_sentence() {
            screen.selected.swap(0, 1);
        }
        let now = Instant::now();
        screen.handle_input(key(KeyCode::Char('c')), now, &speech);
        assert!(matches!(
            screen.phase,
            SentencePhase::Revealing { correct: false, .. }
        ));
        screen.tick(now + CHECK_DELAY, &mut store);
        assert_eq!(screen.level_index, 0);
        assert_eq!(screen.phase, SentencePhase::Building);
        assert!(screen.selected.is_empty());
        // The reshuffle reorders the tiles but keeps the exact word
        // multiset of the level.
        let mut reshuffled = screen.available.clone();
        reshuffled.sort();
        let mut words = screen.level().words.clone();
        words.sort();
        assert_eq!(reshuffled, words);
    }

    #[test]
    fn test_correct_sentence_advances_level() {
        let speech = SpeechHandle::disconnected();
        let mut store = SessionStore::new();
        let mut screen = new_screen();
        build_correct(&mut screen, &speech);
        let now = Instant::now();
        screen.handle_input(key(KeyCode::Char('c')), now, &speech);
        assert!(matches!(
            screen.phase,
            SentencePhase::Revealing { correct: true, .. }
        ));
        screen.tick(now + CHECK_DELAY, &mut store);
        assert_eq!(screen.level_index, 1);
    }

    #[test]
    fn test_finishing_all_levels_writes_progress() {
        let speech = SpeechHandle::disconnected();
        let mut store = SessionStore::new();
        let mut screen = new_screen();
        let levels = screen.level_count();
        let mut now = Instant::now();
        for _ in 0..levels {
            build_correct(&mut screen, &speech);
            screen.handle_input(key(KeyCode::Char('c')), now, &speech);
            now += CHECK_DELAY;
            screen.tick(now, &mut store);
        }
        assert_eq!(screen.phase, SentencePhase::Complete);
        let progress = store.profile.progress.get("sentence-formation").unwrap();
        assert!(progress.completed);
        assert_eq!(progress.stars, 3);
    }

    #[test]
    fn test_input_ignored_while_revealing() {
        let speech = SpeechHandle::disconnected();
        let mut screen = new_screen();
        build_correct(&mut screen, &speech);
        let now = Instant::now();
        screen.handle_input(key(KeyCode::Char('c')), now, &speech);
        let phase = screen.phase;
        screen.handle_input(key(KeyCode::Char('c')), now, &speech);
        assert_eq!(screen.phase, phase);
    }
}
