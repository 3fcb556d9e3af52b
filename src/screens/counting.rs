use crate::arithmetic::build_options;
use crate::catalog::ModuleId;
use crate::quiz::{QuizOutcome, QuizQuestion, QuizRunner};
use crate::screens::alphabet::handle_option_keys;
use crate::screens::ScreenEvent;
use crate::speech::SpeechHandle;
use crate::store::SessionStore;
use crossterm::event::{KeyCode, KeyEvent};
use rand::Rng;
use std::time::Instant;

pub const MAX_NUMBER: u32 = 20;
pub const QUIZ_LEN: usize = 5;

pub const FRUITS: [&str; 10] = ["🍎", "🍌", "🍒", "🍓", "🍊", "🥝", "🍉", "🍍", "🥭", "🍇"];

pub fn fruit_for(number: u32) -> &'static str {
    FRUITS[number as usize % FRUITS.len()]
}

#[derive(Debug, Clone)]
pub enum CountingPhase {
    Browse { number: u32 },
    Quiz(QuizRunner),
    Done { outcome: QuizOutcome },
}

/// Count along 1-20 with fruit rows, then a five-question "how many
/// fruits" quiz with perturbed numeric distractors.
pub struct CountingScreen {
    pub phase: CountingPhase,
}

impl Default for CountingScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl CountingScreen {
    pub fn new() -> Self {
        Self {
            phase: CountingPhase::Browse { number: 1 },
        }
    }

    pub fn handle_input(
        &mut self,
        key: KeyEvent,
        now: Instant,
        speech: &SpeechHandle,
    ) -> ScreenEvent {
        match &mut self.phase {
            CountingPhase::Browse { number } => match key.code {
                KeyCode::Left => {
                    if *number > 1 {
                        *number -= 1;
                        speech.say(&number.to_string());
                    }
                    ScreenEvent::Stay
                }
                KeyCode::Right | KeyCode::Enter => {
                    if *number < MAX_NUMBER {
                        *number += 1;
                        speech.say(&number.to_string());
                    } else {
                        let questions = quiz_questions(&mut rand::thread_rng());
                        self.phase = CountingPhase::Quiz(QuizRunner::new(questions));
                        speech.say("How many fruits do you see?");
                    }
                    ScreenEvent::Stay
                }
                KeyCode::Esc => ScreenEvent::GoHome,
                _ => ScreenEvent::Stay,
            },
            CountingPhase::Quiz(runner) => {
                handle_option_keys(runner, key, now, speech);
                if key.code == KeyCode::Esc {
                    ScreenEvent::GoHome
                } else {
                    ScreenEvent::Stay
                }
            }
            CountingPhase::Done { .. } => match key.code {
                KeyCode::Char('r') | KeyCode::Enter => {
                    self.phase = CountingPhase::Browse { number: 1 };
                    ScreenEvent::Stay
                }
                KeyCode::Char('m') | KeyCode::Esc => ScreenEvent::GoHome,
                _ => ScreenEvent::Stay,
            },
        }
    }

    pub fn tick(&mut self, now: Instant, store: &mut SessionStore) {
        if let CountingPhase::Quiz(runner) = &mut self.phase
            && let Some(outcome) = runner.tick(now)
        {
            store.update_progress(ModuleId::Counting.as_str(), true, outcome.stars);
            self.phase = CountingPhase::Done { outcome };
        }
    }
}

/// The visual carries the fruit emoji; the count to draw is the value of
/// the correct option (see `ui::counting`).
pub fn quiz_questions(rng: &mut impl Rng) -> Vec<QuizQuestion> {
    (0..QUIZ_LEN)
        .map(|_| {
            let target = rng.gen_range(3..=12u32);
            let fruit = FRUITS[rng.gen_range(0..FRUITS.len())];
            let options = build_options(rng, target);
            let answer = options
                .iter()
                .position(|&option| option == target)
                .unwrap_or(0);
            QuizQuestion {
                prompt: "How many fruits do you see?".to_string(),
                visual: fruit.to_string(),
                options: options.iter().map(|option| option.to_string()).collect(),
                answer,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::REVEAL_DELAY;
    use crossterm::event::KeyModifiers;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Duration;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn test_quiz_questions_have_countable_answers() {
        let mut rng = StdRng::seed_from_u64(11);
        for q in quiz_questions(&mut rng) {
            assert_eq!(q.options.len(), 4);
            let count: u32 = q.options[q.answer].parse().unwrap();
            assert!((3..=12).contains(&count));
            assert!(FRUITS.contains(&q.visual.as_str()));
        }
    }

    #[test]
    fn test_browse_covers_one_to_twenty() {
        let speech = SpeechHandle::disconnected();
        let mut screen = CountingScreen::new();
        let now = Instant::now();
        screen.handle_input(key(KeyCode::Left), now, &speech);
        assert!(matches!(screen.phase, CountingPhase::Browse { number: 1 }));
        for _ in 0..19 {
            screen.handle_input(key(KeyCode::Right), now, &speech);
        }
        assert!(matches!(
            screen.phase,
            CountingPhase::Browse { number: MAX_NUMBER }
        ));
        screen.handle_input(key(KeyCode::Right), now, &speech);
        assert!(matches!(screen.phase, CountingPhase::Quiz(_)));
    }

    #[test]
    fn test_quiz_completion_writes_counting_progress() {
        let speech = SpeechHandle::disconnected();
        let mut store = SessionStore::new();
        let mut screen = CountingScreen::new();
        let mut rng = StdRng::seed_from_u64(2);
        screen.phase = CountingPhase::Quiz(QuizRunner::new(quiz_questions(&mut rng)));

        let mut now = Instant::now();
        for _ in 0..QUIZ_LEN {
            screen.handle_input(key(KeyCode::Char('2')), now, &speech);
            now += REVEAL_DELAY + Duration::from_millis(1);
            screen.tick(now, &mut store);
        }
        assert!(matches!(screen.phase, CountingPhase::Done { .. }));
        assert!(store.profile.progress.contains_key("counting"));
    }

    #[test]
    fn test_fruit_cycle() {
        assert_eq!(fruit_for(0), FRUITS[0]);
        assert_eq!(fruit_for(10), FRUITS[0]);
        assert_eq!(fruit_for(13), FRUITS[3]);
    }
}
