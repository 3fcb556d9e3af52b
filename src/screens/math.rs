use crate::arithmetic::{arithmetic_question, Operation};
use crate::quiz::{QuizOutcome, QuizRunner};
use crate::screens::alphabet::handle_option_keys;
use crate::screens::ScreenEvent;
use crate::speech::SpeechHandle;
use crate::store::SessionStore;
use crossterm::event::{KeyCode, KeyEvent};
use rand::Rng;
use std::time::Instant;

pub const QUESTIONS_PER_ROUND: usize = 5;

/// Three rounds of five questions: addition, then subtraction, then
/// multiplication. Each round writes its own `math-<op>` progress entry
/// the moment it completes.
pub struct MathScreen {
    rounds: Vec<QuizRunner>,
    op_index: usize,
    pub results: Vec<(Operation, QuizOutcome)>,
}

impl MathScreen {
    pub fn new(rng: &mut impl Rng) -> Self {
        Self {
            rounds: Operation::ALL
                .iter()
                .map(|&op| {
                    QuizRunner::new(
                        (0..QUESTIONS_PER_ROUND)
                            .map(|_| arithmetic_question(rng, op))
                            .collect(),
                    )
                })
                .collect(),
            op_index: 0,
            results: Vec::new(),
        }
    }

    pub fn current_op(&self) -> Operation {
        Operation::ALL[self.op_index.min(Operation::ALL.len() - 1)]
    }

    pub fn is_complete(&self) -> bool {
        self.op_index >= self.rounds.len()
    }

    pub fn runner(&self) -> Option<&QuizRunner> {
        if self.is_complete() {
            None
        } else {
            Some(&self.rounds[self.op_index])
        }
    }

    pub fn handle_input(
        &mut self,
        key: KeyEvent,
        now: Instant,
        speech: &SpeechHandle,
    ) -> ScreenEvent {
        if self.is_complete() {
            return match key.code {
                KeyCode::Char('r') | KeyCode::Enter => {
                    *self = MathScreen::new(&mut rand::thread_rng());
                    ScreenEvent::Stay
                }
                KeyCode::Char('m') | KeyCode::Esc => ScreenEvent::GoHome,
                _ => ScreenEvent::Stay,
            };
        }
        handle_option_keys(&mut self.rounds[self.op_index], key, now, speech);
        if key.code == KeyCode::Esc {
            ScreenEvent::GoHome
        } else {
            ScreenEvent::Stay
        }
    }

    pub fn tick(&mut self, now: Instant, store: &mut SessionStore) {
        if self.is_complete() {
            return;
        }
        let op = self.current_op();
        if let Some(outcome) = self.rounds[self.op_index].tick(now) {
            store.update_progress(op.progress_id(), true, outcome.stars);
            self.results.push((op, outcome));
            self.op_index += 1;
        }
    }
}
