use std::time::{Duration, Instant};

/// How long a revealed answer stays on screen before auto-advancing.
pub const REVEAL_DELAY: Duration = Duration::from_millis(1500);

/// One multiple-choice question: a prompt, a large visual (letter, emoji
/// or arithmetic expression), and the options with the correct index.
#[derive(Debug, Clone)]
pub struct QuizQuestion {
    pub prompt: String,
    pub visual: String,
    pub options: Vec<String>,
    pub answer: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    /// Waiting for the child to pick an option.
    Presenting,
    /// The picked option is highlighted until the deadline; all input
    /// is ignored meanwhile.
    Revealing {
        choice: usize,
        correct: bool,
        until: Instant,
    },
    /// Terminal for this session; re-entering the module builds a new
    /// runner at question 0 with score 0.
    Complete,
}

/// Reported exactly once, at the `Revealing -> Complete` transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizOutcome {
    pub correct: usize,
    pub total: usize,
    pub stars: u8,
}

/// stars = ceil(correct / total * 3), clamped to [0, 3].
pub fn stars_for(correct: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let stars = (correct * 3).div_ceil(total);
    stars.min(3) as u8
}

/// Sequential quiz session over a fixed question list.
#[derive(Debug, Clone)]
pub struct QuizRunner {
    questions: Vec<QuizQuestion>,
    current: usize,
    score: usize,
    phase: QuizPhase,
}

impl QuizRunner {
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        Self {
            questions,
            current: 0,
            score: 0,
            phase: QuizPhase::Presenting,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn current_question(&self) -> &QuizQuestion {
        &self.questions[self.current]
    }

    pub fn is_complete(&self) -> bool {
        self.phase == QuizPhase::Complete
    }

    /// Select an option. Only honored while `Presenting`; during the
    /// reveal window and after completion this is a no-op.
    pub fn answer(&mut self, choice: usize, now: Instant) {
        if self.phase != QuizPhase::Presenting || choice >= self.current_question().options.len() {
            return;
        }
        let correct = choice == self.current_question().answer;
        if correct {
            self.score += 1;
        }
        self.phase = QuizPhase::Revealing {
            choice,
            correct,
            until: now + REVEAL_DELAY,
        };
    }

    /// Drive the timed reveal. Returns the outcome on the single
    /// transition into `Complete`, `None` otherwise.
    pub fn tick(&mut self, now: Instant) -> Option<QuizOutcome> {
        let QuizPhase::Revealing { until, .. } = self.phase else {
            return None;
        };
        if now < until {
            return None;
        }
        if self.current + 1 < self.questions.len() {
            self.current += 1;
            self.phase = QuizPhase::Presenting;
            None
        } else {
            self.phase = QuizPhase::Complete;
            Some(QuizOutcome {
                correct: self.score,
                total: self.questions.len(),
                stars: stars_for(self.score, self.questions.len()),
            })
        }
    }
}
