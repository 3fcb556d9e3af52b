use crate::catalog::ModuleId;
use crate::content::LetterExample;
use crate::quiz::{QuizOutcome, QuizPhase, QuizQuestion, QuizRunner};
use crate::screens::ScreenEvent;
use crate::speech::SpeechHandle;
use crate::store::SessionStore;
use crossterm::event::{KeyCode, KeyEvent};
use rand::seq::SliceRandom;
use rand::Rng;
use std::time::Instant;

pub const QUIZ_LEN: usize = 10;

#[derive(Debug, Clone)]
pub enum AlphabetPhase {
    Browse { index: usize },
    Quiz(QuizRunner),
    Done { outcome: QuizOutcome },
}

/// Letter browser A-Z with spoken examples, followed by a ten-question
/// "which letter does X start with" quiz.
pub struct AlphabetScreen {
    letters: Vec<LetterExample>,
    pub phase: AlphabetPhase,
}

impl AlphabetScreen {
    pub fn new(letters: Vec<LetterExample>) -> Self {
        Self {
            letters,
            phase: AlphabetPhase::Browse { index: 0 },
        }
    }

    pub fn letters(&self) -> &[LetterExample] {
        &self.letters
    }

    pub fn handle_input(
        &mut self,
        key: KeyEvent,
        now: Instant,
        speech: &SpeechHandle,
    ) -> ScreenEvent {
        match &mut self.phase {
            AlphabetPhase::Browse { index } => match key.code {
                KeyCode::Left => {
                    if *index > 0 {
                        *index -= 1;
                        let example = &self.letters[*index];
                        speech.say(&format!("{} as in {}", example.letter, example.word));
                    }
                    ScreenEvent::Stay
                }
                KeyCode::Right | KeyCode::Enter => {
                    if *index + 1 < self.letters.len() {
                        *index += 1;
                        let example = &self.letters[*index];
                        speech.say(&format!("{} as in {}", example.letter, example.word));
                    } else {
                        let questions = quiz_questions(&self.letters, &mut rand::thread_rng());
                        self.phase = AlphabetPhase::Quiz(QuizRunner::new(questions));
                        speech.say("Let's see what you've learned!");
                    }
                    ScreenEvent::Stay
                }
                KeyCode::Esc => ScreenEvent::GoHome,
                _ => ScreenEvent::Stay,
            },
            AlphabetPhase::Quiz(runner) => {
                handle_option_keys(runner, key, now, speech);
                if key.code == KeyCode::Esc {
                    ScreenEvent::GoHome
                } else {
                    ScreenEvent::Stay
                }
            }
            AlphabetPhase::Done { .. } => match key.code {
                KeyCode::Char('r') | KeyCode::Enter => {
                    self.phase = AlphabetPhase::Browse { index: 0 };
                    ScreenEvent::Stay
                }
                KeyCode::Char('m') | KeyCode::Esc => ScreenEvent::GoHome,
                _ => ScreenEvent::Stay,
            },
        }
    }

    /// Drive the timed reveal; writes the progress entry exactly once.
    pub fn tick(&mut self, now: Instant, store: &mut SessionStore) {
        if let AlphabetPhase::Quiz(runner) = &mut self.phase
            && let Some(outcome) = runner.tick(now)
        {
            store.update_progress(ModuleId::Alphabet.as_str(), true, outcome.stars);
            self.phase = AlphabetPhase::Done { outcome };
        }
    }
}

/// Shared by the option-grid quizzes: keys 1-4 pick an option, with
/// spoken feedback on the reveal.
pub fn handle_option_keys(
    runner: &mut QuizRunner,
    key: KeyEvent,
    now: Instant,
    speech: &SpeechHandle,
) {
    if let KeyCode::Char(c) = key.code
        && let Some(digit) = c.to_digit(10)
        && digit >= 1
    {
        let before = runner.phase();
        runner.answer(digit as usize - 1, now);
        if before == QuizPhase::Presenting
            && let QuizPhase::Revealing { correct, .. } = runner.phase()
        {
            speech.say(if correct {
                "Correct! Great job!"
            } else {
                "Oops! Try the next one!"
            });
        }
    }
}

/// Ten random letters, each with the correct letter hidden among three
/// other letters.
pub fn quiz_questions(letters: &[LetterExample], rng: &mut impl Rng) -> Vec<QuizQuestion> {
    let mut order: Vec<usize> = (0..letters.len()).collect();
    order.shuffle(rng);
    order
        .into_iter()
        .take(QUIZ_LEN)
        .map(|i| {
            let example = &letters[i];
            let mut others: Vec<usize> = (0..letters.len()).filter(|&j| j != i).collect();
            others.shuffle(rng);
            let mut options: Vec<String> = others
                .iter()
                .take(3)
                .map(|&j| letters[j].letter.clone())
                .collect();
            options.push(example.letter.clone());
            options.shuffle(rng);
            let answer = options
                .iter()
                .position(|option| *option == example.letter)
                .unwrap_or(0);
            QuizQuestion {
                prompt: format!("Which letter does {} start with?", example.word),
                visual: format!("{}  {}", example.emoji, example.word),
                options,
                answer,
            }
        })
        .collect()
}
