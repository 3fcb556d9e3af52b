use crate::catalog::ModuleId;
use crate::content::ImageQuestion;
use crate::quiz::{QuizOutcome, QuizQuestion, QuizRunner};
use crate::screens::alphabet::handle_option_keys;
use crate::screens::ScreenEvent;
use crate::speech::SpeechHandle;
use crate::store::SessionStore;
use crossterm::event::{KeyCode, KeyEvent};
use std::time::Instant;

/// "What is this?" picture quiz over the embedded question bank.
pub struct ImageScreen {
    runner: QuizRunner,
    pub outcome: Option<QuizOutcome>,
}

impl ImageScreen {
    pub fn new(bank: &[ImageQuestion]) -> Self {
        Self {
            runner: QuizRunner::new(bank.iter().map(to_quiz_question).collect()),
            outcome: None,
        }
    }

    pub fn runner(&self) -> &QuizRunner {
        &self.runner
    }

    pub fn handle_input(
        &mut self,
        key: KeyEvent,
        now: Instant,
        speech: &SpeechHandle,
    ) -> ScreenEvent {
        if self.outcome.is_some() {
            return match key.code {
                KeyCode::Char('m') | KeyCode::Esc | KeyCode::Enter => ScreenEvent::GoHome,
                _ => ScreenEvent::Stay,
            };
        }
        handle_option_keys(&mut self.runner, key, now, speech);
        if key.code == KeyCode::Esc {
            ScreenEvent::GoHome
        } else {
            ScreenEvent::Stay
        }
    }

    pub fn tick(&mut self, now: Instant, store: &mut SessionStore) {
        if self.outcome.is_none()
            && let Some(outcome) = self.runner.tick(now)
        {
            store.update_progress(ModuleId::ImageRecognition.as_str(), true, outcome.stars);
            self.outcome = Some(outcome);
        }
    }
}

/// The bank stores the answer as text; the runner wants an index.
fn to_quiz_question(q: &ImageQuestion) -> QuizQuestion {
    QuizQuestion {
        prompt: q.question.clone(),
        visual: q.image.clone(),
        answer: q
            .options
            .iter()
            .position(|option| *option == q.answer)
            .unwrap_or(0),
        options: q.options.clone(),
    }
}
