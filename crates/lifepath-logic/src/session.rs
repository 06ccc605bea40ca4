//! Inbound boundary. Turns input events into quiz transitions and display calls.
//!
//! ```
//! use lifepath_logic::catalog::Catalog;
//! use lifepath_logic::display::{DisplayCall, RecordingDisplay};
//! use lifepath_logic::session::{InputEvent, Session};
//!
//! let mut session = Session::new(Catalog::standard().unwrap());
//! let mut display = RecordingDisplay::new();
//! session.handle(InputEvent::Start, &mut display).unwrap();
//! assert!(matches!(display.calls[0], DisplayCall::Challenge(_)));
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::display::QuizDisplay;
use crate::error::QuizError;
use crate::quiz::{Advance, ChallengeView, Quiz};

/// Everything the input source can send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    Start,
    /// 0-based option index.
    SelectOption(usize),
    Continue,
    Restart,
    /// No effect on the quiz; only acknowledged.
    Quit,
}

/// What handling an accepted event amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    ChallengeShown,
    FeedbackShown,
    Finished,
    Quit,
}

/// A quiz plus the glue that drives a display from it.
#[derive(Debug, Clone)]
pub struct Session {
    quiz: Quiz,
}

impl Session {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            quiz: Quiz::new(catalog),
        }
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    /// Apply one event. Rejected events leave the quiz untouched, are passed
    /// to [`QuizDisplay::render_rejected`], and come back as the error.
    pub fn handle<D: QuizDisplay + ?Sized>(
        &mut self,
        event: InputEvent,
        display: &mut D,
    ) -> Result<Handled, QuizError> {
        let result = self.apply(event, display);
        if let Err(e) = &result {
            log::debug!("Ignored {:?}: {}", event, e);
            display.render_rejected(e);
        }
        result
    }

    fn apply<D: QuizDisplay + ?Sized>(
        &mut self,
        event: InputEvent,
        display: &mut D,
    ) -> Result<Handled, QuizError> {
        match event {
            InputEvent::Start => {
                let view = self.quiz.start()?;
                self.show_challenge(&view, display);
                Ok(Handled::ChallengeShown)
            }
            InputEvent::SelectOption(index) => {
                let feedback = self.quiz.submit_answer(index)?;
                display.render_feedback(&feedback);
                display.render_stats(&feedback.stats);
                Ok(Handled::FeedbackShown)
            }
            InputEvent::Continue => match self.quiz.advance()? {
                Advance::Next(view) => {
                    self.show_challenge(&view, display);
                    Ok(Handled::ChallengeShown)
                }
                Advance::Finished(summary) => {
                    display.render_end(&summary);
                    Ok(Handled::Finished)
                }
            },
            InputEvent::Restart => {
                let view = self.quiz.restart();
                self.show_challenge(&view, display);
                Ok(Handled::ChallengeShown)
            }
            InputEvent::Quit => {
                display.render_farewell(&self.quiz.catalog().text().farewell);
                Ok(Handled::Quit)
            }
        }
    }

    fn show_challenge<D: QuizDisplay + ?Sized>(&self, view: &ChallengeView, display: &mut D) {
        display.render_challenge(view);
        display.render_progress(self.quiz.progress());
        display.render_stats(&self.quiz.stats());
    }
}
