//! Outbound boundary: what the state machine asks a front end to draw.
//!
//! The quiz core never draws anything itself. [`crate::session::Session`]
//! translates each transition into calls on a [`QuizDisplay`]; the terminal
//! front end implements it with coloured text, tests use [`RecordingDisplay`].

use serde::{Deserialize, Serialize};

use crate::error::QuizError;
use crate::outcome::EndSummary;
use crate::quiz::{ChallengeView, FeedbackView};
use crate::stats::StatSet;

pub trait QuizDisplay {
    /// Stage title, theme tag, prompt and the three options.
    fn render_challenge(&mut self, view: &ChallengeView);

    /// Verdict, feedback text, and the stats after the change.
    fn render_feedback(&mut self, feedback: &FeedbackView);

    /// Fraction in `[0, 1)` while a challenge is on screen.
    fn render_progress(&mut self, fraction: f64);

    fn render_end(&mut self, summary: &EndSummary);

    fn render_stats(&mut self, stats: &StatSet);

    /// Acknowledge a quit. The session itself is unaffected.
    fn render_farewell(&mut self, message: &str);

    /// Input was ignored. Most displays have nothing to show.
    fn render_rejected(&mut self, _error: &QuizError) {}
}

/// One recorded display call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DisplayCall {
    Challenge(ChallengeView),
    Feedback(FeedbackView),
    Progress(f64),
    End(EndSummary),
    Stats(StatSet),
    Farewell(String),
    Rejected(String),
}

/// In-memory display that keeps every call in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingDisplay {
    pub calls: Vec<DisplayCall>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain and return everything recorded so far.
    pub fn take(&mut self) -> Vec<DisplayCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn last_stats(&self) -> Option<StatSet> {
        self.calls.iter().rev().find_map(|c| match c {
            DisplayCall::Stats(s) => Some(*s),
            _ => None,
        })
    }
}

impl QuizDisplay for RecordingDisplay {
    fn render_challenge(&mut self, view: &ChallengeView) {
        self.calls.push(DisplayCall::Challenge(view.clone()));
    }

    fn render_feedback(&mut self, feedback: &FeedbackView) {
        self.calls.push(DisplayCall::Feedback(feedback.clone()));
    }

    fn render_progress(&mut self, fraction: f64) {
        self.calls.push(DisplayCall::Progress(fraction));
    }

    fn render_end(&mut self, summary: &EndSummary) {
        self.calls.push(DisplayCall::End(summary.clone()));
    }

    fn render_stats(&mut self, stats: &StatSet) {
        self.calls.push(DisplayCall::Stats(*stats));
    }

    fn render_farewell(&mut self, message: &str) {
        self.calls.push(DisplayCall::Farewell(message.to_string()));
    }

    fn render_rejected(&mut self, error: &QuizError) {
        self.calls.push(DisplayCall::Rejected(error.to_string()));
    }
}
