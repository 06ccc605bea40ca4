//! Error types for the quiz core.
//!
//! There are exactly two categories: malformed content, caught once when the
//! catalog is built, and invalid input, which every state machine operation
//! may return and which never changes state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The catalog failed validation. Fatal: a quiz must not start with it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog has no stages")]
    NoStages,

    #[error("stage {stage} has no challenges")]
    EmptyStage { stage: usize },

    #[error("stage {stage} challenge {challenge} has {found} options, expected {expected}")]
    WrongOptionCount {
        stage: usize,
        challenge: usize,
        found: usize,
        expected: usize,
    },

    #[error("stage {stage} challenge {challenge} marks option {answer} correct, out of range")]
    AnswerOutOfRange {
        stage: usize,
        challenge: usize,
        answer: usize,
    },

    #[error("stat mapping has {mappings} entries for {stages} stages")]
    StatMappingMismatch { stages: usize, mappings: usize },
}

/// Which inbound action was attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Start,
    SubmitAnswer,
    Continue,
    Restart,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Action::Start => "start",
            Action::SubmitAnswer => "submit answer",
            Action::Continue => "continue",
            Action::Restart => "restart",
        };
        f.write_str(name)
    }
}

/// Input the state machine refused. Every variant is an invalid-input
/// rejection; state is untouched whenever this is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("option {index} is out of range (0..{options})")]
    OptionOutOfRange { index: usize, options: usize },

    #[error("cannot {action} while {phase}")]
    NotPermitted {
        action: Action,
        phase: &'static str,
    },
}
