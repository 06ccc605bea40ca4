//! Content catalog: stages, challenges, and companion texts.
//!
//! A [`Catalog`] is built once and never mutated. Construction validates
//! every challenge against the fixed three-slot option layout and checks the
//! stage→stat mapping table, so a quiz never runs on malformed content.
//!
//! ```
//! use lifepath_logic::catalog::Catalog;
//!
//! let catalog = Catalog::standard().unwrap();
//! assert_eq!(catalog.stage_count(), 5);
//! assert_eq!(catalog.total_challenges(), 10);
//! assert_eq!(catalog.max_score(), 100);
//! ```

use serde::{Deserialize, Serialize};

use crate::content;
use crate::error::CatalogError;
use crate::stats::StatKind;

/// Every challenge offers exactly this many options.
pub const OPTIONS_PER_CHALLENGE: usize = 3;

/// Points awarded per correct answer.
pub const POINTS_PER_CORRECT: u32 = 10;

/// A single multiple-choice scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    pub prompt: String,
    pub options: Vec<String>,
    /// Index of the correct option (0-based).
    pub answer: usize,
    /// Shown after answering, regardless of correctness.
    pub feedback: String,
}

impl Challenge {
    pub fn new(
        prompt: impl Into<String>,
        options: [&str; OPTIONS_PER_CHALLENGE],
        answer: usize,
        feedback: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            options: options.iter().map(|o| o.to_string()).collect(),
            answer,
            feedback: feedback.into(),
        }
    }

    pub fn is_correct(&self, selected: usize) -> bool {
        selected == self.answer
    }
}

/// One developmental life period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    pub title: String,
    /// Opaque presentation tag, passed through to the display untouched.
    pub theme: String,
    pub challenges: Vec<Challenge>,
}

/// Closing texts that accompany the content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanionText {
    pub excellent: String,
    pub good: String,
    pub needs_review: String,
    /// Shown when the player quits.
    pub farewell: String,
}

impl Default for CompanionText {
    fn default() -> Self {
        content::companion_text()
    }
}

/// Validated, immutable quiz content.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    stages: Vec<Stage>,
    stat_map: Vec<StatKind>,
    text: CompanionText,
}

impl Catalog {
    /// Validate and build a catalog.
    pub fn new(
        stages: Vec<Stage>,
        stat_map: Vec<StatKind>,
        text: CompanionText,
    ) -> Result<Self, CatalogError> {
        validate(&stages, &stat_map)?;
        log::debug!(
            "Catalog built: {} stages, {} challenges",
            stages.len(),
            stages.iter().map(|s| s.challenges.len()).sum::<usize>()
        );
        Ok(Self {
            stages,
            stat_map,
            text,
        })
    }

    /// The shipped five-stage lifespan content.
    pub fn standard() -> Result<Self, CatalogError> {
        Self::new(
            content::stages(),
            StatKind::ALL.to_vec(),
            content::companion_text(),
        )
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn stage(&self, index: usize) -> Option<&Stage> {
        self.stages.get(index)
    }

    pub fn challenge(&self, stage: usize, challenge: usize) -> Option<&Challenge> {
        self.stage(stage)?.challenges.get(challenge)
    }

    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    pub fn total_challenges(&self) -> usize {
        self.stages.iter().map(|s| s.challenges.len()).sum()
    }

    /// Highest reachable score: every challenge answered correctly.
    pub fn max_score(&self) -> u32 {
        self.total_challenges() as u32 * POINTS_PER_CORRECT
    }

    /// Stage index → counter table, one entry per stage.
    pub fn stat_map(&self) -> &[StatKind] {
        &self.stat_map
    }

    pub fn stat_for_stage(&self, stage: usize) -> Option<StatKind> {
        self.stat_map.get(stage).copied()
    }

    pub fn text(&self) -> &CompanionText {
        &self.text
    }
}

fn validate(stages: &[Stage], stat_map: &[StatKind]) -> Result<(), CatalogError> {
    if stages.is_empty() {
        return Err(CatalogError::NoStages);
    }
    if stat_map.len() != stages.len() {
        return Err(CatalogError::StatMappingMismatch {
            stages: stages.len(),
            mappings: stat_map.len(),
        });
    }

    for (si, stage) in stages.iter().enumerate() {
        if stage.challenges.is_empty() {
            return Err(CatalogError::EmptyStage { stage: si });
        }
        for (ci, challenge) in stage.challenges.iter().enumerate() {
            if challenge.options.len() != OPTIONS_PER_CHALLENGE {
                return Err(CatalogError::WrongOptionCount {
                    stage: si,
                    challenge: ci,
                    found: challenge.options.len(),
                    expected: OPTIONS_PER_CHALLENGE,
                });
            }
            if challenge.answer >= OPTIONS_PER_CHALLENGE {
                return Err(CatalogError::AnswerOutOfRange {
                    stage: si,
                    challenge: ci,
                    answer: challenge.answer,
                });
            }
        }
    }

    Ok(())
}
