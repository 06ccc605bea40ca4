//! The quiz state machine.
//!
//! A [`Quiz`] owns a validated [`Catalog`] and the mutable [`GameState`] for
//! one session. It moves through four phases:
//!
//! ```text
//! NotStarted --start--> AwaitingAnswer(0,0) --submit--> ShowingFeedback
//!                            ^                               |
//!                            +-----------continue------------+
//!                                                            |
//!                        Finished(score) <--continue (last)--+
//! ```
//!
//! `restart` jumps to `AwaitingAnswer(0,0)` from any phase. Anything else
//! attempted in the wrong phase returns [`QuizError`] and leaves the state
//! exactly as it was.
//!
//! ```
//! use lifepath_logic::catalog::Catalog;
//! use lifepath_logic::quiz::{Advance, Phase, Quiz};
//!
//! let mut quiz = Quiz::new(Catalog::standard().unwrap());
//! quiz.start().unwrap();
//! let feedback = quiz.submit_answer(0).unwrap();
//! assert!(feedback.is_correct);
//! assert_eq!(quiz.score(), 10);
//! assert!(matches!(quiz.advance().unwrap(), Advance::Next(_)));
//! assert_eq!(quiz.phase(), Phase::AwaitingAnswer { stage: 0, challenge: 1 });
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, OPTIONS_PER_CHALLENGE, POINTS_PER_CORRECT};
use crate::error::{Action, QuizError};
use crate::outcome::EndSummary;
use crate::stats::{StatChange, StatSet, StatTracker};

/// Where the session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    NotStarted,
    AwaitingAnswer {
        stage: usize,
        challenge: usize,
    },
    ShowingFeedback {
        stage: usize,
        challenge: usize,
        selected: usize,
    },
    Finished {
        final_score: u32,
    },
}

impl Phase {
    fn describe(self) -> &'static str {
        match self {
            Phase::NotStarted => "not started",
            Phase::AwaitingAnswer { .. } => "awaiting an answer",
            Phase::ShowingFeedback { .. } => "showing feedback",
            Phase::Finished { .. } => "finished",
        }
    }
}

/// Mutable per-session state. Created with defaults, reset on restart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub stage_index: usize,
    pub challenge_index: usize,
    /// Only ever increases, by 10 per correct answer.
    pub score: u32,
    /// Set once the current challenge is scored, cleared when the next is shown.
    pub answered: bool,
    pub phase: Phase,
    stats: StatTracker,
}

impl GameState {
    fn new(catalog: &Catalog) -> Self {
        Self {
            stage_index: 0,
            challenge_index: 0,
            score: 0,
            answered: false,
            phase: Phase::NotStarted,
            stats: StatTracker::new(catalog.stat_map().to_vec()),
        }
    }

    fn reset_to_first_challenge(&mut self) {
        self.stage_index = 0;
        self.challenge_index = 0;
        self.score = 0;
        self.answered = false;
        self.stats.reset();
        self.phase = Phase::AwaitingAnswer {
            stage: 0,
            challenge: 0,
        };
    }

    pub fn stats(&self) -> StatSet {
        self.stats.snapshot()
    }
}

/// What the display shows for a challenge awaiting an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeView {
    pub stage_index: usize,
    pub challenge_index: usize,
    pub stage_title: String,
    pub theme: String,
    pub prompt: String,
    pub options: Vec<String>,
}

/// Result of scoring one answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackView {
    pub is_correct: bool,
    pub selected: usize,
    pub correct_option: usize,
    pub feedback: String,
    pub change: StatChange,
    pub stats: StatSet,
    pub score: u32,
}

/// Outcome of `continue`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Advance {
    Next(ChallengeView),
    Finished(EndSummary),
}

/// `(stage + challenge / challenges_in_stage) / total_stages`.
///
/// Stays below 1.0 for every shown challenge, including the last one.
pub fn progress_fraction(
    stage: usize,
    challenge: usize,
    challenges_in_stage: usize,
    total_stages: usize,
) -> f64 {
    if total_stages == 0 || challenges_in_stage == 0 {
        return 0.0;
    }
    (stage as f64 + challenge as f64 / challenges_in_stage as f64) / total_stages as f64
}

/// One quiz session over a catalog.
#[derive(Debug, Clone)]
pub struct Quiz {
    catalog: Catalog,
    state: GameState,
}

impl Quiz {
    pub fn new(catalog: Catalog) -> Self {
        let state = GameState::new(&catalog);
        Self { catalog, state }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn stats(&self) -> StatSet {
        self.state.stats()
    }

    /// Progress through the catalog for the current pointers.
    pub fn progress(&self) -> f64 {
        let in_stage = self
            .catalog
            .stage(self.state.stage_index)
            .map_or(1, |s| s.challenges.len());
        progress_fraction(
            self.state.stage_index,
            self.state.challenge_index,
            in_stage,
            self.catalog.stage_count(),
        )
    }

    /// The challenge currently on screen, if one is.
    pub fn current_challenge(&self) -> Option<ChallengeView> {
        match self.state.phase {
            Phase::AwaitingAnswer { stage, challenge }
            | Phase::ShowingFeedback {
                stage, challenge, ..
            } => Some(self.view_at(stage, challenge)),
            _ => None,
        }
    }

    /// `NotStarted → AwaitingAnswer(0,0)`. Rejected from any other phase.
    pub fn start(&mut self) -> Result<ChallengeView, QuizError> {
        if self.state.phase != Phase::NotStarted {
            return Err(self.not_permitted(Action::Start));
        }
        self.state.reset_to_first_challenge();
        log::info!(
            "Quiz started: {} stages, {} challenges",
            self.catalog.stage_count(),
            self.catalog.total_challenges()
        );
        Ok(self.view_at(0, 0))
    }

    /// Score the selected option. At most one scored answer per challenge.
    pub fn submit_answer(&mut self, selected: usize) -> Result<FeedbackView, QuizError> {
        let (stage, challenge) = match self.state.phase {
            Phase::AwaitingAnswer { stage, challenge } if !self.state.answered => {
                (stage, challenge)
            }
            _ => return Err(self.not_permitted(Action::SubmitAnswer)),
        };
        if selected >= OPTIONS_PER_CHALLENGE {
            return Err(QuizError::OptionOutOfRange {
                index: selected,
                options: OPTIONS_PER_CHALLENGE,
            });
        }

        let current = &self.catalog.stages()[stage].challenges[challenge];
        let is_correct = current.is_correct(selected);
        let correct_option = current.answer;
        let feedback = current.feedback.clone();

        // The catalog validates one mapping per stage, so this always applies.
        let Some(change) = self.state.stats.apply_outcome(stage, is_correct) else {
            return Err(self.not_permitted(Action::SubmitAnswer));
        };
        if is_correct {
            self.state.score += POINTS_PER_CORRECT;
        }
        self.state.answered = true;
        self.state.phase = Phase::ShowingFeedback {
            stage,
            challenge,
            selected,
        };

        log::debug!(
            "Stage {} challenge {}: option {} {} ({:?} {:+} -> {})",
            stage,
            challenge,
            selected,
            if is_correct { "correct" } else { "incorrect" },
            change.kind,
            change.delta,
            change.value
        );

        Ok(FeedbackView {
            is_correct,
            selected,
            correct_option,
            feedback,
            change,
            stats: self.state.stats(),
            score: self.state.score,
        })
    }

    /// Move past the feedback to the next challenge, wrapping stages, or finish.
    pub fn advance(&mut self) -> Result<Advance, QuizError> {
        if !matches!(self.state.phase, Phase::ShowingFeedback { .. }) {
            return Err(self.not_permitted(Action::Continue));
        }

        self.state.challenge_index += 1;
        let in_stage = self.catalog.stages()[self.state.stage_index].challenges.len();
        if self.state.challenge_index >= in_stage {
            self.state.challenge_index = 0;
            self.state.stage_index += 1;
        }

        if self.state.stage_index >= self.catalog.stage_count() {
            let final_score = self.state.score;
            self.state.phase = Phase::Finished { final_score };
            let summary = EndSummary::new(
                final_score,
                self.catalog.max_score(),
                self.state.stats(),
                self.catalog.text(),
            );
            log::info!(
                "Quiz finished: {}/{} ({:?})",
                final_score,
                summary.max_score,
                summary.tier
            );
            return Ok(Advance::Finished(summary));
        }

        let (stage, challenge) = (self.state.stage_index, self.state.challenge_index);
        self.state.answered = false;
        self.state.phase = Phase::AwaitingAnswer { stage, challenge };
        Ok(Advance::Next(self.view_at(stage, challenge)))
    }

    /// Back to the first challenge with score and stats reset. Allowed from any phase.
    pub fn restart(&mut self) -> ChallengeView {
        log::info!("Quiz restarted from {}", self.state.phase.describe());
        self.state.reset_to_first_challenge();
        self.view_at(0, 0)
    }

    fn view_at(&self, stage: usize, challenge: usize) -> ChallengeView {
        let s = &self.catalog.stages()[stage];
        let c = &s.challenges[challenge];
        ChallengeView {
            stage_index: stage,
            challenge_index: challenge,
            stage_title: s.title.clone(),
            theme: s.theme.clone(),
            prompt: c.prompt.clone(),
            options: c.options.clone(),
        }
    }

    fn not_permitted(&self, action: Action) -> QuizError {
        QuizError::NotPermitted {
            action,
            phase: self.state.phase.describe(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Challenge, CompanionText, Stage};
    use crate::outcome::OutcomeTier;
    use crate::stats::StatKind;

    fn quiz() -> Quiz {
        Quiz::new(Catalog::standard().unwrap())
    }

    fn started() -> Quiz {
        let mut q = quiz();
        q.start().unwrap();
        q
    }

    #[test]
    fn new_quiz_is_not_started() {
        let q = quiz();
        assert_eq!(q.phase(), Phase::NotStarted);
        assert_eq!(q.score(), 0);
        assert!(q.current_challenge().is_none());
    }

    #[test]
    fn start_shows_first_challenge() {
        let mut q = quiz();
        let view = q.start().unwrap();
        assert_eq!(view.stage_title, "Prenatal & Infancy");
        assert_eq!(view.theme, "stage-theme-prenatal");
        assert_eq!(view.options.len(), 3);
        assert_eq!(
            q.phase(),
            Phase::AwaitingAnswer {
                stage: 0,
                challenge: 0
            }
        );
        assert!(!q.state().answered);
    }

    #[test]
    fn double_start_rejected() {
        let mut q = started();
        q.submit_answer(0).unwrap();
        let before = q.state().clone();
        let err = q.start().unwrap_err();
        assert!(matches!(
            err,
            QuizError::NotPermitted {
                action: Action::Start,
                ..
            }
        ));
        assert_eq!(q.state().phase, before.phase);
        assert_eq!(q.score(), before.score);
    }

    #[test]
    fn correct_answer_scores_and_moves_stat() {
        let mut q = started();
        let fb = q.submit_answer(0).unwrap();
        assert!(fb.is_correct);
        assert_eq!(fb.score, 10);
        assert_eq!(fb.change.kind, StatKind::AttachmentSecurity);
        assert_eq!(fb.stats.attachment_security, 60);
        assert!(fb.feedback.starts_with("Reducing stress"));
        assert!(q.state().answered);
    }

    #[test]
    fn incorrect_answer_keeps_score() {
        let mut q = started();
        let fb = q.submit_answer(2).unwrap();
        assert!(!fb.is_correct);
        assert_eq!(fb.correct_option, 0);
        assert_eq!(q.score(), 0);
        assert_eq!(q.stats().attachment_security, 45);
    }

    #[test]
    fn second_answer_on_same_challenge_ignored() {
        let mut q = started();
        q.submit_answer(0).unwrap();
        let err = q.submit_answer(0).unwrap_err();
        assert!(matches!(
            err,
            QuizError::NotPermitted {
                action: Action::SubmitAnswer,
                ..
            }
        ));
        assert_eq!(q.score(), 10);
        assert_eq!(q.stats().attachment_security, 60);
    }

    #[test]
    fn out_of_range_option_rejected_without_mutation() {
        let mut q = started();
        let err = q.submit_answer(5).unwrap_err();
        assert_eq!(
            err,
            QuizError::OptionOutOfRange {
                index: 5,
                options: 3
            }
        );
        assert_eq!(
            q.phase(),
            Phase::AwaitingAnswer {
                stage: 0,
                challenge: 0
            }
        );
        assert_eq!(q.score(), 0);
        assert_eq!(q.stats(), StatSet::default());
        assert!(!q.state().answered);
    }

    #[test]
    fn submit_before_start_rejected() {
        let mut q = quiz();
        assert!(q.submit_answer(0).is_err());
        assert_eq!(q.phase(), Phase::NotStarted);
    }

    #[test]
    fn continue_without_answer_rejected() {
        let mut q = started();
        q.submit_answer(1).unwrap();
        q.advance().unwrap();
        let err = q.advance().unwrap_err();
        assert!(matches!(
            err,
            QuizError::NotPermitted {
                action: Action::Continue,
                ..
            }
        ));
        assert_eq!(
            q.phase(),
            Phase::AwaitingAnswer {
                stage: 0,
                challenge: 1
            }
        );
    }

    #[test]
    fn continue_wraps_into_next_stage() {
        let mut q = started();
        q.submit_answer(0).unwrap();
        q.advance().unwrap();
        q.submit_answer(0).unwrap();
        match q.advance().unwrap() {
            Advance::Next(view) => {
                assert_eq!(view.stage_index, 1);
                assert_eq!(view.challenge_index, 0);
                assert_eq!(view.stage_title, "Childhood");
            }
            other => panic!("expected next challenge, got {other:?}"),
        }
        assert!(!q.state().answered);
    }

    #[test]
    fn all_correct_finishes_excellent() {
        let mut q = started();
        let mut finished = 0;
        loop {
            q.submit_answer(0).unwrap();
            if let Advance::Finished(summary) = q.advance().unwrap() {
                finished += 1;
                assert_eq!(summary.final_score, 100);
                assert_eq!(summary.max_score, 100);
                assert_eq!(summary.tier, OutcomeTier::Excellent);
                // Two +10s per stage
                for (_, v) in summary.stats.iter() {
                    assert_eq!(v, 70);
                }
                break;
            }
        }
        assert_eq!(finished, 1);
        assert_eq!(q.phase(), Phase::Finished { final_score: 100 });
        assert!(q.advance().is_err());
        assert!(q.submit_answer(0).is_err());
    }

    #[test]
    fn restart_from_finished_resets_everything() {
        let mut q = started();
        loop {
            q.submit_answer(1).unwrap();
            if let Advance::Finished(_) = q.advance().unwrap() {
                break;
            }
        }
        let view = q.restart();
        assert_eq!((view.stage_index, view.challenge_index), (0, 0));
        assert_eq!(q.score(), 0);
        assert_eq!(q.stats(), StatSet::default());
        assert_eq!(
            q.phase(),
            Phase::AwaitingAnswer {
                stage: 0,
                challenge: 0
            }
        );
    }

    #[test]
    fn restart_allowed_before_start_and_mid_feedback() {
        let mut q = quiz();
        q.restart();
        assert!(matches!(q.phase(), Phase::AwaitingAnswer { .. }));

        q.submit_answer(0).unwrap();
        q.restart();
        assert_eq!(q.score(), 0);
        assert!(!q.state().answered);
    }

    #[test]
    fn progress_never_reaches_one_on_last_challenge() {
        let mut q = started();
        assert_eq!(q.progress(), 0.0);
        for _ in 0..9 {
            q.submit_answer(0).unwrap();
            q.advance().unwrap();
        }
        assert_eq!(
            q.phase(),
            Phase::AwaitingAnswer {
                stage: 4,
                challenge: 1
            }
        );
        let p = q.progress();
        assert!((p - 0.9).abs() < 1e-9, "progress={p}");
        assert!(p < 1.0);
    }

    #[test]
    fn progress_fraction_formula() {
        assert_eq!(progress_fraction(0, 0, 2, 5), 0.0);
        assert!((progress_fraction(0, 1, 2, 5) - 0.1).abs() < 1e-9);
        assert!((progress_fraction(2, 0, 2, 5) - 0.4).abs() < 1e-9);
        assert_eq!(progress_fraction(0, 0, 0, 5), 0.0);
    }

    #[test]
    fn uneven_stages_advance_correctly() {
        let make = |n: usize| Stage {
            title: format!("s{n}"),
            theme: String::new(),
            challenges: (0..n)
                .map(|_| Challenge::new("p", ["a", "b", "c"], 1, "f"))
                .collect(),
        };
        let catalog = Catalog::new(
            vec![make(3), make(1)],
            vec![StatKind::IdentityClarity, StatKind::SocialSupport],
            CompanionText::default(),
        )
        .unwrap();
        let mut q = Quiz::new(catalog);
        q.start().unwrap();

        let mut visited = vec![];
        loop {
            if let Phase::AwaitingAnswer { stage, challenge } = q.phase() {
                visited.push((stage, challenge));
            }
            q.submit_answer(1).unwrap();
            if let Advance::Finished(s) = q.advance().unwrap() {
                assert_eq!(s.final_score, 40);
                assert_eq!(s.max_score, 40);
                break;
            }
        }
        assert_eq!(visited, vec![(0, 0), (0, 1), (0, 2), (1, 0)]);
        assert_eq!(q.stats().identity_clarity, 80);
        assert_eq!(q.stats().social_support, 60);
    }
}
