//! Psychosocial stat counters and the tracker that owns them.
//!
//! Five integer counters start at [`STAT_BASELINE`]. Each answered challenge
//! moves exactly one of them, chosen by the stage the challenge belongs to:
//! +10 for a correct answer, -5 for an incorrect one. Counters are never
//! clamped; they can drop below zero or climb past 100.
//!
//! ```
//! use lifepath_logic::stats::{StatKind, StatTracker};
//!
//! let mut tracker = StatTracker::new(StatKind::ALL.to_vec());
//! tracker.apply_outcome(2, true);
//! assert_eq!(tracker.snapshot().get(StatKind::IdentityClarity), 60);
//! ```

use serde::{Deserialize, Serialize};

/// Starting value of every counter.
pub const STAT_BASELINE: i32 = 50;

/// Counter change for a correct answer.
pub const CORRECT_DELTA: i32 = 10;

/// Counter change for an incorrect answer.
pub const INCORRECT_DELTA: i32 = -5;

/// The five tracked counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatKind {
    AttachmentSecurity,
    EmotionalRegulation,
    IdentityClarity,
    SocialSupport,
    CognitiveHealth,
}

impl StatKind {
    /// All counters in display order. Also the stage mapping of the shipped content.
    pub const ALL: [StatKind; 5] = [
        StatKind::AttachmentSecurity,
        StatKind::EmotionalRegulation,
        StatKind::IdentityClarity,
        StatKind::SocialSupport,
        StatKind::CognitiveHealth,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            StatKind::AttachmentSecurity => "Attachment Security",
            StatKind::EmotionalRegulation => "Emotional Regulation",
            StatKind::IdentityClarity => "Identity Clarity",
            StatKind::SocialSupport => "Social Support",
            StatKind::CognitiveHealth => "Cognitive Health",
        }
    }
}

/// Snapshot of all five counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatSet {
    pub attachment_security: i32,
    pub emotional_regulation: i32,
    pub identity_clarity: i32,
    pub social_support: i32,
    pub cognitive_health: i32,
}

impl Default for StatSet {
    fn default() -> Self {
        Self {
            attachment_security: STAT_BASELINE,
            emotional_regulation: STAT_BASELINE,
            identity_clarity: STAT_BASELINE,
            social_support: STAT_BASELINE,
            cognitive_health: STAT_BASELINE,
        }
    }
}

impl StatSet {
    /// Current value of one counter.
    pub fn get(&self, kind: StatKind) -> i32 {
        match kind {
            StatKind::AttachmentSecurity => self.attachment_security,
            StatKind::EmotionalRegulation => self.emotional_regulation,
            StatKind::IdentityClarity => self.identity_clarity,
            StatKind::SocialSupport => self.social_support,
            StatKind::CognitiveHealth => self.cognitive_health,
        }
    }

    fn slot_mut(&mut self, kind: StatKind) -> &mut i32 {
        match kind {
            StatKind::AttachmentSecurity => &mut self.attachment_security,
            StatKind::EmotionalRegulation => &mut self.emotional_regulation,
            StatKind::IdentityClarity => &mut self.identity_clarity,
            StatKind::SocialSupport => &mut self.social_support,
            StatKind::CognitiveHealth => &mut self.cognitive_health,
        }
    }

    /// `(kind, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (StatKind, i32)> + '_ {
        StatKind::ALL.iter().map(move |&k| (k, self.get(k)))
    }
}

/// One counter change produced by an answered challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatChange {
    pub kind: StatKind,
    pub delta: i32,
    /// Value after the change.
    pub value: i32,
}

/// Sole owner of the [`StatSet`] for a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatTracker {
    stats: StatSet,
    /// Stage index → counter. Validated against the stage count by the catalog.
    stage_map: Vec<StatKind>,
}

impl StatTracker {
    pub fn new(stage_map: Vec<StatKind>) -> Self {
        Self {
            stats: StatSet::default(),
            stage_map,
        }
    }

    /// Counter mapped to a stage, if the stage is mapped.
    pub fn kind_for_stage(&self, stage_index: usize) -> Option<StatKind> {
        self.stage_map.get(stage_index).copied()
    }

    /// Move the stage's counter by +10 or -5. Returns `None` for an unmapped stage.
    pub fn apply_outcome(&mut self, stage_index: usize, was_correct: bool) -> Option<StatChange> {
        let kind = self.kind_for_stage(stage_index)?;
        let delta = if was_correct {
            CORRECT_DELTA
        } else {
            INCORRECT_DELTA
        };
        let slot = self.stats.slot_mut(kind);
        *slot += delta;
        Some(StatChange {
            kind,
            delta,
            value: *slot,
        })
    }

    /// All counters back to the baseline.
    pub fn reset(&mut self) {
        self.stats = StatSet::default();
    }

    pub fn snapshot(&self) -> StatSet {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> StatTracker {
        StatTracker::new(StatKind::ALL.to_vec())
    }

    #[test]
    fn starts_at_baseline() {
        let t = tracker();
        for (_, v) in t.snapshot().iter() {
            assert_eq!(v, 50);
        }
    }

    #[test]
    fn correct_adds_ten_to_mapped_stat_only() {
        let mut t = tracker();
        let change = t.apply_outcome(0, true).unwrap();
        assert_eq!(change.kind, StatKind::AttachmentSecurity);
        assert_eq!(change.delta, 10);
        assert_eq!(change.value, 60);

        let s = t.snapshot();
        assert_eq!(s.attachment_security, 60);
        assert_eq!(s.emotional_regulation, 50);
        assert_eq!(s.identity_clarity, 50);
        assert_eq!(s.social_support, 50);
        assert_eq!(s.cognitive_health, 50);
    }

    #[test]
    fn incorrect_subtracts_five() {
        let mut t = tracker();
        let change = t.apply_outcome(4, false).unwrap();
        assert_eq!(change.kind, StatKind::CognitiveHealth);
        assert_eq!(t.snapshot().cognitive_health, 45);
    }

    #[test]
    fn no_clamping_in_either_direction() {
        let mut t = tracker();
        for _ in 0..11 {
            t.apply_outcome(1, false);
        }
        assert_eq!(t.snapshot().emotional_regulation, -5);

        for _ in 0..8 {
            t.apply_outcome(3, true);
        }
        assert_eq!(t.snapshot().social_support, 130);
    }

    #[test]
    fn unmapped_stage_changes_nothing() {
        let mut t = tracker();
        assert!(t.apply_outcome(5, true).is_none());
        assert_eq!(t.snapshot(), StatSet::default());
    }

    #[test]
    fn reset_restores_baseline() {
        let mut t = tracker();
        t.apply_outcome(0, true);
        t.apply_outcome(2, false);
        t.reset();
        assert_eq!(t.snapshot(), StatSet::default());
    }

    #[test]
    fn custom_mapping_is_respected() {
        let mut t = StatTracker::new(vec![StatKind::SocialSupport, StatKind::SocialSupport]);
        t.apply_outcome(0, true);
        t.apply_outcome(1, true);
        assert_eq!(t.snapshot().social_support, 70);
        assert_eq!(t.snapshot().attachment_security, 50);
    }

    #[test]
    fn iter_follows_display_order() {
        let kinds: Vec<_> = StatSet::default().iter().map(|(k, _)| k).collect();
        assert_eq!(kinds, StatKind::ALL.to_vec());
    }
}
