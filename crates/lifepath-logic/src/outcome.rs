//! Final-score tiers and the end-of-game summary.

use serde::{Deserialize, Serialize};

use crate::catalog::CompanionText;
use crate::stats::StatSet;

/// Closing band for a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutcomeTier {
    /// 80% of the maximum or better.
    Excellent,
    /// 60% up to 80%.
    Good,
    /// Below 60%.
    NeedsReview,
}

impl OutcomeTier {
    /// Tier for `score` out of `max_score`. Thresholds are percentages of the
    /// maximum, which for 100-point content are the plain 80/60 cut-offs.
    pub fn from_score(score: u32, max_score: u32) -> Self {
        if max_score == 0 {
            return Self::NeedsReview;
        }
        // Integer cross-multiplication keeps the boundaries exact.
        let scaled = score as u64 * 100;
        if scaled >= 80 * max_score as u64 {
            Self::Excellent
        } else if scaled >= 60 * max_score as u64 {
            Self::Good
        } else {
            Self::NeedsReview
        }
    }

    pub fn message(self, text: &CompanionText) -> &str {
        match self {
            Self::Excellent => &text.excellent,
            Self::Good => &text.good,
            Self::NeedsReview => &text.needs_review,
        }
    }
}

/// Everything the display needs for the end screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndSummary {
    pub final_score: u32,
    pub max_score: u32,
    pub tier: OutcomeTier,
    pub message: String,
    pub stats: StatSet,
}

impl EndSummary {
    pub fn new(final_score: u32, max_score: u32, stats: StatSet, text: &CompanionText) -> Self {
        let tier = OutcomeTier::from_score(final_score, max_score);
        Self {
            final_score,
            max_score,
            tier,
            message: tier.message(text).to_string(),
            stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries_out_of_100() {
        assert_eq!(OutcomeTier::from_score(100, 100), OutcomeTier::Excellent);
        assert_eq!(OutcomeTier::from_score(80, 100), OutcomeTier::Excellent);
        assert_eq!(OutcomeTier::from_score(70, 100), OutcomeTier::Good);
        assert_eq!(OutcomeTier::from_score(60, 100), OutcomeTier::Good);
        assert_eq!(OutcomeTier::from_score(50, 100), OutcomeTier::NeedsReview);
        assert_eq!(OutcomeTier::from_score(0, 100), OutcomeTier::NeedsReview);
    }

    #[test]
    fn tiers_scale_with_max_score() {
        // 4 of 5 correct on a 50-point catalog is 80%
        assert_eq!(OutcomeTier::from_score(40, 50), OutcomeTier::Excellent);
        assert_eq!(OutcomeTier::from_score(30, 50), OutcomeTier::Good);
        assert_eq!(OutcomeTier::from_score(20, 50), OutcomeTier::NeedsReview);
    }

    #[test]
    fn zero_max_is_needs_review() {
        assert_eq!(OutcomeTier::from_score(0, 0), OutcomeTier::NeedsReview);
    }

    #[test]
    fn summary_carries_verbatim_message() {
        let text = CompanionText::default();
        let s = EndSummary::new(60, 100, StatSet::default(), &text);
        assert_eq!(s.tier, OutcomeTier::Good);
        assert!(s.message.starts_with("Good work!"));

        let s = EndSummary::new(10, 100, StatSet::default(), &text);
        assert!(s.message.starts_with("This journey highlights"));
    }
}
