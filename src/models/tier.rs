use serde::{Deserialize, Serialize};

/// Strict requires every keyword term in the scored window.
pub const STRICT_THRESHOLD: f64 = 1.0;
/// Fuzzy requires at least half the keyword terms.
pub const FUZZY_THRESHOLD: f64 = 0.5;

/// Confidence bucket for how well a row matched the keyword set.
///
/// Variant order gives the total order used by payload upgrades and tier
/// priority: `Loose < Fuzzy < Strict`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    /// Returned by the keyword search but the terms were not close together
    Loose,
    /// At least half the terms found within one window
    Fuzzy,
    /// Every term found within one window
    Strict,
}

impl MatchTier {
    /// Classify a window score into a tier.
    pub fn from_score(score: f64) -> Self {
        if score >= STRICT_THRESHOLD {
            MatchTier::Strict
        } else if score >= FUZZY_THRESHOLD {
            MatchTier::Fuzzy
        } else {
            MatchTier::Loose
        }
    }

    /// Tiers in display priority order
    pub fn priority() -> [MatchTier; 3] {
        [MatchTier::Strict, MatchTier::Fuzzy, MatchTier::Loose]
    }

    /// Confidence wording for the summary header
    pub fn confidence_line(&self) -> &'static str {
        match self {
            MatchTier::Strict => "verified leading voice on this topic",
            MatchTier::Fuzzy => "partial match, best effort",
            MatchTier::Loose => "general mentions, keywords not close together",
        }
    }
}
