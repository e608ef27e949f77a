use crate::models::MatchTier;

use super::aggregate::{SpeakerLedger, SpeakerPayload};

/// Maximum speakers shown in one summary
pub const MAX_RANKED_SPEAKERS: usize = 5;

/// One speaker in the final ranking
#[derive(Debug, Clone)]
pub struct RankedSpeaker {
    pub name: String,
    /// Mentions at the selected tier (not the speaker's total)
    pub mentions: usize,
    pub payload: SpeakerPayload,
}

/// The selected tier and its speakers, count-descending
#[derive(Debug, Clone)]
pub struct RankedSpeakers {
    pub tier: MatchTier,
    pub speakers: Vec<RankedSpeaker>,
}

/// Pick the best non-empty tier (Strict, then Fuzzy, then Loose), sort its
/// speakers by mention count descending, and cap the list.
///
/// The sort is stable, so speakers with equal counts keep first-seen
/// order. Returns `None` when no speaker matched at any tier.
pub fn rank(ledger: &SpeakerLedger, cap: usize) -> Option<RankedSpeakers> {
    for tier in MatchTier::priority() {
        let mut speakers: Vec<RankedSpeaker> = ledger
            .entries()
            .iter()
            .filter(|e| e.counts.for_tier(tier) > 0)
            .map(|e| RankedSpeaker {
                name: e.name.clone(),
                mentions: e.counts.for_tier(tier),
                payload: e.payload.clone(),
            })
            .collect();

        if speakers.is_empty() {
            continue;
        }

        speakers.sort_by(|a, b| b.mentions.cmp(&a.mentions));
        speakers.truncate(cap);
        return Some(RankedSpeakers { tier, speakers });
    }

    None
}
