use std::collections::HashMap;

use tracing::debug;

use crate::models::{MatchTier, TranscriptRow};
use crate::relevance::score_record;

/// Characters of raw body kept as the snippet for Loose rows, which were
/// never scored against a window
pub const LOOSE_SNIPPET_CHARS: usize = 200;

/// Display payload kept per speaker: the first row seen at the best tier
/// seen so far.
#[derive(Debug, Clone)]
pub struct SpeakerPayload {
    pub party: Option<String>,
    pub constituency: Option<String>,
    /// Relative permalink path from the API
    pub link: String,
    pub snippet: String,
    pub debate_title: String,
    pub tier: MatchTier,
}

/// Per-tier mention counters for one speaker
#[derive(Debug, Clone, Copy, Default)]
pub struct TierCounts {
    pub strict: usize,
    pub fuzzy: usize,
    pub loose: usize,
}

impl TierCounts {
    pub fn increment(&mut self, tier: MatchTier) {
        match tier {
            MatchTier::Strict => self.strict += 1,
            MatchTier::Fuzzy => self.fuzzy += 1,
            MatchTier::Loose => self.loose += 1,
        }
    }

    pub fn for_tier(&self, tier: MatchTier) -> usize {
        match tier {
            MatchTier::Strict => self.strict,
            MatchTier::Fuzzy => self.fuzzy,
            MatchTier::Loose => self.loose,
        }
    }

    pub fn total(&self) -> usize {
        self.strict + self.fuzzy + self.loose
    }
}

/// One speaker's aggregated matches
#[derive(Debug, Clone)]
pub struct SpeakerEntry {
    pub name: String,
    pub counts: TierCounts,
    pub payload: SpeakerPayload,
}

/// Aggregation of one query's rows by speaker, in first-seen order.
///
/// Built fresh per query and discarded once the response is rendered;
/// nothing here outlives a single invocation.
#[derive(Debug, Default)]
pub struct SpeakerLedger {
    entries: Vec<SpeakerEntry>,
    index: HashMap<String, usize>,
}

impl SpeakerLedger {
    /// Record one classified row for a speaker.
    pub fn observe(&mut self, name: String, tier: MatchTier, payload: SpeakerPayload) {
        match self.index.get(&name) {
            Some(&i) => {
                let entry = &mut self.entries[i];
                entry.counts.increment(tier);
                entry.payload = merge_payload(entry.payload.clone(), payload);
            }
            None => {
                let mut counts = TierCounts::default();
                counts.increment(tier);
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push(SpeakerEntry {
                    name,
                    counts,
                    payload,
                });
            }
        }
    }

    /// Speakers in first-seen order
    pub fn entries(&self) -> &[SpeakerEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Keep the stored payload unless the new row's tier strictly outranks it.
/// Ties keep the first-seen payload, so a speaker's stored tier only ever
/// upgrades.
pub fn merge_payload(existing: SpeakerPayload, candidate: SpeakerPayload) -> SpeakerPayload {
    if candidate.tier > existing.tier {
        candidate
    } else {
        existing
    }
}

/// Score and classify every row, aggregating by resolved speaker name.
///
/// Rows whose speaker cannot be resolved are skipped entirely. Rows are
/// processed in API response order, which fixes the first-seen order used
/// for ranking ties.
pub fn aggregate_rows(
    rows: &[TranscriptRow],
    keywords: &str,
    extra_context: &str,
) -> SpeakerLedger {
    let mut ledger = SpeakerLedger::default();

    for row in rows {
        let Some(name) = row.speaker_name() else {
            debug!("skipping row with unresolvable speaker");
            continue;
        };

        let scored = score_record(&row.body, row.debate_title(), keywords, extra_context);
        let tier = MatchTier::from_score(scored.score);

        let snippet = match tier {
            // Loose rows were never meaningfully scored; show the opening
            // of the utterance instead of an arbitrary window.
            MatchTier::Loose => truncate_chars(&row.body, LOOSE_SNIPPET_CHARS),
            _ => scored.snippet,
        };

        let payload = SpeakerPayload {
            party: row.party().map(str::to_string),
            constituency: row.constituency().map(str::to_string),
            link: row.listurl.clone(),
            snippet,
            debate_title: row.debate_title().to_string(),
            tier,
        };

        ledger.observe(name, tier, payload);
    }

    ledger
}

/// Truncate to at most `max_chars` characters on a char boundary, with an
/// ellipsis when anything was cut.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => format!("{}...", &text[..byte_index]),
        None => text.to_string(),
    }
}
