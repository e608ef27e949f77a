use super::sentences::split_sentences;

/// Number of consecutive sentences scored together
pub const WINDOW_SENTENCES: usize = 3;

/// The best-scoring span of a row's body, used for tier assignment and as
/// the display snippet. Transient; one per scored row.
#[derive(Debug, Clone)]
pub struct ScoredWindow {
    /// Winning window text. Carries a `"..."` suffix when it is a slice of
    /// a longer body rather than the whole body.
    pub snippet: String,
    /// Fraction of keyword terms found in the window context, in [0,1]
    pub score: f64,
}

/// Score a row's body against the normalized keyword string.
///
/// Bodies of more than [`WINDOW_SENTENCES`] sentences are scanned with a
/// sliding window of exactly that many consecutive sentences; shorter
/// bodies are scored whole. Each window is scored together with the debate
/// title and any externally supplied context, and the maximum-scoring
/// window wins, earliest first on ties.
pub fn score_record(
    body: &str,
    debate_title: &str,
    keywords: &str,
    extra_context: &str,
) -> ScoredWindow {
    let mut terms: Vec<String> = keywords
        .split_whitespace()
        .map(|t| t.to_lowercase())
        .collect();
    terms.sort();
    terms.dedup();

    let sentences = split_sentences(body);
    if sentences.len() <= WINDOW_SENTENCES {
        return ScoredWindow {
            snippet: body.to_string(),
            score: context_score(debate_title, body, extra_context, &terms),
        };
    }

    let mut best_window = String::new();
    let mut best_score = -1.0;
    for start in 0..=sentences.len() - WINDOW_SENTENCES {
        let window = sentences[start..start + WINDOW_SENTENCES].join(" ");
        let score = context_score(debate_title, &window, extra_context, &terms);
        if score > best_score {
            best_score = score;
            best_window = window;
        }
    }

    best_window.push_str("...");
    ScoredWindow {
        snippet: best_window,
        score: best_score,
    }
}

/// Fraction of keyword terms present, case-insensitively, in the combined
/// title + window + extra context. Empty term set scores 0.
fn context_score(title: &str, window: &str, extra: &str, terms: &[String]) -> f64 {
    if terms.is_empty() {
        return 0.0;
    }
    let context = format!("{} {} {}", title, window, extra).to_lowercase();
    let hits = terms.iter().filter(|t| context.contains(t.as_str())).count();
    hits as f64 / terms.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_body_scored_whole() {
        let scored = score_record("Care homes need funding. Boys are affected.", "", "boys care", "");
        assert_eq!(scored.score, 1.0);
        assert!(!scored.snippet.ends_with("..."));
        assert_eq!(scored.snippet, "Care homes need funding. Boys are affected.");
    }

    #[test]
    fn test_sliding_window_finds_clustered_terms() {
        let body = "Unrelated opening remark. More filler here. Still nothing relevant. \
                    Teenage boys in residential care deserve better. The care system fails them. \
                    Boys leave care unsupported. Closing remark.";
        let scored = score_record(body, "", "teenage boys care", "");
        assert_eq!(scored.score, 1.0);
        assert!(scored.snippet.ends_with("..."));
        assert!(scored.snippet.contains("Teenage boys"));
    }

    #[test]
    fn test_score_bounds() {
        let scored = score_record("Nothing relevant at all.", "", "housing benefit reform", "");
        assert!(scored.score >= 0.0 && scored.score <= 1.0);
        assert_eq!(scored.score, 0.0);
    }

    #[test]
    fn test_empty_keywords_score_zero() {
        let scored = score_record("Some body text.", "A title", "", "extra");
        assert_eq!(scored.score, 0.0);
    }

    #[test]
    fn test_title_contributes_to_score() {
        let scored = score_record("They deserve support.", "Children in Care", "care support", "");
        assert_eq!(scored.score, 1.0);
    }

    #[test]
    fn test_extra_context_contributes_to_score() {
        let without = score_record("Funding was discussed.", "", "funding schools", "");
        let with = score_record("Funding was discussed.", "", "funding schools", "Schools Bill debate");
        assert_eq!(without.score, 0.5);
        assert_eq!(with.score, 1.0);
    }

    #[test]
    fn test_duplicate_terms_do_not_inflate_score() {
        let scored = score_record("Care matters.", "", "care care housing", "");
        assert_eq!(scored.score, 0.5);
    }

    #[test]
    fn test_tie_keeps_earliest_window() {
        let body = "Zebra one. Filler a. Filler b. Filler c. Zebra two. Filler d.";
        let scored = score_record(body, "", "zebra", "");
        assert!(scored.snippet.starts_with("Zebra one."));
    }

    #[test]
    fn test_case_insensitive_matching() {
        let scored = score_record("The NHS budget grew.", "", "nhs Budget", "");
        assert_eq!(scored.score, 1.0);
    }
}
