/// Words stripped from a query before it is used as a search string and as
/// the relevance vocabulary. Conversational filler like "who spoke about"
/// would otherwise dominate the keyword search.
pub const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "or", "the", "of", "in", "on", "at", "to", "for", "about", "who", "what",
    "when", "where", "why", "how", "did", "do", "does", "is", "are", "was", "were", "has", "have",
    "anyone", "anybody", "spoke", "speak", "said", "say", "talk", "talked", "mention", "mentioned",
];

/// Punctuation trimmed from token edges before the stop-word test
const EDGE_PUNCTUATION: [char; 4] = ['?', ',', '.', '!'];

/// Reduce a raw query to its content keywords.
///
/// Tokens keep their original casing; the lower-cased copy is used only
/// for the stop-word membership test. If every token is filtered out the
/// raw query is returned unchanged, so the search never receives an empty
/// string.
pub fn normalize_query(raw: &str) -> String {
    let kept: Vec<&str> = raw
        .split_whitespace()
        .filter_map(|token| {
            let stripped = token.trim_matches(EDGE_PUNCTUATION);
            if stripped.is_empty() {
                return None;
            }
            let lowered = stripped.to_lowercase();
            if STOP_WORDS.contains(&lowered.as_str()) {
                None
            } else {
                Some(stripped)
            }
        })
        .collect();

    if kept.is_empty() {
        raw.to_string()
    } else {
        kept.join(" ")
    }
}
