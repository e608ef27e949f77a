use serde::Deserialize;

/// Root response from the getHansard search endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub rows: Vec<TranscriptRow>,
}

/// One speaker utterance returned by the search API.
///
/// Every field is optional in practice; rows with missing pieces must
/// deserialize rather than fail the whole response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranscriptRow {
    #[serde(default)]
    pub speaker: Option<SpeakerField>,
    /// Free text of the utterance
    #[serde(default)]
    pub body: String,
    /// Enclosing debate, when the API includes it
    #[serde(default)]
    pub parent: Option<ParentDebate>,
    /// Relative permalink path into the transcript
    #[serde(default)]
    pub listurl: String,
}

/// Enclosing debate metadata
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParentDebate {
    /// Debate title
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub speaker: Option<SpeakerField>,
}

/// The API's `speaker` field arrives in several shapes: a structured
/// record, a bare name string, or junk. The catch-all keeps a malformed
/// speaker from failing the row.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SpeakerField {
    Details(SpeakerDetails),
    Name(String),
    Other(serde_json::Value),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpeakerDetails {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub party: Option<String>,
    #[serde(default)]
    pub constituency: Option<String>,
}

/// Placeholder names the API substitutes when attribution failed
const PLACEHOLDER_NAMES: &[&str] = &["unknown", "unknown mp", "several members"];

fn presentable(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() || PLACEHOLDER_NAMES.contains(&trimmed.to_lowercase().as_str()) {
        return None;
    }
    Some(trimmed.to_string())
}

impl SpeakerField {
    /// Resolve a display name: bare string form, then the `name` field,
    /// then `"{first} {last}"`. Placeholders resolve to `None`.
    pub fn display_name(&self) -> Option<String> {
        match self {
            SpeakerField::Name(name) => presentable(name),
            SpeakerField::Details(details) => details.display_name(),
            SpeakerField::Other(_) => None,
        }
    }

    pub fn party(&self) -> Option<&str> {
        match self {
            SpeakerField::Details(details) => details.party.as_deref(),
            _ => None,
        }
    }

    pub fn constituency(&self) -> Option<&str> {
        match self {
            SpeakerField::Details(details) => details.constituency.as_deref(),
            _ => None,
        }
    }
}

impl SpeakerDetails {
    fn display_name(&self) -> Option<String> {
        if let Some(name) = self.name.as_deref().and_then(presentable) {
            return Some(name);
        }
        let first = self.first_name.as_deref().unwrap_or("");
        let last = self.last_name.as_deref().unwrap_or("");
        presentable(format!("{} {}", first, last).trim())
    }
}

impl TranscriptRow {
    /// Resolve the speaker display name, falling back to the enclosing
    /// debate's speaker when the row's own attribution is unusable.
    pub fn speaker_name(&self) -> Option<String> {
        if let Some(name) = self.speaker.as_ref().and_then(SpeakerField::display_name) {
            return Some(name);
        }
        self.parent
            .as_ref()
            .and_then(|p| p.speaker.as_ref())
            .and_then(SpeakerField::display_name)
    }

    /// Title of the enclosing debate, or empty when absent
    pub fn debate_title(&self) -> &str {
        self.parent.as_ref().map(|p| p.body.as_str()).unwrap_or("")
    }

    pub fn party(&self) -> Option<&str> {
        self.speaker.as_ref().and_then(SpeakerField::party)
    }

    pub fn constituency(&self) -> Option<&str> {
        self.speaker.as_ref().and_then(SpeakerField::constituency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_structured_speaker() {
        let json = r#"{
            "rows": [{
                "speaker": {"first_name": "Maria", "last_name": "Eagle", "party": "Labour", "constituency": "Garston"},
                "body": "The care system is failing teenage boys.",
                "parent": {"body": "Children in Care"},
                "listurl": "/debates/?id=2024-01-11a.1.0"
            }]
        }"#;

        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.rows.len(), 1);

        let row = &response.rows[0];
        assert_eq!(row.speaker_name().as_deref(), Some("Maria Eagle"));
        assert_eq!(row.party(), Some("Labour"));
        assert_eq!(row.constituency(), Some("Garston"));
        assert_eq!(row.debate_title(), "Children in Care");
    }

    #[test]
    fn test_parse_string_speaker() {
        let json = r#"{"rows": [{"speaker": "John Healey", "body": "x", "listurl": ""}]}"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.rows[0].speaker_name().as_deref(),
            Some("John Healey")
        );
        assert_eq!(response.rows[0].party(), None);
    }

    #[test]
    fn test_parse_name_field_preferred_over_parts() {
        let json = r#"{"rows": [{"speaker": {"name": "Sir Edward Davey", "first_name": "Edward", "last_name": "Davey"}, "body": "x"}]}"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.rows[0].speaker_name().as_deref(),
            Some("Sir Edward Davey")
        );
    }

    #[test]
    fn test_malformed_speaker_does_not_fail_row() {
        let json = r#"{"rows": [
            {"speaker": 42, "body": "a"},
            {"body": "b"},
            {"speaker": {"name": "Unknown MP"}, "body": "c"}
        ]}"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.rows.len(), 3);
        for row in &response.rows {
            assert_eq!(row.speaker_name(), None);
        }
    }

    #[test]
    fn test_parent_speaker_fallback() {
        let json = r#"{"rows": [{
            "body": "intervention",
            "parent": {"body": "Topical Questions", "speaker": {"first_name": "Wes", "last_name": "Streeting"}}
        }]}"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.rows[0].speaker_name().as_deref(),
            Some("Wes Streeting")
        );
    }

    #[test]
    fn test_missing_rows_key() {
        let response: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.rows.is_empty());
    }

    #[test]
    fn test_empty_rows_array() {
        let response: SearchResponse = serde_json::from_str(r#"{"rows": []}"#).unwrap();
        assert!(response.rows.is_empty());
    }
}
