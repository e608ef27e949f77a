use std::time::Duration;

use crate::ranking::MAX_RANKED_SPEAKERS;

/// Configuration for the bot, constructed once and passed into the query
/// path by reference. None of the scoring or aggregation code reads the
/// environment.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// TheyWorkForYou API key. Missing key is reported per query as a
    /// configuration error, never as a crash.
    pub api_key: Option<String>,
    /// Maximum rows requested from the search API (the `num` parameter).
    pub result_limit: u32,
    /// Timeout applied to the search request.
    pub request_timeout: Duration,
    /// Host the search endpoint and transcript permalinks hang off.
    pub base_url: String,
    /// Maximum speakers shown in a ranked summary.
    pub max_ranked: usize,
    /// Optional web-search endpoint for debate context enrichment.
    pub context_endpoint: Option<String>,
    pub context_api_key: Option<String>,
    /// Optional Anthropic key for stance analysis.
    pub anthropic_api_key: Option<String>,
    pub anthropic_model: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            result_limit: 20,
            request_timeout: Duration::from_secs(10),
            base_url: "https://www.theyworkforyou.com".to_string(),
            max_ranked: MAX_RANKED_SPEAKERS,
            context_endpoint: None,
            context_api_key: None,
            anthropic_api_key: None,
            anthropic_model: "claude-sonnet-4-20250514".to_string(),
        }
    }
}

impl BotConfig {
    /// Create config from environment variables.
    ///
    /// Succeeds even without the Hansard key so the transport can still
    /// deliver a readable configuration-error message per query.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_key: non_empty_var("THEYWORKFORYOU_API_KEY"),
            result_limit: std::env::var("HANSARD_RESULT_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&n| n >= 1)
                .unwrap_or(defaults.result_limit),
            context_endpoint: non_empty_var("CONTEXT_SEARCH_URL"),
            context_api_key: non_empty_var("CONTEXT_SEARCH_KEY"),
            anthropic_api_key: non_empty_var("ANTHROPIC_API_KEY"),
            ..defaults
        }
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BotConfig::default();
        assert_eq!(config.result_limit, 20);
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.max_ranked, 5);
        assert!(!config.has_credential());
    }
}
