use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::config::BotConfig;

use super::{ContextProvider, DebateContext};

/// Web-search enrichment against a configurable JSON search endpoint.
///
/// Unconfigured (no endpoint URL) it is a permanent no-op. Configured, it
/// sends one GET per query and takes the first result; every failure
/// degrades to `None`.
pub struct WebSearchContext {
    client: Client,
    endpoint: Option<String>,
    api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WebSearchResponse {
    #[serde(default)]
    results: Vec<WebSearchResult>,
}

#[derive(Debug, Deserialize)]
struct WebSearchResult {
    #[serde(default)]
    title: String,
    #[serde(default)]
    snippet: String,
}

impl WebSearchContext {
    pub fn new(config: &BotConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(config.request_timeout)
                .build()
                .unwrap_or_else(|_| Client::new()),
            endpoint: config.context_endpoint.clone(),
            api_key: config.context_api_key.clone(),
        }
    }

    async fn lookup(&self, endpoint: &str, query: &str) -> Option<DebateContext> {
        let mut request = self.client.get(endpoint).query(&[("q", query)]);
        if let Some(key) = self.api_key.as_deref() {
            request = request.query(&[("key", key)]);
        }

        let response = match request.send().await {
            Ok(r) => r,
            Err(e) => {
                debug!(error = %e, "web context lookup failed");
                return None;
            }
        };
        if !response.status().is_success() {
            debug!(status = %response.status(), "web context lookup rejected");
            return None;
        }

        let parsed: WebSearchResponse = match response.json().await {
            Ok(p) => p,
            Err(e) => {
                debug!(error = %e, "web context response unparsable");
                return None;
            }
        };

        parsed
            .results
            .into_iter()
            .find(|r| !r.title.is_empty() || !r.snippet.is_empty())
            .map(|r| DebateContext {
                snippet: r.snippet,
                title: r.title,
            })
    }
}

impl ContextProvider for WebSearchContext {
    async fn debate_context(&self, query: &str) -> Option<DebateContext> {
        let endpoint = self.endpoint.clone()?;
        self.lookup(&endpoint, query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrich::ContextProvider;

    #[tokio::test]
    async fn test_unconfigured_provider_is_noop() {
        let provider = WebSearchContext::new(&BotConfig::default());
        assert!(provider.debate_context("teenage boys care").await.is_none());
    }

    #[test]
    fn test_response_parsing_skips_empty_results() {
        let parsed: WebSearchResponse = serde_json::from_str(
            r#"{"results": [{"title": "", "snippet": ""}, {"title": "Care review", "snippet": "Background."}]}"#,
        )
        .unwrap();
        let first = parsed
            .results
            .into_iter()
            .find(|r| !r.title.is_empty() || !r.snippet.is_empty())
            .unwrap();
        assert_eq!(first.title, "Care review");
    }
}
