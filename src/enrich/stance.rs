use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::BotConfig;

use super::StanceSummarizer;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

const STANCE_SYSTEM_PROMPT: &str = "You summarize positions taken in UK parliamentary debate \
excerpts. Given a topic and per-speaker excerpts, write at most three short lines describing \
the overall stances. Plain statements only; do not invent positions not supported by the \
excerpts.";

/// Stance analysis via the Anthropic messages API.
///
/// Unconfigured (no API key) it is a permanent no-op; configured, any
/// request or parse failure degrades to `None` and is logged at debug.
pub struct AnthropicSummarizer {
    client: Client,
    api_key: Option<String>,
    model: String,
}

impl AnthropicSummarizer {
    pub fn new(config: &BotConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(config.request_timeout)
                .build()
                .unwrap_or_else(|_| Client::new()),
            api_key: config.anthropic_api_key.clone(),
            model: config.anthropic_model.clone(),
        }
    }

    fn build_prompt(query: &str, excerpts: &[(String, String)]) -> String {
        let mut prompt = format!("Topic: {}\n\nExcerpts:\n", query);
        for (speaker, snippet) in excerpts {
            prompt.push_str(&format!("- {}: {}\n", speaker, snippet));
        }
        prompt
    }

    async fn request_summary(&self, api_key: &str, prompt: String) -> Option<String> {
        let request = MessagesRequest {
            model: self.model.clone(),
            max_tokens: 512,
            system: Some(STANCE_SYSTEM_PROMPT.to_string()),
            messages: vec![Message {
                role: "user".to_string(),
                content: prompt,
            }],
        };

        let response = match self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                debug!(error = %e, "stance request failed");
                return None;
            }
        };

        if !response.status().is_success() {
            debug!(status = %response.status(), "stance request rejected");
            return None;
        }

        let parsed: MessagesResponse = match response.json().await {
            Ok(p) => p,
            Err(e) => {
                debug!(error = %e, "stance response unparsable");
                return None;
            }
        };

        parsed
            .content
            .into_iter()
            .find(|c| c.content_type == "text" && !c.text.trim().is_empty())
            .map(|c| c.text)
    }
}

impl StanceSummarizer for AnthropicSummarizer {
    async fn summarize(&self, query: &str, excerpts: &[(String, String)]) -> Option<String> {
        let api_key = self.api_key.clone()?;
        if excerpts.is_empty() {
            return None;
        }
        let prompt = Self::build_prompt(query, excerpts);
        self.request_summary(&api_key, prompt).await
    }
}

#[derive(Debug, Serialize)]
struct MessagesRequest {
    model: String,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    content_type: String,
    #[serde(default)]
    text: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrich::StanceSummarizer;

    #[tokio::test]
    async fn test_unconfigured_summarizer_is_noop() {
        let summarizer = AnthropicSummarizer::new(&BotConfig::default());
        let excerpts = vec![("Maria Eagle".to_string(), "Care matters.".to_string())];
        assert!(summarizer.summarize("care", &excerpts).await.is_none());
    }

    #[test]
    fn test_prompt_lists_speakers_and_topic() {
        let excerpts = vec![
            ("Maria Eagle".to_string(), "Care matters.".to_string()),
            ("John Healey".to_string(), "Funding fell.".to_string()),
        ];
        let prompt = AnthropicSummarizer::build_prompt("teenage boys care", &excerpts);
        assert!(prompt.starts_with("Topic: teenage boys care"));
        assert!(prompt.contains("- Maria Eagle: Care matters."));
        assert!(prompt.contains("- John Healey: Funding fell."));
    }
}
