use reqwest::Client;
use tracing::debug;

use crate::config::BotConfig;
use crate::error::QueryError;
use crate::models::SearchResponse;

/// Client for TheyWorkForYou's getHansard search endpoint.
///
/// One GET per query, bounded by the configured timeout; failures map to
/// the [`QueryError`] taxonomy and are never retried here.
pub struct HansardClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    result_limit: u32,
}

impl HansardClient {
    pub fn new(config: &BotConfig) -> Self {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            result_limit: config.result_limit,
        }
    }

    /// Search Hansard for the given keyword string.
    pub async fn search(&self, query: &str) -> Result<SearchResponse, QueryError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(QueryError::MissingCredential);
        };

        let url = format!("{}/api/getHansard", self.base_url);
        let num = self.result_limit.to_string();
        debug!(url = %url, num = %num, "querying hansard search");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("key", api_key),
                ("search", query),
                ("output", "js"),
                ("num", num.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    QueryError::Timeout
                } else {
                    QueryError::Connect(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(QueryError::Upstream {
                status: status.as_u16(),
            });
        }

        response
            .json::<SearchResponse>()
            .await
            .map_err(|e| QueryError::InvalidResponse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_credential_fails_before_any_request() {
        let config = BotConfig::default();
        let client = HansardClient::new(&config);

        let result = client.search("care").await;
        assert!(matches!(result, Err(QueryError::MissingCredential)));
    }
}
