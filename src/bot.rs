use tracing::{info, warn};
use uuid::Uuid;

use crate::config::BotConfig;
use crate::enrich::{
    AnthropicSummarizer, ContextProvider, StanceSummarizer, WebSearchContext,
};
use crate::error::QueryError;
use crate::ranking::{
    GENERIC_APOLOGY, MISSING_KEY_MESSAGE, NO_DEBATES_MESSAGE, NO_SPEAKERS_MESSAGE,
    TIMEOUT_MESSAGE, UNAVAILABLE_MESSAGE, WELCOME_MESSAGE, aggregate_rows, rank, render_summary,
};
use crate::relevance::normalize_query;
use crate::search::HansardClient;

/// The query boundary the chat transport talks to.
///
/// One [`Bot::answer`] call handles one user message start to finish and
/// always resolves to a rendered string; no failure escapes it. All
/// aggregation state is local to the call, so concurrent invocations on
/// disjoint inputs are safe.
pub struct Bot<C = WebSearchContext, S = AnthropicSummarizer> {
    config: BotConfig,
    search: HansardClient,
    context: C,
    stance: S,
}

impl Bot {
    /// Build a bot with the default collaborators (web context and stance
    /// analysis enabled only where the config carries their credentials).
    pub fn from_config(config: BotConfig) -> Self {
        let search = HansardClient::new(&config);
        let context = WebSearchContext::new(&config);
        let stance = AnthropicSummarizer::new(&config);
        Self {
            config,
            search,
            context,
            stance,
        }
    }
}

impl<C: ContextProvider, S: StanceSummarizer> Bot<C, S> {
    /// Build a bot with explicit enrichment collaborators.
    pub fn with_collaborators(config: BotConfig, context: C, stance: S) -> Self {
        let search = HansardClient::new(&config);
        Self {
            config,
            search,
            context,
            stance,
        }
    }

    /// Reply to the transport's /start command.
    pub fn welcome(&self) -> &'static str {
        WELCOME_MESSAGE
    }

    /// Answer one user query. Every outcome, success or failure, is a
    /// single displayable string.
    pub async fn answer(&self, raw_query: &str) -> String {
        let request_id = Uuid::new_v4();
        match self.run_query(request_id, raw_query).await {
            Ok(message) => message,
            Err(e) => {
                warn!(%request_id, error = %e, "query failed");
                failure_message(&e).to_string()
            }
        }
    }

    async fn run_query(&self, request_id: Uuid, raw_query: &str) -> Result<String, QueryError> {
        if !self.config.has_credential() {
            return Err(QueryError::MissingCredential);
        }

        let keywords = normalize_query(raw_query);
        info!(%request_id, query = %keywords, "searching hansard");

        let response = self.search.search(&keywords).await?;
        if response.rows.is_empty() {
            info!(%request_id, "no rows returned");
            return Ok(NO_DEBATES_MESSAGE.to_string());
        }
        info!(%request_id, rows = response.rows.len(), "scoring rows");

        // Fail-open enrichment: an absent or failed lookup just means no
        // extra vocabulary for the scorer.
        let context = self.context.debate_context(&keywords).await;
        let extra_context = context.as_ref().map(|c| c.title.as_str()).unwrap_or("");

        let ledger = aggregate_rows(&response.rows, &keywords, extra_context);
        let Some(ranked) = rank(&ledger, self.config.max_ranked) else {
            return Ok(NO_SPEAKERS_MESSAGE.to_string());
        };
        info!(
            %request_id,
            tier = ?ranked.tier,
            speakers = ranked.speakers.len(),
            "ranked speakers"
        );

        let excerpts: Vec<(String, String)> = ranked
            .speakers
            .iter()
            .map(|s| (s.name.clone(), s.payload.snippet.clone()))
            .collect();
        let preamble = match self.stance.summarize(&keywords, &excerpts).await {
            Some(analysis) => Some(analysis),
            None => context
                .filter(|c| !c.snippet.is_empty())
                .map(|c| format!("ℹ️ {}", c.snippet)),
        };

        Ok(render_summary(
            &ranked,
            &self.config.base_url,
            preamble.as_deref(),
        ))
    }
}

/// Map a failure to its fixed user-facing message.
fn failure_message(error: &QueryError) -> &'static str {
    match error {
        QueryError::MissingCredential => MISSING_KEY_MESSAGE,
        QueryError::Timeout => TIMEOUT_MESSAGE,
        QueryError::Connect(_) | QueryError::Upstream { .. } => UNAVAILABLE_MESSAGE,
        QueryError::InvalidResponse(_) | QueryError::Internal(_) => GENERIC_APOLOGY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrich::NoEnrichment;

    #[tokio::test]
    async fn test_missing_credential_reported_without_network_call() {
        // Default config has no key and a real base URL; if the bot tried
        // the network the reply would be a timeout or connect apology
        // instead of the configuration message.
        let bot = Bot::with_collaborators(BotConfig::default(), NoEnrichment, NoEnrichment);
        assert_eq!(bot.answer("Who spoke about care?").await, MISSING_KEY_MESSAGE);
    }

    #[test]
    fn test_failure_messages_are_fixed_strings() {
        assert_eq!(failure_message(&QueryError::Timeout), TIMEOUT_MESSAGE);
        assert_eq!(
            failure_message(&QueryError::Upstream { status: 503 }),
            UNAVAILABLE_MESSAGE
        );
        assert_eq!(
            failure_message(&QueryError::Connect("refused".into())),
            UNAVAILABLE_MESSAGE
        );
        assert_eq!(
            failure_message(&QueryError::InvalidResponse("bad json".into())),
            GENERIC_APOLOGY
        );
    }

    #[test]
    fn test_rows_to_summary_pipeline() {
        // The pure pipeline under answer(): aggregate, rank, render.
        let rows: Vec<crate::models::TranscriptRow> = serde_json::from_value(serde_json::json!([
            {
                "speaker": {"first_name": "Maria", "last_name": "Eagle", "party": "Labour"},
                "body": "Teenage boys in care are being failed.",
                "parent": {"body": "Children in Care"},
                "listurl": "/debates/?id=a.1"
            },
            {
                "speaker": {"first_name": "Maria", "last_name": "Eagle", "party": "Labour"},
                "body": "Procedural point of order.",
                "listurl": "/debates/?id=a.2"
            },
            {
                "speaker": "Unknown MP",
                "body": "Teenage boys in care need help.",
                "listurl": "/debates/?id=a.3"
            }
        ]))
        .unwrap();

        let ledger = aggregate_rows(&rows, "teenage boys care", "");
        let ranked = rank(&ledger, 5).unwrap();
        assert_eq!(ranked.tier, crate::models::MatchTier::Strict);
        assert_eq!(ranked.speakers.len(), 1);
        assert_eq!(ranked.speakers[0].mentions, 1);

        let message = render_summary(&ranked, "https://www.theyworkforyou.com", None);
        assert!(message.contains("Maria Eagle"));
        assert!(message.contains("Children in Care"));
        assert!(message.contains("https://www.theyworkforyou.com/debates/?id=a.1"));
    }
}
