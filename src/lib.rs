pub mod bot;
pub mod config;
pub mod enrich;
pub mod error;
pub mod models;
pub mod ranking;
pub mod relevance;
pub mod search;

pub use bot::Bot;
pub use config::BotConfig;
pub use enrich::{AnthropicSummarizer, ContextProvider, DebateContext, NoEnrichment, StanceSummarizer, WebSearchContext};
pub use error::QueryError;
pub use models::{MatchTier, SearchResponse, SpeakerField, TranscriptRow};
pub use ranking::{aggregate_rows, rank, render_summary, RankedSpeakers, SpeakerLedger, MAX_RANKED_SPEAKERS};
pub use relevance::{normalize_query, score_record, split_sentences, ScoredWindow};
pub use search::HansardClient;
