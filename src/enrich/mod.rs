use std::future::Future;

pub mod stance;
pub mod web;

pub use stance::*;
pub use web::*;

/// Context found for a query outside Hansard itself
#[derive(Debug, Clone)]
pub struct DebateContext {
    /// Short prose snippet, shown as a preamble when no stance analysis
    /// is available
    pub snippet: String,
    /// Headline of the matched context; fed into relevance scoring as
    /// extra vocabulary
    pub title: String,
}

/// Optional web lookup for background on the queried topic.
///
/// Implementations must fail open: any transport or parse problem is
/// `None`, never an error the query path has to handle.
pub trait ContextProvider {
    fn debate_context(&self, query: &str) -> impl Future<Output = Option<DebateContext>>;
}

/// Optional stance analysis over the ranked speakers' excerpts.
///
/// Same contract: `None` on any failure, the renderer falls back to the
/// web context or to no preamble at all.
pub trait StanceSummarizer {
    fn summarize(
        &self,
        query: &str,
        excerpts: &[(String, String)],
    ) -> impl Future<Output = Option<String>>;
}

/// Disabled enrichment; satisfies both capabilities with empty results.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEnrichment;

impl ContextProvider for NoEnrichment {
    async fn debate_context(&self, _query: &str) -> Option<DebateContext> {
        None
    }
}

impl StanceSummarizer for NoEnrichment {
    async fn summarize(&self, _query: &str, _excerpts: &[(String, String)]) -> Option<String> {
        None
    }
}
