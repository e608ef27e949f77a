use thiserror::Error;

/// Failure kinds for one query's round trip to the search API.
///
/// "No results" is not represented here: an empty result set is a content
/// outcome, rendered as a normal message. Enrichment failures are absorbed
/// at their call sites and never become a `QueryError`.
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("search API credential is not configured")]
    MissingCredential,

    #[error("search API did not respond in time")]
    Timeout,

    #[error("could not reach search API: {0}")]
    Connect(String),

    #[error("search API returned status {status}")]
    Upstream { status: u16 },

    #[error("search API response could not be parsed: {0}")]
    InvalidResponse(String),

    #[error("internal error: {0}")]
    Internal(String),
}
