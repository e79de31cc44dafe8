//! Quote source trait and the data-layer error type.
//!
//! `QuoteSource` abstracts over the raw-text source (live HTTP, test stubs)
//! so the pipeline only ever sees "comma-separated text or a typed failure"
//! and tests never touch the network.

use thiserror::Error;

/// Errors from retrieving or parsing the raw series.
///
/// All are terminal for the request: nothing in the core retries, and the
/// pipeline never substitutes stale data behind a failure.
#[derive(Debug, Error)]
pub enum DataError {
    /// The source could not return text: network failure, timeout, or a
    /// non-success HTTP status.
    #[error("retrieval failed: {0}")]
    Retrieval(String),

    /// No valid data records remained after filtering the raw text.
    #[error("no data records in source text")]
    EmptySeries,

    /// A kept record failed date/numeric conversion. One bad line fails the
    /// whole parse; a partially-converted fetch is untrustworthy.
    #[error("malformed record '{line}': {reason}")]
    MalformedRecord { line: String, reason: String },
}

/// A source of raw comma-separated quote history.
pub trait QuoteSource: Send + Sync {
    /// Fetch the raw series text for a symbol over a range code (`3m`, `10y`).
    fn fetch(&self, symbol: &str, range: &str) -> Result<String, DataError>;
}
