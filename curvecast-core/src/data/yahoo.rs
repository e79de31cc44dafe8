//! Yahoo chartapi quote source.
//!
//! Fetches the `chartdata` CSV for a symbol and range code. The endpoint
//! returns a `key:value` preamble (including the `values:` and `labels:`
//! header rows the parser filters on) followed by one
//! `date,close,high,low,open,volume` line per trading day.

use super::source::{DataError, QuoteSource};
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "http://chartapi.finance.yahoo.com";

/// Blocking HTTP quote source.
///
/// One request per fetch, bounded timeout, no retry: a timeout or bad status
/// is a normal `Retrieval` failure for that request.
pub struct YahooChartSource {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl YahooChartSource {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the source at a different host. Integration tests stub the
    /// endpoint this way.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn chart_url(&self, symbol: &str, range: &str) -> String {
        format!(
            "{}/instrument/1.0/{symbol}/chartdata;type=quote;range={range}/csv",
            self.base_url
        )
    }
}

impl Default for YahooChartSource {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteSource for YahooChartSource {
    fn fetch(&self, symbol: &str, range: &str) -> Result<String, DataError> {
        let url = self.chart_url(symbol, range);

        let resp = self
            .client
            .get(&url)
            .send()
            .map_err(|e| DataError::Retrieval(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(DataError::Retrieval(format!("HTTP {status} for {symbol}")));
        }

        resp.text().map_err(|e| DataError::Retrieval(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_url_embeds_symbol_and_range() {
        let source = YahooChartSource::with_base_url("http://localhost:9");
        assert_eq!(
            source.chart_url("AAPL", "10y"),
            "http://localhost:9/instrument/1.0/AAPL/chartdata;type=quote;range=10y/csv"
        );
    }

    #[test]
    fn unreachable_host_maps_to_retrieval_error() {
        // Port 9 (discard) refuses connections on any sane test box.
        let source = YahooChartSource::with_base_url("http://127.0.0.1:9");
        match source.fetch("AAPL", "3m") {
            Err(DataError::Retrieval(_)) => {}
            other => panic!("expected Retrieval error, got: {other:?}"),
        }
    }
}
