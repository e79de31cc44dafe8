//! Quote retrieval and parsing.

pub mod parse;
pub mod source;
pub mod yahoo;

pub use parse::parse_series;
pub use source::{DataError, QuoteSource};
pub use yahoo::YahooChartSource;
