//! Range codes — the source's short history-window syntax (`3m`, `10y`).

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A range code with a validated unit suffix.
///
/// Only the suffix is checked: the quote source interprets the numeric
/// prefix itself, so `0m` and `999y` pass through untouched. Front ends
/// validate user input through this type before handing the code to the
/// pipeline, which treats ranges as opaque strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeCode(String);

#[derive(Debug, Error)]
pub enum RangeError {
    #[error("invalid range '{0}': must end in 'm' (months) or 'y' (years), e.g. 3m or 10y")]
    InvalidSuffix(String),
}

impl RangeCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for RangeCode {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.chars().last() {
            Some('m') | Some('y') => Ok(Self(s.to_string())),
            _ => Err(RangeError::InvalidSuffix(s.to_string())),
        }
    }
}

impl fmt::Display for RangeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
