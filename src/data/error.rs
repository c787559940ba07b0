use thiserror::Error;

use crate::domain::Ticker;

/// A failed fetch. Every variant ends only the action that triggered it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status} fetching {ticker}")]
    HttpStatus { ticker: Ticker, status: u16 },

    #[error("could not decode response: {0}")]
    Decode(String),

    #[error("upstream error {code}: {description}")]
    Upstream { code: String, description: String },

    #[error("no complete daily bars returned for {0}")]
    EmptySeries(Ticker),

    #[error("fetch worker failed: {0}")]
    Worker(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}
