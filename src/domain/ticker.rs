use std::fmt;

use serde::{Deserialize, Serialize};

/// A market symbol as typed by the user, e.g. `BBAS3.SA` or `AAPL`.
/// Only emptiness is checked; unknown symbols surface as fetch errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ticker(String);

impl Ticker {
    /// Trims and upper-cases `raw`. Returns `None` when nothing is left.
    pub fn parse(raw: &str) -> Option<Self> {
        let symbol = raw.trim();
        if symbol.is_empty() {
            None
        } else {
            Some(Self(symbol.to_uppercase()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Ticker {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
