//! Small numeric newtypes and enums shared across the crate.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Which inputs the form collects and which overlays the price chart carries.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, Display, Default,
    clap::ValueEnum,
)]
pub enum PresentationMode {
    #[default]
    #[strum(to_string = "Options Payoff")]
    OptionsPayoff,
    #[strum(to_string = "Price Targets")]
    PriceTargets,
}

/// Sample standard deviation of daily returns, as a fraction (0.02 = 2%).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct VolatilityPct(f64);

impl VolatilityPct {
    pub const fn new(val: f64) -> Self {
        let v = if val < 0.0 { 0.0 } else { val };
        Self(v)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for VolatilityPct {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}%", self.0 * 100.0)
    }
}

/// Signed relative move from one price to another: (target - current) / current
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct ChangePct(f64);

impl ChangePct {
    pub const fn new(val: f64) -> Self {
        Self(val)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_upside(self) -> bool {
        self.0 > 0.0
    }
}

impl std::fmt::Display for ChangePct {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:+.2}%", self.0 * 100.0)
    }
}
