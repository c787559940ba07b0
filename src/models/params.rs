use serde::{Deserialize, Serialize};

use crate::analysis::{StrangleParams, TargetParams};
use crate::config::PresentationMode;

/// What the user typed alongside the ticker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InstrumentParams {
    Strangle(StrangleParams),
    Targets(TargetParams),
}

impl InstrumentParams {
    pub fn mode(&self) -> PresentationMode {
        match self {
            Self::Strangle(_) => PresentationMode::OptionsPayoff,
            Self::Targets(_) => PresentationMode::PriceTargets,
        }
    }
}
