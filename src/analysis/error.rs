use thiserror::Error;

/// Why an indicator could not be computed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndicatorError {
    #[error("insufficient data: need at least {needed} points, got {got}")]
    InsufficientData { needed: usize, got: usize },

    #[error("invalid parameter `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("put strike {put_strike} is above call strike {call_strike}")]
    InvertedStrikes { put_strike: f64, call_strike: f64 },
}

impl IndicatorError {
    pub(crate) fn invalid(name: &'static str, value: f64) -> Self {
        Self::InvalidParameter { name, value }
    }
}

pub type IndicatorResult<T> = Result<T, IndicatorError>;
