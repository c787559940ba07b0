use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarDirection {
    Bullish,
    Bearish,
}

/// One daily OHLC bar. Volume is carried along but unused by the indicators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub timestamp_ms: i64,

    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,

    pub volume: u64,
}

impl Bar {
    pub fn new(timestamp_ms: i64, open: f64, high: f64, low: f64, close: f64, volume: u64) -> Self {
        Self {
            timestamp_ms,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    pub fn direction(&self) -> BarDirection {
        if self.close >= self.open {
            BarDirection::Bullish
        } else {
            BarDirection::Bearish
        }
    }

    pub fn is_finite(&self) -> bool {
        [self.open, self.high, self.low, self.close]
            .iter()
            .all(|v| v.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doji_counts_as_bullish() {
        let bar = Bar::new(0, 10.0, 11.0, 9.0, 10.0, 0);
        assert_eq!(bar.direction(), BarDirection::Bullish);
    }

    #[test]
    fn falling_close_is_bearish() {
        let bar = Bar::new(0, 12.0, 13.0, 9.0, 10.0, 0);
        assert_eq!(bar.direction(), BarDirection::Bearish);
    }
}
