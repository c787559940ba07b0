use crate::domain::{Bar, Ticker};
use crate::utils::maths_utils;

/// Daily bars for one ticker, ascending by timestamp with no duplicate days.
/// Read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    ticker: Ticker,
    bars: Vec<Bar>,
}

impl PriceSeries {
    /// Sorts `bars` by timestamp. When two bars share a timestamp the later one in input order wins.
    pub fn new(ticker: Ticker, mut bars: Vec<Bar>) -> Self {
        bars.sort_by_key(|b| b.timestamp_ms);
        let mut unique: Vec<Bar> = Vec::with_capacity(bars.len());
        for bar in bars {
            match unique.last_mut() {
                Some(last) if last.timestamp_ms == bar.timestamp_ms => *last = bar,
                _ => unique.push(bar),
            }
        }
        Self {
            ticker,
            bars: unique,
        }
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    pub fn latest_close(&self) -> Option<f64> {
        self.bars.last().map(|b| b.close)
    }

    /// (lowest close, highest close)
    pub fn close_range(&self) -> Option<(f64, f64)> {
        maths_utils::min_max(&self.closes())
    }

    pub fn last_timestamp_ms(&self) -> Option<i64> {
        self.bars.last().map(|b| b.timestamp_ms)
    }

    /// (lowest low, highest high) across all bars, for chart bounds
    pub fn price_envelope(&self) -> Option<(f64, f64)> {
        let lows: Vec<f64> = self.bars.iter().map(|b| b.low).collect();
        let highs: Vec<f64> = self.bars.iter().map(|b| b.high).collect();
        let (low, _) = maths_utils::min_max(&lows)?;
        let (_, high) = maths_utils::min_max(&highs)?;
        Some((low, high))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(ts: i64, close: f64) -> Bar {
        Bar::new(ts, close, close + 1.0, close - 1.0, close, 100)
    }

    fn ticker() -> Ticker {
        Ticker::parse("TEST").unwrap()
    }

    #[test]
    fn new_sorts_and_dedups() {
        let series = PriceSeries::new(
            ticker(),
            vec![bar(3, 11.0), bar(1, 10.0), bar(3, 12.0), bar(2, 9.0)],
        );
        let ts: Vec<i64> = series.bars().iter().map(|b| b.timestamp_ms).collect();
        assert_eq!(ts, vec![1, 2, 3]);
        assert_eq!(series.latest_close(), Some(12.0));
    }

    #[test]
    fn close_extremes() {
        let series = PriceSeries::new(
            ticker(),
            [10.0, 12.0, 11.0, 15.0, 9.0]
                .iter()
                .enumerate()
                .map(|(i, c)| bar(i as i64, *c))
                .collect(),
        );
        assert_eq!(series.close_range(), Some((9.0, 15.0)));
        assert_eq!(series.price_envelope(), Some((8.0, 16.0)));
        assert_eq!(series.last_timestamp_ms(), Some(4));
    }

    #[test]
    fn empty_series_has_no_extremes() {
        let series = PriceSeries::new(ticker(), Vec::new());
        assert!(series.is_empty());
        assert_eq!(series.latest_close(), None);
        assert_eq!(series.close_range(), None);
    }
}
