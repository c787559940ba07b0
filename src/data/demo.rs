//! Deterministic synthetic bars so the app runs offline and in the browser.

use async_trait::async_trait;

use crate::config::DEMO;
use crate::data::{FetchError, MarketDataProvider};
use crate::domain::{Bar, PriceSeries, Ticker};
use crate::utils::{TimeUtils, now_timestamp_ms};

/// Same ticker always yields the same prices. Dates end at the most recent weekday.
#[derive(Debug, Default, Clone)]
pub struct DemoProvider {
    /// Pin the last bar to this day instead of today (tests)
    anchor_ms: Option<i64>,
}

impl DemoProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn anchored_at(anchor_ms: i64) -> Self {
        Self {
            anchor_ms: Some(anchor_ms),
        }
    }

    /// Builds the series without going through the async trait.
    pub fn series_for(&self, ticker: &Ticker) -> PriceSeries {
        let anchor = self.anchor_ms.unwrap_or_else(now_timestamp_ms);
        let days = trading_days_ending(anchor, DEMO.bar_count);
        let mut rng = SplitMix64::new(seed_for(ticker));

        let span = DEMO.max_start_price - DEMO.min_start_price;
        let mut close = DEMO.min_start_price + rng.next_unit() * span;

        let bars = days
            .into_iter()
            .map(|ts| {
                let open = close;
                let step = (rng.next_unit() * 2.0 - 1.0) * DEMO.max_daily_move_pct;
                close = (open * (1.0 + step)).max(0.01);
                let wick = open.max(close) * rng.next_unit() * DEMO.max_daily_move_pct * 0.5;
                let high = open.max(close) + wick;
                let low = (open.min(close) - wick).max(0.005);
                let volume = 100_000 + (rng.next_u64() % 900_000);
                Bar::new(ts, round_cents(open), round_cents(high), round_cents(low), round_cents(close), volume)
            })
            .collect();

        PriceSeries::new(ticker.clone(), bars)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl MarketDataProvider for DemoProvider {
    async fn fetch_daily_bars(&self, ticker: &Ticker) -> Result<PriceSeries, FetchError> {
        let series = self.series_for(ticker);
        if series.is_empty() {
            return Err(FetchError::EmptySeries(ticker.clone()));
        }
        Ok(series)
    }

    fn name(&self) -> &'static str {
        "Demo data"
    }
}

fn round_cents(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Midnight UTC timestamps of the `count` weekdays up to and including `anchor_ms`'s day.
fn trading_days_ending(anchor_ms: i64, count: usize) -> Vec<i64> {
    let mut day = anchor_ms.div_euclid(TimeUtils::MS_IN_D);
    let mut days = Vec::with_capacity(count);
    while days.len() < count {
        // 1970-01-01 was a Thursday, so day % 7 == 2 is Saturday and 3 is Sunday
        if !matches!(day.rem_euclid(7), 2 | 3) {
            days.push(day * TimeUtils::MS_IN_D);
        }
        day -= 1;
    }
    days.reverse();
    days
}

/// FNV-1a over the symbol bytes; stable across builds unlike `DefaultHasher`.
fn seed_for(ticker: &Ticker) -> u64 {
    ticker
        .as_str()
        .bytes()
        .fold(0xcbf2_9ce4_8422_2325, |hash, b| {
            (hash ^ u64::from(b)).wrapping_mul(0x0100_0000_01b3)
        })
}

struct SplitMix64(u64);

impl SplitMix64 {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    /// Uniform in [0, 1)
    fn next_unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2024-03-01 (a Friday)
    const ANCHOR: i64 = 1_709_251_200_000;

    #[test]
    fn same_ticker_same_series() {
        let provider = DemoProvider::anchored_at(ANCHOR);
        let t = Ticker::parse("PETR4.SA").unwrap();
        assert_eq!(provider.series_for(&t), provider.series_for(&t));
    }

    #[test]
    fn suggested_tickers_generate_in_range_series() {
        let provider = DemoProvider::anchored_at(ANCHOR);
        assert!(!DEMO.suggested_tickers.is_empty());
        for raw in DEMO.suggested_tickers {
            let series = provider.series_for(&Ticker::parse(raw).unwrap());
            assert_eq!(series.len(), DEMO.bar_count);
            let first_open = series.bars()[0].open;
            assert!(first_open >= DEMO.min_start_price - 0.01);
            assert!(first_open <= DEMO.max_start_price + 0.01);
        }
    }

    #[test]
    fn different_tickers_differ() {
        let provider = DemoProvider::anchored_at(ANCHOR);
        let a = provider.series_for(&Ticker::parse("AAA").unwrap());
        let b = provider.series_for(&Ticker::parse("BBB").unwrap());
        assert_ne!(a.closes(), b.closes());
    }

    #[test]
    fn series_skips_weekends_and_ends_at_anchor() {
        let series = DemoProvider::anchored_at(ANCHOR).series_for(&Ticker::parse("AAPL").unwrap());
        assert_eq!(series.len(), DEMO.bar_count);
        assert_eq!(series.last_timestamp_ms(), Some(ANCHOR));
        for bar in series.bars() {
            let weekday = (bar.timestamp_ms / TimeUtils::MS_IN_D).rem_euclid(7);
            assert!(weekday != 2 && weekday != 3, "weekend bar at {}", bar.timestamp_ms);
            assert!(bar.low <= bar.open.min(bar.close));
            assert!(bar.high >= bar.open.max(bar.close));
            assert!(bar.close > 0.0);
        }
    }
}
