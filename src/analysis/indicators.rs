//! Price-series indicators: moving average, volatility, flat forecast band and
//! Fibonacci retracement levels. All pure functions over a `PriceSeries`.

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

use crate::analysis::error::{IndicatorError, IndicatorResult};
use crate::config::ANALYSIS;
use crate::domain::PriceSeries;
use crate::utils::maths_utils;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MovingAverage {
    /// One entry per bar. `None` until the window has filled.
    Rolling(Vec<Option<f64>>),
    /// The series was shorter than the window, so the whole-series mean stands in.
    FullSeriesMean(f64),
}

impl MovingAverage {
    /// Most recent defined value
    pub fn latest(&self) -> Option<f64> {
        match self {
            Self::Rolling(values) => values.iter().rev().find_map(|v| *v),
            Self::FullSeriesMean(mean) => Some(*mean),
        }
    }

    /// Value aligned to bar `idx`, for drawing alongside the candles.
    pub fn value_at(&self, idx: usize) -> Option<f64> {
        match self {
            Self::Rolling(values) => values.get(idx).copied().flatten(),
            Self::FullSeriesMean(mean) => Some(*mean),
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::FullSeriesMean(_))
    }
}

/// Trailing simple moving average of closes over `window` bars.
pub fn moving_average(series: &PriceSeries, window: usize) -> IndicatorResult<MovingAverage> {
    if window == 0 {
        return Err(IndicatorError::invalid("window", 0.0));
    }
    let closes = series.closes();
    if closes.is_empty() {
        return Err(IndicatorError::InsufficientData { needed: 1, got: 0 });
    }

    if closes.len() < window {
        let mean = maths_utils::mean(&closes).ok_or(IndicatorError::InsufficientData {
            needed: 1,
            got: 0,
        })?;
        return Ok(MovingAverage::FullSeriesMean(mean));
    }

    let warmup = std::iter::repeat_n(None, window - 1);
    let filled = closes.windows(window).map(maths_utils::mean);
    Ok(MovingAverage::Rolling(warmup.chain(filled).collect()))
}

/// Daily percentage returns, first difference dropped.
pub fn daily_returns(series: &PriceSeries) -> IndicatorResult<Vec<f64>> {
    series
        .closes()
        .into_iter()
        .tuple_windows()
        .map(|(prev, curr)| {
            if prev <= 0.0 || !prev.is_finite() {
                Err(IndicatorError::invalid("previous close", prev))
            } else {
                Ok((curr - prev) / prev)
            }
        })
        .collect()
}

/// Sample standard deviation (n - 1) of daily returns.
/// Needs at least two returns, i.e. three closes.
pub fn volatility(series: &PriceSeries) -> IndicatorResult<f64> {
    const MIN_CLOSES: usize = 3;
    if series.len() < MIN_CLOSES {
        return Err(IndicatorError::InsufficientData {
            needed: MIN_CLOSES,
            got: series.len(),
        });
    }
    let returns = daily_returns(series)?;
    Ok(returns.iter().std_dev())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastBand {
    pub projection: Vec<f64>,
    pub upper: Vec<f64>,
    pub lower: Vec<f64>,
    pub volatility: f64,
}

impl ForecastBand {
    pub fn horizon_days(&self) -> usize {
        self.projection.len()
    }

    /// The flat projected price (every step carries the same value).
    pub fn level(&self) -> Option<f64> {
        self.projection.first().copied()
    }

    /// (day offset from the last bar, lower, projection, upper), offsets starting at 1
    pub fn steps(&self) -> impl Iterator<Item = (usize, f64, f64, f64)> + '_ {
        self.projection
            .iter()
            .zip(&self.lower)
            .zip(&self.upper)
            .enumerate()
            .map(|(i, ((p, l), u))| (i + 1, *l, *p, *u))
    }
}

/// Naive flat projection: the latest moving-average value repeated for
/// `horizon_days`, widened by +/- `volatility` as a fraction of that value.
pub fn forecast_band(
    series: &PriceSeries,
    horizon_days: usize,
    window: usize,
    volatility: f64,
) -> IndicatorResult<ForecastBand> {
    if !volatility.is_finite() || volatility < 0.0 {
        return Err(IndicatorError::invalid("volatility", volatility));
    }
    if horizon_days == 0 {
        return Err(IndicatorError::invalid("horizon_days", 0.0));
    }
    let ma = moving_average(series, window)?;
    let level = ma
        .latest()
        .ok_or(IndicatorError::InsufficientData {
            needed: window,
            got: series.len(),
        })?;

    let projection = vec![level; horizon_days];
    let upper = projection.iter().map(|p| p * (1.0 + volatility)).collect();
    let lower = projection.iter().map(|p| p * (1.0 - volatility)).collect();

    Ok(ForecastBand {
        projection,
        upper,
        lower,
        volatility,
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FibonacciLevel {
    pub ratio: f64,
    pub label: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FibonacciLevels {
    levels: Vec<FibonacciLevel>,
}

impl FibonacciLevels {
    pub fn iter(&self) -> impl Iterator<Item = &FibonacciLevel> {
        self.levels.iter()
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Price at a level, looked up by its label ("0%", "23.6%", ...)
    pub fn get(&self, label: &str) -> Option<f64> {
        self.levels
            .iter()
            .find(|l| l.label == label)
            .map(|l| l.price)
    }
}

/// "23.6%" for 0.236, "50%" for 0.5
pub fn ratio_label(ratio: f64) -> String {
    let pct = ratio * 100.0;
    if (pct - pct.round()).abs() < 1e-9 {
        format!("{:.0}%", pct)
    } else {
        format!("{:.1}%", pct)
    }
}

/// Retracement levels between the lowest and highest close, using the configured ratios.
pub fn fibonacci_levels(series: &PriceSeries) -> IndicatorResult<FibonacciLevels> {
    fibonacci_levels_with(series, ANALYSIS.fibonacci_ratios)
}

pub fn fibonacci_levels_with(
    series: &PriceSeries,
    ratios: &[f64],
) -> IndicatorResult<FibonacciLevels> {
    let (min, max) = series
        .close_range()
        .ok_or(IndicatorError::InsufficientData { needed: 1, got: 0 })?;

    let levels = ratios
        .iter()
        .map(|&ratio| FibonacciLevel {
            ratio,
            label: ratio_label(ratio),
            price: maths_utils::lerp(min, max, ratio),
        })
        .collect();

    Ok(FibonacciLevels { levels })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Bar, Ticker};

    fn series(closes: &[f64]) -> PriceSeries {
        let bars = closes
            .iter()
            .enumerate()
            .map(|(i, &c)| Bar::new(i as i64 * 86_400_000, c, c, c, c, 0))
            .collect();
        PriceSeries::new(Ticker::parse("TEST").unwrap(), bars)
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn rolling_average_fills_after_window() {
        let ma = moving_average(&series(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3).unwrap();
        assert_eq!(
            ma,
            MovingAverage::Rolling(vec![None, None, Some(2.0), Some(3.0), Some(4.0)])
        );
        assert_eq!(ma.latest(), Some(4.0));
        assert_eq!(ma.value_at(1), None);
    }

    #[test]
    fn short_series_falls_back_to_full_mean() {
        let ma = moving_average(&series(&[10.0, 12.0, 11.0, 15.0, 9.0]), 30).unwrap();
        assert_eq!(ma, MovingAverage::FullSeriesMean(11.4));
        assert!(ma.is_degraded());
    }

    #[test]
    fn moving_average_rejects_bad_input() {
        assert_eq!(
            moving_average(&series(&[1.0]), 0),
            Err(IndicatorError::InvalidParameter {
                name: "window",
                value: 0.0
            })
        );
        assert!(matches!(
            moving_average(&series(&[]), 30),
            Err(IndicatorError::InsufficientData { .. })
        ));
    }

    #[test]
    fn volatility_is_sample_std_dev_of_returns() {
        // returns: +10%, -10%
        let vol = volatility(&series(&[100.0, 110.0, 99.0])).unwrap();
        let mean = 0.0;
        let expected = (((0.1f64 - mean).powi(2) + (-0.1f64 - mean).powi(2)) / 1.0).sqrt();
        assert!(approx(vol, expected), "{vol} vs {expected}");
    }

    #[test]
    fn volatility_needs_two_returns() {
        assert_eq!(
            volatility(&series(&[10.0])),
            Err(IndicatorError::InsufficientData { needed: 3, got: 1 })
        );
        assert_eq!(
            volatility(&series(&[10.0, 11.0])),
            Err(IndicatorError::InsufficientData { needed: 3, got: 2 })
        );
    }

    #[test]
    fn volatility_guards_zero_close() {
        assert_eq!(
            volatility(&series(&[10.0, 0.0, 5.0])),
            Err(IndicatorError::InvalidParameter {
                name: "previous close",
                value: 0.0
            })
        );
    }

    #[test]
    fn forecast_band_is_flat_and_ordered() {
        let band = forecast_band(&series(&[10.0, 12.0, 11.0, 15.0, 9.0]), 10, 30, 0.05).unwrap();
        assert_eq!(band.horizon_days(), 10);
        assert!(band.projection.iter().all(|p| approx(*p, 11.4)));
        assert!(band.upper.iter().all(|u| approx(*u, 11.4 * 1.05)));
        assert!(band.lower.iter().all(|l| approx(*l, 11.4 * 0.95)));
        for (day, lower, mid, upper) in band.steps() {
            assert!(day >= 1);
            assert!(lower <= mid && mid <= upper);
        }
    }

    #[test]
    fn forecast_band_rejects_negative_volatility() {
        assert!(matches!(
            forecast_band(&series(&[1.0, 2.0]), 10, 30, -0.1),
            Err(IndicatorError::InvalidParameter { name: "volatility", .. })
        ));
        assert!(matches!(
            forecast_band(&series(&[1.0, 2.0]), 10, 30, f64::NAN),
            Err(IndicatorError::InvalidParameter { name: "volatility", .. })
        ));
    }

    #[test]
    fn fibonacci_levels_span_close_range() {
        let fib = fibonacci_levels(&series(&[10.0, 12.0, 11.0, 15.0, 9.0])).unwrap();
        assert_eq!(fib.len(), 6);
        assert_eq!(fib.get("0%"), Some(9.0));
        assert_eq!(fib.get("100%"), Some(15.0));
        assert_eq!(fib.get("50%"), Some(12.0));
        assert!(approx(fib.get("61.8%").unwrap(), 9.0 + 0.618 * 6.0));
        let labels: Vec<&str> = fib.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["0%", "23.6%", "38.2%", "50%", "61.8%", "100%"]);
    }

    #[test]
    fn fibonacci_on_flat_series_collapses() {
        let fib = fibonacci_levels(&series(&[7.0, 7.0, 7.0])).unwrap();
        assert!(fib.iter().all(|l| l.price == 7.0));
    }
}
