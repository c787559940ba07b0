use crate::analysis::{
    FibonacciLevels, ForecastBand, IndicatorError, IndicatorResult, MovingAverage, PayoffCurve,
    TargetDistance, fibonacci_levels, forecast_band, moving_average, payoff_curve,
    target_distances, volatility,
};
use crate::config::{ANALYSIS, VolatilityPct};
use crate::domain::PriceSeries;
use crate::models::InstrumentParams;

/// Everything derived from one instrument's series and params, computed once when it is tracked.
/// Older entries keep their older projections.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorSnapshot {
    pub moving_average: MovingAverage,
    /// `None` when the series is too short for two returns
    pub volatility: Option<VolatilityPct>,
    pub forecast: ForecastBand,
    pub fibonacci: FibonacciLevels,
    pub payoff: Option<PayoffCurve>,
    pub targets: Option<Vec<TargetDistance>>,
}

impl IndicatorSnapshot {
    pub fn compute(series: &PriceSeries, params: &InstrumentParams) -> IndicatorResult<Self> {
        let current = series
            .latest_close()
            .ok_or(IndicatorError::InsufficientData { needed: 1, got: 0 })?;
        let window = ANALYSIS.moving_average_window;

        let moving_average = moving_average(series, window)?;

        let volatility = match volatility(series) {
            Ok(v) => Some(v),
            Err(IndicatorError::InsufficientData { needed, got }) => {
                log::warn!(
                    "{}: volatility needs {} closes, have {}; forecast band collapses to the projection",
                    series.ticker(),
                    needed,
                    got
                );
                None
            }
            Err(e) => return Err(e),
        };

        let forecast = forecast_band(
            series,
            ANALYSIS.forecast_horizon_days,
            window,
            volatility.unwrap_or(0.0),
        )?;
        let fibonacci = fibonacci_levels(series)?;

        let (payoff, targets) = match params {
            InstrumentParams::Strangle(p) => (Some(payoff_curve(p, current)?), None),
            InstrumentParams::Targets(t) => (None, Some(target_distances(&t.targets, current)?)),
        };

        Ok(Self {
            moving_average,
            volatility: volatility.map(VolatilityPct::new),
            forecast,
            fibonacci,
            payoff,
            targets,
        })
    }
}
