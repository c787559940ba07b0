// Indicator engine: pure computations over a price series and user parameters
mod error;
mod indicators;
mod payoff;
mod targets;

pub use error::{IndicatorError, IndicatorResult};
pub use indicators::{
    FibonacciLevel, FibonacciLevels, ForecastBand, MovingAverage, daily_returns,
    fibonacci_levels, fibonacci_levels_with, forecast_band, moving_average, ratio_label,
    volatility,
};
pub use payoff::{
    PayoffCurve, PayoffPoint, PayoffRegions, StrangleParams, payoff_at, payoff_curve,
    payoff_curve_with,
};
pub use targets::{TargetDistance, TargetParams, target_distances};
