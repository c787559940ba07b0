//! Indicator and payoff computation settings

/// Retracement ratios, lowest first. Labels are derived from these.
pub const FIBONACCI_RATIOS: [f64; 6] = [0.0, 0.236, 0.382, 0.5, 0.618, 1.0];

#[derive(Debug, Clone, Copy)]
pub struct PayoffRange {
    /// Number of hypothetical prices sampled (endpoints included)
    pub sample_count: usize,
    /// Lowest sampled price as a multiple of the current price
    pub low_factor: f64,
    /// Highest sampled price as a multiple of the current price
    pub high_factor: f64,
}

pub struct AnalysisConfig {
    /// Trailing window (in daily bars) of the moving average
    pub moving_average_window: usize,
    /// How many days past the last bar the flat forecast extends
    pub forecast_horizon_days: usize,
    pub payoff: PayoffRange,
    pub fibonacci_ratios: &'static [f64],
}

pub const ANALYSIS: AnalysisConfig = AnalysisConfig {
    moving_average_window: 30,
    forecast_horizon_days: 10,
    payoff: PayoffRange {
        sample_count: 100,
        low_factor: 0.5,
        high_factor: 1.5,
    },
    fibonacci_ratios: &FIBONACCI_RATIOS,
};
