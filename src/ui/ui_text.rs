pub const ICON_CHART: &str = "\u{1f4c8}";
pub const ICON_WARNING: &str = "\u{26a0}";
pub const ICON_TARGET: &str = "\u{1f3af}";

pub struct UiText {
    // --- Top panel ---
    pub app_heading: &'static str,
    pub label_mode: &'static str,
    pub label_session: &'static str,
    pub label_source: &'static str,

    // --- Left panel ---
    pub form_heading: &'static str,
    pub label_ticker: &'static str,
    pub hint_ticker: &'static str,
    pub label_put_strike: &'static str,
    pub label_put_premium: &'static str,
    pub label_call_strike: &'static str,
    pub label_call_premium: &'static str,
    pub label_target: &'static str,
    pub button_track: &'static str,
    pub label_fetching: &'static str,
    pub label_last_error: &'static str,
    pub layers_heading: &'static str,
    pub label_suggestions: &'static str,

    // --- Layer toggles ---
    pub toggle_candles: &'static str,
    pub toggle_moving_average: &'static str,
    pub toggle_levels: &'static str,
    pub toggle_fibonacci: &'static str,
    pub toggle_forecast: &'static str,
    pub toggle_price_line: &'static str,

    // --- Central panel ---
    pub cp_empty_session: &'static str,
    pub cp_tracked_heading: &'static str,
    pub payoff_chart_title: &'static str,

    // --- Plot labels ---
    pub plot_x_axis: &'static str,
    pub plot_y_axis: &'static str,
    pub payoff_x_axis: &'static str,
    pub payoff_y_axis: &'static str,
    pub label_moving_average: &'static str,
    pub label_forecast: &'static str,
    pub label_fibonacci: &'static str,
    pub label_current_price: &'static str,
    pub label_region_below_put: &'static str,
    pub label_region_between: &'static str,
    pub label_region_above_call: &'static str,

    // --- Readouts ---
    pub label_breakeven_put: &'static str,
    pub label_breakeven_call: &'static str,
    pub label_total_premium: &'static str,
    pub label_volatility: &'static str,
    pub label_vol_unavailable: &'static str,
    pub label_tracked_at: &'static str,
    pub label_ma_degraded: &'static str,
}

impl UiText {
    /// "{TICKER} - Current: 30.00 | 10d forecast: 29.41"
    pub fn price_chart_title(
        &self,
        ticker: &str,
        current: f64,
        horizon_days: usize,
        projection: f64,
    ) -> String {
        format!(
            "{} - {}: {:.2} | {}d {}: {:.2}",
            ticker, self.label_current_price, current, horizon_days, self.label_forecast, projection
        )
    }
}

pub static UI_TEXT: UiText = UiText {
    app_heading: "Strike Scope",
    label_mode: "Mode",
    label_session: "Session",
    label_source: "Source",

    form_heading: "Track an instrument",
    label_ticker: "Ticker",
    hint_ticker: "e.g. BBAS3.SA",
    label_put_strike: "Put strike",
    label_put_premium: "Put premium",
    label_call_strike: "Call strike",
    label_call_premium: "Call premium",
    label_target: "Target",
    button_track: "Track",
    label_fetching: "Fetching",
    label_last_error: "Last action failed",
    layers_heading: "Chart layers",
    label_suggestions: "Try",

    toggle_candles: "Candles (1)",
    toggle_moving_average: "Moving average (2)",
    toggle_levels: "Strikes / targets (3)",
    toggle_fibonacci: "Fibonacci (4)",
    toggle_forecast: "Forecast band (5)",
    toggle_price_line: "Current price (6)",

    cp_empty_session: "Nothing tracked yet. Fill in the form and press Track.",
    cp_tracked_heading: "Tracked instruments",
    payoff_chart_title: "Payoff at expiry",

    plot_x_axis: "Date",
    plot_y_axis: "Price",
    payoff_x_axis: "Underlying price at expiry",
    payoff_y_axis: "Payoff",
    label_moving_average: "30d moving average",
    label_forecast: "forecast",
    label_fibonacci: "Fib",
    label_current_price: "Current",
    label_region_below_put: "Below put break-even",
    label_region_between: "Between break-evens",
    label_region_above_call: "Above call break-even",

    label_breakeven_put: "Put break-even",
    label_breakeven_call: "Call break-even",
    label_total_premium: "Total premium",
    label_volatility: "Daily volatility",
    label_vol_unavailable: "n/a (series too short)",
    label_tracked_at: "Tracked",
    label_ma_degraded: "Series shorter than the averaging window; showing the full-series mean",
};
