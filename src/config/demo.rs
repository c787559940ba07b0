//! Settings for the generated offline series (`--demo` and the web build).

pub struct DemoConfig {
    /// Weekday bars per series, roughly three months of trading
    pub bar_count: usize,
    /// Largest close-to-close move, as a fraction of the previous close
    pub max_daily_move_pct: f64,
    /// First close is drawn from [min_start_price, max_start_price)
    pub min_start_price: f64,
    pub max_start_price: f64,
    /// Offered as one-click fills for the ticker field
    pub suggested_tickers: &'static [&'static str],
}

pub const DEMO: DemoConfig = DemoConfig {
    bar_count: 63,
    max_daily_move_pct: 0.025,
    min_start_price: 10.0,
    max_start_price: 200.0,
    suggested_tickers: &["BBAS3.SA", "PETR4.SA", "VALE3.SA", "AAPL", "MSFT"],
};
