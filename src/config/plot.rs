//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    // --- CANDLESTICKS ---
    pub candle_bullish_color: Color32,
    pub candle_bearish_color: Color32,
    pub candle_width_pct: f64,  // 0.0 to 1.0 (relative to one day)
    pub candle_wick_width: f32, // Pixels

    // --- OVERLAYS ---
    pub moving_average_color: Color32,
    pub moving_average_width: f32,
    pub put_strike_color: Color32,
    pub call_strike_color: Color32,
    pub target_colors: [Color32; 2],
    pub level_line_width: f32,
    pub level_dash_length: f32,

    /// Gradient from the 0% level to the 100% level
    pub fibonacci_gradient_colors: &'static [&'static str],
    pub fibonacci_line_width: f32,
    /// Fibonacci lines sit behind everything else
    pub fibonacci_opacity_pct: f32,

    pub forecast_line_color: Color32,
    pub forecast_band_color: Color32,
    pub forecast_band_opacity_pct: f32,

    pub current_price_color: Color32,
    pub current_price_line_width: f32,

    // --- PAYOFF ---
    pub payoff_loss_color: Color32,
    pub payoff_inner_color: Color32,
    pub payoff_line_width: f32,
    pub zero_line_color: Color32,
    pub payoff_marker_color: Color32,

    pub color_text_subdued: Color32,
    pub color_profit: Color32,
    pub color_loss: Color32,

    pub plot_y_padding_pct: f64, // Y-Axis Padding factor (e.g. 0.05 = 5% padding top and bottom)
    pub price_plot_height: f32,
    pub payoff_plot_height: f32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    candle_bullish_color: Color32::from_rgb(38, 166, 154),
    candle_bearish_color: Color32::from_rgb(239, 83, 80),
    candle_width_pct: 0.7,
    candle_wick_width: 1.0,

    moving_average_color: Color32::from_rgb(255, 165, 0),
    moving_average_width: 2.0,
    put_strike_color: Color32::from_rgb(70, 130, 255),
    call_strike_color: Color32::from_rgb(60, 200, 90),
    target_colors: [
        Color32::from_rgb(200, 120, 255),
        Color32::from_rgb(255, 215, 0),
    ],
    level_line_width: 2.0,
    level_dash_length: 10.0,

    fibonacci_gradient_colors: &["#5e4fa2", "#3288bd", "#66c2a5", "#fee08b", "#f46d43", "#9e0142"],
    fibonacci_line_width: 1.0,
    fibonacci_opacity_pct: 0.6,

    forecast_line_color: Color32::from_rgb(255, 165, 0),
    forecast_band_color: Color32::from_rgb(255, 200, 120),
    forecast_band_opacity_pct: 0.25,

    current_price_color: Color32::WHITE,
    current_price_line_width: 1.0,

    payoff_loss_color: Color32::from_rgb(230, 60, 60),
    payoff_inner_color: Color32::from_rgb(70, 130, 255),
    payoff_line_width: 2.0,
    zero_line_color: Color32::from_gray(160),
    payoff_marker_color: Color32::WHITE,

    color_text_subdued: Color32::GRAY,
    color_profit: Color32::from_rgb(60, 200, 90),
    color_loss: Color32::from_rgb(230, 60, 60),

    plot_y_padding_pct: 0.05,
    price_plot_height: 320.0,
    payoff_plot_height: 280.0,
};
