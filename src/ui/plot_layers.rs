use eframe::egui::{Align2, Color32, RichText, Stroke};
use egui_plot::{HLine, Line, LineStyle, PlotPoint, PlotPoints, PlotUi, Polygon, Text, VLine};

use crate::chart::{BandShape, CandleShape, LevelKind, PayoffFigure, PriceFigure};
use crate::config::PLOT_CONFIG;
use crate::domain::BarDirection;
use crate::ui::UI_TEXT;

/// Context passed to every layer during rendering.
pub struct LayerContext<'a, F> {
    pub figure: &'a F,
}

/// A standardized layer in the plot stack.
pub trait PlotLayer<F> {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext<F>);
}

// ============================================================================
// PRICE CHART LAYERS
// ============================================================================

pub struct FibonacciLayer;

impl PlotLayer<PriceFigure> for FibonacciLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext<PriceFigure>) {
        let x_left = ctx.figure.x_bounds.0;
        for level in ctx.figure.levels_of(LevelKind::Fibonacci) {
            plot_ui.hline(
                HLine::new(level.label.clone(), level.y)
                    .color(level.color)
                    .width(PLOT_CONFIG.fibonacci_line_width)
                    .style(LineStyle::dotted_dense()),
            );
            annotate(plot_ui, x_left, level.y, &level.label, level.color, Align2::LEFT_BOTTOM);
        }
    }
}

pub struct ForecastBandLayer;

impl PlotLayer<PriceFigure> for ForecastBandLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext<PriceFigure>) {
        let Some(band) = &ctx.figure.forecast else {
            return;
        };

        plot_ui.polygon(
            Polygon::new("", PlotPoints::new(envelope(band)))
                .fill_color(
                    PLOT_CONFIG
                        .forecast_band_color
                        .linear_multiply(PLOT_CONFIG.forecast_band_opacity_pct),
                )
                .stroke(Stroke::NONE),
        );

        plot_ui.line(
            Line::new(UI_TEXT.label_forecast, PlotPoints::new(band.projection.clone()))
                .color(PLOT_CONFIG.forecast_line_color)
                .width(PLOT_CONFIG.moving_average_width)
                .style(LineStyle::Dashed {
                    length: PLOT_CONFIG.level_dash_length,
                }),
        );
    }
}

/// Closed outline: upper edge left to right, then lower edge back.
fn envelope(band: &BandShape) -> Vec<[f64; 2]> {
    band.upper
        .iter()
        .copied()
        .chain(band.lower.iter().rev().copied())
        .collect()
}

pub struct LevelLinesLayer;

impl PlotLayer<PriceFigure> for LevelLinesLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext<PriceFigure>) {
        let x_right = ctx.figure.x_bounds.1;
        let user_levels = ctx
            .figure
            .levels
            .iter()
            .filter(|l| l.kind != LevelKind::Fibonacci);

        for level in user_levels {
            plot_ui.hline(
                HLine::new(level.label.clone(), level.y)
                    .color(level.color)
                    .width(PLOT_CONFIG.level_line_width)
                    .style(LineStyle::Dashed {
                        length: PLOT_CONFIG.level_dash_length,
                    }),
            );
            annotate(plot_ui, x_right, level.y, &level.label, level.color, Align2::RIGHT_BOTTOM);
        }
    }
}

pub struct MovingAverageLayer;

impl PlotLayer<PriceFigure> for MovingAverageLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext<PriceFigure>) {
        if ctx.figure.moving_average.is_empty() {
            return;
        }
        plot_ui.line(
            Line::new(
                UI_TEXT.label_moving_average,
                PlotPoints::new(ctx.figure.moving_average.clone()),
            )
            .color(PLOT_CONFIG.moving_average_color)
            .width(PLOT_CONFIG.moving_average_width),
        );
    }
}

pub struct CandlestickLayer;

impl PlotLayer<PriceFigure> for CandlestickLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext<PriceFigure>) {
        for candle in &ctx.figure.candles {
            draw_candle(plot_ui, candle);
        }
    }
}

fn draw_candle(ui: &mut PlotUi, candle: &CandleShape) {
    let color = match candle.direction {
        BarDirection::Bullish => PLOT_CONFIG.candle_bullish_color,
        BarDirection::Bearish => PLOT_CONFIG.candle_bearish_color,
    };

    ui.line(
        Line::new("", PlotPoints::new(vec![[candle.x, candle.low], [candle.x, candle.high]]))
            .color(color)
            .width(PLOT_CONFIG.candle_wick_width),
    );

    let top = candle.open.max(candle.close);
    let bottom = candle.open.min(candle.close);
    // Doji: give the body a sliver of height so it stays visible
    let top = if (top - bottom).abs() < f64::EPSILON {
        bottom * 1.0005
    } else {
        top
    };

    let half_w = PLOT_CONFIG.candle_width_pct / 2.0;
    let pts = vec![
        [candle.x - half_w, bottom],
        [candle.x + half_w, bottom],
        [candle.x + half_w, top],
        [candle.x - half_w, top],
    ];
    ui.polygon(
        Polygon::new("", PlotPoints::new(pts))
            .fill_color(color)
            .stroke(Stroke::NONE),
    );
}

pub struct PriceLineLayer;

impl PlotLayer<PriceFigure> for PriceLineLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext<PriceFigure>) {
        plot_ui.hline(
            HLine::new(UI_TEXT.label_current_price, ctx.figure.current_price)
                .color(PLOT_CONFIG.current_price_color)
                .width(PLOT_CONFIG.current_price_line_width)
                .style(LineStyle::dashed_loose()),
        );
    }
}

// ============================================================================
// PAYOFF CHART LAYERS
// ============================================================================

pub struct ZeroLineLayer;

impl PlotLayer<PayoffFigure> for ZeroLineLayer {
    fn render(&self, plot_ui: &mut PlotUi, _ctx: &LayerContext<PayoffFigure>) {
        plot_ui.hline(
            HLine::new("", 0.0)
                .color(PLOT_CONFIG.zero_line_color)
                .width(1.0)
                .style(LineStyle::Dashed { length: 6.0 }),
        );
    }
}

pub struct PayoffRegionsLayer;

impl PlotLayer<PayoffFigure> for PayoffRegionsLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext<PayoffFigure>) {
        for segment in &ctx.figure.segments {
            plot_ui.line(
                Line::new(segment.label.clone(), PlotPoints::new(segment.points.clone()))
                    .color(segment.color)
                    .width(PLOT_CONFIG.payoff_line_width),
            );
        }
    }
}

pub struct CurrentPriceMarkerLayer;

impl PlotLayer<PayoffFigure> for CurrentPriceMarkerLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext<PayoffFigure>) {
        let fig = ctx.figure;
        plot_ui.vline(
            VLine::new("", fig.current_price)
                .color(PLOT_CONFIG.payoff_marker_color)
                .width(PLOT_CONFIG.level_line_width)
                .style(LineStyle::Dashed {
                    length: PLOT_CONFIG.level_dash_length,
                }),
        );
        annotate(
            plot_ui,
            fig.current_price,
            fig.y_bounds.0,
            &fig.current_label,
            PLOT_CONFIG.payoff_marker_color,
            Align2::LEFT_BOTTOM,
        );
    }
}

// ============================================================================
// HELPER FUNCTIONS (Private to this module)
// ============================================================================

fn annotate(plot_ui: &mut PlotUi, x: f64, y: f64, text: &str, color: Color32, anchor: Align2) {
    plot_ui.text(
        Text::new("", PlotPoint::new(x, y), RichText::new(text).small().color(color))
            .anchor(anchor),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_walks_upper_then_lower_back() {
        let band = BandShape {
            projection: vec![[1.0, 10.0], [2.0, 10.0]],
            upper: vec![[1.0, 11.0], [2.0, 11.0]],
            lower: vec![[1.0, 9.0], [2.0, 9.0]],
        };
        assert_eq!(
            envelope(&band),
            vec![[1.0, 11.0], [2.0, 11.0], [2.0, 9.0], [1.0, 9.0]]
        );
    }
}
