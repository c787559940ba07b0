//! Figure model for one tracked instrument's price chart.
//! Built once from the instrument's own data; drawing reads it every frame.

use colorgrad::Gradient;
use eframe::egui::Color32;

use crate::analysis::{FibonacciLevels, ForecastBand, MovingAverage};
use crate::config::PLOT_CONFIG;
use crate::domain::{BarDirection, PriceSeries};
use crate::models::InstrumentParams;
use crate::ui::UI_TEXT;
use crate::utils::{TimeUtils, maths_utils};

#[derive(Debug, Clone, PartialEq)]
pub struct CandleShape {
    pub x: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub direction: BarDirection,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LevelKind {
    PutStrike,
    CallStrike,
    Target,
    Fibonacci,
}

/// A labelled horizontal line across the whole chart.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelLine {
    pub y: f64,
    pub label: String,
    pub kind: LevelKind,
    pub color: Color32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BandShape {
    pub projection: Vec<[f64; 2]>,
    pub upper: Vec<[f64; 2]>,
    pub lower: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriceFigure {
    pub title: String,
    pub candles: Vec<CandleShape>,
    pub moving_average: Vec<[f64; 2]>,
    pub levels: Vec<LevelLine>,
    pub forecast: Option<BandShape>,
    pub current_price: f64,
    pub x_bounds: (f64, f64),
    pub y_bounds: (f64, f64),
}

/// Indicator outputs a price figure draws on.
pub struct PriceOverlays<'a> {
    pub moving_average: &'a MovingAverage,
    pub forecast: &'a ForecastBand,
    pub fibonacci: &'a FibonacciLevels,
}

impl PriceFigure {
    pub fn build(
        series: &PriceSeries,
        params: &InstrumentParams,
        overlays: &PriceOverlays<'_>,
        current_price: f64,
    ) -> Self {
        crate::trace_time!("Build price figure", 2_000, {
            let candles: Vec<CandleShape> = series
                .bars()
                .iter()
                .map(|b| CandleShape {
                    x: TimeUtils::epoch_ms_to_plot_x(b.timestamp_ms),
                    open: b.open,
                    high: b.high,
                    low: b.low,
                    close: b.close,
                    direction: b.direction(),
                })
                .collect();

            let moving_average = candles
                .iter()
                .enumerate()
                .filter_map(|(i, c)| overlays.moving_average.value_at(i).map(|v| [c.x, v]))
                .collect();

            let last_x = candles.last().map(|c| c.x).unwrap_or_default();
            let forecast = band_shape(overlays.forecast, last_x);

            let mut levels = fibonacci_lines(overlays.fibonacci);
            levels.extend(param_lines(params));

            let first_x = candles.first().map(|c| c.x).unwrap_or_default();
            let horizon = overlays.forecast.horizon_days() as f64;
            let x_bounds = (first_x - 1.0, last_x + horizon + 1.0);
            let y_bounds = y_bounds(series, &levels, forecast.as_ref(), current_price);

            let title = UI_TEXT.price_chart_title(
                series.ticker().as_str(),
                current_price,
                overlays.forecast.horizon_days(),
                overlays.forecast.level().unwrap_or(current_price),
            );

            Self {
                title,
                candles,
                moving_average,
                levels,
                forecast,
                current_price,
                x_bounds,
                y_bounds,
            }
        })
    }

    pub fn levels_of(&self, kind: LevelKind) -> impl Iterator<Item = &LevelLine> {
        self.levels.iter().filter(move |l| l.kind == kind)
    }
}

fn band_shape(band: &ForecastBand, last_x: f64) -> Option<BandShape> {
    if band.horizon_days() == 0 {
        return None;
    }
    let mut shape = BandShape {
        projection: Vec::with_capacity(band.horizon_days()),
        upper: Vec::with_capacity(band.horizon_days()),
        lower: Vec::with_capacity(band.horizon_days()),
    };
    for (day, lower, mid, upper) in band.steps() {
        let x = last_x + day as f64;
        shape.projection.push([x, mid]);
        shape.upper.push([x, upper]);
        shape.lower.push([x, lower]);
    }
    Some(shape)
}

fn fibonacci_lines(fib: &FibonacciLevels) -> Vec<LevelLine> {
    let gradient = colorgrad::GradientBuilder::new()
        .html_colors(PLOT_CONFIG.fibonacci_gradient_colors)
        .build::<colorgrad::CatmullRomGradient>();

    let gradient = match gradient {
        Ok(g) => Some(g),
        Err(e) => {
            log::warn!("Fibonacci gradient unavailable, using flat color: {:?}", e);
            None
        }
    };

    fib.iter()
        .map(|level| {
            let color = gradient
                .as_ref()
                .map(|g| to_egui_color(g.at(level.ratio as f32)))
                .unwrap_or(PLOT_CONFIG.color_text_subdued);
            LevelLine {
                y: level.price,
                label: format!("{} {}", UI_TEXT.label_fibonacci, level.label),
                kind: LevelKind::Fibonacci,
                color: color.linear_multiply(PLOT_CONFIG.fibonacci_opacity_pct),
            }
        })
        .collect()
}

fn param_lines(params: &InstrumentParams) -> Vec<LevelLine> {
    match params {
        InstrumentParams::Strangle(p) => vec![
            LevelLine {
                y: p.put_strike,
                label: format!("{}: {}", UI_TEXT.label_put_strike, p.put_strike),
                kind: LevelKind::PutStrike,
                color: PLOT_CONFIG.put_strike_color,
            },
            LevelLine {
                y: p.call_strike,
                label: format!("{}: {}", UI_TEXT.label_call_strike, p.call_strike),
                kind: LevelKind::CallStrike,
                color: PLOT_CONFIG.call_strike_color,
            },
        ],
        InstrumentParams::Targets(t) => t
            .targets
            .iter()
            .zip(PLOT_CONFIG.target_colors)
            .enumerate()
            .map(|(i, (&y, color))| LevelLine {
                y,
                label: format!("{} {}: {}", UI_TEXT.label_target, i + 1, y),
                kind: LevelKind::Target,
                color,
            })
            .collect(),
    }
}

fn y_bounds(
    series: &PriceSeries,
    levels: &[LevelLine],
    band: Option<&BandShape>,
    current_price: f64,
) -> (f64, f64) {
    let mut values: Vec<f64> = levels.iter().map(|l| l.y).collect();
    values.push(current_price);
    if let Some((low, high)) = series.price_envelope() {
        values.push(low);
        values.push(high);
    }
    if let Some(band) = band {
        values.extend(band.upper.iter().chain(&band.lower).map(|p| p[1]));
    }

    let (min, max) = maths_utils::min_max(&values).unwrap_or((0.0, 1.0));
    let range = (max - min).max(current_price.abs() * 0.01).max(f64::EPSILON);
    let pad = range * PLOT_CONFIG.plot_y_padding_pct;
    ((min - pad).max(0.0), max + pad)
}

pub(crate) fn to_egui_color(colorgrad_color: colorgrad::Color) -> Color32 {
    let rgba8 = colorgrad_color.to_rgba8();
    Color32::from_rgba_unmultiplied(rgba8[0], rgba8[1], rgba8[2], 255)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{StrangleParams, TargetParams, fibonacci_levels, forecast_band, moving_average};
    use crate::domain::{Bar, Ticker};

    fn series() -> PriceSeries {
        let closes = [10.0, 12.0, 11.0, 15.0, 9.0];
        let bars = closes
            .iter()
            .enumerate()
            .map(|(i, &c)| Bar::new(i as i64 * TimeUtils::MS_IN_D, c, c + 0.5, c - 0.5, c, 0))
            .collect();
        PriceSeries::new(Ticker::parse("TEST").unwrap(), bars)
    }

    fn figure(params: &InstrumentParams) -> PriceFigure {
        let s = series();
        let ma = moving_average(&s, 3).unwrap();
        let band = forecast_band(&s, 10, 3, 0.1).unwrap();
        let fib = fibonacci_levels(&s).unwrap();
        let overlays = PriceOverlays {
            moving_average: &ma,
            forecast: &band,
            fibonacci: &fib,
        };
        PriceFigure::build(&s, params, &overlays, 9.0)
    }

    const STRANGLE: InstrumentParams = InstrumentParams::Strangle(StrangleParams {
        put_strike: 8.0,
        put_premium: 0.3,
        call_strike: 14.0,
        call_premium: 0.2,
    });

    #[test]
    fn strangle_figure_carries_both_strikes() {
        let fig = figure(&STRANGLE);
        assert_eq!(fig.candles.len(), 5);
        assert_eq!(fig.moving_average.len(), 3);
        assert_eq!(fig.levels_of(LevelKind::PutStrike).count(), 1);
        assert_eq!(fig.levels_of(LevelKind::CallStrike).count(), 1);
        assert_eq!(fig.levels_of(LevelKind::Fibonacci).count(), 6);
        assert_eq!(fig.levels_of(LevelKind::Target).count(), 0);
        assert!(fig.title.starts_with("TEST - "));
    }

    #[test]
    fn forecast_extends_past_last_bar() {
        let fig = figure(&STRANGLE);
        let band = fig.forecast.as_ref().unwrap();
        assert_eq!(band.projection.len(), 10);
        assert_eq!(band.projection[0][0], 5.0);
        assert_eq!(band.projection[9][0], 14.0);
        assert!(fig.x_bounds.1 >= 14.0);
    }

    #[test]
    fn bounds_cover_every_line() {
        let fig = figure(&InstrumentParams::Targets(TargetParams {
            targets: [20.0, 4.0],
        }));
        assert_eq!(fig.levels_of(LevelKind::Target).count(), 2);
        for level in &fig.levels {
            assert!(level.y >= fig.y_bounds.0 && level.y <= fig.y_bounds.1);
        }
    }

    #[test]
    fn build_is_idempotent() {
        assert_eq!(figure(&STRANGLE), figure(&STRANGLE));
    }
}
