use eframe::egui::{Ui, Vec2b};
use egui_plot::{AxisHints, HPlacement, Legend, Plot};
use serde::{Deserialize, Serialize};

use crate::chart::{PayoffFigure, PriceFigure};
use crate::config::PLOT_CONFIG;
use crate::ui::UI_TEXT;
use crate::ui::plot_layers::{
    CandlestickLayer, CurrentPriceMarkerLayer, FibonacciLayer, ForecastBandLayer, LayerContext,
    LevelLinesLayer, MovingAverageLayer, PayoffRegionsLayer, PlotLayer, PriceLineLayer,
    ZeroLineLayer,
};
use crate::ui::utils::format_price;
use crate::utils::{TimeUtils, epoch_ms_to_date_string};

/// Which price-chart layers are drawn. Shared by every chart in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotVisibility {
    pub candles: bool,
    pub moving_average: bool,
    pub levels: bool,
    pub fibonacci: bool,
    pub forecast: bool,
    pub price_line: bool,
}

impl Default for PlotVisibility {
    fn default() -> Self {
        Self {
            candles: true,
            moving_average: true,
            levels: true,
            fibonacci: true,
            forecast: true,
            price_line: true,
        }
    }
}

impl PlotVisibility {
    /// Layer stack for a price chart, bottom first.
    pub(crate) fn price_layers(&self) -> Vec<Box<dyn PlotLayer<PriceFigure>>> {
        let mut layers: Vec<Box<dyn PlotLayer<PriceFigure>>> = Vec::with_capacity(6);
        if self.fibonacci {
            layers.push(Box::new(FibonacciLayer));
        }
        if self.forecast {
            layers.push(Box::new(ForecastBandLayer));
        }
        if self.levels {
            layers.push(Box::new(LevelLinesLayer));
        }
        if self.price_line {
            layers.push(Box::new(PriceLineLayer));
        }
        if self.moving_average {
            layers.push(Box::new(MovingAverageLayer));
        }
        // Candles on top
        if self.candles {
            layers.push(Box::new(CandlestickLayer));
        }
        layers
    }
}

fn create_time_axis() -> AxisHints<'static> {
    AxisHints::new_x()
        .label(UI_TEXT.plot_x_axis)
        .formatter(|mark, _range| {
            epoch_ms_to_date_string(TimeUtils::plot_x_to_epoch_ms(mark.value))
        })
}

fn create_price_axis(label: &str) -> AxisHints<'static> {
    AxisHints::new_y()
        .label(label.to_string())
        .formatter(|mark, _range| format_price(mark.value))
        .placement(HPlacement::Right)
}

/// Draws one tracked instrument's price chart. `id_salt` keeps plot memory per instrument.
pub(crate) fn show_price_plot(
    ui: &mut Ui,
    id_salt: impl std::hash::Hash,
    figure: &PriceFigure,
    visibility: &PlotVisibility,
) {
    let (x_min, x_max) = figure.x_bounds;
    let (y_min, y_max) = figure.y_bounds;
    let layers = visibility.price_layers();

    Plot::new(("price_plot", id_salt))
        .height(PLOT_CONFIG.price_plot_height)
        .custom_x_axes(vec![create_time_axis()])
        .custom_y_axes(vec![create_price_axis(UI_TEXT.plot_y_axis)])
        .label_formatter(|name, point| {
            let date = epoch_ms_to_date_string(TimeUtils::plot_x_to_epoch_ms(point.x));
            if name.is_empty() {
                format!("{}\n{}", date, format_price(point.y))
            } else {
                format!("{}\n{}\n{}", name, date, format_price(point.y))
            }
        })
        .allow_scroll(false)
        .allow_drag(Vec2b { x: true, y: false })
        .allow_zoom(Vec2b { x: true, y: false })
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds_x(x_min..=x_max);
            plot_ui.set_plot_bounds_y(y_min..=y_max);

            let ctx = LayerContext { figure };
            for layer in layers {
                layer.render(plot_ui, &ctx);
            }
        });
}

pub(crate) fn show_payoff_plot(ui: &mut Ui, id_salt: impl std::hash::Hash, figure: &PayoffFigure) {
    let (x_min, x_max) = figure.x_bounds;
    let (y_min, y_max) = figure.y_bounds;
    let layers: [Box<dyn PlotLayer<PayoffFigure>>; 3] = [
        Box::new(ZeroLineLayer),
        Box::new(PayoffRegionsLayer),
        Box::new(CurrentPriceMarkerLayer),
    ];

    Plot::new(("payoff_plot", id_salt))
        .height(PLOT_CONFIG.payoff_plot_height)
        .legend(Legend::default())
        .x_axis_label(UI_TEXT.payoff_x_axis)
        .custom_y_axes(vec![create_price_axis(UI_TEXT.payoff_y_axis)])
        .allow_scroll(false)
        .allow_drag(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds_x(x_min..=x_max);
            plot_ui.set_plot_bounds_y(y_min..=y_max);

            let ctx = LayerContext { figure };
            for layer in &layers {
                layer.render(plot_ui, &ctx);
            }
        });
}
