mod plot_layers;
mod styles;
mod ui_config;
mod ui_panels;
mod ui_plot_view;
mod ui_text;
mod utils;

pub(crate) use styles::{UiStyleExt, get_outcome_color};
pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
pub(crate) use ui_plot_view::{show_payoff_plot, show_price_plot};
pub(crate) use utils::{format_price, setup_custom_visuals};

pub use ui_plot_view::PlotVisibility;
