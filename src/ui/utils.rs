use eframe::egui::{Context, Visuals};

use crate::ui::UI_CONFIG;

/// "12.34" style price, with more decimals for sub-unit prices
pub fn format_price(price: f64) -> String {
    if price.abs() >= 1.0 || price == 0.0 {
        format!("{:.2}", price)
    } else {
        format!("{:.4}", price)
    }
}

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;

    // Make the widgets stand out a bit more
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;

    ctx.set_visuals(visuals);
}
