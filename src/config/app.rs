use crate::config::PresentationMode;

pub struct AppConfig {
    pub window_title: &'static str,
    /// eframe app id (native window class / storage key)
    pub app_id: &'static str,
    pub default_mode: PresentationMode,
    /// Canvas element the wasm build attaches to
    pub canvas_id: &'static str,
}

pub const APP: AppConfig = AppConfig {
    window_title: "Strike Scope - Options & Price Targets",
    app_id: "Strike Scope",
    default_mode: PresentationMode::OptionsPayoff,
    canvas_id: "the_canvas_id",
};
