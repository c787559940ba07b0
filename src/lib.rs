#![allow(clippy::collapsible_if)]
#![allow(clippy::type_complexity)]
#![allow(clippy::too_many_arguments)]

// Core modules
pub mod analysis;
pub mod app;
pub mod chart;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod ui;
pub mod utils;

pub use app::App;
pub use config::PresentationMode;
pub use data::{DemoProvider, MarketDataProvider};
pub use domain::{Bar, PriceSeries, Ticker};
pub use models::{SessionStore, TrackedInstrument};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Which form and chart overlays to start with
    #[arg(long, value_enum, default_value_t = config::APP.default_mode)]
    pub mode: PresentationMode,

    /// Use generated demo bars instead of fetching from Yahoo Finance
    #[arg(long, default_value_t = false)]
    pub demo: bool,
}

/// Main application entry point - creates the GUI app
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
