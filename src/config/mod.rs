//! Configuration module for the dashboard.

// Can all be private because we have a public re-export.
mod analysis;
mod app;
mod debug;
mod demo;
mod types;
mod yahoo;

// Can't be private because callers reach into it by path
pub mod plot;

// Re-export commonly used items
pub use analysis::{ANALYSIS, AnalysisConfig, FIBONACCI_RATIOS, PayoffRange};
pub use app::{APP, AppConfig};
pub use debug::{DF, LOG_PERFORMANCE, LogFlags};
pub use demo::{DEMO, DemoConfig};
pub use plot::PLOT_CONFIG;
pub use types::{ChangePct, PresentationMode, VolatilityPct};
pub use yahoo::{YAHOO, YahooConfig};
