// Domain types and value objects
mod bar;
mod price_series;
mod ticker;

pub use bar::{Bar, BarDirection};
pub use price_series::PriceSeries;
pub use ticker::Ticker;
