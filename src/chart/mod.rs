// Chart renderer: pure figure models, drawn by `ui::plot_layers`
mod payoff_figure;
mod price_figure;

pub use payoff_figure::{PayoffFigure, PayoffRegionKind, PayoffSegment};
pub use price_figure::{BandShape, CandleShape, LevelKind, LevelLine, PriceFigure, PriceOverlays};
