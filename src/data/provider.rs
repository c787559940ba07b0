use async_trait::async_trait;

use crate::data::FetchError;
use crate::domain::{PriceSeries, Ticker};

/// Abstract interface for fetching market data.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait MarketDataProvider: Send + Sync {
    /// Roughly three months of daily bars, oldest first.
    async fn fetch_daily_bars(&self, ticker: &Ticker) -> Result<PriceSeries, FetchError>;

    /// Short name for logs and the status line
    fn name(&self) -> &'static str;
}
