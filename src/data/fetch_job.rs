//! Runs one fetch off the UI thread and hands the outcome back over a channel.

use std::sync::{
    Arc,
    mpsc::{self, Receiver, TryRecvError},
};

use crate::config::DF;
use crate::data::{FetchError, MarketDataProvider};
use crate::domain::{PriceSeries, Ticker};
use crate::utils::AppInstant;

#[cfg(not(target_arch = "wasm32"))]
use {std::thread, tokio::runtime::Runtime};

pub type FetchOutcome = Result<PriceSeries, FetchError>;

/// A single in-flight request. Dropping it abandons the result.
pub struct FetchJob {
    ticker: Ticker,
    provider_name: &'static str,
    started: AppInstant,
    rx: Receiver<FetchOutcome>,
}

impl FetchJob {
    pub fn spawn(provider: Arc<dyn MarketDataProvider>, ticker: Ticker) -> Self {
        let (tx, rx) = mpsc::channel();
        let provider_name = provider.name();
        let job_ticker = ticker.clone();

        if DF.log_fetch {
            log::info!("Fetching {} from {}", ticker, provider_name);
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            thread::spawn(move || {
                let outcome = match Runtime::new() {
                    Ok(rt) => rt.block_on(provider.fetch_daily_bars(&job_ticker)),
                    Err(e) => Err(FetchError::Worker(format!("tokio runtime: {}", e))),
                };
                let _ = tx.send(outcome);
            });
        }

        #[cfg(target_arch = "wasm32")]
        {
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = provider.fetch_daily_bars(&job_ticker).await;
                let _ = tx.send(outcome);
            });
        }

        Self {
            ticker,
            provider_name,
            started: AppInstant::now(),
            rx,
        }
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider_name
    }

    pub fn elapsed_secs(&self) -> f32 {
        self.started.elapsed().as_secs_f32()
    }

    /// `None` while still running. A worker that vanished without sending counts as a failure.
    pub fn poll(&self) -> Option<FetchOutcome> {
        match self.rx.try_recv() {
            Ok(outcome) => {
                if DF.log_fetch {
                    match &outcome {
                        Ok(series) => log::info!(
                            "Fetched {} bars for {} in {:.2}s",
                            series.len(),
                            self.ticker,
                            self.elapsed_secs()
                        ),
                        Err(e) => log::warn!("Fetch for {} failed: {}", self.ticker, e),
                    }
                }
                Some(outcome)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(FetchError::Worker(
                "worker exited without a result".to_string(),
            ))),
        }
    }
}
