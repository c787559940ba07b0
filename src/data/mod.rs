// Data fetcher: providers and the background job that drives them
mod demo;
mod error;
mod fetch_job;
mod provider;
mod yahoo;

pub use {
    demo::DemoProvider,
    error::FetchError,
    fetch_job::{FetchJob, FetchOutcome},
    provider::MarketDataProvider,
    yahoo::{YahooProvider, decode_chart_response},
};
