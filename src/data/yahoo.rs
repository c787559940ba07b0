//! Yahoo Finance chart endpoint (`/v8/finance/chart/{symbol}`).

use async_trait::async_trait;
use reqwest::{Client, Url, header};
use serde::Deserialize;

use crate::config::{DF, YAHOO};
use crate::data::{FetchError, MarketDataProvider};
use crate::domain::{Bar, PriceSeries, Ticker};

pub struct YahooProvider {
    client: Client,
    base_url: String,
}

impl YahooProvider {
    pub fn new() -> Result<Self, FetchError> {
        Self::with_base_url(YAHOO.base_url)
    }

    /// Point at another host (a local fixture server, a proxy for the web build).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, FetchError> {
        #[cfg(not(target_arch = "wasm32"))]
        let client = Client::builder()
            .user_agent(YAHOO.user_agent)
            .timeout(std::time::Duration::from_millis(YAHOO.timeout_ms))
            .build()?;

        #[cfg(target_arch = "wasm32")]
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn chart_url(&self, ticker: &Ticker) -> Result<Url, FetchError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| FetchError::Network(format!("bad base url {}: {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| FetchError::Network(format!("base url {} cannot take a path", self.base_url)))?
            .pop_if_empty()
            .extend(["v8", "finance", "chart", ticker.as_str()]);
        url.query_pairs_mut()
            .append_pair("range", YAHOO.range)
            .append_pair("interval", YAHOO.interval);
        Ok(url)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl MarketDataProvider for YahooProvider {
    async fn fetch_daily_bars(&self, ticker: &Ticker) -> Result<PriceSeries, FetchError> {
        let url = self.chart_url(ticker)?;
        if DF.log_fetch {
            log::info!("GET {}", url);
        }

        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // Unknown symbols come back as 404 with a chart error object; prefer that message.
            if let Err(err @ FetchError::Upstream { .. }) = decode_chart_response(ticker, &body) {
                return Err(err);
            }
            return Err(FetchError::HttpStatus {
                ticker: ticker.clone(),
                status: status.as_u16(),
            });
        }

        decode_chart_response(ticker, &body)
    }

    fn name(&self) -> &'static str {
        "Yahoo Finance"
    }
}

/// Turns a chart response body into a series. Rows missing any of open/high/low/close are dropped.
pub fn decode_chart_response(ticker: &Ticker, body: &str) -> Result<PriceSeries, FetchError> {
    let response: ChartResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;

    if let Some(error) = response.chart.error {
        return Err(FetchError::Upstream {
            code: error.code,
            description: error.description,
        });
    }

    let empty = || FetchError::EmptySeries(ticker.clone());

    let result = response
        .chart
        .result
        .and_then(|r| r.into_iter().next())
        .ok_or_else(empty)?;
    let timestamps = result.timestamp.ok_or_else(empty)?;
    let quote = result
        .indicators
        .quote
        .into_iter()
        .next()
        .ok_or_else(empty)?;

    let bars: Vec<Bar> = timestamps
        .iter()
        .enumerate()
        .filter_map(|(i, &ts_sec)| {
            let open = quote.open.get(i).copied().flatten()?;
            let high = quote.high.get(i).copied().flatten()?;
            let low = quote.low.get(i).copied().flatten()?;
            let close = quote.close.get(i).copied().flatten()?;
            let volume = quote.volume.get(i).copied().flatten().unwrap_or(0).max(0) as u64;
            let bar = Bar::new(ts_sec * 1000, open, high, low, close, volume);
            bar.is_finite().then_some(bar)
        })
        .collect();

    let dropped = timestamps.len() - bars.len();
    if dropped > 0 && DF.log_dropped_rows {
        log::info!("{}: dropped {} incomplete rows", ticker, dropped);
    }

    if bars.is_empty() {
        return Err(empty());
    }

    Ok(PriceSeries::new(ticker.clone(), bars))
}

// Yahoo Finance chart response structures

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartEnvelope,
}

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    #[serde(default)]
    result: Option<Vec<ChartResult>>,
    #[serde(default)]
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    #[serde(default)]
    code: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    #[serde(default)]
    timestamp: Option<Vec<i64>>,
    indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
struct ChartIndicators {
    #[serde(default)]
    quote: Vec<ChartQuote>,
}

#[derive(Debug, Deserialize)]
struct ChartQuote {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<i64>>,
}
