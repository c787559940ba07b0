use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use futures::executor::block_on;

use strike_scope::analysis::{StrangleParams, TargetParams};
use strike_scope::data::{DemoProvider, FetchError, FetchJob, FetchOutcome, MarketDataProvider};
use strike_scope::domain::{PriceSeries, Ticker};
use strike_scope::models::{InstrumentParams, SessionStore, TrackedInstrument};

// Friday 2024-03-01 00:00 UTC
const ANCHOR: i64 = 1_709_251_200_000;

const STRANGLE: InstrumentParams = InstrumentParams::Strangle(StrangleParams {
    put_strike: 28.0,
    put_premium: 1.2,
    call_strike: 34.0,
    call_premium: 0.9,
});

struct FailingProvider;

#[async_trait]
impl MarketDataProvider for FailingProvider {
    async fn fetch_daily_bars(&self, ticker: &Ticker) -> Result<PriceSeries, FetchError> {
        Err(FetchError::HttpStatus {
            ticker: ticker.clone(),
            status: 503,
        })
    }

    fn name(&self) -> &'static str {
        "Failing"
    }
}

fn ticker(raw: &str) -> Ticker {
    Ticker::parse(raw).unwrap()
}

fn wait_for(job: &FetchJob) -> FetchOutcome {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        if let Some(outcome) = job.poll() {
            return outcome;
        }
        assert!(Instant::now() < deadline, "fetch job never finished");
        std::thread::sleep(Duration::from_millis(5));
    }
}

#[test]
fn demo_fetch_to_session_entry() {
    let provider = DemoProvider::anchored_at(ANCHOR);
    let series = block_on(provider.fetch_daily_bars(&ticker("bbas3.sa"))).unwrap();
    assert_eq!(series.ticker().as_str(), "BBAS3.SA");

    let instrument = TrackedInstrument::build(series, STRANGLE).unwrap();
    let mut store = SessionStore::new();
    store.append(instrument);

    assert_eq!(store.len(), 1);
    let latest = store.latest_payoff().unwrap();
    assert_eq!(latest.ticker().as_str(), "BBAS3.SA");
    assert!(latest.indicators().volatility.is_some());
    assert!(!latest.indicators().moving_average.is_degraded());
}

#[test]
fn entries_are_kept_in_insertion_order() {
    let provider = DemoProvider::anchored_at(ANCHOR);
    let mut store = SessionStore::new();

    for (raw, params) in [
        ("PETR4.SA", STRANGLE),
        (
            "VALE3.SA",
            InstrumentParams::Targets(TargetParams {
                targets: [70.0, 55.0],
            }),
        ),
        ("AAPL", STRANGLE),
    ] {
        let series = provider.series_for(&ticker(raw));
        store.append(TrackedInstrument::build(series, params).unwrap());
    }

    let order: Vec<&str> = store.iter().map(|i| i.ticker().as_str()).collect();
    assert_eq!(order, ["PETR4.SA", "VALE3.SA", "AAPL"]);
    assert_eq!(store.latest_payoff().unwrap().ticker().as_str(), "AAPL");
}

#[test]
fn same_ticker_twice_gives_two_entries() {
    let provider = DemoProvider::anchored_at(ANCHOR);
    let mut store = SessionStore::new();
    for _ in 0..2 {
        let series = provider.series_for(&ticker("AAPL"));
        store.append(TrackedInstrument::build(series, STRANGLE).unwrap());
    }
    let ids: Vec<_> = store.iter().map(|i| i.id()).collect();
    assert_eq!(ids.len(), 2);
    assert_ne!(ids[0], ids[1]);
}

#[test]
fn background_job_delivers_demo_series() {
    let job = FetchJob::spawn(Arc::new(DemoProvider::anchored_at(ANCHOR)), ticker("AAPL"));
    assert_eq!(job.provider_name(), "Demo data");

    let series = wait_for(&job).unwrap();
    assert!(!series.is_empty());
    assert_eq!(series.ticker(), job.ticker());
}

#[test]
fn failed_job_leaves_the_store_alone() {
    let mut store = SessionStore::new();
    let job = FetchJob::spawn(Arc::new(FailingProvider), ticker("AAPL"));

    match wait_for(&job) {
        Ok(series) => store.append(TrackedInstrument::build(series, STRANGLE).unwrap()),
        Err(e) => assert!(matches!(e, FetchError::HttpStatus { status: 503, .. })),
    }
    assert!(store.is_empty());
}
