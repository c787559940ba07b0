use strike_scope::analysis::{StrangleParams, TargetParams};
use strike_scope::data::{FetchError, MarketDataProvider, YahooProvider, decode_chart_response};
use strike_scope::domain::Ticker;
use strike_scope::models::{InstrumentParams, TrackedInstrument};

const FIVE_DAYS: &str = r#"{
  "chart": {
    "result": [{
      "meta": {"currency": "BRL", "symbol": "BBAS3.SA", "regularMarketPrice": 27.4},
      "timestamp": [1709125200, 1709211600, 1709298000, 1709557200, 1709643600],
      "indicators": {
        "quote": [{
          "open":   [27.10, 27.30, null,  27.05, 27.20],
          "high":   [27.50, 27.60, 27.40, 27.35, 27.55],
          "low":    [26.90, 27.00, 26.95, 26.80, 27.00],
          "close":  [27.30, 27.15, 27.00, 27.20, 27.40],
          "volume": [1200300, 980400, 1100000, null, 1500000]
        }],
        "adjclose": [{"adjclose": [27.3, 27.15, 27.0, 27.2, 27.4]}]
      }
    }],
    "error": null
  }
}"#;

fn ticker(raw: &str) -> Ticker {
    Ticker::parse(raw).unwrap()
}

#[test]
fn realistic_body_decodes_and_drops_the_gap() {
    let series = decode_chart_response(&ticker("BBAS3.SA"), FIVE_DAYS).unwrap();

    assert_eq!(series.len(), 4);
    assert_eq!(series.latest_close(), Some(27.40));
    assert_eq!(series.bars()[0].timestamp_ms, 1_709_125_200_000);
    // Missing volume is kept as zero; missing open drops the row
    assert_eq!(series.bars()[2].volume, 0);
}

#[test]
fn decoded_series_feeds_both_modes() {
    let series = decode_chart_response(&ticker("BBAS3.SA"), FIVE_DAYS).unwrap();

    let strangle = TrackedInstrument::build(
        series.clone(),
        InstrumentParams::Strangle(StrangleParams {
            put_strike: 26.0,
            put_premium: 0.4,
            call_strike: 29.0,
            call_premium: 0.3,
        }),
    )
    .unwrap();
    assert!(strangle.payoff_figure().is_some());
    assert!(strangle.indicators().moving_average.is_degraded());

    let targets = TrackedInstrument::build(
        series,
        InstrumentParams::Targets(TargetParams {
            targets: [30.0, 25.0],
        }),
    )
    .unwrap();
    assert!(targets.payoff_figure().is_none());
    assert_eq!(targets.indicators().targets.as_ref().map(Vec::len), Some(2));
}

#[test]
fn unknown_symbol_is_an_upstream_error() {
    let body = r#"{"chart":{"result":null,"error":{"code":"Not Found","description":"No data found, symbol may be delisted"}}}"#;
    let err = decode_chart_response(&ticker("ZZZZ9.SA"), body).unwrap_err();
    assert_eq!(
        err,
        FetchError::Upstream {
            code: "Not Found".into(),
            description: "No data found, symbol may be delisted".into(),
        }
    );
}

#[test]
fn all_rows_incomplete_is_an_empty_series() {
    let body = r#"{"chart":{"result":[{"timestamp":[1709125200],"indicators":{"quote":[{"open":[null],"high":[null],"low":[null],"close":[null],"volume":[null]}]}}],"error":null}}"#;
    let err = decode_chart_response(&ticker("BBAS3.SA"), body).unwrap_err();
    assert_eq!(err, FetchError::EmptySeries(ticker("BBAS3.SA")));
}

#[tokio::test]
#[ignore = "hits the live Yahoo Finance API"]
async fn live_fetch_returns_daily_bars() {
    let provider = YahooProvider::new().unwrap();
    let series = provider.fetch_daily_bars(&ticker("AAPL")).await.unwrap();
    assert!(series.len() > 20);
    assert!(series.latest_close().unwrap() > 0.0);
}
