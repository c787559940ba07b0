use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::analysis::IndicatorResult;
use crate::chart::{PayoffFigure, PriceFigure, PriceOverlays};
use crate::config::DF;
use crate::domain::{PriceSeries, Ticker};
use crate::models::{IndicatorSnapshot, InstrumentParams};

/// One "track" action's result. Immutable once built.
#[derive(Debug, Clone)]
pub struct TrackedInstrument {
    id: Uuid,
    series: PriceSeries,
    latest_close: f64,
    params: InstrumentParams,
    indicators: IndicatorSnapshot,
    price_figure: PriceFigure,
    payoff_figure: Option<PayoffFigure>,
    created_at: DateTime<Utc>,
}

impl TrackedInstrument {
    /// Computes indicators and figures for `series`. Fails only if an indicator does.
    pub fn build(series: PriceSeries, params: InstrumentParams) -> IndicatorResult<Self> {
        let indicators = IndicatorSnapshot::compute(&series, &params)?;
        // compute() has already rejected an empty series
        let latest_close = series.latest_close().unwrap_or_default();

        let overlays = PriceOverlays {
            moving_average: &indicators.moving_average,
            forecast: &indicators.forecast,
            fibonacci: &indicators.fibonacci,
        };
        let price_figure = PriceFigure::build(&series, &params, &overlays, latest_close);
        let payoff_figure = indicators.payoff.as_ref().map(PayoffFigure::build);

        if DF.log_figure_build {
            log::info!(
                "Built figures for {}: {} candles, {} levels, payoff: {}",
                series.ticker(),
                price_figure.candles.len(),
                price_figure.levels.len(),
                payoff_figure.is_some()
            );
        }

        Ok(Self {
            id: Uuid::new_v4(),
            series,
            latest_close,
            params,
            indicators,
            price_figure,
            payoff_figure,
            created_at: Utc::now(),
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn ticker(&self) -> &Ticker {
        self.series.ticker()
    }

    pub fn series(&self) -> &PriceSeries {
        &self.series
    }

    pub fn latest_close(&self) -> f64 {
        self.latest_close
    }

    pub fn params(&self) -> &InstrumentParams {
        &self.params
    }

    pub fn indicators(&self) -> &IndicatorSnapshot {
        &self.indicators
    }

    pub fn price_figure(&self) -> &PriceFigure {
        &self.price_figure
    }

    pub fn payoff_figure(&self) -> Option<&PayoffFigure> {
        self.payoff_figure.as_ref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
