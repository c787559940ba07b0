use std::mem;
use std::sync::Arc;

use eframe::egui::{Context, Key};
use eframe::Frame;

use crate::Cli;
use crate::app::input::{InputError, InputForm, TrackRequest};
use crate::app::phases::PhaseView;
use crate::app::state::{AppState, FetchingState};
use crate::config::{DF, PresentationMode};
use crate::data::{DemoProvider, FetchJob, FetchOutcome, MarketDataProvider};
use crate::models::{SessionStore, TrackedInstrument};
use crate::ui::{PlotVisibility, setup_custom_visuals};

pub struct App {
    pub(crate) mode: PresentationMode,
    pub(crate) form: InputForm,
    pub(crate) store: SessionStore,
    pub(crate) provider: Arc<dyn MarketDataProvider>,
    pub(crate) plot_visibility: PlotVisibility,
    pub(crate) input_errors: Vec<InputError>,
    /// Message from the most recent failed fetch or build. Cleared by the next success.
    pub(crate) last_error: Option<String>,
    state: AppState,
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        setup_custom_visuals(&cc.egui_ctx);
        Self::with_provider(args.mode, select_provider(&args))
    }

    pub(crate) fn with_provider(mode: PresentationMode, provider: Arc<dyn MarketDataProvider>) -> Self {
        Self {
            mode,
            form: InputForm::default(),
            store: SessionStore::new(),
            provider,
            plot_visibility: PlotVisibility::default(),
            input_errors: Vec::new(),
            last_error: None,
            state: AppState::default(),
        }
    }

    pub(crate) fn handle_global_shortcuts(&mut self, ctx: &Context) {
        if ctx.wants_keyboard_input() {
            // Typing into the form
            return;
        }

        ctx.input(|i| {
            let vis = &mut self.plot_visibility;
            if i.key_pressed(Key::Num1) {
                vis.candles = !vis.candles;
            }
            if i.key_pressed(Key::Num2) {
                vis.moving_average = !vis.moving_average;
            }
            if i.key_pressed(Key::Num3) {
                vis.levels = !vis.levels;
            }
            if i.key_pressed(Key::Num4) {
                vis.fibonacci = !vis.fibonacci;
            }
            if i.key_pressed(Key::Num5) {
                vis.forecast = !vis.forecast;
            }
            if i.key_pressed(Key::Num6) {
                vis.price_line = !vis.price_line;
            }
        });
    }

    /// Validates the form and starts a fetch. `None` leaves the app idle with the problems listed.
    pub(crate) fn begin_track(&mut self) -> Option<FetchingState> {
        match self.form.validate(self.mode) {
            Ok(request) => {
                self.input_errors.clear();
                let job = FetchJob::spawn(Arc::clone(&self.provider), request.ticker.clone());
                Some(FetchingState { request, job })
            }
            Err(errors) => {
                if DF.log_validation {
                    log::info!("Form rejected: {:?}", errors);
                }
                self.input_errors = errors;
                None
            }
        }
    }

    /// Appends the new instrument, or records why it could not be built. The store is untouched on failure.
    pub(crate) fn finish_track(&mut self, request: TrackRequest, outcome: FetchOutcome) {
        let result = outcome
            .map_err(|e| e.to_string())
            .and_then(|series| {
                TrackedInstrument::build(series, request.params).map_err(|e| {
                    format!("{}: {}", request.ticker, e)
                })
            });

        match result {
            Ok(instrument) => {
                self.store.append(instrument);
                self.last_error = None;
            }
            Err(msg) => {
                log::warn!("Track {} failed: {}", request.ticker, msg);
                self.last_error = Some(msg);
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn is_fetching(&self) -> bool {
        matches!(self.state, AppState::Fetching(_))
    }
}

fn select_provider(args: &Cli) -> Arc<dyn MarketDataProvider> {
    if args.demo {
        return Arc::new(DemoProvider::new());
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        match crate::data::YahooProvider::new() {
            Ok(yahoo) => return Arc::new(yahoo),
            Err(e) => log::error!("Yahoo client unavailable, using demo data: {}", e),
        }
    }

    Arc::new(DemoProvider::new())
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let current = mem::take(&mut self.state);
        self.state = match current {
            AppState::Idle(s) => s.tick(self, ctx),
            AppState::Fetching(s) => s.tick(self, ctx),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::StrangleParams;
    use crate::data::{DemoProvider, FetchError};
    use crate::domain::Ticker;
    use crate::models::InstrumentParams;

    const ANCHOR: i64 = 1_709_251_200_000;

    fn app() -> App {
        App::with_provider(
            PresentationMode::OptionsPayoff,
            Arc::new(DemoProvider::anchored_at(ANCHOR)),
        )
    }

    fn request() -> TrackRequest {
        TrackRequest {
            ticker: Ticker::parse("BBAS3.SA").unwrap(),
            params: InstrumentParams::Strangle(StrangleParams {
                put_strike: 28.0,
                put_premium: 1.2,
                call_strike: 34.0,
                call_premium: 0.9,
            }),
        }
    }

    #[test]
    fn successful_fetch_appends_and_clears_error() {
        let mut app = app();
        app.last_error = Some("old".into());
        let series = DemoProvider::anchored_at(ANCHOR).series_for(&request().ticker);

        app.finish_track(request(), Ok(series));

        assert_eq!(app.store.len(), 1);
        assert!(app.last_error.is_none());
        assert!(app.store.latest_payoff().is_some());
    }

    #[test]
    fn failed_fetch_leaves_store_untouched() {
        let mut app = app();
        app.finish_track(
            request(),
            Err(FetchError::EmptySeries(Ticker::parse("NOPE").unwrap())),
        );

        assert!(app.store.is_empty());
        assert!(app.last_error.is_some());
    }

    #[test]
    fn invalid_form_does_not_start_a_fetch() {
        let mut app = app();
        assert!(app.begin_track().is_none());
        assert!(app.input_errors.contains(&InputError::EmptyTicker));
        assert!(!app.is_fetching());
    }
}
