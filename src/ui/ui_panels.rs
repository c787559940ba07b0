use eframe::egui::{
    Button, CentralPanel, ComboBox, Context, Grid, RichText, ScrollArea, SidePanel, TextEdit,
    TopBottomPanel, Ui,
};
use strum::IntoEnumIterator;

use crate::app::App;
use crate::config::{ANALYSIS, DEMO, PresentationMode};
use crate::data::FetchJob;
use crate::models::{InstrumentParams, TrackedInstrument};
use crate::ui::styles::colored_subsection_heading;
use crate::ui::ui_text::{ICON_CHART, ICON_TARGET};
use crate::ui::{
    UI_CONFIG, UI_TEXT, UiStyleExt, format_price, get_outcome_color, show_payoff_plot,
    show_price_plot,
};

impl App {
    pub(crate) fn render_top_panel(&mut self, ctx: &Context, busy: bool) {
        TopBottomPanel::top("top_panel")
            .frame(UI_CONFIG.top_panel_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(
                        RichText::new(format!("{} {}", ICON_CHART, UI_TEXT.app_heading))
                            .color(UI_CONFIG.colors.heading),
                    );
                    ui.separator();

                    ui.label_subdued(format!("{}:", UI_TEXT.label_mode));
                    ui.add_enabled_ui(!busy, |ui| {
                        ComboBox::from_id_salt("mode_selector")
                            .selected_text(self.mode.to_string())
                            .show_ui(ui, |ui| {
                                for mode in PresentationMode::iter() {
                                    ui.selectable_value(&mut self.mode, mode, mode.to_string());
                                }
                            });
                    });
                    ui.separator();

                    ui.metric(
                        UI_TEXT.label_session,
                        &self.store.id().to_string(),
                        UI_CONFIG.colors.label,
                    );
                    ui.metric(UI_TEXT.label_source, self.provider.name(), UI_CONFIG.colors.label);
                });
            });
    }

    /// Returns true when the user asked to track the form contents.
    pub(crate) fn render_left_panel(&mut self, ctx: &Context, job: Option<&FetchJob>) -> bool {
        let mut track_clicked = false;

        SidePanel::left("left_panel")
            .frame(UI_CONFIG.side_panel_frame())
            .resizable(false)
            .exact_width(UI_CONFIG.left_panel_width)
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    ui.add_space(4.0);
                    ui.label_subheader(UI_TEXT.form_heading);
                    ui.add_space(4.0);

                    ui.add_enabled_ui(job.is_none(), |ui| {
                        self.render_form_fields(ui);
                    });

                    ui.add_space(6.0);
                    let track = Button::new(ui.button_text_primary(UI_TEXT.button_track));
                    if ui.add_enabled(job.is_none(), track).clicked() {
                        track_clicked = true;
                    }

                    if let Some(job) = job {
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.label_subdued(format!(
                                "{} {} ({:.1}s)",
                                UI_TEXT.label_fetching,
                                job.ticker(),
                                job.elapsed_secs()
                            ));
                        });
                    }

                    for err in &self.input_errors {
                        ui.label_error(err.to_string());
                    }
                    if let Some(err) = &self.last_error {
                        ui.label_subdued(UI_TEXT.label_last_error);
                        ui.label_error(err);
                    }

                    ui.add_space(8.0);
                    ui.separator();
                    self.render_suggestions(ui, job.is_none());

                    ui.add_space(8.0);
                    ui.separator();
                    self.render_layer_toggles(ui);
                });
            });

        track_clicked
    }

    fn render_form_fields(&mut self, ui: &mut Ui) {
        let width = UI_CONFIG.form_field_width;
        Grid::new("track_form")
            .num_columns(2)
            .spacing([8.0, 4.0])
            .show(ui, |ui| {
                ui.label(UI_TEXT.label_ticker);
                ui.add(
                    TextEdit::singleline(&mut self.form.ticker)
                        .hint_text(UI_TEXT.hint_ticker)
                        .desired_width(width),
                );
                ui.end_row();

                match self.mode {
                    PresentationMode::OptionsPayoff => {
                        let fields = [
                            (UI_TEXT.label_put_strike, &mut self.form.put_strike),
                            (UI_TEXT.label_put_premium, &mut self.form.put_premium),
                            (UI_TEXT.label_call_strike, &mut self.form.call_strike),
                            (UI_TEXT.label_call_premium, &mut self.form.call_premium),
                        ];
                        for (label, value) in fields {
                            ui.label(label);
                            ui.add(TextEdit::singleline(value).desired_width(width));
                            ui.end_row();
                        }
                    }
                    PresentationMode::PriceTargets => {
                        for (i, value) in self.form.targets.iter_mut().enumerate() {
                            ui.label(format!("{} {} {}", ICON_TARGET, UI_TEXT.label_target, i + 1));
                            ui.add(TextEdit::singleline(value).desired_width(width));
                            ui.end_row();
                        }
                    }
                }
            });
    }

    fn render_suggestions(&mut self, ui: &mut Ui, enabled: bool) {
        ui.label_subdued(UI_TEXT.label_suggestions);
        ui.horizontal_wrapped(|ui| {
            for ticker in DEMO.suggested_tickers {
                if ui
                    .add_enabled(enabled, Button::new(RichText::new(*ticker).small()))
                    .clicked()
                {
                    self.form.ticker = (*ticker).to_string();
                }
            }
        });
    }

    fn render_layer_toggles(&mut self, ui: &mut Ui) {
        ui.label_subheader(UI_TEXT.layers_heading);
        let vis = &mut self.plot_visibility;
        ui.checkbox(&mut vis.candles, UI_TEXT.toggle_candles);
        ui.checkbox(&mut vis.moving_average, UI_TEXT.toggle_moving_average);
        ui.checkbox(&mut vis.levels, UI_TEXT.toggle_levels);
        ui.checkbox(&mut vis.fibonacci, UI_TEXT.toggle_fibonacci);
        ui.checkbox(&mut vis.forecast, UI_TEXT.toggle_forecast);
        ui.checkbox(&mut vis.price_line, UI_TEXT.toggle_price_line);
    }

    pub(crate) fn render_central_panel(&self, ctx: &Context) {
        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                if self.store.is_empty() {
                    ui.centered_and_justified(|ui| {
                        ui.label_subdued(UI_TEXT.cp_empty_session);
                    });
                    return;
                }

                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        if self.mode == PresentationMode::OptionsPayoff {
                            self.render_latest_payoff(ui);
                        }

                        ui.add_space(8.0);
                        ui.heading(colored_subsection_heading(format!(
                            "{} ({})",
                            UI_TEXT.cp_tracked_heading,
                            self.store.len()
                        )));
                        ui.separator();

                        for instrument in self.store.iter() {
                            render_instrument(ui, instrument, self);
                            ui.add_space(12.0);
                        }
                    });
            });
    }

    fn render_latest_payoff(&self, ui: &mut Ui) {
        let Some(figure) = self.store.latest_payoff().and_then(|i| i.payoff_figure()) else {
            return;
        };

        ui.label_subheader(&figure.title);
        ui.horizontal(|ui| {
            for (label, value) in figure.readouts() {
                ui.metric(label, &value, UI_CONFIG.colors.label);
            }
        });
        show_payoff_plot(ui, "latest_payoff", figure);
    }
}

fn render_instrument(ui: &mut Ui, instrument: &TrackedInstrument, app: &App) {
    let figure = instrument.price_figure();
    let indicators = instrument.indicators();

    ui.label_subheader(&figure.title);
    ui.horizontal_wrapped(|ui| {
        let vol = indicators
            .volatility
            .map(|v| v.to_string())
            .unwrap_or_else(|| UI_TEXT.label_vol_unavailable.to_string());
        ui.metric(UI_TEXT.label_volatility, &vol, UI_CONFIG.colors.label);

        match instrument.params() {
            InstrumentParams::Strangle(params) => {
                ui.metric(
                    UI_TEXT.label_breakeven_put,
                    &format_price(params.breakeven_put()),
                    UI_CONFIG.colors.label,
                );
                ui.metric(
                    UI_TEXT.label_breakeven_call,
                    &format_price(params.breakeven_call()),
                    UI_CONFIG.colors.label,
                );
                ui.metric(
                    UI_TEXT.label_total_premium,
                    &format_price(params.total_premium()),
                    UI_CONFIG.colors.label,
                );
            }
            InstrumentParams::Targets(_) => {
                for (i, dist) in indicators.targets.iter().flatten().enumerate() {
                    ui.metric(
                        &format!("{} {} {}", ICON_TARGET, UI_TEXT.label_target, i + 1),
                        &format!("{} ({})", format_price(dist.target), dist.change_pct),
                        get_outcome_color(dist.change_pct.value()),
                    );
                }
            }
        }

        ui.metric(
            UI_TEXT.label_tracked_at,
            &instrument.created_at().format("%H:%M:%S").to_string(),
            UI_CONFIG.colors.label,
        );
    });

    if indicators.moving_average.is_degraded() {
        ui.label_subdued(format!(
            "{} ({} < {})",
            UI_TEXT.label_ma_degraded,
            instrument.series().len(),
            ANALYSIS.moving_average_window
        ));
    }

    show_price_plot(ui, instrument.id(), figure, &app.plot_visibility);
}
