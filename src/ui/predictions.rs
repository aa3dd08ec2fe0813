//! Predictions page: full history table for one symbol and the weekly
//! accuracy trend.

use eframe::egui::{ComboBox, Grid, Ui};

use crate::api::{ApiClient, Prediction};
use crate::config::API;
use crate::domain::{self, PredictionStatus, confidence_percent};
use crate::ui::charts::{AccuracySeries, ChartModel, ChartRegion, ChartRegistry};
use crate::ui::config::UI_TEXT;
use crate::ui::dashboard::{direction_badge, header_row, status_badge};
use crate::ui::fetch::{FetchSlot, FetchState};
use crate::ui::utils;

pub struct PredictionsController {
    api: ApiClient,
    symbol: String,
    history: FetchSlot<Vec<Prediction>>,
    charts: ChartRegistry,
}

impl PredictionsController {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            symbol: API.available_symbols[0].to_string(),
            history: FetchSlot::default(),
            charts: ChartRegistry::default(),
        }
    }

    pub fn refresh(&mut self) {
        let api = self.api.clone();
        let symbol = self.symbol.clone();
        self.history.begin(move || api.prediction_history(&symbol));
    }

    pub fn ensure_loaded(&mut self) {
        if self.history.is_idle() {
            self.refresh();
        }
    }

    pub fn poll(&mut self) {
        if self.history.poll() {
            sync_accuracy_chart(&mut self.charts, self.history.state());
        }
    }

    pub fn in_flight(&self) -> bool {
        self.history.in_flight()
    }

    pub fn show(&mut self, ui: &mut Ui) {
        self.selector_row(ui);
        utils::spaced_separator(ui);

        utils::section_heading(ui, UI_TEXT.accuracy_heading);
        if !self.charts.show(ui, ChartRegion::Accuracy)
            && matches!(self.history.state(), FetchState::Ready(_))
        {
            utils::label_subdued(ui, UI_TEXT.accuracy_needs_outcomes);
        }

        utils::section_heading(ui, UI_TEXT.history_heading);
        show_history_table(ui, self.history.state());
    }

    fn selector_row(&mut self, ui: &mut Ui) {
        let mut changed = false;
        ui.horizontal(|ui| {
            ui.label(UI_TEXT.symbol_label);
            ComboBox::from_id_salt("predictions_symbol")
                .selected_text(&self.symbol)
                .show_ui(ui, |ui| {
                    for &symbol in API.available_symbols {
                        changed |= ui
                            .selectable_value(&mut self.symbol, symbol.to_string(), symbol)
                            .changed();
                    }
                });
        });
        if changed {
            self.refresh();
        }
    }
}

/// The accuracy chart exists only when at least one week has completed
/// predictions to score.
fn sync_accuracy_chart(charts: &mut ChartRegistry, state: &FetchState<Vec<Prediction>>) {
    let model = match state {
        FetchState::Ready(history) => {
            let weekly = domain::weekly_accuracy(history);
            AccuracySeries::from_weekly(&weekly)
        }
        _ => None,
    };

    match model {
        Some(model) => charts.replace(ChartRegion::Accuracy, ChartModel::WeeklyAccuracySeries(model)),
        None => {
            charts.remove(ChartRegion::Accuracy);
        }
    }
}

fn show_history_table(ui: &mut Ui, state: &FetchState<Vec<Prediction>>) {
    match state {
        FetchState::Idle | FetchState::Loading => {
            utils::loading_indicator(ui, UI_TEXT.loading_market);
        }
        FetchState::Failed(error) => {
            utils::label_error(ui, format!("{} {}", UI_TEXT.section_error_prefix, error));
        }
        FetchState::Ready(history) if history.is_empty() => {
            utils::label_subdued(ui, UI_TEXT.no_history);
        }
        FetchState::Ready(history) => {
            Grid::new("prediction_history")
                .num_columns(6)
                .striped(true)
                .show(ui, |ui| {
                    header_row(
                        ui,
                        &[
                            UI_TEXT.col_date,
                            UI_TEXT.col_symbol,
                            UI_TEXT.col_predicted,
                            UI_TEXT.col_confidence,
                            UI_TEXT.col_actual,
                            UI_TEXT.col_result,
                        ],
                    );
                    for prediction in history {
                        ui.label(prediction.date.format("%Y-%m-%d").to_string());
                        ui.label(&prediction.symbol);
                        direction_badge(ui, prediction.predicted_movement);
                        ui.label(format!("{}%", confidence_percent(prediction.confidence)));
                        match prediction.actual_movement {
                            Some(actual) => direction_badge(ui, actual),
                            None => utils::label_subdued(ui, UI_TEXT.pending),
                        }
                        status_badge(
                            ui,
                            PredictionStatus::of(
                                prediction.predicted_movement,
                                prediction.actual_movement,
                            ),
                        );
                        ui.end_row();
                    }
                });
        }
    }
}
