//! Dashboard page: price/volume charts, the next-day prediction card,
//! latest stats and the recent-prediction list for one symbol.

use eframe::egui::{ComboBox, Grid, ProgressBar, RichText, Ui};
use strum::IntoEnumIterator;

use crate::api::{ApiClient, PredictPayload, PricePoint, Prediction, Timeframe};
use crate::config::API;
use crate::domain::{ConfidenceTier, PredictionStatus, confidence_percent};
use crate::ui::charts::{ChartModel, ChartRegion, ChartRegistry, FeatureRanking, PriceSeries, VolumeSeries};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::fetch::{FetchSlot, FetchState};
use crate::ui::utils;

pub struct DashboardController {
    api: ApiClient,
    symbol: String,
    timeframe: Timeframe,
    history: FetchSlot<Vec<PricePoint>>,
    prediction: FetchSlot<PredictPayload>,
    recent: FetchSlot<Vec<Prediction>>,
    charts: ChartRegistry,
}

impl DashboardController {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            symbol: API.available_symbols[0].to_string(),
            timeframe: Timeframe::default(),
            history: FetchSlot::default(),
            prediction: FetchSlot::default(),
            recent: FetchSlot::default(),
            charts: ChartRegistry::default(),
        }
    }

    /// Kick off all three fetches for the current symbol/timeframe. Any
    /// in-flight requests are superseded.
    pub fn refresh(&mut self) {
        let api = self.api.clone();
        let symbol = self.symbol.clone();
        let timeframe = self.timeframe;
        self.history
            .begin(move || api.stock_history(&symbol, timeframe));

        let api = self.api.clone();
        let symbol = self.symbol.clone();
        self.prediction.begin(move || api.predict(&symbol));

        let api = self.api.clone();
        let symbol = self.symbol.clone();
        self.recent
            .begin(move || api.recent_predictions(&symbol, API.recent_predictions_limit));
    }

    /// First visit: start loading without waiting for user input.
    pub fn ensure_loaded(&mut self) {
        if self.history.is_idle() {
            self.refresh();
        }
    }

    /// Drain completed fetches and re-derive the charts they feed.
    pub fn poll(&mut self) {
        if self.history.poll() {
            sync_market_charts(&mut self.charts, &self.symbol, self.history.state());
        }
        if self.prediction.poll() {
            sync_feature_chart(&mut self.charts, self.prediction.state());
        }
        self.recent.poll();
    }

    pub fn in_flight(&self) -> bool {
        self.history.in_flight() || self.prediction.in_flight() || self.recent.in_flight()
    }

    pub fn show(&mut self, ui: &mut Ui) {
        self.selector_row(ui);
        utils::spaced_separator(ui);

        utils::section_heading(ui, UI_TEXT.price_heading);
        self.show_history_section(ui, ChartRegion::Price);

        utils::section_heading(ui, UI_TEXT.volume_heading);
        self.show_history_section(ui, ChartRegion::Volume);

        utils::spaced_separator(ui);
        ui.columns(2, |columns| {
            utils::section_heading(&mut columns[0], UI_TEXT.prediction_heading);
            show_prediction_card(&mut columns[0], self.prediction.state());

            utils::section_heading(&mut columns[1], UI_TEXT.stats_heading);
            show_stats_panel(&mut columns[1], self.prediction.state());
        });

        utils::section_heading(ui, UI_TEXT.features_heading);
        self.show_feature_section(ui);

        utils::spaced_separator(ui);
        utils::section_heading(ui, UI_TEXT.recent_heading);
        show_recent_list(ui, self.recent.state());
    }

    fn selector_row(&mut self, ui: &mut Ui) {
        let mut changed = false;

        ui.horizontal(|ui| {
            ui.label(UI_TEXT.symbol_label);
            ComboBox::from_id_salt("dashboard_symbol")
                .selected_text(&self.symbol)
                .show_ui(ui, |ui| {
                    for &symbol in API.available_symbols {
                        changed |= ui
                            .selectable_value(&mut self.symbol, symbol.to_string(), symbol)
                            .changed();
                    }
                });

            ui.add_space(20.0);
            ui.label(UI_TEXT.timeframe_label);
            ComboBox::from_id_salt("dashboard_timeframe")
                .selected_text(self.timeframe.label())
                .show_ui(ui, |ui| {
                    for timeframe in Timeframe::iter() {
                        changed |= ui
                            .selectable_value(&mut self.timeframe, timeframe, timeframe.label())
                            .changed();
                    }
                });
        });

        if changed {
            self.refresh();
        }
    }

    fn show_history_section(&mut self, ui: &mut Ui, region: ChartRegion) {
        match self.history.state() {
            FetchState::Idle | FetchState::Loading => {
                utils::loading_indicator(ui, UI_TEXT.loading_market);
            }
            FetchState::Failed(error) => {
                utils::label_error(ui, format!("{} {}", UI_TEXT.section_error_prefix, error));
            }
            FetchState::Ready(_) => {
                self.charts.show(ui, region);
            }
        }
    }

    fn show_feature_section(&mut self, ui: &mut Ui) {
        match self.prediction.state() {
            FetchState::Idle | FetchState::Loading => {
                utils::loading_indicator(ui, UI_TEXT.loading_market);
            }
            FetchState::Failed(error) => {
                utils::label_error(ui, format!("{} {}", UI_TEXT.section_error_prefix, error));
            }
            FetchState::Ready(_) => {
                if !self.charts.show(ui, ChartRegion::FeatureImportance) {
                    utils::label_subdued(ui, UI_TEXT.no_feature_importance);
                }
            }
        }
    }
}

/// Rebuild the price and volume charts from a finished history fetch, or
/// clear them when the fetch failed.
fn sync_market_charts(
    charts: &mut ChartRegistry,
    symbol: &str,
    state: &FetchState<Vec<PricePoint>>,
) {
    match state {
        FetchState::Ready(history) => {
            charts.replace(
                ChartRegion::Price,
                ChartModel::PriceSeries(PriceSeries::from_history(symbol, history)),
            );
            charts.replace(
                ChartRegion::Volume,
                ChartModel::VolumeSeries(VolumeSeries::from_history(history)),
            );
        }
        _ => {
            charts.remove(ChartRegion::Price);
            charts.remove(ChartRegion::Volume);
        }
    }
}

/// Feature-importance chart exists only when the payload carries weights.
fn sync_feature_chart(charts: &mut ChartRegistry, state: &FetchState<PredictPayload>) {
    let ranking = match state {
        FetchState::Ready(payload) => payload
            .feature_importance
            .as_ref()
            .map(FeatureRanking::from_importance)
            .filter(|ranking| ranking.len() > 0),
        _ => None,
    };

    match ranking {
        Some(ranking) => charts.replace(
            ChartRegion::FeatureImportance,
            ChartModel::FeatureRanking(ranking),
        ),
        None => {
            charts.remove(ChartRegion::FeatureImportance);
        }
    }
}

fn show_prediction_card(ui: &mut Ui, state: &FetchState<PredictPayload>) {
    match state {
        FetchState::Idle | FetchState::Loading => {
            utils::loading_indicator(ui, UI_TEXT.loading_market);
        }
        FetchState::Failed(error) => {
            utils::label_error(ui, format!("{} {}", UI_TEXT.section_error_prefix, error));
        }
        FetchState::Ready(payload) => {
            let forecast = &payload.prediction;
            let (text, color) = if forecast.movement {
                (UI_TEXT.upward_predicted, UI_CONFIG.colors.up)
            } else {
                (UI_TEXT.downward_predicted, UI_CONFIG.colors.down)
            };
            ui.label(RichText::new(text).strong().color(color));

            if let Some(line) = prediction_date_line(payload) {
                utils::label_subdued(ui, line);
            }

            ui.add_space(5.0);
            let tier = ConfidenceTier::from_confidence(forecast.confidence);
            let percent = confidence_percent(forecast.confidence);
            ui.label(UI_TEXT.confidence_label);
            ui.add(
                ProgressBar::new(forecast.confidence as f32)
                    .fill(confidence_fill(tier))
                    .text(format!("{}% ({})", percent, tier.label())),
            );
        }
    }
}

fn show_stats_panel(ui: &mut Ui, state: &FetchState<PredictPayload>) {
    let payload = match state {
        FetchState::Idle | FetchState::Loading => {
            utils::loading_indicator(ui, UI_TEXT.loading_market);
            return;
        }
        FetchState::Failed(error) => {
            utils::label_error(ui, format!("{} {}", UI_TEXT.section_error_prefix, error));
            return;
        }
        FetchState::Ready(payload) => payload,
    };

    let latest = &payload.latest;
    Grid::new("latest_stats")
        .num_columns(2)
        .striped(true)
        .show(ui, |ui| {
            stat_row(ui, UI_TEXT.stat_open, utils::format_money(latest.open_price));
            stat_row(ui, UI_TEXT.stat_close, utils::format_money(latest.close_price));
            stat_row(
                ui,
                UI_TEXT.stat_range,
                format!(
                    "{} - {}",
                    utils::format_money(latest.low_price),
                    utils::format_money(latest.high_price)
                ),
            );
            stat_row(ui, UI_TEXT.stat_volume, utils::format_count(latest.volume));
            // Optional rows render only when the backend supplied them
            if let Some(ma50) = latest.ma50 {
                stat_row(ui, UI_TEXT.stat_ma50, utils::format_money(ma50));
            }
            if let Some(volatility) = latest.volatility {
                stat_row(ui, UI_TEXT.stat_volatility, volatility_text(volatility));
            }
            if let Some(accuracy) = payload.model_accuracy {
                stat_row(ui, UI_TEXT.stat_accuracy, format!("{:.1}%", accuracy * 100.0));
            }
        });
}

fn stat_row(ui: &mut Ui, label: &str, value: String) {
    ui.label(RichText::new(label).color(UI_CONFIG.colors.label));
    ui.label(value);
    ui.end_row();
}

/// The card's "Prediction for ..." line, built from the latest quote's
/// formatted date; absent when the backend omits it.
fn prediction_date_line(payload: &PredictPayload) -> Option<String> {
    payload
        .latest
        .formatted_date
        .as_ref()
        .map(|date| format!("{} {}", UI_TEXT.prediction_for_prefix, date))
}

/// Volatility shown as a percentage, e.g. 0.012 -> "1.20%".
fn volatility_text(volatility: f64) -> String {
    format!("{:.2}%", volatility * 100.0)
}

fn show_recent_list(ui: &mut Ui, state: &FetchState<Vec<Prediction>>) {
    match state {
        FetchState::Idle | FetchState::Loading => {
            utils::loading_indicator(ui, UI_TEXT.loading_market);
        }
        FetchState::Failed(error) => {
            utils::label_error(ui, format!("{} {}", UI_TEXT.section_error_prefix, error));
        }
        FetchState::Ready(predictions) => {
            let Some(predictions) = utils::rows_or_placeholder(predictions) else {
                utils::label_subdued(ui, UI_TEXT.no_recent_predictions);
                return;
            };
            Grid::new("recent_predictions")
                .num_columns(4)
                .striped(true)
                .show(ui, |ui| {
                    header_row(
                        ui,
                        &[
                            UI_TEXT.col_date,
                            UI_TEXT.col_predicted,
                            UI_TEXT.col_confidence,
                            UI_TEXT.col_result,
                        ],
                    );
                    for prediction in predictions {
                        ui.label(prediction.date.format("%Y-%m-%d").to_string());
                        direction_badge(ui, prediction.predicted_movement);
                        ui.label(format!("{}%", confidence_percent(prediction.confidence)));
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

pub(crate) fn header_row(ui: &mut Ui, labels: &[&str]) {
    for label in labels {
        ui.label(RichText::new(*label).strong().color(UI_CONFIG.colors.label));
    }
    ui.end_row();
}

pub(crate) fn direction_badge(ui: &mut Ui, upward: bool) {
    let (text, color) = if upward {
        (UI_TEXT.direction_up, UI_CONFIG.colors.up)
    } else {
        (UI_TEXT.direction_down, UI_CONFIG.colors.down)
    };
    ui.label(RichText::new(text).color(color));
}

pub(crate) fn status_badge(ui: &mut Ui, status: PredictionStatus) {
    let color = match status {
        PredictionStatus::Correct => UI_CONFIG.colors.positive,
        PredictionStatus::Incorrect => UI_CONFIG.colors.negative,
        PredictionStatus::Pending => UI_CONFIG.colors.pending,
    };
    ui.label(RichText::new(status.label()).color(color));
}

fn confidence_fill(tier: ConfidenceTier) -> eframe::egui::Color32 {
    match tier {
        ConfidenceTier::High => UI_CONFIG.colors.confidence_high,
        ConfidenceTier::Medium => UI_CONFIG.colors.confidence_medium,
        ConfidenceTier::Low => UI_CONFIG.colors.confidence_low,
    }
}
