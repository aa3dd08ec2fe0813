//! Portfolio page: simulation form, result summary, balance chart and the
//! trade log.

use eframe::egui::{Button, ComboBox, DragValue, Grid, RichText, Ui};

use crate::api::{ApiClient, SimulationResult, Trade};
use crate::config::API;
use crate::domain;
use crate::ui::charts::{BalanceComparison, ChartModel, ChartRegion, ChartRegistry};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::dashboard::header_row;
use crate::ui::fetch::{FetchSlot, FetchState};
use crate::ui::utils;

const DEFAULT_INITIAL_BALANCE: f64 = 10_000.0;
const DEFAULT_SIMULATION_DAYS: u32 = 30;

pub struct PortfolioController {
    api: ApiClient,
    symbol: String,
    initial_balance: f64,
    days: u32,
    // `Ready(None)` is the backend declining to simulate, distinct from a
    // transport failure
    simulation: FetchSlot<Option<SimulationResult>>,
    charts: ChartRegistry,
}

impl PortfolioController {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            symbol: API.available_symbols[0].to_string(),
            initial_balance: DEFAULT_INITIAL_BALANCE,
            days: DEFAULT_SIMULATION_DAYS,
            simulation: FetchSlot::default(),
            charts: ChartRegistry::default(),
        }
    }

    fn run(&mut self) {
        let api = self.api.clone();
        let symbol = self.symbol.clone();
        let initial_balance = self.initial_balance;
        let days = self.days;
        self.simulation
            .begin(move || api.simulate_portfolio(&symbol, initial_balance, days));
    }

    pub fn poll(&mut self) {
        if self.simulation.poll() {
            sync_balance_chart(&mut self.charts, self.simulation.state());
        }
    }

    pub fn in_flight(&self) -> bool {
        self.simulation.in_flight()
    }

    pub fn show(&mut self, ui: &mut Ui) {
        utils::section_heading(ui, UI_TEXT.simulation_heading);
        self.form(ui);
        utils::spaced_separator(ui);

        match self.simulation.state() {
            FetchState::Idle => {
                utils::label_subdued(ui, UI_TEXT.simulation_hint);
            }
            FetchState::Loading => {
                utils::loading_indicator(ui, UI_TEXT.running_simulation);
            }
            FetchState::Failed(error) => {
                utils::label_error(
                    ui,
                    format!("{} {}", UI_TEXT.simulation_error_prefix, error),
                );
            }
            FetchState::Ready(None) => {
                utils::label_warning(ui, UI_TEXT.simulation_empty);
            }
            FetchState::Ready(Some(result)) => {
                utils::section_heading(ui, UI_TEXT.results_heading);
                show_summary(ui, result);

                utils::section_heading(ui, UI_TEXT.balance_chart_heading);
                self.charts.show(ui, ChartRegion::Balance);

                utils::section_heading(ui, UI_TEXT.trades_heading);
                show_trades(ui, &result.trades);
            }
        }
    }

    fn form(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label(UI_TEXT.symbol_label);
            ComboBox::from_id_salt("portfolio_symbol")
                .selected_text(&self.symbol)
                .show_ui(ui, |ui| {
                    for &symbol in API.available_symbols {
                        ui.selectable_value(&mut self.symbol, symbol.to_string(), symbol);
                    }
                });

            ui.add_space(20.0);
            ui.label(UI_TEXT.initial_balance_label);
            ui.add(
                DragValue::new(&mut self.initial_balance)
                    .range(100.0..=1_000_000.0)
                    .speed(100.0)
                    .prefix("$"),
            );

            ui.add_space(20.0);
            ui.label(UI_TEXT.days_label);
            ui.add(DragValue::new(&mut self.days).range(5..=365));

            ui.add_space(20.0);
            let run = ui.add_enabled(
                !self.simulation.in_flight(),
                Button::new(UI_TEXT.run_simulation),
            );
            if run.clicked() {
                self.run();
            }
        });
    }
}

/// Chart exists only for a usable result with daily balances.
fn sync_balance_chart(charts: &mut ChartRegistry, state: &FetchState<Option<SimulationResult>>) {
    let model = match state {
        FetchState::Ready(Some(result)) => BalanceComparison::from_simulation(result),
        _ => None,
    };

    match model {
        Some(model) => charts.replace(ChartRegion::Balance, ChartModel::BalanceComparison(model)),
        None => {
            charts.remove(ChartRegion::Balance);
        }
    }
}

fn show_summary(ui: &mut Ui, result: &SimulationResult) {
    let ai_roi = result.roi_percentage;
    let bh_roi = result.buy_and_hold.roi_percentage;

    Grid::new("simulation_summary")
        .num_columns(2)
        .striped(true)
        .show(ui, |ui| {
            summary_label(ui, UI_TEXT.summary_initial);
            ui.label(utils::format_money(result.initial_balance));
            ui.end_row();

            summary_label(ui, UI_TEXT.summary_final);
            ui.label(utils::format_money(result.final_balance));
            ui.end_row();

            summary_label(ui, UI_TEXT.summary_roi);
            roi_value(ui, ai_roi);
            ui.end_row();

            summary_label(ui, UI_TEXT.summary_buy_hold_roi);
            roi_value(ui, bh_roi);
            ui.end_row();

            summary_label(ui, UI_TEXT.summary_best_strategy);
            ui.label(domain::best_strategy(ai_roi, bh_roi));
            ui.end_row();

            summary_label(ui, UI_TEXT.summary_total_trades);
            ui.label(result.trades.len().to_string());
            ui.end_row();
        });
}

fn summary_label(ui: &mut Ui, label: &str) {
    ui.label(RichText::new(label).color(UI_CONFIG.colors.label));
}

fn roi_value(ui: &mut Ui, roi: f64) {
    let color = if roi >= 0.0 {
        UI_CONFIG.colors.positive
    } else {
        UI_CONFIG.colors.negative
    };
    ui.label(RichText::new(roi_text(roi)).color(color));
}

// The color already carries the direction, so no forced plus sign
fn roi_text(roi: f64) -> String {
    format!("{:.2}%", roi)
}

fn show_trades(ui: &mut Ui, trades: &[Trade]) {
    let Some(trades) = utils::rows_or_placeholder(trades) else {
        utils::label_subdued(ui, UI_TEXT.no_trades);
        return;
    };

    Grid::new("trade_log")
        .num_columns(6)
        .striped(true)
        .show(ui, |ui| {
            header_row(
                ui,
                &[
                    UI_TEXT.col_date,
                    UI_TEXT.col_action,
                    UI_TEXT.col_price,
                    UI_TEXT.col_shares,
                    UI_TEXT.col_value,
                    UI_TEXT.col_confidence,
                ],
            );
            for trade in trades {
                ui.label(trade.date.format("%Y-%m-%d").to_string());
                ui.label(RichText::new(&trade.action).color(action_color(&trade.action)));
                ui.label(utils::format_money(trade.price));
                ui.label(format!("{:.4}", trade.shares));
                ui.label(utils::format_money(trade.value));
                ui.label(format!(
                    "{}%",
                    domain::confidence_percent(trade.confidence)
                ));
                ui.end_row();
            }
        });
}

fn action_color(action: &str) -> eframe::egui::Color32 {
    match action {
        "BUY" => UI_CONFIG.colors.trade_buy,
        "SELL" => UI_CONFIG.colors.trade_sell,
        // FINAL SELL and anything else the simulator invents
        _ => UI_CONFIG.colors.trade_other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, BuyAndHold, DailyBalance};
    use chrono::NaiveDate;

    fn result(daily_balance: Vec<DailyBalance>) -> SimulationResult {
        SimulationResult {
            symbol: "AAPL".to_string(),
            days: 30,
            initial_balance: 10_000.0,
            final_balance: 10_500.0,
            roi_percentage: 5.0,
            buy_and_hold: BuyAndHold {
                initial_balance: None,
                final_balance: None,
                roi_percentage: 3.0,
            },
            daily_balance,
            trades: Vec::new(),
        }
    }

    fn day(d: u32, balance: f64, price: f64) -> DailyBalance {
        DailyBalance {
            date: NaiveDate::from_ymd_opt(2024, 2, d).unwrap(),
            balance,
            shares: 0.0,
            price,
        }
    }

    #[test]
    fn balance_chart_exists_only_for_usable_results() {
        let mut charts = ChartRegistry::default();

        let usable = result(vec![day(1, 10_000.0, 100.0), day(2, 10_200.0, 102.0)]);
        sync_balance_chart(&mut charts, &FetchState::Ready(Some(usable)));
        assert!(charts.contains(ChartRegion::Balance));

        // Backend declined: the stale chart must come down
        sync_balance_chart(&mut charts, &FetchState::Ready(None));
        assert!(!charts.contains(ChartRegion::Balance));

        sync_balance_chart(&mut charts, &FetchState::Failed(ApiError::Timeout));
        assert!(!charts.contains(ChartRegion::Balance));
    }

    #[test]
    fn result_without_daily_balances_has_no_chart() {
        let mut charts = ChartRegistry::default();
        sync_balance_chart(&mut charts, &FetchState::Ready(Some(result(Vec::new()))));
        assert!(!charts.contains(ChartRegion::Balance));
    }

    #[test]
    fn roi_renders_without_a_forced_sign() {
        assert_eq!(roi_text(5.0), "5.00%");
        assert_eq!(roi_text(-3.25), "-3.25%");
        assert_eq!(roi_text(0.0), "0.00%");
    }

    #[test]
    fn empty_trade_log_falls_back_to_the_placeholder() {
        let none: Vec<Trade> = Vec::new();
        assert!(utils::rows_or_placeholder(&none).is_none());

        let one = vec![Trade {
            date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            action: "BUY".to_string(),
            price: 100.0,
            shares: 100.0,
            value: 10_000.0,
            confidence: 0.62,
        }];
        assert_eq!(utils::rows_or_placeholder(&one).unwrap().len(), 1);
    }

    #[test]
    fn trade_actions_map_to_row_accents() {
        assert_eq!(action_color("BUY"), UI_CONFIG.colors.trade_buy);
        assert_eq!(action_color("SELL"), UI_CONFIG.colors.trade_sell);
        assert_eq!(action_color("FINAL SELL"), UI_CONFIG.colors.trade_other);
    }
}
