//! Chart models and the per-region chart registry.
//!
//! Every view region that hosts a chart owns at most one prepared
//! `ChartModel`. Controllers never mutate a model in place: a render pass
//! builds a fresh model from the payload and swaps it in through
//! `ChartRegistry::replace`, which drops the prior model for that region
//! first. A region with no model (e.g. the accuracy chart before any
//! prediction has a known outcome) simply has no registry entry.

use std::collections::HashMap;

use eframe::egui::Ui;
use egui_plot::{AxisHints, Bar, BarChart, Corner, Legend, Line, LineStyle, Plot, PlotPoints};

use crate::api::{FeatureImportance, PricePoint, SimulationResult};
use crate::config::PLOT_CONFIG;
use crate::domain::{self, RankedFeature, WeeklyAccuracy};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::utils::time_utils::{day_number, format_day_number, format_day_number_long};

/// View regions that can host a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartRegion {
    Price,
    Volume,
    FeatureImportance,
    Balance,
    Accuracy,
}

/// A fully prepared chart, ready to draw every frame.
pub enum ChartModel {
    PriceSeries(PriceSeries),
    VolumeSeries(VolumeSeries),
    FeatureRanking(FeatureRanking),
    BalanceComparison(BalanceComparison),
    WeeklyAccuracySeries(AccuracySeries),
}

impl ChartModel {
    fn show(&self, ui: &mut Ui) {
        match self {
            ChartModel::PriceSeries(m) => m.show(ui),
            ChartModel::VolumeSeries(m) => m.show(ui),
            ChartModel::FeatureRanking(m) => m.show(ui),
            ChartModel::BalanceComparison(m) => m.show(ui),
            ChartModel::WeeklyAccuracySeries(m) => m.show(ui),
        }
    }
}

/// Owner of the current chart per view region.
#[derive(Default)]
pub struct ChartRegistry {
    charts: HashMap<ChartRegion, ChartModel>,
}

impl ChartRegistry {
    /// Install a new chart for a region. The old chart, if any, is dropped
    /// before the new one goes in.
    pub fn replace(&mut self, region: ChartRegion, model: ChartModel) {
        self.charts.remove(&region);
        self.charts.insert(region, model);
    }

    pub fn remove(&mut self, region: ChartRegion) -> Option<ChartModel> {
        self.charts.remove(&region)
    }

    pub fn contains(&self, region: ChartRegion) -> bool {
        self.charts.contains_key(&region)
    }

    /// Draw the region's chart if one is installed. Returns whether it drew.
    pub fn show(&self, ui: &mut Ui, region: ChartRegion) -> bool {
        match self.charts.get(&region) {
            Some(model) => {
                model.show(ui);
                true
            }
            None => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Price
// ---------------------------------------------------------------------------

/// Single filled close-price line over calendar days.
pub struct PriceSeries {
    symbol: String,
    points: Vec<[f64; 2]>,
}

impl PriceSeries {
    pub fn from_history(symbol: &str, history: &[PricePoint]) -> Self {
        Self {
            symbol: symbol.to_string(),
            points: history
                .iter()
                .map(|p| [day_number(p.date), p.close_price])
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    fn show(&self, ui: &mut Ui) {
        let label = format!("{} Price", self.symbol);
        Plot::new("price_chart")
            .height(PLOT_CONFIG.chart_height)
            .custom_x_axes(vec![date_axis(UI_TEXT.col_date)])
            .custom_y_axes(vec![money_axis("Price ($)")])
            .label_formatter(|_name, value| {
                format!(
                    "{}\n${:.2}",
                    format_day_number_long(value.x),
                    value.y
                )
            })
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_boxed_zoom(false)
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(label.clone(), PlotPoints::new(self.points.clone()))
                        .color(UI_CONFIG.colors.price_line)
                        .width(2.0)
                        .fill(0.0),
                );
            });
    }
}

// ---------------------------------------------------------------------------
// Volume
// ---------------------------------------------------------------------------

/// Daily volume bars, capped to the most recent `volume_window` points.
pub struct VolumeSeries {
    points: Vec<[f64; 2]>,
}

impl VolumeSeries {
    pub fn from_history(history: &[PricePoint]) -> Self {
        let start = history.len().saturating_sub(PLOT_CONFIG.volume_window);
        Self {
            points: history[start..]
                .iter()
                .map(|p| [day_number(p.date), p.volume as f64])
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    fn show(&self, ui: &mut Ui) {
        let bars: Vec<Bar> = self
            .points
            .iter()
            .map(|&[x, v]| {
                Bar::new(x, v)
                    .width(0.8)
                    .fill(UI_CONFIG.colors.volume_bar)
            })
            .collect();

        Plot::new("volume_chart")
            .height(PLOT_CONFIG.chart_height)
            .custom_x_axes(vec![date_axis(UI_TEXT.col_date)])
            .custom_y_axes(vec![AxisHints::new_y().label("Volume")])
            .label_formatter(|_name, value| {
                format!("{}\n{:.0}", format_day_number_long(value.x), value.y)
            })
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_boxed_zoom(false)
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new("Volume", bars));
            });
    }
}

// ---------------------------------------------------------------------------
// Feature importance
// ---------------------------------------------------------------------------

/// Horizontal bars of the top-ranked model features, best at the top, with
/// a fixed palette cycling by rank.
pub struct FeatureRanking {
    features: Vec<RankedFeature>,
}

impl FeatureRanking {
    pub fn from_importance(importance: &FeatureImportance) -> Self {
        Self {
            features: domain::rank_features(importance),
        }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    fn show(&self, ui: &mut Ui) {
        let count = self.features.len();
        let bars: Vec<Bar> = self
            .features
            .iter()
            .enumerate()
            .map(|(rank, feature)| {
                let palette = &UI_CONFIG.feature_palette;
                // Rank 0 (heaviest) sits at the top of the plot
                Bar::new((count - 1 - rank) as f64, feature.weight)
                    .width(0.6)
                    .fill(palette[rank % palette.len()])
                    .name(feature.name.clone())
            })
            .collect();

        let names: Vec<String> = self.features.iter().map(|f| f.name.clone()).collect();
        let name_axis = AxisHints::new_y().formatter(move |mark, _range| {
            let slot = mark.value.round() as i64;
            if mark.value.fract().abs() > 0.01 || slot < 0 {
                return String::new();
            }
            // Axis position i holds the feature ranked (count - 1 - i)
            let rank = names.len() as i64 - 1 - slot;
            if rank < 0 {
                return String::new();
            }
            names.get(rank as usize).cloned().unwrap_or_default()
        });

        Plot::new("feature_importance_chart")
            .height(PLOT_CONFIG.chart_height)
            .custom_x_axes(vec![AxisHints::new_x().label("Importance")])
            .custom_y_axes(vec![name_axis])
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_boxed_zoom(false)
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new("Importance", bars).horizontal());
            });
    }
}

// ---------------------------------------------------------------------------
// Portfolio balance
// ---------------------------------------------------------------------------

/// AI strategy balance against the synthetic buy-and-hold baseline.
pub struct BalanceComparison {
    ai: Vec<[f64; 2]>,
    buy_hold: Vec<[f64; 2]>,
}

impl BalanceComparison {
    /// Build both series from a simulation result. Returns `None` when the
    /// result carries no daily balances to plot.
    pub fn from_simulation(result: &SimulationResult) -> Option<Self> {
        if result.daily_balance.is_empty() {
            return None;
        }

        let ai = result
            .daily_balance
            .iter()
            .map(|d| [day_number(d.date), d.balance])
            .collect();

        let baseline = domain::buy_and_hold_series(result.initial_balance, &result.daily_balance);
        let buy_hold = result
            .daily_balance
            .iter()
            .zip(baseline)
            .map(|(d, balance)| [day_number(d.date), balance])
            .collect();

        Some(Self { ai, buy_hold })
    }

    fn show(&self, ui: &mut Ui) {
        Plot::new("portfolio_chart")
            .height(PLOT_CONFIG.chart_height)
            .legend(Legend::default().position(Corner::LeftTop))
            .custom_x_axes(vec![date_axis(UI_TEXT.col_date)])
            .custom_y_axes(vec![money_axis("Portfolio Value ($)")])
            .label_formatter(|name, value| {
                if name.is_empty() {
                    format!("{}\n${:.2}", format_day_number_long(value.x), value.y)
                } else {
                    format!(
                        "{}: ${:.2}\n{}",
                        name,
                        value.y,
                        format_day_number_long(value.x)
                    )
                }
            })
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_boxed_zoom(false)
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(UI_TEXT.series_ai, PlotPoints::new(self.ai.clone()))
                        .color(UI_CONFIG.colors.ai_line)
                        .width(2.0)
                        .fill(0.0),
                );
                plot_ui.line(
                    Line::new(UI_TEXT.series_buy_hold, PlotPoints::new(self.buy_hold.clone()))
                        .color(UI_CONFIG.colors.buy_hold_line)
                        .width(2.0)
                        .style(LineStyle::dashed_loose()),
                );
            });
    }
}

// ---------------------------------------------------------------------------
// Weekly accuracy
// ---------------------------------------------------------------------------

/// Accuracy per calendar week, y clamped to [0, 100].
pub struct AccuracySeries {
    points: Vec<[f64; 2]>,
}

impl AccuracySeries {
    /// `None` when there are no completed weeks — the chart must then not
    /// exist at all.
    pub fn from_weekly(weekly: &[WeeklyAccuracy]) -> Option<Self> {
        if weekly.is_empty() {
            return None;
        }
        Some(Self {
            points: weekly
                .iter()
                .map(|w| [day_number(w.week_start), w.accuracy_pct])
                .collect(),
        })
    }

    fn show(&self, ui: &mut Ui) {
        let (y_min, y_max) = PLOT_CONFIG.accuracy_y_range;
        let x_min = self.points.first().map(|p| p[0]).unwrap_or(0.0) - 1.0;
        let x_max = self.points.last().map(|p| p[0]).unwrap_or(1.0) + 1.0;

        Plot::new("accuracy_chart")
            .height(PLOT_CONFIG.chart_height)
            .custom_x_axes(vec![date_axis("Week")])
            .custom_y_axes(vec![AxisHints::new_y().label("Accuracy (%)")])
            .label_formatter(|_name, value| format!("Accuracy: {:.1}%", value.y))
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_boxed_zoom(false)
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds_x(x_min..=x_max);
                plot_ui.set_plot_bounds_y(y_min..=y_max);
                plot_ui.line(
                    Line::new("Weekly Accuracy (%)", PlotPoints::new(self.points.clone()))
                        .color(UI_CONFIG.colors.accuracy_line)
                        .width(2.0)
                        .fill(0.0),
                );
            });
    }
}

fn date_axis(label: &'static str) -> AxisHints<'static> {
    AxisHints::new_x()
        .label(label)
        .formatter(|mark, _range| format_day_number(mark.value))
}

fn money_axis(label: &'static str) -> AxisHints<'static> {
    AxisHints::new_y()
        .label(label)
        .formatter(|mark, _range| format!("${:.2}", mark.value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{BuyAndHold, DailyBalance};
    use chrono::NaiveDate;

    fn price_point(day: u32, close: f64, volume: u64) -> PricePoint {
        PricePoint {
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            open_price: close - 1.0,
            close_price: close,
            high_price: close + 1.0,
            low_price: close - 2.0,
            volume,
            ma50: None,
            volatility: None,
        }
    }

    #[test]
    fn registry_replace_swaps_the_region_chart() {
        let mut registry = ChartRegistry::default();
        let history = vec![price_point(1, 100.0, 1_000)];

        registry.replace(
            ChartRegion::Price,
            ChartModel::PriceSeries(PriceSeries::from_history("AAPL", &history)),
        );
        assert!(registry.contains(ChartRegion::Price));

        // Replacing installs the new model; other regions are untouched
        registry.replace(
            ChartRegion::Price,
            ChartModel::PriceSeries(PriceSeries::from_history("MSFT", &history)),
        );
        assert!(registry.contains(ChartRegion::Price));
        assert!(!registry.contains(ChartRegion::Volume));

        assert!(registry.remove(ChartRegion::Price).is_some());
        assert!(!registry.contains(ChartRegion::Price));
    }

    #[test]
    fn volume_series_caps_to_window() {
        let make = |n: usize| -> Vec<PricePoint> {
            (0..n).map(|i| price_point((i % 28) as u32 + 1, 100.0, i as u64)).collect()
        };

        assert_eq!(VolumeSeries::from_history(&make(0)).len(), 0);
        assert_eq!(VolumeSeries::from_history(&make(1)).len(), 1);
        assert_eq!(
            VolumeSeries::from_history(&make(PLOT_CONFIG.volume_window)).len(),
            PLOT_CONFIG.volume_window
        );
        assert_eq!(
            VolumeSeries::from_history(&make(PLOT_CONFIG.volume_window + 1)).len(),
            PLOT_CONFIG.volume_window
        );
    }

    #[test]
    fn volume_series_keeps_the_most_recent_points() {
        let history: Vec<PricePoint> = (0..40)
            .map(|i| price_point((i % 28) + 1, 100.0, u64::from(i)))
            .collect();
        let series = VolumeSeries::from_history(&history);
        // The first retained bar is input index 10 (40 - 30)
        assert_eq!(series.points[0][1], 10.0);
        assert_eq!(series.points.last().unwrap()[1], 39.0);
    }

    #[test]
    fn feature_ranking_caps_at_top_six() {
        let importance = FeatureImportance {
            features: (0..8).map(|i| format!("f{}", i)).collect(),
            importance: (0..8).map(|i| i as f64).collect(),
        };
        assert_eq!(FeatureRanking::from_importance(&importance).len(), 6);
    }

    #[test]
    fn balance_comparison_requires_daily_balances() {
        let result = SimulationResult {
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
            daily_balance: Vec::new(),
            trades: Vec::new(),
        };
        assert!(BalanceComparison::from_simulation(&result).is_none());

        let with_days = SimulationResult {
            daily_balance: vec![
                DailyBalance {
                    date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
                    balance: 10_000.0,
                    shares: 0.0,
                    price: 100.0,
                },
                DailyBalance {
                    date: NaiveDate::from_ymd_opt(2024, 2, 2).unwrap(),
                    balance: 10_200.0,
                    shares: 0.0,
                    price: 105.0,
                },
            ],
            ..result
        };
        let chart = BalanceComparison::from_simulation(&with_days).unwrap();
        assert_eq!(chart.ai.len(), 2);
        // Baseline: 100 shares bought at $100, worth $10,500 at $105
        assert_eq!(chart.buy_hold[1][1], 10_500.0);
    }

    #[test]
    fn accuracy_series_absent_without_completed_weeks() {
        assert!(AccuracySeries::from_weekly(&[]).is_none());

        let weekly = vec![WeeklyAccuracy {
            week_start: NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
            accuracy_pct: 50.0,
        }];
        assert!(AccuracySeries::from_weekly(&weekly).is_some());
    }
}
