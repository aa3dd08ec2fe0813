//! Top-level application: page navigation and the per-frame poll loop.

use eframe::egui::{Context, ScrollArea, SidePanel, CentralPanel, RichText};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::api::ApiClient;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::dashboard::DashboardController;
use crate::ui::portfolio::PortfolioController;
use crate::ui::predictions::PredictionsController;
use crate::ui::utils;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter)]
pub enum Page {
    #[default]
    Dashboard,
    Portfolio,
    Predictions,
}

impl Page {
    pub fn label(&self) -> &'static str {
        match self {
            Page::Dashboard => UI_TEXT.page_dashboard,
            Page::Portfolio => UI_TEXT.page_portfolio,
            Page::Predictions => UI_TEXT.page_predictions,
        }
    }
}

pub struct StockcastApp {
    page: Page,
    dashboard: DashboardController,
    portfolio: PortfolioController,
    predictions: PredictionsController,
}

impl StockcastApp {
    pub fn new(cc: &eframe::CreationContext<'_>, api: ApiClient) -> Self {
        utils::setup_custom_visuals(&cc.egui_ctx);
        Self {
            page: Page::default(),
            dashboard: DashboardController::new(api.clone()),
            portfolio: PortfolioController::new(api.clone()),
            predictions: PredictionsController::new(api),
        }
    }

    fn poll_fetches(&mut self) {
        self.dashboard.poll();
        self.portfolio.poll();
        self.predictions.poll();
    }

    fn any_in_flight(&self) -> bool {
        self.dashboard.in_flight()
            || self.portfolio.in_flight()
            || self.predictions.in_flight()
    }

    /// Pages that show data on arrival start their fetches when first
    /// visited. The portfolio page waits for an explicit Run.
    fn ensure_page_loaded(&mut self) {
        match self.page {
            Page::Dashboard => self.dashboard.ensure_loaded(),
            Page::Predictions => self.predictions.ensure_loaded(),
            Page::Portfolio => {}
        }
    }
}

impl eframe::App for StockcastApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.poll_fetches();
        self.ensure_page_loaded();

        // Promises resolve off-frame; keep painting while any are pending
        if self.any_in_flight() {
            ctx.request_repaint();
        }

        SidePanel::left("navigation")
            .resizable(false)
            .default_width(160.0)
            .show(ctx, |ui| {
                ui.add_space(10.0);
                ui.label(
                    RichText::new("STOCKCAST")
                        .color(UI_CONFIG.colors.heading)
                        .monospace()
                        .strong(),
                );
                utils::spaced_separator(ui);
                for page in Page::iter() {
                    ui.selectable_value(&mut self.page, page, page.label());
                }
            });

        CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| match self.page {
                    Page::Dashboard => self.dashboard.show(ui),
                    Page::Portfolio => self.portfolio.show(ui),
                    Page::Predictions => self.predictions.show(ui),
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_title_is_the_shared_string() {
        // The window title in main() reads this field
        assert_eq!(UI_TEXT.app_title, "Stockcast - Stock Prediction Dashboard");
    }

    #[test]
    fn pages_iterate_in_navigation_order() {
        let pages: Vec<Page> = Page::iter().collect();
        assert_eq!(pages, vec![Page::Dashboard, Page::Portfolio, Page::Predictions]);
        assert_eq!(Page::default(), Page::Dashboard);
    }
}
