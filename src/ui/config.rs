use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,

    // Semantic accents
    pub up: Color32,
    pub down: Color32,
    pub positive: Color32,
    pub negative: Color32,
    pub warning: Color32,
    pub pending: Color32,
    pub error: Color32,

    // Chart series
    pub price_line: Color32,
    pub volume_bar: Color32,
    pub ai_line: Color32,
    pub buy_hold_line: Color32,
    pub accuracy_line: Color32,

    // Trade row accents
    pub trade_buy: Color32,
    pub trade_sell: Color32,
    pub trade_other: Color32,

    // Confidence meter fills, one per tier
    pub confidence_high: Color32,
    pub confidence_medium: Color32,
    pub confidence_low: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub feature_palette: [Color32; 6],
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::from_rgb(120, 170, 255),
        central_panel: Color32::from_rgb(22, 24, 28),
        side_panel: Color32::from_rgb(30, 32, 38),

        up: Color32::from_rgb(130, 200, 140),
        down: Color32::from_rgb(220, 120, 120),
        positive: Color32::from_rgb(130, 200, 140),
        negative: Color32::from_rgb(220, 120, 120),
        warning: Color32::from_rgb(230, 200, 100),
        pending: Color32::from_rgb(120, 180, 230),
        error: Color32::from_rgb(255, 100, 100),

        price_line: Color32::from_rgb(13, 110, 253),
        volume_bar: Color32::from_rgb(108, 117, 125),
        ai_line: Color32::from_rgb(13, 110, 253),
        buy_hold_line: Color32::from_rgb(108, 117, 125),
        accuracy_line: Color32::from_rgb(13, 110, 253),

        trade_buy: Color32::from_rgb(13, 110, 253),
        trade_sell: Color32::from_rgb(220, 53, 69),
        trade_other: Color32::from_rgb(130, 200, 140),

        confidence_high: Color32::from_rgb(25, 135, 84),
        confidence_medium: Color32::from_rgb(255, 193, 7),
        confidence_low: Color32::from_rgb(220, 53, 69),
    },
    // Fixed rank palette for the feature-importance bars
    feature_palette: [
        Color32::from_rgb(13, 110, 253),  // #0d6efd
        Color32::from_rgb(102, 16, 242),  // #6610f2
        Color32::from_rgb(111, 66, 193),  // #6f42c1
        Color32::from_rgb(214, 51, 132),  // #d63384
        Color32::from_rgb(220, 53, 69),   // #dc3545
        Color32::from_rgb(253, 126, 20),  // #fd7e14
    ],
};
