//! Chart sizing and capping configuration

pub struct PlotConfig {
    // Volume bars are capped to the most recent N points of the range
    pub volume_window: usize,
    // Feature-importance chart keeps the top N features by weight
    pub top_feature_count: usize,
    // Accuracy chart y-axis is clamped to this range
    pub accuracy_y_range: (f64, f64),
    pub chart_height: f32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    volume_window: 30,
    top_feature_count: 6,
    accuracy_y_range: (0.0, 100.0),
    chart_height: 260.0,
};
