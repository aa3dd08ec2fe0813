/// All user-facing strings in one place.
pub struct UiText {
    pub app_title: &'static str,

    // Navigation
    pub page_dashboard: &'static str,
    pub page_portfolio: &'static str,
    pub page_predictions: &'static str,

    // Shared controls
    pub symbol_label: &'static str,
    pub timeframe_label: &'static str,

    // Dashboard
    pub price_heading: &'static str,
    pub volume_heading: &'static str,
    pub prediction_heading: &'static str,
    pub stats_heading: &'static str,
    pub features_heading: &'static str,
    pub recent_heading: &'static str,
    pub loading_market: &'static str,
    pub upward_predicted: &'static str,
    pub downward_predicted: &'static str,
    pub confidence_label: &'static str,
    pub prediction_for_prefix: &'static str,
    pub no_recent_predictions: &'static str,
    pub no_feature_importance: &'static str,
    pub stat_open: &'static str,
    pub stat_close: &'static str,
    pub stat_range: &'static str,
    pub stat_volume: &'static str,
    pub stat_ma50: &'static str,
    pub stat_volatility: &'static str,
    pub stat_accuracy: &'static str,

    // Portfolio
    pub simulation_heading: &'static str,
    pub results_heading: &'static str,
    pub balance_chart_heading: &'static str,
    pub trades_heading: &'static str,
    pub initial_balance_label: &'static str,
    pub days_label: &'static str,
    pub run_simulation: &'static str,
    pub running_simulation: &'static str,
    pub simulation_hint: &'static str,
    pub simulation_error_prefix: &'static str,
    pub simulation_empty: &'static str,
    pub summary_initial: &'static str,
    pub summary_final: &'static str,
    pub summary_roi: &'static str,
    pub summary_buy_hold_roi: &'static str,
    pub summary_best_strategy: &'static str,
    pub summary_total_trades: &'static str,
    pub no_trades: &'static str,
    pub series_ai: &'static str,
    pub series_buy_hold: &'static str,

    // Predictions
    pub history_heading: &'static str,
    pub accuracy_heading: &'static str,
    pub no_history: &'static str,
    pub accuracy_needs_outcomes: &'static str,
    pub col_date: &'static str,
    pub col_symbol: &'static str,
    pub col_predicted: &'static str,
    pub col_confidence: &'static str,
    pub col_actual: &'static str,
    pub col_result: &'static str,
    pub col_action: &'static str,
    pub col_price: &'static str,
    pub col_shares: &'static str,
    pub col_value: &'static str,
    pub direction_up: &'static str,
    pub direction_down: &'static str,
    pub pending: &'static str,

    // Errors
    pub section_error_prefix: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    app_title: "Stockcast - Stock Prediction Dashboard",

    page_dashboard: "Dashboard",
    page_portfolio: "Portfolio",
    page_predictions: "Predictions",

    symbol_label: "Symbol",
    timeframe_label: "Timeframe",

    price_heading: "Price History",
    volume_heading: "Trading Volume",
    prediction_heading: "Next-Day Prediction",
    stats_heading: "Latest Stats",
    features_heading: "Feature Importance",
    recent_heading: "Recent Predictions",
    loading_market: "Analyzing market data...",
    upward_predicted: "Upward Movement Predicted",
    downward_predicted: "Downward Movement Predicted",
    confidence_label: "Confidence",
    prediction_for_prefix: "Prediction for",
    no_recent_predictions: "No recent predictions available",
    no_feature_importance: "Feature importance is not available for this model.",
    stat_open: "Open",
    stat_close: "Close",
    stat_range: "Day Range",
    stat_volume: "Volume",
    stat_ma50: "50-Day MA",
    stat_volatility: "Volatility",
    stat_accuracy: "Model Accuracy",

    simulation_heading: "Portfolio Simulation",
    results_heading: "Results",
    balance_chart_heading: "Balance Over Time",
    trades_heading: "Trade Log",
    initial_balance_label: "Initial balance ($)",
    days_label: "Days to simulate",
    run_simulation: "Run Simulation",
    running_simulation: "Running simulation...",
    simulation_hint: "Configure the simulation and press Run.",
    simulation_error_prefix: "Error running simulation:",
    simulation_empty: "Could not run simulation with the selected parameters.",
    summary_initial: "Initial Balance",
    summary_final: "Final Balance",
    summary_roi: "Return on Investment",
    summary_buy_hold_roi: "Buy & Hold ROI",
    summary_best_strategy: "Best Strategy",
    summary_total_trades: "Total Trades",
    no_trades: "No trades to display",
    series_ai: "AI Strategy",
    series_buy_hold: "Buy & Hold",

    history_heading: "Prediction History",
    accuracy_heading: "Weekly Accuracy",
    no_history: "No prediction history available",
    accuracy_needs_outcomes: "Accuracy appears once predictions have known outcomes.",
    col_date: "Date",
    col_symbol: "Symbol",
    col_predicted: "Predicted",
    col_confidence: "Confidence",
    col_actual: "Actual",
    col_result: "Result",
    col_action: "Action",
    col_price: "Price",
    col_shares: "Shares",
    col_value: "Value",
    direction_up: "Up",
    direction_down: "Down",
    pending: "Pending",

    section_error_prefix: "Failed to load:",
};
