//! Backend connection configuration

/// Settings for talking to the prediction backend.
pub struct ApiConfig {
    pub default_base_url: &'static str,
    // Connect + total request timeouts. A hung backend must become a visible
    // error state, never an indefinite spinner.
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    // How many recent predictions the dashboard card asks for
    pub recent_predictions_limit: u32,
    // Symbols the backend serves models for
    pub available_symbols: &'static [&'static str],
}

pub const API: ApiConfig = ApiConfig {
    default_base_url: "http://localhost:8000",
    connect_timeout_secs: 5,
    request_timeout_secs: 15,
    recent_predictions_limit: 5,
    available_symbols: &[
        "AAPL", "MSFT", "GOOGL", "AMZN", "META", "TSLA", "NVDA", "JPM", "V", "WMT", "JNJ",
    ],
};
