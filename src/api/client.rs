//! Blocking HTTP client for the prediction backend.
//!
//! Every method is one GET returning a deserialized body. Calls are made
//! from worker threads (see `ui::fetch`), never from the UI thread, so the
//! blocking client is fine here. Requests carry explicit timeouts; a hung
//! backend surfaces as `ApiError::Timeout` instead of an eternal spinner.

use std::fmt;
use std::time::Duration;

use crate::api::types::{PricePoint, PredictPayload, Prediction, SimulationResult, Timeframe};
use crate::config::API;

/// Error taxonomy for one fetch. `Network`/`Timeout`/`Server` are transport
/// level, `Parse` means the body did not match the expected shape.
#[derive(Debug, Clone)]
pub enum ApiError {
    Network(String),
    Timeout,
    Server(String),
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Timeout => write!(f, "Request timed out"),
            ApiError::Server(status) => write!(f, "Server error: {}", status),
            ApiError::Parse(msg) => write!(f, "Unexpected response: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// Client for the stock-prediction REST backend.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl ApiClient {
    /// Create a client for the given base URL (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = reqwest::blocking::Client::builder()
            .connect_timeout(Duration::from_secs(API.connect_timeout_secs))
            .timeout(Duration::from_secs(API.request_timeout_secs))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Historical daily prices for a symbol over the given period.
    pub fn stock_history(
        &self,
        symbol: &str,
        timeframe: Timeframe,
    ) -> Result<Vec<PricePoint>, ApiError> {
        let url = format!(
            "{}/api/stock/{}?period={}",
            self.base_url,
            symbol,
            timeframe.code()
        );
        self.get_json(&url)
    }

    /// Next-day movement forecast for a symbol.
    pub fn predict(&self, symbol: &str) -> Result<PredictPayload, ApiError> {
        let url = format!("{}/api/predict/{}", self.base_url, symbol);
        self.get_json(&url)
    }

    /// Most recent stored predictions for a symbol, newest first.
    pub fn recent_predictions(&self, symbol: &str, limit: u32) -> Result<Vec<Prediction>, ApiError> {
        let url = format!(
            "{}/api/predictions/recent?symbol={}&limit={}",
            self.base_url, symbol, limit
        );
        self.get_json(&url)
    }

    /// Full prediction history for a symbol.
    pub fn prediction_history(&self, symbol: &str) -> Result<Vec<Prediction>, ApiError> {
        let url = format!("{}/api/predictions/history?symbol={}", self.base_url, symbol);
        self.get_json(&url)
    }

    /// Run a portfolio simulation. The backend answers `null` when it cannot
    /// produce a usable result, which maps to `Ok(None)` here.
    pub fn simulate_portfolio(
        &self,
        symbol: &str,
        initial_balance: f64,
        days: u32,
    ) -> Result<Option<SimulationResult>, ApiError> {
        let url = format!(
            "{}/api/portfolio/simulate?symbol={}&initial_balance={}&days={}",
            self.base_url, symbol, initial_balance, days
        );
        self.get_json(&url)
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let response = self.client.get(url).send().map_err(classify_transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Server(status.to_string()));
        }

        response.json().map_err(|e| ApiError::Parse(e.to_string()))
    }
}

fn classify_transport(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Timeout
    } else {
        ApiError::Network(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let client = ApiClient::new("http://localhost:8000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn errors_display_a_readable_reason() {
        assert_eq!(ApiError::Timeout.to_string(), "Request timed out");
        assert!(
            ApiError::Server("404 Not Found".to_string())
                .to_string()
                .contains("404")
        );
    }
}
