//! Wire types for the prediction backend's JSON responses.
//!
//! Field names follow the backend exactly; anything the backend may omit or
//! null out is an `Option`. Unknown fields (the `latest` record carries the
//! whole engineered-feature row) are ignored by serde.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use strum_macros::EnumIter;

/// Period codes accepted by `/api/stock/{symbol}?period=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter)]
pub enum Timeframe {
    OneMonth,
    #[default]
    ThreeMonths,
    SixMonths,
    OneYear,
}

impl Timeframe {
    pub fn code(&self) -> &'static str {
        match self {
            Timeframe::OneMonth => "1m",
            Timeframe::ThreeMonths => "3m",
            Timeframe::SixMonths => "6m",
            Timeframe::OneYear => "1y",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Timeframe::OneMonth => "1 Month",
            Timeframe::ThreeMonths => "3 Months",
            Timeframe::SixMonths => "6 Months",
            Timeframe::OneYear => "1 Year",
        }
    }
}

/// One trading day from `/api/stock/{symbol}`.
#[derive(Debug, Clone, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub open_price: f64,
    pub close_price: f64,
    pub high_price: f64,
    pub low_price: f64,
    pub volume: u64,
    #[serde(default)]
    pub ma50: Option<f64>,
    #[serde(default)]
    pub volatility: Option<f64>,
}

/// A stored prediction row (`/api/predictions/recent` and `/history`).
#[derive(Debug, Clone, Deserialize)]
pub struct Prediction {
    pub date: NaiveDate,
    #[serde(default)]
    pub symbol: String,
    #[serde(deserialize_with = "movement_flag")]
    pub predicted_movement: bool,
    pub confidence: f64,
    /// `None` until the outcome for that day is known.
    #[serde(default, deserialize_with = "optional_movement_flag")]
    pub actual_movement: Option<bool>,
}

/// The forecast block inside `/api/predict/{symbol}`.
#[derive(Debug, Clone, Deserialize)]
pub struct MovementForecast {
    /// `true` = upward movement predicted.
    #[serde(deserialize_with = "movement_flag")]
    pub movement: bool,
    pub confidence: f64,
}

/// The latest quote row attached to a prediction. The backend sends the
/// entire feature-engineered row here; we only bind what the stats panel
/// shows.
#[derive(Debug, Clone, Deserialize)]
pub struct LatestQuote {
    pub open_price: f64,
    pub close_price: f64,
    pub high_price: f64,
    pub low_price: f64,
    pub volume: u64,
    #[serde(default)]
    pub ma50: Option<f64>,
    #[serde(default)]
    pub volatility: Option<f64>,
    #[serde(default)]
    pub formatted_date: Option<String>,
}

/// Model feature weights, parallel arrays, unordered on arrival.
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureImportance {
    pub features: Vec<String>,
    pub importance: Vec<f64>,
}

/// Full body of `/api/predict/{symbol}`.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictPayload {
    #[serde(default)]
    pub symbol: String,
    pub prediction: MovementForecast,
    pub latest: LatestQuote,
    #[serde(default)]
    pub model_accuracy: Option<f64>,
    #[serde(default)]
    pub feature_importance: Option<FeatureImportance>,
}

/// One executed trade from the portfolio simulation.
///
/// `action` is left as a string: the simulator emits BUY, SELL and a
/// closing FINAL SELL, and row styling treats anything beyond BUY/SELL
/// uniformly.
#[derive(Debug, Clone, Deserialize)]
pub struct Trade {
    pub date: NaiveDate,
    pub action: String,
    pub price: f64,
    pub shares: f64,
    pub value: f64,
    pub confidence: f64,
}

/// Per-day portfolio value during the simulation.
#[derive(Debug, Clone, Deserialize)]
pub struct DailyBalance {
    pub date: NaiveDate,
    pub balance: f64,
    #[serde(default)]
    pub shares: f64,
    pub price: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BuyAndHold {
    #[serde(default)]
    pub initial_balance: Option<f64>,
    #[serde(default)]
    pub final_balance: Option<f64>,
    pub roi_percentage: f64,
}

/// Body of `/api/portfolio/simulate`. The endpoint returns JSON `null` when
/// the simulation cannot run, which the client maps to `Option::None`.
#[derive(Debug, Clone, Deserialize)]
pub struct SimulationResult {
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub days: u32,
    pub initial_balance: f64,
    pub final_balance: f64,
    pub roi_percentage: f64,
    pub buy_and_hold: BuyAndHold,
    #[serde(default)]
    pub daily_balance: Vec<DailyBalance>,
    #[serde(default)]
    pub trades: Vec<Trade>,
}

// The backend's model emits movement flags as numpy 0/1 integers; rows that
// went through the database come back as real booleans. Accept both.
#[derive(Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Int(i64),
}

impl Flag {
    fn as_bool(&self) -> bool {
        match self {
            Flag::Bool(b) => *b,
            Flag::Int(i) => *i != 0,
        }
    }
}

fn movement_flag<'de, D: Deserializer<'de>>(de: D) -> Result<bool, D::Error> {
    Ok(Flag::deserialize(de)?.as_bool())
}

fn optional_movement_flag<'de, D: Deserializer<'de>>(de: D) -> Result<Option<bool>, D::Error> {
    Ok(Option::<Flag>::deserialize(de)?.map(|f| f.as_bool()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_point_parses_backend_row() {
        let raw = r#"{
            "date": "2024-03-08",
            "open_price": 171.2,
            "close_price": 173.1,
            "high_price": 174.0,
            "low_price": 170.9,
            "volume": 51234000
        }"#;
        let p: PricePoint = serde_json::from_str(raw).unwrap();
        assert_eq!(p.date, NaiveDate::from_ymd_opt(2024, 3, 8).unwrap());
        assert_eq!(p.volume, 51_234_000);
        assert!(p.ma50.is_none());
        assert!(p.volatility.is_none());
    }

    #[test]
    fn prediction_accepts_int_and_bool_movement_flags() {
        let raw = r#"{
            "date": "2024-03-08",
            "symbol": "AAPL",
            "predicted_movement": 1,
            "confidence": 0.64,
            "actual_movement": false
        }"#;
        let p: Prediction = serde_json::from_str(raw).unwrap();
        assert!(p.predicted_movement);
        assert_eq!(p.actual_movement, Some(false));

        let raw = r#"{
            "date": "2024-03-09",
            "predicted_movement": true,
            "confidence": 0.5,
            "actual_movement": null
        }"#;
        let p: Prediction = serde_json::from_str(raw).unwrap();
        assert!(p.predicted_movement);
        assert_eq!(p.actual_movement, None);
    }

    #[test]
    fn predict_payload_ignores_extra_feature_columns() {
        let raw = r#"{
            "symbol": "AAPL",
            "prediction": {"movement": 0, "confidence": 0.71, "date": "2024-03-09"},
            "latest": {
                "open_price": 171.2, "close_price": 173.1,
                "high_price": 174.0, "low_price": 170.9,
                "volume": 51234000,
                "ma50": 168.4, "volatility": 0.012,
                "price_rel_ma5": 0.01, "day_range": 0.018,
                "formatted_date": "2024-03-08"
            },
            "model_accuracy": 0.58,
            "feature_importance": {
                "features": ["close_price", "volume"],
                "importance": [0.4, 0.1]
            }
        }"#;
        let p: PredictPayload = serde_json::from_str(raw).unwrap();
        assert!(!p.prediction.movement);
        assert_eq!(p.latest.ma50, Some(168.4));
        assert_eq!(p.model_accuracy, Some(0.58));
        assert_eq!(p.feature_importance.unwrap().features.len(), 2);
    }

    #[test]
    fn simulation_result_parses_and_null_maps_to_none() {
        let raw = r#"{
            "symbol": "AAPL",
            "days": 30,
            "initial_balance": 10000.0,
            "final_balance": 10500.0,
            "roi_percentage": 5.0,
            "buy_and_hold": {"initial_balance": 10000.0, "final_balance": 10300.0, "roi_percentage": 3.0},
            "daily_balance": [
                {"date": "2024-02-01", "balance": 10000.0, "shares": 0.0, "price": 100.0}
            ],
            "trades": [
                {"date": "2024-02-01", "action": "BUY", "price": 100.0,
                 "shares": 100.0, "value": 10000.0, "confidence": 0.62}
            ]
        }"#;
        let r: Option<SimulationResult> = serde_json::from_str(raw).unwrap();
        let r = r.unwrap();
        assert_eq!(r.trades.len(), 1);
        assert_eq!(r.buy_and_hold.roi_percentage, 3.0);

        let none: Option<SimulationResult> = serde_json::from_str("null").unwrap();
        assert!(none.is_none());
    }
}
