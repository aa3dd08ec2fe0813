// Backend REST client and wire types
pub mod client;
pub mod types;

pub use client::{ApiClient, ApiError};
pub use types::{
    BuyAndHold, DailyBalance, FeatureImportance, LatestQuote, MovementForecast, PredictPayload,
    PricePoint, Prediction, SimulationResult, Timeframe, Trade,
};
