// View-model logic derived from API payloads
pub mod accuracy;
pub mod confidence;
pub mod features;
pub mod outcome;
pub mod portfolio;

pub use accuracy::{WeeklyAccuracy, weekly_accuracy};
pub use confidence::{ConfidenceTier, confidence_percent};
pub use features::{RankedFeature, rank_features};
pub use outcome::PredictionStatus;
pub use portfolio::{best_strategy, buy_and_hold_series};
