pub mod app;
pub mod charts;
pub mod config;
pub mod dashboard;
pub mod fetch;
pub mod portfolio;
pub mod predictions;
pub mod ui_text;
pub mod utils;

pub use app::{Page, StockcastApp};
