// Core modules
pub mod api;
pub mod config;
pub mod domain;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use api::{ApiClient, ApiError};
pub use ui::StockcastApp;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the prediction backend
    #[arg(long, default_value_t = config::API.default_base_url.to_string())]
    pub base_url: String,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext, api: ApiClient) -> Box<dyn eframe::App> {
    Box::new(StockcastApp::new(cc, api))
}
