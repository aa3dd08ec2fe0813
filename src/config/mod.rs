//! Configuration module for the stockcast application.

pub mod api;
pub mod plot;

// Re-export commonly used items
pub use api::API;
pub use plot::PLOT_CONFIG;
