#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use clap::Parser;
use eframe::NativeOptions;
use eframe::egui::ViewportBuilder;

use stockcast::ui::config::UI_TEXT;
use stockcast::{ApiClient, Cli, run_app};

fn main() -> eframe::Result {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Cli::parse();
    log::info!("connecting to backend at {}", args.base_url);

    let api = match ApiClient::new(&args.base_url) {
        Ok(api) => api,
        Err(e) => {
            log::error!("failed to build HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    let options = NativeOptions {
        viewport: ViewportBuilder::default().with_inner_size([1280.0, 860.0]),
        ..Default::default()
    };

    eframe::run_native(
        UI_TEXT.app_title,
        options,
        Box::new(move |cc| Ok(run_app(cc, api))),
    )
}
