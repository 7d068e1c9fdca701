// Hide console window on Windows in release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! steptabs - Main Entry Point
//!
//! A desktop editor for step-by-step tutorials. Each step is a tab; the whole
//! tutorial is compiled into one standalone tabbed HTML page.

mod app;
mod config;
mod error;
mod export;
mod files;
mod markup;
mod state;
mod store;
mod tabs;
mod theme;
mod ui;

use app::StepTabsApp;
use config::{load_config, APP_NAME};
use log::info;
use ui::APP_TITLE;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting {}", APP_NAME);

    // Load settings to get window configuration
    let settings = load_config();
    let window_size = &settings.window_size;

    info!(
        "Window configuration: {}x{}, maximized: {}",
        window_size.width, window_size.height, window_size.maximized
    );

    let viewport = eframe::egui::ViewportBuilder::default()
        .with_title(APP_TITLE)
        .with_inner_size([window_size.width, window_size.height])
        .with_min_inner_size([640.0, 400.0])
        .with_maximized(window_size.maximized);

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        native_options,
        Box::new(|cc| Ok(Box::new(StepTabsApp::new(cc)))),
    )
}
