//! Launcher Desktop Application
//!
//! Desktop shell for browsing and configuring game clusters.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod routes;
mod state;
mod styles;
mod theme;
mod views;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use launcher_core::config::load_desktop_config;
use tracing_subscriber::filter::LevelFilter;

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                "launcher=debug"
                    .parse()
                    .unwrap_or_else(|_| LevelFilter::DEBUG.into()),
            ),
        )
        .init();

    tracing::info!("Starting Launcher...");

    let desktop_config = load_desktop_config();
    tracing::debug!(
        "Window {}x{} titled {:?}",
        desktop_config.window_width,
        desktop_config.window_height,
        desktop_config.window_title
    );

    let window = WindowBuilder::new()
        .with_title(desktop_config.window_title.clone())
        .with_inner_size(LogicalSize::new(
            f64::from(desktop_config.window_width),
            f64::from(desktop_config.window_height),
        ));
    let config = Config::new().with_window(window).with_menu(None);

    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .with_context(desktop_config)
        .launch(app::App);
}
