//! Lookout Desktop Application
//!
//! Native profile and settings surface for the Lookout answer-monitoring
//! service.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod format;
mod resource;
mod services;
mod state;
mod theme;
mod views;

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lookout=debug".parse().unwrap()),
        )
        .init();

    tracing::info!("Starting Lookout...");
    tracing::info!("API base URL: {}", lookout_core::config::api_base_url());

    dioxus::launch(app::App);
}
