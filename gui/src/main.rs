// GUI main entry point using Dioxus
#![allow(non_snake_case)]

use dioxus::prelude::*;
use dioxus_desktop::tao::dpi::LogicalSize;
use dioxus_desktop::{Config as DesktopConfig, WindowBuilder};

mod app;
mod components;
mod config;
mod services;
mod state;

use app::App;
use config::AppConfig;
use services::preferences::PreferenceStore;

fn main() {
    tracing_subscriber::fmt::init();

    tracing::info!("Starting Conversor GUI (Dioxus Desktop)...");

    let app_config = match AppConfig::load_default() {
        Ok(cfg) => {
            tracing::info!("Loaded embedded configuration version {}.", cfg.version);
            cfg
        }
        Err(e) => {
            // The config ships inside the binary; failing to parse it means
            // a broken build, not a user problem.
            tracing::error!("Failed to load embedded configuration: {e}. Exiting.");
            panic!("broken embedded configuration: {e}");
        }
    };

    let store = match PreferenceStore::open() {
        Ok(store) => store,
        Err(e) => {
            tracing::warn!("Preference store unavailable, falling back to a temp file: {e:#}");
            PreferenceStore::with_path(std::env::temp_dir().join("conversor-preferences.json"))
        }
    };

    let desktop_config = DesktopConfig::new()
        .with_window(
            WindowBuilder::new()
                .with_title("Conversor de Preços")
                .with_inner_size(LogicalSize::new(480.0, 640.0)),
        )
        .with_custom_head(format!(
            "<style>{}</style>",
            include_str!("../assets/styles.css")
        ));

    LaunchBuilder::desktop()
        .with_cfg(desktop_config)
        .with_context(app_config)
        .with_context(store)
        .launch(App);
}
