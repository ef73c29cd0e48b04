// CarCare - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Configuration loading and logging initialisation
// 3. Persisted user-settings loading
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` and other
// binary-side code can still use `crate::app::...`, `crate::core::...` etc.
pub use carcare::app;
pub use carcare::core;
pub use carcare::platform;
pub use carcare::ui;
pub use carcare::util;

use clap::Parser;
use std::path::PathBuf;

/// CarCare - desktop client for the car-maintenance-service booking
/// application.
///
/// Renders the booking client's navigation shell: responsive sidebar,
/// persisted user settings, and theme switching. Booking, accounts, and
/// the map are served by the booking service itself.
#[derive(Parser, Debug)]
#[command(name = "CarCare", version, about)]
struct Cli {
    /// Override the configuration directory (settings.json, config.toml).
    #[arg(short = 'c', long = "config-dir")]
    config_dir: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Resolve paths and read config.toml before logging starts so the
    // configured level can take effect; config warnings are emitted right
    // after the subscriber is up.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let config_dir = cli
        .config_dir
        .clone()
        .unwrap_or_else(|| platform_paths.config_dir.clone());
    let (config, config_warnings) = platform::config::load_config(&config_dir);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        config_dir = %config_dir.display(),
        "CarCare starting"
    );

    for warning in &config_warnings {
        tracing::warn!(error = %warning, "Config loading warning");
    }

    // Persisted user settings win over config.toml; the config file only
    // supplies the theme shown before the user has saved anything.
    let store = app::settings_store::SettingsStore::new(&config_dir);
    let settings = store.load().unwrap_or_else(|| crate::core::settings::UserSettings {
        theme: config.theme_default,
        ..Default::default()
    });

    tracing::info!(theme = %settings.theme, "Ready to launch GUI");

    let state = app::state::AppState::new(store, settings, cli.debug);
    let initial_theme = state.theme();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([360.0, 560.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            ui::theme::apply(&cc.egui_ctx, initial_theme);
            Ok(Box::new(gui::CarCareApp::new(state)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch CarCare GUI: {e}");
        std::process::exit(1);
    }
}
