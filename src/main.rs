//! Titan Crash GUI
//!
//! Two players share one screen; the board and clocks are driven by
//! the library's game controller.

use titan_crash::ui::TitanCrashApp;
use titan_crash::GameConfig;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = GameConfig::from_env().unwrap_or_else(|err| {
        tracing::warn!(%err, "invalid configuration, using defaults");
        GameConfig::default()
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Titan Crash"),
        ..Default::default()
    };

    eframe::run_native(
        "Titan Crash",
        options,
        Box::new(move |cc| Ok(Box::new(TitanCrashApp::new(cc, config)))),
    )
}
