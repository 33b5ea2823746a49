//! Gomoku GUI
//!
//! Play against the AI or another player on the same machine.
//! AI tiers are read from `gomoku.toml` (or the path in `GOMOKU_CONFIG`)
//! when present.

use std::path::PathBuf;

use gomoku::ui::GomokuApp;
use gomoku::EngineConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let path = std::env::var_os("GOMOKU_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("gomoku.toml"));
    let config = EngineConfig::load_or_default(&path)?;
    log::info!("AI tiers: {config:?}");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Gomoku - Renju"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, config)))),
    )?;
    Ok(())
}
