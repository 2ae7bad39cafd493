//! Keyboard-controlled Rubik's cube simulator, displayed as a 2D net.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod net;
mod preferences;
mod serde_impl;

use app::App;

const TITLE: &str = "Flatcube";

fn main() -> eframe::Result<()> {
    // Initialize logging.
    env_logger::builder()
        .filter_module(
            "flatcube",
            if cfg!(debug_assertions) {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Warn
            },
        )
        .init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITLE)
            .with_inner_size([800.0, 460.0]),
        ..Default::default()
    };
    eframe::run_native(
        TITLE,
        native_options,
        Box::new(|cc| Ok(Box::new(App::new(cc)))),
    )
}
