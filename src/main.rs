// src/main.rs
mod config;
mod gui;
mod ingest;
mod telemetry;
mod types;

use eframe::egui;

use crate::config::StreamConfig;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = match StreamConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            eprintln!("usage: pulsemon [--sim | WS_URL]");
            std::process::exit(2);
        }
    };

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([1000.0, 620.0])
        .with_min_inner_size([720.0, 480.0])
        .with_title("pulsemon");
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "pulsemon",
        options,
        Box::new(|_cc| Box::new(gui::PulsemonApp::new(config))),
    )
}
