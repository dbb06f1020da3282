mod app;
mod data;
mod state;
mod style;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use app::TripletViewerApp;
use eframe::egui;
use state::AppState;

/// Fixed input produced by the triplet-rule simulation, read from the
/// working directory.
const INPUT_FILE: &str = "weights.csv";

fn main() -> Result<()> {
    env_logger::init();

    // The pipeline runs before any window opens: a bad input file must exit
    // non-zero without showing a plot.
    let input_path = PathBuf::from(INPUT_FILE);
    let plot = data::load_plot_data(&input_path).context("loading weight measurements")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    let state = AppState::new(input_path, plot);
    eframe::run_native(
        "Triplet Rule – Weight Change Viewer",
        options,
        Box::new(|cc| {
            // Light visuals: the experimental curves are black, matching the
            // published figure.
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(TripletViewerApp::new(state)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("running viewer: {e}"))?;

    Ok(())
}
