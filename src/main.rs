//! Tyre Insight - Tyre Sales CSV Cleaning & EDA Viewer
//!
//! Loads a tyre sales CSV, reports missing values and duplicate rows,
//! removes the duplicates, and presents a fixed sequence of descriptive
//! charts.

mod charts;
mod data;
mod gui;
mod stats;

use eframe::egui;
use gui::TyreInsightApp;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([1000.0, 650.0])
            .with_title("Tyre Insight"),
        ..Default::default()
    };

    eframe::run_native(
        "Tyre Insight",
        options,
        Box::new(|cc| Ok(Box::new(TyreInsightApp::new(cc)))),
    )
}
