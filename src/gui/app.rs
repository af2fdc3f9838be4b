//! Tyre Insight Main Application
//! Main window wiring the load/clean/analyze pipeline to the two buttons.
//! All three stages run to completion on the UI thread; the session table
//! is an explicit field, set only by a successful load+clean.

use crate::data::{DataCleaner, DataLoader};
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction};
use crate::stats::EdaReport;
use anyhow::Context;
use egui::SidePanel;
use polars::prelude::DataFrame;
use rfd::{MessageDialog, MessageLevel};
use std::path::Path;
use tracing::{error, info, warn};

/// Main application window.
pub struct TyreInsightApp {
    loader: DataLoader,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,
    /// Cleaned table; unset until the first successful load+clean,
    /// replaced on each subsequent one.
    session: Option<DataFrame>,
}

impl TyreInsightApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            loader: DataLoader::new(),
            control_panel: ControlPanel::new(),
            chart_viewer: ChartViewer::new(),
            session: None,
        }
    }

    /// Handle the "Start Data Cleaning" button: pick a file, load, clean.
    fn handle_start_cleaning(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        else {
            return; // User cancelled
        };

        self.chart_viewer.clear();

        match self.run_cleaning(&path) {
            Ok(()) => {
                MessageDialog::new()
                    .set_level(MessageLevel::Info)
                    .set_title("Success")
                    .set_description("Data loaded successfully.")
                    .show();

                if let Some(report) = &self.control_panel.report {
                    MessageDialog::new()
                        .set_level(MessageLevel::Info)
                        .set_title("Data Cleaning Proof")
                        .set_description(format!(
                            "{}\n{}",
                            report.missing_values_report(),
                            report.duplicate_rows_report()
                        ))
                        .show();
                }
            }
            Err(e) => {
                error!(path = %path.display(), "load/clean failed: {e:#}");
                self.session = None;
                self.control_panel.set_failed(&format!("{e:#}"));

                MessageDialog::new()
                    .set_level(MessageLevel::Error)
                    .set_title("Error")
                    .set_description(format!("{e:#}"))
                    .show();
            }
        }
    }

    /// Load the CSV and run the cleaning pass; on success the cleaned table
    /// becomes the session table.
    fn run_cleaning(&mut self, path: &Path) -> anyhow::Result<()> {
        self.loader.load_csv(path)?;
        let df = self
            .loader
            .get_dataframe()
            .cloned()
            .context("no data loaded")?;

        let (cleaned, report) = DataCleaner::clean(&df)?;
        let column_count = cleaned.width();

        info!(
            rows = report.rows_after,
            duplicates = report.duplicate_count,
            "session table replaced"
        );

        self.session = Some(cleaned);
        self.control_panel
            .set_loaded(path.to_path_buf(), report, column_count);
        Ok(())
    }

    /// Handle the "Start EDA" button.
    fn handle_start_eda(&mut self) {
        let Some(df) = &self.session else {
            warn!("EDA requested without a loaded table");
            MessageDialog::new()
                .set_level(MessageLevel::Warning)
                .set_title("Warning")
                .set_description("Please load data and clean it first.")
                .show();
            return;
        };

        match EdaReport::build(df) {
            Ok(report) => {
                self.control_panel
                    .set_status(&format!("EDA ready: {} views", report.views.len()));
                self.chart_viewer.set_report(report);
            }
            Err(e) => {
                error!("EDA failed: {e}");
                self.control_panel.set_status(&format!("Error: {e}"));
                MessageDialog::new()
                    .set_level(MessageLevel::Error)
                    .set_title("Error")
                    .set_description(e.to_string())
                    .show();
            }
        }
    }
}

impl eframe::App for TyreInsightApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(300.0)
            .max_width(360.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.control_panel.show(ui);

                    match action {
                        ControlPanelAction::StartCleaning => self.handle_start_cleaning(),
                        ControlPanelAction::StartEda => self.handle_start_eda(),
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Central panel - Chart Viewer
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui);
        });
    }
}
