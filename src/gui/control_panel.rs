//! Control Panel Widget
//! Left side panel with the two pipeline buttons and status readout.

use crate::data::CleaningReport;
use egui::{Color32, RichText};
use std::path::PathBuf;

/// Left side control panel driving the load/clean and EDA actions.
pub struct ControlPanel {
    pub csv_path: Option<PathBuf>,
    pub row_count: usize,
    pub column_count: usize,
    pub report: Option<CleaningReport>,
    pub eda_enabled: bool,
    pub status: String,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            csv_path: None,
            row_count: 0,
            column_count: 0,
            report: None,
            eda_enabled: false,
            status: "Ready".to_string(),
        }
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful load+clean.
    pub fn set_loaded(&mut self, path: PathBuf, report: CleaningReport, column_count: usize) {
        self.row_count = report.rows_after;
        self.column_count = column_count;
        self.status = format!(
            "Cleaned: {} rows ({} duplicates removed)",
            report.rows_after, report.duplicate_count
        );
        self.csv_path = Some(path);
        self.report = Some(report);
        self.eda_enabled = true;
    }

    /// Reset to the unloaded state, keeping the failure message visible.
    pub fn set_failed(&mut self, message: &str) {
        self.csv_path = None;
        self.row_count = 0;
        self.column_count = 0;
        self.report = None;
        self.eda_enabled = false;
        self.status = format!("Error: {message}");
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }

    /// Draw the control panel.
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("📊 Tyre Insight")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new("CSV Cleaning & EDA")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Data Source Section =====
        ui.label(RichText::new("📁 Data Source").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                let path_text = self
                    .csv_path
                    .as_ref()
                    .and_then(|p| p.file_name())
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| "No file selected".to_string());

                ui.label(RichText::new(&path_text).size(12.0).color(
                    if self.csv_path.is_some() {
                        Color32::WHITE
                    } else {
                        Color32::GRAY
                    },
                ));

                if self.csv_path.is_some() {
                    ui.label(
                        RichText::new(format!(
                            "{} rows, {} columns",
                            self.row_count, self.column_count
                        ))
                        .size(11.0)
                        .color(Color32::GRAY),
                    );
                }
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Action Buttons =====
        ui.vertical_centered(|ui| {
            let clean_button =
                egui::Button::new(RichText::new("▶ Start Data Cleaning").size(16.0))
                    .min_size(egui::vec2(220.0, 35.0));
            if ui.add(clean_button).clicked() {
                action = ControlPanelAction::StartCleaning;
            }

            ui.add_space(8.0);

            ui.add_enabled_ui(self.eda_enabled, |ui| {
                let eda_button = egui::Button::new(RichText::new("📈 Start EDA").size(16.0))
                    .min_size(egui::vec2(220.0, 35.0));
                if ui.add(eda_button).clicked() {
                    action = ControlPanelAction::StartEda;
                }
            });
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Cleaning Report Section =====
        if let Some(report) = &self.report {
            ui.label(RichText::new("🧹 Cleaning Report").size(14.0).strong());
            ui.add_space(5.0);
            egui::Frame::none()
                .fill(ui.visuals().widgets.noninteractive.bg_fill)
                .rounding(5.0)
                .inner_margin(8.0)
                .show(ui, |ui| {
                    ui.label(
                        RichText::new(format!(
                            "{}\n{}",
                            report.missing_values_report(),
                            report.duplicate_rows_report()
                        ))
                        .size(11.0)
                        .monospace(),
                    );
                });
            ui.add_space(10.0);
            ui.separator();
            ui.add_space(5.0);
        }

        // ===== Status =====
        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else if self.status.contains("Cleaned") || self.status.contains("ready") {
            Color32::from_rgb(40, 167, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlPanelAction {
    None,
    StartCleaning,
    StartEda,
}
