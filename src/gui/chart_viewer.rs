//! Chart Viewer Widget
//! Central panel presenting the EDA views one at a time in their fixed
//! order, with explicit dismiss/advance navigation.

use crate::charts::ChartPlotter;
use crate::stats::EdaReport;
use egui::{Color32, RichText, ScrollArea};

/// Sequential EDA view presenter.
pub struct ChartViewer {
    report: Option<EdaReport>,
    current: usize,
}

impl Default for ChartViewer {
    fn default() -> Self {
        Self {
            report: None,
            current: 0,
        }
    }
}

impl ChartViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the current report.
    pub fn clear(&mut self) {
        self.report = None;
        self.current = 0;
    }

    /// Install a fresh report and restart at the first view.
    pub fn set_report(&mut self, report: EdaReport) {
        self.report = Some(report);
        self.current = 0;
    }

    /// Draw the viewer.
    pub fn show(&mut self, ui: &mut egui::Ui) {
        let Some(report) = &self.report else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        };

        let total = report.views.len();
        if total == 0 {
            return;
        }
        self.current = self.current.min(total - 1);

        let view = &report.views[self.current];

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                egui::CollapsingHeader::new(
                    RichText::new("Descriptive Statistics").size(14.0).strong(),
                )
                .default_open(false)
                .show(ui, |ui| {
                    ui.label(RichText::new(&report.descriptive_stats).monospace());
                });

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                // Navigation strip
                let mut step: isize = 0;
                ui.horizontal(|ui| {
                    ui.add_enabled_ui(self.current > 0, |ui| {
                        if ui.button("◀ Previous").clicked() {
                            step = -1;
                        }
                    });
                    ui.add_enabled_ui(self.current + 1 < total, |ui| {
                        if ui.button("Next ▶").clicked() {
                            step = 1;
                        }
                    });
                    ui.label(
                        RichText::new(format!(
                            "View {} / {}: {}",
                            self.current + 1,
                            total,
                            view.title()
                        ))
                        .size(15.0)
                        .strong()
                        .color(Color32::from_rgb(100, 149, 237)),
                    );
                });

                ui.add_space(10.0);

                ChartPlotter::draw_view(ui, view);

                if step != 0 {
                    self.current = self.current.saturating_add_signed(step);
                }
            });
    }
}
