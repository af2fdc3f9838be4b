//! Chart Plotter Module
//! Renders the EDA views with egui_plot (and the egui painter for the
//! correlation heatmap).

use crate::stats::{BoxPlotView, CategoryBars, CorrelationView, EdaView, HistogramPanel};
use egui::{Color32, RichText};
use egui_plot::{Bar, BarChart, BoxElem, BoxPlot, BoxSpread, Plot, PlotPoints, Points};

/// Bar fill used by histograms and category bars
pub const BAR_COLOR: Color32 = Color32::from_rgb(91, 155, 213);

pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(231, 76, 60),  // Red
    Color32::from_rgb(46, 204, 113), // Green
    Color32::from_rgb(155, 89, 182), // Purple
    Color32::from_rgb(243, 156, 18), // Orange
    Color32::from_rgb(26, 188, 156), // Teal
    Color32::from_rgb(233, 30, 99),  // Pink
    Color32::from_rgb(0, 188, 212),  // Cyan
    Color32::from_rgb(255, 87, 34),  // Deep Orange
    Color32::from_rgb(121, 85, 72),  // Brown
    Color32::from_rgb(96, 125, 139), // Blue Grey
];

/// Diverging endpoints for the correlation heatmap
const COOL: Color32 = Color32::from_rgb(59, 76, 192);
const NEUTRAL: Color32 = Color32::from_rgb(245, 245, 245);
const WARM: Color32 = Color32::from_rgb(180, 4, 38);

/// Renders EDA views into egui.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Draw one view of the fixed sequence.
    pub fn draw_view(ui: &mut egui::Ui, view: &EdaView) {
        match view {
            EdaView::Histograms { panels } => Self::draw_histograms(ui, panels),
            EdaView::CorrelationHeatmap(corr) => Self::draw_heatmap(ui, corr),
            EdaView::SeasonSales(bars) => Self::draw_category_bars(ui, bars, 320.0),
            EdaView::VehicleTypePrices(boxes) => Self::draw_boxplot(ui, boxes),
            EdaView::CompanyComparison { sales, prices } => {
                let half = (ui.available_width() - 30.0) / 2.0;
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.set_width(half);
                        Self::draw_category_bars(ui, sales, 300.0);
                    });
                    ui.add_space(10.0);
                    ui.vertical(|ui| {
                        ui.set_width(half);
                        Self::draw_category_bars(ui, prices, 300.0);
                    });
                });
            }
        }
    }

    /// Two histogram panels side by side, 30 equal-width bins each.
    fn draw_histograms(ui: &mut egui::Ui, panels: &[HistogramPanel]) {
        let half = (ui.available_width() - 30.0) / 2.0;
        ui.horizontal(|ui| {
            for panel in panels {
                ui.vertical(|ui| {
                    ui.set_width(half);
                    ui.label(
                        RichText::new(format!("Histogram of {}", panel.column))
                            .size(14.0)
                            .strong(),
                    );

                    let bars: Vec<Bar> = panel
                        .histogram
                        .bins
                        .iter()
                        .map(|&(center, count)| {
                            Bar::new(center, count)
                                .width(panel.histogram.bin_width * 0.95)
                                .fill(BAR_COLOR)
                        })
                        .collect();

                    Plot::new(format!("hist_{}", panel.column))
                        .height(320.0)
                        .allow_scroll(false)
                        .x_axis_label(panel.column.clone())
                        .y_axis_label("Frequency")
                        .show(ui, |plot_ui| {
                            plot_ui.bar_chart(BarChart::new(bars).name(&panel.column));
                        });
                });
                ui.add_space(10.0);
            }
        });
    }

    /// Annotated heatmap with a fixed diverging scale over [-1, 1].
    fn draw_heatmap(ui: &mut egui::Ui, corr: &CorrelationView) {
        let n = corr.labels.len();
        if n == 0 {
            return;
        }

        let cell = 110.0f32;
        let margin = 80.0f32;
        let size = egui::vec2(margin + cell * n as f32 + 20.0, margin + cell * n as f32 + 20.0);
        let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
        let painter = ui.painter_at(rect);
        let origin = rect.min + egui::vec2(margin, margin * 0.5);

        let text_font = egui::FontId::proportional(13.0);
        let value_font = egui::FontId::proportional(15.0);

        for (row, row_values) in corr.matrix.iter().enumerate() {
            for (col, &value) in row_values.iter().enumerate() {
                let top_left =
                    origin + egui::vec2(col as f32 * cell, row as f32 * cell);
                let cell_rect =
                    egui::Rect::from_min_size(top_left, egui::vec2(cell - 2.0, cell - 2.0));
                painter.rect_filled(cell_rect, 2.0, Self::diverging_color(value));

                let text = if value.is_nan() {
                    "NaN".to_string()
                } else {
                    format!("{value:.2}")
                };
                let text_color = if value.abs() > 0.6 {
                    Color32::WHITE
                } else {
                    Color32::BLACK
                };
                painter.text(
                    cell_rect.center(),
                    egui::Align2::CENTER_CENTER,
                    text,
                    value_font.clone(),
                    text_color,
                );
            }
        }

        // Axis labels: columns above, rows to the left
        let label_color = ui.visuals().text_color();
        for (i, label) in corr.labels.iter().enumerate() {
            painter.text(
                origin + egui::vec2(i as f32 * cell + cell / 2.0, -14.0),
                egui::Align2::CENTER_CENTER,
                label,
                text_font.clone(),
                label_color,
            );
            painter.text(
                origin + egui::vec2(-10.0, i as f32 * cell + cell / 2.0),
                egui::Align2::RIGHT_CENTER,
                label,
                text_font.clone(),
                label_color,
            );
        }
    }

    /// Map a correlation coefficient onto the blue-white-red scale.
    fn diverging_color(value: f64) -> Color32 {
        if value.is_nan() {
            return Color32::GRAY;
        }
        let v = value.clamp(-1.0, 1.0) as f32;
        let (from, to, t) = if v < 0.0 { (NEUTRAL, COOL, -v) } else { (NEUTRAL, WARM, v) };
        let lerp = |a: u8, b: u8| -> u8 { (a as f32 + (b as f32 - a as f32) * t) as u8 };
        Color32::from_rgb(
            lerp(from.r(), to.r()),
            lerp(from.g(), to.g()),
            lerp(from.b(), to.b()),
        )
    }

    /// One bar per category at integer x positions, encounter order.
    fn draw_category_bars(ui: &mut egui::Ui, view: &CategoryBars, height: f32) {
        ui.label(RichText::new(&view.title).size(14.0).strong());

        let labels: Vec<String> = view.bars.iter().map(|(name, _)| name.clone()).collect();
        let bars: Vec<Bar> = view
            .bars
            .iter()
            .enumerate()
            .map(|(i, &(_, value))| {
                Bar::new(i as f64, value)
                    .width(0.6)
                    .fill(PALETTE[i % PALETTE.len()])
            })
            .collect();

        Plot::new(format!("bars_{}", view.title))
            .height(height)
            .allow_scroll(false)
            .x_axis_label(view.category_label.clone())
            .y_axis_label(view.value_label.clone())
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round() as usize;
                if (mark.value - idx as f64).abs() < 1e-6 && idx < labels.len() {
                    labels[idx].clone()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).name(&view.value_label));
            });
    }

    /// Box plot per category with whiskers at 1.5 IQR and outliers as points.
    fn draw_boxplot(ui: &mut egui::Ui, view: &BoxPlotView) {
        ui.label(RichText::new(&view.title).size(14.0).strong());

        let labels: Vec<String> = view.groups.iter().map(|(name, _)| name.clone()).collect();

        Plot::new(format!("box_{}", view.title))
            .height(340.0)
            .allow_scroll(false)
            .x_axis_label(view.category_label.clone())
            .y_axis_label(view.value_label.clone())
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round() as usize;
                if (mark.value - idx as f64).abs() < 1e-6 && idx < labels.len() {
                    labels[idx].clone()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                for (i, (name, summary)) in view.groups.iter().enumerate() {
                    let color = PALETTE[i % PALETTE.len()];

                    let box_elem = BoxElem::new(
                        i as f64,
                        BoxSpread::new(
                            summary.whisker_low,
                            summary.q1,
                            summary.median,
                            summary.q3,
                            summary.whisker_high,
                        ),
                    )
                    .box_width(0.5)
                    .fill(color.gamma_multiply(0.3))
                    .stroke(egui::Stroke::new(1.5, color));

                    plot_ui.box_plot(BoxPlot::new(vec![box_elem]).name(name));

                    if !summary.outliers.is_empty() {
                        let points: PlotPoints = summary
                            .outliers
                            .iter()
                            .map(|&v| [i as f64, v])
                            .collect();
                        plot_ui.points(
                            Points::new(points)
                                .radius(3.0)
                                .color(color)
                                .name(format!("{name} outliers")),
                        );
                    }
                }
            });
    }
}
