//! EDA Module
//! Builds the fixed battery of descriptive views from a cleaned table.
//!
//! View order:
//! 1. Histograms of Sales and Price (30 bins each)
//! 2. Pearson correlation heatmap of Sales/Price
//! 3. Mean Sales per season (bar)
//! 4. Price distribution per Vehicle Type (box plot)
//! 5. Mean Sales and mean Price per Company (side-by-side bars)

use crate::stats::calculator::{BoxSummary, ColumnStats, Histogram, StatsCalculator};
use polars::prelude::*;
use rayon::prelude::*;
use thiserror::Error;
use tracing::info;

pub const SALES_COLUMN: &str = "Sales";
pub const PRICE_COLUMN: &str = "Price";
pub const SEASON_COLUMN: &str = "season";
pub const VEHICLE_TYPE_COLUMN: &str = "Vehicle Type";
pub const COMPANY_COLUMN: &str = "Company";

pub const NUMERIC_COLUMNS: [&str; 2] = [SALES_COLUMN, PRICE_COLUMN];
pub const HISTOGRAM_BINS: usize = 30;

#[derive(Error, Debug)]
pub enum EdaError {
    #[error("Required column '{0}' is missing from the data")]
    MissingColumn(String),
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
}

/// One histogram panel of the numerical-features view.
#[derive(Debug, Clone)]
pub struct HistogramPanel {
    pub column: String,
    pub histogram: Histogram,
}

/// Square correlation matrix with its axis labels.
#[derive(Debug, Clone)]
pub struct CorrelationView {
    pub labels: Vec<String>,
    pub matrix: Vec<Vec<f64>>,
}

/// Bar chart of one value per category.
#[derive(Debug, Clone)]
pub struct CategoryBars {
    pub title: String,
    pub category_label: String,
    pub value_label: String,
    pub bars: Vec<(String, f64)>,
}

/// Box plot of a value distribution per category.
#[derive(Debug, Clone)]
pub struct BoxPlotView {
    pub title: String,
    pub category_label: String,
    pub value_label: String,
    pub groups: Vec<(String, BoxSummary)>,
}

/// A single rendered view in the fixed EDA sequence.
#[derive(Debug, Clone)]
pub enum EdaView {
    Histograms { panels: Vec<HistogramPanel> },
    CorrelationHeatmap(CorrelationView),
    SeasonSales(CategoryBars),
    VehicleTypePrices(BoxPlotView),
    CompanyComparison { sales: CategoryBars, prices: CategoryBars },
}

impl EdaView {
    pub fn title(&self) -> &str {
        match self {
            EdaView::Histograms { .. } => "Histograms of Numerical Features",
            EdaView::CorrelationHeatmap(_) => "Correlation Matrix",
            EdaView::SeasonSales(_) => "Sales Distribution by Season",
            EdaView::VehicleTypePrices(_) => "Price Distribution by Vehicle Type",
            EdaView::CompanyComparison { .. } => "Sales and Average Price by Company",
        }
    }
}

/// Output of one EDA run: the descriptive-statistics text block and the
/// ordered list of views to present.
#[derive(Debug, Clone)]
pub struct EdaReport {
    pub descriptive_stats: String,
    pub views: Vec<EdaView>,
}

impl EdaReport {
    /// Build the full report from a cleaned table.
    ///
    /// The five-column schema is fixed; the first missing column fails the
    /// whole run, there is no per-view recovery.
    pub fn build(df: &DataFrame) -> Result<EdaReport, EdaError> {
        let column_stats: Vec<ColumnStats> = NUMERIC_COLUMNS
            .par_iter()
            .map(|col| {
                let values = Self::required_numeric(df, col)?;
                Ok(StatsCalculator::compute_descriptive_stats(col, &values))
            })
            .collect::<Result<_, EdaError>>()?;
        let descriptive_stats = StatsCalculator::format_stats_block(&column_stats);

        let mut views = Vec::with_capacity(5);

        // 1. Histograms
        let panels = NUMERIC_COLUMNS
            .iter()
            .map(|col| {
                let values = Self::required_numeric(df, col)?;
                Ok(HistogramPanel {
                    column: col.to_string(),
                    histogram: StatsCalculator::compute_histogram(&values, HISTOGRAM_BINS),
                })
            })
            .collect::<Result<_, EdaError>>()?;
        views.push(EdaView::Histograms { panels });

        // 2. Correlation heatmap
        let sales = Self::required_numeric(df, SALES_COLUMN)?;
        let price = Self::required_numeric(df, PRICE_COLUMN)?;
        let r = StatsCalculator::pearson(&sales, &price);
        views.push(EdaView::CorrelationHeatmap(CorrelationView {
            labels: NUMERIC_COLUMNS.iter().map(|s| s.to_string()).collect(),
            matrix: vec![vec![1.0, r], vec![r, 1.0]],
        }));

        // 3. Mean sales per season
        views.push(EdaView::SeasonSales(CategoryBars {
            title: "Sales Distribution by Season".to_string(),
            category_label: "Season".to_string(),
            value_label: "Sales".to_string(),
            bars: Self::required_means(df, SEASON_COLUMN, SALES_COLUMN)?,
        }));

        // 4. Price box plot per vehicle type
        let groups = Self::required_groups(df, VEHICLE_TYPE_COLUMN, PRICE_COLUMN)?
            .into_iter()
            .map(|(name, vals)| (name, StatsCalculator::box_summary(&vals)))
            .collect();
        views.push(EdaView::VehicleTypePrices(BoxPlotView {
            title: "Price Distribution by Vehicle Type".to_string(),
            category_label: "Vehicle Type".to_string(),
            value_label: "Price".to_string(),
            groups,
        }));

        // 5. Company comparison
        views.push(EdaView::CompanyComparison {
            sales: CategoryBars {
                title: "Sales by Company".to_string(),
                category_label: "Company".to_string(),
                value_label: "Sales".to_string(),
                bars: Self::required_means(df, COMPANY_COLUMN, SALES_COLUMN)?,
            },
            prices: CategoryBars {
                title: "Average Price by Company".to_string(),
                category_label: "Company".to_string(),
                value_label: "Average Price".to_string(),
                bars: Self::required_means(df, COMPANY_COLUMN, PRICE_COLUMN)?,
            },
        });

        info!(views = views.len(), "EDA report built");

        Ok(EdaReport {
            descriptive_stats,
            views,
        })
    }

    fn check_column(df: &DataFrame, name: &str) -> Result<(), EdaError> {
        if df.get_column_names().iter().any(|c| c.as_str() == name) {
            Ok(())
        } else {
            Err(EdaError::MissingColumn(name.to_string()))
        }
    }

    fn required_numeric(df: &DataFrame, name: &str) -> Result<Vec<f64>, EdaError> {
        Self::check_column(df, name)?;
        Ok(StatsCalculator::numeric_values(df, name)?)
    }

    fn required_means(
        df: &DataFrame,
        group_col: &str,
        value_col: &str,
    ) -> Result<Vec<(String, f64)>, EdaError> {
        Self::check_column(df, group_col)?;
        Self::check_column(df, value_col)?;
        Ok(StatsCalculator::mean_by_group(df, group_col, value_col)?)
    }

    fn required_groups(
        df: &DataFrame,
        group_col: &str,
        value_col: &str,
    ) -> Result<Vec<(String, Vec<f64>)>, EdaError> {
        Self::check_column(df, group_col)?;
        Self::check_column(df, value_col)?;
        Ok(StatsCalculator::values_by_group(df, group_col, value_col)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_frame() -> DataFrame {
        DataFrame::new(vec![
            Column::new("Sales".into(), vec![10.0, 12.0, 8.0, 20.0, 14.0, 9.0]),
            Column::new("Price".into(), vec![5.0, 6.0, 4.0, 9.0, 7.0, 4.5]),
            Column::new(
                "season".into(),
                vec!["Winter", "Summer", "Winter", "Monsoon", "Summer", "Winter"],
            ),
            Column::new(
                "Vehicle Type".into(),
                vec!["SUV", "Sedan", "SUV", "Truck", "Sedan", "SUV"],
            ),
            Column::new(
                "Company".into(),
                vec!["Acme", "Bolt", "Acme", "Crown", "Bolt", "Acme"],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn builds_five_views_in_fixed_order() {
        let report = EdaReport::build(&sample_frame()).unwrap();
        assert_eq!(report.views.len(), 5);
        assert!(matches!(report.views[0], EdaView::Histograms { .. }));
        assert!(matches!(report.views[1], EdaView::CorrelationHeatmap(_)));
        assert!(matches!(report.views[2], EdaView::SeasonSales(_)));
        assert!(matches!(report.views[3], EdaView::VehicleTypePrices(_)));
        assert!(matches!(report.views[4], EdaView::CompanyComparison { .. }));
        assert!(report.descriptive_stats.contains("Sales"));
        assert!(report.descriptive_stats.contains("Price"));
    }

    #[test]
    fn missing_column_fails_the_whole_run() {
        let df = sample_frame().drop("season").unwrap();
        let err = EdaReport::build(&df).unwrap_err();
        match err {
            EdaError::MissingColumn(name) => assert_eq!(name, "season"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn histograms_use_thirty_bins() {
        let report = EdaReport::build(&sample_frame()).unwrap();
        let EdaView::Histograms { panels } = &report.views[0] else {
            panic!("first view must be histograms");
        };
        assert_eq!(panels.len(), 2);
        assert_eq!(panels[0].column, "Sales");
        assert_eq!(panels[0].histogram.bins.len(), HISTOGRAM_BINS);
    }

    #[test]
    fn correlation_matrix_is_symmetric_with_unit_diagonal() {
        let report = EdaReport::build(&sample_frame()).unwrap();
        let EdaView::CorrelationHeatmap(view) = &report.views[1] else {
            panic!("second view must be the heatmap");
        };
        assert_eq!(view.matrix[0][0], 1.0);
        assert_eq!(view.matrix[1][1], 1.0);
        assert_eq!(view.matrix[0][1], view.matrix[1][0]);
        assert!(view.matrix[0][1] > 0.9, "Sales and Price are nearly linear here");
    }

    #[test]
    fn season_bars_keep_encounter_order() {
        let report = EdaReport::build(&sample_frame()).unwrap();
        let EdaView::SeasonSales(bars) = &report.views[2] else {
            panic!("third view must be season bars");
        };
        let names: Vec<&str> = bars.bars.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["Winter", "Summer", "Monsoon"]);
        assert_eq!(bars.bars[0].1, 9.0);
    }
}
