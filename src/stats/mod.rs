//! Stats module - descriptive statistics and EDA report assembly

mod calculator;
mod eda;

pub use calculator::{BoxSummary, ColumnStats, Histogram, StatsCalculator};
pub use eda::{
    BoxPlotView, CategoryBars, CorrelationView, EdaError, EdaReport, EdaView, HistogramPanel,
};
