//! Data Cleaner Module
//! Missing-value accounting and exact-duplicate removal.

use polars::prelude::*;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum CleanError {
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
}

/// Data-quality findings from one cleaning pass.
///
/// Duplicate removal keeps the first occurrence of each duplicate group and
/// preserves the original row order. It is the only mutation performed; no
/// imputation happens here.
#[derive(Debug, Clone)]
pub struct CleaningReport {
    pub missing_before: Vec<(String, usize)>,
    pub missing_after: Vec<(String, usize)>,
    pub duplicate_count: usize,
    pub rows_after: usize,
}

impl CleaningReport {
    pub fn missing_values_report(&self) -> String {
        let mut out = String::from("Missing Values Report:\nBefore Cleaning:\n");
        for (name, count) in &self.missing_before {
            out.push_str(&format!("  {name}: {count}\n"));
        }
        out.push_str("After Cleaning:\n");
        for (name, count) in &self.missing_after {
            out.push_str(&format!("  {name}: {count}\n"));
        }
        out
    }

    pub fn duplicate_rows_report(&self) -> String {
        format!(
            "Duplicate Rows Report:\nNumber of Duplicate Rows Found: {}\nAction Taken: Duplicates Removed. Remaining Rows: {}",
            self.duplicate_count, self.rows_after
        )
    }
}

/// Handles the cleaning stage of the pipeline.
pub struct DataCleaner;

impl DataCleaner {
    /// Remove exact duplicate rows (comparing all columns) and report
    /// missing-value counts before and after.
    pub fn clean(df: &DataFrame) -> Result<(DataFrame, CleaningReport), CleanError> {
        let missing_before = Self::missing_value_counts(df);

        let cleaned = df.unique_stable(None, UniqueKeepStrategy::First, None)?;
        let duplicate_count = df.height() - cleaned.height();
        let rows_after = cleaned.height();

        // Per-column null counts only change if a wholly duplicate null row
        // was among the removed ones, so they are recomputed on the result.
        let missing_after = Self::missing_value_counts(&cleaned);

        info!(
            rows_before = df.height(),
            duplicates = duplicate_count,
            rows_after,
            "cleaning pass complete"
        );

        Ok((
            cleaned,
            CleaningReport {
                missing_before,
                missing_after,
                duplicate_count,
                rows_after,
            },
        ))
    }

    /// Null-valued cell count per column, in column order.
    fn missing_value_counts(df: &DataFrame) -> Vec<(String, usize)> {
        df.get_columns()
            .iter()
            .map(|col| (col.name().to_string(), col.as_materialized_series().null_count()))
            .collect()
    }
}
