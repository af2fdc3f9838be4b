//! Statistics Calculator Module
//! Descriptive statistics, histogram binning, Pearson correlation and
//! grouped aggregations over Polars columns.

use polars::prelude::*;
use statrs::statistics::Statistics;
use std::collections::HashMap;

/// Descriptive statistics for one numeric column.
#[derive(Debug, Clone)]
pub struct ColumnStats {
    pub column: String,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

/// Equal-width histogram. Bins hold (center, count).
#[derive(Debug, Clone)]
pub struct Histogram {
    pub bin_width: f64,
    pub bins: Vec<(f64, f64)>,
}

/// Five-number summary plus outliers, standard box-plot convention
/// (whiskers at the most extreme values within 1.5 IQR of the box).
#[derive(Debug, Clone)]
pub struct BoxSummary {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub whisker_low: f64,
    pub whisker_high: f64,
    pub outliers: Vec<f64>,
}

/// Handles the numeric computations behind the EDA views.
pub struct StatsCalculator;

impl StatsCalculator {
    /// Compute descriptive statistics for one column's values.
    ///
    /// Sample standard deviation (n-1 denominator); NaN when fewer than two
    /// observations, matching the single-row edge case.
    pub fn compute_descriptive_stats(column: &str, values: &[f64]) -> ColumnStats {
        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        ColumnStats {
            column: column.to_string(),
            count: values.len(),
            mean: values.mean(),
            std: values.std_dev(),
            min: values.min(),
            q25: Self::percentile(&sorted, 25.0),
            median: Self::percentile(&sorted, 50.0),
            q75: Self::percentile(&sorted, 75.0),
            max: values.max(),
        }
    }

    /// Calculate percentile using linear interpolation (NumPy compatible).
    pub fn percentile(sorted_values: &[f64], p: f64) -> f64 {
        let n = sorted_values.len();
        if n == 0 {
            return f64::NAN;
        }
        if n == 1 {
            return sorted_values[0];
        }

        let rank = (p / 100.0) * (n - 1) as f64;
        let lower = rank.floor() as usize;
        let upper = (rank.ceil() as usize).min(n - 1);
        let frac = rank - lower as f64;

        if lower == upper {
            sorted_values[lower]
        } else {
            sorted_values[lower] * (1.0 - frac) + sorted_values[upper] * frac
        }
    }

    /// Pearson correlation coefficient over paired values.
    pub fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
        let n = xs.len().min(ys.len());
        if n < 2 {
            return f64::NAN;
        }

        let mean_x = xs[..n].iter().sum::<f64>() / n as f64;
        let mean_y = ys[..n].iter().sum::<f64>() / n as f64;

        let mut cov = 0.0;
        let mut var_x = 0.0;
        let mut var_y = 0.0;
        for i in 0..n {
            let dx = xs[i] - mean_x;
            let dy = ys[i] - mean_y;
            cov += dx * dy;
            var_x += dx * dx;
            var_y += dy * dy;
        }

        let denom = (var_x * var_y).sqrt();
        if denom == 0.0 {
            return f64::NAN;
        }
        cov / denom
    }

    /// Bin values into `bin_count` equal-width bins over [min, max].
    pub fn compute_histogram(values: &[f64], bin_count: usize) -> Histogram {
        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if finite.is_empty() || bin_count == 0 {
            return Histogram {
                bin_width: 0.0,
                bins: Vec::new(),
            };
        }

        let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
        let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let span = max - min;

        if span == 0.0 {
            // All values identical; one bin holds everything.
            return Histogram {
                bin_width: 1.0,
                bins: vec![(min, finite.len() as f64)],
            };
        }

        let bin_width = span / bin_count as f64;
        let mut counts = vec![0.0f64; bin_count];
        for v in &finite {
            let idx = (((v - min) / bin_width) as usize).min(bin_count - 1);
            counts[idx] += 1.0;
        }

        let bins = counts
            .into_iter()
            .enumerate()
            .map(|(i, c)| (min + (i as f64 + 0.5) * bin_width, c))
            .collect();

        Histogram { bin_width, bins }
    }

    /// Five-number summary with 1.5 IQR whiskers and outliers.
    pub fn box_summary(values: &[f64]) -> BoxSummary {
        let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let q1 = Self::percentile(&sorted, 25.0);
        let median = Self::percentile(&sorted, 50.0);
        let q3 = Self::percentile(&sorted, 75.0);
        let iqr = q3 - q1;

        let low_fence = q1 - 1.5 * iqr;
        let high_fence = q3 + 1.5 * iqr;
        let whisker_low = sorted
            .iter()
            .copied()
            .find(|&v| v >= low_fence)
            .unwrap_or(q1);
        let whisker_high = sorted
            .iter()
            .rev()
            .copied()
            .find(|&v| v <= high_fence)
            .unwrap_or(q3);
        let outliers = sorted
            .iter()
            .copied()
            .filter(|&v| v < low_fence || v > high_fence)
            .collect();

        BoxSummary {
            q1,
            median,
            q3,
            whisker_low,
            whisker_high,
            outliers,
        }
    }

    /// Non-null values of a column cast to f64.
    pub fn numeric_values(df: &DataFrame, column: &str) -> Result<Vec<f64>, PolarsError> {
        let cast = df.column(column)?.cast(&DataType::Float64)?;
        Ok(cast
            .f64()?
            .into_iter()
            .flatten()
            .filter(|v| v.is_finite())
            .collect())
    }

    /// Values of `value_col` grouped by `group_col`, categories in order of
    /// first appearance. Null groups and non-finite values are skipped.
    pub fn values_by_group(
        df: &DataFrame,
        group_col: &str,
        value_col: &str,
    ) -> Result<Vec<(String, Vec<f64>)>, PolarsError> {
        let group_series = df.column(group_col)?;
        let value_f64 = df.column(value_col)?.cast(&DataType::Float64)?;
        let value_ca = value_f64.f64()?;

        let mut order: Vec<String> = Vec::new();
        let mut by_group: HashMap<String, Vec<f64>> = HashMap::new();

        for i in 0..df.height() {
            if let (Ok(g), Some(v)) = (group_series.get(i), value_ca.get(i)) {
                if g.is_null() || !v.is_finite() {
                    continue;
                }
                let key = g.to_string().trim_matches('"').to_string();
                if !by_group.contains_key(&key) {
                    order.push(key.clone());
                }
                by_group.entry(key).or_default().push(v);
            }
        }

        Ok(order
            .into_iter()
            .map(|key| {
                let vals = by_group.remove(&key).unwrap_or_default();
                (key, vals)
            })
            .collect())
    }

    /// Mean of `value_col` per `group_col` category, encounter order.
    pub fn mean_by_group(
        df: &DataFrame,
        group_col: &str,
        value_col: &str,
    ) -> Result<Vec<(String, f64)>, PolarsError> {
        Ok(Self::values_by_group(df, group_col, value_col)?
            .into_iter()
            .map(|(key, vals)| {
                let mean = if vals.is_empty() {
                    f64::NAN
                } else {
                    vals.iter().sum::<f64>() / vals.len() as f64
                };
                (key, mean)
            })
            .collect())
    }

    /// Format a pandas-describe style text block for the given columns.
    pub fn format_stats_block(stats: &[ColumnStats]) -> String {
        const WIDTH: usize = 14;

        let fmt = |v: f64| -> String {
            if v.is_nan() {
                "NaN".to_string()
            } else {
                format!("{v:.3}")
            }
        };

        let mut out = String::from("Descriptive Statistics\n\n");
        out.push_str(&format!("{:<8}", ""));
        for s in stats {
            out.push_str(&format!("{:>WIDTH$}", s.column));
        }
        out.push('\n');

        let rows: Vec<(&str, Vec<String>)> = vec![
            ("count", stats.iter().map(|s| s.count.to_string()).collect()),
            ("mean", stats.iter().map(|s| fmt(s.mean)).collect()),
            ("std", stats.iter().map(|s| fmt(s.std)).collect()),
            ("min", stats.iter().map(|s| fmt(s.min)).collect()),
            ("25%", stats.iter().map(|s| fmt(s.q25)).collect()),
            ("50%", stats.iter().map(|s| fmt(s.median)).collect()),
            ("75%", stats.iter().map(|s| fmt(s.q75)).collect()),
            ("max", stats.iter().map(|s| fmt(s.max)).collect()),
        ];

        for (label, values) in rows {
            out.push_str(&format!("{label:<8}"));
            for v in values {
                out.push_str(&format!("{v:>WIDTH$}"));
            }
            out.push('\n');
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_value_stats_have_nan_std() {
        let stats = StatsCalculator::compute_descriptive_stats("Sales", &[42.0]);
        assert_eq!(stats.count, 1);
        assert_eq!(stats.mean, 42.0);
        assert!(stats.std.is_nan());
        assert_eq!(stats.min, 42.0);
        assert_eq!(stats.max, 42.0);
        assert_eq!(stats.median, 42.0);
    }

    #[test]
    fn descriptive_stats_match_known_values() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let stats = StatsCalculator::compute_descriptive_stats("Price", &values);
        assert_eq!(stats.count, 8);
        assert!((stats.mean - 5.0).abs() < 1e-12);
        // Sample std of this classic sequence is ~2.138
        assert!((stats.std - 2.138089935299395).abs() < 1e-9);
        assert_eq!(stats.min, 2.0);
        assert_eq!(stats.max, 9.0);
    }

    #[test]
    fn percentile_interpolates_linearly() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert!((StatsCalculator::percentile(&sorted, 50.0) - 2.5).abs() < 1e-12);
        assert_eq!(StatsCalculator::percentile(&sorted, 0.0), 1.0);
        assert_eq!(StatsCalculator::percentile(&sorted, 100.0), 4.0);
        assert!(StatsCalculator::percentile(&[], 50.0).is_nan());
    }

    #[test]
    fn pearson_of_linear_pair_is_one() {
        let xs = [1.0, 2.0, 3.0, 4.0, 5.0];
        let ys = [2.0, 4.0, 6.0, 8.0, 10.0];
        assert!((StatsCalculator::pearson(&xs, &ys) - 1.0).abs() < 1e-12);

        let neg = [10.0, 8.0, 6.0, 4.0, 2.0];
        assert!((StatsCalculator::pearson(&xs, &neg) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn pearson_degenerate_inputs_are_nan() {
        assert!(StatsCalculator::pearson(&[1.0], &[2.0]).is_nan());
        assert!(StatsCalculator::pearson(&[3.0, 3.0], &[1.0, 2.0]).is_nan());
    }

    #[test]
    fn histogram_counts_sum_to_sample_size() {
        let values: Vec<f64> = (0..97).map(|i| i as f64 * 0.37).collect();
        let hist = StatsCalculator::compute_histogram(&values, 30);
        assert_eq!(hist.bins.len(), 30);
        let total: f64 = hist.bins.iter().map(|(_, c)| c).sum();
        assert_eq!(total, 97.0);
    }

    #[test]
    fn histogram_of_constant_values_is_one_bin() {
        let hist = StatsCalculator::compute_histogram(&[5.0, 5.0, 5.0], 30);
        assert_eq!(hist.bins.len(), 1);
        assert_eq!(hist.bins[0], (5.0, 3.0));
    }

    #[test]
    fn box_summary_flags_outliers() {
        let mut values = vec![10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0];
        values.push(100.0);
        let summary = StatsCalculator::box_summary(&values);
        assert_eq!(summary.outliers, vec![100.0]);
        assert!(summary.whisker_high <= 16.0);
        assert!(summary.q1 <= summary.median && summary.median <= summary.q3);
    }

    #[test]
    fn grouped_means_preserve_encounter_order() {
        let df = DataFrame::new(vec![
            Column::new("season".into(), vec!["Winter", "Summer", "Winter", "Monsoon"]),
            Column::new("Sales".into(), vec![10.0, 20.0, 30.0, 5.0]),
        ])
        .unwrap();

        let means = StatsCalculator::mean_by_group(&df, "season", "Sales").unwrap();
        let keys: Vec<&str> = means.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["Winter", "Summer", "Monsoon"]);
        assert_eq!(means[0].1, 20.0);
        assert_eq!(means[1].1, 20.0);
        assert_eq!(means[2].1, 5.0);
    }

    #[test]
    fn grouped_values_skip_null_groups() {
        let df = DataFrame::new(vec![
            Column::new("Company".into(), vec![Some("Acme"), None, Some("Bolt")]),
            Column::new("Price".into(), vec![1.0, 2.0, 3.0]),
        ])
        .unwrap();

        let groups = StatsCalculator::values_by_group(&df, "Company", "Price").unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0], ("Acme".to_string(), vec![1.0]));
        assert_eq!(groups[1], ("Bolt".to_string(), vec![3.0]));
    }

    #[test]
    fn stats_block_lists_every_row_label() {
        let stats = vec![
            StatsCalculator::compute_descriptive_stats("Sales", &[1.0, 2.0, 3.0]),
            StatsCalculator::compute_descriptive_stats("Price", &[4.0]),
        ];
        let block = StatsCalculator::format_stats_block(&stats);
        for label in ["count", "mean", "std", "min", "25%", "50%", "75%", "max"] {
            assert!(block.contains(label), "missing row {label}");
        }
        assert!(block.contains("Sales"));
        assert!(block.contains("NaN"));
    }
}
