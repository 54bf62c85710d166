//! Summary statistics for a numeric column
//!
//! Provides the per-column record consumed by the statistics table and the
//! glyph builder:
//! - Min, max, range, sum
//! - Mean, population variance, standard deviation
//! - Mode and the three quartiles

use serde::{Deserialize, Serialize};

use crate::column::NumericColumn;
use crate::error::StatsResult;
use crate::mode::{mode, Mode};
use crate::quantile::quartiles;

/// Descriptive statistics for one column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnStatistics {
    /// Number of values
    pub count: usize,
    /// Minimum value
    pub min: f64,
    /// Maximum value
    pub max: f64,
    /// max - min
    pub range: f64,
    /// Arithmetic mean
    pub mean: f64,
    /// Most frequent value(s)
    pub mode: Mode,
    /// First quartile (25th percentile)
    pub q1: f64,
    /// Median (50th percentile)
    pub q2: f64,
    /// Third quartile (75th percentile)
    pub q3: f64,
    /// Population variance (divisor n)
    pub variance: f64,
    /// Square root of the variance
    pub std_dev: f64,
    /// Sum of all values
    pub sum: f64,
}

impl ColumnStatistics {
    /// Filter non-finite values out of `data`, then compute statistics
    ///
    /// Fails with `EmptyColumn` when nothing finite remains.
    pub fn from_data(data: &[f64]) -> StatsResult<Self> {
        Ok(compute_statistics(&NumericColumn::from_raw(data)?))
    }

    /// Median (alias for `q2`)
    pub fn median(&self) -> f64 {
        self.q2
    }

    /// Interquartile range (Q3 - Q1)
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Sum of the values
pub fn sum(column: &NumericColumn) -> f64 {
    column.values().iter().sum()
}

/// Arithmetic mean
pub fn mean(column: &NumericColumn) -> f64 {
    sum(column) / column.len() as f64
}

/// Population variance (divisor n) around a precomputed mean
pub fn population_variance(column: &NumericColumn, mean: f64) -> f64 {
    let values = column.values();
    values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / values.len() as f64
}

/// Compute every statistic for a column
///
/// The column is non-empty by construction, so this cannot fail.
pub fn compute_statistics(column: &NumericColumn) -> ColumnStatistics {
    let sorted = column.sorted();
    let count = column.len();

    let sum = sum(column);
    let mean = mean(column);
    let variance = population_variance(column, mean);

    let min = sorted[0];
    let max = sorted[count - 1];

    // Non-empty sorted input and constant probabilities: these never fail.
    let (q1, q2, q3) = quartiles(&sorted).unwrap_or((min, min, max));
    let mode = mode(column.values()).unwrap_or(Mode::Single(min));

    tracing::debug!(count, mean, variance, q1, q2, q3, "computed column statistics");

    ColumnStatistics {
        count,
        min,
        max,
        range: max - min,
        mean,
        mode,
        q1,
        q2,
        q3,
        variance,
        std_dev: variance.sqrt(),
        sum,
    }
}
