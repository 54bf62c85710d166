//! Numeric columns
//!
//! A `NumericColumn` is the only input the statistics engine accepts. It is
//! guaranteed non-empty and free of NaN/infinite values, so everything
//! computed from it is well defined.
//!
//! Values that are not numeric are excluded from the column, never coerced
//! to zero. The number of excluded entries is kept for reporting.

use serde::Serialize;

use crate::error::{StatsError, StatsResult};

/// A non-empty, ordered sequence of finite values
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericColumn {
    /// Values in input order
    values: Vec<f64>,
    /// Number of raw entries dropped as non-numeric
    excluded: usize,
}

impl NumericColumn {
    /// Build a column from values that are already known to be finite
    ///
    /// Fails with `EmptyColumn` on empty input and `NonFinite` on the first
    /// NaN or infinite value.
    pub fn new(values: Vec<f64>) -> StatsResult<Self> {
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(StatsError::NonFinite { index });
        }
        if values.is_empty() {
            return Err(StatsError::EmptyColumn);
        }
        Ok(Self {
            values,
            excluded: 0,
        })
    }

    /// Build a column from cells, `None` marking an excluded cell
    ///
    /// Non-finite values are excluded as well. Every excluded cell is
    /// counted in `excluded()`.
    pub fn from_cells<I>(cells: I) -> StatsResult<Self>
    where
        I: IntoIterator<Item = Option<f64>>,
    {
        let mut values = Vec::new();
        let mut excluded = 0;
        for cell in cells {
            match cell.filter(|v| v.is_finite()) {
                Some(v) => values.push(v),
                None => excluded += 1,
            }
        }
        let mut column = Self::new(values)?;
        column.excluded = excluded;
        Ok(column)
    }

    /// Build a column from raw values, dropping NaN and infinities
    pub fn from_raw(raw: &[f64]) -> StatsResult<Self> {
        Self::from_cells(raw.iter().copied().map(Some))
    }

    /// Build a column from raw text cells
    ///
    /// Each cell goes through `parse_value`; cells it rejects are excluded.
    pub fn parse<S: AsRef<str>>(raw: &[S]) -> StatsResult<Self> {
        Self::from_cells(raw.iter().map(|s| parse_value(s.as_ref())))
    }

    /// Values in input order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of values (always at least one)
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; present for API symmetry with slices
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of raw entries excluded while building the column
    pub fn excluded(&self) -> usize {
        self.excluded
    }

    /// A sorted copy of the values (ascending)
    pub fn sorted(&self) -> Vec<f64> {
        let mut sorted = self.values.clone();
        sorted.sort_by(f64::total_cmp);
        sorted
    }
}

impl TryFrom<Vec<f64>> for NumericColumn {
    type Error = StatsError;

    fn try_from(values: Vec<f64>) -> StatsResult<Self> {
        Self::new(values)
    }
}

/// Parse one cell as a finite number
///
/// Surrounding whitespace is ignored. Returns `None` for text, empty cells
/// and values that parse to NaN or an infinity.
pub fn parse_value(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty() {
        assert_eq!(NumericColumn::new(vec![]), Err(StatsError::EmptyColumn));
    }

    #[test]
    fn test_new_rejects_non_finite() {
        let err = NumericColumn::new(vec![1.0, f64::NAN]).unwrap_err();
        assert_eq!(err, StatsError::NonFinite { index: 1 });
    }

    #[test]
    fn test_from_raw_excludes_nan() {
        let column = NumericColumn::from_raw(&[1.0, f64::NAN, 3.0, f64::INFINITY]).unwrap();
        assert_eq!(column.values(), &[1.0, 3.0]);
        assert_eq!(column.excluded(), 2);
    }

    #[test]
    fn test_from_raw_all_missing() {
        let err = NumericColumn::from_raw(&[f64::NAN, f64::NAN]).unwrap_err();
        assert_eq!(err, StatsError::EmptyColumn);
    }

    #[test]
    fn test_from_cells_counts_missing() {
        let column =
            NumericColumn::from_cells([Some(2.0), None, Some(f64::NAN), Some(5.0)]).unwrap();
        assert_eq!(column.values(), &[2.0, 5.0]);
        assert_eq!(column.excluded(), 2);
    }

    #[test]
    fn test_parse_excludes_text_instead_of_zeroing() {
        let column = NumericColumn::parse(&["4", " 2.5 ", "abc", "", "-1"]).unwrap();
        assert_eq!(column.values(), &[4.0, 2.5, -1.0]);
        assert_eq!(column.excluded(), 2);
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value(" 3.5 "), Some(3.5));
        assert_eq!(parse_value("1e3"), Some(1000.0));
        assert_eq!(parse_value("NaN"), None);
        assert_eq!(parse_value("inf"), None);
        assert_eq!(parse_value("n/a"), None);
        assert_eq!(parse_value(""), None);
    }

    #[test]
    fn test_sorted_keeps_original_order() {
        let column = NumericColumn::new(vec![3.0, 1.0, 2.0]).unwrap();
        assert_eq!(column.sorted(), vec![1.0, 2.0, 3.0]);
        assert_eq!(column.values(), &[3.0, 1.0, 2.0]);
    }
}
