//! In-memory dataset and per-column summaries

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use visage_stats::{compute_statistics, ColumnStatistics, NumericColumn};

use crate::reader::{IoError, IoResult};
use crate::schema::DataSchema;

/// Number of columns a glyph encodes
pub const REQUIRED_COLUMNS: usize = 5;

/// A parsed table of numeric cells
///
/// `None` marks a cell that was excluded as non-numeric.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    schema: DataSchema,
    rows: Vec<Vec<Option<f64>>>,
}

impl Dataset {
    /// Create a dataset; every row must have one cell per schema column
    pub fn new(schema: DataSchema, rows: Vec<Vec<Option<f64>>>) -> IoResult<Self> {
        let width = schema.num_columns();
        if let Some(i) = rows.iter().position(|row| row.len() != width) {
            return Err(IoError::InvalidFormat(format!(
                "row {} has {} cells, expected {}",
                i + 1,
                rows[i].len(),
                width
            )));
        }
        Ok(Self { schema, rows })
    }

    pub fn schema(&self) -> &DataSchema {
        &self.schema
    }

    pub fn rows(&self) -> &[Vec<Option<f64>>] {
        &self.rows
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_columns(&self) -> usize {
        self.schema.num_columns()
    }

    /// Fail unless the dataset has exactly `expected` columns
    pub fn require_column_count(&self, expected: usize) -> IoResult<()> {
        let found = self.num_columns();
        if found != expected {
            return Err(IoError::UnsupportedColumnCount { found, expected });
        }
        Ok(())
    }

    /// Raw cells of one column, `None` where excluded
    pub fn cells(&self, index: usize) -> impl Iterator<Item = Option<f64>> + '_ {
        self.rows.iter().map(move |row| row.get(index).copied().flatten())
    }

    /// Numeric values of a column
    ///
    /// Excluded cells are dropped and counted in `NumericColumn::excluded`.
    pub fn numeric_column(&self, index: usize) -> IoResult<NumericColumn> {
        let name = self
            .schema
            .columns
            .get(index)
            .map(|c| c.name.clone())
            .ok_or_else(|| IoError::ColumnNotFound(format!("#{}", index)))?;

        NumericColumn::from_cells(self.cells(index)).map_err(|source| IoError::Statistics {
            column: name,
            source,
        })
    }

    /// Numeric values of a column looked up by name
    pub fn numeric_column_by_name(&self, name: &str) -> IoResult<NumericColumn> {
        let index = self
            .schema
            .column_index(name)
            .ok_or_else(|| IoError::ColumnNotFound(name.to_string()))?;
        self.numeric_column(index)
    }

    /// Statistics for every column, in column order
    ///
    /// Fails on the first column with no numeric values; no placeholder
    /// statistics are produced.
    pub fn summarize(&self) -> IoResult<DatasetSummary> {
        let mut columns = Vec::with_capacity(self.num_columns());
        for (index, descriptor) in self.schema.columns.iter().enumerate() {
            let column = self.numeric_column(index)?;
            let stats = compute_statistics(&column);
            tracing::debug!(column = %descriptor.name, mean = stats.mean, "summarized column");
            columns.push((descriptor.name.clone(), stats));
        }
        Ok(DatasetSummary { columns })
    }

    /// Rows formatted for display; excluded cells are empty strings
    pub fn display_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map(|v| v.to_string()).unwrap_or_default())
                    .collect()
            })
            .collect()
    }
}

/// Per-column statistics in column order
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSummary {
    columns: Vec<(String, ColumnStatistics)>,
}

impl DatasetSummary {
    /// Statistics for a named column
    pub fn get(&self, name: &str) -> Option<&ColumnStatistics> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, stats)| stats)
    }

    /// (name, statistics) pairs in column order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColumnStatistics)> {
        self.columns.iter().map(|(n, s)| (n.as_str(), s))
    }

    /// Statistics only, in column order (ordinal = feature)
    pub fn statistics(&self) -> Vec<ColumnStatistics> {
        self.columns.iter().map(|(_, s)| s.clone()).collect()
    }

    pub fn names(&self) -> Vec<&str> {
        self.columns.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

// Serialized as a JSON object keyed by column name, in column order.
impl Serialize for DatasetSummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (name, stats) in &self.columns {
            map.serialize_entry(name, stats)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ColumnDescriptor, ColumnType};
    use visage_stats::StatsError;

    fn dataset(names: &[&str], rows: Vec<Vec<Option<f64>>>) -> Dataset {
        let columns = names
            .iter()
            .map(|n| ColumnDescriptor::new(*n, ColumnType::Float64))
            .collect();
        let n = rows.len();
        Dataset::new(DataSchema::new(columns, n), rows).unwrap()
    }

    #[test]
    fn test_new_rejects_ragged_rows() {
        let schema = DataSchema::new(vec![ColumnDescriptor::new("a", ColumnType::Int64)], 2);
        let err = Dataset::new(schema, vec![vec![Some(1.0)], vec![]]).unwrap_err();
        assert!(matches!(err, IoError::InvalidFormat(_)));
    }

    #[test]
    fn test_numeric_column_drops_excluded() {
        let ds = dataset(
            &["a", "b"],
            vec![
                vec![Some(1.0), None],
                vec![None, Some(2.0)],
                vec![Some(3.0), Some(4.0)],
            ],
        );
        let a = ds.numeric_column(0).unwrap();
        assert_eq!(a.values(), &[1.0, 3.0]);
        assert_eq!(a.excluded(), 1);
        assert_eq!(ds.numeric_column_by_name("b").unwrap().values(), &[2.0, 4.0]);
        assert!(matches!(
            ds.numeric_column_by_name("c"),
            Err(IoError::ColumnNotFound(_))
        ));
    }

    #[test]
    fn test_summarize_preserves_column_order() {
        let ds = dataset(
            &["z", "a"],
            vec![vec![Some(1.0), Some(10.0)], vec![Some(3.0), Some(30.0)]],
        );
        let summary = ds.summarize().unwrap();
        assert_eq!(summary.names(), vec!["z", "a"]);
        assert_eq!(summary.get("a").unwrap().mean, 20.0);
        assert_eq!(summary.statistics()[0].mean, 2.0);
    }

    #[test]
    fn test_summarize_fails_on_empty_column() {
        let ds = dataset(&["ok", "empty"], vec![vec![Some(1.0), None]]);
        match ds.summarize() {
            Err(IoError::Statistics { column, source }) => {
                assert_eq!(column, "empty");
                assert_eq!(source, StatsError::EmptyColumn);
            }
            other => panic!("expected statistics error, got {:?}", other),
        }
    }

    #[test]
    fn test_require_column_count() {
        let ds = dataset(&["a", "b"], vec![vec![Some(1.0), Some(2.0)]]);
        assert!(ds.require_column_count(2).is_ok());
        assert!(matches!(
            ds.require_column_count(REQUIRED_COLUMNS),
            Err(IoError::UnsupportedColumnCount {
                found: 2,
                expected: 5
            })
        ));
    }

    #[test]
    fn test_display_rows_blank_for_excluded() {
        let ds = dataset(&["a", "b"], vec![vec![Some(1.5), None]]);
        assert_eq!(ds.display_rows(), vec![vec!["1.5".to_string(), String::new()]]);
    }
}
