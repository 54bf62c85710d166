//! Schema and column types for data representation

use serde::{Deserialize, Serialize};
use visage_stats::parse_value;

/// Schema describing the structure of a dataset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataSchema {
    /// Column descriptors, in file order
    pub columns: Vec<ColumnDescriptor>,

    /// Number of records
    pub num_records: usize,
}

impl DataSchema {
    /// Create a new schema
    pub fn new(columns: Vec<ColumnDescriptor>, num_records: usize) -> Self {
        Self {
            columns,
            num_records,
        }
    }

    /// Get column index by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Get column names
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Number of columns
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }
}

/// Descriptor for a column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Column name (header text)
    pub name: String,

    /// Inferred data type
    pub dtype: ColumnType,

    /// Cells that did not parse as finite numbers
    pub excluded: usize,
}

impl ColumnDescriptor {
    /// Create a new column descriptor
    pub fn new(name: impl Into<String>, dtype: ColumnType) -> Self {
        Self {
            name: name.into(),
            dtype,
            excluded: 0,
        }
    }

    /// Set the excluded-cell count
    pub fn with_excluded(mut self, excluded: usize) -> Self {
        self.excluded = excluded;
        self
    }
}

/// Column data type, inferred from cell text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    /// Every non-empty cell is an integer
    Int64,
    /// Every non-empty cell is a number
    Float64,
    /// Some cells are numbers, some are not
    Mixed,
    /// No cell is a number
    Text,
}

impl ColumnType {
    /// Infer the type of a column from its cells
    pub fn infer<S: AsRef<str>>(cells: &[S]) -> Self {
        let non_empty: Vec<&str> = cells
            .iter()
            .map(|s| s.as_ref().trim())
            .filter(|s| !s.is_empty())
            .collect();

        let numeric = non_empty.iter().filter(|s| parse_value(s).is_some()).count();

        if numeric == 0 {
            ColumnType::Text
        } else if numeric < non_empty.len() {
            ColumnType::Mixed
        } else if non_empty.iter().all(|s| s.parse::<i64>().is_ok()) {
            ColumnType::Int64
        } else {
            ColumnType::Float64
        }
    }

    /// Short label for tables
    pub fn name(&self) -> &'static str {
        match self {
            ColumnType::Int64 => "integer",
            ColumnType::Float64 => "float",
            ColumnType::Mixed => "mixed",
            ColumnType::Text => "text",
        }
    }
}
