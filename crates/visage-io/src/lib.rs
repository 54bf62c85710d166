//! visage-io - Table ingestion for visage
//!
//! Reads delimited text into a `Dataset` of numeric cells and summarizes
//! each column with `visage-stats`.
//!
//! # Non-numeric cells
//!
//! A cell that does not parse as a finite number is **excluded** from its
//! column. It is never coerced to zero. Excluded cells are kept as `None`
//! in the dataset rows and counted per column.
//!
//! # Column count
//!
//! Glyphs encode exactly five columns. `load_csv` enforces that at the
//! ingestion boundary and fails with `IoError::UnsupportedColumnCount`.

pub mod csv_reader;
pub mod dataset;
pub mod reader;
pub mod schema;

pub use csv_reader::*;
pub use dataset::*;
pub use reader::*;
pub use schema::*;
