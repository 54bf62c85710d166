//! visage-stats - Descriptive statistics for glyph encoding
//!
//! This crate computes the per-column summary that drives the glyph builder:
//!
//! - **NumericColumn**: a non-empty sequence of finite values
//! - **Quantiles**: R-7 linear interpolation between order statistics
//! - **Mode**: most frequent value(s), ties kept in first-observed order
//! - **ColumnStatistics**: min, max, range, mean, mode, Q1-Q3, variance,
//!   standard deviation and sum for one column
//!
//! Every function here is pure. Computing statistics twice over the same
//! column yields identical records, including the ordering of tied modes.

pub mod column;
pub mod error;
pub mod mode;
pub mod quantile;
pub mod summary;

pub use column::*;
pub use error::*;
pub use mode::*;
pub use quantile::*;
pub use summary::*;
