//! visage-glyph - Chernoff-style glyph descriptors
//!
//! Turns per-column statistics into drawing instructions for a face whose
//! features each encode one column:
//!
//! - **Shape classifier**: maps a column's mean to the nearest of its
//!   quartiles (circle = Q1, square = median, triangle = Q3)
//! - **Glyph style**: an explicit, ordered table of feature sizes, anchors
//!   and fill colors (face, ears, eyes, nose, mouth)
//! - **Glyph builder**: combines classifications and the style table into
//!   positioned descriptors, for the whole-face view and the comparative
//!   shape-by-tier grid
//! - **SVG**: a minimal renderer for the produced descriptors
//!
//! # Feature coupling
//!
//! The ears are placed closer to the center when the face outline itself is
//! a triangle. That dependency is an explicit `face_shape` parameter of the
//! descriptor computation, not hidden state.

pub mod builder;
pub mod color;
pub mod error;
pub mod shape;
pub mod style;
pub mod svg;

pub use builder::*;
pub use color::*;
pub use error::*;
pub use shape::*;
pub use style::*;
