//! Shape classification
//!
//! A value is assigned the shape of the quartile it lies closest to:
//!
//! | quartile | shape    |
//! |----------|----------|
//! | Q1       | circle   |
//! | Q2       | square   |
//! | Q3       | triangle |
//!
//! Distances are compared strictly, scanning circle, square, triangle in
//! that order, so an exact tie goes to the earlier shape.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GlyphError;

/// Glyph shape category
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeCategory {
    Circle,
    Square,
    Triangle,
}

impl ShapeCategory {
    /// All shapes, in tie-break priority order
    pub const ALL: [ShapeCategory; 3] = [
        ShapeCategory::Circle,
        ShapeCategory::Square,
        ShapeCategory::Triangle,
    ];

    /// Lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            ShapeCategory::Circle => "circle",
            ShapeCategory::Square => "square",
            ShapeCategory::Triangle => "triangle",
        }
    }

    /// Label of the quartile this shape stands for
    pub fn quartile_label(&self) -> &'static str {
        match self {
            ShapeCategory::Circle => "Q1 (25%)",
            ShapeCategory::Square => "Q2 (50%)",
            ShapeCategory::Triangle => "Q3 (75%)",
        }
    }
}

impl fmt::Display for ShapeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeCategory {
    type Err = GlyphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "circle" => Ok(ShapeCategory::Circle),
            "square" => Ok(ShapeCategory::Square),
            "triangle" => Ok(ShapeCategory::Triangle),
            other => Err(GlyphError::InvalidStyle(format!("unknown shape: {}", other))),
        }
    }
}

/// Classify `value` by its nearest quartile
pub fn classify(value: f64, q1: f64, q2: f64, q3: f64) -> ShapeCategory {
    let candidates = [
        (ShapeCategory::Circle, (value - q1).abs()),
        (ShapeCategory::Square, (value - q2).abs()),
        (ShapeCategory::Triangle, (value - q3).abs()),
    ];

    let mut best = candidates[0];
    for candidate in &candidates[1..] {
        if candidate.1 < best.1 {
            best = *candidate;
        }
    }
    best.0
}
