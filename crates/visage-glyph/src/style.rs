//! Glyph style table
//!
//! The size, anchor points and fill color of every facial feature live in
//! one ordered table. Feature order is the column order: the first column
//! drives the face outline, the second the ears, and so on.
//!
//! The default table draws into a 100x100 face-centric coordinate space:
//!
//! | feature | size | anchors                                  | color   |
//! |---------|------|------------------------------------------|---------|
//! | face    | 40   | (50,50)                                  | #FFE5B4 |
//! | ears    | 10   | (25,50),(75,50); (33,50),(67,50) if the face is a triangle | orange |
//! | eyes    | 6    | (45,45),(55,45)                          | black   |
//! | nose    | 6    | (50,53)                                  | brown   |
//! | mouth   | 8    | (50,63)                                  | red     |
//!
//! Styles can be loaded from TOML or JSON and must pass `validate()`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{GlyphError, GlyphResult, FEATURE_COUNT};
use crate::shape::ShapeCategory;

/// Facial feature, in column order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureRole {
    Face,
    Ears,
    Eyes,
    Nose,
    Mouth,
}

impl FeatureRole {
    /// All features, in column order
    pub const ALL: [FeatureRole; FEATURE_COUNT] = [
        FeatureRole::Face,
        FeatureRole::Ears,
        FeatureRole::Eyes,
        FeatureRole::Nose,
        FeatureRole::Mouth,
    ];

    /// Column ordinal driving this feature
    pub fn ordinal(&self) -> usize {
        match self {
            FeatureRole::Face => 0,
            FeatureRole::Ears => 1,
            FeatureRole::Eyes => 2,
            FeatureRole::Nose => 3,
            FeatureRole::Mouth => 4,
        }
    }

    /// Feature for a column ordinal
    pub fn from_ordinal(ordinal: usize) -> Option<Self> {
        Self::ALL.get(ordinal).copied()
    }

    pub fn name(&self) -> &'static str {
        match self {
            FeatureRole::Face => "face",
            FeatureRole::Ears => "ears",
            FeatureRole::Eyes => "eyes",
            FeatureRole::Nose => "nose",
            FeatureRole::Mouth => "mouth",
        }
    }
}

impl fmt::Display for FeatureRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A point in face-centric coordinates (0..100 on both axes)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Drawing parameters for one feature
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeatureStyle {
    /// Which feature this entry describes
    pub role: FeatureRole,
    /// Shape size in face units
    pub size: f64,
    /// One anchor per drawn instance (two ears, two eyes)
    pub anchors: Vec<Point>,
    /// Anchors used instead when the face outline is a triangle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triangle_face_anchors: Option<Vec<Point>>,
    /// Fill color
    pub fill: Color,
}

impl FeatureStyle {
    /// Anchors to use given the shape of the face outline
    pub fn anchors_for(&self, face_shape: ShapeCategory) -> &[Point] {
        match (&self.triangle_face_anchors, face_shape) {
            (Some(anchors), ShapeCategory::Triangle) => anchors,
            _ => &self.anchors,
        }
    }

    fn single(role: FeatureRole, size: f64, at: Point, fill: Color) -> Self {
        Self {
            role,
            size,
            anchors: vec![at],
            triangle_face_anchors: None,
            fill,
        }
    }
}

/// Ordered table of feature styles, one entry per feature
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GlyphStyle {
    pub features: Vec<FeatureStyle>,
}

impl Default for GlyphStyle {
    fn default() -> Self {
        Self {
            features: vec![
                FeatureStyle::single(FeatureRole::Face, 40.0, Point::new(50.0, 50.0), Color::SKIN),
                FeatureStyle {
                    role: FeatureRole::Ears,
                    size: 10.0,
                    anchors: vec![Point::new(25.0, 50.0), Point::new(75.0, 50.0)],
                    triangle_face_anchors: Some(vec![
                        Point::new(33.0, 50.0),
                        Point::new(67.0, 50.0),
                    ]),
                    fill: Color::ORANGE,
                },
                FeatureStyle {
                    role: FeatureRole::Eyes,
                    size: 6.0,
                    anchors: vec![Point::new(45.0, 45.0), Point::new(55.0, 45.0)],
                    triangle_face_anchors: None,
                    fill: Color::BLACK,
                },
                FeatureStyle::single(FeatureRole::Nose, 6.0, Point::new(50.0, 53.0), Color::BROWN),
                FeatureStyle::single(FeatureRole::Mouth, 8.0, Point::new(50.0, 63.0), Color::RED),
            ],
        }
    }
}

impl GlyphStyle {
    /// Load a style from a TOML string and validate it
    pub fn from_toml(toml_str: &str) -> GlyphResult<Self> {
        let style: Self = toml::from_str(toml_str)?;
        style.validate()?;
        Ok(style)
    }

    /// Serialize the style to TOML
    pub fn to_toml(&self) -> GlyphResult<String> {
        toml::to_string_pretty(self).map_err(|e| GlyphError::StyleParse(e.to_string()))
    }

    /// Load a style from a JSON string and validate it
    pub fn from_json(json_str: &str) -> GlyphResult<Self> {
        let style: Self = serde_json::from_str(json_str)?;
        style.validate()?;
        Ok(style)
    }

    /// Serialize the style to JSON
    pub fn to_json(&self) -> GlyphResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that every feature appears once, in column order, with a
    /// positive size and at least one anchor
    pub fn validate(&self) -> GlyphResult<()> {
        if self.features.len() != FEATURE_COUNT {
            return Err(GlyphError::InvalidStyle(format!(
                "expected {} features, found {}",
                FEATURE_COUNT,
                self.features.len()
            )));
        }

        for (expected, feature) in FeatureRole::ALL.iter().zip(&self.features) {
            if feature.role != *expected {
                return Err(GlyphError::InvalidStyle(format!(
                    "feature {} must be {}, found {}",
                    expected.ordinal(),
                    expected,
                    feature.role
                )));
            }
            if !(feature.size.is_finite() && feature.size > 0.0) {
                return Err(GlyphError::InvalidStyle(format!(
                    "{} size must be positive",
                    feature.role
                )));
            }
            if feature.anchors.is_empty()
                || feature
                    .triangle_face_anchors
                    .as_ref()
                    .is_some_and(|a| a.is_empty())
            {
                return Err(GlyphError::InvalidStyle(format!(
                    "{} needs at least one anchor",
                    feature.role
                )));
            }
        }

        Ok(())
    }

    /// Style entry for a feature
    pub fn feature(&self, role: FeatureRole) -> Option<&FeatureStyle> {
        self.features.iter().find(|f| f.role == role)
    }
}
