//! Glyph descriptor builder
//!
//! Produces the positioned shapes for a face. Two views are supported:
//!
//! - **Whole face**: every feature is classified from its own column
//!   (mean against that column's quartiles).
//! - **Comparative**: a partial face (features up to a given tier) drawn
//!   entirely in one externally chosen shape, used to preview how each
//!   shape looks at each feature.
//!
//! Only the shape of each feature is data-driven. Sizes, anchors and colors
//! come from the `GlyphStyle` table.

use serde::{Deserialize, Serialize};
use visage_stats::ColumnStatistics;

use crate::color::Color;
use crate::error::{GlyphError, GlyphResult, FEATURE_COUNT};
use crate::shape::{classify, ShapeCategory};
use crate::style::{FeatureRole, FeatureStyle, GlyphStyle};

/// Classifier input for one feature
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeatureInput {
    /// Representative value (the column mean in the whole-face view)
    pub value: f64,
    pub q1: f64,
    pub q2: f64,
    pub q3: f64,
}

impl FeatureInput {
    /// Mean and quartiles of a column
    pub fn from_statistics(stats: &ColumnStatistics) -> Self {
        Self {
            value: stats.mean,
            q1: stats.q1,
            q2: stats.q2,
            q3: stats.q3,
        }
    }

    /// Shape this input classifies to
    pub fn classify(&self) -> ShapeCategory {
        classify(self.value, self.q1, self.q2, self.q3)
    }
}

/// One positioned shape, ready to draw
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GlyphDescriptor {
    pub role: FeatureRole,
    pub shape: ShapeCategory,
    pub size: f64,
    pub x: f64,
    pub y: f64,
    pub fill: Color,
}

/// A built face: the shape picked for each feature and the descriptors
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Face {
    /// Shape per feature, in column order
    pub shapes: Vec<(FeatureRole, ShapeCategory)>,
    /// Descriptors in drawing order
    pub descriptors: Vec<GlyphDescriptor>,
}

impl Face {
    /// Shape of the face outline, if the face has any features
    pub fn face_shape(&self) -> Option<ShapeCategory> {
        self.shape_of(FeatureRole::Face)
    }

    /// Shape picked for a feature
    pub fn shape_of(&self, role: FeatureRole) -> Option<ShapeCategory> {
        self.shapes
            .iter()
            .find(|(r, _)| *r == role)
            .map(|(_, shape)| *shape)
    }

    /// Descriptors belonging to one feature
    pub fn descriptors_for(&self, role: FeatureRole) -> impl Iterator<Item = &GlyphDescriptor> {
        self.descriptors.iter().filter(move |d| d.role == role)
    }
}

/// One cell of the comparative grid
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComparativeCell {
    /// Highest feature drawn
    pub tier: FeatureRole,
    pub shape: ShapeCategory,
    pub face: Face,
}

/// Builds glyph descriptors from a style table
#[derive(Clone, Debug, Default)]
pub struct GlyphBuilder {
    style: GlyphStyle,
}

impl GlyphBuilder {
    /// Create a builder over a validated style
    pub fn new(style: GlyphStyle) -> GlyphResult<Self> {
        style.validate()?;
        Ok(Self { style })
    }

    pub fn style(&self) -> &GlyphStyle {
        &self.style
    }

    /// Descriptors for one feature
    ///
    /// `face_shape` is the shape of the face outline; it only affects
    /// features whose style has triangle-face anchors (the ears).
    pub fn feature_descriptors(
        feature: &FeatureStyle,
        shape: ShapeCategory,
        face_shape: ShapeCategory,
    ) -> Vec<GlyphDescriptor> {
        feature
            .anchors_for(face_shape)
            .iter()
            .map(|at| GlyphDescriptor {
                role: feature.role,
                shape,
                size: feature.size,
                x: at.x,
                y: at.y,
                fill: feature.fill,
            })
            .collect()
    }

    /// Whole-face view from per-column statistics, in column order
    ///
    /// Accepts between one and five columns; features beyond the last
    /// column are left out.
    pub fn whole_face(&self, columns: &[ColumnStatistics]) -> GlyphResult<Face> {
        let inputs: Vec<FeatureInput> = columns.iter().map(FeatureInput::from_statistics).collect();
        self.whole_face_from_inputs(&inputs)
    }

    /// Whole-face view from explicit classifier inputs, in column order
    pub fn whole_face_from_inputs(&self, inputs: &[FeatureInput]) -> GlyphResult<Face> {
        if inputs.is_empty() || inputs.len() > FEATURE_COUNT {
            return Err(GlyphError::UnsupportedColumnCount {
                found: inputs.len(),
                expected: FEATURE_COUNT,
            });
        }

        let shapes: Vec<ShapeCategory> = inputs.iter().map(FeatureInput::classify).collect();
        Ok(self.compose(&shapes))
    }

    /// Partial face with features up to and including `tier`, all in `shape`
    pub fn comparative_face(&self, shape: ShapeCategory, tier: FeatureRole) -> Face {
        let shapes = vec![shape; tier.ordinal() + 1];
        self.compose(&shapes)
    }

    /// Every (tier, shape) combination, tier-major
    pub fn comparative_grid(&self) -> Vec<ComparativeCell> {
        FeatureRole::ALL
            .into_iter()
            .flat_map(|tier| ShapeCategory::ALL.into_iter().map(move |shape| (tier, shape)))
            .map(|(tier, shape)| ComparativeCell {
                tier,
                shape,
                face: self.comparative_face(shape, tier),
            })
            .collect()
    }

    /// Lay out features `0..shapes.len()` with the given shapes
    fn compose(&self, shapes: &[ShapeCategory]) -> Face {
        // The outline always comes first, so the ears can key off it.
        let face_shape = shapes.first().copied().unwrap_or(ShapeCategory::Circle);

        let mut face = Face {
            shapes: Vec::with_capacity(shapes.len()),
            descriptors: Vec::new(),
        };

        for (feature, &shape) in self.style.features.iter().zip(shapes) {
            tracing::debug!(feature = %feature.role, %shape, %face_shape, "placing feature");
            face.shapes.push((feature.role, shape));
            face.descriptors
                .extend(Self::feature_descriptors(feature, shape, face_shape));
        }

        face
    }
}
