//! Classifier and builder tests driven by real column statistics

use proptest::prelude::*;
use rstest::rstest;
use visage_glyph::{
    classify, svg, FeatureRole, GlyphBuilder, GlyphError, GlyphStyle, ShapeCategory,
};
use visage_stats::ColumnStatistics;

fn column(values: &[f64]) -> ColumnStatistics {
    ColumnStatistics::from_data(values).unwrap()
}

// === Classifier ===

#[rstest]
#[case(15.0, 10.0, 20.0, 20.0, ShapeCategory::Circle)]
#[case(15.0, 10.0, 15.0, 20.0, ShapeCategory::Square)]
#[case(20.0, 10.0, 15.0, 25.0, ShapeCategory::Square)]
#[case(25.0, 10.0, 15.0, 25.0, ShapeCategory::Triangle)]
#[case(0.0, 0.0, 0.0, 0.0, ShapeCategory::Circle)]
fn test_classify_cases(
    #[case] value: f64,
    #[case] q1: f64,
    #[case] q2: f64,
    #[case] q3: f64,
    #[case] expected: ShapeCategory,
) {
    assert_eq!(classify(value, q1, q2, q3), expected);
}

proptest! {
    #[test]
    fn test_value_at_q1_is_circle(q1 in -1.0e3f64..1.0e3, d1 in 0.1f64..1.0e3, d2 in 0.1f64..1.0e3) {
        let q2 = q1 + d1;
        let q3 = q2 + d2;
        prop_assert_eq!(classify(q1, q1, q2, q3), ShapeCategory::Circle);
    }

    #[test]
    fn test_classify_picks_a_minimum_distance(
        value in -1.0e3f64..1.0e3,
        q1 in -1.0e3f64..1.0e3,
        q2 in -1.0e3f64..1.0e3,
        q3 in -1.0e3f64..1.0e3,
    ) {
        let best = (value - q1).abs().min((value - q2).abs()).min((value - q3).abs());
        let chosen = match classify(value, q1, q2, q3) {
            ShapeCategory::Circle => (value - q1).abs(),
            ShapeCategory::Square => (value - q2).abs(),
            ShapeCategory::Triangle => (value - q3).abs(),
        };
        prop_assert_eq!(chosen, best);
    }
}

// === Whole face from statistics ===

#[test]
fn test_reference_column_tie_goes_to_circle() {
    // mean 24, quartiles 20 / 20 / 30: Q1 and Q2 tie at distance 4
    let stats = column(&[10.0, 20.0, 20.0, 30.0, 40.0]);
    assert_eq!(
        classify(stats.mean, stats.q1, stats.q2, stats.q3),
        ShapeCategory::Circle
    );
}

#[test]
fn test_triangle_face_pulls_ears_in() {
    // mean 8 against quartiles 0 / 1 / 9
    let face_col = column(&[0.0, 0.0, 1.0, 9.0, 30.0]);
    // mean 7.4 against quartiles 8 / 9 / 10: circle on its own
    let ears_col = column(&[0.0, 8.0, 9.0, 10.0, 10.0]);
    let rest = column(&[1.0, 2.0, 3.0, 4.0, 5.0]);

    let face = GlyphBuilder::default()
        .whole_face(&[face_col, ears_col, rest.clone(), rest.clone(), rest])
        .unwrap();

    assert_eq!(face.face_shape(), Some(ShapeCategory::Triangle));
    assert_eq!(face.shape_of(FeatureRole::Ears), Some(ShapeCategory::Circle));
    let xs: Vec<f64> = face
        .descriptors_for(FeatureRole::Ears)
        .map(|d| d.x)
        .collect();
    assert_eq!(xs, vec![33.0, 67.0]);
}

#[test]
fn test_each_feature_uses_its_own_column() {
    let circle = column(&[0.0, 8.0, 9.0, 10.0, 10.0]);
    let square = column(&[1.0, 2.0, 9.0, 10.0, 10.0]);
    let triangle = column(&[0.0, 0.0, 1.0, 9.0, 30.0]);

    let face = GlyphBuilder::default()
        .whole_face(&[
            square.clone(),
            triangle.clone(),
            circle.clone(),
            square,
            triangle,
        ])
        .unwrap();

    let shapes: Vec<ShapeCategory> = face.shapes.iter().map(|(_, s)| *s).collect();
    assert_eq!(
        shapes,
        vec![
            ShapeCategory::Square,
            ShapeCategory::Triangle,
            ShapeCategory::Circle,
            ShapeCategory::Square,
            ShapeCategory::Triangle,
        ]
    );
    // Square face: ears stay at the outer anchors
    let xs: Vec<f64> = face
        .descriptors_for(FeatureRole::Ears)
        .map(|d| d.x)
        .collect();
    assert_eq!(xs, vec![25.0, 75.0]);
}

#[test]
fn test_too_many_columns() {
    let c = column(&[1.0, 2.0]);
    let err = GlyphBuilder::default()
        .whole_face(&vec![c; 6])
        .unwrap_err();
    assert_eq!(
        err,
        GlyphError::UnsupportedColumnCount {
            found: 6,
            expected: 5
        }
    );
}

// === Styles and rendering ===

#[test]
fn test_custom_style_changes_geometry_only() {
    let mut style = GlyphStyle::default();
    style.features[4].size = 12.0;
    let builder = GlyphBuilder::new(style).unwrap();

    let face = builder.comparative_face(ShapeCategory::Circle, FeatureRole::Mouth);
    let mouth = face.descriptors_for(FeatureRole::Mouth).next().unwrap();
    assert_eq!(mouth.size, 12.0);
    assert_eq!(mouth.shape, ShapeCategory::Circle);
}

#[test]
fn test_comparative_grid_renders() {
    let builder = GlyphBuilder::default();
    for cell in builder.comparative_grid() {
        let doc = svg::render_face(&cell.face, &svg::SvgOptions::default());
        let expected = cell.face.descriptors.len();
        let tag = match cell.shape {
            ShapeCategory::Circle => "<circle",
            ShapeCategory::Square => "<rect",
            ShapeCategory::Triangle => "<polygon",
        };
        assert_eq!(doc.matches(tag).count(), expected);
    }
}
