//! SVG rendering of glyph descriptors
//!
//! Faces are drawn in a `0 0 100 100` view box. Each descriptor becomes one
//! element centred on its anchor:
//! - circle: `<circle>` with radius `size / 2`
//! - square: `<rect>` of side `size`
//! - triangle: apex-up `<polygon>` inscribed in the same square

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::builder::{Face, GlyphDescriptor};
use crate::shape::ShapeCategory;

/// SVG output options
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SvgOptions {
    /// Rendered width in pixels
    pub width: u32,
    /// Rendered height in pixels
    pub height: u32,
    /// Optional `<title>` element
    pub title: Option<String>,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            width: 200,
            height: 200,
            title: None,
        }
    }
}

impl SvgOptions {
    /// Square output of the given pixel size
    pub fn square(size: u32) -> Self {
        Self {
            width: size,
            height: size,
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// SVG element for a single descriptor
pub fn render_descriptor(d: &GlyphDescriptor) -> String {
    let half = d.size / 2.0;
    let fill = d.fill.to_hex();
    match d.shape {
        ShapeCategory::Circle => format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            d.x, d.y, half, fill
        ),
        ShapeCategory::Square => format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            d.x - half,
            d.y - half,
            d.size,
            d.size,
            fill
        ),
        ShapeCategory::Triangle => format!(
            r#"<polygon points="{},{} {},{} {},{}" fill="{}"/>"#,
            d.x,
            d.y - half,
            d.x - half,
            d.y + half,
            d.x + half,
            d.y + half,
            fill
        ),
    }
}

/// Complete SVG document for a face
pub fn render_face(face: &Face, options: &SvgOptions) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 100 100">"#,
        options.width, options.height
    );
    if let Some(title) = &options.title {
        let _ = writeln!(out, "  <title>{}</title>", escape_text(title));
    }
    for descriptor in &face.descriptors {
        let _ = writeln!(out, "  {}", render_descriptor(descriptor));
    }
    out.push_str("</svg>\n");
    out
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
