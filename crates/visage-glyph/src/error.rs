//! Error types for visage-glyph

use thiserror::Error;

/// Number of features a face encodes
pub const FEATURE_COUNT: usize = 5;

/// Errors raised while building glyphs or loading styles
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GlyphError {
    /// The builder was given a column count it cannot map onto features
    #[error("unsupported column count: {found} (expected {expected})")]
    UnsupportedColumnCount { found: usize, expected: usize },

    /// Style table failed validation
    #[error("invalid glyph style: {0}")]
    InvalidStyle(String),

    /// Style file could not be parsed
    #[error("failed to parse glyph style: {0}")]
    StyleParse(String),
}

/// Result type alias for glyph operations
pub type GlyphResult<T> = Result<T, GlyphError>;

impl From<toml::de::Error> for GlyphError {
    fn from(err: toml::de::Error) -> Self {
        GlyphError::StyleParse(err.to_string())
    }
}

impl From<serde_json::Error> for GlyphError {
    fn from(err: serde_json::Error) -> Self {
        GlyphError::StyleParse(err.to_string())
    }
}
