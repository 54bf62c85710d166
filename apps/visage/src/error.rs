//! Error type for the visage CLI

use std::path::PathBuf;

use thiserror::Error;
use visage_glyph::GlyphError;
use visage_io::IoError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    Glyph(#[from] GlyphError),

    #[error("Column not found: {0}")]
    UnknownColumn(String),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read style file {path}: {source}")]
    ReadStyle {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;
