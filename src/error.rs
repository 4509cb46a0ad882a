//! # Error Types
//!
//! This module defines error types used throughout the placeholder generator.
//! Font loading is the only recoverable failure and never surfaces here.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for placeholder generation
#[derive(Debug, Error)]
pub enum PlaceholderError {
    /// Malformed hex colour string
    #[error("Invalid colour: {0}")]
    Colour(String),

    /// Palette with too few entries
    #[error("Invalid palette: {0}")]
    Palette(String),

    /// Image encoding error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Catalog serialization error
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// I/O error tied to an output path
    #[error("I/O error with {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PlaceholderError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, PlaceholderError>;
