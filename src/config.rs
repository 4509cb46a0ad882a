//! Run configuration.
//!
//! Everything has a default matching the website's asset layout; the CLI
//! overrides individual fields.

use std::path::PathBuf;

use crate::text::{DEFAULT_FONT_PATH, DEFAULT_FONT_SIZE};

/// Seed for the shared random stream.
pub const DEFAULT_SEED: u64 = 42;

/// Where and how a catalog run writes its images.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the catalog's relative paths are resolved against.
    pub output_root: PathBuf,
    /// Seed for jitter, texture and sparkle placement.
    pub seed: u64,
    /// TrueType font for labels. Falls back to a built-in bitmap font.
    pub font_path: PathBuf,
    /// Label pixel height.
    pub font_size: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from("."),
            seed: DEFAULT_SEED,
            font_path: PathBuf::from(DEFAULT_FONT_PATH),
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

impl Config {
    pub fn images_dir(&self) -> PathBuf {
        self.output_root.join("images")
    }

    pub fn blog_dir(&self) -> PathBuf {
        self.images_dir().join("blog")
    }

    pub fn gallery_dir(&self) -> PathBuf {
        self.images_dir().join("gallery")
    }
}
