//! # Gem Placeholders
//!
//! Procedural placeholder imagery for a gemology workshop website: cut gems,
//! rough stones and jewelry pieces over soft gradients, each captioned and
//! saved as a JPEG.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use gem_placeholders::{colour::Palette, config::Config, pipeline::Studio};
//!
//! let config = Config::default();
//! let mut studio = Studio::new(&config);
//!
//! let ruby = Palette::from_hex(&["#1a0a0a", "#3d0c0c", "#c0392b"])?;
//! studio.make_gem_image(Path::new("images/rubino.jpg"), (600, 600), &ruby, "Rubino", 6, 135.0)?;
//!
//! # Ok::<(), gem_placeholders::PlaceholderError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`art`] | Gradient, facet, rough stone, jewelry and sparkle drawing |
//! | [`text`] | Label overlay with TrueType or built-in bitmap font |
//! | [`pipeline`] | Per-archetype composition and JPEG output |
//! | [`catalog`] | The website's image list |
//! | [`colour`] | Hex parsing and palettes |
//! | [`config`] | Run configuration |
//! | [`error`] | Error types |

pub mod art;
pub mod catalog;
pub mod colour;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod text;

// Re-exports for convenience
pub use catalog::{generate_catalog, CatalogEntry};
pub use config::Config;
pub use error::PlaceholderError;
pub use pipeline::Studio;
