//! # Image Pipeline
//!
//! Composes the art routines into finished files:
//!
//! ```text
//! gradient → shape → sparkles → label → blur → JPEG (q85) → disk
//! ```
//!
//! | Archetype | Gradient angle | Shape | Sparkles | Blur σ |
//! |-----------|----------------|-------|----------|--------|
//! | Gem | caller (135 default) | facets r=min/3 | 20 | 1.0 |
//! | Rough stone | 160 | rough stone r=min/3 | 0 | 1.0 |
//! | Jewelry | 120 | ring / necklace / earring | 10 | 0.5 |

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use imageproc::filter::gaussian_blur_f32;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::art::facets::render_facets;
use crate::art::gradient::render_gradient;
use crate::art::jewelry::{render_jewelry, JewelryShape};
use crate::art::rough_stone::render_rough_stone;
use crate::art::sparkle::add_sparkles;
use crate::art::Canvas;
use crate::colour::Palette;
use crate::config::Config;
use crate::error::{PlaceholderError, Result};
use crate::text::{add_label, LabelFont};

pub const JPEG_QUALITY: u8 = 85;

/// Gradient angle for gems when the caller has no preference.
pub const DEFAULT_GEM_ANGLE: f32 = 135.0;
const ROUGH_STONE_ANGLE: f32 = 160.0;
const JEWELRY_ANGLE: f32 = 120.0;

const GEM_SPARKLES: usize = 20;
const JEWELRY_SPARKLES: usize = 10;

const GEM_BLUR: f32 = 1.0;
const ROUGH_STONE_BLUR: f32 = 1.0;
const JEWELRY_BLUR: f32 = 0.5;

/// Shared state for a run: the random stream and the label font.
///
/// One studio renders a whole catalog so every image draws from the same
/// seeded stream, in catalog order.
pub struct Studio {
    rng: StdRng,
    font: LabelFont,
    root: PathBuf,
}

impl Studio {
    /// Seed the random stream and load the label font from `config`.
    pub fn new(config: &Config) -> Self {
        let font = LabelFont::load(&config.font_path, config.font_size);
        Self::with_font(config, font)
    }

    pub fn with_font(config: &Config, font: LabelFont) -> Self {
        Self {
            rng: StdRng::seed_from_u64(config.seed),
            font,
            root: config.output_root.clone(),
        }
    }

    pub fn font(&self) -> &LabelFont {
        &self.font
    }

    /// Cut gem: faceted disc over a gradient.
    pub fn make_gem_image(
        &mut self,
        path: &Path,
        size: (u32, u32),
        palette: &Palette,
        label: &str,
        facets: usize,
        angle: f32,
    ) -> Result<()> {
        let (w, h) = size;
        log::debug!("gem {}: {w}x{h}, {facets} facets, {angle}°", path.display());

        let mut canvas = render_gradient(w, h, palette.start, palette.end, angle);
        let centre = ((w / 2) as f32, (h / 2) as f32);
        let radius = (w.min(h) / 3) as f32;
        render_facets(&mut canvas, &mut self.rng, centre, radius, facets, palette.accent(), palette.start);
        add_sparkles(&mut canvas, &mut self.rng, GEM_SPARKLES);
        add_label(&mut canvas, &self.font, label);

        self.finish(canvas, GEM_BLUR, path)
    }

    /// Uncut stone: irregular silhouette, no sparkles.
    pub fn make_rough_stone_image(
        &mut self,
        path: &Path,
        size: (u32, u32),
        palette: &Palette,
        label: &str,
    ) -> Result<()> {
        let (w, h) = size;
        log::debug!("rough stone {}: {w}x{h}", path.display());

        let mut canvas = render_gradient(w, h, palette.start, palette.end, ROUGH_STONE_ANGLE);
        let centre = ((w / 2) as f32, (h / 2) as f32);
        let radius = (w.min(h) / 3) as f32;
        render_rough_stone(&mut canvas, &mut self.rng, centre, radius, palette.accent(), palette.start);
        add_label(&mut canvas, &self.font, label);

        self.finish(canvas, ROUGH_STONE_BLUR, path)
    }

    /// Jewelry piece with lighter blur.
    pub fn make_jewelry_image(
        &mut self,
        path: &Path,
        size: (u32, u32),
        palette: &Palette,
        label: &str,
        shape: JewelryShape,
    ) -> Result<()> {
        let (w, h) = size;
        log::debug!("jewelry {}: {w}x{h}, {shape}", path.display());

        let mut canvas = render_gradient(w, h, palette.start, palette.end, JEWELRY_ANGLE);
        render_jewelry(&mut canvas, &mut self.rng, palette, shape);
        add_sparkles(&mut canvas, &mut self.rng, JEWELRY_SPARKLES);
        add_label(&mut canvas, &self.font, label);

        self.finish(canvas, JEWELRY_BLUR, path)
    }

    fn finish(&self, canvas: Canvas, sigma: f32, path: &Path) -> Result<()> {
        let blurred = gaussian_blur_f32(&canvas, sigma);
        write_jpeg(&blurred, path)?;
        println!("  Created: {}", self.display_path(path).display());
        Ok(())
    }

    /// Path relative to the output root, for progress lines.
    fn display_path<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }
}

/// Encode as JPEG and write, creating parent directories as needed.
pub fn write_jpeg(canvas: &Canvas, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| PlaceholderError::io(parent, e))?;
    }

    let file = File::create(path).map_err(|e| PlaceholderError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY).encode_image(canvas)?;
    writer.flush().map_err(|e| PlaceholderError::io(path, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use tempfile::tempdir;

    fn studio(root: &Path) -> Studio {
        let config = Config {
            output_root: root.to_path_buf(),
            ..Config::default()
        };
        Studio::with_font(&config, LabelFont::fallback(16.0))
    }

    fn ruby() -> Palette {
        Palette::from_hex(&["#1a0a0a", "#3d0c0c", "#c0392b"]).unwrap()
    }

    #[test]
    fn test_write_jpeg_creates_parents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("out.jpg");
        let canvas = Canvas::from_pixel(8, 8, Rgb([10, 20, 30]));
        write_jpeg(&canvas, &path).unwrap();

        let img = image::open(&path).unwrap();
        assert_eq!((img.width(), img.height()), (8, 8));
    }

    #[test]
    fn test_write_jpeg_unwritable_path_errors() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, b"x").unwrap();
        let canvas = Canvas::new(4, 4);
        let err = write_jpeg(&canvas, &blocker.join("child.jpg")).unwrap_err();
        assert!(matches!(err, PlaceholderError::Io { .. }));
    }

    #[test]
    fn test_rough_stone_image() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("images").join("before-1.jpg");
        studio(dir.path())
            .make_rough_stone_image(&path, (600, 400), &ruby(), "Rubino Grezzo")
            .unwrap();

        let img = image::open(&path).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (600, 400));
        // Stone body near the centre is close to the accent
        let px = img.get_pixel(300, 200);
        assert!(px[0] > 120, "expected reddish stone body, got {px:?}");
    }

    #[test]
    fn test_display_path_relative_to_root() {
        let dir = tempdir().unwrap();
        let s = studio(dir.path());
        let full = dir.path().join("images").join("x.jpg");
        assert_eq!(s.display_path(&full), Path::new("images/x.jpg"));
        assert_eq!(s.display_path(Path::new("/elsewhere/y.jpg")), Path::new("/elsewhere/y.jpg"));
    }
}
