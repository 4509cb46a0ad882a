//! # Label Overlay
//!
//! Captions along the bottom of each image.
//!
//! ```text
//! LabelFont::load(path) ──┬── TrueType (ab_glyph) ──┐
//!                         └── Spleen bitmap ────────┴─→ TextMask → crop → blend shadow, text
//! ```
//!
//! Loading never fails: a missing or unreadable font file degrades to the
//! embedded bitmap font.

pub mod bitmap;
pub mod ttf;

use std::fs;
use std::path::Path;

use ab_glyph::FontVec;
use image::Rgb;

use crate::art::Canvas;
use crate::colour::{BLACK, LABEL_GOLD};

pub use bitmap::BitmapFont;

/// Gap between the bottom of the text and the bottom of the canvas.
pub const BOTTOM_MARGIN: i32 = 20;

/// Font used when none is configured.
pub const DEFAULT_FONT_PATH: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";

pub const DEFAULT_FONT_SIZE: f32 = 16.0;

/// Anti-aliased text coverage, 0.0 (clear) to 1.0 (solid).
#[derive(Debug, Clone, PartialEq)]
pub struct TextMask {
    pub width: usize,
    pub height: usize,
    pub data: Vec<f32>,
}

impl TextMask {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; width * height],
        }
    }

    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[y * self.width + x]
    }

    /// Add coverage at a position, ignoring anything out of bounds.
    pub fn accumulate(&mut self, x: i32, y: i32, coverage: f32) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let idx = y as usize * self.width + x as usize;
        self.data[idx] = (self.data[idx] + coverage).min(1.0);
    }

    /// Tight bounds of the inked pixels as (x, y, width, height).
    pub fn ink_bounds(&self) -> Option<(usize, usize, usize, usize)> {
        let mut min_x = usize::MAX;
        let mut min_y = usize::MAX;
        let mut max_x = 0;
        let mut max_y = 0;
        for y in 0..self.height {
            for x in 0..self.width {
                if self.get(x, y) > 0.0 {
                    min_x = min_x.min(x);
                    min_y = min_y.min(y);
                    max_x = max_x.max(x);
                    max_y = max_y.max(y);
                }
            }
        }
        (min_x != usize::MAX).then(|| (min_x, min_y, max_x - min_x + 1, max_y - min_y + 1))
    }

    /// Crop to the inked region. Blank masks are returned unchanged.
    pub fn cropped(self) -> Self {
        let Some((x0, y0, w, h)) = self.ink_bounds() else {
            return self;
        };
        let mut out = Self::new(w, h);
        for y in 0..h {
            for x in 0..w {
                out.data[y * w + x] = self.get(x0 + x, y0 + y);
            }
        }
        out
    }
}

/// A font that can always render a label.
pub enum LabelFont {
    TrueType { font: FontVec, size: f32 },
    Bitmap(BitmapFont),
}

impl LabelFont {
    /// Load the TrueType font at `path`, or fall back to the bitmap font.
    pub fn load(path: &Path, size: f32) -> Self {
        let loaded = fs::read(path)
            .map_err(|e| e.to_string())
            .and_then(ttf::parse_font);

        match loaded {
            Ok(font) => {
                log::debug!("loaded label font {}", path.display());
                Self::TrueType { font, size }
            }
            Err(e) => {
                log::warn!(
                    "label font {} unavailable ({e}), using built-in bitmap font",
                    path.display()
                );
                Self::fallback(size)
            }
        }
    }

    /// The built-in bitmap font.
    pub fn fallback(size: f32) -> Self {
        Self::Bitmap(BitmapFont::for_height(size))
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Bitmap(_))
    }

    /// Render `text` cropped to its inked bounds.
    pub fn render(&self, text: &str) -> TextMask {
        let mask = match self {
            Self::TrueType { font, size } => ttf::render_text(font, text, *size),
            Self::Bitmap(font) => font.render_text(text),
        };
        mask.cropped()
    }
}

/// Top-left corner for a `text_w`×`text_h` label: centred horizontally,
/// bottom edge [`BOTTOM_MARGIN`] above the canvas bottom.
pub fn label_origin(canvas_w: u32, canvas_h: u32, text_w: usize, text_h: usize) -> (i32, i32) {
    let x = (canvas_w as i32 - text_w as i32).div_euclid(2);
    let y = canvas_h as i32 - text_h as i32 - BOTTOM_MARGIN;
    (x, y)
}

/// Draw `text` near the bottom of the canvas with a 1px black drop shadow.
///
/// Returns the text origin and size as placed.
pub fn add_label(canvas: &mut Canvas, font: &LabelFont, text: &str) -> (i32, i32, usize, usize) {
    let mask = font.render(text);
    let (w, h) = canvas.dimensions();
    let (x, y) = label_origin(w, h, mask.width, mask.height);

    blend_mask(canvas, &mask, x + 1, y + 1, BLACK);
    blend_mask(canvas, &mask, x, y, LABEL_GOLD);

    (x, y, mask.width, mask.height)
}

/// Alpha-blend `colour` onto the canvas through the mask, clipped to the canvas.
fn blend_mask(canvas: &mut Canvas, mask: &TextMask, origin_x: i32, origin_y: i32, colour: Rgb<u8>) {
    let (w, h) = canvas.dimensions();
    for my in 0..mask.height {
        for mx in 0..mask.width {
            let coverage = mask.get(mx, my);
            if coverage <= 0.0 {
                continue;
            }
            let x = origin_x + mx as i32;
            let y = origin_y + my as i32;
            if x < 0 || y < 0 || x >= w as i32 || y >= h as i32 {
                continue;
            }
            let px = canvas.get_pixel_mut(x as u32, y as u32);
            *px = crate::colour::lerp(*px, colour, coverage);
        }
    }
}
