//! Built-in bitmap font.
//!
//! Uses the embedded Spleen 8×16 font so a label can always be drawn, even
//! when no TrueType font is installed. Characters Spleen lacks become boxes.

use spleen_font::{PSF2Font, FONT_8X16};

use super::TextMask;

pub const GLYPH_WIDTH: usize = 8;
pub const GLYPH_HEIGHT: usize = 16;

/// Spleen 8×16 with integer upscaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapFont {
    scale: usize,
}

impl BitmapFont {
    /// Pick the integer scale closest to `pixel_height`.
    pub fn for_height(pixel_height: f32) -> Self {
        let scale = (pixel_height / GLYPH_HEIGHT as f32).round() as usize;
        Self { scale: scale.max(1) }
    }

    pub fn scale(&self) -> usize {
        self.scale
    }

    /// Render one line of text. Every character advances one cell.
    pub fn render_text(&self, text: &str) -> TextMask {
        let s = self.scale;
        let count = text.chars().count().max(1);
        let mut mask = TextMask::new(count * GLYPH_WIDTH * s, GLYPH_HEIGHT * s);
        let mut spleen = PSF2Font::new(FONT_8X16).ok();

        for (i, ch) in text.chars().enumerate() {
            let utf8 = ch.to_string();
            let cell = if ch == ' ' {
                vec![false; GLYPH_WIDTH * GLYPH_HEIGHT]
            } else {
                match spleen.as_mut().and_then(|f| f.glyph_for_utf8(utf8.as_bytes())) {
                    Some(glyph) => glyph_cell(glyph),
                    None => boxed_cell(),
                }
            };
            let origin_x = i * GLYPH_WIDTH * s;

            for (row_y, row) in cell.chunks_exact(GLYPH_WIDTH).enumerate() {
                for (col_x, &on) in row.iter().enumerate() {
                    if !on {
                        continue;
                    }
                    for sy in 0..s {
                        for sx in 0..s {
                            let x = origin_x + col_x * s + sx;
                            let y = row_y * s + sy;
                            mask.accumulate(x as i32, y as i32, 1.0);
                        }
                    }
                }
            }
        }

        mask
    }
}

/// Copy a Spleen glyph (rows of on/off pixels) into an 8×16 cell.
fn glyph_cell<G, R>(glyph: G) -> Vec<bool>
where
    G: Iterator<Item = R>,
    R: Iterator<Item = bool>,
{
    let mut cell = vec![false; GLYPH_WIDTH * GLYPH_HEIGHT];
    for (row_y, row) in glyph.enumerate() {
        for (col_x, on) in row.enumerate() {
            if row_y < GLYPH_HEIGHT && col_x < GLYPH_WIDTH {
                cell[row_y * GLYPH_WIDTH + col_x] = on;
            }
        }
    }
    cell
}

/// Hollow box for characters Spleen lacks.
fn boxed_cell() -> Vec<bool> {
    let mut cell = vec![false; GLYPH_WIDTH * GLYPH_HEIGHT];
    for y in 2..GLYPH_HEIGHT - 2 {
        for x in 1..GLYPH_WIDTH - 1 {
            let edge = y == 2 || y == GLYPH_HEIGHT - 3 || x == 1 || x == GLYPH_WIDTH - 2;
            if edge {
                cell[y * GLYPH_WIDTH + x] = true;
            }
        }
    }
    cell
}
