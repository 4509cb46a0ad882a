//! TrueType label rendering.
//!
//! Rasterizes a single line of text to an anti-aliased coverage mask using
//! ab_glyph. The mask is cropped to its inked bounds by the caller.

use ab_glyph::{Font, FontVec, ScaleFont};

use super::TextMask;

/// Parse a font file's bytes.
pub fn parse_font(bytes: Vec<u8>) -> Result<FontVec, String> {
    FontVec::try_from_vec(bytes).map_err(|e| e.to_string())
}

/// Render one line of text at `pixel_height`.
pub fn render_text(font: &FontVec, text: &str, pixel_height: f32) -> TextMask {
    let scaled = font.as_scaled(pixel_height);

    let mut glyphs = Vec::new();
    let mut caret_x = 0.0f32;
    let mut prev = None;

    for ch in text.chars() {
        let glyph_id = font.glyph_id(ch);
        if let Some(prev_id) = prev {
            caret_x += scaled.kern(prev_id, glyph_id);
        }
        glyphs.push((glyph_id, caret_x));
        caret_x += scaled.h_advance(glyph_id);
        prev = Some(glyph_id);
    }

    let width = (caret_x.ceil() as usize).max(1);
    let ascent = scaled.ascent();
    let height = ((ascent - scaled.descent()).ceil() as usize).max(1);

    let mut mask = TextMask::new(width, height);

    for &(glyph_id, glyph_x) in &glyphs {
        let glyph = glyph_id.with_scale_and_position(pixel_height, ab_glyph::point(glyph_x, ascent));

        if let Some(outlined) = font.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            outlined.draw(|px, py, coverage| {
                let x = px as i32 + bounds.min.x as i32;
                let y = py as i32 + bounds.min.y as i32;
                mask.accumulate(x, y, coverage);
            });
        }
    }

    mask
}
