//! Colour helpers and palettes.
//!
//! Colours travel as `image::Rgb<u8>` so they can be handed straight to the
//! drawing routines without conversion.

use image::Rgb;

use crate::error::{PlaceholderError, Result};

/// Label text colour.
pub const LABEL_GOLD: Rgb<u8> = Rgb([200, 180, 130]);

/// Jewelry metal.
pub const GOLD: Rgb<u8> = Rgb([0xc9, 0xa9, 0x62]);

/// Jewelry metal outline.
pub const DARK_GOLD: Rgb<u8> = Rgb([0x9a, 0x7b, 0x3c]);

pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Parse a `#RRGGBB` (or bare `RRGGBB`) hex string.
pub fn hex_to_rgb(s: &str) -> Result<Rgb<u8>> {
    let hex = s.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);

    if hex.len() != 6 || !hex.is_ascii() {
        return Err(PlaceholderError::Colour(format!(
            "{s:?} (expected #RRGGBB)"
        )));
    }

    let byte = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16)
            .map_err(|_| PlaceholderError::Colour(format!("{s:?} (invalid hex digit)")))
    };

    Ok(Rgb([byte(0..2)?, byte(2..4)?, byte(4..6)?]))
}

/// Format a colour as lowercase `#rrggbb`.
pub fn rgb_to_hex(colour: Rgb<u8>) -> String {
    let [r, g, b] = colour.0;
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Subtract `amount` from every channel, saturating at 0.
pub fn darken(colour: Rgb<u8>, amount: u8) -> Rgb<u8> {
    Rgb(colour.0.map(|c| c.saturating_sub(amount)))
}

/// Shift every channel by the same signed offset, clamped to [0, 255].
pub fn jitter(colour: Rgb<u8>, offset: i32) -> Rgb<u8> {
    Rgb(colour.0.map(|c| (c as i32 + offset).clamp(0, 255) as u8))
}

/// Linear interpolation between two colours, `t` in [0, 1].
pub fn lerp(a: Rgb<u8>, b: Rgb<u8>, t: f32) -> Rgb<u8> {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Rgb([mix(a[0], b[0]), mix(a[1], b[1]), mix(a[2], b[2])])
}

/// Background start, background end and an optional accent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub start: Rgb<u8>,
    pub end: Rgb<u8>,
    accent: Option<Rgb<u8>>,
}

impl Palette {
    /// Build a palette from 2 or 3 hex strings. Extra entries are ignored.
    pub fn from_hex(entries: &[&str]) -> Result<Self> {
        match entries {
            [start, end, rest @ ..] => Ok(Self {
                start: hex_to_rgb(start)?,
                end: hex_to_rgb(end)?,
                accent: rest.first().map(|h| hex_to_rgb(h)).transpose()?,
            }),
            _ => Err(PlaceholderError::Palette(format!(
                "need at least 2 colours, got {}",
                entries.len()
            ))),
        }
    }

    /// Accent colour, falling back to the background end colour.
    pub fn accent(&self) -> Rgb<u8> {
        self.accent.unwrap_or(self.end)
    }
}
