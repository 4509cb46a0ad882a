//! # Jewelry
//!
//! Fixed compositions of gold metalwork and small faceted gems. Geometry is
//! derived from the canvas centre and the shorter canvas side `m`.
//!
//! | Shape | Metal | Gems |
//! |-------|-------|------|
//! | Ring | band disc r=m/4 at (cx, cy+20) with a hole of r-12 | one r=15 on top of the band |
//! | Necklace | 120 links on an ellipse 0.35m × 0.25m, raised 20px | one r=20 pendant below centre |
//! | Earring | two 2px stems at cx±50 | one r=12 at the end of each stem |

use std::fmt;
use std::str::FromStr;

use imageproc::drawing::{draw_filled_circle_mut, draw_hollow_circle_mut, draw_line_segment_mut};
use rand::Rng;
use serde::Serialize;

use super::facets::render_facets;
use super::Canvas;
use crate::colour::{Palette, DARK_GOLD, GOLD, WHITE};

/// Facets on every jewelry gem.
const GEM_FACETS: usize = 6;

/// Chain links around the necklace, one every 3 degrees.
pub const NECKLACE_LINKS: usize = 120;

/// Jewelry silhouette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JewelryShape {
    Ring,
    Necklace,
    Earring,
}

impl JewelryShape {
    pub const ALL: [JewelryShape; 3] = [Self::Ring, Self::Necklace, Self::Earring];

    /// Look up a shape by name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "ring" => Some(Self::Ring),
            "necklace" => Some(Self::Necklace),
            "earring" => Some(Self::Earring),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Ring => "ring",
            Self::Necklace => "necklace",
            Self::Earring => "earring",
        }
    }
}

impl fmt::Display for JewelryShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for JewelryShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("unknown jewelry shape: {s}"))
    }
}

/// Draw the named shape, or nothing if the name is not a known shape.
pub fn render_jewelry_named<R: Rng>(
    canvas: &mut Canvas,
    rng: &mut R,
    palette: &Palette,
    name: &str,
) -> bool {
    match JewelryShape::from_name(name) {
        Some(shape) => {
            render_jewelry(canvas, rng, palette, shape);
            true
        }
        None => {
            log::debug!("skipping unknown jewelry shape {name:?}");
            false
        }
    }
}

/// Draw a jewelry composition centred on the canvas.
///
/// Gems use the palette accent; the ring's inner face uses the background
/// start colour so it reads as a hole.
pub fn render_jewelry<R: Rng>(canvas: &mut Canvas, rng: &mut R, palette: &Palette, shape: JewelryShape) {
    let (w, h) = canvas.dimensions();
    let cx = (w / 2) as i32;
    let cy = (h / 2) as i32;
    let m = w.min(h) as i32;
    let gem = palette.accent();

    match shape {
        JewelryShape::Ring => {
            let outer_r = m / 4;
            let inner_r = outer_r - 12;
            let band = (cx, cy + 20);
            draw_filled_circle_mut(canvas, band, outer_r, GOLD);
            draw_hollow_circle_mut(canvas, band, outer_r, DARK_GOLD);
            if inner_r > 0 {
                draw_filled_circle_mut(canvas, band, inner_r, palette.start);
            }
            let top = (cx as f32, (cy - outer_r + 20) as f32);
            render_facets(canvas, rng, top, 15.0, GEM_FACETS, gem, WHITE);
        }
        JewelryShape::Necklace => {
            for (x, y) in necklace_links(cx, cy, m) {
                draw_filled_circle_mut(canvas, (x, y), 2, GOLD);
            }
            let pendant = (cx as f32, (cy + m / 4 - 20) as f32);
            render_facets(canvas, rng, pendant, 20.0, GEM_FACETS, gem, GOLD);
        }
        JewelryShape::Earring => {
            for offset in [-50, 50] {
                let x = (cx + offset) as f32;
                // 2px stem
                for dx in [0.0, 1.0] {
                    draw_line_segment_mut(
                        canvas,
                        (x + dx, (cy - 40) as f32),
                        (x + dx, (cy + 10) as f32),
                        GOLD,
                    );
                }
                render_facets(canvas, rng, (x, (cy + 25) as f32), 12.0, GEM_FACETS, gem, GOLD);
            }
        }
    }
}

/// Centres of the necklace chain links.
pub fn necklace_links(cx: i32, cy: i32, m: i32) -> Vec<(i32, i32)> {
    (0..360)
        .step_by(3)
        .map(|deg| {
            let rad = (deg as f32).to_radians();
            let x = cx + (m as f32 * 0.35 * rad.cos()) as i32;
            let y = cy + (m as f32 * 0.25 * rad.sin()) as i32 - 20;
            (x, y)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn palette() -> Palette {
        Palette::from_hex(&["#0a0a2e", "#1a1a5e", "#2980b9"]).unwrap()
    }

    fn blank(w: u32, h: u32) -> Canvas {
        Canvas::from_pixel(w, h, Rgb([0x0a, 0x0a, 0x2e]))
    }

    #[test]
    fn test_from_name() {
        assert_eq!(JewelryShape::from_name("ring"), Some(JewelryShape::Ring));
        assert_eq!(JewelryShape::from_name("NECKLACE"), Some(JewelryShape::Necklace));
        assert_eq!(JewelryShape::from_name("earring"), Some(JewelryShape::Earring));
        assert_eq!(JewelryShape::from_name("brooch"), None);
        for shape in JewelryShape::ALL {
            assert_eq!(shape.name().parse::<JewelryShape>(), Ok(shape));
        }
    }

    #[test]
    fn test_unknown_shape_draws_nothing() {
        let mut canvas = blank(100, 100);
        let before = canvas.clone();
        let mut rng = StdRng::seed_from_u64(42);
        assert!(!render_jewelry_named(&mut canvas, &mut rng, &palette(), "tiara"));
        assert_eq!(canvas, before);
    }

    #[test]
    fn test_necklace_links() {
        let links = necklace_links(200, 200, 400);
        assert_eq!(links.len(), NECKLACE_LINKS);
        assert_eq!(links[0], (340, 180));
        // Quarter turn: bottom of the ellipse
        assert_eq!(links[30], (200, 280));
    }

    #[test]
    fn test_necklace_pendant_below_centre() {
        let mut canvas = blank(400, 400);
        let mut rng = StdRng::seed_from_u64(42);
        render_jewelry(&mut canvas, &mut rng, &palette(), JewelryShape::Necklace);
        // Pendant centre at (200, 280); link centre at right of the ellipse
        assert_ne!(*canvas.get_pixel(200, 290), Rgb([0x0a, 0x0a, 0x2e]));
        assert_eq!(*canvas.get_pixel(340, 180), GOLD);
    }

    #[test]
    fn test_ring_band_and_hole() {
        let mut canvas = blank(400, 400);
        let mut rng = StdRng::seed_from_u64(42);
        render_jewelry(&mut canvas, &mut rng, &palette(), JewelryShape::Ring);
        // Band at (200, 220), outer r=100, inner r=88
        assert_eq!(*canvas.get_pixel(200, 220), Rgb([0x0a, 0x0a, 0x2e]));
        assert_eq!(*canvas.get_pixel(106, 220), GOLD);
    }

    #[test]
    fn test_earring_stems() {
        let mut canvas = blank(400, 400);
        let mut rng = StdRng::seed_from_u64(42);
        render_jewelry(&mut canvas, &mut rng, &palette(), JewelryShape::Earring);
        for x in [150, 151, 250, 251] {
            assert_eq!(*canvas.get_pixel(x, 170), GOLD);
        }
        assert_eq!(*canvas.get_pixel(200, 170), Rgb([0x0a, 0x0a, 0x2e]));
    }
}
