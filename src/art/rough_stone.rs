//! # Rough Stone
//!
//! Uncut stone silhouette: a closed 12-gon whose radius wobbles per vertex,
//! with a handful of darker strokes scratched across the middle.
//!
//! Extreme offsets on a small base radius can make the outline cross itself.
//! That reads as a chipped edge and is left alone.

use std::f32::consts::TAU;

use image::Rgb;
use imageproc::drawing::draw_line_segment_mut;
use rand::Rng;

use super::{fill_polygon, outline_polygon, Canvas};
use crate::colour::darken;

/// Parameters for the rough stone.
#[derive(Debug, Clone)]
pub struct Params {
    /// Vertices around the silhouette. Default: 12
    pub vertices: usize,
    /// Max radius offset per vertex, either way. Default: 30
    pub wobble: i32,
    /// Number of texture strokes. Default: 8
    pub strokes: usize,
    /// Stroke start scatter around the centre. Default: 60
    pub scatter: i32,
    /// Max stroke extent on each axis. Default: 40
    pub stroke_len: i32,
    /// Stroke darkening per channel. Default: 20
    pub shade: u8,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            vertices: 12,
            wobble: 30,
            strokes: 8,
            scatter: 60,
            stroke_len: 40,
            shade: 20,
        }
    }
}

/// Random silhouette vertices, one radius draw per vertex.
pub fn stone_outline<R: Rng>(
    rng: &mut R,
    centre: (f32, f32),
    base_radius: f32,
    params: &Params,
) -> Vec<(f32, f32)> {
    let (cx, cy) = centre;
    (0..params.vertices)
        .map(|i| {
            let angle = TAU * i as f32 / params.vertices as f32;
            let r = base_radius + rng.random_range(-params.wobble..=params.wobble) as f32;
            (cx + r * angle.cos(), cy + r * angle.sin())
        })
        .collect()
}

/// Draw a rough stone with default parameters and return its vertices.
pub fn render_rough_stone<R: Rng>(
    canvas: &mut Canvas,
    rng: &mut R,
    centre: (f32, f32),
    base_radius: f32,
    fill: Rgb<u8>,
    outline: Rgb<u8>,
) -> Vec<(f32, f32)> {
    render_with_params(canvas, rng, centre, base_radius, fill, outline, &Params::default())
}

pub fn render_with_params<R: Rng>(
    canvas: &mut Canvas,
    rng: &mut R,
    centre: (f32, f32),
    base_radius: f32,
    fill: Rgb<u8>,
    outline: Rgb<u8>,
    params: &Params,
) -> Vec<(f32, f32)> {
    let vertices = stone_outline(rng, centre, base_radius, params);
    fill_polygon(canvas, &vertices, fill);
    outline_polygon(canvas, &vertices, outline);

    let texture = darken(fill, params.shade);
    let (cx, cy) = centre;
    for _ in 0..params.strokes {
        let x1 = cx + rng.random_range(-params.scatter..=params.scatter) as f32;
        let y1 = cy + rng.random_range(-params.scatter..=params.scatter) as f32;
        let x2 = x1 + rng.random_range(-params.stroke_len..=params.stroke_len) as f32;
        let y2 = y1 + rng.random_range(-params.stroke_len..=params.stroke_len) as f32;
        draw_line_segment_mut(canvas, (x1, y1), (x2, y2), texture);
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_twelve_vertices_within_wobble() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let mut canvas = Canvas::new(300, 300);
            let vertices = render_rough_stone(
                &mut canvas,
                &mut rng,
                (150.0, 150.0),
                100.0,
                Rgb([0xc0, 0x39, 0x2b]),
                Rgb([0x1a, 0x0a, 0x0a]),
            );
            assert_eq!(vertices.len(), 12);
            for (x, y) in vertices {
                let d = ((x - 150.0).powi(2) + (y - 150.0).powi(2)).sqrt();
                assert!((70.0 - 1e-3..=130.0 + 1e-3).contains(&d), "vertex at distance {d}");
            }
        }
    }

    #[test]
    fn test_centre_is_filled() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut canvas = Canvas::new(300, 300);
        let fill = Rgb([0x27, 0xae, 0x60]);
        render_rough_stone(&mut canvas, &mut rng, (150.0, 150.0), 100.0, fill, Rgb([0, 0, 0]));
        let px = *canvas.get_pixel(150, 150);
        // Either the fill or a texture stroke crosses the centre
        assert!(px == fill || px == darken(fill, 20));
    }

    #[test]
    fn test_same_seed_same_outline() {
        let params = Params::default();
        let a = stone_outline(&mut StdRng::seed_from_u64(9), (0.0, 0.0), 50.0, &params);
        let b = stone_outline(&mut StdRng::seed_from_u64(9), (0.0, 0.0), 50.0, &params);
        assert_eq!(a, b);
    }
}
