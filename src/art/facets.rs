//! # Faceted Gem
//!
//! A cut stone drawn as a radial fan of triangles around a centre point.
//! Each facet gets the base colour nudged by one random offset so
//! neighbouring facets catch the light differently.
//!
//! ```text
//!         p(i+1)
//!        /  |
//!   centre  |     facet i spans [2πi/n, 2π(i+1)/n)
//!        \  |
//!         p(i)
//! ```

use std::f32::consts::TAU;

use image::Rgb;
use rand::Rng;

use super::{fill_polygon, outline_polygon, Canvas};
use crate::colour::jitter;

/// Maximum per-facet brightness offset, applied to all channels.
pub const JITTER: i32 = 20;

/// One triangular facet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Facet {
    pub centre: (f32, f32),
    pub start: (f32, f32),
    pub end: (f32, f32),
    pub start_angle: f32,
    pub end_angle: f32,
}

impl Facet {
    pub fn vertices(&self) -> [(f32, f32); 3] {
        [self.centre, self.start, self.end]
    }

    /// Whether `angle` (radians, any range) falls in this facet's half-open sector.
    pub fn contains_angle(&self, angle: f32) -> bool {
        let a = angle.rem_euclid(TAU);
        a >= self.start_angle && a < self.end_angle
    }
}

/// Geometry for `count` facets tiling the circle of `radius` around `centre`.
pub fn facet_triangles(centre: (f32, f32), radius: f32, count: usize) -> Vec<Facet> {
    let (cx, cy) = centre;
    let point = |a: f32| (cx + radius * a.cos(), cy + radius * a.sin());

    (0..count)
        .map(|i| {
            let start_angle = TAU * i as f32 / count as f32;
            let end_angle = if i + 1 == count {
                TAU
            } else {
                TAU * (i + 1) as f32 / count as f32
            };
            Facet {
                centre,
                start: point(start_angle),
                end: point(end_angle),
                start_angle,
                end_angle,
            }
        })
        .collect()
}

/// Draw a faceted gem. Consumes exactly one random draw per facet.
pub fn render_facets<R: Rng>(
    canvas: &mut Canvas,
    rng: &mut R,
    centre: (f32, f32),
    radius: f32,
    count: usize,
    base: Rgb<u8>,
    outline: Rgb<u8>,
) -> Vec<Facet> {
    let facets = facet_triangles(centre, radius, count);
    for facet in &facets {
        let fill = jitter(base, rng.random_range(-JITTER..=JITTER));
        let vertices = facet.vertices();
        fill_polygon(canvas, &vertices, fill);
        outline_polygon(canvas, &vertices, outline);
    }
    facets
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_facet_count() {
        for n in [1, 3, 6, 8, 10, 12] {
            assert_eq!(facet_triangles((0.0, 0.0), 10.0, n).len(), n);
        }
        assert!(facet_triangles((0.0, 0.0), 10.0, 0).is_empty());
    }

    #[test]
    fn test_facets_tile_circle() {
        for n in [3, 6, 8, 10, 12] {
            let facets = facet_triangles((50.0, 50.0), 30.0, n);
            for step in 0..720 {
                let angle = TAU * step as f32 / 720.0 + 0.0007;
                let hits = facets.iter().filter(|f| f.contains_angle(angle)).count();
                assert_eq!(hits, 1, "angle {angle} covered {hits} times with n={n}");
            }
        }
    }

    #[test]
    fn test_facets_share_edges() {
        let facets = facet_triangles((0.0, 0.0), 100.0, 8);
        for pair in facets.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        let first = facets[0].start;
        let last = facets[7].end;
        assert!((first.0 - last.0).abs() < 1e-3 && (first.1 - last.1).abs() < 1e-3);
    }

    #[test]
    fn test_render_stays_within_jitter() {
        let mut canvas = Canvas::new(200, 200);
        let mut rng = StdRng::seed_from_u64(42);
        let base = Rgb([0xc0, 0x39, 0x2b]);
        let facets = render_facets(&mut canvas, &mut rng, (100.0, 100.0), 60.0, 6, base, Rgb([0, 0, 0]));
        assert_eq!(facets.len(), 6);

        // Sample well inside each facet, away from outlines
        for facet in &facets {
            let mid = (facet.start_angle + facet.end_angle) / 2.0;
            let x = 100.0 + 30.0 * mid.cos();
            let y = 100.0 + 30.0 * mid.sin();
            let px = canvas.get_pixel(x as u32, y as u32);
            let delta = px[0] as i32 - base[0] as i32;
            assert!(delta.abs() <= JITTER);
            assert_eq!(px[1] as i32 - base[1] as i32, delta);
            assert_eq!(px[2] as i32 - base[2] as i32, delta);
        }
    }

    #[test]
    fn test_one_draw_per_facet() {
        let mut canvas = Canvas::new(64, 64);
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        render_facets(&mut canvas, &mut a, (32.0, 32.0), 20.0, 5, Rgb([100, 100, 100]), Rgb([0, 0, 0]));
        for _ in 0..5 {
            let _: i32 = b.random_range(-JITTER..=JITTER);
        }
        assert_eq!(a.random::<u64>(), b.random::<u64>());
    }
}
