//! # Art Generation
//!
//! Procedural drawing routines for placeholder imagery. Every routine works on
//! a shared [`Canvas`] and, where it needs randomness, takes the generator as an
//! explicit argument so a whole run stays reproducible from one seed.
//!
//! | Module | Draws |
//! |--------|-------|
//! | [`gradient`] | Directional two-colour background |
//! | [`facets`] | Cut gem as a fan of jittered triangles |
//! | [`rough_stone`] | Irregular uncut silhouette with texture strokes |
//! | [`jewelry`] | Ring, necklace and earring compositions |
//! | [`sparkle`] | Scattered highlights |

pub mod facets;
pub mod gradient;
pub mod jewelry;
pub mod rough_stone;
pub mod sparkle;

use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_line_segment_mut, draw_polygon_mut};
use imageproc::point::Point;

/// RGB pixel buffer every routine draws into.
pub type Canvas = RgbImage;

/// Clamp value to [0.0, 1.0].
#[inline]
pub fn clamp01(v: f32) -> f32 {
    v.clamp(0.0, 1.0)
}

/// Fill a closed polygon.
///
/// Vertices are snapped to the pixel grid. Polygons that collapse to fewer
/// than three distinct points are skipped.
pub fn fill_polygon(canvas: &mut Canvas, vertices: &[(f32, f32)], colour: Rgb<u8>) {
    let mut points: Vec<Point<i32>> = Vec::with_capacity(vertices.len());
    for &(x, y) in vertices {
        let p = Point::new(x.round() as i32, y.round() as i32);
        if points.last() != Some(&p) {
            points.push(p);
        }
    }
    while points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
    if points.len() < 3 {
        return;
    }
    draw_polygon_mut(canvas, &points, colour);
}

/// Stroke the closed outline of a polygon with 1px lines.
pub fn outline_polygon(canvas: &mut Canvas, vertices: &[(f32, f32)], colour: Rgb<u8>) {
    if vertices.len() < 2 {
        return;
    }
    for (i, &start) in vertices.iter().enumerate() {
        let end = vertices[(i + 1) % vertices.len()];
        draw_line_segment_mut(canvas, start, end, colour);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_polygon_square() {
        let mut canvas = Canvas::new(10, 10);
        let red = Rgb([255, 0, 0]);
        fill_polygon(&mut canvas, &[(2.0, 2.0), (7.0, 2.0), (7.0, 7.0), (2.0, 7.0)], red);
        assert_eq!(*canvas.get_pixel(4, 4), red);
        assert_eq!(*canvas.get_pixel(0, 0), Rgb([0, 0, 0]));
    }

    #[test]
    fn test_fill_polygon_degenerate_is_skipped() {
        let mut canvas = Canvas::new(4, 4);
        fill_polygon(&mut canvas, &[(1.0, 1.0), (1.2, 0.9), (1.0, 1.0)], Rgb([9, 9, 9]));
        assert!(canvas.pixels().all(|p| *p == Rgb([0, 0, 0])));
    }

    #[test]
    fn test_outline_polygon_closes_loop() {
        let mut canvas = Canvas::new(10, 10);
        let white = Rgb([255, 255, 255]);
        outline_polygon(&mut canvas, &[(1.0, 1.0), (8.0, 1.0), (8.0, 8.0)], white);
        // Closing edge runs back along the diagonal
        assert_eq!(*canvas.get_pixel(4, 4), white);
        assert_eq!(*canvas.get_pixel(5, 1), white);
    }

    #[test]
    fn test_clamp01() {
        assert_eq!(clamp01(-0.5), 0.0);
        assert_eq!(clamp01(1.5), 1.0);
        assert_eq!(clamp01(0.25), 0.25);
    }
}
