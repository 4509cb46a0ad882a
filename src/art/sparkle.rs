//! # Sparkles
//!
//! Small white discs scattered across the canvas. Discs near an edge are
//! clipped by the drawing layer.

use imageproc::drawing::draw_filled_circle_mut;
use rand::Rng;

use super::Canvas;
use crate::colour::WHITE;

/// Scatter `count` sparkles. Each consumes three draws: x, y, radius.
pub fn add_sparkles<R: Rng>(canvas: &mut Canvas, rng: &mut R, count: usize) {
    let (w, h) = canvas.dimensions();
    if w == 0 || h == 0 {
        return;
    }
    for _ in 0..count {
        let x = rng.random_range(0..w) as i32;
        let y = rng.random_range(0..h) as i32;
        let radius = rng.random_range(1..=3);
        draw_filled_circle_mut(canvas, (x, y), radius, WHITE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sparkles_are_white() {
        let mut canvas = Canvas::new(100, 100);
        let mut rng = StdRng::seed_from_u64(42);
        add_sparkles(&mut canvas, &mut rng, 20);
        let lit = canvas.pixels().filter(|p| **p == WHITE).count();
        assert!(lit >= 5, "expected some sparkles, found {lit} lit pixels");
        assert!(canvas.pixels().all(|p| *p == WHITE || *p == Rgb([0, 0, 0])));
    }

    #[test]
    fn test_zero_count_is_noop() {
        let mut canvas = Canvas::new(10, 10);
        let mut rng = StdRng::seed_from_u64(42);
        add_sparkles(&mut canvas, &mut rng, 0);
        assert!(canvas.pixels().all(|p| *p == Rgb([0, 0, 0])));
    }

    #[test]
    fn test_edge_sparkles_clip() {
        // Tiny canvas forces most discs over the edge
        let mut canvas = Canvas::new(2, 2);
        let mut rng = StdRng::seed_from_u64(3);
        add_sparkles(&mut canvas, &mut rng, 50);
        assert_eq!(canvas.dimensions(), (2, 2));
    }
}
