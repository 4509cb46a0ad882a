//! # Gradient Background
//!
//! Linear two-colour gradient at an arbitrary angle.
//!
//! ## Formula
//!
//! ```text
//! proj = (x - cx)·cos(a) + (y - cy)·sin(a)     // relative to canvas centre
//! max  = |(w-1)·cos(a)| + |(h-1)·sin(a)|        // full projected extent
//! t    = clamp(proj / max + 0.5, 0, 1)
//! rgb  = lerp(color1, color2, t)
//! ```
//!
//! The projected minimum lands exactly on `color1` and the maximum on `color2`
//! for every angle and aspect ratio.

use image::Rgb;
use rayon::prelude::*;

use super::{clamp01, Canvas};
use crate::colour::lerp;

/// Precomputed projection for one canvas size and angle.
#[derive(Debug, Clone, Copy)]
pub struct Axis {
    cos_a: f32,
    sin_a: f32,
    half_x: f32,
    half_y: f32,
    max_proj: f32,
}

impl Axis {
    pub fn new(width: u32, height: u32, angle_degrees: f32) -> Self {
        let (sin_a, cos_a) = angle_degrees.to_radians().sin_cos();
        let span_x = width.saturating_sub(1) as f32;
        let span_y = height.saturating_sub(1) as f32;
        Self {
            cos_a,
            sin_a,
            half_x: span_x / 2.0,
            half_y: span_y / 2.0,
            max_proj: (span_x * cos_a).abs() + (span_y * sin_a).abs(),
        }
    }

    /// Gradient parameter `t` at a pixel.
    pub fn shade(&self, x: u32, y: u32) -> f32 {
        if self.max_proj <= f32::EPSILON {
            return 0.0;
        }
        let proj = (x as f32 - self.half_x) * self.cos_a + (y as f32 - self.half_y) * self.sin_a;
        clamp01(proj / self.max_proj + 0.5)
    }
}

/// Render a `width`×`height` gradient from `color1` to `color2`.
///
/// Rows are filled in parallel; each pixel depends only on its coordinates.
pub fn render_gradient(
    width: u32,
    height: u32,
    color1: Rgb<u8>,
    color2: Rgb<u8>,
    angle_degrees: f32,
) -> Canvas {
    let mut canvas = Canvas::new(width, height);
    let row_len = width as usize * 3;
    if row_len == 0 {
        return canvas;
    }

    let axis = Axis::new(width, height, angle_degrees);
    canvas
        .par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, px) in row.chunks_exact_mut(3).enumerate() {
                let t = axis.shade(x as u32, y as u32);
                px.copy_from_slice(&lerp(color1, color2, t).0);
            }
        });

    canvas
}
