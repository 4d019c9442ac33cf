//! Lévy C-curve subdivision.
//!
//! A segment `(A, B)` is replaced by `(A, C)` and `(C, B)` where `C` is the
//! apex of the right isosceles triangle on `A..B`. Only depth 0 segments are
//! emitted.

use crate::color::ColorMode;
use crate::geometry::{Color, Geometry, Point};
use crate::math::{depth_fraction, levy_apex};

/// Per-pass constants carried unchanged through the recursion.
#[derive(Clone, Copy, Debug)]
pub struct LevyPass {
    /// Seed endpoint colours the apex colour is interpolated between.
    pub palette: (Color, Color),
    pub total_depth: u32,
    pub mode: ColorMode,
}

impl LevyPass {
    /// Colour of the apex created by a split with `depth` levels remaining.
    ///
    /// `Blend` and `Perturb` use `lerp(palette, (total - depth) / total)`;
    /// `Carry` reuses `left`.
    pub fn apex_color(&self, left: Color, depth: u32) -> Color {
        match self.mode {
            ColorMode::Carry => left,
            ColorMode::Perturb | ColorMode::Blend => {
                let t = depth_fraction(self.total_depth.saturating_sub(depth), self.total_depth);
                self.palette.0.lerp(self.palette.1, t)
            }
        }
    }
}

/// Recursively fold the segment `a..b` and append the depth 0 segments to `out`.
pub fn subdivide(
    (a, b): (Point, Point),
    (color_a, color_b): (Color, Color),
    depth: u32,
    pass: &LevyPass,
    out: &mut Geometry,
) {
    if depth == 0 {
        out.push(a, color_a);
        out.push(b, color_b);
        return;
    }

    let c = levy_apex(a, b);
    let color_c = pass.apex_color(color_a, depth);
    subdivide((a, c), (color_a, color_c), depth - 1, pass, out);
    subdivide((c, b), (color_c, color_b), depth - 1, pass, out);
}
