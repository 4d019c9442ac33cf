//! Sierpinski triangle subdivision.
//!
//! Each triangle `(A, B, C)` splits at its edge midpoints
//! `D = mid(A, C)`, `E = mid(C, B)`, `F = mid(B, A)` into
//! `Top(D, E, C)`, `Left(F, B, E)` and `Right(A, F, D)`, visited in that order.
//! Only depth 0 triangles are emitted.

use glam::Vec3;

use crate::color::ColorMode;
use crate::config::SierpinskiConfig;
use crate::geometry::{Color, Geometry, Point};
use crate::math::{depth_fraction, midpoint};

/// Split a triangle into its `[top, left, right]` children.
pub fn split(a: Point, b: Point, c: Point) -> [[Point; 3]; 3] {
    let d = midpoint(a, c);
    let e = midpoint(c, b);
    let f = midpoint(b, a);
    [[d, e, c], [f, b, e], [a, f, d]]
}

/// Colours of the `[top, left, right]` children of a triangle coloured
/// `color` that is split with `depth` levels remaining.
pub fn child_colors(
    color: Color,
    depth: u32,
    total_depth: u32,
    mode: ColorMode,
    config: &SierpinskiConfig,
) -> [Color; 3] {
    match mode {
        ColorMode::Carry => [color; 3],
        ColorMode::Perturb => {
            if depth == total_depth {
                config.seeded_colors.to_array()
            } else {
                // Additive walk, intentionally unclamped.
                let deltas = config.perturb_deltas;
                [color + deltas.top, color + deltas.left, color + deltas.right]
            }
        }
        ColorMode::Blend => {
            let increment = depth_fraction(depth, total_depth) * config.blend_scale;
            [
                color + Vec3::new(0.0, increment, 0.0),
                color + Vec3::new(0.0, 0.0, increment),
                color - Vec3::new(0.0, 0.0, increment),
            ]
        }
    }
}

/// Recursively subdivide `(a, b, c)` and append the depth 0 triangles to `out`.
pub fn subdivide(
    [a, b, c]: [Point; 3],
    color: Color,
    depth: u32,
    total_depth: u32,
    mode: ColorMode,
    config: &SierpinskiConfig,
    out: &mut Geometry,
) {
    if depth == 0 {
        out.push(a, color);
        out.push(b, color);
        out.push(c, color);
        return;
    }

    let children = split(a, b, c);
    let colors = child_colors(color, depth, total_depth, mode, config);
    for (tri, col) in children.into_iter().zip(colors) {
        subdivide(tri, col, depth - 1, total_depth, mode, config, out);
    }
}
