//! Recursive branching tree.
//!
//! Every branch is emitted as a line before its children, at every level.
//! Children are the continuation (from the tip, straight ahead) followed by
//! the left and right side branches (from the midpoint, rotated by
//! +/- `branch_angle_deg`), all half the parent's length.

use crate::color::ColorMode;
use crate::config::TreeConfig;
use crate::geometry::{Color, Geometry, Point};
use crate::math::{midpoint, rotate_z};

/// Children of the branch `base..top`: `[continuation, left, right]`.
pub fn split(base: Point, top: Point, angle_deg: f32) -> [(Point, Point); 3] {
    let half = (top - base) * 0.5;
    let mid = midpoint(base, top);
    [
        (top, top + half),
        (mid, mid + rotate_z(half, angle_deg)),
        (mid, mid + rotate_z(half, -angle_deg)),
    ]
}

/// Colour of a branch `generation` splits below the root whose parent was
/// coloured `parent`.
pub fn branch_color(parent: Color, generation: u32, mode: ColorMode, config: &TreeConfig) -> Color {
    if mode != ColorMode::Carry && generation > config.leaf_threshold {
        config.leaf_color
    } else {
        parent
    }
}

/// Emit `base..top`, then recurse into its children while `depth > 0`.
///
/// `generation` counts splits since the root and is independent of `depth`.
pub fn grow(
    (base, top): (Point, Point),
    color: Color,
    depth: u32,
    generation: u32,
    mode: ColorMode,
    config: &TreeConfig,
    out: &mut Geometry,
) {
    out.push(base, color);
    out.push(top, color);
    if depth == 0 {
        return;
    }

    let child_generation = generation + 1;
    let child_color = branch_color(color, child_generation, mode, config);
    for child in split(base, top, config.branch_angle_deg) {
        grow(child, child_color, depth - 1, child_generation, mode, config, out);
    }
}
