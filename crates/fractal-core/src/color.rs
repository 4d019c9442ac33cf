use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::geometry::Color;

/// How colour propagates from a primitive to its children.
///
/// | seed     | `Carry`                     | `Perturb`                       | `Blend`                         |
/// |----------|-----------------------------|---------------------------------|---------------------------------|
/// | triangle | children reuse parent colour | seeded colours, then fixed deltas | depth-fraction channel offsets |
/// | segment  | apex takes left colour      | same as `Blend`                 | apex lerps the seed colours     |
/// | branch   | no leaf switch              | leaf switch past threshold      | leaf switch past threshold      |
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    Carry,
    #[default]
    Perturb,
    Blend,
}

impl ColorMode {
    /// Next mode in `Carry -> Perturb -> Blend -> Carry` order.
    pub fn next(self) -> Self {
        match self {
            ColorMode::Carry => ColorMode::Perturb,
            ColorMode::Perturb => ColorMode::Blend,
            ColorMode::Blend => ColorMode::Carry,
        }
    }
}

/// One colour (or delta) per Sierpinski child.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct BranchColors {
    pub top: Color,
    pub left: Color,
    pub right: Color,
}

impl BranchColors {
    pub const fn new(top: Color, left: Color, right: Color) -> Self {
        Self { top, left, right }
    }

    /// `[top, left, right]`, the order children are visited in.
    pub fn to_array(self) -> [Color; 3] {
        [self.top, self.left, self.right]
    }
}

// Named colours used by the default configuration.
pub const PERIWINKLE: Color = Vec3::new(0.4, 0.4, 1.0);
pub const PURPLE: Color = Vec3::new(0.5, 0.2, 0.8);
pub const PINK: Color = Vec3::new(1.0, 0.4, 0.7);
pub const ORANGE: Color = Vec3::new(1.0, 0.5, 0.0);
pub const GREEN: Color = Vec3::new(0.0, 1.0, 0.0);
pub const BLUE: Color = Vec3::new(0.0, 0.0, 1.0);
pub const BARK: Color = Vec3::new(0.55, 0.35, 0.15);
pub const LEAF: Color = Vec3::new(0.2, 0.8, 0.3);

/// Colours given to top/left/right on the first Sierpinski split.
pub const SEEDED_COLORS: BranchColors = BranchColors::new(PURPLE, PINK, ORANGE);

/// Per-child deltas added on every later Sierpinski split.
pub const PERTURB_DELTAS: BranchColors = BranchColors::new(
    Vec3::new(0.1, -0.1, 0.2),
    Vec3::new(-0.1, 0.2, 0.1),
    Vec3::new(0.2, 0.1, -0.1),
);
