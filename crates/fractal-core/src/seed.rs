use crate::config::FractalConfig;
use crate::geometry::{Color, Geometry, Point, Topology};
use crate::math::saturating_pow;

/// Shape handed to one generation pass.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Seed {
    /// Sierpinski triangle, one colour for all three corners.
    Triangle {
        a: Point,
        b: Point,
        c: Point,
        color: Color,
    },
    /// Lévy C-curve segment, one colour per endpoint.
    Segment {
        a: Point,
        b: Point,
        color_a: Color,
        color_b: Color,
    },
    /// Tree branch growing from `base` to `top`.
    Branch { base: Point, top: Point, color: Color },
}

impl Seed {
    pub fn sierpinski(config: &FractalConfig) -> Self {
        let [a, b, c] = config.sierpinski.vertices;
        Seed::Triangle {
            a,
            b,
            c,
            color: config.sierpinski.seed_color,
        }
    }

    pub fn levy(config: &FractalConfig) -> Self {
        let [a, b] = config.levy.endpoints;
        Seed::Segment {
            a,
            b,
            color_a: config.levy.color_a,
            color_b: config.levy.color_b,
        }
    }

    pub fn tree(config: &FractalConfig) -> Self {
        Seed::Branch {
            base: config.tree.base,
            top: config.tree.top,
            color: config.tree.trunk_color,
        }
    }

    pub fn topology(&self) -> Topology {
        match self {
            Seed::Triangle { .. } => Topology::Triangles,
            Seed::Segment { .. } | Seed::Branch { .. } => Topology::Lines,
        }
    }

    /// Exact number of vertices a pass of `depth` emits.
    ///
    /// Triangles emit `3 * 3^depth`, segments `2 * 2^depth`. Branches emit two
    /// vertices per node of a ternary tree, `3^(depth+1) - 1`. Saturates at
    /// `usize::MAX`.
    pub fn vertex_count(&self, depth: u32) -> usize {
        let exp = depth.saturating_add(1);
        match self {
            Seed::Triangle { .. } => saturating_pow(3, exp),
            Seed::Segment { .. } => saturating_pow(2, exp),
            Seed::Branch { .. } => saturating_pow(3, exp).saturating_sub(1),
        }
    }

    /// Append the seed's own vertices, the depth 0 output.
    pub fn emit(&self, out: &mut Geometry) {
        match *self {
            Seed::Triangle { a, b, c, color } => {
                out.push(a, color);
                out.push(b, color);
                out.push(c, color);
            }
            Seed::Segment {
                a,
                b,
                color_a,
                color_b,
            } => {
                out.push(a, color_a);
                out.push(b, color_b);
            }
            Seed::Branch { base, top, color } => {
                out.push(base, color);
                out.push(top, color);
            }
        }
    }
}
