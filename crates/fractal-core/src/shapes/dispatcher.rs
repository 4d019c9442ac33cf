//! Generation entry point: dispatches a `Seed` to its variant's recursion.

use crate::color::ColorMode;
use crate::config::{FractalConfig, VERTEX_BUDGET};
use crate::geometry::Geometry;
use crate::seed::Seed;
use crate::shapes::levy::{self, LevyPass};
use crate::shapes::{sierpinski, tree};

/// Generate a full pass of `depth` levels into `out`.
///
/// `out` is cleared first. Equivalent to `generate_with_total` with
/// `total_depth == depth`.
pub fn generate(
    seed: &Seed,
    depth: u32,
    mode: ColorMode,
    config: &FractalConfig,
    out: &mut Geometry,
) {
    generate_with_total(seed, depth, depth, mode, config, out);
}

/// Generate with an explicit `total_depth`, the depth of the whole pass used
/// by the depth-fraction colour rules.
///
/// A `total_depth` below `depth` is raised to `depth`, so the blend fraction
/// never divides by zero.
pub fn generate_with_total(
    seed: &Seed,
    depth: u32,
    total_depth: u32,
    mode: ColorMode,
    config: &FractalConfig,
    out: &mut Geometry,
) {
    let total_depth = if total_depth < depth {
        log::warn!(
            "total_depth {} is below depth {}, using {}",
            total_depth,
            depth,
            depth
        );
        depth
    } else {
        total_depth
    };

    out.clear();
    out.reserve(seed.vertex_count(depth).min(VERTEX_BUDGET));

    match *seed {
        Seed::Triangle { a, b, c, color } => {
            sierpinski::subdivide(
                [a, b, c],
                color,
                depth,
                total_depth,
                mode,
                &config.sierpinski,
                out,
            );
        }
        Seed::Segment {
            a,
            b,
            color_a,
            color_b,
        } => {
            let pass = LevyPass {
                palette: (color_a, color_b),
                total_depth,
                mode,
            };
            levy::subdivide((a, b), (color_a, color_b), depth, &pass, out);
        }
        Seed::Branch { base, top, color } => {
            tree::grow((base, top), color, depth, 0, mode, &config.tree, out);
        }
    }

    log::debug!(
        "generated {:?} seed at depth {}/{} ({:?}): {} vertices, {} primitives",
        seed.topology(),
        depth,
        total_depth,
        mode,
        out.len(),
        out.len() / seed.topology().vertices_per_primitive()
    );
}
