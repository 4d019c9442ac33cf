//! Recursive 2D fractal geometry: Sierpinski triangle, Lévy C-curve and a
//! branching tree, flattened into position/colour buffers for a renderer.

pub mod color;
pub mod config;
pub mod geometry;
pub mod math;
pub mod scene;
pub mod seed;
pub mod shapes;

pub use color::ColorMode;
pub use config::{ConfigError, FractalConfig};
pub use geometry::{Color, Geometry, Point, Topology};
pub use scene::{InputEvent, SceneKind, SceneState};
pub use seed::Seed;
pub use shapes::dispatcher::{generate, generate_with_total};
