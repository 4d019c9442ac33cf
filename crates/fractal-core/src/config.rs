//! Configuration table: seed geometry, colours, deltas and depth limits
//! keyed by fractal variant. Loadable from TOML; every section falls back to
//! its defaults so partial files are accepted.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::color::{
    BranchColors, BARK, BLUE, GREEN, LEAF, PERIWINKLE, PERTURB_DELTAS, SEEDED_COLORS,
};
use crate::geometry::{Color, Point};
use crate::seed::Seed;

/// Most vertices one pass at a variant's `max_depth` may emit.
pub const VERTEX_BUDGET: usize = 1 << 24;

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SierpinskiConfig {
    pub max_depth: u32,
    /// Seed corners, lower left / lower right / upper.
    pub vertices: [Point; 3],
    pub seed_color: Color,
    /// Colours handed out on the first split.
    pub seeded_colors: BranchColors,
    /// Deltas added on every later split.
    pub perturb_deltas: BranchColors,
    /// Multiplier of the depth fraction in `Blend` mode.
    pub blend_scale: f32,
}

impl Default for SierpinskiConfig {
    fn default() -> Self {
        let h = 3.0_f32.sqrt() / 4.0;
        Self {
            max_depth: 10,
            vertices: [
                Vec3::new(-0.5, -h, 0.0),
                Vec3::new(0.5, -h, 0.0),
                Vec3::new(0.0, h, 0.0),
            ],
            seed_color: PERIWINKLE,
            seeded_colors: SEEDED_COLORS,
            perturb_deltas: PERTURB_DELTAS,
            blend_scale: 0.33,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevyConfig {
    pub max_depth: u32,
    pub endpoints: [Point; 2],
    pub color_a: Color,
    pub color_b: Color,
}

impl Default for LevyConfig {
    fn default() -> Self {
        Self {
            max_depth: 18,
            endpoints: [Vec3::new(-0.5, 0.0, 0.0), Vec3::new(0.5, 0.0, 0.0)],
            color_a: GREEN,
            color_b: BLUE,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    pub max_depth: u32,
    pub base: Point,
    pub top: Point,
    pub trunk_color: Color,
    pub leaf_color: Color,
    /// Side branch angle in degrees, applied as +angle (left) and -angle (right).
    pub branch_angle_deg: f32,
    /// Splits since the root after which a branch turns into a leaf.
    pub leaf_threshold: u32,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            max_depth: 10,
            base: Vec3::new(0.0, -0.9, 0.0),
            top: Vec3::new(0.0, -0.3, 0.0),
            trunk_color: BARK,
            leaf_color: LEAF,
            branch_angle_deg: 25.7,
            leaf_threshold: 3,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FractalConfig {
    pub sierpinski: SierpinskiConfig,
    pub levy: LevyConfig,
    pub tree: TreeConfig,
}

impl FractalConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        log::info!("Loaded fractal config from {}", path.display());
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, seed, max_depth) in [
            ("sierpinski", Seed::sierpinski(self), self.sierpinski.max_depth),
            ("levy", Seed::levy(self), self.levy.max_depth),
            ("tree", Seed::tree(self), self.tree.max_depth),
        ] {
            let vertices = seed.vertex_count(max_depth);
            if vertices > VERTEX_BUDGET {
                return Err(ConfigError::Invalid(format!(
                    "{name}.max_depth {max_depth} needs {vertices} vertices, over the budget of {VERTEX_BUDGET}"
                )));
            }
        }
        if !self.sierpinski.blend_scale.is_finite() {
            return Err(ConfigError::Invalid(
                "sierpinski.blend_scale must be finite".to_string(),
            ));
        }
        if !self.tree.branch_angle_deg.is_finite() {
            return Err(ConfigError::Invalid(
                "tree.branch_angle_deg must be finite".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        let config = FractalConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.sierpinski.max_depth, 10);
        assert_eq!(config.levy.max_depth, 18);
        assert_eq!(config.tree.max_depth, 10);
        assert_eq!(config.tree.leaf_threshold, 3);
    }

    #[test]
    fn test_seeded_colors_distinct() {
        let [top, left, right] = FractalConfig::default().sierpinski.seeded_colors.to_array();
        assert_ne!(top, left);
        assert_ne!(left, right);
        assert_ne!(top, right);
    }

    #[test]
    fn test_depth_over_budget_rejected() {
        let mut config = FractalConfig::default();
        config.levy.max_depth = 24;
        match config.validate() {
            Err(ConfigError::Invalid(msg)) => assert!(msg.contains("levy"), "{}", msg),
            other => panic!("expected Invalid, got {:?}", other),
        }
    }
}
