//! Host-side scene state.
//!
//! The current scene, depth and colour mode are plain values mutated by
//! `SceneState::apply` and passed into generation every frame.

use crate::color::ColorMode;
use crate::config::FractalConfig;
use crate::geometry::{Geometry, Topology};
use crate::seed::Seed;
use crate::shapes::dispatcher::generate;

#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SceneKind {
    #[default]
    Sierpinski = 0,
    Levy = 1,
    Tree = 2,
}

impl SceneKind {
    pub const ALL: [SceneKind; 3] = [SceneKind::Sierpinski, SceneKind::Levy, SceneKind::Tree];

    pub fn next(self) -> Self {
        match self {
            SceneKind::Sierpinski => SceneKind::Levy,
            SceneKind::Levy => SceneKind::Tree,
            SceneKind::Tree => SceneKind::Sierpinski,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            SceneKind::Sierpinski => SceneKind::Tree,
            SceneKind::Levy => SceneKind::Sierpinski,
            SceneKind::Tree => SceneKind::Levy,
        }
    }

    /// Deepest level the host allows for this scene.
    pub fn max_depth(self, config: &FractalConfig) -> u32 {
        match self {
            SceneKind::Sierpinski => config.sierpinski.max_depth,
            SceneKind::Levy => config.levy.max_depth,
            SceneKind::Tree => config.tree.max_depth,
        }
    }

    /// Colour mode selected when the scene is entered.
    pub fn default_color_mode(self) -> ColorMode {
        match self {
            SceneKind::Sierpinski => ColorMode::Perturb,
            SceneKind::Levy | SceneKind::Tree => ColorMode::Blend,
        }
    }

    pub fn seed(self, config: &FractalConfig) -> Seed {
        match self {
            SceneKind::Sierpinski => Seed::sierpinski(config),
            SceneKind::Levy => Seed::levy(config),
            SceneKind::Tree => Seed::tree(config),
        }
    }
}

/// Input actions the host translates its key/scroll events into.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum InputEvent {
    DepthUp,
    DepthDown,
    NextScene,
    PreviousScene,
    CycleColorMode,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SceneState {
    pub kind: SceneKind,
    pub depth: u32,
    pub color_mode: ColorMode,
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new(SceneKind::default())
    }
}

impl SceneState {
    pub fn new(kind: SceneKind) -> Self {
        Self {
            kind,
            depth: 0,
            color_mode: kind.default_color_mode(),
        }
    }

    /// Apply one input event. Returns `true` if the state changed and the
    /// geometry needs rebuilding.
    pub fn apply(&mut self, event: InputEvent, config: &FractalConfig) -> bool {
        let before = *self;
        match event {
            InputEvent::DepthUp => {
                self.depth = (self.depth + 1).min(self.kind.max_depth(config));
            }
            InputEvent::DepthDown => {
                self.depth = self.depth.saturating_sub(1);
            }
            InputEvent::NextScene => *self = Self::new(self.kind.next()),
            InputEvent::PreviousScene => *self = Self::new(self.kind.previous()),
            InputEvent::CycleColorMode => self.color_mode = self.color_mode.next(),
        }

        if self.kind != before.kind {
            log::info!("Scene {:?} -> {:?}", before.kind, self.kind);
        }
        *self != before
    }

    /// Clamp `depth` after the config's limits changed.
    pub fn clamp_depth(&mut self, config: &FractalConfig) {
        self.depth = self.depth.min(self.kind.max_depth(config));
    }

    pub fn seed(&self, config: &FractalConfig) -> Seed {
        self.kind.seed(config)
    }

    pub fn topology(&self) -> Topology {
        match self.kind {
            SceneKind::Sierpinski => Topology::Triangles,
            SceneKind::Levy | SceneKind::Tree => Topology::Lines,
        }
    }

    /// Run one full generation pass for the current state into `out`.
    pub fn build(&self, config: &FractalConfig, out: &mut Geometry) {
        let seed = self.seed(config);
        generate(&seed, self.depth, self.color_mode, config, out);
    }
}
