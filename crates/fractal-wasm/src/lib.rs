use fractal_core::{FractalConfig, Geometry, InputEvent, SceneKind, SceneState};
use wasm_bindgen::prelude::*;

/// GPU-compatible vertex: 24 bytes, matches the WGSL `VertexInput`
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuVertex {
    pub position: [f32; 3], // 12 bytes
    pub color: [f32; 3],    // 12 bytes
}

/// Map a `KeyboardEvent.key` value to a scene input.
pub fn key_to_event(key: &str) -> Option<InputEvent> {
    match key {
        "ArrowUp" | "+" | "=" => Some(InputEvent::DepthUp),
        "ArrowDown" | "-" => Some(InputEvent::DepthDown),
        "ArrowRight" | " " => Some(InputEvent::NextScene),
        "ArrowLeft" => Some(InputEvent::PreviousScene),
        "c" | "C" => Some(InputEvent::CycleColorMode),
        _ => None,
    }
}

#[wasm_bindgen]
pub struct FractalWorld {
    config: FractalConfig,
    state: SceneState,
    geometry: Geometry,
    gpu_buffer: Vec<GpuVertex>,
}

impl Default for FractalWorld {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl FractalWorld {
    #[wasm_bindgen(constructor)]
    pub fn new() -> FractalWorld {
        let mut world = FractalWorld {
            config: FractalConfig::default(),
            state: SceneState::default(),
            geometry: Geometry::new(),
            gpu_buffer: Vec::new(),
        };
        world.rebuild_geometry();
        log(&format!(
            "WASM FractalWorld created: {:?}, {} vertices",
            world.state.kind,
            world.gpu_buffer.len()
        ));
        world
    }

    /// Replace the configuration from a TOML document.
    #[wasm_bindgen]
    pub fn set_config_toml(&mut self, toml: &str) -> Result<(), JsValue> {
        let config =
            FractalConfig::from_toml_str(toml).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.config = config;
        self.state.clamp_depth(&self.config);
        self.rebuild_geometry();
        Ok(())
    }

    /// Feed a `KeyboardEvent.key`. Returns `true` if the geometry was rebuilt.
    #[wasm_bindgen]
    pub fn apply_key(&mut self, key: &str) -> bool {
        let Some(event) = key_to_event(key) else {
            return false;
        };
        if !self.state.apply(event, &self.config) {
            return false;
        }
        log(&format!(
            "{:?} depth {} ({:?})",
            self.state.kind, self.state.depth, self.state.color_mode
        ));
        self.rebuild_geometry();
        true
    }

    /// Regenerate the current scene; returns the elapsed time in milliseconds.
    #[wasm_bindgen]
    pub fn rebuild(&mut self) -> f32 {
        let start = js_sys::Date::now();
        self.rebuild_geometry();
        let elapsed = js_sys::Date::now() - start;
        elapsed as f32
    }

    #[wasm_bindgen]
    pub fn get_gpu_buffer_ptr(&self) -> *const f32 {
        self.gpu_buffer.as_ptr() as *const f32
    }

    #[wasm_bindgen]
    pub fn get_gpu_buffer_byte_length(&self) -> usize {
        bytemuck::cast_slice::<GpuVertex, u8>(&self.gpu_buffer).len()
    }

    #[wasm_bindgen]
    pub fn vertex_count(&self) -> usize {
        self.gpu_buffer.len()
    }

    /// Number of triangles or lines in the buffer.
    #[wasm_bindgen]
    pub fn primitive_count(&self) -> usize {
        self.gpu_buffer.len() / self.state.topology().vertices_per_primitive()
    }

    /// 0 = triangle list, 1 = line list.
    #[wasm_bindgen]
    pub fn topology(&self) -> u32 {
        self.state.topology() as u32
    }

    #[wasm_bindgen]
    pub fn depth(&self) -> u32 {
        self.state.depth
    }

    #[wasm_bindgen]
    pub fn scene(&self) -> u32 {
        self.state.kind as u32
    }

    #[wasm_bindgen]
    pub fn set_scene(&mut self, scene: u32) {
        let kind = SceneKind::ALL
            .get(scene as usize)
            .copied()
            .unwrap_or_default();
        self.state = SceneState::new(kind);
        self.rebuild_geometry();
    }
}

impl FractalWorld {
    pub fn state(&self) -> &SceneState {
        &self.state
    }

    pub fn vertices(&self) -> &[GpuVertex] {
        &self.gpu_buffer
    }

    fn rebuild_geometry(&mut self) {
        self.state.build(&self.config, &mut self.geometry);
        self.write_gpu_output();
    }

    fn write_gpu_output(&mut self) {
        self.gpu_buffer.clear();
        self.gpu_buffer
            .extend(self.geometry.iter().map(|(pos, col)| GpuVertex {
                position: pos.to_array(),
                color: col.to_array(),
            }));
    }
}

#[cfg(target_arch = "wasm32")]
fn log(message: &str) {
    web_sys::console::log_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
fn log(_message: &str) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gpu_vertex_layout() {
        assert_eq!(std::mem::size_of::<GpuVertex>(), 24);
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(key_to_event("ArrowUp"), Some(InputEvent::DepthUp));
        assert_eq!(key_to_event("ArrowDown"), Some(InputEvent::DepthDown));
        assert_eq!(key_to_event("ArrowLeft"), Some(InputEvent::PreviousScene));
        assert_eq!(key_to_event("C"), Some(InputEvent::CycleColorMode));
        assert_eq!(key_to_event("q"), None);
    }

    #[test]
    fn test_keys_drive_rebuild() {
        let mut world = FractalWorld::new();
        assert_eq!(world.vertex_count(), 3);
        assert_eq!(world.topology(), 0);

        assert!(world.apply_key("ArrowUp"));
        assert_eq!(world.vertex_count(), 9);
        assert_eq!(world.get_gpu_buffer_byte_length(), 9 * 24);
        assert_eq!(world.primitive_count(), 3);

        assert!(world.apply_key("ArrowDown"));
        assert!(!world.apply_key("ArrowDown"), "depth already 0");
        assert_eq!(world.vertex_count(), 3);

        assert!(world.apply_key(" "));
        assert_eq!(world.scene(), 1);
        assert_eq!(world.topology(), 1);
        assert_eq!(world.vertex_count(), 2);
        assert_eq!(world.primitive_count(), 1);
        assert!(!world.apply_key("x"));
    }

    #[test]
    fn test_set_scene_by_index() {
        let mut world = FractalWorld::new();
        world.set_scene(2);
        assert_eq!(world.state().kind, SceneKind::Tree);
        world.set_scene(1);
        assert_eq!(world.state().kind, SceneKind::Levy);
        world.set_scene(7);
        assert_eq!(world.state().kind, SceneKind::Sierpinski);
    }

    #[test]
    fn test_buffer_matches_geometry() {
        let mut world = FractalWorld::new();
        world.set_scene(2);
        world.apply_key("ArrowUp");
        world.apply_key("ArrowUp");
        let config = FractalConfig::default();
        let mut expected = Geometry::new();
        world.state().build(&config, &mut expected);
        assert_eq!(world.vertices().len(), expected.len());
        for (v, (pos, col)) in world.vertices().iter().zip(expected.iter()) {
            assert_eq!(v.position, pos.to_array());
            assert_eq!(v.color, col.to_array());
        }
    }
}
