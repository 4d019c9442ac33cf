use glam::Vec3;

/// Homogeneous 2D point, z is always 0.
pub type Point = Vec3;

/// Linear RGB colour. Never clamped by the generator.
pub type Color = Vec3;

/// Primitive topology the host should draw the buffer with.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Topology {
    Triangles = 0,
    Lines = 1,
}

impl Topology {
    pub fn vertices_per_primitive(self) -> usize {
        match self {
            Topology::Triangles => 3,
            Topology::Lines => 2,
        }
    }
}

/// Flattened output of one generation pass.
///
/// Positions and colours are stored as parallel arrays so each can be
/// uploaded verbatim into its own vertex attribute buffer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Geometry {
    pub verts: Vec<Point>,
    pub cols: Vec<Color>,
}

impl Geometry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all vertices, keeping the allocations for the next pass.
    pub fn clear(&mut self) {
        self.verts.clear();
        self.cols.clear();
    }

    pub fn reserve(&mut self, additional: usize) {
        self.verts.reserve(additional);
        self.cols.reserve(additional);
    }

    pub fn push(&mut self, position: Point, color: Color) {
        self.verts.push(position);
        self.cols.push(color);
    }

    pub fn len(&self) -> usize {
        self.verts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    /// Iterate `(position, colour)` pairs in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Color)> + '_ {
        self.verts.iter().copied().zip(self.cols.iter().copied())
    }

    /// Mean of all emitted positions, `None` when empty.
    pub fn centroid(&self) -> Option<Point> {
        if self.verts.is_empty() {
            return None;
        }
        let sum: Vec3 = self.verts.iter().copied().sum();
        Some(sum / self.verts.len() as f32)
    }

    /// Tightly packed `[f32; 3]` positions.
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.verts)
    }

    /// Tightly packed `[f32; 3]` colours.
    pub fn color_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_keeps_capacity() {
        let mut geom = Geometry::new();
        geom.reserve(16);
        geom.push(Vec3::X, Vec3::ONE);
        geom.clear();
        assert!(geom.is_empty());
        assert!(geom.verts.capacity() >= 16);
        assert!(geom.cols.capacity() >= 16);
    }

    #[test]
    fn test_byte_views_are_tightly_packed() {
        let mut geom = Geometry::new();
        geom.push(Vec3::new(1.0, 2.0, 0.0), Vec3::new(0.1, 0.2, 0.3));
        geom.push(Vec3::new(3.0, 4.0, 0.0), Vec3::new(0.4, 0.5, 0.6));
        assert_eq!(geom.position_bytes().len(), 2 * 12);
        assert_eq!(geom.color_bytes().len(), 2 * 12);
        let floats: &[f32] = bytemuck::cast_slice(geom.position_bytes());
        assert_eq!(floats, &[1.0, 2.0, 0.0, 3.0, 4.0, 0.0]);
    }

    #[test]
    fn test_centroid_empty() {
        assert_eq!(Geometry::new().centroid(), None);
    }
}
