use glam::{Mat3, Vec3};

/// Midpoint of two points.
pub fn midpoint(a: Vec3, b: Vec3) -> Vec3 {
    (a + b) * 0.5
}

/// Apex of one Lévy C-curve split.
///
/// The vector `b - a` is halved and turned a quarter turn, giving the third
/// corner of the right isosceles triangle standing on `a..b`:
/// `a + (d.x/2 - d.y/2, d.y/2 + d.x/2)`.
pub fn levy_apex(a: Vec3, b: Vec3) -> Vec3 {
    let d = b - a;
    a + Vec3::new(d.x * 0.5 - d.y * 0.5, d.y * 0.5 + d.x * 0.5, 0.0)
}

/// Rotate `v` about the z axis, the axis perpendicular to the drawing plane.
pub fn rotate_z(v: Vec3, degrees: f32) -> Vec3 {
    Mat3::from_rotation_z(degrees.to_radians()) * v
}

/// Share of the pass still remaining, `depth / total_depth`.
///
/// Returns 0.0 for a zero `total_depth` instead of dividing by zero.
pub fn depth_fraction(depth: u32, total_depth: u32) -> f32 {
    if total_depth == 0 {
        return 0.0;
    }
    depth as f32 / total_depth as f32
}

/// `base^exp`, saturating at `usize::MAX`.
pub fn saturating_pow(base: usize, exp: u32) -> usize {
    base.checked_pow(exp).unwrap_or(usize::MAX)
}
