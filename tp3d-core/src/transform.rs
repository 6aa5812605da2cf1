//! Rotation state and the combined X/Y/Z rotation transform.

use nalgebra::{Matrix4, Vector3};

use crate::geometry::Vertex;

/// Rotation angles around the three axes, in degrees.
///
/// Degrees are the unit of record because both the CLI and the per-key
/// step are specified in degrees; conversion to radians happens when the
/// matrix is built.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RotationState {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl RotationState {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    /// Accumulate delta angles (in degrees).
    pub fn rotate(&mut self, dx: f64, dy: f64, dz: f64) {
        self.x += dx;
        self.y += dy;
        self.z += dz;
    }
}

/// Build the combined rotation matrix for a rotation state.
///
/// Axis order is fixed: X first, then Y, then Z, each applied to the
/// already-rotated coordinates of the previous step, so the matrices
/// compose as `Rz * Ry * Rx`. Swapping the order changes the visible
/// motion, so it must stay exactly this.
pub fn rotation_matrix(rotation: &RotationState) -> Matrix4<f64> {
    let rx = Matrix4::new_rotation(Vector3::new(rotation.x.to_radians(), 0.0, 0.0));
    let ry = Matrix4::new_rotation(Vector3::new(0.0, rotation.y.to_radians(), 0.0));
    let rz = Matrix4::new_rotation(Vector3::new(0.0, 0.0, rotation.z.to_radians()));
    rz * ry * rx
}

/// Rotate a single vertex, producing a fresh rotated copy.
///
/// Pure: the output depends only on the input vertex and the three
/// current angles. The original vertex is never mutated.
pub fn rotate(v: &Vertex, rotation: &RotationState) -> Vertex {
    rotation_matrix(rotation).transform_point(v)
}
