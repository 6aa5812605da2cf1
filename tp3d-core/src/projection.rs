//! Orthographic projection to raster coordinates.

use crate::geometry::Vertex;

/// Project a rotated vertex onto the raster plane.
///
/// Orthographic: z is the depth axis and is simply dropped; x and y are
/// truncated toward zero. No perspective divide and no near/far clipping,
/// by design.
pub fn project(v: &Vertex) -> (i32, i32) {
    (v.x as i32, v.y as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drops_depth_axis() {
        assert_eq!(project(&Vertex::new(4.0, 9.0, 123.0)), (4, 9));
        assert_eq!(project(&Vertex::new(4.0, 9.0, -123.0)), (4, 9));
    }

    #[test]
    fn test_truncates_toward_zero() {
        assert_eq!(project(&Vertex::new(2.9, -2.9, 0.0)), (2, -2));
        assert_eq!(project(&Vertex::new(-0.4, 0.4, 1.0)), (0, 0));
    }
}
