//! Shape geometry: vertex, edge and face lists for the supported primitives.

use nalgebra::Point3;
use thiserror::Error;

/// A point in shape-local space, origin-centered.
pub type Vertex = Point3<f64>;

/// An unordered pair of vertex indices.
pub type Edge = (usize, usize);

/// An ordered sequence of vertex indices (3 or 4) in winding order.
pub type Face = Vec<usize>;

/// Errors from shape generation.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    /// Shape size must be strictly positive.
    #[error("invalid shape size {0}: must be greater than zero")]
    InvalidSize(f64),
}

/// The supported shape primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShapeKind {
    #[default]
    Cube,
    Pyramid,
}

impl ShapeKind {
    /// Human-readable name, as shown in the status overlay.
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Cube => "cube",
            ShapeKind::Pyramid => "pyramid",
        }
    }
}

/// One named primitive at one size: shared vertices plus the edges and
/// faces that index into them. Built once at startup and read-only from
/// then on; rotation always works on a fresh copy of the vertices.
#[derive(Debug, Clone)]
pub struct Shape {
    pub kind: ShapeKind,
    pub vertices: Vec<Vertex>,
    pub edges: Vec<Edge>,
    pub faces: Vec<Face>,
}

impl Shape {
    /// Generate the geometry for `kind` at `size`.
    ///
    /// Fails with [`GeometryError::InvalidSize`] when `size` is zero,
    /// negative, or NaN.
    pub fn generate(kind: ShapeKind, size: f64) -> Result<Self, GeometryError> {
        if !(size > 0.0) {
            return Err(GeometryError::InvalidSize(size));
        }
        Ok(match kind {
            ShapeKind::Cube => Self::cube(size),
            ShapeKind::Pyramid => Self::pyramid(size),
        })
    }

    /// Axis-aligned cube: 8 vertices, 12 edges, 6 quadrilateral faces.
    fn cube(size: f64) -> Self {
        let half = size / 2.0;
        let vertices = vec![
            Vertex::new(-half, -half, -half),
            Vertex::new(half, -half, -half),
            Vertex::new(half, half, -half),
            Vertex::new(-half, half, -half),
            Vertex::new(-half, -half, half),
            Vertex::new(half, -half, half),
            Vertex::new(half, half, half),
            Vertex::new(-half, half, half),
        ];
        let edges = vec![
            // back face ring
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 0),
            // front face ring
            (4, 5),
            (5, 6),
            (6, 7),
            (7, 4),
            // connecting struts
            (0, 4),
            (1, 5),
            (2, 6),
            (3, 7),
        ];
        let faces = vec![
            vec![0, 1, 2, 3],
            vec![4, 5, 6, 7],
            vec![0, 1, 5, 4],
            vec![2, 3, 7, 6],
            vec![0, 3, 7, 4],
            vec![1, 2, 6, 5],
        ];
        Self {
            kind: ShapeKind::Cube,
            vertices,
            edges,
            faces,
        }
    }

    /// Square pyramid: apex plus 4 base vertices, 8 edges, 4 triangular
    /// lateral faces and 1 quadrilateral base.
    fn pyramid(size: f64) -> Self {
        let half = size / 2.0;
        let vertices = vec![
            Vertex::new(0.0, half, 0.0), // apex
            Vertex::new(-half, -half, -half),
            Vertex::new(half, -half, -half),
            Vertex::new(half, -half, half),
            Vertex::new(-half, -half, half),
        ];
        let edges = vec![
            // lateral
            (0, 1),
            (0, 2),
            (0, 3),
            (0, 4),
            // base ring
            (1, 2),
            (2, 3),
            (3, 4),
            (4, 1),
        ];
        let faces = vec![
            vec![0, 1, 2],
            vec![0, 2, 3],
            vec![0, 3, 4],
            vec![0, 4, 1],
            vec![1, 2, 3, 4],
        ];
        Self {
            kind: ShapeKind::Pyramid,
            vertices,
            edges,
            faces,
        }
    }
}
