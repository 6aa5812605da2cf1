//! tp3d core library - the stateless rendering pipeline.
//!
//! Everything in this crate is a pure function of its inputs: shape
//! generation, rotation, orthographic projection, grayscale rasterization
//! and ASCII quantization. Terminal I/O and loop state live in
//! `tp3d-terminal`.

pub mod geometry;
pub mod projection;
pub mod quantize;
pub mod raster;
pub mod transform;

// Re-export commonly used types
pub use geometry::{Edge, Face, GeometryError, Shape, ShapeKind, Vertex};
pub use quantize::{quantize, AsciiFrame, GlyphRamp};
pub use raster::{rasterize, RasterImage};
pub use transform::{rotate, rotation_matrix, RotationState};
