//! Grayscale rasterization of projected shapes.
//!
//! Produces a square single-channel image: white background, mid-gray
//! face fills, black edge strokes. All drawing clips to the image bounds
//! in the single pixel-write path, so out-of-frame geometry is silently
//! dropped rather than an error.

use crate::geometry::{Edge, Face, Vertex};
use crate::projection::project;

/// Background intensity (white).
pub const BACKGROUND: u8 = 255;

/// Fill intensity for solid faces (mid-gray).
pub const FACE_FILL: u8 = 150;

/// Stroke intensity for edges (black).
pub const EDGE_INK: u8 = 0;

/// Side of the square stamp drawn at each step of an edge stroke, in
/// pixels. Odd so the stamp centers on the line.
pub const STROKE_WIDTH: i32 = 3;

/// A square grid of intensity values, row-major.
#[derive(Debug, Clone)]
pub struct RasterImage {
    size: u32,
    pixels: Vec<u8>,
}

impl RasterImage {
    /// Allocate a `size` x `size` image filled with the background color.
    pub fn new(size: u32) -> Self {
        Self {
            size,
            pixels: vec![BACKGROUND; (size * size) as usize],
        }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Read a pixel. Callers pass in-range coordinates.
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.pixels[(y * self.size + x) as usize]
    }

    /// Write a pixel; coordinates outside the image are ignored.
    pub fn set(&mut self, x: i32, y: i32, intensity: u8) {
        if x >= 0 && y >= 0 && (x as u32) < self.size && (y as u32) < self.size {
            self.pixels[(y as u32 * self.size + x as u32) as usize] = intensity;
        }
    }

    /// Iterate over every pixel value, row-major.
    pub fn pixels(&self) -> impl Iterator<Item = u8> + '_ {
        self.pixels.iter().copied()
    }
}

/// Stamp a `STROKE_WIDTH` square centered on (x, y).
fn stamp(img: &mut RasterImage, x: i32, y: i32, intensity: u8) {
    let half = STROKE_WIDTH / 2;
    for dy in -half..=half {
        for dx in -half..=half {
            img.set(x + dx, y + dy, intensity);
        }
    }
}

/// Draw a stroked line between two raster points (Bresenham walk with a
/// square stamp at every step).
pub fn draw_line(img: &mut RasterImage, from: (i32, i32), to: (i32, i32), intensity: u8) {
    let (mut x, mut y) = from;
    let (x1, y1) = to;
    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        stamp(img, x, y, intensity);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Fill a simple polygon with a scanline even-odd rule.
///
/// Scanlines sample at pixel centers (y + 0.5) so polygon vertices never
/// count twice. Degenerate polygons (fewer than 3 points) draw nothing.
pub fn fill_polygon(img: &mut RasterImage, points: &[(i32, i32)], intensity: u8) {
    if points.len() < 3 {
        return;
    }
    let min_y = points.iter().map(|p| p.1).min().unwrap_or(0).max(0);
    let max_y = points
        .iter()
        .map(|p| p.1)
        .max()
        .unwrap_or(0)
        .min(img.size() as i32 - 1);

    for y in min_y..=max_y {
        let yc = y as f64 + 0.5;
        let mut crossings: Vec<f64> = Vec::new();
        for i in 0..points.len() {
            let (x1, y1) = points[i];
            let (x2, y2) = points[(i + 1) % points.len()];
            let (y1, y2) = (y1 as f64, y2 as f64);
            if (y1 <= yc) != (y2 <= yc) {
                let t = (yc - y1) / (y2 - y1);
                crossings.push(x1 as f64 + t * (x2 - x1) as f64);
            }
        }
        crossings.sort_by(|a, b| a.total_cmp(b));
        for span in crossings.chunks_exact(2) {
            let start = span[0].ceil() as i32;
            let end = span[1].floor() as i32;
            for x in start..=end {
                img.set(x, y, intensity);
            }
        }
    }
}

/// Rasterize rotated geometry into a fresh image.
///
/// Projected coordinates are translated by half the image size so the
/// shape's origin sits at the frame center. In wireframe mode only the
/// edges are stroked; in solid mode every face is filled first and the
/// edges are stroked on top. Faces paint in list order with no depth
/// sorting, so at some rotations a later face overdraws a nearer one --
/// a known limitation kept as the reproducible baseline.
pub fn rasterize(
    vertices: &[Vertex],
    edges: &[Edge],
    faces: &[Face],
    image_size: u32,
    wireframe: bool,
) -> RasterImage {
    let mut img = RasterImage::new(image_size);
    let center = (image_size / 2) as i32;
    let projected: Vec<(i32, i32)> = vertices
        .iter()
        .map(|v| {
            let (x, y) = project(v);
            (x + center, y + center)
        })
        .collect();

    if !wireframe {
        for face in faces {
            let polygon: Vec<(i32, i32)> = face.iter().map(|&i| projected[i]).collect();
            fill_polygon(&mut img, &polygon, FACE_FILL);
        }
    }
    for &(a, b) in edges {
        draw_line(&mut img, projected[a], projected[b], EDGE_INK);
    }
    img
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Shape, ShapeKind};

    #[test]
    fn test_new_image_is_all_background() {
        let img = RasterImage::new(16);
        assert!(img.pixels().all(|p| p == BACKGROUND));
    }

    #[test]
    fn test_set_out_of_bounds_is_ignored() {
        let mut img = RasterImage::new(8);
        img.set(-1, 0, EDGE_INK);
        img.set(0, -1, EDGE_INK);
        img.set(8, 0, EDGE_INK);
        img.set(0, 8, EDGE_INK);
        assert!(img.pixels().all(|p| p == BACKGROUND));
    }

    #[test]
    fn test_horizontal_line_has_stroke_width() {
        let mut img = RasterImage::new(32);
        draw_line(&mut img, (4, 16), (28, 16), EDGE_INK);
        // Three rows of ink around the center row, background above and below.
        for y in 15..=17 {
            assert_eq!(img.get(16, y), EDGE_INK);
        }
        assert_eq!(img.get(16, 13), BACKGROUND);
        assert_eq!(img.get(16, 19), BACKGROUND);
    }

    #[test]
    fn test_line_clips_outside_image() {
        let mut img = RasterImage::new(16);
        draw_line(&mut img, (-20, 8), (40, 8), EDGE_INK);
        assert_eq!(img.get(0, 8), EDGE_INK);
        assert_eq!(img.get(15, 8), EDGE_INK);
    }

    #[test]
    fn test_fill_triangle_covers_interior() {
        let mut img = RasterImage::new(32);
        fill_polygon(&mut img, &[(4, 4), (28, 4), (16, 28)], FACE_FILL);
        assert_eq!(img.get(16, 10), FACE_FILL);
        // Well outside the triangle.
        assert_eq!(img.get(2, 20), BACKGROUND);
        assert_eq!(img.get(30, 20), BACKGROUND);
    }

    #[test]
    fn test_degenerate_polygon_draws_nothing() {
        let mut img = RasterImage::new(8);
        fill_polygon(&mut img, &[(1, 1), (6, 6)], FACE_FILL);
        assert!(img.pixels().all(|p| p == BACKGROUND));
    }

    #[test]
    fn test_wireframe_cube_outline() {
        let cube = Shape::generate(ShapeKind::Cube, 40.0).unwrap();
        let img = rasterize(&cube.vertices, &cube.edges, &cube.faces, 100, true);

        let ink = img.pixels().filter(|&p| p == EDGE_INK).count();
        assert!(ink > 0, "wireframe must produce black pixels");
        // With zero rotation the cube projects to a square spanning
        // 30..=70; everything outside the stroked bound stays white.
        for y in 0..100u32 {
            for x in 0..100u32 {
                let inside = (28..=72).contains(&x) && (28..=72).contains(&y);
                if !inside {
                    assert_eq!(img.get(x, y), BACKGROUND, "pixel ({x},{y})");
                }
            }
        }
        // The outline itself: corners of the projected square.
        assert_eq!(img.get(30, 30), EDGE_INK);
        assert_eq!(img.get(70, 70), EDGE_INK);
        // Interior is not filled in wireframe mode.
        assert_eq!(img.get(50, 50), BACKGROUND);
    }

    #[test]
    fn test_solid_cube_fills_interior_and_strokes_edges() {
        let cube = Shape::generate(ShapeKind::Cube, 40.0).unwrap();
        let img = rasterize(&cube.vertices, &cube.edges, &cube.faces, 100, false);
        assert_eq!(img.get(50, 50), FACE_FILL);
        assert_eq!(img.get(30, 30), EDGE_INK);
    }

    #[test]
    fn test_rasterize_survives_oversized_shape() {
        // Shape much larger than the frame: must clip, not panic.
        let cube = Shape::generate(ShapeKind::Cube, 500.0).unwrap();
        let img = rasterize(&cube.vertices, &cube.edges, &cube.faces, 64, false);
        assert_eq!(img.size(), 64);
    }
}
