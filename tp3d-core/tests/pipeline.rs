//! End-to-end pipeline tests: geometry -> rotation -> projection ->
//! raster -> glyph grid, with no terminal involved.

use tp3d_core::{quantize, rasterize, rotate, GlyphRamp, RotationState, Shape, ShapeKind, Vertex};

const IMAGE_SIZE: u32 = 100;

fn render(shape: &Shape, rotation: &RotationState, wireframe: bool) -> tp3d_core::AsciiFrame {
    let rotated: Vec<Vertex> = shape.vertices.iter().map(|v| rotate(v, rotation)).collect();
    let img = rasterize(&rotated, &shape.edges, &shape.faces, IMAGE_SIZE, wireframe);
    quantize(&img, &GlyphRamp::classic())
}

// ---------------------------------------------------------------------------
// Wireframe cube, zero rotation
// ---------------------------------------------------------------------------

#[test]
fn wireframe_cube_produces_square_outline() {
    let cube = Shape::generate(ShapeKind::Cube, 40.0).unwrap();
    let frame = render(&cube, &RotationState::zero(), true);

    assert_eq!(frame.width(), 50);
    assert_eq!(frame.height(), 50);

    // Only the background glyph and the edge glyph may appear.
    for row in frame.rows() {
        for c in row.chars() {
            assert!(c == '.' || c == '@', "unexpected glyph {c:?}");
        }
    }

    let cell = |x: usize, y: usize| frame.rows()[y].chars().nth(x).unwrap();

    // The cube spans raster 30..=70, so the outline lands around grid
    // 15..=35: a horizontal run across the top edge, vertical strokes at
    // the sides of the middle row, clear interior and clear margins.
    for x in 15..=35 {
        assert_eq!(cell(x, 15), '@', "top edge at column {x}");
    }
    assert_eq!(cell(15, 25), '@');
    assert_eq!(cell(35, 25), '@');
    assert_eq!(cell(25, 25), '.');
    assert!(frame.rows()[..14].iter().all(|r| r.chars().all(|c| c == '.')));
    assert!(frame.rows()[37..].iter().all(|r| r.chars().all(|c| c == '.')));
}

// ---------------------------------------------------------------------------
// Solid mode
// ---------------------------------------------------------------------------

#[test]
fn solid_cube_fills_silhouette_with_dark_outline() {
    let cube = Shape::generate(ShapeKind::Cube, 40.0).unwrap();
    let frame = render(&cube, &RotationState::zero(), false);

    let cell = |x: usize, y: usize| frame.rows()[y].chars().nth(x).unwrap();
    assert_eq!(cell(25, 25), '+'); // face fill 150 buckets to index 6
    assert_eq!(cell(15, 15), '@'); // outline corner
    assert_eq!(cell(5, 5), '.'); // margin stays background
}

#[test]
fn solid_pyramid_renders_after_rotation() {
    let pyramid = Shape::generate(ShapeKind::Pyramid, 40.0).unwrap();
    let frame = render(&pyramid, &RotationState::new(30.0, 45.0, 10.0), false);

    let ink: usize = frame
        .rows()
        .iter()
        .map(|r| r.chars().filter(|&c| c != '.').count())
        .sum();
    assert!(ink > 0, "rotated pyramid must leave ink on the grid");
}

// ---------------------------------------------------------------------------
// Rotation does not mutate the source geometry
// ---------------------------------------------------------------------------

#[test]
fn rendering_leaves_shape_untouched() {
    let cube = Shape::generate(ShapeKind::Cube, 40.0).unwrap();
    let before = cube.vertices.clone();
    let _ = render(&cube, &RotationState::new(90.0, 45.0, 30.0), false);
    assert_eq!(cube.vertices, before);
}

// ---------------------------------------------------------------------------
// Oversized geometry clips instead of failing
// ---------------------------------------------------------------------------

#[test]
fn oversized_shape_clips_to_frame() {
    let cube = Shape::generate(ShapeKind::Cube, 1000.0).unwrap();
    let frame = render(&cube, &RotationState::new(10.0, 20.0, 30.0), true);
    assert_eq!(frame.width(), 50);
    assert_eq!(frame.height(), 50);
}
