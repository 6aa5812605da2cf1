//! CLI argument parsing with clap.

use clap::{Parser, ValueEnum};
use tp3d_core::{GlyphRamp, ShapeKind};

/// Rotating polyhedra rendered as ASCII art in the terminal.
#[derive(Parser, Debug)]
#[command(name = "tp3d")]
#[command(version, about = "Render rotating 3D shapes as terminal ASCII art", long_about = None)]
pub struct Args {
    /// Shape to render
    #[arg(value_enum, default_value_t = ShapeArg::Cube)]
    pub shape: ShapeArg,

    /// Size of the shape
    #[arg(default_value_t = 40, value_parser = clap::value_parser!(u32).range(1..))]
    pub size: u32,

    /// Initial rotation around the X axis, in degrees
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub x: f64,

    /// Initial rotation around the Y axis, in degrees
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub y: f64,

    /// Initial rotation around the Z axis, in degrees
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub z: f64,

    /// Draw edges only, without face fills
    #[arg(long)]
    pub wireframe: bool,

    /// Rotate continuously instead of reacting to arrow keys
    #[arg(long)]
    pub auto: bool,

    /// Glyph ramp used for intensity mapping
    #[arg(long, value_enum, default_value_t = CharsetArg::Classic)]
    pub charset: CharsetArg,
}

/// Shape selection on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ShapeArg {
    #[default]
    Cube,
    Pyramid,
}

impl From<ShapeArg> for ShapeKind {
    fn from(s: ShapeArg) -> Self {
        match s {
            ShapeArg::Cube => ShapeKind::Cube,
            ShapeArg::Pyramid => ShapeKind::Pyramid,
        }
    }
}

/// Glyph ramp preset selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CharsetArg {
    #[default]
    Classic,
    Blocks,
    Minimal,
}

impl CharsetArg {
    pub fn ramp(self) -> GlyphRamp {
        match self {
            CharsetArg::Classic => GlyphRamp::classic(),
            CharsetArg::Blocks => GlyphRamp::blocks(),
            CharsetArg::Minimal => GlyphRamp::minimal(),
        }
    }
}
