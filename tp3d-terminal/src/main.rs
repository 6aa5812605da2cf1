//! tp3d - rotating polyhedra as terminal ASCII art.
//!
//! Controls:
//!   - Up/Down: rotate around X
//!   - Left/Right: rotate around Y
//!   - PageUp/PageDown: rotate around Z
//!   - Q/ESC: quit

use std::error::Error;

use clap::Parser;
use tp3d_core::{RotationState, Shape};
use tp3d_terminal::{cli, App, RotationMode, TerminalScreen, ViewOptions};

fn main() -> Result<(), Box<dyn Error>> {
    let args = cli::Args::parse();

    // Logs go to stderr, so redirecting them keeps the live screen clean.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let shape = Shape::generate(args.shape.into(), args.size as f64)?;
    log::info!(
        "generated {}: {} vertices, {} edges, {} faces",
        shape.kind.name(),
        shape.vertices.len(),
        shape.edges.len(),
        shape.faces.len(),
    );

    let rotation = RotationState::new(args.x, args.y, args.z);
    let options = ViewOptions {
        wireframe: args.wireframe,
        mode: if args.auto {
            RotationMode::Auto
        } else {
            RotationMode::Interactive
        },
        ramp: args.charset.ramp(),
        ..ViewOptions::default()
    };

    let screen = TerminalScreen::new()?;
    App::new(shape, rotation, options, screen).run()?;
    Ok(())
}
