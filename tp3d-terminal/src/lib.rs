//! The render loop: owns the rotation state, drives the core pipeline
//! every frame, and talks to the terminal through the [`Screen`] seam.

use std::io;
use std::time::{Duration, Instant};

use tp3d_core::{quantize, rasterize, rotate, AsciiFrame, GlyphRamp, RotationState, Shape, Vertex};

pub mod cli;
pub mod screen;

pub use screen::{Key, Screen, TerminalScreen};

/// Target frame interval; the remaining slot time doubles as the input
/// poll timeout, which keeps rotation speed independent of input.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(100);

/// Per-frame angular increment in auto mode, degrees (x, y, z).
pub const AUTO_STEP: (f64, f64, f64) = (1.0, 0.8, 0.3);

/// Angular step per directional key press, degrees.
pub const KEY_STEP: f64 = 5.0;

/// Side of the square raster the pipeline renders into. The glyph grid
/// is half this per axis.
pub const IMAGE_SIZE: u32 = 100;

/// How rotation advances each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationMode {
    /// Directional keys step one axis by +/-5 degrees.
    #[default]
    Interactive,
    /// Fixed increment every frame; directional keys are ignored.
    Auto,
}

/// Render-loop configuration, assembled once from the CLI.
#[derive(Debug, Clone)]
pub struct ViewOptions {
    pub wireframe: bool,
    pub mode: RotationMode,
    pub image_size: u32,
    pub ramp: GlyphRamp,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            wireframe: false,
            mode: RotationMode::Interactive,
            image_size: IMAGE_SIZE,
            ramp: GlyphRamp::classic(),
        }
    }
}

/// The long-lived application: shape geometry (read-only after startup),
/// the rotation state it alone mutates, and the injected screen.
pub struct App<S: Screen> {
    shape: Shape,
    rotation: RotationState,
    options: ViewOptions,
    screen: S,
    running: bool,
    frame_count: u32,
    fps: f32,
    fps_window_start: Instant,
}

impl<S: Screen> App<S> {
    pub fn new(shape: Shape, rotation: RotationState, options: ViewOptions, screen: S) -> Self {
        Self {
            shape,
            rotation,
            options,
            screen,
            running: true,
            frame_count: 0,
            fps: 0.0,
            fps_window_start: Instant::now(),
        }
    }

    pub fn rotation(&self) -> RotationState {
        self.rotation
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Run until a quit key flips the running flag; the flag is checked
    /// at the top of each iteration, so there is no mid-frame cancel.
    pub fn run(&mut self) -> io::Result<()> {
        log::info!(
            "rendering {} ({} mode, {})",
            self.shape.kind.name(),
            match self.options.mode {
                RotationMode::Interactive => "interactive",
                RotationMode::Auto => "auto",
            },
            if self.options.wireframe {
                "wireframe"
            } else {
                "solid"
            },
        );
        while self.running {
            self.tick()?;
        }
        Ok(())
    }

    /// One loop iteration: render, present, poll input for the remainder
    /// of the frame slot, advance the rotation state.
    pub fn tick(&mut self) -> io::Result<()> {
        let frame_start = Instant::now();

        let frame = self.render_frame();
        self.present(&frame)?;

        let wait = FRAME_INTERVAL.saturating_sub(frame_start.elapsed());
        let key = self.screen.poll_key(wait)?;
        self.advance(key);

        self.update_fps();
        Ok(())
    }

    /// Drive the core pipeline for the current rotation state. The shape's
    /// vertices are rotated into a fresh copy; the originals never change.
    fn render_frame(&self) -> AsciiFrame {
        let rotated: Vec<Vertex> = self
            .shape
            .vertices
            .iter()
            .map(|v| rotate(v, &self.rotation))
            .collect();
        let img = rasterize(
            &rotated,
            &self.shape.edges,
            &self.shape.faces,
            self.options.image_size,
            self.options.wireframe,
        );
        quantize(&img, &self.options.ramp)
    }

    /// Write the frame clipped to the terminal: rows beyond the terminal's
    /// height are dropped, row content beyond its width is truncated. The
    /// status line overlays the top row, clipped the same way.
    fn present(&mut self, frame: &AsciiFrame) -> io::Result<()> {
        let (cols, rows) = self.screen.size()?;
        let visible: Vec<String> = frame
            .rows()
            .iter()
            .take(rows as usize)
            .map(|row| row.chars().take(cols as usize).collect())
            .collect();
        self.screen.draw_grid(&visible)?;

        let status: String = self.status_line().chars().take(cols as usize).collect();
        self.screen.draw_status(&status)?;
        self.screen.present()
    }

    fn status_line(&self) -> String {
        format!(
            "tp3d | {} | x:{:7.1} y:{:7.1} z:{:7.1} | {:.1} fps | {}",
            self.shape.kind.name(),
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
            self.fps,
            match self.options.mode {
                RotationMode::Interactive => "arrows/pgup/pgdn rotate, q quits",
                RotationMode::Auto => "auto-rotating, q quits",
            },
        )
    }

    /// Advance the loop state for one frame given the polled key.
    ///
    /// Quit is honored in both modes. Auto mode applies the fixed
    /// increment and ignores directional keys; interactive mode applies
    /// one +/-5 degree step per directional key and leaves the angles
    /// unchanged on a frame with no input.
    pub fn advance(&mut self, key: Option<Key>) {
        if key == Some(Key::Quit) {
            log::debug!("quit requested");
            self.running = false;
            return;
        }
        match self.options.mode {
            RotationMode::Auto => {
                let (dx, dy, dz) = AUTO_STEP;
                self.rotation.rotate(dx, dy, dz);
            }
            RotationMode::Interactive => match key {
                Some(Key::Up) => self.rotation.rotate(-KEY_STEP, 0.0, 0.0),
                Some(Key::Down) => self.rotation.rotate(KEY_STEP, 0.0, 0.0),
                Some(Key::Left) => self.rotation.rotate(0.0, -KEY_STEP, 0.0),
                Some(Key::Right) => self.rotation.rotate(0.0, KEY_STEP, 0.0),
                Some(Key::PageUp) => self.rotation.rotate(0.0, 0.0, -KEY_STEP),
                Some(Key::PageDown) => self.rotation.rotate(0.0, 0.0, KEY_STEP),
                Some(Key::Quit) | None => {}
            },
        }
    }

    fn update_fps(&mut self) {
        self.frame_count += 1;
        let elapsed = self.fps_window_start.elapsed();
        if elapsed.as_secs() >= 1 {
            self.fps = self.frame_count as f32 / elapsed.as_secs_f32();
            log::trace!("fps: {:.1}", self.fps);
            self.frame_count = 0;
            self.fps_window_start = Instant::now();
        }
    }
}
