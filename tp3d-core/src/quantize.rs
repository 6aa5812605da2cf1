//! Intensity-to-glyph quantization.
//!
//! Downsamples the raster by 2 in each dimension (terminal cells are
//! roughly twice as tall as wide) and maps every sampled intensity to a
//! character from a configured ramp.

use crate::raster::RasterImage;

/// Dense-to-sparse glyph ramp used by the default `classic` preset.
const CLASSIC_GLYPHS: &[char] = &['@', '#', 'S', '%', '?', '*', '+', ';', ':', ',', '.'];

/// Unicode block shades, dense to sparse.
const BLOCKS_GLYPHS: &[char] = &['█', '▓', '▒', '░', ' '];

/// Terse four-level ramp for a clean look.
const MINIMAL_GLYPHS: &[char] = &['#', ':', '.', ' '];

/// An ordered glyph sequence from darkest/densest to lightest/sparsest,
/// plus the intensity bucket width used for indexing. Configuration data,
/// never mutated at runtime; the quantizer has no per-ramp logic.
#[derive(Debug, Clone)]
pub struct GlyphRamp {
    glyphs: Vec<char>,
    bucket: u32,
}

impl GlyphRamp {
    /// Build a ramp from a glyph sequence and bucket width. Returns `None`
    /// for an empty sequence or a zero bucket, which cannot index anything.
    pub fn new(glyphs: Vec<char>, bucket: u32) -> Option<Self> {
        if glyphs.is_empty() || bucket == 0 {
            return None;
        }
        Some(Self { glyphs, bucket })
    }

    /// The 11-glyph ramp with bucket width 25.
    pub fn classic() -> Self {
        Self {
            glyphs: CLASSIC_GLYPHS.to_vec(),
            bucket: 25,
        }
    }

    /// Unicode block shades.
    pub fn blocks() -> Self {
        Self::from_glyphs(BLOCKS_GLYPHS)
    }

    /// Four-level minimal ramp.
    pub fn minimal() -> Self {
        Self::from_glyphs(MINIMAL_GLYPHS)
    }

    /// Derive the bucket width so the ramp spans the full 0-255 range.
    fn from_glyphs(glyphs: &[char]) -> Self {
        let bucket = (256 + glyphs.len() as u32 - 1) / glyphs.len() as u32;
        Self {
            glyphs: glyphs.to_vec(),
            bucket,
        }
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Map an intensity to its glyph.
    ///
    /// The index clamp is required, not defensive polish: with the classic
    /// bucket width of 25, intensities 250-255 would otherwise index one
    /// past an 11-entry ramp. It also makes shorter ramps legal.
    pub fn glyph_for(&self, intensity: u8) -> char {
        let idx = (intensity as u32 / self.bucket) as usize;
        self.glyphs[idx.min(self.glyphs.len() - 1)]
    }
}

impl Default for GlyphRamp {
    fn default() -> Self {
        Self::classic()
    }
}

/// The quantizer's output: `height` newline-free strings of `width`
/// characters each, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiFrame {
    rows: Vec<String>,
}

impl AsciiFrame {
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |r| r.chars().count())
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

/// Quantize a raster image into a glyph grid of half the image's
/// dimensions.
///
/// Downsampling is nearest: each output cell samples the top-left pixel
/// of its 2x2 source block, so the output only ever contains intensities
/// the rasterizer actually wrote.
pub fn quantize(img: &RasterImage, ramp: &GlyphRamp) -> AsciiFrame {
    let side = img.size() / 2;
    let rows = (0..side)
        .map(|y| {
            (0..side)
                .map(|x| ramp.glyph_for(img.get(x * 2, y * 2)))
                .collect()
        })
        .collect();
    AsciiFrame { rows }
}
