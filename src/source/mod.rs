//! Source acquisition: resolve a path or URL and decode it into frames.
//!
//! Acquisition happens exactly once, synchronously, before playback
//! starts. The decoded [`Animation`] is immutable for the rest of the
//! process lifetime.

mod error;

pub use error::SourceError;

use std::fs::File;
use std::io::Read;

use tracing::debug;

/// A single palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// One decoded frame: palette indices plus the palette they refer to.
///
/// Never mutated after decode.
#[derive(Debug, Clone)]
pub struct Frame {
    pub width: u16,
    pub height: u16,
    /// Row stride of `pixels` in bytes (equals `width` for GIF data)
    pub stride: usize,
    /// Palette indices, one byte per pixel, `stride * height` bytes long
    pub pixels: Vec<u8>,
    /// Up to 256 colors; different frames may carry different palettes
    pub palette: Vec<Rgb>,
    /// Display duration from the GIF metadata. Carried structurally;
    /// playback uses one fixed tick for every frame instead.
    pub delay_ms: u32,
}

/// An ordered, immutable frame sequence.
#[derive(Debug, Clone)]
pub struct Animation {
    pub frames: Vec<Frame>,
}

/// Open a local file or an http(s) URL as a byte stream.
pub fn open_source(name: &str) -> Result<Box<dyn Read>, SourceError> {
    if name.starts_with("http://") || name.starts_with("https://") {
        let response = ureq::get(name).call().map_err(|e| SourceError::Fetch {
            url: name.to_string(),
            source: Box::new(e),
        })?;
        Ok(Box::new(response.into_reader()))
    } else {
        let file = File::open(name).map_err(|e| SourceError::Open {
            path: name.into(),
            source: e,
        })?;
        Ok(Box::new(file))
    }
}

/// Open `name` and decode it into an [`Animation`].
pub fn load_animation(name: &str) -> Result<Animation, SourceError> {
    let reader = open_source(name)?;
    let animation = decode(reader)?;
    debug!(
        source = name,
        frames = animation.frames.len(),
        "decoded animation"
    );
    Ok(animation)
}

/// Decode a GIF byte stream into palette-indexed frames.
///
/// Frames keep their raw palette indices; a frame without a local palette
/// falls back to the file's global palette.
pub fn decode(reader: impl Read) -> Result<Animation, SourceError> {
    let mut options = gif::DecodeOptions::new();
    options.set_color_output(gif::ColorOutput::Indexed);
    let mut decoder = options.read_info(reader)?;

    let global_palette = decoder.global_palette().map(parse_palette);

    let mut frames = Vec::new();
    while let Some(frame) = decoder.read_next_frame()? {
        let palette = match &frame.palette {
            Some(local) => parse_palette(local),
            None => global_palette
                .clone()
                .ok_or(SourceError::MissingPalette {
                    index: frames.len(),
                })?,
        };
        frames.push(Frame {
            width: frame.width,
            height: frame.height,
            stride: frame.width as usize,
            pixels: frame.buffer.to_vec(),
            palette,
            // GIF delays are in hundredths of a second
            delay_ms: u32::from(frame.delay) * 10,
        });
    }

    if frames.is_empty() {
        return Err(SourceError::Empty);
    }
    Ok(Animation { frames })
}

/// Split a flat RGB triplet table into palette entries.
fn parse_palette(raw: &[u8]) -> Vec<Rgb> {
    raw.chunks_exact(3)
        .map(|c| Rgb {
            r: c[0],
            g: c[1],
            b: c[2],
        })
        .collect()
}
