//! Palette to terminal-attribute mapping.
//!
//! Each frame's palette is reduced once, at startup, to a fixed 256-entry
//! table of attribute pairs so rendering is a plain indexed lookup.

use crate::source::Rgb;

/// A terminal display attribute: an index into the xterm-256 palette.
pub type Attr = u8;

/// Foreground/background attribute pair for one palette entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttrPair {
    pub fg: Attr,
    pub bg: Attr,
}

/// Lookup table from pixel byte to attribute pair.
///
/// Always exactly 256 entries so a pixel byte can index it without a
/// bounds check; entries past the real palette length stay zeroed.
pub type AttrTable = [AttrPair; 256];

/// How palette colors are reduced to terminal attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorStrategy {
    /// Foreground from the red channel, background from the blue channel.
    ///
    /// Cheap and approximate on purpose; both channels already span the
    /// xterm-256 attribute range, so they pass through unscaled.
    Color,
    /// Both attributes set to the same level on the grayscale ramp, so
    /// cells render as solid gray blocks.
    Mono,
}

/// First attribute of the xterm grayscale ramp (24 levels, 232..=255).
const GRAY_RAMP_BASE: u16 = 232;
/// Luma bucket width spreading 0..=255 across the 24 ramp levels.
const GRAY_BUCKET: u16 = 11;
const GRAY_LEVELS: u16 = 24;

/// Build the attribute table for one frame's palette.
///
/// Pure; applied independently per frame.
pub fn map_palette(palette: &[Rgb], strategy: ColorStrategy) -> AttrTable {
    let mut table = [AttrPair::default(); 256];
    for (entry, color) in table.iter_mut().zip(palette.iter()) {
        *entry = match strategy {
            ColorStrategy::Color => AttrPair {
                fg: color.r,
                bg: color.b,
            },
            ColorStrategy::Mono => {
                let level = gray_level(*color);
                AttrPair {
                    fg: level,
                    bg: level,
                }
            }
        };
    }
    table
}

/// Map a color's luma onto the grayscale ramp.
fn gray_level(color: Rgb) -> Attr {
    // ITU-R 601 integer luma
    let luma =
        (299 * u32::from(color.r) + 587 * u32::from(color.g) + 114 * u32::from(color.b)) / 1000;
    let level = (luma as u16 / GRAY_BUCKET).min(GRAY_LEVELS - 1);
    (GRAY_RAMP_BASE + level) as Attr
}
