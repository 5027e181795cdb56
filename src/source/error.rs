//! Source acquisition errors.

use std::io;
use std::path::PathBuf;

/// Errors that can occur while opening or decoding an animation source.
///
/// All of these are fatal at startup; the playback loop never starts.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to open {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("request for {url} failed: {source}")]
    Fetch {
        url: String,
        source: Box<ureq::Error>,
    },

    #[error("failed to decode GIF: {0}")]
    Decode(#[from] gif::DecodingError),

    #[error("animation has no frames")]
    Empty,

    #[error("frame {index} has neither a local nor a global palette")]
    MissingPalette { index: usize },
}
