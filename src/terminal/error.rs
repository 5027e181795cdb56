//! Terminal session errors.

use std::io;

/// Errors raised while configuring or querying the terminal.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    #[error("terminal reports {available} colors; 256-color output is required")]
    ColorSupport { available: u16 },

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}
