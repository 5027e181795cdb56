//! Terminal session management.
//!
//! Owns raw mode, the alternate screen, and restoration on exit. The
//! renderer talks to the terminal separately, through crossterm commands
//! queued by its drawing surface.

mod error;

pub use error::TerminalError;

use std::io::{self, Write};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::style::available_color_count;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};

/// Colors the player needs the terminal to address (the xterm-256 palette).
const REQUIRED_COLORS: u16 = 256;

/// RAII guard for the playback screen.
///
/// Entering switches to the alternate screen in raw mode with the cursor
/// hidden. Dropping restores the previous terminal state on every exit
/// path, including handler errors, so error messages land on a sane
/// screen.
#[derive(Debug)]
pub struct ScreenGuard {
    _private: (),
}

impl ScreenGuard {
    pub fn enter() -> Result<Self, TerminalError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen, Hide, Clear(ClearType::All)) {
            // undo the half-finished setup before reporting
            let _ = disable_raw_mode();
            return Err(err.into());
        }
        Ok(Self { _private: () })
    }
}

impl Drop for ScreenGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        let _ = stdout.flush();
    }
}

/// Verify the terminal can address the full 256-color attribute range.
///
/// Fatal at startup when it cannot; there is no fallback negotiation.
pub fn ensure_color_support() -> Result<(), TerminalError> {
    let available = available_color_count();
    if available < REQUIRED_COLORS {
        return Err(TerminalError::ColorSupport { available });
    }
    Ok(())
}

/// Current terminal dimensions in cells, as `(cols, rows)`.
pub fn size() -> Result<(u16, u16), TerminalError> {
    Ok(crossterm::terminal::size()?)
}
