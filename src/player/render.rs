//! Clipping cell renderer.
//!
//! Draws one frame per tick as blank glyphs whose foreground/background
//! attribute pair carries all of the visual content. The drawn region is
//! clipped to the smaller of the terminal and the frame; no scaling, no
//! dirty-region tracking.

use std::io::Write;

use anyhow::Result;
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Colors, Print, SetColors};

use crate::player::color::{Attr, AttrTable};
use crate::source::Frame;

/// Drawing surface over the terminal driver.
///
/// The production implementation queues crossterm commands to a writer;
/// tests substitute a recording surface.
pub trait CellSurface {
    /// Draw one glyph at `(x, y)` with the given attribute pair.
    fn set_cell(&mut self, x: u16, y: u16, glyph: char, fg: Attr, bg: Attr) -> Result<()>;

    /// Flush everything queued since the last present.
    fn present(&mut self) -> Result<()>;
}

/// crossterm-backed surface writing to any `Write` sink.
pub struct TermSurface<W: Write> {
    out: W,
}

impl<W: Write> TermSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> CellSurface for TermSurface<W> {
    fn set_cell(&mut self, x: u16, y: u16, glyph: char, fg: Attr, bg: Attr) -> Result<()> {
        queue!(
            self.out,
            MoveTo(x, y),
            SetColors(Colors::new(Color::AnsiValue(fg), Color::AnsiValue(bg))),
            Print(glyph)
        )?;
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// Draw one frame, clipped to the terminal dimensions, then present.
///
/// The drawn region is `min(term_cols, frame.width)` by
/// `min(term_rows, frame.height)`; terminal cells outside it are left
/// untouched and frame pixels outside it are skipped. Any draw failure
/// aborts the tick and propagates.
pub fn render_frame(
    frame: &Frame,
    table: &AttrTable,
    term_cols: u16,
    term_rows: u16,
    surface: &mut impl CellSurface,
) -> Result<()> {
    let cols = term_cols.min(frame.width);
    let rows = term_rows.min(frame.height);

    for y in 0..rows {
        let row_start = y as usize * frame.stride;
        for x in 0..cols {
            let index = frame.pixels[row_start + x as usize];
            let pair = table[index as usize];
            surface.set_cell(x, y, ' ', pair.fg, pair.bg)?;
        }
    }
    surface.present()
}
