//! Player state: the handler implementation that owns playback.

use std::io;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::config::Config;
use crate::player::color::{map_palette, AttrTable};
use crate::player::core::{GameCore, GameHandler};
use crate::player::render::{render_frame, TermSurface};
use crate::source::Animation;
use crate::terminal;

/// Central playback state.
///
/// Owns the decoded animation, the per-frame attribute tables, and the
/// current frame index. Mutated only by the loop thread, through the
/// handler callbacks.
#[derive(Debug)]
pub struct PlayerState {
    animation: Animation,
    config: Config,
    /// One attribute table per frame, index-aligned with the frame
    /// sequence. Built in `on_init` and immutable afterwards.
    attribs: Vec<AttrTable>,
    /// Current frame, wraps modulo the frame count
    frame_index: usize,
}

impl PlayerState {
    pub fn new(animation: Animation, config: Config) -> Self {
        Self {
            animation,
            config,
            attribs: Vec::new(),
            frame_index: 0,
        }
    }

    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    /// Reduce every frame's palette to an attribute table.
    ///
    /// Leaves `attribs` the same length as the frame sequence.
    fn build_attribs(&mut self) {
        let strategy = self.config.strategy();
        self.attribs = self
            .animation
            .frames
            .iter()
            .map(|frame| map_palette(&frame.palette, strategy))
            .collect();
    }

    /// Step to the next frame.
    ///
    /// In play-once mode the wrap point requests a quit instead of
    /// cycling back to the first frame.
    fn advance_frame(&mut self, core: &mut GameCore) {
        if self.frame_index + 1 == self.animation.frames.len() {
            if self.config.once {
                core.request_quit();
                return;
            }
            self.frame_index = 0;
        } else {
            self.frame_index += 1;
        }
    }
}

impl GameHandler for PlayerState {
    fn on_init(&mut self, _core: &mut GameCore) -> Result<()> {
        terminal::ensure_color_support()?;
        self.build_attribs();
        debug!(
            frames = self.animation.frames.len(),
            strategy = ?self.config.strategy(),
            "player initialized"
        );
        Ok(())
    }

    fn on_event(&mut self, core: &mut GameCore, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('q') => core.request_quit(),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                core.request_quit()
            }
            _ => {}
        }
        Ok(())
    }

    fn on_tick(&mut self, core: &mut GameCore) -> Result<()> {
        let (cols, rows) = terminal::size()?;
        let frame = &self.animation.frames[self.frame_index];
        let table = &self.attribs[self.frame_index];

        let mut surface = TermSurface::new(io::stdout());
        render_frame(frame, table, cols, rows, &mut surface)?;

        self.advance_frame(core);
        Ok(())
    }
}
