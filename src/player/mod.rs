//! Fixed-tick playback of a decoded animation.
//!
//! # Architecture
//!
//! The player is organized into submodules:
//! - `core`: the minimal game loop ([`GameCore`]) and its handler trait
//! - `state`: [`PlayerState`], the handler that owns frame advance and
//!   the quit key binding
//! - `color`: palette to terminal-attribute mapping (two strategies)
//! - `render`: the clipping cell renderer and its drawing surface

pub mod color;
pub mod core;
pub mod render;
pub mod state;

pub use color::{map_palette, Attr, AttrPair, AttrTable, ColorStrategy};
pub use core::{GameCore, GameHandler, DEFAULT_TICK};
pub use render::{render_frame, CellSurface, TermSurface};
pub use state::PlayerState;
