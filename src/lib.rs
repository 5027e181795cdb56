//! Play animated GIFs inside a character terminal.
//!
//! Each frame of an indexed-color GIF is mapped onto a grid of colored
//! cells: every palette entry becomes a foreground/background attribute
//! pair, and every pixel is drawn as a blank glyph carrying that pair.
//! A fixed-tick loop advances frames until the user presses `q`.
//!
//! # Architecture
//!
//! - `source`: opens a file path or http(s) URL and decodes it into an
//!   [`Animation`] of palette-indexed frames
//! - `player`: the game loop ([`player::GameCore`]), color mapping, and
//!   the clipping cell renderer
//! - `terminal`: raw-mode/alternate-screen session guard and capability
//!   queries
//! - `config`: immutable playback configuration built once from the CLI
//!
//! # Usage
//!
//! ```no_run
//! use gifplay::player::{GameCore, PlayerState, DEFAULT_TICK};
//! use gifplay::{load_animation, Config};
//!
//! let animation = load_animation("party.gif")?;
//! let mut state = PlayerState::new(animation, Config::default());
//! GameCore::new(DEFAULT_TICK).run(&mut state)?;
//! # anyhow::Ok(())
//! ```

pub mod config;
pub mod player;
pub mod source;
pub mod terminal;

pub use config::Config;
pub use source::{load_animation, Animation, Frame, Rgb, SourceError};
