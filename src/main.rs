//! gifplay - play animated GIFs as colored cells in the terminal.

use std::process;

use anyhow::Result;
use clap::Parser;

use gifplay::player::{GameCore, PlayerState, DEFAULT_TICK};
use gifplay::terminal::ScreenGuard;
use gifplay::{load_animation, Config};

/// Play an animated GIF as colored cells in the terminal.
///
/// SOURCE is a local file path or an http(s) URL. Press `q` to quit.
#[derive(Debug, Parser)]
#[command(name = "gifplay", version)]
struct Cli {
    /// Local file path or http(s) URL of the GIF to play
    source: String,

    /// Play in monochrome (grayscale ramp) instead of full color
    #[arg(short = 'm', long)]
    mono: bool,

    /// Play the animation once instead of looping
    #[arg(short = 'o', long)]
    once: bool,
}

fn main() {
    // Every startup failure exits 1 with a line on stderr. That includes
    // -h and bad arguments: usage goes to stderr and is a nonzero exit.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    if let Err(err) = run(&cli) {
        eprintln!("gifplay: {err:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    // Acquire and decode before touching the terminal, so source errors
    // never leave the screen in raw mode.
    let animation = load_animation(&cli.source)?;
    let config = Config {
        mono: cli.mono,
        once: cli.once,
    };

    let _screen = ScreenGuard::enter()?;
    let mut state = PlayerState::new(animation, config);
    GameCore::new(DEFAULT_TICK).run(&mut state)
}
