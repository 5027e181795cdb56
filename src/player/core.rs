//! The minimal game loop: fixed-tick updates plus bounded input polling.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent};

/// Default tick period: every frame is shown for 50 ms regardless of any
/// per-frame timing metadata the source carries.
pub const DEFAULT_TICK: Duration = Duration::from_millis(50);

/// Callbacks driven by [`GameCore::run`].
///
/// A single state type implements all three, so swapping a color strategy
/// or adding a key binding stays a matter of changing that type.
pub trait GameHandler {
    /// Runs once, before the first tick. Failure means the loop never
    /// starts running.
    fn on_init(&mut self, core: &mut GameCore) -> Result<()>;

    /// Runs for every key event seen during a tick period.
    fn on_event(&mut self, core: &mut GameCore, key: KeyEvent) -> Result<()>;

    /// Runs once per tick period.
    fn on_tick(&mut self, core: &mut GameCore) -> Result<()>;
}

/// Fixed-interval playback loop.
///
/// Single-threaded and cooperative: input polling within a tick never
/// blocks past the remaining time in the tick period, so the cadence
/// stays close to the configured interval (drift across many ticks is
/// accepted, not corrected). Any handler error aborts the loop
/// immediately and becomes the result of [`run`](GameCore::run).
#[derive(Debug)]
pub struct GameCore {
    tick_time: Duration,
    quit: bool,
}

impl GameCore {
    pub fn new(tick_time: Duration) -> Self {
        Self {
            tick_time,
            quit: false,
        }
    }

    /// Ask the loop to stop. The flag is checked between handler calls,
    /// never interrupting one mid-call; once set, no further render
    /// ticks run.
    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Run the loop until a quit is requested or a handler fails.
    ///
    /// Blocks the calling thread. Terminal mode restoration is the
    /// caller's screen guard's job and happens on every exit path.
    pub fn run(&mut self, handler: &mut impl GameHandler) -> Result<()> {
        handler.on_init(self)?;
        while !self.quit {
            let deadline = Instant::now() + self.tick_time;
            self.pump_events(handler, deadline)?;
            if self.quit {
                break;
            }
            handler.on_tick(self)?;
        }
        Ok(())
    }

    /// Dispatch pending key events, never blocking past `deadline`.
    fn pump_events(&mut self, handler: &mut impl GameHandler, deadline: Instant) -> Result<()> {
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() || self.quit {
                return Ok(());
            }
            if !event::poll(remaining)? {
                // poll waited out the tick period
                return Ok(());
            }
            if let Event::Key(key) = event::read()? {
                handler.on_event(self, key)?;
            }
        }
    }
}

impl Default for GameCore {
    fn default() -> Self {
        Self::new(DEFAULT_TICK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;

    /// Handler that counts calls and can quit or fail during init.
    #[derive(Default)]
    struct Probe {
        quit_on_init: bool,
        fail_on_init: bool,
        init_calls: usize,
        tick_calls: usize,
    }

    impl GameHandler for Probe {
        fn on_init(&mut self, core: &mut GameCore) -> Result<()> {
            self.init_calls += 1;
            if self.fail_on_init {
                bail!("init failed");
            }
            if self.quit_on_init {
                core.request_quit();
            }
            Ok(())
        }

        fn on_event(&mut self, _core: &mut GameCore, _key: KeyEvent) -> Result<()> {
            Ok(())
        }

        fn on_tick(&mut self, _core: &mut GameCore) -> Result<()> {
            self.tick_calls += 1;
            Ok(())
        }
    }

    #[test]
    fn quit_before_first_tick_means_zero_ticks() {
        let mut probe = Probe {
            quit_on_init: true,
            ..Probe::default()
        };
        let mut core = GameCore::new(Duration::from_millis(1));

        core.run(&mut probe).unwrap();

        assert_eq!(probe.init_calls, 1);
        assert_eq!(probe.tick_calls, 0);
    }

    #[test]
    fn init_failure_aborts_before_running() {
        let mut probe = Probe {
            fail_on_init: true,
            ..Probe::default()
        };
        let mut core = GameCore::default();

        assert!(core.run(&mut probe).is_err());
        assert_eq!(probe.tick_calls, 0);
    }

    #[test]
    fn request_quit_sets_the_flag() {
        let mut core = GameCore::default();
        assert!(!core.quit_requested());
        core.request_quit();
        assert!(core.quit_requested());
    }
}
