//! Playback configuration.
//!
//! Built once from the command line and passed by reference into the
//! player; nothing mutates it after startup.

use crate::player::color::ColorStrategy;

/// Immutable playback configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Render with the grayscale ramp instead of full color
    pub mono: bool,
    /// Stop after one full pass through the animation instead of looping
    pub once: bool,
}

impl Config {
    /// Resolve the color strategy for this configuration.
    ///
    /// Resolved once at startup; the strategy never changes mid-playback.
    pub fn strategy(&self) -> ColorStrategy {
        if self.mono {
            ColorStrategy::Mono
        } else {
            ColorStrategy::Color
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_full_color_and_loops() {
        let config = Config::default();
        assert_eq!(config.strategy(), ColorStrategy::Color);
        assert!(!config.once);
    }

    #[test]
    fn mono_flag_selects_grayscale_strategy() {
        let config = Config {
            mono: true,
            ..Config::default()
        };
        assert_eq!(config.strategy(), ColorStrategy::Mono);
    }
}
