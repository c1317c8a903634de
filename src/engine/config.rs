// Configuration for the flashread engine and terminal host.
// Every value has a default; only the reading speed can be overridden from the environment.

use log::warn;
use std::ops::RangeInclusive;

/// Environment variable holding the initial words-per-minute setting.
pub const WPM_ENV: &str = "FLASHREAD_WPM";

/// Timing configuration for the duration model.
#[derive(Debug, Clone, PartialEq)]
pub struct TimingConfig {
    /// Words per minute reading speed, also the fallback for invalid input (default 300)
    pub wpm: u32,

    /// Range the rate control clamps stepped adjustments into
    pub wpm_range: RangeInclusive<u32>,

    /// Increment used by the rate control keys
    pub wpm_step: u32,

    /// Punctuation multipliers
    pub sentence_end_multiplier: f64, // . ! ?  default 2.2x
    pub clause_multiplier: f64,       // , ; :  default 1.5x
    pub dash_multiplier: f64,         // - —    default 1.3x
    pub enclosing_multiplier: f64,    // ( ) quotes, default 1.1x

    /// Clean-length thresholds and multipliers for long words
    pub long_word_threshold: usize, // default 8
    pub long_word_multiplier: f64,  // default 1.15x
    pub very_long_word_threshold: usize, // default 12
    pub very_long_word_multiplier: f64,  // default 1.35x
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            wpm: 300,
            wpm_range: 50..=1000,
            wpm_step: 25,
            sentence_end_multiplier: 2.2,
            clause_multiplier: 1.5,
            dash_multiplier: 1.3,
            enclosing_multiplier: 1.1,
            long_word_threshold: 8,
            long_word_multiplier: 1.15,
            very_long_word_threshold: 12,
            very_long_word_multiplier: 1.35,
        }
    }
}

/// Context strip configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ContextConfig {
    /// Number of tokens shown before/after the current one
    pub tokens_before: usize,
    pub tokens_after: usize,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            tokens_before: 6,
            tokens_after: 6,
        }
    }
}

/// Master configuration combining all flashread settings
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub timing: TimingConfig,
    pub context: ContextConfig,
}

impl Config {
    /// Defaults, with the starting WPM taken from `FLASHREAD_WPM` when set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(value) = std::env::var(WPM_ENV) {
            config.timing.wpm = parse_wpm_setting(&value, config.timing.wpm);
        }
        config
    }
}

fn parse_wpm_setting(value: &str, fallback: u32) -> u32 {
    match value.trim().parse::<u32>() {
        Ok(wpm) if wpm > 0 => wpm,
        _ => {
            warn!("ignoring invalid {WPM_ENV}={value:?}, using {fallback}");
            fallback
        }
    }
}
