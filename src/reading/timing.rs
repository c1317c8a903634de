use super::orp::clean_len;
use super::token::{PunctuationClass, Token, TokenKind};
use crate::engine::config::TimingConfig;
use log::warn;

/// Fallback reading speed for missing, zero, negative or non-finite input.
pub const DEFAULT_WPM: f64 = 300.0;

/// Returns `wpm` if it is a usable rate, otherwise [`DEFAULT_WPM`].
pub fn effective_wpm(wpm: f64) -> f64 {
    if wpm.is_finite() && wpm > 0.0 {
        wpm
    } else {
        DEFAULT_WPM
    }
}

/// Parses a rate typed by the user. Anything unusable becomes [`DEFAULT_WPM`].
pub fn parse_wpm(input: &str) -> f64 {
    match input.trim().parse::<f64>() {
        Ok(wpm) if wpm.is_finite() && wpm > 0.0 => wpm,
        _ => {
            warn!("invalid WPM input {input:?}, using {DEFAULT_WPM}");
            DEFAULT_WPM
        }
    }
}

/// Base display time of one word, in milliseconds. Not rounded.
pub fn wpm_to_milliseconds(wpm: f64) -> f64 {
    60_000.0 / effective_wpm(wpm)
}

/// Dwell multiplier for a token.
///
/// Punctuation marks pause by class even though they are never shown as the
/// big word; words stretch with their clean length.
pub fn token_multiplier(token: &Token, config: &TimingConfig) -> f64 {
    match token.kind {
        TokenKind::Punctuation(class) => punctuation_multiplier(class, config),
        TokenKind::Word => word_length_multiplier(&token.text, config),
    }
}

fn punctuation_multiplier(class: PunctuationClass, config: &TimingConfig) -> f64 {
    match class {
        PunctuationClass::SentenceEnd => config.sentence_end_multiplier,
        PunctuationClass::Clause => config.clause_multiplier,
        PunctuationClass::Dash => config.dash_multiplier,
        PunctuationClass::Enclosing => config.enclosing_multiplier,
    }
}

fn word_length_multiplier(word: &str, config: &TimingConfig) -> f64 {
    let len = clean_len(word);
    if len >= config.very_long_word_threshold {
        config.very_long_word_multiplier
    } else if len >= config.long_word_threshold {
        config.long_word_multiplier
    } else {
        1.0
    }
}

/// Milliseconds `token` stays on screen at `wpm`.
pub fn token_duration_ms(token: &Token, wpm: f64, config: &TimingConfig) -> f64 {
    wpm_to_milliseconds(wpm) * token_multiplier(token, config)
}
