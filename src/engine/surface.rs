//! Display surfaces the playback engine renders into.
//!
//! A reader needs four surfaces: the big word, the context strip, the rate
//! display and the play/pause controls. Hosts provide one implementation per
//! role and hand them to [`SurfacesBuilder`], which refuses to build until
//! every role is filled.

use super::config::ContextConfig;
use super::error::ConfigError;
use super::playback::PlaybackMode;
use crate::reading::{OrpSpans, Token};

/// Shows the current word split around its focus letter.
pub trait WordSurface {
    fn show_word(&mut self, spans: &OrpSpans<'_>);

    /// Blanks the surface (empty text, or punctuation under the cursor).
    fn clear_word(&mut self);
}

/// Shows the tokens surrounding the cursor.
pub trait ContextSurface {
    fn show_context(&mut self, window: &ContextWindow<'_>);
}

/// Live display of the effective reading rate.
pub trait RateSurface {
    fn show_rate(&mut self, wpm: f64);
}

/// Play/pause controls, updated on every mode change.
pub trait ControlsSurface {
    fn show_mode(&mut self, mode: PlaybackMode);
}

/// Slice of the token sequence around the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextWindow<'a> {
    tokens: &'a [Token],
    /// Absolute index of `tokens[0]` in the full sequence.
    start: usize,
    /// Position of the cursor within `tokens`.
    current: Option<usize>,
}

impl<'a> ContextWindow<'a> {
    pub fn empty() -> Self {
        Self {
            tokens: &[],
            start: 0,
            current: None,
        }
    }

    /// Window of `tokens_before` + current + `tokens_after`, cut at the sequence ends.
    pub fn around(tokens: &'a [Token], index: usize, config: &ContextConfig) -> Self {
        if tokens.is_empty() {
            return Self::empty();
        }
        let index = index.min(tokens.len() - 1);
        let start = index.saturating_sub(config.tokens_before);
        let end = index
            .saturating_add(config.tokens_after)
            .saturating_add(1)
            .min(tokens.len());
        Self {
            tokens: &tokens[start..end],
            start,
            current: Some(index - start),
        }
    }

    pub fn tokens(&self) -> &'a [Token] {
        self.tokens
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens paired with whether each one is under the cursor.
    pub fn entries(&self) -> impl Iterator<Item = (&'a Token, bool)> + '_ {
        self.tokens
            .iter()
            .enumerate()
            .map(move |(i, token)| (token, Some(i) == self.current))
    }
}

/// The complete, validated set of surfaces a playback session renders into.
pub struct Surfaces {
    pub(crate) word: Box<dyn WordSurface>,
    pub(crate) context: Box<dyn ContextSurface>,
    pub(crate) rate: Box<dyn RateSurface>,
    pub(crate) controls: Box<dyn ControlsSurface>,
}

impl Surfaces {
    pub fn builder() -> SurfacesBuilder {
        SurfacesBuilder::default()
    }
}

#[derive(Default)]
pub struct SurfacesBuilder {
    word: Option<Box<dyn WordSurface>>,
    context: Option<Box<dyn ContextSurface>>,
    rate: Option<Box<dyn RateSurface>>,
    controls: Option<Box<dyn ControlsSurface>>,
}

impl SurfacesBuilder {
    pub fn word(mut self, surface: impl WordSurface + 'static) -> Self {
        self.word = Some(Box::new(surface));
        self
    }

    pub fn context(mut self, surface: impl ContextSurface + 'static) -> Self {
        self.context = Some(Box::new(surface));
        self
    }

    pub fn rate(mut self, surface: impl RateSurface + 'static) -> Self {
        self.rate = Some(Box::new(surface));
        self
    }

    pub fn controls(mut self, surface: impl ControlsSurface + 'static) -> Self {
        self.controls = Some(Box::new(surface));
        self
    }

    /// Fails with [`ConfigError::MissingSurface`] naming the first absent role.
    pub fn build(self) -> Result<Surfaces, ConfigError> {
        Ok(Surfaces {
            word: self.word.ok_or(ConfigError::MissingSurface("big word"))?,
            context: self.context.ok_or(ConfigError::MissingSurface("context strip"))?,
            rate: self.rate.ok_or(ConfigError::MissingSurface("rate display"))?,
            controls: self
                .controls
                .ok_or(ConfigError::MissingSurface("playback controls"))?,
        })
    }
}
