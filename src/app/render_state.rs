use crate::engine::{
    ConfigError, ContextSurface, ContextWindow, ControlsSurface, PlaybackMode, RateSurface,
    Surfaces, WordSurface,
};
use crate::reading::OrpSpans;
use std::cell::RefCell;
use std::rc::Rc;

/// Big word split into its three display spans.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WordSpans {
    pub prefix: String,
    pub focus: String,
    pub suffix: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextEntry {
    pub text: String,
    pub current: bool,
}

/// What the playback session last painted, read back by the terminal on each frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub word: Option<WordSpans>,
    pub context: Vec<ContextEntry>,
    pub wpm: f64,
    pub playback: PlaybackMode,
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            word: None,
            context: Vec::new(),
            wpm: 0.0,
            playback: PlaybackMode::Idle,
        }
    }
}

pub type SharedRenderState = Rc<RefCell<RenderState>>;

/// Surfaces writing into a shared [`RenderState`].
pub fn render_state_surfaces(state: &SharedRenderState) -> Result<Surfaces, ConfigError> {
    Surfaces::builder()
        .word(StatePane(state.clone()))
        .context(StatePane(state.clone()))
        .rate(StatePane(state.clone()))
        .controls(StatePane(state.clone()))
        .build()
}

struct StatePane(SharedRenderState);

impl WordSurface for StatePane {
    fn show_word(&mut self, spans: &OrpSpans<'_>) {
        self.0.borrow_mut().word = Some(WordSpans {
            prefix: spans.prefix.to_string(),
            focus: spans.focus.to_string(),
            suffix: spans.suffix.to_string(),
        });
    }

    fn clear_word(&mut self) {
        self.0.borrow_mut().word = None;
    }
}

impl ContextSurface for StatePane {
    fn show_context(&mut self, window: &ContextWindow<'_>) {
        self.0.borrow_mut().context = window
            .entries()
            .map(|(token, current)| ContextEntry {
                text: token.text.clone(),
                current,
            })
            .collect();
    }
}

impl RateSurface for StatePane {
    fn show_rate(&mut self, wpm: f64) {
        self.0.borrow_mut().wpm = wpm;
    }
}

impl ControlsSurface for StatePane {
    fn show_mode(&mut self, mode: PlaybackMode) {
        self.0.borrow_mut().playback = mode;
    }
}
