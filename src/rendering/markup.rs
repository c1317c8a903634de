//! Markup rendering backend.
//!
//! Renders the reader into HTML fragments held by named elements, the way a
//! page embedding the widget would receive them. All token text is escaped
//! before it is placed inside markup.

use crate::engine::{
    ConfigError, ContextSurface, ContextWindow, ControlsSurface, PlaybackMode, RateSurface,
    Surfaces, WordSurface,
};
use crate::reading::OrpSpans;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub const BIG_WORD_ID: &str = "bigWord";
pub const CONTEXT_ID: &str = "context";
pub const WPM_VALUE_ID: &str = "wpmVal";
pub const PLAY_ID: &str = "play";
pub const PAUSE_ID: &str = "pause";

/// Element ids a document must provide before a reader can attach to it.
pub const REQUIRED_IDS: &[&str] = &[BIG_WORD_ID, CONTEXT_ID, WPM_VALUE_ID, PLAY_ID, PAUSE_ID];

/// Escapes `& < > " '` for insertion into markup.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// `prefix<span class="orp">focus</span>suffix`, escaped.
pub fn word_markup(spans: &OrpSpans<'_>) -> String {
    format!(
        "{}<span class=\"orp\">{}</span>{}",
        escape_html(spans.prefix),
        escape_html(spans.focus),
        escape_html(spans.suffix)
    )
}

/// One span per token, the current one classed `cur`, joined by spaces.
pub fn context_markup(window: &ContextWindow<'_>) -> String {
    window
        .entries()
        .map(|(token, current)| {
            let class = if current { "cur" } else { "" };
            format!(
                "<span class=\"{}\">{}</span>",
                class,
                escape_html(&token.text)
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// A named element's rendered state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkupElement {
    pub html: String,
    pub disabled: bool,
}

pub type ElementHandle = Rc<RefCell<MarkupElement>>;

/// A set of named elements the reader can render into.
#[derive(Debug, Default)]
pub struct MarkupDocument {
    elements: HashMap<String, ElementHandle>,
}

impl MarkupDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// A document holding every element the reader needs.
    pub fn with_reader_elements() -> Self {
        REQUIRED_IDS
            .iter()
            .fold(Self::new(), |doc, id| doc.with_element(id))
    }

    pub fn with_element(mut self, id: &str) -> Self {
        self.insert(id);
        self
    }

    pub fn insert(&mut self, id: &str) -> ElementHandle {
        self.elements.entry(id.to_string()).or_default().clone()
    }

    pub fn element(&self, id: &str) -> Option<ElementHandle> {
        self.elements.get(id).cloned()
    }

    /// Current markup of element `id`, or `None` if it does not exist.
    pub fn html(&self, id: &str) -> Option<String> {
        self.elements.get(id).map(|e| e.borrow().html.clone())
    }

    pub fn is_disabled(&self, id: &str) -> Option<bool> {
        self.elements.get(id).map(|e| e.borrow().disabled)
    }

    /// Binds reader surfaces to this document's elements.
    ///
    /// Fails with the id of the first missing element.
    pub fn surfaces(&self) -> Result<Surfaces, ConfigError> {
        let lookup = |id: &'static str| self.element(id).ok_or(ConfigError::MissingSurface(id));

        Surfaces::builder()
            .word(MarkupWord(lookup(BIG_WORD_ID)?))
            .context(MarkupContext(lookup(CONTEXT_ID)?))
            .rate(MarkupRate(lookup(WPM_VALUE_ID)?))
            .controls(MarkupControls {
                play: lookup(PLAY_ID)?,
                pause: lookup(PAUSE_ID)?,
            })
            .build()
    }
}

struct MarkupWord(ElementHandle);

impl WordSurface for MarkupWord {
    fn show_word(&mut self, spans: &OrpSpans<'_>) {
        self.0.borrow_mut().html = word_markup(spans);
    }

    fn clear_word(&mut self) {
        self.0.borrow_mut().html.clear();
    }
}

struct MarkupContext(ElementHandle);

impl ContextSurface for MarkupContext {
    fn show_context(&mut self, window: &ContextWindow<'_>) {
        self.0.borrow_mut().html = context_markup(window);
    }
}

struct MarkupRate(ElementHandle);

impl RateSurface for MarkupRate {
    fn show_rate(&mut self, wpm: f64) {
        self.0.borrow_mut().html = format!("{wpm}");
    }
}

struct MarkupControls {
    play: ElementHandle,
    pause: ElementHandle,
}

impl ControlsSurface for MarkupControls {
    fn show_mode(&mut self, mode: PlaybackMode) {
        self.play.borrow_mut().disabled = mode.is_playing();
        self.pause.borrow_mut().disabled = !mode.is_playing();
    }
}
