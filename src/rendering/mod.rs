pub mod markup;

pub use markup::{context_markup, escape_html, word_markup, MarkupDocument, MarkupElement};
