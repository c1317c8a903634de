pub mod orp;
pub mod timing;
pub mod token;
pub mod tokenizer;

pub use orp::{clean_len, orp_index, OrpSpans};
pub use timing::{
    effective_wpm, parse_wpm, token_duration_ms, token_multiplier, wpm_to_milliseconds,
    DEFAULT_WPM,
};
pub use token::{is_punctuation, PunctuationClass, Token, TokenKind};
pub use tokenizer::tokenize_text;
