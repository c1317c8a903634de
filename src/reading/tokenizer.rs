use super::token::{is_punctuation_char, Token};

/// Splits raw text into word and punctuation tokens.
///
/// Whitespace only separates tokens and never survives into the output;
/// every punctuation mark from the fixed set becomes a token of its own, so
/// `"don't"` yields `don`, `'`, `t`. Empty or whitespace-only input yields an
/// empty sequence.
pub fn tokenize_text(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut word = String::new();

    for c in text.trim().chars() {
        if c.is_whitespace() {
            flush_word(&mut word, &mut tokens);
        } else if is_punctuation_char(c) {
            flush_word(&mut word, &mut tokens);
            tokens.push(Token::new(c.to_string()));
        } else {
            word.push(c);
        }
    }
    flush_word(&mut word, &mut tokens);

    tokens
}

fn flush_word(word: &mut String, tokens: &mut Vec<Token>) {
    if !word.is_empty() {
        tokens.push(Token::new(std::mem::take(word)));
    }
}
