/// Characters that are split off into their own tokens.
pub const PUNCTUATION: &[char] = &[
    ',', '.', '!', '?', ';', ':', '(', ')', '"', '“', '”', '\'', '’', '—', '-',
];

/// Returns true if `c` belongs to the fixed punctuation set.
pub fn is_punctuation_char(c: char) -> bool {
    PUNCTUATION.contains(&c)
}

/// Returns true iff `text` is exactly one character from the punctuation set.
pub fn is_punctuation(text: &str) -> bool {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => is_punctuation_char(c),
        _ => false,
    }
}

/// Timing class of a punctuation mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PunctuationClass {
    /// `.` `!` `?`
    SentenceEnd,
    /// `,` `;` `:`
    Clause,
    /// `-` `—`
    Dash,
    /// Brackets and quotes.
    Enclosing,
}

impl PunctuationClass {
    pub fn of(c: char) -> Option<Self> {
        match c {
            '.' | '!' | '?' => Some(Self::SentenceEnd),
            ',' | ';' | ':' => Some(Self::Clause),
            '-' | '—' => Some(Self::Dash),
            '(' | ')' | '"' | '\'' | '“' | '”' | '’' => Some(Self::Enclosing),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Punctuation(PunctuationClass),
}

/// A single unit of RSVP presentation: a word or a lone punctuation mark.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
}

impl Token {
    /// Builds a token, classifying it from its text.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let kind = classify(&text);
        Self { text, kind }
    }

    pub fn is_punctuation(&self) -> bool {
        matches!(self.kind, TokenKind::Punctuation(_))
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

fn classify(text: &str) -> TokenKind {
    if !is_punctuation(text) {
        return TokenKind::Word;
    }
    text.chars()
        .next()
        .and_then(PunctuationClass::of)
        .map_or(TokenKind::Word, TokenKind::Punctuation)
}
