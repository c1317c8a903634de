//! ORP (Optimal Recognition Point) calculation.
//!
//! The focus letter is chosen from the word's clean length, i.e. the number
//! of Latin letters (including Latin-1 accented letters) and ASCII digits it
//! contains. Quotes, hyphens and any other symbols do not count but still
//! occupy positions when the word is split for display.

use unicode_segmentation::UnicodeSegmentation;

/// Returns true for characters that count towards a word's clean length.
pub fn is_clean_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || ('\u{00C0}'..='\u{00D6}').contains(&c)
        || ('\u{00D8}'..='\u{00F6}').contains(&c)
        || ('\u{00F8}'..='\u{00FF}').contains(&c)
}

/// Number of clean characters in `word`. May be zero.
pub fn clean_len(word: &str) -> usize {
    word.chars().filter(|&c| is_clean_char(c)).count()
}

/// Index of the focus letter for `word`, always in `0..=4`.
pub fn orp_index(word: &str) -> usize {
    match clean_len(word).max(1) {
        1 => 0,
        2..=5 => 1,
        6..=9 => 2,
        10..=13 => 3,
        _ => 4,
    }
}

/// A word split around its focus letter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrpSpans<'a> {
    pub prefix: &'a str,
    pub focus: &'a str,
    pub suffix: &'a str,
}

impl<'a> OrpSpans<'a> {
    /// Splits `word` into prefix, focus and suffix at its ORP index.
    ///
    /// Positions are grapheme clusters of the original text. When the word is
    /// shorter than the index, the whole word lands in the prefix.
    pub fn split(word: &'a str) -> Self {
        Self::split_at(word, orp_index(word))
    }

    pub fn split_at(word: &'a str, index: usize) -> Self {
        let mut boundaries = word.grapheme_indices(true).map(|(offset, _)| offset);
        let focus_start = boundaries.nth(index).unwrap_or(word.len());
        let focus_end = boundaries.next().unwrap_or(word.len());

        Self {
            prefix: &word[..focus_start],
            focus: &word[focus_start..focus_end],
            suffix: &word[focus_end..],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.prefix.is_empty() && self.focus.is_empty() && self.suffix.is_empty()
    }
}
