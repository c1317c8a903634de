/// Multi-line text area the reader loads its text from.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TextInput {
    buffer: String,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        let mut input = Self::new();
        input.insert_str(text);
        input
    }

    pub fn insert_char(&mut self, c: char) {
        self.buffer.push(c);
    }

    /// Appends pasted text; carriage returns are normalized to newlines.
    pub fn insert_str(&mut self, text: &str) {
        self.buffer.push_str(&text.replace("\r\n", "\n").replace('\r', "\n"));
    }

    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}
