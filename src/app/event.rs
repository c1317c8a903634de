/// Application events
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    TogglePlayback,
    Seek(isize),
    Faster,
    Slower,
    /// Pause and return to the text area.
    Edit,
    /// Load the text area into the reader.
    Load,
    InsertChar(char),
    InsertText(String),
    Backspace,
    ClearInput,
    PasteClipboard,
    Warning(String),
    Quit,
    None,
}
