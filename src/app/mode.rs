#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Typing or pasting into the text area.
    Editing,
    /// Reader has focus; playback keys are live.
    Reading,
    Quit,
}

impl AppMode {
    pub fn label(self) -> &'static str {
        match self {
            AppMode::Editing => " EDIT ",
            AppMode::Reading => " READ ",
            AppMode::Quit => " QUIT ",
        }
    }
}
