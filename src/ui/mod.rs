pub mod keymap;
pub mod reader;
pub mod terminal;
pub mod terminal_guard;
pub mod theme;

pub use keymap::{key_to_event, paste_to_event};
pub use reader::view::{render_context_strip, render_progress_bar, render_word_display};
pub use terminal::TuiManager;
pub use terminal_guard::TerminalGuard;
