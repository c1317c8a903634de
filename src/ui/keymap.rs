//! Key bindings for the terminal host
//!
//! Reading mode:
//! - `Space` → play/pause
//! - `←`/`h`, `→`/`l` → seek one token
//! - `↑`/`+`/`=`, `↓`/`-` → faster/slower
//! - `e`, `i` or `Tab` → back to the text area
//! - `q` or `Esc` → quit
//!
//! Editing mode:
//! - printable keys and `Enter` type into the text area
//! - `Esc` or `Tab` → load the text and start reading
//! - `Ctrl+V` → paste from the clipboard, `Ctrl+U` → clear
//!
//! `Ctrl+C` quits from anywhere.

use crate::app::{AppEvent, AppMode};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Translates a key press into an application event for the current mode.
pub fn key_to_event(mode: AppMode, key: KeyEvent) -> AppEvent {
    if key.kind == KeyEventKind::Release {
        return AppEvent::None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match (mode, key.code) {
            (_, KeyCode::Char('c')) => AppEvent::Quit,
            (AppMode::Editing, KeyCode::Char('v')) => AppEvent::PasteClipboard,
            (AppMode::Editing, KeyCode::Char('u')) => AppEvent::ClearInput,
            _ => AppEvent::None,
        };
    }

    match mode {
        AppMode::Reading => reading_key(key.code),
        AppMode::Editing => editing_key(key.code),
        AppMode::Quit => AppEvent::None,
    }
}

fn reading_key(code: KeyCode) -> AppEvent {
    match code {
        KeyCode::Char(' ') => AppEvent::TogglePlayback,
        KeyCode::Left | KeyCode::Char('h') => AppEvent::Seek(-1),
        KeyCode::Right | KeyCode::Char('l') => AppEvent::Seek(1),
        KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('=') => AppEvent::Faster,
        KeyCode::Down | KeyCode::Char('-') => AppEvent::Slower,
        KeyCode::Char('e') | KeyCode::Char('i') | KeyCode::Tab => AppEvent::Edit,
        KeyCode::Char('q') | KeyCode::Esc => AppEvent::Quit,
        _ => AppEvent::None,
    }
}

fn editing_key(code: KeyCode) -> AppEvent {
    match code {
        KeyCode::Esc | KeyCode::Tab => AppEvent::Load,
        KeyCode::Enter => AppEvent::InsertChar('\n'),
        KeyCode::Backspace => AppEvent::Backspace,
        KeyCode::Char(c) => AppEvent::InsertChar(c),
        _ => AppEvent::None,
    }
}

/// Bracketed paste goes into the text area; it is ignored while reading.
pub fn paste_to_event(mode: AppMode, text: String) -> AppEvent {
    match mode {
        AppMode::Editing => AppEvent::InsertText(text),
        _ => AppEvent::None,
    }
}
