use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Clipboard holds no text")]
    EmptyClipboard,
}

pub mod clipboard;
