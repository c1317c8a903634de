// Reader widgets: big word, context strip, progress and status lines
pub mod view;
