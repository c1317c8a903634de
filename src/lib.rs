//! flashread: rapid serial visual presentation reader.
//!
//! The pacing engine lives in [`reading`] (tokenizer, ORP, duration model)
//! and [`engine`] (playback state machine, scheduling and surfaces). The
//! terminal host is built from [`app`], [`input`] and [`ui`]; [`rendering`]
//! holds the markup backend for hosts that render HTML.

pub mod app;
pub mod engine;
pub mod input;
pub mod reading;
pub mod rendering;
pub mod ui;
