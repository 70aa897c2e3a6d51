//! Tagsmith: edit the ID3 tags and front cover of one MP3 at a time.
//!
//! - [`core`] has no GUI code: tag I/O, the cover crop pipeline, the edit session.
//! - `gui` is the iced frontend; [`run`] starts it.

pub mod core;
mod gui;

pub use gui::run;
