//! core/error.rs
//! One error type for everything under `core`.
//!
//! The GUI turns these into status-line strings at the message boundary
//! (iced messages must be `Clone`, these are not).

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Crop has no area (or has not been initialized yet).
    #[error("crop selection is empty ({width} x {height})")]
    EmptySelection { width: f32, height: f32 },

    /// Decode/encode failure inside the `image` crate.
    #[error("image processing failed: {0}")]
    ImageProcessing(#[from] image::ImageError),

    #[error("not a base64 data URI: {0}")]
    InvalidDataUri(String),

    #[error("bad base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Reading or writing the ID3 tag failed.
    #[error("tag I/O failed for {}: {source}", path.display())]
    Transport {
        path: PathBuf,
        #[source]
        source: id3::Error,
    },

    #[error("no file is open")]
    NoFileOpen,

    /// A load or save is already in flight.
    #[error("busy: wait for the current load/save to finish")]
    Busy,
}

pub type Result<T> = std::result::Result<T, Error>;
