//! GUI state + messages.
//! Pure data definitions used by update.rs + view.rs.

use std::path::PathBuf;

use iced::widget::image::Handle;

use crate::core::cover::{CropRegion, SourceImage};
use crate::core::session::EditSession;
use crate::core::types::{TagField, TagSet};

/// Picker filters: (label, extensions)
pub(crate) const MP3_FILTER: (&str, &[&str]) = ("mp3", &["mp3"]);
pub(crate) const IMAGE_FILTER: (&str, &[&str]) = ("Images", &["jpg", "jpeg", "png"]);

/// Largest size (pixels) a cover is shown at while cropping.
pub(crate) const COVER_BOX: f32 = 420.0;

/// A decoded cover candidate plus a GPU-ready handle for drawing it.
#[derive(Debug, Clone)]
pub(crate) struct LoadedImage {
    pub source: SourceImage,
    pub handle: Handle,
}

/// App state
pub(crate) struct Tagsmith {
    pub status: String,

    /// A native file dialog is open.
    pub picking: bool,

    pub session: EditSession,

    /// Preview of the cover embedded in the file.
    pub cover_handle: Option<Handle>,
    /// Image under the crop surface while a new cover is pending.
    pub pending_handle: Option<Handle>,
}

impl Default for Tagsmith {
    fn default() -> Self {
        Self {
            status: "Open an .mp3 to start.".to_string(),
            picking: false,
            session: EditSession::new(),
            cover_handle: None,
            pending_handle: None,
        }
    }
}

/// Message = "something happened".
#[derive(Debug, Clone)]
pub(crate) enum Message {
    // File
    OpenFile,
    FilePicked(Option<PathBuf>),
    TagsLoaded(PathBuf, Result<TagSet, String>),

    // Inspector edits
    FieldChanged(TagField, String),
    Undo,
    RevertInspector,

    // Cover
    OpenImage,
    ImagePicked(Option<PathBuf>),
    /// (mp3 it was picked for, image file, decode result)
    ImageLoaded(PathBuf, PathBuf, Result<LoadedImage, String>),
    RecropCover,
    /// (mp3 whose cover was decoded, decode result)
    RecropLoaded(PathBuf, Result<LoadedImage, String>),
    DiscardCover,
    CropChanged(CropRegion),

    // Save
    SaveToFile,
    SaveFinished(Result<TagSet, String>),
}
