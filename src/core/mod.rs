//! core/mod.rs
//!
//! The brain of the app:
//! - Read/write the editable ID3 fields of one MP3 (tag transport)
//! - Crop and re-encode a new cover image (cover pipeline)
//! - Hold the edit session (what is open, what changed, what is in flight)
//!
//! Nothing in here knows about iced. The GUI calls these functions, moving the
//! blocking ones (tag I/O, image decode) onto a background thread.

pub mod cover;
pub mod error;
pub mod session;
pub mod tags;
pub mod types;

use std::path::Path;

use error::Result;
use types::TagSet;

/// Write `tags` and read them straight back, so the form shows what is really on disk.
pub fn write_and_reload(path: &Path, tags: &TagSet) -> Result<TagSet> {
    tags::write_tags(path, tags)?;
    tags::read_tags(path)
}
