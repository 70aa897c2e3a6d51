//! Write a `TagSet` back to an MP3.

use std::path::Path;

use id3::{ErrorKind, Tag, TagLike, Version};
use tracing::debug;

use super::art::{picture_from_cover, picture_type_from_kind};
use crate::core::error::{Error, Result};
use crate::core::types::{TagField, TagSet};

fn frame_id(field: TagField) -> &'static str {
    match field {
        TagField::Artist => "TPE1",
        TagField::Title => "TIT2",
        TagField::Genre => "TCON",
        TagField::Album => "TALB",
    }
}

/// Helper: set/remove a plain text frame (T***)
fn set_text_opt(tag: &mut Tag, id: &str, v: Option<&str>) {
    match v.map(str::trim) {
        Some(s) if !s.is_empty() => tag.set_text(id, s.to_string()),
        _ => {
            tag.remove(id);
        }
    }
}

/// Write `tags` into the file at `path`.
///
/// Semantics:
/// - `None` (or empty/whitespace string) => remove that frame from the file.
/// - `image: Some` => replaces the picture of the same kind; other pictures stay.
/// - `image: None` => embedded pictures are left alone.
/// - Frames this editor does not know about are preserved.
pub fn write_tags(path: &Path, tags: &TagSet) -> Result<()> {
    // Start fresh only when the file has no tag; an unreadable tag is an error, not a blank slate.
    let mut tag = match Tag::read_from_path(path) {
        Ok(tag) => tag,
        Err(e) if matches!(e.kind, ErrorKind::NoTag) => Tag::new(),
        Err(source) => {
            return Err(Error::Transport {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    for field in TagField::ALL {
        set_text_opt(&mut tag, frame_id(field), tags.get(field));
    }

    if let Some(cover) = &tags.image {
        tag.remove_picture_by_type(picture_type_from_kind(cover.kind));
        tag.add_frame(picture_from_cover(cover));
    }

    tag.write_to_path(path, Version::Id3v24)
        .map_err(|source| Error::Transport {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(path = %path.display(), cover = tags.image.is_some(), "tags written");
    Ok(())
}
