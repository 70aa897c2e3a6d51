//! core/tags/read.rs
//! Read the editable fields of an MP3's ID3 tag into a `TagSet`.

use std::path::Path;

use id3::{ErrorKind, Tag, TagLike};
use tracing::debug;

use super::art::pick_cover;
use crate::core::error::{Error, Result};
use crate::core::types::TagSet;

/// A file without any ID3 tag reads as an empty `TagSet`, not an error.
pub fn read_tags(path: &Path) -> Result<TagSet> {
    let tag = match Tag::read_from_path(path) {
        Ok(tag) => tag,
        Err(e) if matches!(e.kind, ErrorKind::NoTag) => {
            debug!(path = %path.display(), "no ID3 tag, starting empty");
            return Ok(TagSet::default());
        }
        Err(source) => {
            return Err(Error::Transport {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    Ok(tags_from_id3(&tag))
}

fn tags_from_id3(tag: &Tag) -> TagSet {
    TagSet {
        artist: tag.artist().map(str::to_owned),
        title: tag.title().map(str::to_owned),
        // Raw TCON text; "(17)"-style ids are left as-is.
        genre: tag.genre().map(str::to_owned),
        album: tag.album().map(str::to_owned),
        image: pick_cover(tag),
    }
}
