//! core/tags/mod.rs
//!
//! ID3 tag read/write: the transport between the editor and the file on disk.
//! Public API:
//! - [`read_tags`] reads artist/title/genre/album + cover into a [`TagSet`](crate::core::types::TagSet).
//! - [`write_tags`] writes them back (ID3v2.4), preserving unrelated frames.

mod art;
mod read;
mod write;

pub use read::read_tags;
pub use write::write_tags;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::Error;
    use crate::core::types::{CoverImage, PictureKind, TagField, TagSet};
    use std::path::PathBuf;

    /// A few bytes that look like an MPEG frame header; enough for id3 to prepend a tag.
    fn fake_mp3(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("song.mp3");
        let mut bytes = vec![0xFF, 0xFB, 0x90, 0x64];
        bytes.extend(std::iter::repeat_n(0u8, 413));
        std::fs::write(&path, bytes).unwrap();
        path
    }

    fn cover(bytes: &[u8], kind: PictureKind) -> CoverImage {
        CoverImage {
            data: bytes.to_vec(),
            mime: "image/png".into(),
            kind,
            description: String::new(),
        }
    }

    #[test]
    fn untagged_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = fake_mp3(&dir);
        assert_eq!(read_tags(&path).unwrap(), TagSet::default());
    }

    #[test]
    fn missing_file_is_a_transport_error() {
        let err = read_tags(std::path::Path::new("/nonexistent/song.mp3")).unwrap_err();
        assert!(matches!(err, Error::Transport { .. }));
    }

    #[test]
    fn writes_and_reads_back_fields_and_cover() {
        let dir = tempfile::tempdir().unwrap();
        let path = fake_mp3(&dir);

        let tags = TagSet {
            artist: Some("Boards of Canada".into()),
            title: Some("Roygbiv".into()),
            genre: Some("Electronic".into()),
            album: Some("Music Has the Right to Children".into()),
            image: Some(cover(b"\x89PNG fake", PictureKind::FRONT_COVER)),
        };
        write_tags(&path, &tags).unwrap();

        let back = read_tags(&path).unwrap();
        assert_eq!(back, tags);

        // Audio bytes are still there after the tag.
        let raw = std::fs::read(&path).unwrap();
        assert!(raw.starts_with(b"ID3"));
        assert!(raw.windows(4).any(|w| w == [0xFF, 0xFB, 0x90, 0x64]));
    }

    #[test]
    fn blank_fields_remove_frames() {
        let dir = tempfile::tempdir().unwrap();
        let path = fake_mp3(&dir);

        let mut tags = TagSet {
            artist: Some("A".into()),
            title: Some("T".into()),
            ..Default::default()
        };
        write_tags(&path, &tags).unwrap();

        tags.set(TagField::Artist, Some("   ".into()));
        tags.set(TagField::Title, None);
        write_tags(&path, &tags).unwrap();

        let back = read_tags(&path).unwrap();
        assert_eq!(back.artist, None);
        assert_eq!(back.title, None);
    }

    #[test]
    fn new_cover_replaces_only_same_kind() {
        let dir = tempfile::tempdir().unwrap();
        let path = fake_mp3(&dir);

        let mut tags = TagSet {
            image: Some(cover(b"back", PictureKind { id: 4 })),
            ..Default::default()
        };
        write_tags(&path, &tags).unwrap();

        tags.image = Some(cover(b"front v1", PictureKind::FRONT_COVER));
        write_tags(&path, &tags).unwrap();
        tags.image = Some(cover(b"front v2", PictureKind::FRONT_COVER));
        write_tags(&path, &tags).unwrap();

        use id3::TagLike as _;
        let tag = id3::Tag::read_from_path(&path).unwrap();
        let mut datas: Vec<Vec<u8>> = tag.pictures().map(|p| p.data.clone()).collect();
        datas.sort();
        assert_eq!(datas, vec![b"back".to_vec(), b"front v2".to_vec()]);

        // Reader prefers the front cover.
        assert_eq!(read_tags(&path).unwrap().image.unwrap().data, b"front v2");
    }

    /// ID3v2.4 tag whose TIT2 frame claims UTF-8 but holds invalid bytes, then audio.
    fn corrupt_tag_mp3(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("corrupt.mp3");
        let frame_body = [0x03, 0xC3, 0x28];
        let mut bytes = b"ID3\x04\x00\x00".to_vec();
        bytes.extend([0, 0, 0, 10 + frame_body.len() as u8]);
        bytes.extend(b"TIT2");
        bytes.extend([0, 0, 0, frame_body.len() as u8, 0, 0]);
        bytes.extend(frame_body);
        bytes.extend([0xFF, 0xFB, 0x90, 0x64]);
        bytes.extend(std::iter::repeat_n(0u8, 64));
        std::fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn unreadable_tag_is_not_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = corrupt_tag_mp3(&dir);
        let before = std::fs::read(&path).unwrap();

        assert!(matches!(read_tags(&path), Err(Error::Transport { .. })));

        let tags = TagSet {
            title: Some("new".into()),
            ..Default::default()
        };
        assert!(matches!(write_tags(&path, &tags), Err(Error::Transport { .. })));
        assert_eq!(std::fs::read(&path).unwrap(), before);
    }

    #[test]
    fn no_image_leaves_embedded_art_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = fake_mp3(&dir);

        let mut tags = TagSet {
            image: Some(cover(b"art", PictureKind::FRONT_COVER)),
            ..Default::default()
        };
        write_tags(&path, &tags).unwrap();

        tags.image = None;
        tags.title = Some("renamed".into());
        write_tags(&path, &tags).unwrap();

        let back = read_tags(&path).unwrap();
        assert_eq!(back.title.as_deref(), Some("renamed"));
        assert_eq!(back.image.unwrap().data, b"art");
    }
}
