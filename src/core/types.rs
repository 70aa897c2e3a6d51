//! Core data types shared between core logic and the UI.
//!
//! Rule of thumb:
//! - These structs should be "boring bags of data"
//! - No GUI code
//! - No filesystem code
//! - No tag parsing code
//!
//! `TagSet` is the whole editable document: four text fields plus an optional cover.

/// The text fields the editor knows about. Nothing else is read or written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TagField {
    Artist,
    Title,
    Genre,
    Album,
}

impl TagField {
    /// Form order.
    pub const ALL: [TagField; 4] = [
        TagField::Artist,
        TagField::Title,
        TagField::Genre,
        TagField::Album,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TagField::Artist => "Artist",
            TagField::Title => "Title",
            TagField::Genre => "Genre",
            TagField::Album => "Album",
        }
    }
}

/// APIC picture classification: the numeric ID3 id plus its display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PictureKind {
    pub id: u8,
}

/// Names for APIC ids 0..=20, indexed by id.
const PICTURE_KIND_NAMES: [&str; 21] = [
    "other",
    "file icon",
    "other file icon",
    "front cover",
    "back cover",
    "leaflet page",
    "media",
    "lead artist",
    "artist",
    "conductor",
    "band",
    "composer",
    "lyricist",
    "recording location",
    "during recording",
    "during performance",
    "video screen capture",
    "a bright coloured fish",
    "illustration",
    "band logo",
    "publisher logo",
];

impl PictureKind {
    pub const OTHER: PictureKind = PictureKind { id: 0 };
    pub const FRONT_COVER: PictureKind = PictureKind { id: 3 };

    pub fn name(self) -> &'static str {
        PICTURE_KIND_NAMES
            .get(self.id as usize)
            .copied()
            .unwrap_or("undefined")
    }
}

/// An embedded picture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverImage {
    /// Encoded image file bytes (PNG/JPEG), not raw pixels.
    pub data: Vec<u8>,
    /// May be empty; the writer sniffs it from `data` then.
    pub mime: String,
    pub kind: PictureKind,
    pub description: String,
}

/// The tags being edited for one file.
///
/// `None` = frame absent. An empty string is treated like `None` on write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    pub artist: Option<String>,
    pub title: Option<String>,
    pub genre: Option<String>,
    pub album: Option<String>,
    pub image: Option<CoverImage>,
}

impl TagSet {
    pub fn get(&self, field: TagField) -> Option<&str> {
        match field {
            TagField::Artist => self.artist.as_deref(),
            TagField::Title => self.title.as_deref(),
            TagField::Genre => self.genre.as_deref(),
            TagField::Album => self.album.as_deref(),
        }
    }

    pub fn set(&mut self, field: TagField, value: Option<String>) {
        let slot = match field {
            TagField::Artist => &mut self.artist,
            TagField::Title => &mut self.title,
            TagField::Genre => &mut self.genre,
            TagField::Album => &mut self.album,
        };
        *slot = value;
    }

    /// Same text fields, ignoring the cover.
    pub fn same_text(&self, other: &TagSet) -> bool {
        TagField::ALL
            .iter()
            .all(|&f| self.get(f).unwrap_or("") == other.get(f).unwrap_or(""))
    }
}
