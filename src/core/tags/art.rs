use id3::{Tag, TagLike};
use id3::frame::{Picture, PictureType};

use crate::core::types::{CoverImage, PictureKind};

/// Front cover if there is one, else the first embedded picture (APIC/PIC).
pub(crate) fn pick_cover(tag: &Tag) -> Option<CoverImage> {
    let pictures: Vec<&Picture> = tag.pictures().collect();

    let picture = pictures
        .iter()
        .find(|p| p.picture_type == PictureType::CoverFront)
        .or_else(|| pictures.first())?;

    Some(CoverImage {
        data: picture.data.clone(),
        mime: picture.mime_type.clone(),
        kind: kind_from_picture_type(picture.picture_type),
        description: picture.description.clone(),
    })
}

/// Build the APIC frame for a cover. An empty mime is sniffed from the bytes.
pub(crate) fn picture_from_cover(cover: &CoverImage) -> Picture {
    Picture {
        mime_type: effective_mime(cover),
        picture_type: picture_type_from_kind(cover.kind),
        description: cover.description.clone(),
        data: cover.data.clone(),
    }
}

fn effective_mime(cover: &CoverImage) -> String {
    let mime = cover.mime.trim();
    if !mime.is_empty() {
        return mime.to_string();
    }

    image::guess_format(&cover.data)
        .map(|f| f.to_mime_type().to_string())
        .unwrap_or_else(|_| "image/png".to_string())
}

pub(crate) fn picture_type_from_kind(kind: PictureKind) -> PictureType {
    match kind.id {
        0 => PictureType::Other,
        1 => PictureType::Icon,
        2 => PictureType::OtherIcon,
        3 => PictureType::CoverFront,
        4 => PictureType::CoverBack,
        5 => PictureType::Leaflet,
        6 => PictureType::Media,
        7 => PictureType::LeadArtist,
        8 => PictureType::Artist,
        9 => PictureType::Conductor,
        10 => PictureType::Band,
        11 => PictureType::Composer,
        12 => PictureType::Lyricist,
        13 => PictureType::RecordingLocation,
        14 => PictureType::DuringRecording,
        15 => PictureType::DuringPerformance,
        16 => PictureType::ScreenCapture,
        17 => PictureType::BrightFish,
        18 => PictureType::Illustration,
        19 => PictureType::BandLogo,
        20 => PictureType::PublisherLogo,
        n => PictureType::Undefined(n),
    }
}

pub(crate) fn kind_from_picture_type(t: PictureType) -> PictureKind {
    let id = match t {
        PictureType::Other => 0,
        PictureType::Icon => 1,
        PictureType::OtherIcon => 2,
        PictureType::CoverFront => 3,
        PictureType::CoverBack => 4,
        PictureType::Leaflet => 5,
        PictureType::Media => 6,
        PictureType::LeadArtist => 7,
        PictureType::Artist => 8,
        PictureType::Conductor => 9,
        PictureType::Band => 10,
        PictureType::Composer => 11,
        PictureType::Lyricist => 12,
        PictureType::RecordingLocation => 13,
        PictureType::DuringRecording => 14,
        PictureType::DuringPerformance => 15,
        PictureType::ScreenCapture => 16,
        PictureType::BrightFish => 17,
        PictureType::Illustration => 18,
        PictureType::BandLogo => 19,
        PictureType::PublisherLogo => 20,
        PictureType::Undefined(n) => n,
    };
    PictureKind { id }
}
