//! Small pure helper functions used by the GUI.
//! - no UI widgets or state mutation

use std::path::Path;

use iced::widget::image::Handle;

use crate::core::cover::SourceImage;
use crate::core::types::CoverImage;

/// File name shown next to the "Open" button.
/// Ex: '/music/song.mp3' -> 'song.mp3'
pub(crate) fn file_name(path: &Path) -> String {
    path.file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("(unnamed)")
        .to_string()
}

/// Embedded cover bytes -> image handle (decoded lazily by iced).
pub(crate) fn cover_handle(cover: Option<&CoverImage>) -> Option<Handle> {
    cover.map(|c| Handle::from_bytes(c.data.clone()))
}

/// Decoded pixels -> RGBA handle. Runs on the worker thread.
pub(crate) fn rgba_handle(source: &SourceImage) -> Handle {
    let rgba = source.pixels.to_rgba8();
    Handle::from_rgba(rgba.width(), rgba.height(), rgba.into_raw())
}

/// "240 x 240 at (80, 30)"
pub(crate) fn describe_crop(width: f32, height: f32, x: f32, y: f32) -> String {
    format!(
        "{} x {} at ({}, {})",
        width as u32,
        height as u32,
        x.round() as i64,
        y.round() as i64
    )
}
