//! gui/update/cover.rs
//! Picking a new cover image, re-cropping the embedded one, and crop adjustments.
//!
//! Decoding runs off the UI thread. A failed decode only sets the status line;
//! the current preview and any pending cover stay as they were.

use iced::Task;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::super::state::{COVER_BOX, IMAGE_FILTER, LoadedImage, Message, Tagsmith};
use super::super::util::{file_name, rgba_handle};
use super::util::{pick_file, spawn_blocking};
use crate::core::cover::{self, CropRegion, SourceImage};

pub(crate) fn open_image(state: &mut Tagsmith) -> Task<Message> {
    if state.picking || state.session.path().is_none() || state.session.is_busy() {
        return Task::none();
    }

    state.picking = true;
    Task::perform(pick_file("Choose cover image", IMAGE_FILTER), Message::ImagePicked)
}

pub(crate) fn image_picked(state: &mut Tagsmith, picked: Option<PathBuf>) -> Task<Message> {
    state.picking = false;

    let Some(path) = picked else {
        debug!("image dialog cancelled");
        return Task::none();
    };
    let Some(target) = state.session.path().map(PathBuf::from) else {
        return Task::none();
    };

    state.status = format!("Decoding {}...", file_name(&path));

    let load_path = path.clone();
    Task::perform(
        spawn_blocking(move || {
            cover::load_source_image(&load_path, COVER_BOX, COVER_BOX)
                .map(with_handle)
                .map_err(|e| e.to_string())
        }),
        move |res| Message::ImageLoaded(target, path, res),
    )
}

pub(crate) fn image_loaded(
    state: &mut Tagsmith,
    target: PathBuf,
    path: PathBuf,
    result: Result<LoadedImage, String>,
) -> Task<Message> {
    if !is_current_file(state, &target) {
        return Task::none();
    }

    match result {
        Ok(loaded) => match state.session.choose_cover(path.clone(), loaded.source) {
            Ok(()) => {
                state.status = format!("Adjust the crop for {}, then save.", file_name(&path));
                state.pending_handle = Some(loaded.handle);
            }
            Err(e) => {
                state.status = format!("Cover {} not applied: {e}", file_name(&path));
            }
        },
        Err(e) => {
            warn!(path = %path.display(), error = %e, "cover image decode failed");
            state.status = format!("Could not open image {}: {e}", file_name(&path));
        }
    }
    Task::none()
}

/// Put the embedded cover back under the crop surface.
pub(crate) fn recrop_cover(state: &mut Tagsmith) -> Task<Message> {
    if state.session.is_busy() {
        return Task::none();
    }
    let Some(target) = state.session.path().map(PathBuf::from) else {
        return Task::none();
    };
    let Some(original) = state.session.original_cover() else {
        state.status = "This file has no embedded cover.".to_string();
        return Task::none();
    };

    let bytes = original.data.clone();
    Task::perform(
        spawn_blocking(move || {
            cover::source_image_from_bytes(&bytes, COVER_BOX, COVER_BOX)
                .map(with_handle)
                .map_err(|e| e.to_string())
        }),
        move |res| Message::RecropLoaded(target, res),
    )
}

pub(crate) fn recrop_loaded(
    state: &mut Tagsmith,
    target: PathBuf,
    result: Result<LoadedImage, String>,
) -> Task<Message> {
    if !is_current_file(state, &target) {
        return Task::none();
    }

    match result {
        Ok(loaded) => match state.session.recrop_current_cover(loaded.source) {
            Ok(()) => {
                state.status = "Adjust the crop of the current cover, then save.".to_string();
                state.pending_handle = Some(loaded.handle);
            }
            Err(e) => {
                state.status = format!("Re-crop not applied: {e}");
            }
        },
        Err(e) => {
            warn!(error = %e, "embedded cover decode failed");
            state.status = format!("Could not decode the embedded cover: {e}");
        }
    }
    Task::none()
}

/// Decodes finish after the user may have opened another file; those results are dropped.
fn is_current_file(state: &Tagsmith, target: &Path) -> bool {
    let current = state.session.path() == Some(target);
    if !current {
        debug!(target = %target.display(), "dropping cover decode for a file no longer open");
    }
    current
}

pub(crate) fn discard_cover(state: &mut Tagsmith) -> Task<Message> {
    if state.session.is_busy() {
        return Task::none();
    }
    state.session.discard_pending_cover();
    state.pending_handle = None;
    state.status = "New cover discarded.".to_string();
    Task::none()
}

pub(crate) fn crop_changed(state: &mut Tagsmith, crop: CropRegion) -> Task<Message> {
    if state.session.is_busy() {
        return Task::none();
    }
    state.session.set_crop(crop);
    Task::none()
}

fn with_handle(source: SourceImage) -> LoadedImage {
    LoadedImage {
        handle: rgba_handle(&source),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{TagField, TagSet};
    use image::{DynamicImage, RgbaImage};

    fn open() -> Tagsmith {
        let mut state = Tagsmith::default();
        state.session.begin_load(PathBuf::from("a.mp3")).unwrap();
        state
            .session
            .finish_load(PathBuf::from("a.mp3"), Ok(TagSet::default()))
            .unwrap();
        state
    }

    fn mp3() -> PathBuf {
        PathBuf::from("a.mp3")
    }

    fn loaded(w: u32, h: u32) -> LoadedImage {
        with_handle(SourceImage::unscaled(DynamicImage::ImageRgba8(RgbaImage::new(w, h))))
    }

    #[test]
    fn cancelled_image_picker_keeps_pending_cover() {
        let mut state = open();
        let _ = image_loaded(&mut state, mp3(), PathBuf::from("x.png"), Ok(loaded(400, 300)));
        let crop = state.session.crop();

        state.picking = true;
        let _ = image_picked(&mut state, None);

        assert!(!state.picking);
        assert!(state.session.is_cover_changed());
        assert!(state.pending_handle.is_some());
        assert_eq!(state.session.crop(), crop);
    }

    #[test]
    fn failed_decode_keeps_previous_preview() {
        let mut state = open();
        let _ = image_loaded(&mut state, mp3(), PathBuf::from("x.png"), Ok(loaded(100, 100)));
        let _ = image_loaded(&mut state, mp3(), PathBuf::from("y.png"), Err("corrupt".into()));

        assert!(state.pending_handle.is_some());
        assert_eq!(
            state.session.pending_cover().unwrap().path.as_deref(),
            Some(std::path::Path::new("x.png"))
        );
        assert!(state.status.contains("corrupt"));
    }

    #[test]
    fn crop_changes_are_clamped_by_the_session() {
        let mut state = open();
        let _ = image_loaded(&mut state, mp3(), PathBuf::from("x.png"), Ok(loaded(100, 100)));
        let _ = crop_changed(
            &mut state,
            CropRegion {
                x: -10.0,
                y: 0.0,
                width: 50.0,
                height: 50.0,
                aspect: Some(1.0),
            },
        );
        assert_eq!(state.session.crop().x, 0.0);
    }

    #[test]
    fn recrop_without_cover_is_a_message() {
        let mut state = open();
        let _ = recrop_cover(&mut state);
        assert_eq!(state.status, "This file has no embedded cover.");
    }

    #[test]
    fn decode_for_a_previous_file_is_dropped() {
        let mut state = open();
        state.session.begin_load(PathBuf::from("b.mp3")).unwrap();
        state
            .session
            .finish_load(PathBuf::from("b.mp3"), Ok(TagSet::default()))
            .unwrap();
        state.status = "Loaded b.mp3".into();

        let _ = recrop_loaded(&mut state, mp3(), Ok(loaded(50, 50)));
        let _ = image_loaded(&mut state, mp3(), PathBuf::from("x.png"), Ok(loaded(50, 50)));

        assert!(!state.session.is_cover_changed());
        assert!(state.pending_handle.is_none());
        assert_eq!(state.status, "Loaded b.mp3");
    }

    #[test]
    fn decode_finishing_mid_save_is_reported_not_lost() {
        let mut state = open();
        state.session.set_field(TagField::Title, "t".into());
        state.session.begin_save().unwrap();

        let _ = image_loaded(&mut state, mp3(), PathBuf::from("x.png"), Ok(loaded(50, 50)));
        assert!(!state.session.is_cover_changed());
        assert!(state.pending_handle.is_none());
        assert!(state.status.starts_with("Cover x.png not applied: busy"));

        let _ = recrop_loaded(&mut state, mp3(), Ok(loaded(50, 50)));
        assert!(state.status.starts_with("Re-crop not applied: busy"));
    }

    #[test]
    fn discard_drops_pending() {
        let mut state = open();
        let _ = image_loaded(&mut state, mp3(), PathBuf::from("x.png"), Ok(loaded(10, 10)));
        let _ = discard_cover(&mut state);
        assert!(!state.session.is_cover_changed());
        assert!(state.pending_handle.is_none());
    }
}
