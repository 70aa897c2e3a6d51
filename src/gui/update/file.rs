//! gui/update/file.rs
//! Open dialog -> background tag read -> populate the inspector.

use iced::Task;
use std::path::PathBuf;
use tracing::debug;

use super::super::state::{MP3_FILTER, Message, Tagsmith};
use super::super::util::{cover_handle, file_name};
use super::util::{pick_file, spawn_blocking};
use crate::core::session::Activity;
use crate::core::tags;

pub(crate) fn open_file(state: &mut Tagsmith) -> Task<Message> {
    if state.picking || *state.session.activity() == Activity::Saving {
        return Task::none();
    }

    state.picking = true;
    Task::perform(pick_file("Open MP3", MP3_FILTER), Message::FilePicked)
}

pub(crate) fn file_picked(state: &mut Tagsmith, picked: Option<PathBuf>) -> Task<Message> {
    state.picking = false;

    // Cancelled dialog: nothing changes.
    let Some(path) = picked else {
        debug!("open dialog cancelled");
        return Task::none();
    };

    if let Err(e) = state.session.begin_load(path.clone()) {
        state.status = e.to_string();
        return Task::none();
    }

    state.status = format!("Reading {}...", file_name(&path));

    let read_path = path.clone();
    Task::perform(
        spawn_blocking(move || tags::read_tags(&read_path).map_err(|e| e.to_string())),
        move |res| Message::TagsLoaded(path, res),
    )
}

pub(crate) fn tags_loaded(
    state: &mut Tagsmith,
    path: PathBuf,
    result: Result<crate::core::types::TagSet, String>,
) -> Task<Message> {
    // A newer open superseded this one.
    if *state.session.activity() != Activity::Loading(path.clone()) {
        return Task::none();
    }

    let name = file_name(&path);
    match state.session.finish_load(path, result) {
        Ok(()) => {
            state.cover_handle = cover_handle(state.session.original_cover());
            state.pending_handle = None;
            state.status = format!("Loaded {name}");
        }
        Err(e) => {
            // Previous file (if any) stays open.
            state.status = format!("Could not read tags from {name}: {e}");
        }
    }

    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{CoverImage, PictureKind, TagSet};

    fn with_open_file() -> Tagsmith {
        let mut state = Tagsmith::default();
        let tags = TagSet {
            artist: Some("Artist".into()),
            image: Some(CoverImage {
                data: b"jpeg".to_vec(),
                mime: "image/jpeg".into(),
                kind: PictureKind::FRONT_COVER,
                description: String::new(),
            }),
            ..Default::default()
        };
        let _ = file_picked(&mut state, Some(PathBuf::from("a.mp3")));
        let _ = tags_loaded(&mut state, PathBuf::from("a.mp3"), Ok(tags));
        state
    }

    #[test]
    fn loading_populates_form_and_preview() {
        let state = with_open_file();
        assert_eq!(state.session.tags().artist.as_deref(), Some("Artist"));
        assert!(state.cover_handle.is_some());
        assert_eq!(state.status, "Loaded a.mp3");
    }

    #[test]
    fn cancelled_picker_changes_nothing() {
        let mut state = with_open_file();
        state.picking = true;
        let before = state.session.tags().clone();

        let _ = file_picked(&mut state, None);

        assert!(!state.picking);
        assert_eq!(state.session.tags(), &before);
        assert!(state.cover_handle.is_some());
        assert_eq!(state.session.activity(), &Activity::Idle);
        assert_eq!(state.status, "Loaded a.mp3");
    }

    #[test]
    fn failed_read_keeps_previous_file() {
        let mut state = with_open_file();
        let _ = file_picked(&mut state, Some(PathBuf::from("b.mp3")));
        let _ = tags_loaded(&mut state, PathBuf::from("b.mp3"), Err("bad header".into()));

        assert_eq!(state.session.path(), Some(std::path::Path::new("a.mp3")));
        assert!(state.cover_handle.is_some());
        assert!(state.status.contains("bad header"));
    }

    #[test]
    fn stale_result_is_dropped() {
        let mut state = with_open_file();
        let _ = file_picked(&mut state, Some(PathBuf::from("b.mp3")));
        let _ = file_picked(&mut state, Some(PathBuf::from("c.mp3")));
        let _ = tags_loaded(&mut state, PathBuf::from("b.mp3"), Ok(TagSet::default()));

        assert_eq!(state.session.path(), Some(std::path::Path::new("a.mp3")));
        assert_eq!(state.status, "Reading c.mp3...");
    }
}
