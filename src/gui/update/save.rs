use iced::Task;

use super::super::state::{Message, Tagsmith};
use super::super::util::{cover_handle, file_name};
use super::util::spawn_blocking;
use crate::core::error::Error;

pub(crate) fn save_to_file(state: &mut Tagsmith) -> Task<Message> {
    if state.picking {
        return Task::none();
    }

    if !state.session.is_dirty() {
        state.status = "No changes to save.".to_string();
        return Task::none();
    }

    // Crops the pending cover (if any). On error nothing in the session changed.
    let request = match state.session.begin_save() {
        Ok(r) => r,
        Err(Error::EmptySelection { .. }) => {
            state.status = "Crop selection is empty; cover not changed.".to_string();
            return Task::none();
        }
        Err(e) => {
            state.status = format!("Not saved: {e}");
            return Task::none();
        }
    };

    state.status = format!("Writing tags to {}...", file_name(&request.path));

    Task::perform(
        spawn_blocking(move || {
            crate::core::write_and_reload(&request.path, &request.tags).map_err(|e| e.to_string())
        }),
        Message::SaveFinished,
    )
}

pub(crate) fn save_finished(state: &mut Tagsmith, result: Result<crate::core::types::TagSet, String>) -> Task<Message> {
    match state.session.finish_save(result) {
        Ok(()) => {
            state.cover_handle = cover_handle(state.session.original_cover());
            state.pending_handle = None;
            state.status = "Tags written to file.".to_string();
        }
        Err(e) => {
            // Edits and pending cover are kept so Save can be retried.
            state.status = format!("Save failed: {e}");
        }
    }

    Task::none()
}
