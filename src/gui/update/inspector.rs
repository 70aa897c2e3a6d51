//! gui/update/inspector.rs
//! Form edits: one text field at a time, undo, revert.

use iced::Task;

use super::super::state::{Message, Tagsmith};
use crate::core::types::TagField;

pub(crate) fn field_changed(state: &mut Tagsmith, field: TagField, value: String) -> Task<Message> {
    // No file yet, or a load/save in flight: the inputs are read-only.
    if state.session.path().is_none() || state.session.is_busy() {
        return Task::none();
    }

    state.session.set_field(field, value);
    Task::none()
}

pub(crate) fn undo(state: &mut Tagsmith) -> Task<Message> {
    if state.session.is_busy() {
        return Task::none();
    }

    if let Some(field) = state.session.undo() {
        state.status = format!("Undid {} edit.", field.label().to_lowercase());
    }
    Task::none()
}

pub(crate) fn revert_inspector(state: &mut Tagsmith) -> Task<Message> {
    if state.session.is_busy() {
        return Task::none();
    }

    state.session.revert();
    state.pending_handle = None;
    state.status = "Edits discarded.".to_string();
    Task::none()
}
