//! gui/update/mod.rs
//! Update logic (router).
//! Mutates state in response to `Message` events.

use iced::Task;

use super::state::{Message, Tagsmith};

mod cover;
mod file;
mod inspector;
mod save;
mod util;

pub(crate) fn update(state: &mut Tagsmith, message: Message) -> Task<Message> {
    match message {
        // File
        Message::OpenFile => file::open_file(state),
        Message::FilePicked(path) => file::file_picked(state, path),
        Message::TagsLoaded(path, result) => file::tags_loaded(state, path, result),

        // Inspector
        Message::FieldChanged(field, value) => inspector::field_changed(state, field, value),
        Message::Undo => inspector::undo(state),
        Message::RevertInspector => inspector::revert_inspector(state),

        // Cover
        Message::OpenImage => cover::open_image(state),
        Message::ImagePicked(path) => cover::image_picked(state, path),
        Message::ImageLoaded(target, path, result) => {
            cover::image_loaded(state, target, path, result)
        }
        Message::RecropCover => cover::recrop_cover(state),
        Message::RecropLoaded(target, result) => cover::recrop_loaded(state, target, result),
        Message::DiscardCover => cover::discard_cover(state),
        Message::CropChanged(crop) => cover::crop_changed(state, crop),

        // Save
        Message::SaveToFile => save::save_to_file(state),
        Message::SaveFinished(result) => save::save_finished(state, result),
    }
}
