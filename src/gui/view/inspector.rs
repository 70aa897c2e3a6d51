//! gui/view/inspector.rs
//! Left panel: the four text fields and the edit/save buttons.

use iced::widget::{Column, button, column, container, row, text};

use super::super::state::{Message, Tagsmith};
use super::constants::SMALL_TEXT;
use super::widgets::field_row;
use crate::core::types::TagField;

pub(crate) fn build_inspector_panel(state: &Tagsmith) -> iced::widget::Container<'_, Message> {
    let session = &state.session;

    let Some(path) = session.path() else {
        return container(
            column![
                text("Tags").size(18),
                text("No file open. Use \"Open .mp3\" above."),
            ]
            .spacing(8),
        )
        .padding(12);
    };

    let editable = !session.is_busy();

    let fields: Column<'_, Message> = TagField::ALL
        .iter()
        .fold(column![].spacing(8), |col, &field| {
            let value = session.tags().get(field).unwrap_or("");
            let on_input = editable.then_some(move |s: String| Message::FieldChanged(field, s));
            col.push(field_row(field.label(), value, on_input))
        });

    let save_btn = button("Save tags").on_press_maybe(session.can_save().then_some(Message::SaveToFile));
    let undo_btn = button("Undo").on_press_maybe((editable && session.can_undo()).then_some(Message::Undo));
    let revert_btn = button("Revert")
        .on_press_maybe((editable && session.is_dirty()).then_some(Message::RevertInspector));

    let buttons = row![save_btn, undo_btn, revert_btn].spacing(8);

    container(
        column![
            text("Tags").size(18),
            text(path.display().to_string()).size(SMALL_TEXT),
            fields,
            buttons,
        ]
        .spacing(12),
    )
    .padding(12)
}
