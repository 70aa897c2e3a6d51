//! GUI renderer (reads state, produces widgets; no mutation).

mod constants;
mod cover;
mod crop_surface;
mod inspector;
mod widgets;

use iced::widget::{Column, button, column, row, text};
use iced::{Alignment, Length};

use super::state::{Message, Tagsmith};
use super::util::file_name;
use constants::{FORM_W, STATUS_TEXT};

pub(crate) fn view(state: &Tagsmith) -> Column<'_, Message> {
    let session = &state.session;

    let can_open = !state.picking && !matches!(session.activity(), crate::core::session::Activity::Saving);
    let current = match session.path() {
        Some(p) if session.is_dirty() => format!("{} (modified)", file_name(p)),
        Some(p) => file_name(p),
        None => "No file".to_string(),
    };
    let header = row![
        button("Open .mp3").on_press_maybe(can_open.then_some(Message::OpenFile)),
        text(current),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let form = inspector::build_inspector_panel(state).width(Length::Fixed(FORM_W));
    let art = cover::build_cover_panel(state).width(Length::Fill);
    let body = row![form, art].spacing(12).height(Length::Fill);

    let status = text(&state.status).size(STATUS_TEXT);

    column![header, body, status].spacing(12).padding(12)
}
