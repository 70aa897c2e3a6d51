//! gui/view/cover.rs
//! Right panel: cover preview, or the crop surface while a new cover is pending.

use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element};

use super::super::state::{Message, Tagsmith};
use super::super::util::{describe_crop, file_name};
use super::constants::{COVER_BIG, SMALL_TEXT};
use super::crop_surface::crop_surface;
use super::widgets::cover_thumb;

pub(crate) fn build_cover_panel(state: &Tagsmith) -> iced::widget::Container<'_, Message> {
    let session = &state.session;
    let idle = session.path().is_some() && !session.is_busy();

    let body: Element<'_, Message> = match (session.pending_cover(), &state.pending_handle) {
        (Some(pending), Some(handle)) => {
            let crop = session.crop();
            let source = &pending.source;
            let origin = pending
                .path
                .as_deref()
                .map(file_name)
                .unwrap_or_else(|| "current cover".to_string());

            column![
                crop_surface(
                    handle,
                    (source.displayed_width, source.displayed_height),
                    crop
                ),
                text(format!(
                    "{origin}: {} x {} px",
                    source.natural_width(),
                    source.natural_height()
                ))
                .size(SMALL_TEXT),
                text(format!(
                    "Selection {}",
                    describe_crop(crop.width, crop.height, crop.x, crop.y)
                ))
                .size(SMALL_TEXT),
                button("Discard new cover").on_press_maybe(idle.then_some(Message::DiscardCover)),
            ]
            .spacing(8)
            .align_x(Alignment::Center)
            .into()
        }
        _ => {
            let caption = match session.original_cover() {
                Some(c) => format!("{} ({}, {} bytes)", c.kind.name(), c.mime, c.data.len()),
                None => "No embedded cover".to_string(),
            };
            column![
                cover_thumb(state.cover_handle.as_ref(), COVER_BIG),
                text(caption).size(SMALL_TEXT),
            ]
            .spacing(8)
            .align_x(Alignment::Center)
            .into()
        }
    };

    let open_btn =
        button("Open image").on_press_maybe((idle && !state.picking).then_some(Message::OpenImage));
    let recrop_btn = button("Re-crop cover").on_press_maybe(
        (idle && session.original_cover().is_some()).then_some(Message::RecropCover),
    );

    container(
        column![
            text("Cover").size(18),
            body,
            row![open_btn, recrop_btn].spacing(8),
        ]
        .spacing(12),
    )
    .padding(12)
}
