//! Reusable small widgets/helpers used across view modules.

use iced::widget::{column, container, image, row, text, text_input};
use iced::{Alignment, Element, Length};

use super::super::state::Message;
use super::constants::{LABEL_W, SMALL_TEXT};

pub(crate) fn cover_placeholder(size: f32) -> iced::widget::Container<'static, Message> {
    container(
        column![text("♪").size(28), text("no cover").size(SMALL_TEXT)]
            .spacing(4)
            .align_x(Alignment::Center),
    )
    .width(Length::Fixed(size))
    .height(Length::Fixed(size))
    .center_x(Length::Fill)
    .center_y(Length::Fill)
}

/// If `handle` exists, show it; otherwise show the placeholder.
pub(crate) fn cover_thumb(
    handle: Option<&iced::widget::image::Handle>,
    size: f32,
) -> Element<'static, Message> {
    match handle {
        Some(h) => container(image(h.clone()))
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into(),
        None => cover_placeholder(size).into(),
    }
}

/// Label + text input. `on_input = None` renders the input read-only.
pub(crate) fn field_row<'a>(
    label: &'a str,
    value: &'a str,
    on_input: Option<impl Fn(String) -> Message + 'a>,
) -> iced::widget::Row<'a, Message> {
    row![
        text(label).width(Length::Fixed(LABEL_W)),
        text_input("", value).on_input_maybe(on_input).width(Length::Fill),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
}
