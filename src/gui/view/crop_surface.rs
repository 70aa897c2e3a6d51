//! gui/view/crop_surface.rs
//! Interactive crop rectangle drawn over the pending cover.
//!
//! Coordinates are in displayed-image space: (0, 0) is the image's top-left
//! corner as shown. The overlay only proposes regions; the session clamps them.

use iced::mouse;
use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke};
use iced::widget::{canvas as canvas_widget, image, stack};
use iced::{Color, ContentFit, Element, Length, Point, Rectangle, Renderer, Size, Theme};

use super::super::state::Message;
use super::constants::{HANDLE_SIZE, SHADE_ALPHA, STROKE_W};
use crate::core::cover::CropRegion;

/// What the pointer is doing with the selection.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) enum Drag {
    #[default]
    Idle,
    Moving {
        last: Point,
    },
    Resizing,
    Drawing {
        start: Point,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Hit {
    Handle,
    Inside,
    Outside,
}

fn hit_test(crop: &CropRegion, p: Point) -> Hit {
    let hx = crop.x + crop.width;
    let hy = crop.y + crop.height;
    if crop.has_area() && (p.x - hx).abs() <= HANDLE_SIZE && (p.y - hy).abs() <= HANDLE_SIZE {
        Hit::Handle
    } else if crop.has_area() && crop.contains(p.x, p.y) {
        Hit::Inside
    } else {
        Hit::Outside
    }
}

/// Pointer pressed at `p`: which drag starts.
fn begin_drag(crop: &CropRegion, p: Point) -> Drag {
    match hit_test(crop, p) {
        Hit::Handle => Drag::Resizing,
        Hit::Inside => Drag::Moving { last: p },
        Hit::Outside => Drag::Drawing { start: p },
    }
}

/// Pointer moved to `p` during `drag`: the proposed crop and the updated drag.
fn continue_drag(crop: &CropRegion, drag: Drag, p: Point) -> Option<(CropRegion, Drag)> {
    match drag {
        Drag::Idle => None,
        Drag::Moving { last } => Some((
            crop.moved_by(p.x - last.x, p.y - last.y),
            Drag::Moving { last: p },
        )),
        Drag::Resizing => Some((crop.resized_to(p.x, p.y), drag)),
        Drag::Drawing { start } => Some((
            CropRegion::from_drag((start.x, start.y), (p.x, p.y), crop.aspect),
            drag,
        )),
    }
}

pub(crate) struct CropOverlay {
    pub crop: CropRegion,
}

impl canvas::Program<Message> for CropOverlay {
    type State = Drag;

    fn update(
        &self,
        drag: &mut Drag,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        let iced::Event::Mouse(event) = event else {
            return None;
        };

        match event {
            mouse::Event::ButtonPressed(mouse::Button::Left) => {
                let p = cursor.position_in(bounds)?;
                *drag = begin_drag(&self.crop, p);
                Some(canvas::Action::capture())
            }
            mouse::Event::CursorMoved { .. } => {
                // Keep tracking outside the surface; the session clamps the result.
                let abs = cursor.position()?;
                let p = Point::new(abs.x - bounds.x, abs.y - bounds.y);
                let (crop, next) = continue_drag(&self.crop, *drag, p)?;
                *drag = next;
                Some(canvas::Action::publish(Message::CropChanged(crop)).and_capture())
            }
            mouse::Event::ButtonReleased(mouse::Button::Left) if *drag != Drag::Idle => {
                *drag = Drag::Idle;
                Some(canvas::Action::capture())
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _drag: &Drag,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let shade = Color::from_rgba(0.0, 0.0, 0.0, SHADE_ALPHA);
        let c = &self.crop;

        if !c.has_area() {
            frame.fill_rectangle(Point::ORIGIN, bounds.size(), shade);
            return vec![frame.into_geometry()];
        }

        let (w, h) = (bounds.width, bounds.height);
        let right = c.x + c.width;
        let bottom = c.y + c.height;

        // Darken everything outside the selection: top, bottom, left, right bands.
        frame.fill_rectangle(Point::ORIGIN, Size::new(w, c.y.max(0.0)), shade);
        frame.fill_rectangle(
            Point::new(0.0, bottom),
            Size::new(w, (h - bottom).max(0.0)),
            shade,
        );
        frame.fill_rectangle(Point::new(0.0, c.y), Size::new(c.x.max(0.0), c.height), shade);
        frame.fill_rectangle(
            Point::new(right, c.y),
            Size::new((w - right).max(0.0), c.height),
            shade,
        );

        let outline = Path::rectangle(Point::new(c.x, c.y), Size::new(c.width, c.height));
        frame.stroke(
            &outline,
            Stroke::default().with_width(STROKE_W).with_color(Color::WHITE),
        );

        frame.fill_rectangle(
            Point::new(right - HANDLE_SIZE / 2.0, bottom - HANDLE_SIZE / 2.0),
            Size::new(HANDLE_SIZE, HANDLE_SIZE),
            Color::WHITE,
        );

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        drag: &Drag,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        match drag {
            Drag::Moving { .. } => return mouse::Interaction::Grabbing,
            Drag::Resizing => return mouse::Interaction::ResizingDiagonallyDown,
            Drag::Drawing { .. } => return mouse::Interaction::Crosshair,
            Drag::Idle => {}
        }

        match cursor.position_in(bounds).map(|p| hit_test(&self.crop, p)) {
            Some(Hit::Handle) => mouse::Interaction::ResizingDiagonallyDown,
            Some(Hit::Inside) => mouse::Interaction::Grab,
            Some(Hit::Outside) => mouse::Interaction::Crosshair,
            None => mouse::Interaction::default(),
        }
    }
}

/// Image stretched to its displayed size with the crop overlay on top.
pub(crate) fn crop_surface<'a>(
    handle: &image::Handle,
    displayed: (f32, f32),
    crop: CropRegion,
) -> Element<'a, Message> {
    let (w, h) = displayed;

    let picture = image(handle.clone())
        .content_fit(ContentFit::Fill)
        .width(Length::Fixed(w))
        .height(Length::Fixed(h));

    let overlay = canvas_widget(CropOverlay { crop })
        .width(Length::Fixed(w))
        .height(Length::Fixed(h));

    stack![picture, overlay].into()
}
