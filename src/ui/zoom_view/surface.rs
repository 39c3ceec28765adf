// SPDX-License-Identifier: MPL-2.0
//! Canvas program that captures pinch input and draws the transformed image.

use super::component::Message;
use crate::config::BackgroundTheme;
use crate::gesture::{GestureSource, PinchSurfaceState};
use crate::media::ImageData;
use crate::ui::components::checkerboard;
use crate::ui::state::ViewTransformState;
use crate::ui::theming;
use iced::widget::canvas;
use iced::{mouse, Point, Rectangle, Renderer, Size, Theme};

/// Where the image lands inside a surface of `surface` size.
///
/// The image is fitted to cover the surface (centered, aspect preserved), then
/// scaled by `1 + scale` about the anchor, so the surface point under the
/// anchor stays put.
#[must_use]
pub fn image_destination(
    surface: Size,
    image: Size,
    transform: &ViewTransformState,
) -> Rectangle {
    let fit = if image.width > 0.0 && image.height > 0.0 {
        (surface.width / image.width).max(surface.height / image.height)
    } else {
        0.0
    };
    let fitted = Size::new(image.width * fit, image.height * fit);
    let origin = Point::new(
        (surface.width - fitted.width) / 2.0,
        (surface.height - fitted.height) / 2.0,
    );

    let scale = transform.effective_scale();
    let anchor = Point::new(
        transform.anchor_point.x() * surface.width,
        transform.anchor_point.y() * surface.height,
    );

    Rectangle {
        x: anchor.x + (origin.x - anchor.x) * scale,
        y: anchor.y + (origin.y - anchor.y) * scale,
        width: fitted.width * scale,
        height: fitted.height * scale,
    }
}

/// Borrowed view of everything the surface needs for one frame.
pub struct PinchSurface<'a> {
    pub image: Option<&'a ImageData>,
    pub transform: ViewTransformState,
    pub background: BackgroundTheme,
    pub drag_sensitivity: f32,
}

impl canvas::Program<Message> for PinchSurface<'_> {
    type State = PinchSurfaceState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<iced::widget::Action<Message>> {
        use iced::widget::Action;

        state.set_drag_sensitivity(self.drag_sensitivity);
        let pinch = state.translate(event, bounds, cursor)?;
        Some(Action::publish(Message::Pinch(pinch)).and_capture())
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        match theming::background_fill(self.background) {
            Some(color) => frame.fill_rectangle(Point::ORIGIN, bounds.size(), color),
            None => checkerboard::fill(&mut frame, bounds.size()),
        }

        if let Some(image) = self.image {
            let destination = image_destination(
                bounds.size(),
                Size::new(image.width as f32, image.height as f32),
                &self.transform,
            );
            frame.draw_image(destination, canvas::Image::new(image.handle.clone()));
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if state.is_pinching() {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}
