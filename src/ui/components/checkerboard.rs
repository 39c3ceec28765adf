// SPDX-License-Identifier: MPL-2.0
//! Checkerboard pattern drawn behind images with transparent areas.

use crate::ui::design_tokens::palette;
use iced::widget::canvas;
use iced::{Color, Point, Size};

const TILE_SIZE: f32 = 20.0;
const LIGHT_TILE: Color = palette::GRAY_100;
const DARK_TILE: Color = palette::GRAY_200;

/// Fills `size`, starting at the frame origin, with alternating tiles.
pub fn fill(frame: &mut canvas::Frame, size: Size) {
    let cols = ((size.width / TILE_SIZE).ceil() as i32).max(1);
    let rows = ((size.height / TILE_SIZE).ceil() as i32).max(1);

    frame.fill_rectangle(Point::ORIGIN, size, LIGHT_TILE);
    for row in 0..rows {
        for col in 0..cols {
            if (row + col) % 2 == 0 {
                continue;
            }
            let origin = Point::new(col as f32 * TILE_SIZE, row as f32 * TILE_SIZE);
            // Slight overlap hides seams between tiles.
            frame.fill_rectangle(
                origin,
                Size::new(TILE_SIZE + 0.5, TILE_SIZE + 0.5),
                DARK_TILE,
            );
        }
    }
}

const _: () = {
    assert!(TILE_SIZE > 0.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_are_different() {
        assert_ne!(LIGHT_TILE, DARK_TILE);
    }
}
