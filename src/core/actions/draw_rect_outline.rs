use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use crate::core::data::pixel_rect::PixelRect;

/// Draws the outline of `rect`, `thickness` pixels wide, growing inwards.
///
/// Parts of the rectangle outside the buffer are clipped.
pub fn draw_rect_outline(buffer: &mut PixelBuffer, rect: PixelRect, colour: Colour, thickness: u32) {
    let Some(clipped) = rect.intersect(&buffer.pixel_rect()) else {
        return;
    };

    let thickness = thickness.max(1) as i32;
    let left = rect.top_left().x;
    let top = rect.top_left().y;
    let right = rect.bottom_right().x;
    let bottom = rect.bottom_right().y;
    let width = buffer.width() as usize;
    let origin = buffer.pixel_rect().top_left();
    let data = buffer.buffer_mut();

    for y in clipped.top_left().y..=clipped.bottom_right().y {
        let on_horizontal_edge = y < top + thickness || y > bottom - thickness;

        for x in clipped.top_left().x..=clipped.bottom_right().x {
            let on_vertical_edge = x < left + thickness || x > right - thickness;

            if !(on_horizontal_edge || on_vertical_edge) {
                continue;
            }

            let index = ((y - origin.y) as usize * width + (x - origin.x) as usize) * BYTES_PER_PIXEL;
            data[index] = colour.r;
            data[index + 1] = colour.g;
            data[index + 2] = colour.b;
        }
    }
}
