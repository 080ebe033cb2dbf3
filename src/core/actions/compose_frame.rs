use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

/// Fills a `surface` sized bitmap with `background` and blits `page` centred.
///
/// Returns the composed surface and the surface position of the page's
/// top-left corner. The offset is negative on an axis where the page is
/// larger than the surface; the overhang is clipped.
#[must_use]
pub fn compose_frame(surface: PixelRect, background: Colour, page: &PixelBuffer) -> (PixelBuffer, Point) {
    let mut frame = PixelBuffer::filled(surface, background);

    let offset = Point {
        x: surface.top_left().x + (surface.width() as i32 - page.width() as i32) / 2,
        y: surface.top_left().y + (surface.height() as i32 - page.height() as i32) / 2,
    };

    blit(page, &mut frame, offset);

    (frame, offset)
}

fn blit(source: &PixelBuffer, destination: &mut PixelBuffer, offset: Point) {
    let placed = match PixelRect::new(
        offset,
        Point {
            x: offset.x + source.width() as i32 - 1,
            y: offset.y + source.height() as i32 - 1,
        },
    ) {
        Ok(rect) => rect,
        Err(_) => return,
    };

    let Some(visible) = placed.intersect(&destination.pixel_rect()) else {
        return;
    };

    let origin = destination.pixel_rect().top_left();
    let dst_width = destination.width() as usize;
    let src_start = (visible.top_left().x - offset.x) as usize * BYTES_PER_PIXEL;
    let row_bytes = visible.width() as usize * BYTES_PER_PIXEL;
    let dst = destination.buffer_mut();

    for y in visible.top_left().y..=visible.bottom_right().y {
        let src_row = source.row((y - offset.y) as u32);
        let dst_start = ((y - origin.y) as usize * dst_width + (visible.top_left().x - origin.x) as usize)
            * BYTES_PER_PIXEL;

        dst[dst_start..dst_start + row_bytes].copy_from_slice(&src_row[src_start..src_start + row_bytes]);
    }
}
