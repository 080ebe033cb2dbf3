use rayon::prelude::*;

use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::rotation::Rotation;

/// Rotates a bitmap clockwise by the given quarter turns.
///
/// Destination rows are filled in parallel; each destination pixel pulls
/// from its source position, so no two workers write the same bytes.
#[must_use]
pub fn rotate_pixel_buffer(source: PixelBuffer, rotation: Rotation) -> PixelBuffer {
    if rotation == Rotation::Upright {
        return source;
    }

    let width = source.width() as usize;
    let height = source.height() as usize;

    let (dst_width, dst_height) = if rotation.swaps_axes() {
        (height, width)
    } else {
        (width, height)
    };

    // Both sides are positive, so the rotated rect is valid.
    let dst_rect = match PixelRect::from_size(dst_width as u32, dst_height as u32) {
        Ok(rect) => rect,
        Err(_) => return source,
    };

    let src = source.buffer();
    let mut rotated = PixelBuffer::new(dst_rect);
    let dst_stride = dst_width * BYTES_PER_PIXEL;

    rotated
        .buffer_mut()
        .par_chunks_exact_mut(dst_stride)
        .enumerate()
        .for_each(|(dy, row)| {
            for (dx, pixel) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
                let (sx, sy) = match rotation {
                    Rotation::Upright => (dx, dy),
                    Rotation::Clockwise90 => (dy, height - 1 - dx),
                    Rotation::Clockwise180 => (width - 1 - dx, height - 1 - dy),
                    Rotation::Clockwise270 => (width - 1 - dy, dx),
                };
                let index = (sy * width + sx) * BYTES_PER_PIXEL;
                pixel.copy_from_slice(&src[index..index + BYTES_PER_PIXEL]);
            }
        });

    rotated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::point::Point;

    /// 3x2 bitmap whose pixels carry their own source coordinates.
    fn labelled_buffer() -> PixelBuffer {
        let mut buffer = PixelBuffer::new(PixelRect::from_size(3, 2).unwrap());
        for y in 0..2 {
            for x in 0..3 {
                buffer
                    .set_pixel(Point { x, y }, Colour { r: x as u8, g: y as u8, b: 7 })
                    .unwrap();
            }
        }
        buffer
    }

    fn source_of(buffer: &PixelBuffer, x: i32, y: i32) -> (u8, u8) {
        let colour = buffer.get_pixel(Point { x, y }).unwrap();
        (colour.r, colour.g)
    }

    #[test]
    fn upright_is_identity() {
        let buffer = labelled_buffer();

        assert_eq!(rotate_pixel_buffer(buffer.clone(), Rotation::Upright), buffer);
    }

    #[test]
    fn quarter_turn_swaps_dimensions_and_moves_corners() {
        let rotated = rotate_pixel_buffer(labelled_buffer(), Rotation::Clockwise90);

        assert_eq!(rotated.width(), 2);
        assert_eq!(rotated.height(), 3);
        // bottom-left of the source becomes top-left
        assert_eq!(source_of(&rotated, 0, 0), (0, 1));
        // top-left of the source becomes top-right
        assert_eq!(source_of(&rotated, 1, 0), (0, 0));
        // top-right of the source becomes bottom-right
        assert_eq!(source_of(&rotated, 1, 2), (2, 0));
    }

    #[test]
    fn half_turn_mirrors_both_axes() {
        let rotated = rotate_pixel_buffer(labelled_buffer(), Rotation::Clockwise180);

        assert_eq!(rotated.width(), 3);
        assert_eq!(rotated.height(), 2);
        assert_eq!(source_of(&rotated, 0, 0), (2, 1));
        assert_eq!(source_of(&rotated, 2, 1), (0, 0));
    }

    #[test]
    fn three_quarter_turn_moves_top_right_to_top_left() {
        let rotated = rotate_pixel_buffer(labelled_buffer(), Rotation::Clockwise270);

        assert_eq!(rotated.width(), 2);
        assert_eq!(rotated.height(), 3);
        assert_eq!(source_of(&rotated, 0, 0), (2, 0));
        assert_eq!(source_of(&rotated, 1, 2), (0, 1));
    }

    #[test]
    fn four_quarter_turns_restore_the_bitmap() {
        let original = labelled_buffer();
        let mut buffer = original.clone();

        for _ in 0..4 {
            buffer = rotate_pixel_buffer(buffer, Rotation::Clockwise90);
        }

        assert_eq!(buffer, original);
    }
}
