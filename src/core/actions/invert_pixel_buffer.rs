use rayon::prelude::*;

use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};

/// Inverts every colour channel in place.
pub fn invert_pixel_buffer(buffer: &mut PixelBuffer) {
    let stride = (buffer.width() as usize * BYTES_PER_PIXEL).max(1);

    buffer
        .buffer_mut()
        .par_chunks_mut(stride)
        .for_each(|row| {
            for channel in row.iter_mut() {
                *channel = 255 - *channel;
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::pixel_rect::PixelRect;

    #[test]
    fn white_page_becomes_black() {
        let mut buffer = PixelBuffer::from_data(
            PixelRect::from_size(2, 1).unwrap(),
            vec![255, 255, 255, 255, 255, 255],
        )
        .unwrap();

        invert_pixel_buffer(&mut buffer);

        assert!(buffer.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn inverting_twice_restores_the_bitmap() {
        let data: Vec<u8> = (0..48).map(|i| (i * 5) as u8).collect();
        let original = PixelBuffer::from_data(PixelRect::from_size(4, 4).unwrap(), data).unwrap();
        let mut buffer = original.clone();

        invert_pixel_buffer(&mut buffer);
        assert_ne!(buffer, original);
        assert_eq!(buffer.buffer()[1], 250);

        invert_pixel_buffer(&mut buffer);
        assert_eq!(buffer, original);
    }
}
