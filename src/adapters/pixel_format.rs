//! Pixel format conversion between packed RGB frames and the RGBA surface.

/// Copies RGB pixel data to RGBA format, setting alpha to 255.
///
/// # Panics
/// Panics if `src` is not a multiple of 3 or `dst` does not hold exactly as
/// many pixels as `src`.
pub fn copy_rgb_to_rgba(src: &[u8], dst: &mut [u8]) {
    assert!(
        src.len() % 3 == 0,
        "src length {} is not a multiple of 3",
        src.len()
    );
    let expected_dst_len = (src.len() / 3) * 4;
    assert_eq!(
        dst.len(),
        expected_dst_len,
        "dst length {} does not match expected {}",
        dst.len(),
        expected_dst_len
    );

    for (src_pixel, dst_pixel) in src.chunks_exact(3).zip(dst.chunks_exact_mut(4)) {
        dst_pixel[..3].copy_from_slice(src_pixel);
        dst_pixel[3] = 255;
    }
}

/// Fills every RGBA pixel of `dst` with an opaque colour.
pub fn fill_rgba(dst: &mut [u8], rgb: [u8; 3]) {
    for pixel in dst.chunks_exact_mut(4) {
        pixel[..3].copy_from_slice(&rgb);
        pixel[3] = 255;
    }
}

/// Copies an RGB image `width` pixels wide into an RGBA surface of the same
/// width, starting at row `top`.
///
/// Rows that would fall below the surface are dropped. Returns the number of
/// rows written.
pub fn blit_rgb_rows(src: &[u8], dst: &mut [u8], width: u32, top: u32) -> usize {
    let width = width as usize;
    if width == 0 {
        return 0;
    }

    let src_rows = src.chunks_exact(width * 3);
    let dst_rows = dst.chunks_exact_mut(width * 4).skip(top as usize);

    src_rows
        .zip(dst_rows)
        .map(|(src_row, dst_row)| copy_rgb_to_rgba(src_row, dst_row))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_rgb_to_rgba_known_values() {
        let src = vec![
            255, 0, 0, // red
            0, 255, 0, // green
            0, 0, 255, // blue
            255, 255, 255, // white
        ];
        let mut dst = vec![0; (src.len() / 3) * 4];

        copy_rgb_to_rgba(&src, &mut dst);

        assert_eq!(
            dst,
            vec![
                255, 0, 0, 255, 0, 255, 0, 255, 0, 0, 255, 255, 255, 255, 255, 255
            ]
        );
    }

    #[test]
    fn test_copy_rgb_to_rgba_empty_buffers() {
        let mut dst: Vec<u8> = vec![];

        copy_rgb_to_rgba(&[], &mut dst);

        assert!(dst.is_empty());
    }

    #[test]
    fn test_fill_rgba_is_opaque() {
        let mut dst = vec![0; 8];

        fill_rgba(&mut dst, [1, 2, 3]);

        assert_eq!(dst, vec![1, 2, 3, 255, 1, 2, 3, 255]);
    }

    #[test]
    fn test_blit_rgb_rows_starts_at_top_row() {
        // 1x2 image into a 1x3 surface, one row down
        let src = vec![10, 20, 30, 40, 50, 60];
        let mut dst = vec![0; 12];

        let rows = blit_rgb_rows(&src, &mut dst, 1, 1);

        assert_eq!(rows, 2);
        assert_eq!(dst, vec![0, 0, 0, 0, 10, 20, 30, 255, 40, 50, 60, 255]);
    }

    #[test]
    fn test_blit_rgb_rows_drops_rows_past_the_surface() {
        let src = vec![1; 2 * 3 * 3];
        let mut dst = vec![0; 2 * 2 * 4];

        let rows = blit_rgb_rows(&src, &mut dst, 2, 1);

        assert_eq!(rows, 1);
        assert!(dst[..8].iter().all(|&byte| byte == 0));
        assert_eq!(&dst[8..], &[1, 1, 1, 255, 1, 1, 1, 255]);
    }
}
