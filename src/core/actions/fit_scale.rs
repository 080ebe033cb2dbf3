use thiserror::Error;

use crate::core::data::page_rect::PageRect;
use crate::core::data::rotation::Rotation;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FitScaleError {
    #[error("page has no area: {width}x{height} pt")]
    EmptyPage { width: f32, height: f32 },
    #[error("viewport has no area: {width}x{height} px")]
    EmptyViewport { width: u32, height: u32 },
}

/// Largest scale at which the whole page fits the viewport.
///
/// Page bounds are in points, so a scale of 1.0 renders at 72 DPI. Under a
/// quarter-turn rotation the page's width is laid along the viewport's height.
pub fn fit_scale(
    page_bounds: PageRect,
    viewport_width: u32,
    viewport_height: u32,
    rotation: Rotation,
) -> Result<f32, FitScaleError> {
    if page_bounds.is_empty() {
        return Err(FitScaleError::EmptyPage {
            width: page_bounds.width(),
            height: page_bounds.height(),
        });
    }

    if viewport_width == 0 || viewport_height == 0 {
        return Err(FitScaleError::EmptyViewport {
            width: viewport_width,
            height: viewport_height,
        });
    }

    let (page_width, page_height) = if rotation.swaps_axes() {
        (page_bounds.height(), page_bounds.width())
    } else {
        (page_bounds.width(), page_bounds.height())
    };

    let x_ratio = viewport_width as f32 / page_width;
    let y_ratio = viewport_height as f32 / page_height;

    Ok(x_ratio.min(y_ratio))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LETTER: PageRect = PageRect { x0: 0.0, y0: 0.0, x1: 612.0, y1: 792.0 };

    #[test]
    fn height_limited_portrait_page() {
        let scale = fit_scale(LETTER, 800, 396, Rotation::Upright).unwrap();

        assert_eq!(scale, 0.5);
    }

    #[test]
    fn width_limited_portrait_page() {
        let scale = fit_scale(LETTER, 306, 2000, Rotation::Upright).unwrap();

        assert_eq!(scale, 0.5);
    }

    #[test]
    fn quarter_turn_swaps_page_axes() {
        // rotated page is 792 wide, 612 tall
        let scale = fit_scale(LETTER, 396, 2000, Rotation::Clockwise90).unwrap();

        assert_eq!(scale, 0.5);
        assert_eq!(
            fit_scale(LETTER, 396, 2000, Rotation::Clockwise270),
            fit_scale(LETTER, 396, 2000, Rotation::Clockwise90)
        );
    }

    #[test]
    fn half_turn_keeps_page_axes() {
        assert_eq!(
            fit_scale(LETTER, 800, 396, Rotation::Clockwise180),
            fit_scale(LETTER, 800, 396, Rotation::Upright)
        );
    }

    #[test]
    fn rejects_empty_page_and_viewport() {
        let empty_page = PageRect::new(0.0, 0.0, 0.0, 100.0);

        assert_eq!(
            fit_scale(empty_page, 100, 100, Rotation::Upright),
            Err(FitScaleError::EmptyPage { width: 0.0, height: 100.0 })
        );
        assert_eq!(
            fit_scale(LETTER, 0, 100, Rotation::Upright),
            Err(FitScaleError::EmptyViewport { width: 0, height: 100 })
        );
    }
}
