use crate::core::data::page_rect::PageRect;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::rotation::Rotation;

/// Where a rendered page landed on the display surface.
///
/// `rendered_width`/`rendered_height` are the bitmap size before rotation.
/// `offset` is the surface position of the rotated bitmap's top-left corner
/// and goes negative when the page is larger than the surface.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PageLayout {
    pub page_bounds: PageRect,
    pub scale: f32,
    pub rotation: Rotation,
    pub rendered_width: u32,
    pub rendered_height: u32,
    pub offset: Point,
    pub surface: PixelRect,
}

impl PageLayout {
    /// Transforms a page-space rectangle into surface pixels.
    ///
    /// Returns `None` when the rectangle is empty or falls entirely outside
    /// the surface.
    #[must_use]
    pub fn map_rect(&self, rect: PageRect) -> Option<PixelRect> {
        if rect.is_empty() {
            return None;
        }

        let width = self.rendered_width as f32;
        let height = self.rendered_height as f32;

        let corners = [(rect.x0, rect.y0), (rect.x1, rect.y1)].map(|(x, y)| {
            let scaled_x = (x - self.page_bounds.x0) * self.scale;
            let scaled_y = (y - self.page_bounds.y0) * self.scale;
            self.rotation.rotate_point(scaled_x, scaled_y, width, height)
        });

        // `as` saturates, so off-page text can sit at the i32 limits
        let min_x = (corners[0].0.min(corners[1].0).floor() as i32).saturating_add(self.offset.x);
        let min_y = (corners[0].1.min(corners[1].1).floor() as i32).saturating_add(self.offset.y);
        let max_x = (corners[0].0.max(corners[1].0).ceil() as i32)
            .saturating_add(self.offset.x)
            .saturating_sub(1);
        let max_y = (corners[0].1.max(corners[1].1).ceil() as i32)
            .saturating_add(self.offset.y)
            .saturating_sub(1);

        let mapped = PixelRect::new(Point { x: min_x, y: min_y }, Point { x: max_x, y: max_y }).ok()?;

        mapped.intersect(&self.surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(rotation: Rotation, offset: Point) -> PageLayout {
        // 100x200 pt page at scale 2, rendered to 200x400 before rotation
        PageLayout {
            page_bounds: PageRect::new(0.0, 0.0, 100.0, 200.0),
            scale: 2.0,
            rotation,
            rendered_width: 200,
            rendered_height: 400,
            offset,
            surface: PixelRect::from_size(1000, 1000).unwrap(),
        }
    }

    #[test]
    fn upright_scales_and_offsets() {
        let layout = layout(Rotation::Upright, Point { x: 10, y: 20 });

        let mapped = layout.map_rect(PageRect::new(5.0, 5.0, 15.0, 10.0)).unwrap();

        assert_eq!(mapped.top_left(), Point { x: 20, y: 30 });
        assert_eq!(mapped.bottom_right(), Point { x: 39, y: 39 });
    }

    #[test]
    fn quarter_turn_moves_top_left_to_top_right() {
        let layout = layout(Rotation::Clockwise90, Point { x: 0, y: 0 });

        // top-left 10x10 pt square of the page
        let mapped = layout.map_rect(PageRect::new(0.0, 0.0, 10.0, 10.0)).unwrap();

        // rotated bitmap is 400 wide, the square ends up at its top-right
        assert_eq!(mapped.top_left(), Point { x: 380, y: 0 });
        assert_eq!(mapped.bottom_right(), Point { x: 399, y: 19 });
    }

    #[test]
    fn half_turn_moves_top_left_to_bottom_right() {
        let layout = layout(Rotation::Clockwise180, Point { x: 0, y: 0 });

        let mapped = layout.map_rect(PageRect::new(0.0, 0.0, 10.0, 10.0)).unwrap();

        assert_eq!(mapped.top_left(), Point { x: 180, y: 380 });
        assert_eq!(mapped.bottom_right(), Point { x: 199, y: 399 });
    }

    #[test]
    fn page_origin_is_subtracted() {
        let mut layout = layout(Rotation::Upright, Point { x: 0, y: 0 });
        layout.page_bounds = PageRect::new(50.0, 50.0, 150.0, 250.0);

        let mapped = layout.map_rect(PageRect::new(50.0, 50.0, 60.0, 60.0)).unwrap();

        assert_eq!(mapped.top_left(), Point { x: 0, y: 0 });
    }

    #[test]
    fn rect_is_clipped_to_surface() {
        let layout = layout(Rotation::Upright, Point { x: -10, y: -10 });

        let mapped = layout.map_rect(PageRect::new(0.0, 0.0, 10.0, 10.0)).unwrap();

        assert_eq!(mapped.top_left(), Point { x: 0, y: 0 });
        assert_eq!(mapped.bottom_right(), Point { x: 9, y: 9 });
    }

    #[test]
    fn rect_outside_surface_is_dropped() {
        let layout = layout(Rotation::Upright, Point { x: -500, y: 0 });

        assert_eq!(layout.map_rect(PageRect::new(0.0, 0.0, 10.0, 10.0)), None);
        assert_eq!(layout.map_rect(PageRect::new(5.0, 5.0, 5.0, 10.0)), None);
    }

    #[test]
    fn extreme_coordinates_are_clipped_without_overflow() {
        let shifted = layout(Rotation::Upright, Point { x: 10, y: 20 });

        let mapped = shifted
            .map_rect(PageRect::new(-1.0e30, -1.0e30, 1.0e30, 1.0e30))
            .unwrap();

        assert_eq!(mapped.top_left(), Point { x: 0, y: 0 });
        assert_eq!(mapped.bottom_right(), Point { x: 999, y: 999 });

        let pulled_back = layout(Rotation::Upright, Point { x: -10, y: -20 });
        assert_eq!(pulled_back.map_rect(PageRect::new(-1.0e30, -1.0e30, -1.0e29, -1.0e29)), None);
    }
}
