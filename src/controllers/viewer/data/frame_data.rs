use crate::core::data::page_layout::PageLayout;
use crate::core::data::pixel_buffer::PixelBuffer;

#[derive(Debug, Clone)]
pub struct FrameData {
    pub pixel_buffer: PixelBuffer,
    /// `None` while no document is open.
    pub layout: Option<PageLayout>,
    pub page: Option<usize>,
}
