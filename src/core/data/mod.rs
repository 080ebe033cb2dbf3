pub mod colour;
pub mod page_layout;
pub mod page_rect;
pub mod pixel_buffer;
pub mod pixel_rect;
pub mod point;
pub mod rotation;
pub mod text_line;
