pub mod compose_frame;
pub mod draw_rect_outline;
pub mod fit_scale;
pub mod invert_pixel_buffer;
pub mod rotate_pixel_buffer;
pub mod search_text;
