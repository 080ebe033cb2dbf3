use egui::Context as EguiContext;
use winit::window::Window;

use crate::core::data::pixel_buffer::PixelBuffer;

pub trait GuiPresenterPort: Sized {
    fn new(window: &'static Window) -> Result<Self, pixels::Error>;

    /// Draws `frame` starting `top` rows down, then the egui overlay on top.
    fn present(
        &mut self,
        frame: Option<&PixelBuffer>,
        top: u32,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error>;

    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError>;
}
