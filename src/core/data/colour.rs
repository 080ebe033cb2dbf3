#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Fill around the page when it does not cover the whole surface.
    pub const BACKGROUND: Colour = Colour { r: 48, g: 48, b: 48 };
    /// Fill used while no document is open.
    pub const PLACEHOLDER: Colour = Colour { r: 0, g: 0, b: 0 };
    pub const HIGHLIGHT: Colour = Colour { r: 0xff, g: 0, b: 0 };

    #[must_use]
    pub fn inverted(self) -> Self {
        Self {
            r: 255 - self.r,
            g: 255 - self.g,
            b: 255 - self.b,
        }
    }
}
