use std::fmt;

/// Clockwise view rotation in quarter turns.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Hash)]
pub enum Rotation {
    #[default]
    Upright,
    Clockwise90,
    Clockwise180,
    Clockwise270,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct InvalidRotation(pub i32);

impl fmt::Display for InvalidRotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rotation must be a multiple of 90 degrees, got {}", self.0)
    }
}

impl std::error::Error for InvalidRotation {}

impl Rotation {
    pub const ALL: &'static [Rotation] = &[
        Rotation::Upright,
        Rotation::Clockwise90,
        Rotation::Clockwise180,
        Rotation::Clockwise270,
    ];

    /// Accepts any multiple of 90, negative values turn counter-clockwise.
    pub fn from_degrees(degrees: i32) -> Result<Self, InvalidRotation> {
        if degrees % 90 != 0 {
            return Err(InvalidRotation(degrees));
        }

        Ok(match degrees.rem_euclid(360) {
            0 => Rotation::Upright,
            90 => Rotation::Clockwise90,
            180 => Rotation::Clockwise180,
            _ => Rotation::Clockwise270,
        })
    }

    #[must_use]
    pub fn degrees(self) -> i32 {
        match self {
            Rotation::Upright => 0,
            Rotation::Clockwise90 => 90,
            Rotation::Clockwise180 => 180,
            Rotation::Clockwise270 => 270,
        }
    }

    #[must_use]
    pub fn rotate_clockwise(self) -> Self {
        match self {
            Rotation::Upright => Rotation::Clockwise90,
            Rotation::Clockwise90 => Rotation::Clockwise180,
            Rotation::Clockwise180 => Rotation::Clockwise270,
            Rotation::Clockwise270 => Rotation::Upright,
        }
    }

    #[must_use]
    pub fn rotate_counter_clockwise(self) -> Self {
        match self {
            Rotation::Upright => Rotation::Clockwise270,
            Rotation::Clockwise90 => Rotation::Upright,
            Rotation::Clockwise180 => Rotation::Clockwise90,
            Rotation::Clockwise270 => Rotation::Clockwise180,
        }
    }

    /// Whether width and height trade places under this rotation.
    #[must_use]
    pub fn swaps_axes(self) -> bool {
        matches!(self, Rotation::Clockwise90 | Rotation::Clockwise270)
    }

    /// Maps a point inside a `width` x `height` area to the rotated area.
    #[must_use]
    pub fn rotate_point(self, x: f32, y: f32, width: f32, height: f32) -> (f32, f32) {
        match self {
            Rotation::Upright => (x, y),
            Rotation::Clockwise90 => (height - y, x),
            Rotation::Clockwise180 => (width - x, height - y),
            Rotation::Clockwise270 => (y, width - x),
        }
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Rotation::Upright => "0°",
            Rotation::Clockwise90 => "90°",
            Rotation::Clockwise180 => "180°",
            Rotation::Clockwise270 => "270°",
        }
    }
}
