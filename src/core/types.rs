use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Center of the viewport in whole pixels (`width / 2`, `height / 2`).
    #[must_use]
    pub fn center(self) -> PixelPoint {
        PixelPoint::new(f64::from(self.width / 2), f64::from(self.height / 2))
    }

    /// Half of the shorter side, in whole pixels.
    #[must_use]
    pub fn half_min_extent(self) -> i64 {
        i64::from(self.width.min(self.height) / 2)
    }
}

/// A point in viewport pixel coordinates.
///
/// Points produced by the geometry engine always carry whole-pixel values;
/// the type stays `f64` so it can be handed straight to drawing backends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Measured bounds of a label in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextExtent {
    pub width: u32,
    pub height: u32,
}

impl TextExtent {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}
