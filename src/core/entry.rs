use serde::Serialize;

use crate::render::Color;

/// One chart category: a label, a normalized magnitude and a dot/label color.
///
/// Entries are immutable once built. The magnitude is clamped into `[0, 1]`
/// on construction; out-of-range input is not an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    label: String,
    magnitude: f64,
    color: Color,
}

impl Entry {
    #[must_use]
    pub fn new(label: impl Into<String>, magnitude: f64, color: Color) -> Self {
        Self {
            label: label.into(),
            magnitude: clamp_magnitude(magnitude),
            color,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }
}

/// Clamps a raw magnitude into `[0, 1]`. NaN maps to `0.0`.
#[must_use]
pub fn clamp_magnitude(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}
