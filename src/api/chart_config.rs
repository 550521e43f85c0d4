use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_ANIMATION_DURATION_MS, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Public chart bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format. Sizes are in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolygonChartConfig {
    pub viewport: Viewport,
    #[serde(default = "default_background_color")]
    pub background_color: Color,
    #[serde(default = "default_fill_color")]
    pub fill_color: Color,
    #[serde(default = "default_axis_color")]
    pub axis_color: Color,
    #[serde(default = "default_axis_stroke_width")]
    pub axis_stroke_width: f64,
    #[serde(default = "default_dot_radius")]
    pub dot_radius: f64,
    #[serde(default = "default_dot_padding")]
    pub dot_padding: f64,
    #[serde(default = "default_label_text_size")]
    pub label_text_size: f64,
    #[serde(default = "default_label_padding")]
    pub label_padding: f64,
    #[serde(default = "default_animation_duration_ms")]
    pub animation_duration_ms: f64,
    /// Margin kept free around the dots and labels when deriving the radius.
    #[serde(default = "default_outer_margin")]
    pub outer_margin: f64,
}

impl PolygonChartConfig {
    /// Creates a config with default styling for `viewport`.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            background_color: default_background_color(),
            fill_color: default_fill_color(),
            axis_color: default_axis_color(),
            axis_stroke_width: default_axis_stroke_width(),
            dot_radius: default_dot_radius(),
            dot_padding: default_dot_padding(),
            label_text_size: default_label_text_size(),
            label_padding: default_label_padding(),
            animation_duration_ms: default_animation_duration_ms(),
            outer_margin: default_outer_margin(),
        }
    }

    /// Sets the fill of the full-radius reference polygon.
    #[must_use]
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Sets the fill of the data polygon.
    #[must_use]
    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }

    /// Sets the color of the axis outline and spokes.
    #[must_use]
    pub fn with_axis_color(mut self, color: Color) -> Self {
        self.axis_color = color;
        self
    }

    #[must_use]
    pub fn with_axis_stroke_width(mut self, width: f64) -> Self {
        self.axis_stroke_width = width;
        self
    }

    #[must_use]
    pub fn with_dot_radius(mut self, radius: f64) -> Self {
        self.dot_radius = radius;
        self
    }

    #[must_use]
    pub fn with_dot_padding(mut self, padding: f64) -> Self {
        self.dot_padding = padding;
        self
    }

    #[must_use]
    pub fn with_label_text_size(mut self, size: f64) -> Self {
        self.label_text_size = size;
        self
    }

    #[must_use]
    pub fn with_label_padding(mut self, padding: f64) -> Self {
        self.label_padding = padding;
        self
    }

    /// Sets the reveal duration; `0` completes on the first frame tick.
    #[must_use]
    pub fn with_animation_duration_ms(mut self, duration_ms: f64) -> Self {
        self.animation_duration_ms = duration_ms;
        self
    }

    #[must_use]
    pub fn with_outer_margin(mut self, margin: f64) -> Self {
        self.outer_margin = margin;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.background_color.validate()?;
        self.fill_color.validate()?;
        self.axis_color.validate()?;

        if !self.axis_stroke_width.is_finite() || self.axis_stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "axis stroke width must be finite and > 0".to_owned(),
            ));
        }
        if !self.label_text_size.is_finite() || self.label_text_size <= 0.0 {
            return Err(ChartError::InvalidData(
                "label text size must be finite and > 0".to_owned(),
            ));
        }
        for (name, value) in [
            ("dot radius", self.dot_radius),
            ("dot padding", self.dot_padding),
            ("label padding", self.label_padding),
            ("outer margin", self.outer_margin),
            ("animation duration", self.animation_duration_ms),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON. Missing style fields take their defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_background_color() -> Color {
    Color::WHITE
}

fn default_fill_color() -> Color {
    Color::BLUE
}

fn default_axis_color() -> Color {
    Color::BLACK
}

fn default_axis_stroke_width() -> f64 {
    1.0
}

fn default_dot_radius() -> f64 {
    8.0
}

fn default_dot_padding() -> f64 {
    20.0
}

fn default_label_text_size() -> f64 {
    30.0
}

fn default_label_padding() -> f64 {
    20.0
}

fn default_animation_duration_ms() -> f64 {
    DEFAULT_ANIMATION_DURATION_MS
}

fn default_outer_margin() -> f64 {
    60.0
}
