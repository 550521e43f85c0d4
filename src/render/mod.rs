mod frame;
mod null_renderer;
mod primitives;
mod text_metrics;

pub use frame::{CanvasLayerKind, LayerPrimitives, RenderFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, PaintStyle, PathCommand, PolygonPrimitive,
    TextPrimitive, trace_closed_path,
};
pub use text_metrics::{EstimatedTextMeasurer, TextMeasurer, estimate_text_extent};

use crate::core::TextExtent;
use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code stays isolated from layout and animation logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;

    /// Bounds of `text` as this backend would draw it.
    ///
    /// Defaults to [`EstimatedTextMeasurer`]; backends with real font
    /// shaping should override it so labels line up with their dots.
    fn measure_text(&self, text: &str, font_size_px: f64) -> TextExtent {
        EstimatedTextMeasurer.measure(text, font_size_px)
    }
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{
    CairoContextRenderer, CairoRenderStats, CairoRenderer, PangoTextMeasurer,
};
