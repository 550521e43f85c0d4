use std::f64::consts::TAU;
use std::fs::File;
use std::path::Path;

use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use pango::prelude::*;

use crate::core::TextExtent;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, LayerPrimitives, PaintStyle, PathCommand, RenderFrame, Renderer, TextMeasurer,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub polygons_drawn: usize,
    pub lines_drawn: usize,
    pub circles_drawn: usize,
    pub texts_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Pango-backed label measurement returning whole-pixel ink bounds.
#[derive(Debug)]
pub struct PangoTextMeasurer {
    context: pango::Context,
}

impl Default for PangoTextMeasurer {
    fn default() -> Self {
        Self {
            context: pangocairo::FontMap::default().create_context(),
        }
    }
}

impl TextMeasurer for PangoTextMeasurer {
    fn measure(&self, text: &str, font_size_px: f64) -> TextExtent {
        if text.is_empty() {
            return TextExtent::default();
        }
        let layout = pango::Layout::new(&self.context);
        layout.set_font_description(Some(&font_description(font_size_px)));
        layout.set_text(text);
        let (ink, _logical) = layout.pixel_extents();
        TextExtent::new(
            u32::try_from(ink.width()).unwrap_or(0),
            u32::try_from(ink.height()).unwrap_or(0),
        )
    }
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// Two modes are supported:
/// - offscreen image-surface rendering through `Renderer::render`
/// - in-place rendering on an external Cairo context through
///   `CairoContextRenderer`
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    measurer: PangoTextMeasurer,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        Ok(Self {
            surface: create_surface(width, height)?,
            clear_color: Color::rgba(0.0, 0.0, 0.0, 0.0),
            measurer: PangoTextMeasurer::default(),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    /// Replaces the offscreen surface with a blank one of the given size.
    ///
    /// [`Renderer::render`] calls this itself whenever a frame's viewport
    /// differs from the surface, so offscreen output always covers the
    /// whole chart after a host resize.
    pub fn resize(&mut self, width: i32, height: i32) -> ChartResult<()> {
        if self.surface.width() == width && self.surface.height() == height {
            return Ok(());
        }
        self.surface = create_surface(width, height)?;
        Ok(())
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    /// Color painted over the whole surface before each offscreen frame.
    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Writes the offscreen surface to a PNG file.
    pub fn write_png(&self, path: impl AsRef<Path>) -> ChartResult<()> {
        let path = path.as_ref();
        let mut file = File::create(path).map_err(|err| {
            ChartError::InvalidData(format!("failed to create `{}`: {err}", path.display()))
        })?;
        self.surface
            .write_to_png(&mut file)
            .map_err(|err| ChartError::InvalidData(format!("failed to write png: {err}")))
    }

    fn render_with_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
        clear: bool,
    ) -> ChartResult<()> {
        frame.validate()?;

        if clear {
            context.save().map_err(|err| map_backend_error("failed to save", err))?;
            context.set_operator(cairo::Operator::Source);
            apply_color(context, self.clear_color);
            context
                .paint()
                .map_err(|err| map_backend_error("failed to clear surface", err))?;
            context
                .restore()
                .map_err(|err| map_backend_error("failed to restore", err))?;
        }

        let mut stats = CairoRenderStats::default();
        context.set_antialias(cairo::Antialias::Best);
        for layer in &frame.layers {
            draw_layer(context, layer, &mut stats)?;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.resize(
            surface_extent(frame.viewport.width),
            surface_extent(frame.viewport.height),
        )?;
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame, true)
    }

    fn measure_text(&self, text: &str, font_size_px: f64) -> TextExtent {
        self.measurer.measure(text, font_size_px)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame, false)
    }
}

fn draw_layer(
    context: &Context,
    layer: &LayerPrimitives,
    stats: &mut CairoRenderStats,
) -> ChartResult<()> {
    for polygon in &layer.polygons {
        context.new_path();
        for command in polygon.path() {
            match command {
                PathCommand::MoveTo(point) => context.move_to(point.x, point.y),
                PathCommand::LineTo(point) => context.line_to(point.x, point.y),
            }
        }
        apply_color(context, polygon.paint.color());
        match polygon.paint {
            PaintStyle::Fill(_) => context
                .fill()
                .map_err(|err| map_backend_error("failed to fill polygon", err))?,
            PaintStyle::Stroke { width, .. } => {
                context.set_line_width(width);
                context
                    .stroke()
                    .map_err(|err| map_backend_error("failed to stroke polygon", err))?;
            }
        }
        stats.polygons_drawn += 1;
    }

    for line in &layer.lines {
        apply_color(context, line.color);
        context.set_line_width(line.stroke_width);
        context.move_to(line.from.x, line.from.y);
        context.line_to(line.to.x, line.to.y);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke line", err))?;
        stats.lines_drawn += 1;
    }

    for circle in &layer.circles {
        context.new_path();
        apply_color(context, circle.color);
        context.arc(circle.center.x, circle.center.y, circle.radius, 0.0, TAU);
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill circle", err))?;
        stats.circles_drawn += 1;
    }

    for text in &layer.texts {
        let layout = pangocairo::functions::create_layout(context);
        layout.set_font_description(Some(&font_description(text.font_size_px)));
        layout.set_text(&text.text);

        // Pango positions layouts by their top-left corner; primitives carry the baseline.
        let baseline = f64::from(layout.baseline()) / f64::from(pango::SCALE);
        apply_color(context, text.color);
        context.move_to(text.origin.x, text.origin.y - baseline);
        pangocairo::functions::show_layout(context, &layout);
        stats.texts_drawn += 1;
    }

    Ok(())
}

fn create_surface(width: i32, height: i32) -> ChartResult<ImageSurface> {
    if width <= 0 || height <= 0 {
        return Err(ChartError::InvalidData(
            "cairo surface size must be > 0".to_owned(),
        ));
    }
    ImageSurface::create(Format::ARgb32, width, height)
        .map_err(|err| map_backend_error("failed to create cairo surface", err))
}

fn surface_extent(pixels: u32) -> i32 {
    i32::try_from(pixels).unwrap_or(i32::MAX)
}

fn font_description(font_size_px: f64) -> FontDescription {
    let mut description = FontDescription::from_string("Sans");
    description.set_absolute_size(font_size_px * f64::from(pango::SCALE));
    description
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
