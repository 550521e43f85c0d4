use tracing::{debug, trace};

use crate::core::{
    AnimationPhase, ChartDataset, LayoutMetrics, PolygonLayout, RevealAnimation, Viewport,
    base_radius_for_viewport, compute_polygon_layout,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{RenderFrame, Renderer};

use super::render_frame_builder::build_render_frame;
use super::{ClockSubscription, FrameScheduler, PolygonChartConfig};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Radial chart component consumed by host applications.
///
/// `PolygonChart` owns the dataset snapshot, the reveal animation and the
/// frame-clock subscription; it turns them into a [`RenderFrame`] for the
/// renderer on every draw.
pub struct PolygonChart<R: Renderer, S: FrameScheduler> {
    pub(super) renderer: R,
    pub(super) scheduler: S,
    pub(super) config: PolygonChartConfig,
    pub(super) viewport: Viewport,
    pub(super) dataset: Option<ChartDataset>,
    pub(super) animation: RevealAnimation,
    pub(super) subscription: Option<ClockSubscription>,
    pub(super) preview: bool,
}

impl<R: Renderer, S: FrameScheduler> PolygonChart<R, S> {
    /// Creates a chart with no dataset; rendering is a no-op until data is assigned.
    pub fn new(renderer: R, scheduler: S, config: PolygonChartConfig) -> ChartResult<Self> {
        config.validate()?;
        let animation = RevealAnimation::new(config.animation_duration_ms)?;
        debug!(
            width = config.viewport.width,
            height = config.viewport.height,
            "create polygon chart"
        );
        Ok(Self {
            renderer,
            scheduler,
            config,
            viewport: config.viewport,
            dataset: None,
            animation,
            subscription: None,
            preview: false,
        })
    }

    /// Creates a chart showing placeholder data at full progress, for design-time previews.
    pub fn preview(renderer: R, scheduler: S, config: PolygonChartConfig) -> ChartResult<Self> {
        let mut chart = Self::new(renderer, scheduler, config)?;
        chart.dataset = Some(ChartDataset::preview());
        chart.animation.finish_immediately();
        chart.preview = true;
        Ok(chart)
    }

    #[must_use]
    pub fn config(&self) -> PolygonChartConfig {
        self.config
    }

    /// Replaces styling and animation settings.
    ///
    /// A reveal that is already running keeps its elapsed time and continues
    /// under the new duration.
    pub fn set_config(&mut self, config: PolygonChartConfig) -> ChartResult<()> {
        config.validate()?;
        self.animation.set_duration_ms(config.animation_duration_ms)?;
        self.config = config;
        self.viewport = config.viewport;
        self.scheduler.request_redraw();
        Ok(())
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Updates the drawing area after a host resize.
    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        if viewport != self.viewport {
            trace!(
                width = viewport.width,
                height = viewport.height,
                "resize polygon chart"
            );
            self.viewport = viewport;
            self.config.viewport = viewport;
            self.scheduler.request_redraw();
        }
        Ok(())
    }

    #[must_use]
    pub fn dataset(&self) -> Option<&ChartDataset> {
        self.dataset.as_ref()
    }

    #[must_use]
    pub fn is_preview(&self) -> bool {
        self.preview
    }

    #[must_use]
    pub fn animation_progress(&self) -> f64 {
        self.animation.progress()
    }

    #[must_use]
    pub fn animation_phase(&self) -> AnimationPhase {
        self.animation.phase()
    }

    /// Whether the chart currently holds a frame-clock subscription.
    #[must_use]
    pub fn is_subscribed_to_frames(&self) -> bool {
        self.subscription
            .as_ref()
            .is_some_and(ClockSubscription::is_active)
    }

    /// Radius of the 100% reference polygon for the current viewport.
    #[must_use]
    pub fn base_radius(&self) -> f64 {
        base_radius_for_viewport(
            self.viewport,
            self.config.outer_margin,
            self.config.dot_radius,
            self.config.label_text_size,
        )
    }

    #[must_use]
    pub fn layout_metrics(&self) -> LayoutMetrics {
        LayoutMetrics {
            base_radius: self.base_radius(),
            dot_radius: self.config.dot_radius,
            dot_padding: self.config.dot_padding,
            label_padding: self.config.label_padding,
        }
    }

    /// Geometry of the current frame, or `None` when no dataset is assigned.
    ///
    /// Fails with [`ChartError::InsufficientEntries`] when the dataset has
    /// fewer than three entries.
    pub fn layout(&self) -> ChartResult<Option<PolygonLayout>> {
        let Some(dataset) = self.dataset.as_ref() else {
            return Ok(None);
        };
        dataset.ensure_drawable()?;

        let font_size = self.config.label_text_size;
        let layout = compute_polygon_layout(
            dataset.entries(),
            self.animation.progress(),
            self.layout_metrics(),
            self.viewport.center(),
            |label| self.renderer.measure_text(label, font_size),
        )?;
        Ok(Some(layout))
    }

    /// Builds the draw list for the current frame, or `None` when no dataset is assigned.
    pub fn build_render_frame(&self) -> ChartResult<Option<RenderFrame>> {
        let (Some(layout), Some(dataset)) = (self.layout()?, self.dataset.as_ref()) else {
            return Ok(None);
        };
        Ok(Some(build_render_frame(
            &layout,
            dataset.entries(),
            &self.config,
            self.viewport,
        )))
    }

    /// Draws the current frame.
    ///
    /// Without a dataset this does nothing. With fewer than three entries it
    /// fails before anything reaches the renderer.
    pub fn render(&mut self) -> ChartResult<()> {
        let Some(frame) = self.build_render_frame()? else {
            trace!("skip render without dataset");
            return Ok(());
        };
        trace!(
            progress = self.animation.progress(),
            polygons = frame.polygon_count(),
            texts = frame.text_count(),
            "render polygon chart"
        );
        self.renderer.render(&frame)
    }

    /// Draws the current frame into an external cairo context.
    ///
    /// This path is used by GTK draw callbacks while keeping the renderer
    /// implementation decoupled from GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let Some(frame) = self.build_render_frame()? else {
            return Ok(());
        };
        self.renderer.render_on_cairo_context(context, &frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Tears the chart down and hands back its renderer.
    #[must_use]
    pub fn into_renderer(mut self) -> R {
        self.detach();
        let Self { renderer, .. } = self;
        renderer
    }
}
