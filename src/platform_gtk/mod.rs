//! GTK4 embedding: a `DrawingArea` that paints a [`PolygonChart`] and drives
//! its reveal from the widget's frame clock.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use gtk4 as gtk;
use gtk::glib;
use gtk::prelude::*;
use tracing::{debug, warn};

use crate::api::{ClockSubscription, FrameScheduler, PolygonChart, PolygonChartConfig};
use crate::core::{ValueAdapter, Viewport};
use crate::error::ChartResult;
use crate::render::CairoRenderer;

pub type GtkPolygonChart = PolygonChart<CairoRenderer, GtkFrameScheduler>;

type ChartSlot = Rc<RefCell<Weak<RefCell<GtkPolygonChart>>>>;

/// Frame scheduler backed by a widget's tick callbacks.
///
/// Each subscription installs one tick callback that stops itself once the
/// subscription is cancelled, so a torn-down chart never receives ticks.
pub struct GtkFrameScheduler {
    area: glib::WeakRef<gtk::DrawingArea>,
    chart: ChartSlot,
}

impl FrameScheduler for GtkFrameScheduler {
    fn subscribe_frames(&mut self) -> ClockSubscription {
        let Some(area) = self.area.upgrade() else {
            return ClockSubscription::detached();
        };

        let active = Rc::new(Cell::new(true));
        let last_frame_time_us = Cell::new(None::<i64>);
        let chart = self.chart.borrow().clone();
        let tick_active = Rc::clone(&active);
        let _ = area.add_tick_callback(move |_area, clock| {
            if !tick_active.get() {
                return glib::ControlFlow::Break;
            }
            let Some(chart) = chart.upgrade() else {
                return glib::ControlFlow::Break;
            };

            let now = clock.frame_time();
            let delta_ms = last_frame_time_us
                .replace(Some(now))
                .map_or(0.0, |last| (now - last).max(0) as f64 / 1000.0);
            if let Err(err) = chart.borrow_mut().on_frame(delta_ms) {
                warn!(error = %err, "dropping reveal tick");
            }

            if tick_active.get() {
                glib::ControlFlow::Continue
            } else {
                glib::ControlFlow::Break
            }
        });

        ClockSubscription::new(move || active.set(false))
    }

    fn request_redraw(&mut self) {
        if let Some(area) = self.area.upgrade() {
            area.queue_draw();
        }
    }
}

/// A ready-to-pack GTK widget showing one polygon chart.
pub struct GtkPolygonChartView {
    area: gtk::DrawingArea,
    chart: Rc<RefCell<GtkPolygonChart>>,
}

impl GtkPolygonChartView {
    pub fn new(config: PolygonChartConfig) -> ChartResult<Self> {
        Self::build(config, false)
    }

    /// A view showing placeholder data, for UI design previews.
    pub fn preview(config: PolygonChartConfig) -> ChartResult<Self> {
        Self::build(config, true)
    }

    fn build(config: PolygonChartConfig, preview: bool) -> ChartResult<Self> {
        let area = gtk::DrawingArea::new();
        let width = i32::try_from(config.viewport.width).unwrap_or(i32::MAX);
        let height = i32::try_from(config.viewport.height).unwrap_or(i32::MAX);
        area.set_content_width(width);
        area.set_content_height(height);

        let slot: ChartSlot = Rc::new(RefCell::new(Weak::new()));
        let scheduler = GtkFrameScheduler {
            area: area.downgrade(),
            chart: Rc::clone(&slot),
        };
        let renderer = CairoRenderer::new(1, 1)?;
        let chart = if preview {
            PolygonChart::preview(renderer, scheduler, config)?
        } else {
            PolygonChart::new(renderer, scheduler, config)?
        };
        let chart = Rc::new(RefCell::new(chart));
        *slot.borrow_mut() = Rc::downgrade(&chart);

        let draw_chart = Rc::downgrade(&chart);
        area.set_draw_func(move |_area, context, _width, _height| {
            let Some(chart) = draw_chart.upgrade() else {
                return;
            };
            if let Err(err) = chart.borrow_mut().render_on_cairo_context(context) {
                warn!(error = %err, "polygon chart draw failed");
            }
        });

        let resize_chart = Rc::downgrade(&chart);
        area.connect_resize(move |_area, width, height| {
            let Some(chart) = resize_chart.upgrade() else {
                return;
            };
            let viewport = Viewport::new(
                u32::try_from(width).unwrap_or(0),
                u32::try_from(height).unwrap_or(0),
            );
            if let Err(err) = chart.borrow_mut().set_viewport(viewport) {
                debug!(error = %err, "ignoring degenerate resize");
            }
        });

        let unrealize_chart = Rc::downgrade(&chart);
        area.connect_unrealize(move |_area| {
            if let Some(chart) = unrealize_chart.upgrade() {
                chart.borrow_mut().detach();
            }
        });

        Ok(Self { area, chart })
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.area
    }

    pub fn set_data<A: ValueAdapter + ?Sized>(&self, adapter: &A) -> ChartResult<()> {
        self.chart.borrow_mut().set_data(adapter)
    }

    pub fn set_data_with_animation<A: ValueAdapter + ?Sized>(
        &self,
        adapter: &A,
        animate: bool,
    ) -> ChartResult<()> {
        self.chart
            .borrow_mut()
            .set_data_with_animation(adapter, animate)
    }

    /// Runs `f` with mutable access to the underlying chart.
    pub fn with_chart<T>(&self, f: impl FnOnce(&mut GtkPolygonChart) -> T) -> T {
        f(&mut self.chart.borrow_mut())
    }
}
