#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use polygon_chart::ChartError;
use polygon_chart::api::{ManualFrameScheduler, PolygonChart, PolygonChartConfig};
use polygon_chart::core::{Entry, Viewport};
use polygon_chart::render::{CairoRenderer, Color, PangoTextMeasurer, Renderer, TextMeasurer};

fn entries() -> Vec<Entry> {
    ["일번", "이번", "삼번", "사번", "오번"]
        .iter()
        .zip([0.2, 0.4, 0.6, 0.8, 1.0])
        .map(|(label, magnitude)| Entry::new(*label, magnitude, Color::BLACK))
        .collect()
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_every_primitive() {
    let renderer = CairoRenderer::new(600, 600).expect("renderer");
    let config = PolygonChartConfig::new(Viewport::new(600, 600));
    let mut chart =
        PolygonChart::new(renderer, ManualFrameScheduler::new(), config).expect("chart init");
    chart
        .set_data_with_animation(&entries(), false)
        .expect("set data");

    chart.render().expect("render");
    let stats = chart.into_renderer().last_stats();

    assert_eq!(stats.polygons_drawn, 3);
    assert_eq!(stats.lines_drawn, 5);
    assert_eq!(stats.circles_drawn, 5);
    assert_eq!(stats.texts_drawn, 5);
}

#[test]
fn offscreen_surface_follows_chart_resize() {
    let renderer = CairoRenderer::new(600, 600).expect("renderer");
    let config = PolygonChartConfig::new(Viewport::new(600, 600));
    let mut chart =
        PolygonChart::new(renderer, ManualFrameScheduler::new(), config).expect("chart init");
    chart
        .set_data_with_animation(&entries(), false)
        .expect("set data");

    chart
        .set_viewport(Viewport::new(800, 400))
        .expect("resize");
    chart.render().expect("render");

    let surface = chart.renderer().surface();
    assert_eq!((surface.width(), surface.height()), (800, 400));
    assert_eq!(chart.renderer().last_stats().texts_drawn, 5);
}

#[test]
fn resize_rejects_empty_surface() {
    let mut renderer = CairoRenderer::new(10, 10).expect("renderer");
    let err = renderer.resize(0, 10).expect_err("empty width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
    assert_eq!(renderer.surface().width(), 10);
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let renderer = CairoRenderer::new(1, 1).expect("renderer");
    let config = PolygonChartConfig::new(Viewport::new(400, 400));
    let mut chart =
        PolygonChart::new(renderer, ManualFrameScheduler::new(), config).expect("chart init");
    chart.set_data(&entries()).expect("set data");
    let _ = chart.on_frame(500.0).expect("tick");

    let surface = ImageSurface::create(Format::ARgb32, 400, 400).expect("surface");
    let context = Context::new(&surface).expect("context");
    chart
        .render_on_cairo_context(&context)
        .expect("render on context");

    assert_eq!(chart.renderer().last_stats().texts_drawn, 5);
}

#[test]
fn pango_measurement_feeds_label_layout() {
    let renderer = CairoRenderer::new(1, 1).expect("renderer");
    let measured = renderer.measure_text("일번", 30.0);
    assert_eq!(measured, PangoTextMeasurer::default().measure("일번", 30.0));
    assert_eq!(renderer.measure_text("", 30.0).width, 0);
}
