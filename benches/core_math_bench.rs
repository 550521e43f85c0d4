use criterion::{Criterion, criterion_group, criterion_main};
use polygon_chart::api::{ManualFrameScheduler, PolygonChart, PolygonChartConfig};
use polygon_chart::core::{
    Entry, LayoutMetrics, PixelPoint, Viewport, compute_polygon_layout, point_on_circle,
};
use polygon_chart::render::{Color, NullRenderer, estimate_text_extent};
use std::hint::black_box;

fn generated_entries(count: usize) -> Vec<Entry> {
    (0..count)
        .map(|i| {
            let magnitude = (i * 7 % 11) as f64 / 10.0;
            Entry::new(format!("axis-{i}"), magnitude, Color::BLACK)
        })
        .collect()
}

fn bench_point_on_circle_ring_360(c: &mut Criterion) {
    let center = PixelPoint::new(960.0, 540.0);

    c.bench_function("point_on_circle_ring_360", |b| {
        b.iter(|| {
            for index in 0..360 {
                let _ = point_on_circle(
                    black_box(360),
                    black_box(index),
                    black_box(420.0),
                    black_box(center),
                );
            }
        })
    });
}

fn bench_layout_64_vertices(c: &mut Criterion) {
    let entries = generated_entries(64);
    let metrics = LayoutMetrics {
        base_radius: 400.0,
        dot_radius: 8.0,
        dot_padding: 20.0,
        label_padding: 20.0,
    };
    let center = PixelPoint::new(960.0, 540.0);

    c.bench_function("layout_64_vertices", |b| {
        b.iter(|| {
            let _ = compute_polygon_layout(
                black_box(&entries),
                black_box(0.75),
                metrics,
                center,
                |label| estimate_text_extent(label, 30.0),
            )
            .expect("layout should succeed");
        })
    });
}

fn bench_render_frame_12_vertices(c: &mut Criterion) {
    let config = PolygonChartConfig::new(Viewport::new(1200, 1200));
    let mut chart = PolygonChart::new(NullRenderer::default(), ManualFrameScheduler::new(), config)
        .expect("chart init");
    chart
        .set_data_with_animation(&generated_entries(12), false)
        .expect("set data");

    c.bench_function("render_frame_12_vertices", |b| {
        b.iter(|| {
            let _ = black_box(chart.build_render_frame().expect("frame should build"));
        })
    });
}

criterion_group!(
    benches,
    bench_point_on_circle_ring_360,
    bench_layout_64_vertices,
    bench_render_frame_12_vertices
);
criterion_main!(benches);
