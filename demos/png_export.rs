use polygon_chart::api::{ManualFrameScheduler, PolygonChart, PolygonChartConfig};
use polygon_chart::core::{Entry, Viewport};
use polygon_chart::render::{CairoRenderer, Color};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = polygon_chart::telemetry::init_default_tracing();
    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "polygon_chart.png".to_owned());

    let viewport = Viewport::new(600, 600);
    let renderer = CairoRenderer::new(600, 600)?;
    let config = PolygonChartConfig::new(viewport);
    let mut chart = PolygonChart::new(renderer, ManualFrameScheduler::new(), config)?;

    let entries = vec![
        Entry::new("일번", 0.4, Color::BLACK),
        Entry::new("이번", 0.8, Color::BLACK),
        Entry::new("삼번", 0.2, Color::BLACK),
        Entry::new("사번", 0.8, Color::BLACK),
        Entry::new("오번", 0.9, Color::BLACK),
    ];
    chart.set_data_with_animation(&entries, false)?;
    chart.render()?;

    let stats = chart.renderer().last_stats();
    chart.renderer().write_png(&output)?;
    println!(
        "wrote {output}: {} polygons, {} lines, {} dots, {} labels",
        stats.polygons_drawn, stats.lines_drawn, stats.circles_drawn, stats.texts_drawn
    );
    Ok(())
}
