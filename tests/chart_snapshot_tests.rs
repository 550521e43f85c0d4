use polygon_chart::api::{ManualFrameScheduler, PolygonChart, PolygonChartConfig};
use polygon_chart::core::{AnimationPhase, Entry, Viewport};
use polygon_chart::render::{Color, NullRenderer};

fn chart() -> PolygonChart<NullRenderer, ManualFrameScheduler> {
    let config = PolygonChartConfig::new(Viewport::new(600, 600));
    PolygonChart::new(NullRenderer::default(), ManualFrameScheduler::new(), config)
        .expect("chart init")
}

#[test]
fn empty_chart_snapshot_has_no_layout() {
    let snapshot = chart().snapshot().expect("snapshot");
    assert!(snapshot.entries.is_empty());
    assert!(snapshot.layout.is_none());
    assert_eq!(snapshot.phase, AnimationPhase::Idle);
    assert_eq!(snapshot.base_radius, 202.0);
}

#[test]
fn undersized_dataset_snapshots_without_layout() {
    let mut chart = chart();
    chart
        .set_data(&vec![Entry::new("a", 1.0, Color::BLACK)])
        .expect("set data");

    let snapshot = chart.snapshot().expect("snapshot");
    assert_eq!(snapshot.entries.len(), 1);
    assert!(snapshot.layout.is_none());
    assert_eq!(snapshot.phase, AnimationPhase::Running);
}

#[test]
fn snapshot_serializes_layout_to_json() {
    let mut chart = chart();
    let entries = vec![
        Entry::new("일번", 0.2, Color::BLACK),
        Entry::new("이번", 0.4, Color::BLACK),
        Entry::new("삼번", 0.6, Color::BLACK),
    ];
    chart
        .set_data_with_animation(&entries, false)
        .expect("set data");

    let snapshot = chart.snapshot().expect("snapshot");
    let layout = snapshot.layout.as_ref().expect("layout");
    assert_eq!(layout.vertices.len(), 3);
    assert_eq!(layout.progress, 1.0);

    let json = snapshot.to_json_pretty().expect("json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("parse back");
    assert_eq!(value["progress"], 1.0);
    assert_eq!(value["entries"][0]["label"], "일번");
    assert_eq!(value["layout"]["vertices"][0]["background"]["y"], 98.0);
}
