use polygon_chart::ChartError;
use polygon_chart::api::PolygonChartConfig;
use polygon_chart::core::{DEFAULT_ANIMATION_DURATION_MS, Viewport};
use polygon_chart::render::Color;

#[test]
fn defaults_match_documented_styling() {
    let config = PolygonChartConfig::new(Viewport::new(600, 600));

    assert_eq!(config.background_color, Color::WHITE);
    assert_eq!(config.fill_color, Color::BLUE);
    assert_eq!(config.axis_color, Color::BLACK);
    assert_eq!(config.axis_stroke_width, 1.0);
    assert_eq!(config.dot_radius, 8.0);
    assert_eq!(config.dot_padding, 20.0);
    assert_eq!(config.label_text_size, 30.0);
    assert_eq!(config.label_padding, 20.0);
    assert_eq!(config.animation_duration_ms, DEFAULT_ANIMATION_DURATION_MS);
    assert_eq!(config.outer_margin, 60.0);
    config.validate().expect("defaults are valid");
}

#[test]
fn json_round_trip_preserves_every_field() {
    let config = PolygonChartConfig::new(Viewport::new(640, 480))
        .with_fill_color(Color::from_argb_u32(0x8000_80FF))
        .with_dot_radius(6.0)
        .with_label_text_size(18.0)
        .with_animation_duration_ms(250.0);

    let json = config.to_json_pretty().expect("serialize");
    let restored = PolygonChartConfig::from_json_str(&json).expect("parse");
    assert_eq!(restored, config);
}

#[test]
fn missing_style_fields_take_defaults() {
    let json = r#"{ "viewport": { "width": 300, "height": 200 }, "dot_radius": 4.0 }"#;
    let config = PolygonChartConfig::from_json_str(json).expect("parse");

    assert_eq!(config.viewport, Viewport::new(300, 200));
    assert_eq!(config.dot_radius, 4.0);
    assert_eq!(config.label_text_size, 30.0);
    assert_eq!(config.fill_color, Color::BLUE);
}

#[test]
fn malformed_json_is_invalid_data() {
    let err = PolygonChartConfig::from_json_str("{ not json").expect_err("must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn validation_rejects_bad_values() {
    let base = PolygonChartConfig::new(Viewport::new(600, 600));

    let err = PolygonChartConfig::new(Viewport::new(600, 0))
        .validate()
        .expect_err("empty viewport");
    assert!(matches!(
        err,
        ChartError::InvalidViewport {
            width: 600,
            height: 0
        }
    ));

    let invalid = [
        base.with_axis_stroke_width(0.0),
        base.with_label_text_size(f64::NAN),
        base.with_dot_radius(-1.0),
        base.with_dot_padding(f64::INFINITY),
        base.with_label_padding(-0.5),
        base.with_outer_margin(f64::NAN),
        base.with_animation_duration_ms(-10.0),
        base.with_axis_color(Color::rgba(0.0, 0.0, 0.0, 2.0)),
    ];
    for config in invalid {
        assert!(
            matches!(config.validate(), Err(ChartError::InvalidData(_))),
            "expected rejection for {config:?}"
        );
    }
}

#[test]
fn zero_sized_decorations_are_allowed() {
    let config = PolygonChartConfig::new(Viewport::new(600, 600))
        .with_dot_radius(0.0)
        .with_dot_padding(0.0)
        .with_label_padding(0.0)
        .with_outer_margin(0.0)
        .with_animation_duration_ms(0.0);
    config.validate().expect("zero is valid");
}
