use approx::assert_relative_eq;
use polygon_chart::core::PixelPoint;
use polygon_chart::render::{
    Color, EstimatedTextMeasurer, PaintStyle, PathCommand, PolygonPrimitive, TextMeasurer,
    TextPrimitive, estimate_text_extent, trace_closed_path,
};

#[test]
fn closed_path_returns_to_first_point() {
    let points = [
        PixelPoint::new(0.0, 0.0),
        PixelPoint::new(10.0, 0.0),
        PixelPoint::new(10.0, 10.0),
    ];
    assert_eq!(
        trace_closed_path(&points),
        vec![
            PathCommand::MoveTo(points[0]),
            PathCommand::LineTo(points[1]),
            PathCommand::LineTo(points[2]),
            PathCommand::LineTo(points[0]),
        ]
    );
}

#[test]
fn empty_path_has_no_commands() {
    assert!(trace_closed_path(&[]).is_empty());
}

#[test]
fn polygon_path_matches_its_points() {
    let polygon = PolygonPrimitive::new(
        vec![PixelPoint::new(1.0, 2.0), PixelPoint::new(3.0, 4.0)],
        PaintStyle::Fill(Color::BLACK),
    );
    assert_eq!(polygon.path().len(), 3);
    polygon.validate().expect("valid polygon");
}

#[test]
fn polygon_rejects_non_finite_points_and_zero_stroke() {
    let nan = PolygonPrimitive::new(
        vec![PixelPoint::new(f64::NAN, 0.0)],
        PaintStyle::Fill(Color::BLACK),
    );
    assert!(nan.validate().is_err());

    let hairline = PolygonPrimitive::new(
        vec![PixelPoint::new(0.0, 0.0)],
        PaintStyle::Stroke {
            color: Color::BLACK,
            width: 0.0,
        },
    );
    assert!(hairline.validate().is_err());
}

#[test]
fn empty_label_text_is_drawable() {
    let text = TextPrimitive::new("", PixelPoint::new(5.0, 5.0), 12.0, Color::BLACK);
    text.validate().expect("empty text is allowed");
    assert_eq!(estimate_text_extent("", 12.0).width, 0);
}

#[test]
fn argb_integers_unpack_into_channels() {
    let color = Color::from_argb_u32(0x80FF_0000);
    assert_eq!(color.red, 1.0);
    assert_eq!(color.green, 0.0);
    assert_eq!(color.blue, 0.0);
    assert_relative_eq!(color.alpha, 128.0 / 255.0);

    assert_eq!(Color::from_argb_u32(0xFF00_00FF), Color::BLUE);
}

#[test]
fn with_alpha8_keeps_rgb() {
    let color = Color::rgb(0.2, 0.4, 0.6).with_alpha8(255);
    assert_eq!(color, Color::rgb(0.2, 0.4, 0.6));
}

#[test]
fn estimated_measurer_reports_whole_pixels() {
    let extent = EstimatedTextMeasurer.measure("A", 30.0);
    assert_eq!(extent.width, 18);
    assert_eq!(extent.height, 30);

    let wide = EstimatedTextMeasurer.measure("일번", 30.0);
    assert_eq!(wide.width, 60);
}
