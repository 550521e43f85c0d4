use polygon_chart::core::{
    HorizontalNudge, LabelPlacement, PixelPoint, TextExtent, VerticalNudge, label_placement,
    quadrant_constants,
};

fn placements(count: usize) -> Vec<(VerticalNudge, HorizontalNudge)> {
    (0..count)
        .map(|index| {
            let placement = label_placement(index, count);
            (placement.vertical, placement.horizontal)
        })
        .collect()
}

#[test]
fn square_top_label_is_centered_without_vertical_shift() {
    assert_eq!(quadrant_constants(4), (3, 1));
    let placement = label_placement(0, 4);
    assert_eq!(placement.vertical, VerticalNudge::None);
    assert_eq!(placement.horizontal, HorizontalNudge::HalfWidth);

    let origin = placement.apply(PixelPoint::new(300.0, 50.0), TextExtent::new(40, 20));
    assert_eq!(origin, PixelPoint::new(280.0, 50.0));
}

#[test]
fn square_bottom_label_drops_by_full_text_height() {
    let placement = label_placement(2, 4);
    assert_eq!(placement.vertical, VerticalNudge::FullHeight);
    assert_eq!(placement.horizontal, HorizontalNudge::None);

    let origin = placement.apply(PixelPoint::new(300.0, 550.0), TextExtent::new(40, 20));
    assert_eq!(origin, PixelPoint::new(300.0, 570.0));
}

#[test]
fn pentagon_rule_table() {
    use HorizontalNudge as H;
    use VerticalNudge as V;

    assert_eq!(quadrant_constants(5), (3, 1));
    assert_eq!(
        placements(5),
        vec![
            (V::None, H::HalfWidth),
            (V::HalfHeight, H::None),
            (V::FullHeight, H::None),
            (V::FullHeight, H::HalfWidth),
            (V::HalfHeight, H::FullWidth),
        ]
    );
}

#[test]
fn hexagon_rule_table() {
    use HorizontalNudge as H;
    use VerticalNudge as V;

    assert_eq!(quadrant_constants(6), (4, 2));
    assert_eq!(
        placements(6),
        vec![
            (V::None, H::HalfWidth),
            (V::None, H::None),
            (V::HalfHeight, H::None),
            (V::FullHeight, H::None),
            (V::HalfHeight, H::HalfWidth),
            (V::None, H::FullWidth),
        ]
    );
}

#[test]
fn halves_use_whole_pixels() {
    let placement = LabelPlacement {
        vertical: VerticalNudge::HalfHeight,
        horizontal: HorizontalNudge::HalfWidth,
    };
    let origin = placement.apply(PixelPoint::new(100.0, 100.0), TextExtent::new(41, 21));
    assert_eq!(origin, PixelPoint::new(80.0, 110.0));
}

#[test]
fn right_side_labels_end_at_anchor() {
    let placement = LabelPlacement {
        vertical: VerticalNudge::None,
        horizontal: HorizontalNudge::FullWidth,
    };
    let origin = placement.apply(PixelPoint::new(100.0, 100.0), TextExtent::new(41, 21));
    assert_eq!(origin, PixelPoint::new(59.0, 100.0));
}
