use crate::core::{Entry, PolygonLayout, Viewport};
use crate::render::{
    CanvasLayerKind, CirclePrimitive, LinePrimitive, PaintStyle, PolygonPrimitive, RenderFrame,
    TextPrimitive,
};

use super::PolygonChartConfig;

/// Alpha applied to the axis color for the center spokes.
pub const SPOKE_ALPHA: u8 = 128;

/// Turns one frame's layout into draw commands.
///
/// Paint order: background polygon, data polygon, the dot and label of each
/// vertex, then the axis outline and one spoke per vertex on top.
pub(super) fn build_render_frame(
    layout: &PolygonLayout,
    entries: &[Entry],
    config: &PolygonChartConfig,
    viewport: Viewport,
) -> RenderFrame {
    let mut frame = RenderFrame::new(viewport);
    let background_ring = layout.background_ring();

    frame.push_polygon(
        CanvasLayerKind::Background,
        PolygonPrimitive::new(
            background_ring.to_vec(),
            PaintStyle::Fill(config.background_color),
        ),
    );
    frame.push_polygon(
        CanvasLayerKind::Series,
        PolygonPrimitive::new(
            layout.data_ring().to_vec(),
            PaintStyle::Fill(config.fill_color),
        ),
    );

    for (vertex, entry) in layout.vertices.iter().zip(entries) {
        frame.push_circle(
            CanvasLayerKind::Markers,
            CirclePrimitive::new(vertex.dot, config.dot_radius, entry.color()),
        );
        frame.push_text(
            CanvasLayerKind::Markers,
            TextPrimitive::new(
                entry.label(),
                vertex.label_origin,
                config.label_text_size,
                entry.color(),
            ),
        );
    }

    frame.push_polygon(
        CanvasLayerKind::Axis,
        PolygonPrimitive::new(
            background_ring.to_vec(),
            PaintStyle::Stroke {
                color: config.axis_color,
                width: config.axis_stroke_width,
            },
        ),
    );
    let spoke_color = config.axis_color.with_alpha8(SPOKE_ALPHA);
    for vertex in &background_ring {
        frame.push_line(
            CanvasLayerKind::Axis,
            LinePrimitive::new(
                *vertex,
                layout.center,
                config.axis_stroke_width,
                spoke_color,
            ),
        );
    }

    frame
}
