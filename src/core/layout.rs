use serde::{Deserialize, Serialize};

use crate::core::dataset::ensure_vertex_count;
use crate::core::entry::Entry;
use crate::core::geometry::{PointRing, point_on_circle};
use crate::core::label_anchor::{LabelPlacement, label_placement};
use crate::core::types::{PixelPoint, TextExtent, Viewport};
use crate::error::{ChartError, ChartResult};

/// Radial distances used to place everything around the polygon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutMetrics {
    /// Radius of the 100% reference polygon.
    pub base_radius: f64,
    pub dot_radius: f64,
    pub dot_padding: f64,
    pub label_padding: f64,
}

impl LayoutMetrics {
    /// Distance from the center to each dot's center.
    #[must_use]
    pub fn dot_ring_radius(self) -> f64 {
        self.base_radius + self.dot_padding
    }

    /// Distance from the center to each label's unadjusted anchor.
    #[must_use]
    pub fn label_ring_radius(self) -> f64 {
        self.base_radius + self.dot_radius + self.dot_padding + self.label_padding
    }
}

/// Derives the reference radius from the viewport, leaving room for the
/// outer margin, the dots and the labels.
///
/// Computed in whole pixels. Tiny viewports can yield a negative radius,
/// which the geometry engine mirrors through the center.
#[must_use]
pub fn base_radius_for_viewport(
    viewport: Viewport,
    outer_margin: f64,
    dot_radius: f64,
    label_text_size: f64,
) -> f64 {
    let reserved = (outer_margin + dot_radius + label_text_size).trunc();
    viewport.half_min_extent() as f64 - reserved
}

/// Everything the renderer needs for one vertex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VertexLayout {
    pub index: usize,
    /// Vertex of the full-radius background/axis polygon.
    pub background: PixelPoint,
    /// Vertex of the data polygon, scaled by magnitude and progress.
    pub data: PixelPoint,
    /// Center of the category dot.
    pub dot: PixelPoint,
    /// Label anchor before the quadrant adjustment.
    pub label_anchor: PixelPoint,
    /// Text baseline origin after the quadrant adjustment.
    pub label_origin: PixelPoint,
    pub label_extent: TextExtent,
    pub placement: LabelPlacement,
}

/// Per-frame geometry of the whole chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonLayout {
    pub center: PixelPoint,
    pub metrics: LayoutMetrics,
    pub progress: f64,
    pub vertices: Vec<VertexLayout>,
}

impl PolygonLayout {
    #[must_use]
    pub fn background_ring(&self) -> PointRing {
        self.vertices.iter().map(|vertex| vertex.background).collect()
    }

    #[must_use]
    pub fn data_ring(&self) -> PointRing {
        self.vertices.iter().map(|vertex| vertex.data).collect()
    }

    #[must_use]
    pub fn dot_ring(&self) -> PointRing {
        self.vertices.iter().map(|vertex| vertex.dot).collect()
    }
}

/// Lays out every vertex of `entries` for one frame.
///
/// `measure_label` returns the whole-pixel bounds of a label as the renderer
/// will draw it. Fails when fewer than three entries are given or when
/// `progress` is not a finite number.
pub fn compute_polygon_layout<F>(
    entries: &[Entry],
    progress: f64,
    metrics: LayoutMetrics,
    center: PixelPoint,
    mut measure_label: F,
) -> ChartResult<PolygonLayout>
where
    F: FnMut(&str) -> TextExtent,
{
    ensure_vertex_count(entries.len())?;
    if !progress.is_finite() {
        return Err(ChartError::InvalidData(
            "animation progress must be finite".to_owned(),
        ));
    }
    let progress = progress.clamp(0.0, 1.0);

    let count = entries.len();
    let dot_ring_radius = metrics.dot_ring_radius();
    let label_ring_radius = metrics.label_ring_radius();

    let vertices = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let data_radius = entry.magnitude() * metrics.base_radius * progress;
            let label_anchor = point_on_circle(count, index, label_ring_radius, center);
            let label_extent = measure_label(entry.label());
            let placement = label_placement(index, count);

            VertexLayout {
                index,
                background: point_on_circle(count, index, metrics.base_radius, center),
                data: point_on_circle(count, index, data_radius, center),
                dot: point_on_circle(count, index, dot_ring_radius, center),
                label_anchor,
                label_origin: placement.apply(label_anchor, label_extent),
                label_extent,
                placement,
            }
        })
        .collect();

    Ok(PolygonLayout {
        center,
        metrics,
        progress,
        vertices,
    })
}
