use std::f64::consts::{FRAC_PI_2, TAU};

use smallvec::SmallVec;

use crate::core::types::PixelPoint;

/// Ordered vertex ring of one polygon. Most charts have a handful of axes,
/// so rings stay inline.
pub type PointRing = SmallVec<[PixelPoint; 8]>;

/// Angle between two neighbouring vertices, in radians.
#[must_use]
pub fn angular_step(vertex_count: usize) -> f64 {
    TAU / vertex_count as f64
}

/// Angle of vertex `index`, in radians.
///
/// Vertex 0 sits at the top (`-π/2`) and indices advance clockwise in screen
/// coordinates (y grows downwards).
#[must_use]
pub fn vertex_angle(vertex_count: usize, index: usize) -> f64 {
    angular_step(vertex_count) * index as f64 - FRAC_PI_2
}

/// Maps vertex `index` of a `vertex_count`-gon to a point at `radius` from `center`.
///
/// Coordinates are truncated toward zero to whole pixels. Zero and negative
/// radii are valid and yield the center or the point mirrored through it.
/// A `vertex_count` of zero has no angle and maps to the center.
#[must_use]
pub fn point_on_circle(
    vertex_count: usize,
    index: usize,
    radius: f64,
    center: PixelPoint,
) -> PixelPoint {
    if vertex_count == 0 {
        return PixelPoint::new(center.x.trunc(), center.y.trunc());
    }

    let angle = vertex_angle(vertex_count, index);
    PixelPoint::new(
        (center.x + angle.cos() * radius).trunc(),
        (center.y + angle.sin() * radius).trunc(),
    )
}

/// All `vertex_count` vertices at a uniform `radius`, in index order.
#[must_use]
pub fn regular_ring(vertex_count: usize, radius: f64, center: PixelPoint) -> PointRing {
    (0..vertex_count)
        .map(|index| point_on_circle(vertex_count, index, radius, center))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{angular_step, point_on_circle, regular_ring, vertex_angle};
    use crate::core::PixelPoint;

    #[test]
    fn stepping_past_last_vertex_wraps_to_first_angle() {
        for count in 1..=24 {
            let wrapped = vertex_angle(count, count - 1) + angular_step(count);
            let first = vertex_angle(count, 0) + std::f64::consts::TAU;
            assert!((wrapped - first).abs() < 1e-12, "count={count}");
        }
    }

    #[test]
    fn empty_polygon_collapses_to_center() {
        let center = PixelPoint::new(40.0, 30.0);
        assert_eq!(point_on_circle(0, 0, 100.0, center), center);
        assert!(regular_ring(0, 100.0, center).is_empty());
    }
}
