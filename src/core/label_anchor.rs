//! Index-based label placement around the polygon.
//!
//! The text baseline is anchored at a point just outside each dot. Whether the
//! label hangs below, centers on, or sits above that point, and whether it
//! extends left or right of it, is picked from the vertex index alone:
//!
//! - `half = N / 2 + 1`, `quad = half / 2` (integer arithmetic)
//! - vertical: `quad < i < N - quad` drops by the text height, `i == quad` or
//!   `i == N - quad` drops by half of it, anything else stays put
//! - horizontal: `i % half == 0` centers, `i > half` right-aligns, anything
//!   else left-aligns
//!
//! This is a heuristic tuned for evenly spaced vertices near the cardinal
//! directions. It is kept as-is so output matches existing renderings
//! pixel for pixel, including its quirks for odd `N`.

use serde::{Deserialize, Serialize};

use crate::core::types::{PixelPoint, TextExtent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerticalNudge {
    /// Baseline at the anchor; text sits above the point.
    None,
    /// Drop by half the text height to center on the point.
    HalfHeight,
    /// Drop by the full text height so the text hangs below the point.
    FullHeight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HorizontalNudge {
    /// Text extends rightward from the anchor.
    None,
    /// Shift left by half the text width to center on the anchor.
    HalfWidth,
    /// Shift left by the full text width so the text ends at the anchor.
    FullWidth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelPlacement {
    pub vertical: VerticalNudge,
    pub horizontal: HorizontalNudge,
}

impl LabelPlacement {
    /// Moves `anchor` by the nudges, using whole-pixel halves of `extent`.
    #[must_use]
    pub fn apply(self, anchor: PixelPoint, extent: TextExtent) -> PixelPoint {
        let dy = match self.vertical {
            VerticalNudge::None => 0,
            VerticalNudge::HalfHeight => extent.height / 2,
            VerticalNudge::FullHeight => extent.height,
        };
        let dx = match self.horizontal {
            HorizontalNudge::None => 0,
            HorizontalNudge::HalfWidth => extent.width / 2,
            HorizontalNudge::FullWidth => extent.width,
        };
        PixelPoint::new(anchor.x - f64::from(dx), anchor.y + f64::from(dy))
    }
}

/// The `(half, quad)` pair driving the placement rule for `vertex_count` vertices.
#[must_use]
pub fn quadrant_constants(vertex_count: usize) -> (usize, usize) {
    let half = vertex_count / 2 + 1;
    (half, half / 2)
}

#[must_use]
pub fn label_placement(index: usize, vertex_count: usize) -> LabelPlacement {
    let (half, quad) = quadrant_constants(vertex_count);
    let mirrored_quad = vertex_count.saturating_sub(quad);

    let vertical = if quad < index && index < mirrored_quad {
        VerticalNudge::FullHeight
    } else if index == quad || index == mirrored_quad {
        VerticalNudge::HalfHeight
    } else {
        VerticalNudge::None
    };

    let horizontal = if index % half == 0 {
        HorizontalNudge::HalfWidth
    } else if index > half {
        HorizontalNudge::FullWidth
    } else {
        HorizontalNudge::None
    };

    LabelPlacement {
        vertical,
        horizontal,
    }
}
