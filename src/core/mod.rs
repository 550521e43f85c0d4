pub mod animation;
pub mod dataset;
pub mod entry;
pub mod geometry;
pub mod label_anchor;
pub mod layout;
pub mod types;

pub use animation::{
    AnimationPhase, AnimationStep, DEFAULT_ANIMATION_DURATION_MS, RevealAnimation, ease_in,
};
pub use dataset::{
    ChartDataset, FnAdapter, MIN_VERTEX_COUNT, PREVIEW_ENTRY_COUNT, PREVIEW_MAGNITUDE,
    ValueAdapter, adapter_from_fn,
};
pub use entry::{Entry, clamp_magnitude};
pub use geometry::{PointRing, angular_step, point_on_circle, regular_ring, vertex_angle};
pub use label_anchor::{
    HorizontalNudge, LabelPlacement, VerticalNudge, label_placement, quadrant_constants,
};
pub use layout::{
    LayoutMetrics, PolygonLayout, VertexLayout, base_radius_for_viewport, compute_polygon_layout,
};
pub use types::{PixelPoint, TextExtent, Viewport};
