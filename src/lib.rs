//! polygon-chart: radial ("spider"/polygon) chart engine.
//!
//! N labeled values in `[0, 1]` are plotted as vertices equally spaced around
//! a circle and joined into a filled polygon that grows from the center.
//! The crate owns the geometry, the label placement rules and the reveal
//! animation state; drawing is delegated to a [`render::Renderer`] and frame
//! ticks come from a host-provided [`api::FrameScheduler`].

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{PolygonChart, PolygonChartConfig};
pub use error::{ChartError, ChartResult};
