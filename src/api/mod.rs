mod animation_controller;
mod chart;
mod chart_config;
mod chart_snapshot;
mod data_controller;
mod frame_scheduler;
mod render_frame_builder;

pub use chart::PolygonChart;
pub use chart_config::PolygonChartConfig;
pub use chart_snapshot::ChartSnapshot;
pub use frame_scheduler::{ClockSubscription, FrameScheduler, ManualFrameScheduler};
pub use render_frame_builder::SPOKE_ALPHA;
