use serde::Serialize;

use crate::core::{AnimationPhase, Entry, MIN_VERTEX_COUNT, PolygonLayout, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{FrameScheduler, PolygonChart};

/// Serializable state snapshot used by regression tests and debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSnapshot {
    pub viewport: Viewport,
    pub preview: bool,
    pub phase: AnimationPhase,
    pub progress: f64,
    pub base_radius: f64,
    pub entries: Vec<Entry>,
    /// Present only when the dataset can be drawn.
    pub layout: Option<PolygonLayout>,
}

impl ChartSnapshot {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}

impl<R: Renderer, S: FrameScheduler> PolygonChart<R, S> {
    pub fn snapshot(&self) -> ChartResult<ChartSnapshot> {
        let entries = self
            .dataset
            .as_ref()
            .map(|dataset| dataset.entries().to_vec())
            .unwrap_or_default();
        let layout = if entries.len() >= MIN_VERTEX_COUNT {
            self.layout()?
        } else {
            None
        };

        Ok(ChartSnapshot {
            viewport: self.viewport,
            preview: self.preview,
            phase: self.animation.phase(),
            progress: self.animation.progress(),
            base_radius: self.base_radius(),
            entries,
            layout,
        })
    }
}
