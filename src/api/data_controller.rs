use tracing::{debug, warn};

use crate::core::{ChartDataset, MIN_VERTEX_COUNT, ValueAdapter};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::{FrameScheduler, PolygonChart};

impl<R: Renderer, S: FrameScheduler> PolygonChart<R, S> {
    /// Replaces the dataset with a snapshot of `adapter` and starts the reveal.
    pub fn set_data<A: ValueAdapter + ?Sized>(&mut self, adapter: &A) -> ChartResult<()> {
        self.set_data_with_animation(adapter, true)
    }

    /// Replaces the dataset with a snapshot of `adapter`.
    ///
    /// With `animate` the progress restarts from `0` and the chart subscribes
    /// to frame ticks; without it the progress jumps to `1` and a single
    /// redraw is requested. The previous dataset is discarded either way.
    /// Datasets with fewer than three entries are accepted here and rejected
    /// when drawn.
    pub fn set_data_with_animation<A: ValueAdapter + ?Sized>(
        &mut self,
        adapter: &A,
        animate: bool,
    ) -> ChartResult<()> {
        let dataset = ChartDataset::from_adapter(adapter)?;
        debug!(entry_count = dataset.len(), animate, "set chart data");
        if dataset.len() < MIN_VERTEX_COUNT {
            warn!(
                entry_count = dataset.len(),
                min = MIN_VERTEX_COUNT,
                "dataset too small to draw"
            );
        }

        self.release_frame_subscription();
        self.dataset = Some(dataset);
        self.preview = false;

        if animate {
            self.animation.start();
            self.subscription = Some(self.scheduler.subscribe_frames());
            debug!(
                duration_ms = self.animation.duration_ms(),
                "start reveal animation"
            );
        } else {
            self.animation.finish_immediately();
            self.scheduler.request_redraw();
        }
        Ok(())
    }
}
