use tracing::{debug, trace};

use crate::core::AnimationStep;
use crate::error::ChartResult;
use crate::render::Renderer;

use super::{FrameScheduler, PolygonChart};

impl<R: Renderer, S: FrameScheduler> PolygonChart<R, S> {
    /// Feeds one frame tick of `delta_ms` elapsed milliseconds into the reveal.
    ///
    /// Every tick that moves the progress requests a redraw. When the reveal
    /// completes the frame subscription is released. Ticks arriving while the
    /// chart is idle are ignored.
    pub fn on_frame(&mut self, delta_ms: f64) -> ChartResult<AnimationStep> {
        let step = self.animation.advance(delta_ms)?;
        match step {
            AnimationStep::Inactive => {}
            AnimationStep::Progressed { progress } => {
                trace!(delta_ms, progress, "advance reveal animation");
            }
            AnimationStep::Completed => {
                debug!("reveal animation completed");
                self.release_frame_subscription();
            }
        }
        if step.needs_redraw() {
            self.scheduler.request_redraw();
        }
        Ok(step)
    }

    /// Stops any running reveal and releases the frame subscription.
    ///
    /// Hosts call this when the chart leaves the screen. Progress keeps its
    /// last value; assigning data again starts a new run.
    pub fn detach(&mut self) {
        let was_running = self.animation.cancel();
        self.release_frame_subscription();
        debug!(was_running, "detach polygon chart");
    }

    pub(super) fn release_frame_subscription(&mut self) {
        if let Some(mut subscription) = self.subscription.take() {
            subscription.cancel();
        }
    }
}
