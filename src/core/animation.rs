use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

pub const DEFAULT_ANIMATION_DURATION_MS: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimationPhase {
    /// Progress is pinned and no frame ticks are needed.
    Idle,
    /// Progress follows the frame clock.
    Running,
}

/// Outcome of feeding one frame tick to a [`RevealAnimation`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AnimationStep {
    /// The animation was idle; nothing changed.
    Inactive,
    /// Progress moved but the run is not over yet.
    Progressed { progress: f64 },
    /// The run reached `1.0` and went back to idle.
    Completed,
}

impl AnimationStep {
    /// Whether this tick changed what should be on screen.
    #[must_use]
    pub fn needs_redraw(self) -> bool {
        !matches!(self, Self::Inactive)
    }
}

/// Accelerating ease-in curve, `t²` over `t` clamped to `[0, 1]`.
#[must_use]
pub fn ease_in(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t
}

/// Progress of the grow-from-center reveal.
///
/// Progress stays in `[0, 1]`, never decreases within a run and is pinned at
/// exactly `1.0` once the configured duration has elapsed. Between runs it
/// keeps its last value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealAnimation {
    duration_ms: f64,
    elapsed_ms: f64,
    progress: f64,
    phase: AnimationPhase,
}

impl Default for RevealAnimation {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_ANIMATION_DURATION_MS,
            elapsed_ms: 0.0,
            progress: 0.0,
            phase: AnimationPhase::Idle,
        }
    }
}

impl RevealAnimation {
    pub fn new(duration_ms: f64) -> ChartResult<Self> {
        validate_duration(duration_ms)?;
        Ok(Self {
            duration_ms,
            ..Self::default()
        })
    }

    #[must_use]
    pub fn duration_ms(self) -> f64 {
        self.duration_ms
    }

    pub fn set_duration_ms(&mut self, duration_ms: f64) -> ChartResult<()> {
        validate_duration(duration_ms)?;
        self.duration_ms = duration_ms;
        Ok(())
    }

    #[must_use]
    pub fn progress(self) -> f64 {
        self.progress
    }

    #[must_use]
    pub fn elapsed_ms(self) -> f64 {
        self.elapsed_ms
    }

    #[must_use]
    pub fn phase(self) -> AnimationPhase {
        self.phase
    }

    #[must_use]
    pub fn is_running(self) -> bool {
        self.phase == AnimationPhase::Running
    }

    /// Resets progress to `0` and enters the running phase.
    pub fn start(&mut self) {
        self.elapsed_ms = 0.0;
        self.progress = 0.0;
        self.phase = AnimationPhase::Running;
    }

    /// Skips the reveal: progress jumps to `1.0` and the animation idles.
    pub fn finish_immediately(&mut self) {
        self.elapsed_ms = self.duration_ms;
        self.progress = 1.0;
        self.phase = AnimationPhase::Idle;
    }

    /// Stops a running reveal where it is. Returns whether a run was active.
    pub fn cancel(&mut self) -> bool {
        let was_running = self.is_running();
        self.phase = AnimationPhase::Idle;
        was_running
    }

    /// Feeds `delta_ms` of elapsed clock time into the running reveal.
    pub fn advance(&mut self, delta_ms: f64) -> ChartResult<AnimationStep> {
        if !delta_ms.is_finite() || delta_ms < 0.0 {
            return Err(ChartError::InvalidData(
                "frame delta must be finite and >= 0".to_owned(),
            ));
        }
        if !self.is_running() {
            return Ok(AnimationStep::Inactive);
        }

        self.elapsed_ms += delta_ms;
        let fraction = if self.duration_ms > 0.0 {
            (self.elapsed_ms / self.duration_ms).min(1.0)
        } else {
            1.0
        };

        if fraction >= 1.0 {
            self.progress = 1.0;
            self.phase = AnimationPhase::Idle;
            return Ok(AnimationStep::Completed);
        }

        self.progress = self.progress.max(ease_in(fraction));
        Ok(AnimationStep::Progressed {
            progress: self.progress,
        })
    }
}

fn validate_duration(duration_ms: f64) -> ChartResult<()> {
    if !duration_ms.is_finite() || duration_ms < 0.0 {
        return Err(ChartError::InvalidData(
            "animation duration must be finite and >= 0".to_owned(),
        ));
    }
    Ok(())
}
