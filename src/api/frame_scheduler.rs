use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Host-side frame clock and repaint hook.
///
/// While a reveal runs the chart holds a [`ClockSubscription`]; the host is
/// expected to call [`PolygonChart::on_frame`](super::PolygonChart::on_frame)
/// once per display refresh until that subscription is cancelled.
pub trait FrameScheduler {
    /// Starts delivering frame ticks to the chart.
    fn subscribe_frames(&mut self) -> ClockSubscription;

    /// Asks the host to repaint the chart soon.
    fn request_redraw(&mut self);
}

/// Scoped handle on a frame-tick subscription.
///
/// The release action runs exactly once: on [`cancel`](Self::cancel) or when
/// the handle is dropped, whichever comes first.
pub struct ClockSubscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl ClockSubscription {
    #[must_use]
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A subscription with nothing to release.
    #[must_use]
    pub fn detached() -> Self {
        Self { release: None }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    pub fn cancel(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for ClockSubscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl fmt::Debug for ClockSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClockSubscription")
            .field("active", &self.is_active())
            .finish()
    }
}

#[derive(Debug, Default)]
struct ManualSchedulerState {
    active_subscriptions: Cell<usize>,
    subscriptions_started: Cell<usize>,
    redraw_requests: Cell<usize>,
}

/// Scheduler for headless hosts and tests: it only counts what the chart asks for.
///
/// Clones share their counters, so a test can keep one clone while the chart
/// owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualFrameScheduler {
    state: Rc<ManualSchedulerState>,
}

impl ManualFrameScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn active_subscriptions(&self) -> usize {
        self.state.active_subscriptions.get()
    }

    #[must_use]
    pub fn subscriptions_started(&self) -> usize {
        self.state.subscriptions_started.get()
    }

    #[must_use]
    pub fn redraw_requests(&self) -> usize {
        self.state.redraw_requests.get()
    }
}

impl FrameScheduler for ManualFrameScheduler {
    fn subscribe_frames(&mut self) -> ClockSubscription {
        let state = Rc::clone(&self.state);
        state.active_subscriptions.set(state.active_subscriptions.get() + 1);
        state
            .subscriptions_started
            .set(state.subscriptions_started.get() + 1);
        ClockSubscription::new(move || {
            state
                .active_subscriptions
                .set(state.active_subscriptions.get().saturating_sub(1));
        })
    }

    fn request_redraw(&mut self) {
        self.state
            .redraw_requests
            .set(self.state.redraw_requests.get() + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::{ClockSubscription, FrameScheduler, ManualFrameScheduler};

    #[test]
    fn dropping_subscription_releases_it_once() {
        let mut scheduler = ManualFrameScheduler::new();
        let mut subscription = scheduler.subscribe_frames();
        assert_eq!(scheduler.active_subscriptions(), 1);

        subscription.cancel();
        assert!(!subscription.is_active());
        drop(subscription);
        assert_eq!(scheduler.active_subscriptions(), 0);
        assert_eq!(scheduler.subscriptions_started(), 1);
    }

    #[test]
    fn detached_subscription_is_inert() {
        let subscription = ClockSubscription::detached();
        assert!(!subscription.is_active());
    }
}
