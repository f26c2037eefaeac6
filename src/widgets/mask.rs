// SPDX-License-Identifier: MPL-2.0

//! Modal overlay transition state machine.
//!
//! The mask cycles `Hidden → Entering → Visible → Leaving → Hidden`. Entry
//! is visually animated but logically immediate: content is renderable as
//! soon as [`MaskState::show`] returns. Leaving is the only timed phase;
//! the host schedules [`MaskState::finish_hide`] after the leave duration,
//! and the close callback fires strictly after that transition completes.

use std::time::Duration;

use tokio::task::JoinHandle;

/// Default leave duration, matching a 250ms slide animation.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(250);

/// Visible/hidden lifecycle phase of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaskPhase {
    #[default]
    Hidden,
    /// Content is visible and the entry animation is playing.
    Entering,
    Visible,
    /// Content is visible and the leave animation is playing; a hide
    /// completion is pending.
    Leaving,
}

/// State for a modal overlay with animated enter/leave transitions.
#[derive(Debug, Clone)]
pub struct MaskState {
    phase: MaskPhase,
    duration: Duration,
    closable: bool,
}

impl Default for MaskState {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION)
    }
}

impl MaskState {
    pub fn new(duration: Duration) -> Self {
        Self {
            phase: MaskPhase::Hidden,
            duration,
            closable: true,
        }
    }

    /// Whether a tap on the backdrop closes the overlay.
    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }

    pub fn phase(&self) -> MaskPhase {
        self.phase
    }

    /// The leave duration the host should wait before calling
    /// [`finish_hide`](Self::finish_hide).
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// True whenever content should be rendered, including while leaving.
    pub fn is_open(&self) -> bool {
        self.phase != MaskPhase::Hidden
    }

    /// Opens the overlay. Idempotent while entering or visible; ignored
    /// while leaving (the pending close completes first).
    ///
    /// Returns true if the overlay just opened.
    pub fn show(&mut self) -> bool {
        if self.phase == MaskPhase::Hidden {
            self.phase = MaskPhase::Entering;
            return true;
        }
        false
    }

    /// Marks the entry animation as finished. Optional; entering already
    /// counts as visible for every other transition.
    pub fn settle(&mut self) {
        if self.phase == MaskPhase::Entering {
            self.phase = MaskPhase::Visible;
        }
    }

    /// Begins the leave transition.
    ///
    /// Returns true exactly when the transition starts, in which case the
    /// host must schedule [`finish_hide`](Self::finish_hide) after
    /// [`duration`](Self::duration). A second request while already
    /// leaving returns false, so no duplicate timer is armed.
    pub fn request_hide(&mut self) -> bool {
        match self.phase {
            MaskPhase::Entering | MaskPhase::Visible => {
                self.phase = MaskPhase::Leaving;
                true
            }
            MaskPhase::Hidden | MaskPhase::Leaving => false,
        }
    }

    /// Completes a pending leave transition.
    ///
    /// Returns true exactly when the overlay just became hidden; the close
    /// callback must fire then and only then.
    pub fn finish_hide(&mut self) -> bool {
        if self.phase == MaskPhase::Leaving {
            self.phase = MaskPhase::Hidden;
            return true;
        }
        false
    }

    /// A tap on the backdrop. Behaves like [`request_hide`](Self::request_hide)
    /// when the mask is closable; taps inside the content never reach this.
    pub fn tap_outside(&mut self) -> bool {
        if !self.closable {
            return false;
        }
        self.request_hide()
    }
}

/// A single scheduled hide completion, owned by the host.
///
/// Wraps the deferred callback in an abortable task; cancelled explicitly
/// or on drop, so an unmounted host never runs a stale callback.
#[derive(Debug, Default)]
pub struct HideTimer {
    handle: Option<JoinHandle<()>>,
}

impl HideTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `after` to run once `delay` elapses, replacing any
    /// previously scheduled run.
    pub fn schedule<F>(&mut self, delay: Duration, after: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        self.handle = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            after();
        }));
    }

    /// Aborts the pending run, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    pub fn is_armed(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for HideTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn show_then_hide_cycles_through_phases() {
        let mut mask = MaskState::default();
        assert_eq!(mask.phase(), MaskPhase::Hidden);

        assert!(mask.show());
        assert_eq!(mask.phase(), MaskPhase::Entering);
        assert!(mask.is_open());

        mask.settle();
        assert_eq!(mask.phase(), MaskPhase::Visible);

        assert!(mask.request_hide());
        assert_eq!(mask.phase(), MaskPhase::Leaving);
        assert!(mask.is_open());

        assert!(mask.finish_hide());
        assert_eq!(mask.phase(), MaskPhase::Hidden);
    }

    #[test]
    fn show_is_idempotent_while_open() {
        let mut mask = MaskState::default();
        assert!(mask.show());
        assert!(!mask.show());
        mask.settle();
        assert!(!mask.show());
    }

    #[test]
    fn second_hide_request_does_not_arm_a_second_timer() {
        let mut mask = MaskState::default();
        mask.show();

        assert!(mask.request_hide());
        assert!(!mask.request_hide());

        assert!(mask.finish_hide());
        // Already hidden: no second callback.
        assert!(!mask.finish_hide());
    }

    #[test]
    fn hide_can_start_before_entry_settles() {
        let mut mask = MaskState::default();
        mask.show();
        assert!(mask.request_hide());
        assert_eq!(mask.phase(), MaskPhase::Leaving);
    }

    #[test]
    fn tap_outside_respects_closable_flag() {
        let mut mask = MaskState::default().closable(false);
        mask.show();
        assert!(!mask.tap_outside());
        assert_eq!(mask.phase(), MaskPhase::Entering);

        let mut mask = MaskState::default();
        mask.show();
        assert!(mask.tap_outside());
        assert_eq!(mask.phase(), MaskPhase::Leaving);
    }

    #[test]
    fn show_while_leaving_is_ignored() {
        let mut mask = MaskState::default();
        mask.show();
        mask.request_hide();
        assert!(!mask.show());
        assert_eq!(mask.phase(), MaskPhase::Leaving);
    }

    #[tokio::test]
    async fn timer_fires_the_callback_once_after_the_delay() {
        let fired = Arc::new(AtomicUsize::new(0));
        let mut timer = HideTimer::new();

        let counter = Arc::clone(&fired);
        timer.schedule(Duration::from_millis(20), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert!(timer.is_armed());

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn double_hide_request_fires_the_close_callback_once() {
        let mask = Arc::new(std::sync::Mutex::new(MaskState::default()));
        let closed = Arc::new(AtomicUsize::new(0));
        let mut timer = HideTimer::new();

        mask.lock().unwrap().show();

        // Two hide requests in quick succession; only the first arms the
        // timer, and the callback fires only if finish_hide reports the
        // transition actually completed.
        for _ in 0..2 {
            let started = mask.lock().unwrap().request_hide();
            if started {
                let mask = Arc::clone(&mask);
                let closed = Arc::clone(&closed);
                timer.schedule(Duration::from_millis(20), move || {
                    if mask.lock().unwrap().finish_hide() {
                        closed.fetch_add(1, Ordering::SeqCst);
                    }
                });
            }
        }

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(closed.load(Ordering::SeqCst), 1);
        assert_eq!(mask.lock().unwrap().phase(), MaskPhase::Hidden);
    }

    #[tokio::test]
    async fn cancelled_timer_never_fires() {
        let fired = Arc::new(AtomicUsize::new(0));
        let mut timer = HideTimer::new();

        let counter = Arc::clone(&fired);
        timer.schedule(Duration::from_millis(20), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        timer.cancel();

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
        assert!(!timer.is_armed());
    }

    #[tokio::test]
    async fn dropping_the_timer_clears_the_pending_run() {
        let fired = Arc::new(AtomicUsize::new(0));

        {
            let mut timer = HideTimer::new();
            let counter = Arc::clone(&fired);
            timer.schedule(Duration::from_millis(20), move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        }

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }
}
