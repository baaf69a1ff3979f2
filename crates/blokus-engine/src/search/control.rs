//! Search control: stop flag and soft deadline.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Controls when a search should stop.
///
/// The recursion only ever looks at the shared stop flag. The clock is read
/// between iterative-deepening iterations, against the optional soft limit.
pub struct SearchControl {
    stopped: Arc<AtomicBool>,
    start: Instant,
    soft_limit: Option<Duration>,
}

impl SearchControl {
    /// Create control with no deadline; only the stop flag ends the search.
    pub fn new_infinite(stopped: Arc<AtomicBool>) -> Self {
        Self {
            stopped,
            start: Instant::now(),
            soft_limit: None,
        }
    }

    /// Create control whose clock starts now and expires after `soft`.
    pub fn new_timed(stopped: Arc<AtomicBool>, soft: Duration) -> Self {
        Self {
            stopped,
            start: Instant::now(),
            soft_limit: Some(soft),
        }
    }

    /// Check whether the search should abort immediately.
    pub fn should_stop(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    /// Check whether iterative deepening should not start another iteration.
    pub fn should_stop_iterating(&self) -> bool {
        if self.should_stop() {
            return true;
        }

        if let Some(soft) = self.soft_limit
            && self.elapsed() >= soft
        {
            return true;
        }

        false
    }

    /// Raise the stop flag.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Release);
    }

    /// Elapsed time since the control was created.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Reference to the shared stop flag.
    pub fn stop_flag(&self) -> &Arc<AtomicBool> {
        &self.stopped
    }
}
