//! Windowed time-remaining estimator.
//!
//! Motion (the absolute size of every tick) is summed over a fixed wall-clock
//! window. Once the window has elapsed, the realized rate over that window is
//! applied to the remaining work and a new window begins.

use tracing::debug;

#[derive(Debug, Clone)]
pub(crate) struct Estimator {
    /// Window length in milliseconds, always non-zero.
    window: u64,
    window_start: u64,
    window_delta: f64,
    /// Seconds remaining, `None` while unknown.
    last_estimate: Option<u64>,
}

impl Estimator {
    pub(crate) fn new(now: u64, window: u64, initial_delta: f64) -> Self {
        Self {
            window,
            window_start: now,
            window_delta: initial_delta,
            last_estimate: None,
        }
    }

    /// Credit `magnitude` units of motion to the current window.
    pub(crate) fn record(&mut self, magnitude: f64) {
        self.window_delta += magnitude.abs();
    }

    pub(crate) fn last_estimate(&self) -> Option<u64> {
        self.last_estimate
    }

    /// Refresh the estimate if the current window has elapsed at `now`.
    ///
    /// Returns `true` when a new window was started.
    pub(crate) fn tick(&mut self, now: u64, total: f64, completed: f64) -> bool {
        let elapsed = now.saturating_sub(self.window_start);
        if elapsed < self.window {
            return false;
        }

        let remaining = (total - completed).trunc();
        // A window without motion divides to infinity; the cast saturates at
        // i32::MAX ms, and NaN (nothing remaining) becomes 0.
        let millis = (elapsed as f64 / self.window_delta * remaining) as i32;
        self.last_estimate = u64::try_from(millis / 1000).ok().filter(|&secs| secs > 0);

        debug!(
            elapsed_ms = elapsed,
            window_delta = self.window_delta,
            remaining,
            estimate_secs = ?self.last_estimate,
            "refreshed time-remaining estimate"
        );

        self.window_start = now;
        self.window_delta = 0.0;
        true
    }
}
