//! Tunables for a [`ProgressBar`](crate::ProgressBar) and their defaults.
//!
//! The defaults reproduce the standard line: a five second estimation window,
//! a first window that starts with one unit of motion already counted, and
//! the `"=> "` body characters.
//!
//! # Examples
//!
//! ```rust
//! use std::time::Duration;
//! use tickbar::BarConfig;
//!
//! let config = BarConfig {
//!     estimation_window: Duration::from_secs(2),
//!     ..BarConfig::default()
//! };
//! assert_eq!(config.initial_window_delta, 1.0);
//! ```

use crate::bar::style::BarChars;
use crate::error::{ensure_non_negative, Error, Result};
use std::time::Duration;

/// Configuration structure for a progress bar.
#[derive(Debug, Clone, PartialEq)]
pub struct BarConfig {
    /// Wall-clock length of an estimation window.
    pub estimation_window: Duration,
    /// Motion credited to the first estimation window before any tick.
    pub initial_window_delta: f64,
    /// Characters used to draw the bar body.
    pub chars: BarChars,
}

impl BarConfig {
    /// Default estimation window, five seconds.
    pub const DEFAULT_ESTIMATION_WINDOW: Duration = Duration::from_millis(5000);
    /// Default motion credited to the first window.
    pub const DEFAULT_INITIAL_WINDOW_DELTA: f64 = 1.0;

    /// Estimation window in whole milliseconds.
    pub(crate) fn window_millis(&self) -> u64 {
        u64::try_from(self.estimation_window.as_millis()).unwrap_or(u64::MAX)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.window_millis() == 0 {
            return Err(Error::invalid(
                "estimation_window",
                format!("{:?}", self.estimation_window),
                "must be at least 1ms",
            ));
        }
        ensure_non_negative("initial_window_delta", self.initial_window_delta)?;
        Ok(())
    }
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            estimation_window: Self::DEFAULT_ESTIMATION_WINDOW,
            initial_window_delta: Self::DEFAULT_INITIAL_WINDOW_DELTA,
            chars: BarChars::default(),
        }
    }
}
