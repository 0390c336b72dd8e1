//! The progress bar itself.
//!
//! A [`ProgressBar`] tracks completed work against a total, renders a single
//! terminal line on demand and keeps a rolling time-remaining estimate.
//!
//! # Overview
//!
//! - `builder` - [`ProgressBarBuilder`] for configuring a bar and its clock
//! - `config` - [`BarConfig`] tunables and their defaults
//! - `style` - [`BarChars`] used to draw the body
//! - `render` - line formatting
//! - `estimator` - the windowed time-remaining estimator
//!
//! # Examples
//!
//! ## Driving a bar with a mock clock
//!
//! ```rust
//! use tickbar::{clock::MockClock, ProgressBar};
//!
//! # fn main() -> tickbar::Result<()> {
//! let clock = MockClock::new();
//! let mut bar = ProgressBar::builder(10.0, 10).clock(clock.clone()).build()?;
//!
//! bar.add(5.0)?;
//! clock.set(5_000);
//! assert!(bar.render().ends_with("Estimated time: 4s Left\r"));
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub(crate) mod estimator;
pub(crate) mod render;
pub mod style;

pub use builder::ProgressBarBuilder;
pub use config::BarConfig;
pub use style::BarChars;

use crate::clock::{Clock, SystemClock};
use crate::error::{ensure_non_negative, ensure_positive, Result};
use estimator::Estimator;
use std::io::{self, Write};
use std::time::Duration;
use tracing::{trace, warn};

/// Terminator written after the line by [`ProgressBar::print`].
pub const LINE_ENDING: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// Single-line progress bar with a time-remaining estimate.
///
/// ```rust
/// # fn main() -> tickbar::Result<()> {
/// use tickbar::ProgressBar;
///
/// let mut bar = ProgressBar::new(10.0, 10)?;
/// bar.add(5.0)?;
/// assert_eq!(
///     bar.to_string(),
///     "50%   [=====>    ] 5/10  | Estimated time: Calculating...\r"
/// );
/// # Ok(())
/// # }
/// ```
pub struct ProgressBar<C: Clock = SystemClock> {
    /// Work units represented by a full bar.
    total: f64,
    /// Accumulated work units.
    completed: f64,
    /// Number of cells in the body.
    width: usize,
    /// Body characters.
    chars: BarChars,
    estimator: Estimator,
    clock: C,
}

impl<C: Clock> std::fmt::Debug for ProgressBar<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressBar")
            .field("total", &self.total)
            .field("completed", &self.completed)
            .field("width", &self.width)
            .field("chars", &self.chars)
            .field("estimator", &self.estimator)
            .finish_non_exhaustive()
    }
}

impl ProgressBar {
    /// Create a bar for `total` units of work drawn `width` cells wide.
    pub fn new(total: f64, width: usize) -> Result<Self> {
        Self::builder(total, width).build()
    }

    /// Create a bar that starts with `completed` units already done.
    pub fn with_completed(completed: f64, total: f64, width: usize) -> Result<Self> {
        Self::builder(total, width).completed(completed).build()
    }

    /// Start configuring a bar. See [`ProgressBarBuilder`].
    pub fn builder(total: f64, width: usize) -> ProgressBarBuilder {
        ProgressBarBuilder::new(total, width)
    }
}

impl<C: Clock> ProgressBar<C> {
    pub(crate) fn from_parts(
        completed: f64,
        total: f64,
        width: usize,
        config: &BarConfig,
        clock: C,
    ) -> Self {
        let estimator = Estimator::new(
            clock.now_millis(),
            config.window_millis(),
            config.initial_window_delta,
        );
        Self {
            total,
            completed,
            width,
            chars: config.chars,
            estimator,
            clock,
        }
    }

    /// Add `delta` units of completed work.
    ///
    /// `delta` must be greater than 0.
    pub fn add(&mut self, delta: f64) -> Result<&mut Self> {
        let delta = ensure_positive("delta", delta)?;
        self.completed += delta;
        self.estimator.record(delta);
        trace!(delta, completed = self.completed, "added progress");
        Ok(self)
    }

    /// Add a single unit of completed work.
    pub fn add_one(&mut self) -> &mut Self {
        self.completed += 1.0;
        self.estimator.record(1.0);
        trace!(completed = self.completed, "added one unit of progress");
        self
    }

    /// Remove `delta` units of completed work.
    ///
    /// `delta` must be greater than 0. `completed` is not clamped and may go
    /// below zero, in which case the percentage renders negative and the body
    /// is drawn empty.
    #[deprecated(note = "progress should only move forward; use `add` instead")]
    pub fn remove(&mut self, delta: f64) -> Result<&mut Self> {
        let delta = ensure_positive("delta", delta)?;
        self.retract(delta);
        Ok(self)
    }

    /// Remove a single unit of completed work.
    #[deprecated(note = "progress should only move forward; use `add_one` instead")]
    pub fn remove_one(&mut self) -> &mut Self {
        self.retract(1.0);
        self
    }

    fn retract(&mut self, delta: f64) {
        self.completed -= delta;
        self.estimator.record(delta);
        trace!(delta, completed = self.completed, "removed progress");
        if self.completed < 0.0 {
            warn!(completed = self.completed, "completed work went below zero");
        }
    }

    /// Overwrite the completed amount.
    ///
    /// `value` must be at least 0. The estimation window is left untouched,
    /// so the jump does not count as motion.
    #[deprecated(note = "use `add` to report progress incrementally")]
    pub fn set_completed(&mut self, value: f64) -> Result<&mut Self> {
        self.completed = ensure_non_negative("completed", value)?;
        trace!(completed = self.completed, "set completed");
        Ok(self)
    }

    /// Overwrite the total amount of work.
    ///
    /// `value` must be greater than 0.
    #[deprecated(note = "the total should stay fixed once the bar is created")]
    pub fn set_total(&mut self, value: f64) -> Result<&mut Self> {
        self.total = ensure_positive("total", value)?;
        trace!(total = self.total, "set total");
        Ok(self)
    }

    /// Percentage of the work completed, capped at 100.
    pub fn percent_complete(&self) -> f64 {
        (self.completed / self.total * 100.0).min(100.0)
    }

    /// Total amount of work.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Completed amount of work. May exceed [`total`](Self::total).
    pub fn completed(&self) -> f64 {
        self.completed
    }

    /// Number of cells in the body.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Most recent time-remaining estimate, `None` while unknown.
    pub fn estimate(&self) -> Option<Duration> {
        self.estimator.last_estimate().map(Duration::from_secs)
    }

    /// Clock driving the estimator.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Render the line, refreshing the estimate if its window has elapsed.
    pub fn render(&mut self) -> String {
        self.tick_clock(self.clock.now_millis());
        self.to_string()
    }

    fn tick_clock(&mut self, now: u64) {
        self.estimator.tick(now, self.total, self.completed);
    }

    /// Write the rendered line and the platform line terminator to standard output.
    pub fn print(&mut self) -> Result<()> {
        let stdout = io::stdout();
        let handle = stdout.lock();
        self.print_to(handle)
    }

    /// Write the rendered line and the platform line terminator to `writer`.
    pub fn print_to<W: Write>(&mut self, mut writer: W) -> Result<()> {
        let line = self.render();
        write!(writer, "{line}{LINE_ENDING}")?;
        writer.flush()?;
        Ok(())
    }
}
