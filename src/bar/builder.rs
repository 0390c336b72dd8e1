//! Builder pattern implementation for creating [`ProgressBar`] instances.
//!
//! The builder is the only way to pick a non-default [`Clock`] or change the
//! [`BarConfig`] tunables. All validation is deferred to
//! [`ProgressBarBuilder::build`].
//!
//! # Examples
//!
//! ## Basic Builder Usage
//!
//! ```rust
//! use tickbar::ProgressBarBuilder;
//!
//! # fn main() -> tickbar::Result<()> {
//! let bar = ProgressBarBuilder::new(200.0, 40).completed(50.0).build()?;
//! assert_eq!(bar.percent_complete(), 25.0);
//! # Ok(())
//! # }
//! ```
//!
//! ## Custom Characters and Window
//!
//! ```rust
//! use std::time::Duration;
//! use tickbar::{clock::MockClock, BarChars, ProgressBarBuilder};
//!
//! # fn main() -> tickbar::Result<()> {
//! let mut bar = ProgressBarBuilder::new(4.0, 4)
//!     .chars(BarChars::parse(BarChars::CHARS_HASH)?)
//!     .estimation_window(Duration::from_secs(1))
//!     .clock(MockClock::new())
//!     .build()?;
//! bar.add(2.0)?;
//! assert!(bar.render().contains("[##>.]"));
//! # Ok(())
//! # }
//! ```

use super::config::BarConfig;
use super::style::BarChars;
use super::ProgressBar;
use crate::clock::{Clock, SystemClock};
use crate::error::{ensure_non_negative, ensure_positive, Error, Result};
use std::time::Duration;

/// A builder used to create a [`ProgressBar`].
#[derive(Debug, Clone)]
pub struct ProgressBarBuilder<C: Clock = SystemClock> {
    total: f64,
    width: usize,
    completed: f64,
    config: BarConfig,
    clock: C,
}

impl ProgressBarBuilder {
    /// Creates a builder for `total` units of work drawn `width` cells wide.
    pub fn new(total: f64, width: usize) -> Self {
        Self {
            total,
            width,
            completed: 0.0,
            config: BarConfig::default(),
            clock: SystemClock::new(),
        }
    }
}

impl<C: Clock> ProgressBarBuilder<C> {
    /// Set the amount of work already completed.
    pub fn completed(mut self, completed: f64) -> Self {
        self.completed = completed;
        self
    }

    /// Replace the clock driving the estimator.
    pub fn clock<D: Clock>(self, clock: D) -> ProgressBarBuilder<D> {
        ProgressBarBuilder {
            total: self.total,
            width: self.width,
            completed: self.completed,
            config: self.config,
            clock,
        }
    }

    /// Set the length of an estimation window.
    pub fn estimation_window(mut self, window: Duration) -> Self {
        self.config.estimation_window = window;
        self
    }

    /// Set the motion credited to the first estimation window.
    pub fn initial_window_delta(mut self, delta: f64) -> Self {
        self.config.initial_window_delta = delta;
        self
    }

    /// Set the body characters.
    pub fn chars(mut self, chars: BarChars) -> Self {
        self.config.chars = chars;
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: BarConfig) -> Self {
        self.config = config;
        self
    }

    /// Validate the options and create the [`ProgressBar`].
    pub fn build(self) -> Result<ProgressBar<C>> {
        let completed = ensure_non_negative("completed", self.completed)?;
        let total = ensure_positive("total", self.total)?;
        if self.width == 0 {
            return Err(Error::invalid("width", self.width, "must be greater than 0"));
        }
        self.config.validate()?;

        Ok(ProgressBar::from_parts(
            completed,
            total,
            self.width,
            &self.config,
            self.clock,
        ))
    }
}
