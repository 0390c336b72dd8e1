//! Wall-clock sources used by the time-remaining estimator.
//!
//! A [`Clock`] reports monotonic milliseconds. [`SystemClock`] is backed by
//! [`Instant`] and is what [`ProgressBar::new`](crate::ProgressBar::new) uses.
//! [`MockClock`] is a manually driven clock whose clones share one reading,
//! so a test can keep a handle while the bar owns another.
//!
//! # Examples
//!
//! ```rust
//! use tickbar::clock::{Clock, MockClock};
//!
//! let clock = MockClock::new();
//! let handle = clock.clone();
//! handle.advance(5_000);
//! assert_eq!(clock.now_millis(), 5_000);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// A source of monotonic time with millisecond resolution.
pub trait Clock {
    /// Milliseconds elapsed since an arbitrary, fixed origin.
    fn now_millis(&self) -> u64;
}

/// Clock backed by [`Instant`], measuring from its own creation.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Create a clock whose origin is now.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

/// Manually driven clock. Clones share the same reading.
#[derive(Debug, Clone, Default)]
pub struct MockClock {
    millis: Arc<AtomicU64>,
}

impl MockClock {
    /// Create a clock reading 0 ms.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clock reading `millis`.
    pub fn at(millis: u64) -> Self {
        Self {
            millis: Arc::new(AtomicU64::new(millis)),
        }
    }

    /// Set the current reading.
    pub fn set(&self, millis: u64) {
        self.millis.store(millis, Ordering::Relaxed);
    }

    /// Move the reading forward by `millis`.
    pub fn advance(&self, millis: u64) {
        self.millis.fetch_add(millis, Ordering::Relaxed);
    }
}

impl Clock for MockClock {
    fn now_millis(&self) -> u64 {
        self.millis.load(Ordering::Relaxed)
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_millis(&self) -> u64 {
        (**self).now_millis()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now_millis(&self) -> u64 {
        (**self).now_millis()
    }
}
