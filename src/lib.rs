//! Tickbar is a crate providing a single-line textual progress bar for the
//! terminal, with a rolling estimate of the time remaining.
//!
//! # Quick Start
//!
//! ```rust
//! use tickbar::{Error, ProgressBar};
//!
//! # fn main() -> Result<(), Error> {
//! let mut bar = ProgressBar::new(10.0, 10)?;
//! for _ in 0..10 {
//!     bar.add_one();
//!     let _line = bar.render();
//! }
//! assert_eq!(bar.percent_complete(), 100.0);
//! assert!(bar.render().starts_with("100%  [==========>] 10/10 |"));
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`bar`] - The `ProgressBar`, its builder, configuration and characters
//! - [`clock`] - Time sources driving the estimator
//! - [`error`] - Centralized error handling with the `Error` enum
//!
//! # Logging
//!
//! The crate emits [`tracing`] events (estimator refreshes at `debug`,
//! accounting at `trace`) and never installs a subscriber itself.

pub mod bar;
pub mod clock;
pub mod error;

pub use bar::{BarChars, BarConfig, ProgressBar, ProgressBarBuilder};
pub use clock::{Clock, MockClock, SystemClock};
pub use error::{Error, Result};
