#![allow(dead_code)]

use std::fmt::Debug;
use tickbar::{Error, MockClock, ProgressBar, Result};
use tracing_subscriber::EnvFilter;

// Common test constants
pub const TEST_TOTAL: f64 = 10.0;
pub const TEST_WIDTH: usize = 10;
pub const CALCULATING: &str = "Calculating...";
/// Estimate shown once the millisecond product saturates at `i32::MAX`.
pub const SATURATED: &str = "2147483s Left";

/// Installs a test subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Creates a bar driven by a mock clock, returning a handle to that clock.
pub fn create_mock_bar(total: f64, width: usize) -> (ProgressBar<MockClock>, MockClock) {
    let clock = MockClock::new();
    let bar = ProgressBar::builder(total, width)
        .clock(clock.clone())
        .build()
        .expect("Failed to build test bar");
    (bar, clock)
}

/// Creates the 10 unit, 10 cell bar used by most scenarios.
pub fn create_test_bar() -> (ProgressBar<MockClock>, MockClock) {
    create_mock_bar(TEST_TOTAL, TEST_WIDTH)
}

/// Text between the first `[` and the following `]`.
pub fn body_of(line: &str) -> &str {
    let start = line.find('[').expect("line has no `[`") + 1;
    let end = start + line[start..].find(']').expect("line has no `]`");
    &line[start..end]
}

/// Text before the `%` sign.
pub fn percent_label_of(line: &str) -> &str {
    &line[..line.find('%').expect("line has no `%`")]
}

/// Counter field including its padding.
pub fn counter_field_of(line: &str) -> &str {
    let start = line.find("] ").expect("line has no `] `") + 2;
    let end = line.find(" | ").expect("line has no ` | `");
    &line[start..end]
}

/// Estimate text, without the trailing carriage return.
pub fn estimate_of(line: &str) -> &str {
    let marker = "Estimated time: ";
    let start = line.find(marker).expect("line has no estimate") + marker.len();
    line[start..].trim_end_matches('\r')
}

/// Asserts that `result` failed with an invalid argument naming `name`.
pub fn assert_invalid_argument<T: Debug>(result: Result<T>, name: &str) {
    match result {
        Err(Error::InvalidArgument { name: got, .. }) => assert_eq!(got, name),
        other => panic!("expected invalid argument `{}`, got {:?}", name, other),
    }
}
