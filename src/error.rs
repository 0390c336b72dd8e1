//! Error handling for the tickbar library.
//!
//! Every fallible operation in the crate returns [`Result`]. Argument
//! validation happens at construction and mutation boundaries and is reported
//! as [`Error::InvalidArgument`]; rendering itself never fails.

use std::io;
use thiserror::Error;

/// Errors that can happen when using tickbar.
#[derive(Error, Debug)]
pub enum Error {
    /// An argument was outside of its allowed domain.
    ///
    /// `name` is the offending parameter, `value` the rejected input and
    /// `constraint` a human-readable statement of what was expected.
    #[error("Invalid argument `{name}` ({value}): {constraint}")]
    InvalidArgument {
        name: &'static str,
        value: String,
        constraint: &'static str,
    },

    /// I/O Error.
    ///
    /// Only returned when emitting a rendered line to a writer.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn invalid(
        name: &'static str,
        value: impl ToString,
        constraint: &'static str,
    ) -> Self {
        Error::InvalidArgument {
            name,
            value: value.to_string(),
            constraint,
        }
    }

    /// Return `true` if this is an [`Error::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument { .. })
    }
}

/// Result type alias for operations that can fail with a tickbar error.
pub type Result<T> = std::result::Result<T, Error>;

/// Require `value` to be a finite real strictly greater than zero.
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Error::invalid(name, value, "must be a finite number greater than 0"))
    }
}

/// Require `value` to be a finite real greater than or equal to zero.
pub(crate) fn ensure_non_negative(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(Error::invalid(name, value, "must be a finite number of at least 0"))
    }
}
