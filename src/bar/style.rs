//! Bar body characters.
//!
//! The body of a rendered line is drawn from three characters: one for
//! filled cells, one for the cursor and one for empty cells. The default set
//! is `"=> "`, which produces bodies such as `=====>    `.
//!
//! # Examples
//!
//! ```rust
//! use tickbar::BarChars;
//!
//! let chars = BarChars::parse(BarChars::CHARS_HASH).unwrap();
//! assert_eq!(chars.filled(), '#');
//! assert_eq!(chars.cursor(), '>');
//! assert_eq!(chars.empty(), '.');
//! ```

use crate::error::{Error, Result};

/// Characters used to draw the bar body.
///
/// Only printable ASCII (including the space) is accepted, so every cell is
/// exactly one column wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarChars {
    filled: char,
    cursor: char,
    empty: char,
}

impl Default for BarChars {
    fn default() -> Self {
        Self {
            filled: '=',
            cursor: '>',
            empty: ' ',
        }
    }
}

impl BarChars {
    /// Classic look: `[=====>    ]`.
    pub const CHARS_CLASSIC: &'static str = "=> ";
    /// Hashes on a dotted track: `[#####>....]`.
    pub const CHARS_HASH: &'static str = "#>.";
    /// Dashes: `[----->    ]`.
    pub const CHARS_DASH: &'static str = "-> ";

    /// Create a new [`BarChars`], validating each character.
    pub fn new(filled: char, cursor: char, empty: char) -> Result<Self> {
        for (name, c) in [("filled", filled), ("cursor", cursor), ("empty", empty)] {
            if !(c.is_ascii_graphic() || c == ' ') {
                return Err(Error::invalid(
                    name,
                    c.escape_default(),
                    "must be a printable ASCII character",
                ));
            }
        }
        Ok(Self {
            filled,
            cursor,
            empty,
        })
    }

    /// Parse a three character string ordered "filled", "cursor", "empty".
    pub fn parse(chars: &str) -> Result<Self> {
        let mut it = chars.chars();
        match (it.next(), it.next(), it.next(), it.next()) {
            (Some(filled), Some(cursor), Some(empty), None) => Self::new(filled, cursor, empty),
            _ => Err(Error::invalid(
                "chars",
                chars.escape_default(),
                "must contain exactly 3 characters: filled, cursor and empty",
            )),
        }
    }

    /// Character for filled cells.
    pub fn filled(&self) -> char {
        self.filled
    }

    /// Character marking the boundary between filled and empty cells.
    pub fn cursor(&self) -> char {
        self.cursor
    }

    /// Character for empty cells.
    pub fn empty(&self) -> char {
        self.empty
    }
}
