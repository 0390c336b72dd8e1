//! Line formatting.
//!
//! A rendered line has the shape
//!
//! ```text
//! <PCT>%<pad> [<BODY>] <COUNTER><cpad> | Estimated time: <EST>\r
//! ```
//!
//! The percent field is five columns wide, the body holds exactly `width`
//! cells (plus one trailing cursor once the bar is full) and the counter is
//! padded to the width of `total/total`.

use super::ProgressBar;
use crate::bar::style::BarChars;
use crate::clock::Clock;
use std::fmt::{self, Write};

const PERCENT_FIELD: usize = 4;
const UNKNOWN_ESTIMATE: &str = "Calculating...";

impl<C: Clock> fmt::Display for ProgressBar<C> {
    /// Format the current line without refreshing the estimator.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pct = self.percent_complete();

        let label = format!("{}%", pct.round() as i64);
        f.write_str(&label)?;
        pad(f, (PERCENT_FIELD + 1).saturating_sub(label.len()))?;

        f.write_str(" [")?;
        write_body(
            f,
            &self.chars,
            filled_cells(self.completed, self.total, self.width),
            self.width,
            pct >= 100.0,
        )?;
        f.write_str("] ")?;

        let total = self.total.trunc() as i64;
        let full = format!("{total}/{total}");
        let counter = if pct >= 100.0 {
            full.clone()
        } else {
            format!("{}/{}", self.completed.trunc() as i64, total)
        };
        f.write_str(&counter)?;
        pad(f, full.len().saturating_sub(counter.len()))?;

        f.write_str(" | Estimated time: ")?;
        match self.estimator.last_estimate() {
            Some(secs) => write!(f, "{secs}s Left")?,
            None => f.write_str(UNKNOWN_ESTIMATE)?,
        }
        f.write_char('\r')
    }
}

/// Number of filled cells, `floor(completed / total * width)`.
///
/// Negative when `completed` is negative, larger than `width` past 100%.
pub(crate) fn filled_cells(completed: f64, total: f64, width: usize) -> i64 {
    (completed / total * width as f64).floor() as i64
}

fn write_body<W: Write>(
    w: &mut W,
    chars: &BarChars,
    bars: i64,
    width: usize,
    full: bool,
) -> fmt::Result {
    for (i, cell) in (0..width).zip(0_i64..) {
        let c = match cell.cmp(&bars) {
            std::cmp::Ordering::Equal => chars.cursor(),
            std::cmp::Ordering::Greater => chars.empty(),
            std::cmp::Ordering::Less => chars.filled(),
        };
        w.write_char(c)?;
        if full && i == width - 1 {
            w.write_char(chars.cursor())?;
        }
    }
    Ok(())
}

fn pad<W: Write>(w: &mut W, n: usize) -> fmt::Result {
    (0..n).try_for_each(|_| w.write_char(' '))
}
