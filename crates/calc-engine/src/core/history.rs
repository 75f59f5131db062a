//! Record of the most recent chained computation
//!
//! The engine keeps at most one entry, as `Option<HistoryEntry>`; a new
//! chained computation overwrites the previous one.

use crate::core::number::format_number;
use crate::core::Operation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A completed binary computation, `left op right = result`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The pending operand the computation started from
    pub left: f64,
    /// The operation that was applied
    pub operation: Operation,
    /// The right-hand operand read from the display
    pub right: f64,
    /// The computed result
    pub result: f64,
}

impl HistoryEntry {
    /// Creates a new history entry
    #[must_use]
    pub fn new(left: f64, operation: Operation, right: f64, result: f64) -> Self {
        Self {
            left,
            operation,
            right,
            result,
        }
    }

    /// Records `left op right`, computing the result
    #[must_use]
    pub fn compute(left: f64, operation: Operation, right: f64) -> Self {
        Self::new(left, operation, right, operation.apply(left, right))
    }

    /// Returns the human-readable form, e.g. `"3 + 4 = 7"`
    #[must_use]
    pub fn display(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            format_number(self.left),
            self.operation,
            format_number(self.right),
            format_number(self.result)
        )
    }
}
