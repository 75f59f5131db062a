//! Entry phase of the engine
//!
//! Two facts govern every digit and operator key: whether a binary
//! operation is pending, and whether the next digit replaces the display
//! instead of extending it. A pending operand and its operation always
//! travel together. Pending phases also track whether a right-hand operand
//! has been supplied yet: a second operator pressed before one arrives
//! replaces the first instead of computing.

use crate::core::Operation;
use serde::{Deserialize, Serialize};

/// Where the engine stands between key presses
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    /// Nothing pending; digits extend the display
    #[default]
    Editing,
    /// Nothing pending; the next digit replaces the display
    Fresh,
    /// Operation chosen; the next digit starts the right-hand operand
    AwaitingOperand {
        /// Left-hand operand
        operand: f64,
        /// Operation to apply
        operation: Operation,
    },
    /// Right-hand operand is being typed
    EnteringOperand {
        /// Left-hand operand
        operand: f64,
        /// Operation to apply
        operation: Operation,
    },
    /// Right-hand operand was recalled from memory; the next digit
    /// replaces it
    RecalledOperand {
        /// Left-hand operand
        operand: f64,
        /// Operation to apply
        operation: Operation,
    },
}

impl Phase {
    /// Returns true if the next digit replaces the display
    #[must_use]
    pub const fn is_fresh_entry(&self) -> bool {
        matches!(
            self,
            Self::Fresh | Self::AwaitingOperand { .. } | Self::RecalledOperand { .. }
        )
    }

    /// Returns the pending operand and operation, if any
    #[must_use]
    pub const fn pending(&self) -> Option<(f64, Operation)> {
        match *self {
            Self::AwaitingOperand { operand, operation }
            | Self::EnteringOperand { operand, operation }
            | Self::RecalledOperand { operand, operation } => Some((operand, operation)),
            Self::Editing | Self::Fresh => None,
        }
    }

    /// Phase after a digit or decimal key consumed the fresh-entry flag
    #[must_use]
    pub const fn after_entry(self) -> Self {
        match self {
            Self::Fresh => Self::Editing,
            Self::AwaitingOperand { operand, operation }
            | Self::RecalledOperand { operand, operation } => {
                Self::EnteringOperand { operand, operation }
            }
            other => other,
        }
    }

    /// Phase after a value was recalled into the display
    #[must_use]
    pub const fn after_recall(self) -> Self {
        match self {
            Self::Editing | Self::Fresh => Self::Fresh,
            Self::AwaitingOperand { operand, operation }
            | Self::EnteringOperand { operand, operation }
            | Self::RecalledOperand { operand, operation } => {
                Self::RecalledOperand { operand, operation }
            }
        }
    }

    /// Phase after equals resolved the pending operation
    ///
    /// The fresh-entry flag survives: equals pressed straight after an
    /// operator leaves the next digit replacing the result.
    #[must_use]
    pub const fn after_equals(self) -> Self {
        if self.is_fresh_entry() {
            Self::Fresh
        } else {
            Self::Editing
        }
    }
}
