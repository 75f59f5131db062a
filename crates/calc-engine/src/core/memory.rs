//! Memory register
//!
//! A single accumulator, independent of the calculation state. Clearing
//! the engine leaves it alone; only [`MemoryRegister::clear`] resets it.

use serde::{Deserialize, Serialize};

/// Single-value accumulator behind the M+, M-, MR and MC keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryRegister {
    value: f64,
}

impl MemoryRegister {
    /// Creates an empty register holding `0`
    #[must_use]
    pub const fn new() -> Self {
        Self { value: 0.0 }
    }

    /// Adds `amount` to the register (M+)
    pub fn add(&mut self, amount: f64) {
        self.value += amount;
    }

    /// Subtracts `amount` from the register (M-)
    pub fn subtract(&mut self, amount: f64) {
        self.value -= amount;
    }

    /// Returns the stored value (MR)
    #[must_use]
    pub const fn recall(&self) -> f64 {
        self.value
    }

    /// Resets the register to `0` (MC)
    pub fn clear(&mut self) {
        self.value = 0.0;
    }

    /// Returns true if the register holds something other than `0`
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.value != 0.0
    }
}
