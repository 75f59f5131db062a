//! Single-operand functions
//!
//! Each function maps the current display value to a new one. Only
//! [`factorial`] can fail; the rest let NaN and infinities through.

use crate::core::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trigonometric function over radians
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrigFunction {
    /// Sine
    Sin,
    /// Cosine
    Cos,
    /// Tangent
    Tan,
}

impl TrigFunction {
    /// All trigonometric functions in keypad order
    pub const ALL: [Self; 3] = [Self::Sin, Self::Cos, Self::Tan];

    /// Returns the keypad name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
        }
    }

    /// Parses a keypad name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            "tan" => Some(Self::Tan),
            _ => None,
        }
    }

    /// Evaluates the function at `radians`
    #[must_use]
    pub fn apply(self, radians: f64) -> f64 {
        match self {
            Self::Sin => radians.sin(),
            Self::Cos => radians.cos(),
            Self::Tan => radians.tan(),
        }
    }
}

impl fmt::Display for TrigFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One hundredth of `value`
#[must_use]
pub fn percentage(value: f64) -> f64 {
    value / 100.0
}

/// Square root; negative input yields NaN
#[must_use]
pub fn square_root(value: f64) -> f64 {
    value.sqrt()
}

/// Factorial of the integer part of `value`
///
/// The fraction is truncated toward zero, so `5.9!` is `120` and `-0.5!`
/// is `1`. Negative integers are rejected. The product stops growing once
/// it overflows to infinity, which happens past `170!`. NaN has no integer
/// part and yields the empty product, `1`.
pub fn factorial(value: f64) -> CalcResult<f64> {
    let n = value.trunc();
    if n < 0.0 {
        return Err(CalcError::NegativeFactorial(n));
    }

    let mut result = 1.0_f64;
    let mut i = 2.0_f64;
    while i <= n && result.is_finite() {
        result *= i;
        i += 1.0;
    }
    Ok(result)
}
