//! Core calculator building blocks
//!
//! Everything here is pure: binary operations, unary functions, number
//! rendering, the single-slot history and the memory register. The
//! [`Engine`](crate::engine::Engine) wires them into a state machine.

pub mod functions;
pub mod history;
pub mod memory;
pub mod number;
mod operations;

pub use operations::Operation;

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
///
/// None of these abort the engine. Commands that hit one either reject the
/// input untouched or fold the failure into the display text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Display text is not a number
    #[error("Unparseable display: {text:?}")]
    Unparseable {
        /// The offending display text
        text: String,
    },

    /// Character is not a digit or entry symbol
    #[error("Invalid key: {0:?}")]
    InvalidKey(char),

    /// Key name is not on the keypad
    #[error("Unknown key: {0:?}")]
    UnknownKey(String),

    /// Factorial of a negative number
    #[error("Factorial of negative number: {0}")]
    NegativeFactorial(f64),

    /// Configuration rejected by validation
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Why the configuration was rejected
        message: String,
    },
}

impl CalcError {
    /// Create an unparseable display error
    #[must_use]
    pub fn unparseable(text: impl Into<String>) -> Self {
        Self::Unparseable { text: text.into() }
    }

    /// Create a configuration error
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
