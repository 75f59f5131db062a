//! Engine configuration

use crate::core::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};

/// Display formatting settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Longest display text shown verbatim; longer text switches to
    /// exponent form
    pub max_display_len: usize,
    /// Fractional digits in exponent form
    pub exponent_digits: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_display_len: Self::DEFAULT_MAX_DISPLAY_LEN,
            exponent_digits: Self::DEFAULT_EXPONENT_DIGITS,
        }
    }
}

impl EngineConfig {
    /// Default display width
    pub const DEFAULT_MAX_DISPLAY_LEN: usize = 12;

    /// Default fractional digits in exponent form
    pub const DEFAULT_EXPONENT_DIGITS: usize = 6;

    /// Largest accepted `exponent_digits`
    pub const MAX_EXPONENT_DIGITS: usize = 20;

    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set display width
    #[must_use]
    pub const fn with_max_display_len(mut self, max_display_len: usize) -> Self {
        self.max_display_len = max_display_len;
        self
    }

    /// Set exponent digits
    #[must_use]
    pub const fn with_exponent_digits(mut self, exponent_digits: usize) -> Self {
        self.exponent_digits = exponent_digits;
        self
    }

    /// Checks the configuration for values the display cannot honour
    pub fn validate(&self) -> CalcResult<()> {
        if self.max_display_len == 0 {
            return Err(CalcError::invalid_config(
                "max_display_len must be at least 1",
            ));
        }
        if self.exponent_digits > Self::MAX_EXPONENT_DIGITS {
            return Err(CalcError::invalid_config(format!(
                "exponent_digits must be at most {}, got {}",
                Self::MAX_EXPONENT_DIGITS,
                self.exponent_digits
            )));
        }
        Ok(())
    }

    /// Parses and validates a JSON configuration
    ///
    /// Missing fields take their defaults.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| CalcError::invalid_config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
