//! Key presses
//!
//! Every keypad button maps to one [`Key`]. Keyboard strings and keypad
//! labels map back through [`Key::from_key_str`], so front ends and test
//! scripts share one vocabulary.

use crate::core::functions::TrigFunction;
use crate::core::Operation;
use serde::{Deserialize, Serialize};

/// Non-digit characters entered through the digit path
///
/// They are written into the display like digits and never evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntrySymbol {
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `π`
    Pi,
    /// `e`
    E,
}

impl EntrySymbol {
    /// Returns the character written to the display
    #[must_use]
    pub const fn as_char(&self) -> char {
        match self {
            Self::OpenParen => '(',
            Self::CloseParen => ')',
            Self::Pi => 'π',
            Self::E => 'e',
        }
    }

    /// Maps a display character back to its symbol
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '(' => Some(Self::OpenParen),
            ')' => Some(Self::CloseParen),
            'π' => Some(Self::Pi),
            'e' => Some(Self::E),
            _ => None,
        }
    }
}

/// A single key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Digit 0-9
    Digit(u8),
    /// Entry symbol written like a digit
    Symbol(EntrySymbol),
    /// Decimal point
    Decimal,
    /// Sign toggle (±)
    ToggleSign,
    /// Binary operator
    Operator(Operation),
    /// Equals
    Equals,
    /// Percentage (%)
    Percentage,
    /// Square root (√)
    SquareRoot,
    /// Factorial (x!)
    Factorial,
    /// sin / cos / tan
    Trig(TrigFunction),
    /// Add display to memory (M+)
    MemoryAdd,
    /// Subtract display from memory (M-)
    MemorySubtract,
    /// Recall memory (MR)
    MemoryRecall,
    /// Clear memory (MC)
    MemoryClear,
    /// Clear everything but memory and history (AC)
    ClearAll,
    /// Clear the display (C)
    ClearEntry,
    /// Thousands separator; accepted and ignored
    Separator,
}

impl Key {
    /// Returns the character written to the display, for entry keys
    #[must_use]
    pub fn to_char(&self) -> Option<char> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(*d), 10),
            Self::Symbol(symbol) => Some(symbol.as_char()),
            Self::Decimal => Some('.'),
            _ => None,
        }
    }

    /// Returns the keypad label
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Symbol(symbol) => symbol.as_char().to_string(),
            Self::Decimal => ".".to_string(),
            Self::ToggleSign => "±".to_string(),
            Self::Operator(Operation::Power) => "xʸ".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Percentage => "%".to_string(),
            Self::SquareRoot => "√".to_string(),
            Self::Factorial => "x!".to_string(),
            Self::Trig(f) => f.name().to_string(),
            Self::MemoryAdd => "M+".to_string(),
            Self::MemorySubtract => "M-".to_string(),
            Self::MemoryRecall => "MR".to_string(),
            Self::MemoryClear => "MC".to_string(),
            Self::ClearAll => "AC".to_string(),
            Self::ClearEntry => "C".to_string(),
            Self::Separator => ",".to_string(),
        }
    }

    /// Maps a keyboard key or keypad label to a key
    #[must_use]
    pub fn from_key_str(key: &str) -> Option<Self> {
        let mut chars = key.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(d) = c.to_digit(10) {
                return Some(Self::Digit(d as u8));
            }
            if let Some(symbol) = EntrySymbol::from_char(c) {
                return Some(Self::Symbol(symbol));
            }
        }

        if let Some(op) = Operation::from_symbol(key) {
            return Some(Self::Operator(op));
        }
        if let Some(f) = TrigFunction::from_name(key) {
            return Some(Self::Trig(f));
        }

        match key {
            "." => Some(Self::Decimal),
            "±" | "neg" => Some(Self::ToggleSign),
            "xʸ" => Some(Self::Operator(Operation::Power)),
            "=" | "Enter" => Some(Self::Equals),
            "%" => Some(Self::Percentage),
            "√" | "sqrt" => Some(Self::SquareRoot),
            "!" | "x!" => Some(Self::Factorial),
            "pi" => Some(Self::Symbol(EntrySymbol::Pi)),
            "M+" => Some(Self::MemoryAdd),
            "M-" => Some(Self::MemorySubtract),
            "MR" => Some(Self::MemoryRecall),
            "MC" => Some(Self::MemoryClear),
            "AC" | "Escape" => Some(Self::ClearAll),
            "C" | "Backspace" | "Delete" => Some(Self::ClearEntry),
            "," => Some(Self::Separator),
            _ => None,
        }
    }
}
