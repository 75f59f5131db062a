//! Calc Engine - keypad calculator state machine
//!
//! The engine behind a pocket-calculator style keypad: digit entry, binary
//! operations chained left to right, unary functions, a memory register
//! and a single-slot history of the last chained computation.
//!
//! # Principles
//!
//! - **Total commands**: no key press aborts; error conditions show up in
//!   the display text (`"Error"`, `"NaN"`, `"Infinity"`)
//! - **Typed state**: a pending operand cannot exist without its operation
//! - **One vocabulary**: keypad labels, keyboard keys and test scripts all
//!   resolve through [`Key`](key::Key)
//!
//! # Example
//!
//! ```rust
//! use calc_engine::prelude::*;
//!
//! let mut engine = Engine::new();
//! engine.input_digit('3').unwrap();
//! engine.perform_operation(Operation::Add);
//! engine.input_digit('4').unwrap();
//! engine.perform_operation(Operation::Multiply);
//! assert_eq!(engine.display(), "7");
//! assert_eq!(engine.last_entry().unwrap().to_string(), "3 + 4 = 7");
//!
//! engine.input_digit('2').unwrap();
//! engine.equals();
//! assert_eq!(engine.display(), "14");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod driver;
pub mod engine;
pub mod key;
pub mod phase;
pub mod snapshot;

#[cfg(feature = "tui")]
pub mod input;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::EngineConfig;
    pub use crate::core::functions::TrigFunction;
    pub use crate::core::history::HistoryEntry;
    pub use crate::core::memory::MemoryRegister;
    pub use crate::core::number::{format_display, format_number, ERROR_SENTINEL};
    pub use crate::core::{CalcError, CalcResult, Operation};
    pub use crate::driver::{CalculatorDriver, EngineDriver};
    pub use crate::engine::Engine;
    pub use crate::key::{EntrySymbol, Key};
    pub use crate::phase::Phase;
    pub use crate::snapshot::Snapshot;

    #[cfg(feature = "tui")]
    pub use crate::input::{InputAction, InputHandler};
}
