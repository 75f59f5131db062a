//! Calculator engine
//!
//! A synchronous state machine driven one key press at a time. Commands
//! never fail because of what the display holds: error conditions are
//! written into the display text (`"Error"`, `"NaN"`, `"Infinity"`), the
//! display reads as its leading number and text with none counts as `0`.

use crate::config::EngineConfig;
use crate::core::functions::{self, TrigFunction};
use crate::core::history::HistoryEntry;
use crate::core::memory::MemoryRegister;
use crate::core::number::{format_display, format_number, parse_display, ERROR_SENTINEL};
use crate::core::{CalcError, CalcResult, Operation};
use crate::key::{EntrySymbol, Key};
use crate::phase::Phase;
use crate::snapshot::Snapshot;
use tracing::{debug, trace, warn};

/// Display text of a freshly started or cleared engine
const INITIAL_DISPLAY: &str = "0";

/// Keypad calculator state machine
#[derive(Debug, Clone)]
pub struct Engine {
    /// Text currently shown
    display: String,
    /// Pending operation and fresh-entry state
    phase: Phase,
    /// Memory register, untouched by clears
    memory: MemoryRegister,
    /// Most recent chained computation
    last_entry: Option<HistoryEntry>,
    /// Display formatting settings
    config: EngineConfig,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Creates an engine showing `0` with empty memory
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: INITIAL_DISPLAY.to_string(),
            phase: Phase::default(),
            memory: MemoryRegister::new(),
            last_entry: None,
            config: EngineConfig::default(),
        }
    }

    /// Creates an engine with custom display formatting
    pub fn with_config(config: EngineConfig) -> CalcResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new()
        })
    }

    // ===== Accessors =====

    /// Returns the raw display text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Returns the display text formatted for presentation
    #[must_use]
    pub fn formatted_display(&self) -> String {
        format_display(
            &self.display,
            self.config.max_display_len,
            self.config.exponent_digits,
        )
    }

    /// Returns the current phase
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the memory register value
    #[must_use]
    pub fn memory(&self) -> f64 {
        self.memory.recall()
    }

    /// Returns the most recent chained computation
    #[must_use]
    pub fn last_entry(&self) -> Option<&HistoryEntry> {
        self.last_entry.as_ref()
    }

    /// Returns the configuration
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns true if the display holds the error sentinel
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.display == ERROR_SENTINEL
    }

    /// Returns the read-only view for the presentation layer
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            display: self.display.clone(),
            formatted_display: self.formatted_display(),
            last_entry: self.last_entry.as_ref().map(HistoryEntry::display),
            memory: self.memory.recall(),
            has_memory: self.memory.is_set(),
            pending: self
                .phase
                .pending()
                .map(|(operand, operation)| format!("{} {}", format_number(operand), operation)),
        }
    }

    // ===== Key dispatch =====

    /// Handles one key press
    ///
    /// Only keys that cannot be entered at all are rejected; the state is
    /// left untouched in that case.
    pub fn press(&mut self, key: Key) -> CalcResult<()> {
        debug!(?key, display = %self.display, "key pressed");
        match key {
            Key::Digit(d) => {
                let c = char::from_digit(u32::from(d), 10)
                    .ok_or_else(|| CalcError::UnknownKey(format!("digit {d}")))?;
                self.input_digit(c)?;
            }
            Key::Symbol(symbol) => self.input_digit(symbol.as_char())?,
            Key::Decimal => self.add_decimal(),
            Key::ToggleSign => self.toggle_sign(),
            Key::Operator(op) => self.perform_operation(op),
            Key::Equals => self.equals(),
            Key::Percentage => self.percentage(),
            Key::SquareRoot => self.square_root(),
            Key::Factorial => self.factorial(),
            Key::Trig(f) => self.trig(f),
            Key::MemoryAdd => self.add_to_memory(),
            Key::MemorySubtract => self.subtract_from_memory(),
            Key::MemoryRecall => self.recall_memory(),
            Key::MemoryClear => self.clear_memory(),
            Key::ClearAll => self.clear_all(),
            Key::ClearEntry => self.clear_entry(),
            Key::Separator => {}
        }
        Ok(())
    }

    // ===== Digit entry =====

    /// Enters a digit or entry symbol (`(`, `)`, `π`, `e`)
    ///
    /// Replaces the display when a fresh entry is due, when it shows `0`
    /// and when it shows the error sentinel; appends otherwise.
    pub fn input_digit(&mut self, digit: char) -> CalcResult<()> {
        if !digit.is_ascii_digit() && EntrySymbol::from_char(digit).is_none() {
            return Err(CalcError::InvalidKey(digit));
        }

        if self.phase.is_fresh_entry() || self.display == INITIAL_DISPLAY || self.is_error() {
            self.display = digit.to_string();
        } else {
            self.display.push(digit);
        }
        self.transition(self.phase.after_entry());
        Ok(())
    }

    /// Enters a decimal point
    ///
    /// Starts `0.` on a fresh entry or over the error sentinel; a second
    /// decimal point in the same number is ignored.
    pub fn add_decimal(&mut self) {
        if self.phase.is_fresh_entry() || self.is_error() {
            self.display = "0.".to_string();
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
        self.transition(self.phase.after_entry());
    }

    /// Negates the display value
    pub fn toggle_sign(&mut self) {
        let value = self.current_value();
        self.display = format_number(-value);
    }

    // ===== Binary operations =====

    /// Selects the next binary operation
    ///
    /// With nothing pending, the display becomes the left-hand operand and
    /// resets to `0`. With an operand already supplied, the pending
    /// operation is computed first and recorded as the last entry; the
    /// result becomes the new left-hand operand. Pressed again before any
    /// operand arrives, it only swaps the pending operation.
    pub fn perform_operation(&mut self, next: Operation) {
        let phase = match self.phase {
            Phase::Editing | Phase::Fresh => {
                let operand = self.current_value();
                self.display = INITIAL_DISPLAY.to_string();
                Phase::AwaitingOperand {
                    operand,
                    operation: next,
                }
            }
            Phase::AwaitingOperand { operand, .. } => Phase::AwaitingOperand {
                operand,
                operation: next,
            },
            Phase::EnteringOperand { operand, operation }
            | Phase::RecalledOperand { operand, operation } => {
                let entry = HistoryEntry::compute(operand, operation, self.current_value());
                debug!(
                    operand = entry.left,
                    %operation,
                    value = entry.right,
                    result = entry.result,
                    "chained computation"
                );
                self.display = format_number(entry.result);
                self.last_entry = Some(entry);
                Phase::AwaitingOperand {
                    operand: entry.result,
                    operation: next,
                }
            }
        };
        self.transition(phase);
    }

    /// Resolves the pending operation, if any
    ///
    /// Unlike a chained operator, equals leaves the last entry alone.
    pub fn equals(&mut self) {
        let Some((operand, operation)) = self.phase.pending() else {
            return;
        };
        let value = self.current_value();
        let result = operation.apply(operand, value);
        debug!(operand, %operation, value, result, "equals");
        self.display = format_number(result);
        self.transition(self.phase.after_equals());
    }

    // ===== Unary functions =====

    /// Divides the display value by 100
    pub fn percentage(&mut self) {
        self.apply_unary(functions::percentage);
    }

    /// Replaces the display with its square root
    pub fn square_root(&mut self) {
        self.apply_unary(functions::square_root);
    }

    /// Replaces the display with the factorial of its integer part
    ///
    /// A negative input shows the error sentinel.
    pub fn factorial(&mut self) {
        match functions::factorial(self.current_value()) {
            Ok(result) => self.display = format_number(result),
            Err(err) => {
                debug!(%err, "factorial rejected");
                self.display = ERROR_SENTINEL.to_string();
            }
        }
    }

    /// Replaces the display with a trigonometric function of it (radians)
    pub fn trig(&mut self, function: TrigFunction) {
        self.apply_unary(|value| function.apply(value));
    }

    // ===== Memory register =====

    /// Adds the display value to memory (M+)
    pub fn add_to_memory(&mut self) {
        let value = self.current_value();
        self.memory.add(value);
    }

    /// Subtracts the display value from memory (M-)
    pub fn subtract_from_memory(&mut self) {
        let value = self.current_value();
        self.memory.subtract(value);
    }

    /// Shows the memory value; the next digit replaces it (MR)
    pub fn recall_memory(&mut self) {
        self.display = format_number(self.memory.recall());
        self.transition(self.phase.after_recall());
    }

    /// Resets memory to `0` (MC)
    pub fn clear_memory(&mut self) {
        self.memory.clear();
    }

    // ===== Clearing =====

    /// Resets display and pending operation; memory and last entry stay
    pub fn clear_all(&mut self) {
        self.display = INITIAL_DISPLAY.to_string();
        self.transition(Phase::Editing);
    }

    /// Resets the display to `0`
    pub fn clear_entry(&mut self) {
        self.display = INITIAL_DISPLAY.to_string();
    }

    // ===== Helpers =====

    /// Numeric value of the display prefix; text with no number counts as `0`
    fn current_value(&self) -> f64 {
        parse_display(&self.display).unwrap_or_else(|err| {
            warn!(%err, "display is not a number, using 0");
            0.0
        })
    }

    fn apply_unary(&mut self, f: impl FnOnce(f64) -> f64) {
        let value = self.current_value();
        self.display = format_number(f(value));
    }

    fn transition(&mut self, next: Phase) {
        if next != self.phase {
            trace!(from = ?self.phase, to = ?next, "phase transition");
            self.phase = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press_all(engine: &mut Engine, keys: &[Key]) {
        for key in keys {
            engine.press(*key).unwrap();
        }
    }

    fn typed(digits: &str) -> Engine {
        let mut engine = Engine::new();
        for c in digits.chars() {
            match c {
                '.' => engine.add_decimal(),
                _ => engine.input_digit(c).unwrap(),
            }
        }
        engine
    }

    // ===== Constructor tests =====

    #[test]
    fn test_engine_new() {
        let engine = Engine::new();
        assert_eq!(engine.display(), "0");
        assert_eq!(engine.phase(), Phase::Editing);
        assert_eq!(engine.memory(), 0.0);
        assert!(engine.last_entry().is_none());
    }

    #[test]
    fn test_engine_default() {
        let engine = Engine::default();
        assert_eq!(engine.display(), "0");
    }

    #[test]
    fn test_engine_with_config() {
        let config = EngineConfig::new().with_max_display_len(4);
        let engine = Engine::with_config(config).unwrap();
        assert_eq!(engine.config().max_display_len, 4);
    }

    #[test]
    fn test_engine_with_invalid_config() {
        let config = EngineConfig::new().with_max_display_len(0);
        assert!(matches!(
            Engine::with_config(config),
            Err(CalcError::InvalidConfig { .. })
        ));
    }

    // ===== Digit entry tests =====

    #[test]
    fn test_digits_concatenate() {
        assert_eq!(typed("123").display(), "123");
    }

    #[test]
    fn test_leading_zero_suppressed() {
        assert_eq!(typed("007").display(), "7");
        assert_eq!(typed("0").display(), "0");
    }

    #[test]
    fn test_invalid_digit_rejected() {
        let mut engine = typed("12");
        assert_eq!(engine.input_digit('a'), Err(CalcError::InvalidKey('a')));
        assert_eq!(engine.display(), "12");
    }

    #[test]
    fn test_out_of_range_digit_key_rejected() {
        let mut engine = Engine::new();
        assert!(matches!(
            engine.press(Key::Digit(12)),
            Err(CalcError::UnknownKey(_))
        ));
        assert_eq!(engine.display(), "0");
    }

    #[test]
    fn test_entry_symbols_are_appended_verbatim() {
        let mut engine = Engine::new();
        engine.input_digit('(').unwrap();
        engine.input_digit('2').unwrap();
        engine.input_digit(')').unwrap();
        assert_eq!(engine.display(), "(2)");
    }

    #[test]
    fn test_unparseable_display_counts_as_zero() {
        let mut engine = Engine::new();
        engine.input_digit('π').unwrap();
        engine.perform_operation(Operation::Add);
        engine.input_digit('5').unwrap();
        engine.equals();
        assert_eq!(engine.display(), "5");
    }

    #[test]
    fn test_trailing_symbol_reads_numeric_prefix() {
        let mut engine = Engine::new();
        press_all(
            &mut engine,
            &[
                Key::Digit(2),
                Key::Symbol(EntrySymbol::CloseParen),
                Key::Operator(Operation::Add),
                Key::Digit(3),
                Key::Equals,
            ],
        );
        assert_eq!(engine.display(), "5");
    }

    #[test]
    fn test_memory_add_reads_numeric_prefix() {
        let mut engine = Engine::new();
        press_all(
            &mut engine,
            &[Key::Digit(4), Key::Symbol(EntrySymbol::Pi), Key::MemoryAdd],
        );
        assert_eq!(engine.display(), "4π");
        assert_eq!(engine.memory(), 4.0);
    }

    // ===== Decimal tests =====

    #[test]
    fn test_decimal_appends_once() {
        let mut engine = typed("3");
        engine.add_decimal();
        engine.add_decimal();
        engine.input_digit('1').unwrap();
        engine.add_decimal();
        assert_eq!(engine.display(), "3.1");
    }

    #[test]
    fn test_decimal_from_initial_zero() {
        let mut engine = Engine::new();
        engine.add_decimal();
        engine.input_digit('5').unwrap();
        assert_eq!(engine.display(), "0.5");
    }

    #[test]
    fn test_decimal_on_fresh_entry() {
        let mut engine = typed("9");
        engine.perform_operation(Operation::Add);
        engine.add_decimal();
        assert_eq!(engine.display(), "0.");
        assert!(!engine.phase().is_fresh_entry());
    }

    // ===== Sign toggle tests =====

    #[test]
    fn test_toggle_sign() {
        let mut engine = typed("4.5");
        engine.toggle_sign();
        assert_eq!(engine.display(), "-4.5");
        engine.toggle_sign();
        assert_eq!(engine.display(), "4.5");
    }

    #[test]
    fn test_toggle_sign_of_zero_stays_zero() {
        let mut engine = Engine::new();
        engine.toggle_sign();
        assert_eq!(engine.display(), "0");
    }

    #[test]
    fn test_toggle_sign_drops_trailing_point() {
        let mut engine = typed("5.");
        engine.toggle_sign();
        assert_eq!(engine.display(), "-5");
    }

    // ===== Binary operation tests =====

    #[test]
    fn test_first_operator_stores_operand() {
        let mut engine = typed("3");
        engine.perform_operation(Operation::Add);
        assert_eq!(engine.display(), "0");
        assert_eq!(
            engine.phase(),
            Phase::AwaitingOperand {
                operand: 3.0,
                operation: Operation::Add
            }
        );
        assert!(engine.last_entry().is_none());
    }

    #[test]
    fn test_next_digit_replaces_after_operator() {
        let mut engine = typed("3");
        engine.perform_operation(Operation::Add);
        engine.input_digit('4').unwrap();
        assert_eq!(engine.display(), "4");
    }

    #[test]
    fn test_chained_operator_computes_and_records() {
        let mut engine = typed("3");
        engine.perform_operation(Operation::Add);
        engine.input_digit('4').unwrap();
        engine.perform_operation(Operation::Multiply);
        assert_eq!(engine.display(), "7");
        assert_eq!(engine.last_entry().unwrap().display(), "3 + 4 = 7");
        assert_eq!(engine.phase().pending(), Some((7.0, Operation::Multiply)));
    }

    #[test]
    fn test_second_operator_replaces_without_computing() {
        let mut engine = typed("8");
        engine.perform_operation(Operation::Add);
        engine.perform_operation(Operation::Subtract);
        assert_eq!(engine.display(), "0");
        assert!(engine.last_entry().is_none());
        engine.input_digit('3').unwrap();
        engine.equals();
        assert_eq!(engine.display(), "5");
    }

    #[test]
    fn test_last_entry_keeps_only_latest() {
        let mut engine = typed("1");
        engine.perform_operation(Operation::Add);
        engine.input_digit('2').unwrap();
        engine.perform_operation(Operation::Add);
        engine.input_digit('3').unwrap();
        engine.perform_operation(Operation::Add);
        assert_eq!(engine.last_entry().unwrap().display(), "3 + 3 = 6");
    }

    #[test]
    fn test_division_by_zero_renders_infinity() {
        let mut engine = typed("1");
        engine.perform_operation(Operation::Divide);
        engine.input_digit('0').unwrap();
        engine.equals();
        assert_eq!(engine.display(), "Infinity");
    }

    #[test]
    fn test_power() {
        let mut engine = typed("2");
        engine.perform_operation(Operation::Power);
        engine.input_digit('8').unwrap();
        engine.equals();
        assert_eq!(engine.display(), "256");
    }

    // ===== Equals tests =====

    #[test]
    fn test_equals_without_pending_is_noop() {
        let mut engine = typed("42");
        engine.equals();
        assert_eq!(engine.display(), "42");
        assert_eq!(engine.phase(), Phase::Editing);
    }

    #[test]
    fn test_equals_clears_pending_without_history() {
        let mut engine = typed("6");
        engine.perform_operation(Operation::Multiply);
        engine.input_digit('7').unwrap();
        engine.equals();
        assert_eq!(engine.display(), "42");
        assert_eq!(engine.phase().pending(), None);
        assert!(engine.last_entry().is_none());
    }

    #[test]
    fn test_digit_after_equals_appends_to_result() {
        let mut engine = typed("3");
        engine.perform_operation(Operation::Add);
        engine.input_digit('4').unwrap();
        engine.equals();
        engine.input_digit('5').unwrap();
        assert_eq!(engine.display(), "75");
    }

    #[test]
    fn test_equals_straight_after_operator_uses_display() {
        let mut engine = typed("3");
        engine.perform_operation(Operation::Add);
        engine.equals();
        assert_eq!(engine.display(), "3");
        engine.input_digit('9').unwrap();
        assert_eq!(engine.display(), "9");
    }

    // ===== Unary function tests =====

    #[test]
    fn test_percentage() {
        let mut engine = typed("50");
        engine.percentage();
        assert_eq!(engine.display(), "0.5");
    }

    #[test]
    fn test_square_root() {
        let mut engine = typed("16");
        engine.square_root();
        assert_eq!(engine.display(), "4");
    }

    #[test]
    fn test_square_root_of_negative_is_nan() {
        let mut engine = typed("4");
        engine.toggle_sign();
        engine.square_root();
        assert_eq!(engine.display(), "NaN");
    }

    #[test]
    fn test_factorial() {
        let mut engine = typed("5");
        engine.factorial();
        assert_eq!(engine.display(), "120");
    }

    #[test]
    fn test_factorial_of_negative_shows_error() {
        let mut engine = typed("1");
        engine.toggle_sign();
        engine.factorial();
        assert_eq!(engine.display(), "Error");
        assert!(engine.is_error());
    }

    #[test]
    fn test_digit_overwrites_error() {
        let mut engine = typed("1");
        engine.toggle_sign();
        engine.factorial();
        engine.input_digit('7').unwrap();
        assert_eq!(engine.display(), "7");
    }

    #[test]
    fn test_decimal_overwrites_error() {
        let mut engine = typed("1");
        engine.toggle_sign();
        engine.factorial();
        engine.add_decimal();
        assert_eq!(engine.display(), "0.");
    }

    #[test]
    fn test_trig() {
        let mut engine = Engine::new();
        engine.trig(TrigFunction::Cos);
        assert_eq!(engine.display(), "1");
        engine.clear_entry();
        engine.trig(TrigFunction::Sin);
        assert_eq!(engine.display(), "0");
    }

    #[test]
    fn test_unary_keeps_pending_operation() {
        let mut engine = typed("2");
        engine.perform_operation(Operation::Add);
        engine.input_digit('9').unwrap();
        engine.square_root();
        engine.equals();
        assert_eq!(engine.display(), "5");
    }

    // ===== Memory tests =====

    #[test]
    fn test_memory_add_and_recall() {
        let mut engine = typed("10");
        engine.add_to_memory();
        engine.clear_all();
        engine.recall_memory();
        assert_eq!(engine.display(), "10");
        assert_eq!(engine.memory(), 10.0);
    }

    #[test]
    fn test_memory_subtract() {
        let mut engine = typed("4");
        engine.subtract_from_memory();
        assert_eq!(engine.memory(), -4.0);
    }

    #[test]
    fn test_recall_sets_fresh_entry() {
        let mut engine = typed("10");
        engine.add_to_memory();
        engine.recall_memory();
        engine.input_digit('3').unwrap();
        assert_eq!(engine.display(), "3");
    }

    #[test]
    fn test_recalled_operand_is_used_by_next_operator() {
        let mut engine = typed("5");
        engine.add_to_memory();
        engine.clear_all();
        engine.input_digit('3').unwrap();
        engine.perform_operation(Operation::Add);
        engine.recall_memory();
        engine.perform_operation(Operation::Add);
        assert_eq!(engine.display(), "8");
        assert_eq!(engine.last_entry().unwrap().display(), "3 + 5 = 8");
    }

    #[test]
    fn test_memory_does_not_touch_pending() {
        let mut engine = typed("2");
        engine.perform_operation(Operation::Multiply);
        engine.input_digit('3').unwrap();
        engine.add_to_memory();
        engine.clear_memory();
        assert_eq!(engine.phase().pending(), Some((2.0, Operation::Multiply)));
        assert_eq!(engine.memory(), 0.0);
    }

    // ===== Clear tests =====

    #[test]
    fn test_clear_all_keeps_memory_and_last_entry() {
        let mut engine = typed("3");
        engine.perform_operation(Operation::Add);
        engine.input_digit('4').unwrap();
        engine.perform_operation(Operation::Add);
        engine.add_to_memory();
        engine.input_digit('1').unwrap();
        engine.clear_all();
        assert_eq!(engine.display(), "0");
        assert_eq!(engine.phase(), Phase::Editing);
        assert_eq!(engine.memory(), 7.0);
        assert_eq!(engine.last_entry().unwrap().display(), "3 + 4 = 7");
    }

    #[test]
    fn test_clear_entry_keeps_pending() {
        let mut engine = typed("9");
        engine.perform_operation(Operation::Subtract);
        engine.input_digit('5').unwrap();
        engine.clear_entry();
        assert_eq!(engine.display(), "0");
        engine.input_digit('2').unwrap();
        engine.equals();
        assert_eq!(engine.display(), "7");
    }

    // ===== Key dispatch tests =====

    #[test]
    fn test_press_full_chain() {
        let mut engine = Engine::new();
        press_all(
            &mut engine,
            &[
                Key::Digit(3),
                Key::Operator(Operation::Add),
                Key::Digit(4),
                Key::Operator(Operation::Add),
                Key::Digit(5),
                Key::Equals,
            ],
        );
        assert_eq!(engine.display(), "12");
        assert_eq!(engine.last_entry().unwrap().display(), "3 + 4 = 7");
    }

    #[test]
    fn test_press_separator_is_noop() {
        let mut engine = typed("12");
        engine.press(Key::Separator).unwrap();
        assert_eq!(engine.display(), "12");
    }

    #[test]
    fn test_press_symbol() {
        let mut engine = Engine::new();
        engine.press(Key::Symbol(EntrySymbol::E)).unwrap();
        assert_eq!(engine.display(), "e");
    }

    // ===== Snapshot tests =====

    #[test]
    fn test_snapshot_initial() {
        let snapshot = Engine::new().snapshot();
        assert_eq!(snapshot.display, "0");
        assert_eq!(snapshot.formatted_display, "0");
        assert_eq!(snapshot.last_entry, None);
        assert_eq!(snapshot.memory, 0.0);
        assert!(!snapshot.has_memory);
        assert_eq!(snapshot.pending, None);
    }

    #[test]
    fn test_snapshot_pending_and_memory() {
        let mut engine = typed("12");
        engine.add_to_memory();
        engine.perform_operation(Operation::Divide);
        let snapshot = engine.snapshot();
        assert_eq!(snapshot.pending.as_deref(), Some("12 ÷"));
        assert!(snapshot.has_memory);
        assert_eq!(snapshot.memory, 12.0);
    }

    #[test]
    fn test_snapshot_formats_long_display() {
        let engine = typed("1234567890123");
        let snapshot = engine.snapshot();
        assert_eq!(snapshot.display, "1234567890123");
        assert_eq!(snapshot.formatted_display, "1.234568e+12");
    }

    #[test]
    fn test_snapshot_respects_config() {
        let config = EngineConfig::new()
            .with_max_display_len(4)
            .with_exponent_digits(2);
        let mut engine = Engine::with_config(config).unwrap();
        for c in "12345".chars() {
            engine.input_digit(c).unwrap();
        }
        assert_eq!(engine.formatted_display(), "1.23e+4");
    }
}
