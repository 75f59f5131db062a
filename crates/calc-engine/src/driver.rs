//! Calculator driver
//!
//! Behaviour checks are written once against [`CalculatorDriver`] and run
//! against any front end that can press keys and read the display back.
//! [`EngineDriver`] drives the [`Engine`] directly.

use crate::core::{CalcError, CalcResult};
use crate::engine::Engine;
use crate::key::Key;

/// Abstract driver for keypad interactions
///
/// # Example
///
/// ```rust
/// use calc_engine::driver::{CalculatorDriver, EngineDriver};
///
/// let mut driver = EngineDriver::new();
/// driver.press_sequence("6 × 7 =").unwrap();
/// assert_eq!(driver.display(), "42");
/// ```
pub trait CalculatorDriver {
    /// Presses a single key
    fn press(&mut self, key: Key) -> CalcResult<()>;

    /// Returns the raw display text
    fn display(&self) -> String;

    /// Returns the most recent chained computation, rendered
    fn last_entry(&self) -> Option<String>;

    /// Returns the memory register value
    fn memory(&self) -> f64;

    /// Restores the initial state, memory included
    fn reset(&mut self);

    /// Presses every key of a script
    ///
    /// Tokens are separated by whitespace. A token is either a key name
    /// (`"M+"`, `"sqrt"`, `"AC"`) or a run of single-character keys such
    /// as `"12.5"` or `"3+4="`. Stops at the first unknown token; keys
    /// before it stay applied.
    fn press_sequence(&mut self, script: &str) -> CalcResult<()> {
        for token in script.split_whitespace() {
            for key in keys_for(token)? {
                self.press(key)?;
            }
        }
        Ok(())
    }
}

/// Resolves one script token into the keys it stands for
pub fn keys_for(token: &str) -> CalcResult<Vec<Key>> {
    if let Some(key) = Key::from_key_str(token) {
        return Ok(vec![key]);
    }
    token
        .chars()
        .map(|c| {
            let mut buf = [0; 4];
            Key::from_key_str(c.encode_utf8(&mut buf))
        })
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| CalcError::UnknownKey(token.to_string()))
}

/// Driver wrapping an in-process engine
#[derive(Debug, Default)]
pub struct EngineDriver {
    engine: Engine,
}

impl EngineDriver {
    /// Creates a driver around a fresh engine
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a driver around an existing engine
    #[must_use]
    pub fn with_engine(engine: Engine) -> Self {
        Self { engine }
    }

    /// Returns a reference to the underlying engine
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Returns a mutable reference to the underlying engine
    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }
}

impl CalculatorDriver for EngineDriver {
    fn press(&mut self, key: Key) -> CalcResult<()> {
        self.engine.press(key)
    }

    fn display(&self) -> String {
        self.engine.display().to_string()
    }

    fn last_entry(&self) -> Option<String> {
        self.engine.last_entry().map(ToString::to_string)
    }

    fn memory(&self) -> f64 {
        self.engine.memory()
    }

    fn reset(&mut self) {
        let config = *self.engine.config();
        self.engine = Engine::with_config(config).unwrap_or_default();
    }
}

// ===== Unified Behaviour Checks =====
// These run against ANY CalculatorDriver implementation

/// Verifies the four basic operations and power
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    let cases = [
        ("2 + 3 =", "5"),
        ("10 - 4 =", "6"),
        ("6 × 7 =", "42"),
        ("20 ÷ 4 =", "5"),
        ("2 ^ 10 =", "1024"),
        ("1 ÷ 0 =", "Infinity"),
    ];
    for (script, expected) in cases {
        driver.reset();
        driver.press_sequence(script).unwrap();
        assert_eq!(driver.display(), expected, "{script}");
    }
}

/// Verifies left-to-right chaining and the single-slot history
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press_sequence("3 + 4 +").unwrap();
    assert_eq!(driver.display(), "7");
    assert_eq!(driver.last_entry().as_deref(), Some("3 + 4 = 7"));

    driver.press_sequence("5 =").unwrap();
    assert_eq!(driver.display(), "12");
    assert_eq!(driver.last_entry().as_deref(), Some("3 + 4 = 7"));

    driver.reset();
    driver.press_sequence("8 + - 3 =").unwrap();
    assert_eq!(driver.display(), "5");
    assert_eq!(driver.last_entry(), None);
}

/// Verifies decimal entry and sign toggling
pub fn verify_decimal_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press_sequence("1..5.").unwrap();
    assert_eq!(driver.display(), "1.5");

    driver.press(Key::ToggleSign).unwrap();
    assert_eq!(driver.display(), "-1.5");

    driver.reset();
    driver.press_sequence(".25").unwrap();
    assert_eq!(driver.display(), "0.25");
}

/// Verifies factorial and its error sentinel
pub fn verify_factorial<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press_sequence("5!").unwrap();
    assert_eq!(driver.display(), "120");

    driver.reset();
    driver.press_sequence("0!").unwrap();
    assert_eq!(driver.display(), "1");

    driver.reset();
    driver.press_sequence("3 ± !").unwrap();
    assert_eq!(driver.display(), "Error");

    driver.press_sequence("4").unwrap();
    assert_eq!(driver.display(), "4");
}

/// Verifies square root, percentage and trigonometry
pub fn verify_unary_functions<D: CalculatorDriver>(driver: &mut D) {
    let cases = [
        ("16 √", "4"),
        ("2 ± √", "NaN"),
        ("50 %", "0.5"),
        ("0 cos", "1"),
        ("0 sin", "0"),
    ];
    for (script, expected) in cases {
        driver.reset();
        driver.press_sequence(script).unwrap();
        assert_eq!(driver.display(), expected, "{script}");
    }
}

/// Verifies the memory register
pub fn verify_memory<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press_sequence("10 M+ AC 3 M- AC").unwrap();
    assert_eq!(driver.memory(), 7.0);
    assert_eq!(driver.display(), "0");

    driver.press_sequence("MR").unwrap();
    assert_eq!(driver.display(), "7");

    driver.press_sequence("2").unwrap();
    assert_eq!(driver.display(), "2");

    driver.press_sequence("MC").unwrap();
    assert_eq!(driver.memory(), 0.0);
}

/// Verifies what AC and C keep and discard
pub fn verify_clear_semantics<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press_sequence("9 - 5 C 2 =").unwrap();
    assert_eq!(driver.display(), "7");

    driver.reset();
    driver.press_sequence("3 + 4 + M+ 1 AC").unwrap();
    assert_eq!(driver.display(), "0");
    assert_eq!(driver.memory(), 7.0);
    assert_eq!(driver.last_entry().as_deref(), Some("3 + 4 = 7"));

    driver.press_sequence("5 =").unwrap();
    assert_eq!(driver.display(), "5");
}

/// Verifies that unknown keys are rejected without losing earlier presses
pub fn verify_unknown_keys<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    let result = driver.press_sequence("4 2 F13 7");
    assert_eq!(result, Err(CalcError::UnknownKey("F13".into())));
    assert_eq!(driver.display(), "42");
}

/// Complete verification suite
pub fn run_full_suite<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_chaining(driver);
    verify_decimal_entry(driver);
    verify_factorial(driver);
    verify_unary_functions(driver);
    verify_memory(driver);
    verify_clear_semantics(driver);
    verify_unknown_keys(driver);
}
