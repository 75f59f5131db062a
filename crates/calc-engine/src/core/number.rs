//! Display text <-> number conversion
//!
//! Results are rendered the way a pocket calculator (and ECMAScript's
//! `Number#toString`) would: integral values lose their fractional part,
//! `-0` reads as `0`, very large and very small magnitudes switch to
//! exponent form with an explicit exponent sign.

use crate::core::{CalcError, CalcResult};

/// Text written to the display for an invalid factorial
pub const ERROR_SENTINEL: &str = "Error";

/// Magnitude at or above which results render in exponent form
const EXPONENT_UPPER: f64 = 1e21;

/// Non-zero magnitude below which results render in exponent form
const EXPONENT_LOWER: f64 = 1e-6;

/// Fractional digits past which an `f64`'s decimal expansion is all zeros
const EXACT_FRACTION_DIGITS: usize = 800;

/// Parses display text as a number
///
/// Reads the longest numeric prefix, so trailing entry symbols are
/// ignored: `"2)"` is `2` and `"4π"` is `4`. Accepts plain decimals
/// (`"12"`, `"0."`, `"-3.5"`), exponent forms and the `NaN` / `Infinity`
/// renderings produced by earlier results. Text with no numeric prefix,
/// such as the error sentinel or `"(2"`, is rejected.
pub fn parse_display(text: &str) -> CalcResult<f64> {
    let prefix = numeric_prefix(text);
    if prefix.is_empty() {
        return Err(CalcError::unparseable(text));
    }
    prefix
        .parse::<f64>()
        .map_err(|_| CalcError::unparseable(text))
}

/// Longest leading slice of `text` that reads as a number
fn numeric_prefix(text: &str) -> &str {
    let bytes = text.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    for word in ["Infinity", "NaN"] {
        if text[sign..].starts_with(word) {
            return &text[..sign + word.len()];
        }
    }

    let int_digits = leading_digits(&bytes[sign..]);
    let mut end = sign + int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = leading_digits(&bytes[end + 1..]);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = leading_digits(&bytes[exp..]);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }
    &text[..end]
}

fn leading_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Renders a number as display text
#[must_use]
pub fn format_number(value: f64) -> String {
    if let Some(special) = special_value(value) {
        return special.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= EXPONENT_UPPER || magnitude < EXPONENT_LOWER {
        sign_exponent(&format!("{value:e}"))
    } else {
        value.to_string()
    }
}

/// Renders a number in exponent form with `digits` fractional digits
///
/// Ties round away from zero on the exact value, so
/// `to_exponential(1.25, 1)` is `"1.3e+0"` and
/// `to_exponential(1234567890123.0, 6)` is `"1.234568e+12"`.
#[must_use]
pub fn to_exponential(value: f64, digits: usize) -> String {
    if let Some(special) = special_value(value) {
        return special.to_string();
    }
    let sign = if value < 0.0 { "-" } else { "" };

    // Enough precision to print every f64 without rounding
    let exact = format!("{:.*e}", EXACT_FRACTION_DIGITS, value.abs());
    let Some((mantissa, exponent)) = exact.split_once('e') else {
        return exact;
    };
    let mut exponent: i32 = exponent.parse().unwrap_or(0);
    let all: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).collect();

    let mut kept: Vec<u8> = all
        .iter()
        .copied()
        .chain(std::iter::repeat(b'0'))
        .take(digits + 1)
        .collect();
    let next = all.get(digits + 1).copied().unwrap_or(b'0');
    if next >= b'5' && increment(&mut kept) {
        exponent += 1;
    }

    let mut rendered = String::from(sign);
    for (i, d) in kept.iter().enumerate() {
        if i == 1 {
            rendered.push('.');
        }
        rendered.push(char::from(*d));
    }
    let exponent_sign = if exponent < 0 { "" } else { "+" };
    format!("{rendered}e{exponent_sign}{exponent}")
}

/// Adds one to a decimal digit string, returning true when it carries out
/// (`999` becomes `100`)
fn increment(digits: &mut [u8]) -> bool {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return false;
        }
    }
    if let Some(first) = digits.first_mut() {
        *first = b'1';
    }
    true
}

/// Formats display text for presentation
///
/// Text longer than `max_len` characters is re-rendered in exponent form;
/// shorter text passes through unchanged. Long text that is not a number
/// renders as `NaN`.
#[must_use]
pub fn format_display(text: &str, max_len: usize, digits: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let value = parse_display(text).unwrap_or(f64::NAN);
    to_exponential(value, digits)
}

fn special_value(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("NaN")
    } else if value == f64::INFINITY {
        Some("Infinity")
    } else if value == f64::NEG_INFINITY {
        Some("-Infinity")
    } else {
        None
    }
}

/// Inserts `+` into non-negative exponents (`1e21` -> `1e+21`)
fn sign_exponent(rendered: &str) -> String {
    match rendered.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => rendered.to_string(),
    }
}
