//! Validation Utilities
//!
//! Lenient numeric interpretation of raw JSON payload values. Clients send
//! numbers, numeric strings, or garbage; these helpers decide what counts as
//! an integer and how two values compare.

use serde_json::Value;

/// Interpret a value as an integer using leading-integer parsing.
///
/// - numbers are truncated toward zero
/// - strings may carry leading whitespace and a sign, and must start with at
///   least one decimal digit; anything after the digits is ignored
/// - everything else (absent, null, booleans, arrays, objects) is rejected
///
/// Whole numbers outside the `i64` range saturate to `i64::MIN`/`i64::MAX`.
pub fn parse_integer(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Some(i);
            }
            // `as` saturates at the i64 bounds
            n.as_f64()
                .filter(|f| f.is_finite())
                .map(|f| f.trunc() as i64)
        }
        Value::String(s) => parse_leading_integer(s),
        _ => None,
    }
}

fn parse_leading_integer(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let saturated = if negative { i64::MIN } else { i64::MAX };
    let value = rest[..digits_len]
        .bytes()
        .try_fold(0i64, |acc, digit| {
            let digit = i64::from(digit - b'0');
            acc.checked_mul(10).and_then(|acc| {
                if negative {
                    acc.checked_sub(digit)
                } else {
                    acc.checked_add(digit)
                }
            })
        })
        .unwrap_or(saturated);

    Some(value)
}

/// Coerce a value to a number for relational comparison.
///
/// Returns `None` when the value has no numeric reading, in which case any
/// comparison involving it is false.
pub fn loose_number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => numeric_string(s),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null => Some(0.0),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Read a string the way a loose numeric comparison does.
///
/// Blank strings are zero. `0x`, `0o` and `0b` prefixes select a radix, and
/// the only spelled-out value is `Infinity`. Anything else has to be a
/// plain decimal literal.
fn numeric_string(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }

    let radix = match trimmed.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &trimmed[2..];
        if !digits.chars().all(|c| c.is_digit(radix)) {
            return None;
        }
        return u128::from_str_radix(digits, radix).ok().map(|v| v as f64);
    }

    let (negative, unsigned) = match trimmed.as_bytes()[0] {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    if unsigned == "Infinity" {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    // Rules out the `inf`/`nan` spellings `f64::from_str` would accept
    if !unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// `true` iff both values coerce to numbers and `left > right`.
pub fn loosely_greater(left: Option<&Value>, right: Option<&Value>) -> bool {
    match (loose_number(left), loose_number(right)) {
        (Some(l), Some(r)) => l > r,
        _ => false,
    }
}
