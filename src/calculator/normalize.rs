//! Text sanitization and numeric coercion.
//!
//! Text goes through four steps before it is parsed:
//! 1. all whitespace is removed (leading, trailing and interior)
//! 2. `,` becomes `.`
//! 3. only the first `.` survives, later ones are deleted
//! 4. every `.`-separated part must be a non-empty run of decimal digits,
//!    in any script (`"١٢"` and `"１２"` both read as 12)
//!
//! Text that fails step 4 is malformed. What happens to malformed text is
//! decided in exactly one place, [`validate_text`], based on [`ValidationMode`].

use serde::{Deserialize, Serialize};

use super::argument::Argument;
use super::error::{CalculatorError, CalculatorResult};

/// Policy for text that is not a well-formed decimal literal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Malformed text counts as `0.0`.
    #[default]
    Lenient,
    /// Malformed text is an error.
    Strict,
}

impl std::str::FromStr for ValidationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lenient" => Ok(Self::Lenient),
            "strict" => Ok(Self::Strict),
            other => Err(format!("unknown validation mode '{other}'")),
        }
    }
}

/// Clean a raw token into a candidate decimal literal.
///
/// The result is not guaranteed to be numeric; see [`parse_clean`].
pub fn sanitize(raw: &str) -> String {
    let compact: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    match compact.split_once('.') {
        Some((whole, rest)) if rest.contains('.') => {
            let fraction: String = rest.chars().filter(|&c| c != '.').collect();
            format!("{whole}.{fraction}")
        }
        _ => compact,
    }
}

/// Code point of the zero of every Unicode decimal digit (`Nd`) run.
/// Each run holds the ten digits zero through nine in order.
const DECIMAL_ZEROS: [u32; 66] = [
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0,
    0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50,
    0x11DA0, 0x16A60, 0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6, 0x1E140,
    0x1E2F0, 0x1E950, 0x1FBF0,
];

/// Value of a decimal digit in any script, e.g. `'٣'` → 3 and `'７'` → 7.
fn decimal_value(c: char) -> Option<u32> {
    let code = u32::from(c);
    let zero = match DECIMAL_ZEROS.binary_search(&code) {
        Ok(i) => DECIMAL_ZEROS[i],
        Err(0) => return None,
        Err(i) => DECIMAL_ZEROS[i - 1],
    };
    let value = code - zero;
    (value < 10).then_some(value)
}

/// Rewrite one part as ASCII digits, `None` unless it is a non-empty digit run.
fn ascii_digit_run(part: &str) -> Option<String> {
    if part.is_empty() {
        return None;
    }
    part.chars()
        .map(|c| decimal_value(c).and_then(|d| char::from_digit(d, 10)))
        .collect()
}

/// Parse a sanitized token, `None` if any part is not a digit run.
pub fn parse_clean(clean: &str) -> Option<f64> {
    let parts = clean
        .split('.')
        .map(ascii_digit_run)
        .collect::<Option<Vec<_>>>()?;
    parts.join(".").parse::<f64>().ok()
}

/// Sanitize and parse text, `None` when the token is malformed.
pub fn parse_text(raw: &str) -> Option<f64> {
    parse_clean(&sanitize(raw))
}

/// The single validation point for text arguments.
pub fn validate_text(position: usize, raw: &str, mode: ValidationMode) -> CalculatorResult<f64> {
    match parse_text(raw) {
        Some(value) => Ok(value),
        None => match mode {
            ValidationMode::Lenient => {
                tracing::debug!(position, input = raw, "text normalized to zero");
                Ok(0.0)
            }
            ValidationMode::Strict => Err(CalculatorError::MalformedNumber {
                position,
                input: raw.to_string(),
            }),
        },
    }
}

/// Coerce one argument to a float.
pub fn normalize_argument(
    position: usize,
    argument: &Argument,
    mode: ValidationMode,
) -> CalculatorResult<f64> {
    match argument {
        Argument::Integer(i) => Ok(*i as f64),
        Argument::Float(x) => Ok(*x),
        Argument::Text(s) => validate_text(position, s, mode),
        Argument::Boolean(b) => Ok(if *b { 1.0 } else { 0.0 }),
        Argument::Missing => Ok(0.0),
        Argument::Unsupported(kind) => Err(CalculatorError::UnsupportedArgument {
            position,
            kind: kind.clone(),
        }),
    }
}

/// Normalize a whole argument list.
///
/// An empty list stands for `(0, 0)`. The input is left untouched.
pub fn normalize_with(args: &[Argument], mode: ValidationMode) -> CalculatorResult<Vec<f64>> {
    if args.is_empty() {
        return Ok(vec![0.0, 0.0]);
    }

    args.iter()
        .enumerate()
        .map(|(position, argument)| {
            let value = normalize_argument(position, argument, mode)?;
            tracing::trace!(position, kind = argument.kind(), value, "normalized");
            Ok(value)
        })
        .collect()
}

/// Normalize with the lenient policy.
pub fn normalize(args: &[Argument]) -> CalculatorResult<Vec<f64>> {
    normalize_with(args, ValidationMode::Lenient)
}
