//! Square-of-sum calculator.
//!
//! Arguments are normalized to floats, summed in input order, and the sum is
//! raised to [`EXPONENT`]. The squared value is rendered with exactly
//! [`PRECISION`] fractional digits so results compare as plain strings.
//!
//! ```
//! use squaresum::calculator::{square_of_sum, Argument};
//!
//! let args = [Argument::from("5,3"), Argument::from(1.7), Argument::from("0 1")];
//! assert_eq!(square_of_sum(&args).unwrap(), "64.0000000000");
//! ```

mod argument;
mod error;
mod normalize;

pub use argument::Argument;
pub use error::{CalculatorError, CalculatorResult};
pub use normalize::{
    ValidationMode, normalize, normalize_argument, normalize_with, parse_clean, parse_text,
    sanitize, validate_text,
};

use serde::{Deserialize, Serialize};

/// Power the sum is raised to.
pub const EXPONENT: i32 = 2;

/// Fractional digits in formatted output.
pub const PRECISION: usize = 10;

/// Sum normalized values in input order.
pub fn sum(normalized: &[f64]) -> f64 {
    normalized.iter().fold(0.0, |acc, x| acc + x)
}

/// Raise a sum to [`EXPONENT`].
pub fn square(sum: f64) -> f64 {
    sum.powi(EXPONENT)
}

/// Render a value with [`PRECISION`] fractional digits.
pub fn format_fixed(value: f64) -> String {
    format!("{value:.prec$}", prec = PRECISION)
}

/// Normalize, sum, square and format with the lenient policy.
pub fn square_of_sum(args: &[Argument]) -> CalculatorResult<String> {
    Calculator::new(args.to_vec()).square_of_sum()
}

/// Full trace of one calculation, as emitted by the JSON output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    pub arguments: Vec<Argument>,
    pub normalized: Vec<f64>,
    pub sum: f64,
    pub square: f64,
    pub formatted: String,
}

/// An argument list bound to a validation policy.
///
/// Cheap to build, holds no state between calls. Each method re-normalizes
/// from the original arguments.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    args: Vec<Argument>,
    mode: ValidationMode,
}

impl Calculator {
    pub fn new(args: Vec<Argument>) -> Self {
        Self {
            args,
            mode: ValidationMode::default(),
        }
    }

    /// Build from anything convertible, e.g. `Calculator::from_values([2, 3])`.
    pub fn from_values<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Argument>,
    {
        Self::new(values.into_iter().map(Into::into).collect())
    }

    pub fn with_mode(mut self, mode: ValidationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn args(&self) -> &[Argument] {
        &self.args
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    pub fn normalize(&self) -> CalculatorResult<Vec<f64>> {
        normalize_with(&self.args, self.mode)
    }

    pub fn sum(&self) -> CalculatorResult<f64> {
        Ok(sum(&self.normalize()?))
    }

    pub fn square(&self) -> CalculatorResult<f64> {
        Ok(square(self.sum()?))
    }

    pub fn square_of_sum(&self) -> CalculatorResult<String> {
        Ok(format_fixed(self.square()?))
    }

    /// Run every stage once and keep the intermediate values.
    pub fn evaluate(&self) -> CalculatorResult<Calculation> {
        let normalized = self.normalize()?;
        let total = sum(&normalized);
        let squared = square(total);
        Ok(Calculation {
            arguments: self.args.clone(),
            normalized,
            sum: total,
            square: squared,
            formatted: format_fixed(squared),
        })
    }
}
