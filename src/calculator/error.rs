use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculatorError {
    #[error("Argument {position} has unsupported type '{kind}' and cannot be coerced to a number")]
    UnsupportedArgument { position: usize, kind: String },

    #[error("Argument {position} is not a well-formed number: '{input}'")]
    MalformedNumber { position: usize, input: String },
}

impl CalculatorError {
    /// Zero-based position of the offending argument.
    pub fn position(&self) -> usize {
        match self {
            Self::UnsupportedArgument { position, .. } | Self::MalformedNumber { position, .. } => {
                *position
            }
        }
    }

    /// Recovery suggestions for the CLI output envelope.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnsupportedArgument { .. } => vec![
                "Pass numbers, numeric text, booleans or null".to_string(),
                "Nested arrays and objects are not summed".to_string(),
            ],
            Self::MalformedNumber { .. } => vec![
                "Use digits with at most one ',' or '.' separator".to_string(),
                "Drop --strict to treat malformed text as zero".to_string(),
            ],
        }
    }
}

pub type CalculatorResult<T> = Result<T, CalculatorError>;
