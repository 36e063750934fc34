//! JSON output envelope shared by every command.
//!
//! With `--json` each command writes exactly one envelope to stdout, so the
//! result can be piped into other tools without scraping text.

use serde::{Deserialize, Serialize};

use crate::calculator::CalculatorError;
use crate::config::ConfigError;

use super::exit_code::ExitCode;

/// Schema version for this envelope format.
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Message type for stream discrimination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    Result,
    Error,
}

/// Operation outcome status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Success,
    Error,
}

/// Machine-readable result codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResultCode {
    Ok,
    UnsupportedArgument,
    MalformedNumber,
    InvalidInput,
    ConfigError,
    InternalError,
}

impl ResultCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::UnsupportedArgument => "UNSUPPORTED_ARGUMENT",
            Self::MalformedNumber => "MALFORMED_NUMBER",
            Self::InvalidInput => "INVALID_INPUT",
            Self::ConfigError => "CONFIG_ERROR",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl From<&CalculatorError> for ResultCode {
    fn from(error: &CalculatorError) -> Self {
        match error {
            CalculatorError::UnsupportedArgument { .. } => Self::UnsupportedArgument,
            CalculatorError::MalformedNumber { .. } => Self::MalformedNumber,
        }
    }
}

/// Unified JSON output envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T = serde_json::Value> {
    #[serde(rename = "type")]
    pub message_type: MessageType,

    pub status: Status,

    pub code: ResultCode,

    /// Unix exit code (0-255)
    pub exit_code: u8,

    /// Human-readable message
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,

    /// Result payload (null on error)
    pub data: Option<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetails>,

    pub meta: Meta,
}

/// Error details with suggestions and context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetails {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,

    /// Zero-based argument position, when the error concerns one argument
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
}

/// Response metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meta {
    pub schema_version: String,

    /// Number of arguments in the request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,

    /// Execution time in microseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_us: Option<u64>,
}

impl Default for Meta {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            count: None,
            duration_us: None,
        }
    }
}

impl<T> Envelope<T> {
    /// Create a success envelope with data.
    pub fn success(data: T) -> Self {
        Self {
            message_type: MessageType::Result,
            status: Status::Success,
            code: ResultCode::Ok,
            exit_code: ExitCode::Success.code(),
            message: "Calculation completed".to_string(),
            hint: None,
            data: Some(data),
            error: None,
            meta: Meta::default(),
        }
    }

    /// Create an error envelope.
    pub fn error(code: ResultCode, exit_code: ExitCode, message: impl Into<String>) -> Self {
        Self {
            message_type: MessageType::Error,
            status: Status::Error,
            code,
            exit_code: exit_code.code(),
            message: message.into(),
            hint: None,
            data: None,
            error: None,
            meta: Meta::default(),
        }
    }

    /// Error envelope for a failed calculation.
    pub fn from_calculator_error(error: &CalculatorError) -> Self {
        Self::error(
            ResultCode::from(error),
            ExitCode::from_calculator_error(error),
            error.to_string(),
        )
        .with_error_details(ErrorDetails {
            suggestions: error.suggestions(),
            position: Some(error.position()),
        })
    }

    /// Error envelope for a configuration failure.
    pub fn from_config_error(error: &ConfigError) -> Self {
        Self::error(
            ResultCode::ConfigError,
            ExitCode::from_config_error(error),
            error.to_string(),
        )
        .with_hint("Run 'squaresum init --force' to regenerate the settings file")
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.meta.count = Some(count);
        self
    }

    pub fn with_duration_us(mut self, duration_us: u64) -> Self {
        self.meta.duration_us = Some(duration_us);
        self
    }

    pub fn with_error_details(mut self, details: ErrorDetails) -> Self {
        self.error = Some(details);
        self
    }
}

impl<T: Serialize> Envelope<T> {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
