//! Process exit codes.

use crate::calculator::CalculatorError;
use crate::config::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    InvalidInput = 2,
    ConfigError = 3,
}

impl ExitCode {
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Map a raw code back, unknown values count as general errors.
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Self::Success,
            2 => Self::InvalidInput,
            3 => Self::ConfigError,
            _ => Self::GeneralError,
        }
    }

    pub fn from_calculator_error(_error: &CalculatorError) -> Self {
        Self::InvalidInput
    }

    pub fn from_config_error(error: &ConfigError) -> Self {
        match error {
            ConfigError::Io(_) => Self::GeneralError,
            _ => Self::ConfigError,
        }
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code.code())
    }
}
