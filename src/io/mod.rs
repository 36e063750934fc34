//! Output handling for the CLI.
//!
//! This module provides:
//! - Text and JSON output selection
//! - The JSON envelope and result codes
//! - Process exit codes

pub mod envelope;
pub mod exit_code;
pub mod format;

pub use envelope::{Envelope, ErrorDetails, MessageType, Meta, ResultCode, SCHEMA_VERSION, Status};
pub use exit_code::ExitCode;
pub use format::OutputFormat;
