//! Init and Config commands.

use serde_json::json;

use crate::config::Settings;
use crate::io::{Envelope, ExitCode, OutputFormat, ResultCode};

use super::{emit, fail};

/// Run init command - create configuration file in the current directory.
pub fn run_init(force: bool, format: OutputFormat) -> ExitCode {
    let root = match std::env::current_dir() {
        Ok(root) => root,
        Err(e) => {
            return fail(
                Envelope::<()>::error(
                    ResultCode::InternalError,
                    ExitCode::GeneralError,
                    format!("Cannot determine current directory: {e}"),
                ),
                format,
            );
        }
    };

    match Settings::init_config_file(&root, force) {
        Ok(path) => {
            let envelope = Envelope::success(json!({ "path": path.display().to_string() }))
                .with_message("Configuration file created");
            emit(&envelope, format, || {
                println!("Created configuration file at: {}", path.display());
                println!("Edit this file to customize your settings.");
            });
            ExitCode::Success
        }
        Err(e) => fail(Envelope::<()>::from_config_error(&e), format),
    }
}

/// Run config command - display current configuration.
pub fn run_config(settings: &Settings, format: OutputFormat) -> ExitCode {
    if format.is_json() {
        emit(&Envelope::success(settings).with_message("Active settings"), format, || {});
        return ExitCode::Success;
    }

    match toml::to_string_pretty(settings) {
        Ok(toml_str) => {
            println!("Current Configuration:");
            println!("{}", "=".repeat(50));
            println!("{toml_str}");
            ExitCode::Success
        }
        Err(e) => {
            eprintln!("Error displaying config: {e}");
            ExitCode::GeneralError
        }
    }
}
