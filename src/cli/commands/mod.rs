//! Command implementations for the CLI.
//!
//! Each command returns the exit code the process should end with.

pub mod calculate;
pub mod eval;
pub mod init;
pub mod interactive;

use serde::Serialize;

use crate::config::Settings;
use crate::io::{Envelope, ExitCode, OutputFormat};

use super::args::{Commands, resolve_mode};

/// Run a parsed command against loaded settings.
pub fn dispatch(command: Commands, settings: &Settings, format: OutputFormat) -> ExitCode {
    let configured = settings.calculator.validation;
    match command {
        Commands::Square(args) => {
            calculate::run(calculate::Report::Square, &args.values, args.mode(configured), format)
        }
        Commands::Sum(args) => {
            calculate::run(calculate::Report::Sum, &args.values, args.mode(configured), format)
        }
        Commands::Normalize(args) => calculate::run(
            calculate::Report::Normalize,
            &args.values,
            args.mode(configured),
            format,
        ),
        Commands::Eval { input, strict } => {
            eval::run(&input, resolve_mode(strict, configured), format)
        }
        Commands::Interactive { strict } => interactive::run(resolve_mode(strict, configured)),
        Commands::Init { force } => init::run_init(force, format),
        Commands::Config => init::run_config(settings, format),
    }
}

/// Write an envelope as JSON, or the text rendering otherwise.
pub(crate) fn emit<T: Serialize>(
    envelope: &Envelope<T>,
    format: OutputFormat,
    text: impl FnOnce(),
) {
    if format.is_json() {
        match envelope.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("Error: failed to serialize output: {e}"),
        }
    } else {
        text();
    }
}

/// Report an error envelope on the right stream and return its exit code.
pub(crate) fn fail<T: Serialize>(envelope: Envelope<T>, format: OutputFormat) -> ExitCode {
    let exit = ExitCode::from_code(envelope.exit_code);
    emit(&envelope, format, || {
        eprintln!(
            "{} {}",
            console::style("Error:").red().bold().for_stderr(),
            envelope.message
        );
        if let Some(details) = &envelope.error {
            for suggestion in &details.suggestions {
                eprintln!("  - {suggestion}");
            }
        }
        if let Some(hint) = &envelope.hint {
            eprintln!("{} {hint}", console::style("Hint:").cyan().for_stderr());
        }
    });
    exit
}
