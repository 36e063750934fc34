//! Eval command: calculate over a JSON array of mixed values.

use std::io::Read;
use std::time::Instant;

use serde_json::Value;

use crate::calculator::{Argument, Calculation, Calculator, ValidationMode};
use crate::io::{Envelope, ExitCode, OutputFormat, ResultCode};

use super::{emit, fail};

/// Read the JSON document, `-` meaning stdin.
fn read_input(input: &str) -> std::io::Result<String> {
    if input == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(input.to_string())
    }
}

/// Decode a JSON document into calculator arguments.
pub fn parse_arguments(document: &str) -> Result<Vec<Argument>, serde_json::Error> {
    let value: Value = serde_json::from_str(document)?;
    Ok(Argument::list_from_json(&value))
}

pub fn run(input: &str, mode: ValidationMode, format: OutputFormat) -> ExitCode {
    let started = Instant::now();

    let document = match read_input(input) {
        Ok(document) => document,
        Err(e) => {
            return fail(
                Envelope::<Calculation>::error(
                    ResultCode::InternalError,
                    ExitCode::GeneralError,
                    format!("Failed to read stdin: {e}"),
                ),
                format,
            );
        }
    };

    let arguments = match parse_arguments(&document) {
        Ok(arguments) => arguments,
        Err(e) => {
            return fail(
                Envelope::<Calculation>::error(
                    ResultCode::InvalidInput,
                    ExitCode::InvalidInput,
                    format!("Input is not valid JSON: {e}"),
                )
                .with_hint("Pass an array such as '[2, \"5,3\", true]'"),
                format,
            );
        }
    };

    let count = arguments.len();
    let calculation = match Calculator::new(arguments).with_mode(mode).evaluate() {
        Ok(calculation) => calculation,
        Err(e) => return fail(Envelope::<Calculation>::from_calculator_error(&e), format),
    };

    let line = format!(
        "sum = {}, square = {}",
        calculation.sum, calculation.formatted
    );
    let envelope = Envelope::success(calculation)
        .with_message("Square of sum")
        .with_count(count)
        .with_duration_us(started.elapsed().as_micros() as u64);

    emit(&envelope, format, || println!("{line}"));
    ExitCode::Success
}
