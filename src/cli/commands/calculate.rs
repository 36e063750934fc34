//! Square, sum and normalize commands.

use std::time::Instant;

use crate::calculator::{Argument, Calculation, Calculator, ValidationMode};
use crate::io::{Envelope, ExitCode, OutputFormat};
use crate::{debug_event, log_event};

use super::{emit, fail};

/// What to print for a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    Square,
    Sum,
    Normalize,
}

/// Raw values as the user typed them, blanks shown as `0`.
fn display_terms(values: &[String]) -> String {
    if values.is_empty() {
        return "0 + 0".to_string();
    }
    values
        .iter()
        .map(|v| if v.trim().is_empty() { "0" } else { v.as_str() })
        .collect::<Vec<_>>()
        .join(" + ")
}

/// One text line per report kind.
pub fn render_text(report: Report, values: &[String], calculation: &Calculation) -> Vec<String> {
    match report {
        Report::Square => vec![format!(
            "({})\u{00B2} = {}",
            display_terms(values),
            calculation.formatted
        )],
        Report::Sum => vec![calculation.sum.to_string()],
        Report::Normalize => {
            if values.is_empty() {
                return vec!["(none) -> 0, 0".to_string()];
            }
            values
                .iter()
                .zip(&calculation.normalized)
                .map(|(raw, value)| format!("{raw:?} -> {value}"))
                .collect()
        }
    }
}

/// Evaluate `values` as text arguments and print the report.
pub fn run(
    report: Report,
    values: &[String],
    mode: ValidationMode,
    format: OutputFormat,
) -> ExitCode {
    let started = Instant::now();
    let calculator =
        Calculator::from_values(values.iter().cloned().map(Argument::Text)).with_mode(mode);
    debug_event!("cli", "calculate", "{report:?} over {} values ({mode:?})", values.len());

    let calculation = match calculator.evaluate() {
        Ok(calculation) => calculation,
        Err(e) => {
            tracing::warn!("[cli] calculation rejected: {e}");
            return fail(Envelope::<Calculation>::from_calculator_error(&e), format);
        }
    };
    log_event!("cli", "calculated", "sum={} square={}", calculation.sum, calculation.formatted);

    let message = match report {
        Report::Square => "Square of sum",
        Report::Sum => "Sum",
        Report::Normalize => "Normalized values",
    };
    let lines = render_text(report, values, &calculation);
    let envelope = Envelope::success(calculation)
        .with_message(message)
        .with_count(values.len())
        .with_duration_us(started.elapsed().as_micros() as u64);

    emit(&envelope, format, || {
        for line in &lines {
            println!("{line}");
        }
    });
    ExitCode::Success
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn evaluate(values: &[String]) -> Calculation {
        Calculator::from_values(values.iter().cloned().map(Argument::Text))
            .evaluate()
            .unwrap()
    }

    #[test]
    fn test_square_line_matches_prompt_layout() {
        let values = strings(&["2", "3"]);
        let lines = render_text(Report::Square, &values, &evaluate(&values));
        assert_eq!(lines, vec!["(2 + 3)\u{00B2} = 25.0000000000"]);
    }

    #[test]
    fn test_square_line_shows_blanks_as_zero() {
        let values = strings(&["", "4"]);
        let lines = render_text(Report::Square, &values, &evaluate(&values));
        assert_eq!(lines, vec!["(0 + 4)\u{00B2} = 16.0000000000"]);

        let lines = render_text(Report::Square, &[], &evaluate(&[]));
        assert_eq!(lines, vec!["(0 + 0)\u{00B2} = 0.0000000000"]);
    }

    #[test]
    fn test_sum_and_normalize_lines() {
        let values = strings(&["5,3", "1.7", "0 1"]);
        let calculation = evaluate(&values);
        assert_eq!(render_text(Report::Sum, &values, &calculation), vec!["8"]);
        assert_eq!(
            render_text(Report::Normalize, &values, &calculation),
            vec!["\"5,3\" -> 5.3", "\"1.7\" -> 1.7", "\"0 1\" -> 1"]
        );
    }

    #[test]
    fn test_strict_failure_exit_code() {
        let code = run(
            Report::Sum,
            &strings(&["1", "one"]),
            ValidationMode::Strict,
            OutputFormat::Json,
        );
        assert_eq!(code, ExitCode::InvalidInput);
    }
}
