//! Interactive prompt: read `a` and `b`, print `(a + b)²`, repeat.
//!
//! Ends on end-of-input or when `q`/`quit` is entered for `a`.

use std::io::{BufRead, Write};

use crate::calculator::{Argument, Calculator, ValidationMode};
use crate::io::ExitCode;

const PRECISION_NOTE: &str = "The output is rounded to the precision of 10 decimal points";

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> std::io::Result<Option<String>> {
    write!(output, "Insert argument {label}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn is_quit(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "q" | "quit" | "exit")
}

/// Run the prompt loop over arbitrary streams, returning the number of results printed.
pub fn run_session<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    mode: ValidationMode,
) -> std::io::Result<usize> {
    writeln!(output, "Square of sum calculator\n")?;
    let mut answered = 0;

    loop {
        let Some(a) = prompt(&mut input, &mut output, "a")? else {
            break;
        };
        if is_quit(&a) {
            break;
        }
        let Some(b) = prompt(&mut input, &mut output, "b")? else {
            break;
        };

        let calculator =
            Calculator::new(vec![Argument::Text(a.clone()), Argument::Text(b.clone())])
                .with_mode(mode);
        match calculator.square_of_sum() {
            Ok(result) => {
                let a = if a.trim().is_empty() { "0" } else { a.as_str() };
                let b = if b.trim().is_empty() { "0" } else { b.as_str() };
                writeln!(output, "({a} + {b})\u{00B2} = {result}\n")?;
                answered += 1;
            }
            Err(e) => writeln!(output, "Error: {e}\n")?,
        }
        writeln!(output, "{PRECISION_NOTE}")?;
        writeln!(output, "To quit, enter 'q' or press Ctrl + D\n")?;
    }

    tracing::debug!(answered, "interactive session finished");
    Ok(answered)
}

pub fn run(mode: ValidationMode) -> ExitCode {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    match run_session(stdin.lock(), stdout.lock(), mode) {
        Ok(_) => ExitCode::Success,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::GeneralError
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(script: &str, mode: ValidationMode) -> (usize, String) {
        let mut output = Vec::new();
        let answered = run_session(Cursor::new(script), &mut output, mode).unwrap();
        (answered, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_two_rounds_then_eof() {
        let (answered, out) = session("2\n3\n5,3\n1.7\n", ValidationMode::Lenient);
        assert_eq!(answered, 2);
        assert!(out.contains("(2 + 3)\u{00B2} = 25.0000000000"));
        assert!(out.contains("(5,3 + 1.7)\u{00B2} = 49.0000000000"));
        assert!(out.contains(PRECISION_NOTE));
    }

    #[test]
    fn test_blank_inputs_show_as_zero() {
        let (answered, out) = session("\n\nq\n", ValidationMode::Lenient);
        assert_eq!(answered, 1);
        assert!(out.contains("(0 + 0)\u{00B2} = 0.0000000000"));
    }

    #[test]
    fn test_quit_before_any_input() {
        let (answered, out) = session("quit\n", ValidationMode::Lenient);
        assert_eq!(answered, 0);
        assert!(out.starts_with("Square of sum calculator"));
    }

    #[test]
    fn test_strict_mode_reports_and_continues() {
        let (answered, out) = session("abc\n1\n1\n1\n", ValidationMode::Strict);
        assert_eq!(answered, 1);
        assert!(out.contains("Error: Argument 0 is not a well-formed number: 'abc'"));
        assert!(out.contains("(1 + 1)\u{00B2} = 4.0000000000"));
    }
}
