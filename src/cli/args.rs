//! CLI argument parsing using clap.
//!
//! Contains the Cli struct and the Commands enum.

use clap::{
    Args, Parser, Subcommand,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::path::PathBuf;

use crate::calculator::ValidationMode;

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

const AFTER_HELP: &str = "Examples:
  $ squaresum square 2 3              # (2 + 3)² = 25.0000000000
  $ squaresum sum 5,3 1.7 \"0 1\"       # 8
  $ squaresum square --strict 4 x     # reject malformed text
  $ squaresum eval '[2, \"5,3\", true]' # mixed JSON values
  $ squaresum interactive             # prompt for a and b";

/// Square-of-sum calculator
#[derive(Parser, Debug)]
#[command(
    name = "squaresum",
    version = env!("CARGO_PKG_VERSION"),
    about = "Normalize numeric text, sum it, and square the sum",
    long_about = "Sums numbers and numeric text (',' or '.' as decimal separator, \
                  whitespace ignored) and prints the square of the sum with ten \
                  fractional digits. Malformed text counts as zero unless --strict is set.",
    styles = clap_cargo_style(),
    after_help = AFTER_HELP
)]
pub struct Cli {
    /// Path to custom settings.toml file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit a JSON envelope instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Values plus the validation override shared by the calculation commands.
#[derive(Args, Debug, Clone)]
pub struct ValueArgs {
    /// Reject malformed text instead of treating it as zero
    #[arg(long)]
    pub strict: bool,

    /// Numbers or numeric text; none means (0, 0)
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<String>,
}

impl ValueArgs {
    /// `--strict` wins over the configured mode.
    pub fn mode(&self, configured: ValidationMode) -> ValidationMode {
        resolve_mode(self.strict, configured)
    }
}

/// Apply a `--strict` flag on top of the configured validation mode.
pub fn resolve_mode(strict: bool, configured: ValidationMode) -> ValidationMode {
    if strict {
        ValidationMode::Strict
    } else {
        configured
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the square of the sum of VALUES
    Square(ValueArgs),

    /// Print the sum of VALUES
    Sum(ValueArgs),

    /// Show how each value is normalized
    Normalize(ValueArgs),

    /// Evaluate a JSON array of numbers, text, booleans and nulls
    Eval {
        /// JSON document, or '-' to read stdin
        input: String,

        /// Reject malformed text instead of treating it as zero
        #[arg(long)]
        strict: bool,
    },

    /// Prompt for two values repeatedly and print the square of their sum
    Interactive {
        /// Reject malformed text instead of treating it as zero
        #[arg(long)]
        strict: bool,
    },

    /// Create .squaresum/settings.toml in the current directory
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Display active settings
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_negative_numbers_are_values() {
        let cli = Cli::try_parse_from(["squaresum", "square", "-4", "-2"]).unwrap();
        match cli.command {
            Commands::Square(args) => assert_eq!(args.values, vec!["-4", "-2"]),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_strict_and_global_flags() {
        let cli =
            Cli::try_parse_from(["squaresum", "sum", "--strict", "1", "x", "--json"]).unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Sum(args) => {
                assert!(args.strict);
                assert_eq!(args.mode(ValidationMode::Lenient), ValidationMode::Strict);
                assert_eq!(args.values, vec!["1", "x"]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_no_values_is_allowed() {
        let cli = Cli::try_parse_from(["squaresum", "square"]).unwrap();
        match cli.command {
            Commands::Square(args) => {
                assert!(args.values.is_empty());
                assert_eq!(args.mode(ValidationMode::Lenient), ValidationMode::Lenient);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
