use clap::Parser;

use squaresum::cli::{Cli, Commands, commands};
use squaresum::config::{ConfigError, Settings};
use squaresum::io::{Envelope, OutputFormat};
use squaresum::logging;

fn load_settings(cli: &Cli) -> Result<Settings, ConfigError> {
    // Init writes the file, so it must not depend on an existing one.
    if matches!(cli.command, Commands::Init { .. }) {
        return Ok(Settings::default());
    }

    match &cli.config {
        Some(path) if !path.exists() => Err(ConfigError::Missing(path.clone())),
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    }
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            let format = OutputFormat::from_flag(cli.json, OutputFormat::Text);
            let envelope = Envelope::<()>::from_config_error(&e);
            if format.is_json() {
                if let Ok(json) = envelope.to_json() {
                    println!("{json}");
                }
            } else {
                eprintln!("Configuration error: {e}");
            }
            return std::process::ExitCode::from(envelope.exit_code);
        }
    };

    logging::init_with_config(&settings.logging);
    if cli.config.is_none() {
        match Settings::check_init() {
            Ok(()) => tracing::debug!("using workspace settings"),
            Err(e) => tracing::debug!("no workspace settings ({e}), using defaults"),
        }
    }

    let format = OutputFormat::from_flag(cli.json, settings.output.format);
    commands::dispatch(cli.command, &settings, format).into()
}
