//! idcheck CLI entry point.
//!
//! Parses arguments, installs logging, dispatches to the command handler,
//! and maps errors to exit codes.

mod cli;
mod commands;

use cli::Cli;
use idcheck::error::IdCheckError;
use idcheck::exit_codes;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    match commands::dispatch(&cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            if let Some(message) = stderr_message(&err) {
                eprintln!("{}", message);
            }
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

/// Message for stderr, if any. A rejected value's verdict is already on stdout.
fn stderr_message(err: &IdCheckError) -> Option<String> {
    match err {
        IdCheckError::ValidationError(_) => None,
        _ => Some(format!("Error: {}", err)),
    }
}

/// Log to stderr. `--verbose` overrides `RUST_LOG`.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("idcheck=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_is_not_repeated_on_stderr() {
        let err = IdCheckError::ValidationError("email: value is empty or absent".to_string());
        assert_eq!(stderr_message(&err), None);
    }

    #[test]
    fn user_error_is_reported_on_stderr() {
        let err = IdCheckError::UserError("failed to parse rules YAML".to_string());
        assert_eq!(
            stderr_message(&err).as_deref(),
            Some("Error: failed to parse rules YAML")
        );
    }
}
