//! CLI argument parsing for idcheck.
//!
//! Uses clap derive macros for declarative argument definitions.
//! Implementations live in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// idcheck: validate email, username, phone number, and national ID values.
///
/// Exits 0 when the value is valid, 2 when it is rejected, and 1 on bad
/// arguments or an invalid rules file.
#[derive(Parser, Debug)]
#[command(name = "idcheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Rules YAML file overriding the built-in operator and governorate codes.
    #[arg(long, global = true, value_name = "PATH")]
    pub rules: Option<PathBuf>,

    /// Print the verdict as a JSON object.
    #[arg(long, global = true)]
    pub json: bool,

    /// Log rejection reasons to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for idcheck.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check an email address.
    Email(ValueArgs),

    /// Check a username (letters, digits, underscores).
    Username(ValueArgs),

    /// Check a mobile phone number (0, 20 or +20 prefix).
    #[command(alias = "phone-number")]
    Phone(ValueArgs),

    /// Check a 14-digit national ID.
    ///
    /// With `--json`, a valid ID also reports its birth date and governorate.
    #[command(alias = "nid")]
    NationalId(ValueArgs),

    /// Print the effective rules as YAML.
    Rules,
}

/// The value to check.
#[derive(Parser, Debug)]
pub struct ValueArgs {
    /// Value to validate (quote it if it contains spaces).
    #[arg(allow_hyphen_values = true)]
    pub value: String,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_email() {
        let cli = Cli::try_parse_from(["idcheck", "email", "user@example.com"]).unwrap();
        if let Command::Email(args) = cli.command {
            assert_eq!(args.value, "user@example.com");
        } else {
            panic!("Expected Email command");
        }
        assert!(!cli.json);
        assert!(!cli.verbose);
        assert!(cli.rules.is_none());
    }

    #[test]
    fn parse_phone_with_plus() {
        let cli = Cli::try_parse_from(["idcheck", "phone", "+201012345678"]).unwrap();
        if let Command::Phone(args) = cli.command {
            assert_eq!(args.value, "+201012345678");
        } else {
            panic!("Expected Phone command");
        }
    }

    #[test]
    fn parse_phone_alias() {
        let cli = Cli::try_parse_from(["idcheck", "phone-number", "01012345678"]).unwrap();
        assert!(matches!(cli.command, Command::Phone(_)));
    }

    #[test]
    fn parse_national_id_with_global_flags() {
        let cli = Cli::try_parse_from([
            "idcheck",
            "national-id",
            "29812251234567",
            "--json",
            "--rules",
            "rules.yaml",
            "-v",
        ])
        .unwrap();
        assert!(cli.json);
        assert!(cli.verbose);
        assert_eq!(cli.rules, Some(PathBuf::from("rules.yaml")));
        assert!(matches!(cli.command, Command::NationalId(_)));
    }

    #[test]
    fn parse_nid_alias() {
        let cli = Cli::try_parse_from(["idcheck", "nid", "29812251234567"]).unwrap();
        assert!(matches!(cli.command, Command::NationalId(_)));
    }

    #[test]
    fn parse_empty_value() {
        let cli = Cli::try_parse_from(["idcheck", "username", ""]).unwrap();
        if let Command::Username(args) = cli.command {
            assert!(args.value.is_empty());
        } else {
            panic!("Expected Username command");
        }
    }

    #[test]
    fn parse_rules() {
        let cli = Cli::try_parse_from(["idcheck", "rules"]).unwrap();
        assert!(matches!(cli.command, Command::Rules));
    }

    #[test]
    fn missing_value_is_an_error() {
        assert!(Cli::try_parse_from(["idcheck", "email"]).is_err());
    }
}
