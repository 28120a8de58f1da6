//! Command implementations for idcheck.
//!
//! Routes CLI commands to their handlers. Every check command loads the
//! rules, builds a validator, prints a verdict, and turns a rejection into
//! a validation error so the process exits with code 2.

mod report;

use crate::cli::{Cli, Command};
use idcheck::error::{IdCheckError, Result};
use idcheck::{Field, Rules, Validator};
use report::Verdict;

/// Dispatch a command to its implementation.
pub fn dispatch(cli: &Cli) -> Result<()> {
    match &cli.command {
        Command::Email(args) => cmd_check(cli, Field::Email, &args.value),
        Command::Username(args) => cmd_check(cli, Field::Username, &args.value),
        Command::Phone(args) => cmd_check(cli, Field::PhoneNumber, &args.value),
        Command::NationalId(args) => cmd_check(cli, Field::NationalId, &args.value),
        Command::Rules => cmd_rules(cli),
    }
}

fn load_rules(cli: &Cli) -> Result<Rules> {
    match &cli.rules {
        Some(path) => Rules::load(path),
        None => Ok(Rules::default()),
    }
}

fn cmd_check(cli: &Cli, field: Field, value: &str) -> Result<()> {
    let validator = Validator::new(&load_rules(cli)?)?;
    let verdict = Verdict::evaluate(&validator, field, value);

    if cli.json {
        println!("{}", verdict.to_json()?);
    } else {
        println!("{}", verdict);
    }

    match verdict.reason {
        None => Ok(()),
        Some(reason) => Err(IdCheckError::ValidationError(format!(
            "{}: {}",
            field, reason
        ))),
    }
}

fn cmd_rules(cli: &Cli) -> Result<()> {
    print!("{}", render_rules(cli)?);
    Ok(())
}

fn render_rules(cli: &Cli) -> Result<String> {
    load_rules(cli)?.to_yaml()
}
