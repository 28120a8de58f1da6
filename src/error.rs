//! Error types for idcheck.
//!
//! The four validation predicates never return errors; a rejected value is a
//! `false` verdict. These errors cover loading rules and the CLI boundary.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for idcheck operations.
#[derive(Error, Debug)]
pub enum IdCheckError {
    /// User provided invalid arguments or an invalid rules file.
    #[error("{0}")]
    UserError(String),

    /// A checked value was rejected.
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl IdCheckError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            IdCheckError::UserError(_) => exit_codes::USER_ERROR,
            IdCheckError::ValidationError(_) => exit_codes::VALIDATION_FAILURE,
        }
    }
}

/// Result type alias for idcheck operations.
pub type Result<T> = std::result::Result<T, IdCheckError>;
