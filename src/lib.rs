//! idcheck: syntactic validation of user identity fields.
//!
//! Validates email addresses, usernames, mobile phone numbers, and national
//! ID numbers for one country's numbering plan. Each predicate is pure and
//! total: absent or malformed input yields `false`, never an error.
//!
//! ```
//! use idcheck::{validate_national_id, validate_username};
//!
//! assert!(validate_username(Some("ramy_gomaa")));
//! assert!(validate_national_id(Some("29812251234567")));
//! assert!(!validate_national_id(Some("19812251234567")));
//! ```

pub mod config;
pub mod error;
pub mod exit_codes;
pub mod validate;

pub use config::Rules;
pub use validate::{
    Field, NationalId, Rejection, Validator, validate_email, validate_national_id,
    validate_phone_number, validate_username,
};
