//! Field validation for idcheck.
//!
//! Four independent predicates decide whether a user-supplied value is
//! syntactically well formed:
//! - email address
//! - username
//! - phone number (optional `0` / `20` / `+20` prefix, operator code, 8 digits)
//! - national ID (14 digits encoding birth date and governorate)
//!
//! Every predicate is total: `None` and `Some("")` are ordinary inputs whose
//! verdict is `false`. The `check_*` methods on [`Validator`] return the
//! [`Rejection`] behind a `false` verdict.

mod national_id;
mod patterns;
mod types;
mod validator;


use std::sync::LazyLock;

// Re-export public API
pub use national_id::NationalId;
pub use types::{Field, Rejection};
pub use validator::Validator;

static DEFAULT_VALIDATOR: LazyLock<Validator> = LazyLock::new(Validator::default);

/// Validate an email address against the built-in rules.
///
/// ```
/// use idcheck::validate_email;
///
/// assert!(validate_email(Some("user@mail.company.com")));
/// assert!(!validate_email(Some("user@mail.c")));
/// assert!(!validate_email(None));
/// ```
pub fn validate_email(input: Option<&str>) -> bool {
    DEFAULT_VALIDATOR.validate_email(input)
}

/// Validate a username (3-20 letters, digits or underscores).
pub fn validate_username(input: Option<&str>) -> bool {
    DEFAULT_VALIDATOR.validate_username(input)
}

/// Validate a mobile phone number against the built-in operator codes.
///
/// ```
/// use idcheck::validate_phone_number;
///
/// assert!(validate_phone_number(Some("01012345678")));
/// assert!(validate_phone_number(Some("+201512345678")));
/// assert!(!validate_phone_number(Some("01812345678")));
/// ```
pub fn validate_phone_number(input: Option<&str>) -> bool {
    DEFAULT_VALIDATOR.validate_phone_number(input)
}

/// Validate a national ID against the built-in governorate codes.
pub fn validate_national_id(input: Option<&str>) -> bool {
    DEFAULT_VALIDATOR.validate_national_id(input)
}
