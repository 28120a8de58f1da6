//! Rules-bound validator.

use crate::config::Rules;
use crate::error::Result;
use std::collections::BTreeSet;

use super::national_id::{self, NationalId};
use super::patterns;
use super::types::{Field, Rejection};

/// Validator bound to a set of [`Rules`].
///
/// Immutable after construction, so one instance can be shared freely
/// between threads. Every method is total over its input and never panics.
#[derive(Debug, Clone)]
pub struct Validator {
    operator_codes: BTreeSet<String>,
    governorate_codes: BTreeSet<String>,
    username_min_len: usize,
    username_max_len: usize,
}

impl Default for Validator {
    /// Validator for the built-in numbering plan.
    fn default() -> Self {
        Self::from_rules(&Rules::default())
    }
}

impl Validator {
    /// Build a validator from rules.
    ///
    /// # Returns
    ///
    /// * `Ok(Validator)` - Rules passed validation
    /// * `Err(IdCheckError::UserError)` - Rules are malformed (see [`Rules::validate`])
    ///
    /// # Example
    ///
    /// ```
    /// use idcheck::{Rules, Validator};
    ///
    /// let rules = Rules {
    ///     operator_codes: vec!["10".to_string()],
    ///     ..Default::default()
    /// };
    /// let validator = Validator::new(&rules).unwrap();
    ///
    /// assert!(validator.validate_phone_number(Some("01012345678")));
    /// assert!(!validator.validate_phone_number(Some("01112345678")));
    /// ```
    pub fn new(rules: &Rules) -> Result<Self> {
        rules.validate()?;
        Ok(Self::from_rules(rules))
    }

    fn from_rules(rules: &Rules) -> Self {
        Self {
            operator_codes: rules.operator_codes.iter().cloned().collect(),
            governorate_codes: rules.governorate_codes.iter().cloned().collect(),
            username_min_len: rules.username_min_len,
            username_max_len: rules.username_max_len,
        }
    }

    // =========================================================================
    // Detailed checks
    // =========================================================================

    /// Check `input` as the given field.
    pub fn check(&self, field: Field, input: Option<&str>) -> std::result::Result<(), Rejection> {
        match field {
            Field::Email => self.check_email(input),
            Field::Username => self.check_username(input),
            Field::PhoneNumber => self.check_phone_number(input),
            Field::NationalId => self.check_national_id(input),
        }
    }

    pub fn check_email(&self, input: Option<&str>) -> std::result::Result<(), Rejection> {
        let input = present(input)?;
        if patterns::is_email(input) {
            Ok(())
        } else {
            Err(Rejection::Malformed)
        }
    }

    pub fn check_username(&self, input: Option<&str>) -> std::result::Result<(), Rejection> {
        let input = present(input)?;
        if !patterns::is_username_charset(input) {
            return Err(Rejection::InvalidCharacter);
        }

        // Charset is ASCII, so bytes == characters.
        let actual = input.len();
        if actual < self.username_min_len || actual > self.username_max_len {
            return Err(Rejection::LengthOutOfRange {
                min: self.username_min_len,
                max: self.username_max_len,
                actual,
            });
        }

        Ok(())
    }

    pub fn check_phone_number(&self, input: Option<&str>) -> std::result::Result<(), Rejection> {
        let input = present(input)?;
        let code = patterns::phone_operator_code(input).ok_or(Rejection::Malformed)?;
        if !self.operator_codes.contains(code) {
            return Err(Rejection::UnknownOperator(code.to_string()));
        }
        Ok(())
    }

    pub fn check_national_id(&self, input: Option<&str>) -> std::result::Result<(), Rejection> {
        self.parse_national_id(input).map(|_| ())
    }

    /// Parse a national ID into its derived fields.
    ///
    /// The fields are computed for this call only; nothing is cached.
    pub fn parse_national_id(
        &self,
        input: Option<&str>,
    ) -> std::result::Result<NationalId, Rejection> {
        national_id::parse(present(input)?, &self.governorate_codes)
    }

    // =========================================================================
    // Boolean predicates
    // =========================================================================

    /// Check `input` as `field`, logging the rejection if there is one.
    ///
    /// A valid national ID comes back with its derived fields.
    pub fn inspect(
        &self,
        field: Field,
        input: Option<&str>,
    ) -> std::result::Result<Option<NationalId>, Rejection> {
        let outcome = match field {
            Field::NationalId => self.parse_national_id(input).map(Some),
            _ => self.check(field, input).map(|()| None),
        };

        if let Err(reason) = &outcome {
            // The raw value stays out of the log.
            tracing::debug!(field = %field, reason = %reason, "value rejected");
        }

        outcome
    }

    /// `true` iff `input` is a well-formed value for `field`.
    pub fn validate(&self, field: Field, input: Option<&str>) -> bool {
        self.inspect(field, input).is_ok()
    }

    pub fn validate_email(&self, input: Option<&str>) -> bool {
        self.validate(Field::Email, input)
    }

    pub fn validate_username(&self, input: Option<&str>) -> bool {
        self.validate(Field::Username, input)
    }

    pub fn validate_phone_number(&self, input: Option<&str>) -> bool {
        self.validate(Field::PhoneNumber, input)
    }

    pub fn validate_national_id(&self, input: Option<&str>) -> bool {
        self.validate(Field::NationalId, input)
    }
}

/// Map absent and empty input to [`Rejection::Empty`].
fn present(input: Option<&str>) -> std::result::Result<&str, Rejection> {
    match input {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(Rejection::Empty),
    }
}
