//! Verdict rendering for check commands.

use idcheck::error::{IdCheckError, Result};
use idcheck::{Field, NationalId, Validator};
use serde::Serialize;

/// Outcome of checking one value.
#[derive(Debug, Serialize)]
pub struct Verdict {
    pub field: Field,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub national_id: Option<NationalId>,
}

impl Verdict {
    /// Check `value` as `field`.
    pub fn evaluate(validator: &Validator, field: Field, value: &str) -> Self {
        let outcome = validator.inspect(field, Some(value));

        Self {
            field,
            valid: outcome.is_ok(),
            reason: outcome.as_ref().err().map(|r| r.to_string()),
            national_id: outcome.ok().flatten(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| IdCheckError::UserError(format!("failed to serialize verdict: {}", e)))
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.reason {
            None => write!(f, "valid"),
            Some(reason) => write!(f, "invalid: {}", reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use idcheck::Rules;

    #[test]
    fn valid_email_renders_valid() {
        let verdict = Verdict::evaluate(&Validator::default(), Field::Email, "user@example.com");
        assert!(verdict.valid);
        assert!(verdict.reason.is_none());
        assert_eq!(verdict.to_string(), "valid");
    }

    #[test]
    fn rejected_phone_renders_reason() {
        let verdict = Verdict::evaluate(&Validator::default(), Field::PhoneNumber, "01812345678");
        assert!(!verdict.valid);
        assert_eq!(verdict.to_string(), "invalid: unknown operator code '18'");
    }

    #[test]
    fn empty_value_is_rejected() {
        let verdict = Verdict::evaluate(&Validator::default(), Field::Username, "");
        assert!(!verdict.valid);
        assert_eq!(verdict.to_string(), "invalid: value is empty or absent");
    }

    #[test]
    fn national_id_json_includes_derived_fields() {
        let verdict =
            Verdict::evaluate(&Validator::default(), Field::NationalId, "29812251234567");
        let json: serde_json::Value = serde_json::from_str(&verdict.to_json().unwrap()).unwrap();

        assert_eq!(json["field"], "national_id");
        assert_eq!(json["valid"], true);
        assert!(json.get("reason").is_none());
        assert_eq!(json["national_id"]["birth_date"], "1998-12-25");
        assert_eq!(json["national_id"]["governorate"], "12");
        assert_eq!(json["national_id"]["century_base"], 1900);
    }

    #[test]
    fn rejected_national_id_json_has_reason_only() {
        let verdict =
            Verdict::evaluate(&Validator::default(), Field::NationalId, "19812251234567");
        let json: serde_json::Value = serde_json::from_str(&verdict.to_json().unwrap()).unwrap();

        assert_eq!(json["valid"], false);
        assert_eq!(json["reason"], "unknown century digit '1'");
        assert!(json.get("national_id").is_none());
    }

    #[test]
    fn custom_rules_change_the_verdict() {
        let rules = Rules {
            operator_codes: vec!["18".to_string()],
            ..Default::default()
        };
        let validator = Validator::new(&rules).unwrap();

        let verdict = Verdict::evaluate(&validator, Field::PhoneNumber, "01812345678");
        assert!(verdict.valid);
    }
}
