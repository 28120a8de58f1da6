//! Rules loading, validation, and serialization.

use super::model::Rules;
use crate::error::{IdCheckError, Result};
use std::collections::BTreeSet;
use std::path::Path;

impl Rules {
    /// Load rules from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Rules)` - Successfully loaded and validated rules
    /// * `Err(IdCheckError::UserError)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            IdCheckError::UserError(format!(
                "failed to read rules file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse rules from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let rules: Rules = serde_yaml::from_str(yaml)
            .map_err(|e| IdCheckError::UserError(format!("failed to parse rules YAML: {}", e)))?;

        rules.validate()?;
        Ok(rules)
    }

    /// Serialize rules to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| IdCheckError::UserError(format!("failed to serialize rules to YAML: {}", e)))
    }

    /// Validate rule values.
    ///
    /// - every code is exactly two ASCII digits, with no duplicates per table
    /// - `username_min_len` is at least 1 and not above `username_max_len`
    pub fn validate(&self) -> Result<()> {
        check_code_table("operator_codes", &self.operator_codes)?;
        check_code_table("governorate_codes", &self.governorate_codes)?;

        if self.username_min_len == 0 {
            return Err(IdCheckError::UserError(
                "rules validation failed: username_min_len must be greater than 0".to_string(),
            ));
        }

        if self.username_min_len > self.username_max_len {
            return Err(IdCheckError::UserError(format!(
                "rules validation failed: username_min_len ({}) exceeds username_max_len ({})",
                self.username_min_len, self.username_max_len
            )));
        }

        Ok(())
    }
}

fn check_code_table(name: &str, codes: &[String]) -> Result<()> {
    let mut seen = BTreeSet::new();

    for code in codes {
        if code.len() != 2 || !code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(IdCheckError::UserError(format!(
                "rules validation failed: {} entries must be two ASCII digits (found '{}')",
                name, code
            )));
        }
        if !seen.insert(code.as_str()) {
            return Err(IdCheckError::UserError(format!(
                "rules validation failed: duplicate entry '{}' in {}",
                code, name
            )));
        }
    }

    Ok(())
}
