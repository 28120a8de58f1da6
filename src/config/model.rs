//! Rules struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Validation rules.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    // =========================================================================
    // Phone settings
    // =========================================================================
    /// Two-digit mobile operator codes.
    #[serde(default = "default_operator_codes")]
    pub operator_codes: Vec<String>,

    // =========================================================================
    // National ID settings
    // =========================================================================
    /// Two-digit governorate codes.
    #[serde(default = "default_governorate_codes")]
    pub governorate_codes: Vec<String>,

    // =========================================================================
    // Username settings
    // =========================================================================
    /// Minimum username length in characters.
    #[serde(default = "default_username_min_len")]
    pub username_min_len: usize,

    /// Maximum username length in characters.
    #[serde(default = "default_username_max_len")]
    pub username_max_len: usize,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            operator_codes: default_operator_codes(),
            governorate_codes: default_governorate_codes(),
            username_min_len: default_username_min_len(),
            username_max_len: default_username_max_len(),
        }
    }
}
