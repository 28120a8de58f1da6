//! Rules model for idcheck.
//!
//! This module defines the `Rules` struct holding the country-specific tables
//! (operator codes, governorate codes) and the username length bounds. Rules
//! can be loaded from YAML; unknown fields are ignored and missing fields fall
//! back to the built-in numbering plan.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Rules;
