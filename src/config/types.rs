//! Default rule tables.
//!
//! Both code tables follow one country's numbering plan and may drift as codes
//! are reissued. Override them with a rules file instead of editing these.

/// Mobile operator codes accepted after the optional `0` / `20` / `+20` prefix.
pub fn default_operator_codes() -> Vec<String> {
    ["10", "11", "12", "15"].iter().map(|s| s.to_string()).collect()
}

/// Governorate codes accepted at positions 7-8 of a national ID.
pub fn default_governorate_codes() -> Vec<String> {
    [
        "01", "02", "03", "04", // city governorates
        "11", "12", "13", "14", "15", "16", "17", "18", "19", // lower Egypt
        "21", "22", "23", "24", "25", "26", "27", "28", "29", // upper Egypt
        "31", "32", "33", "34", "35", // frontier governorates
        "88", // born abroad
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

// Default value functions for serde
pub(crate) fn default_username_min_len() -> usize {
    3
}
pub(crate) fn default_username_max_len() -> usize {
    20
}
