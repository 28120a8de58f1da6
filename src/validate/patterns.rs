//! Compiled field grammars.
//!
//! Every pattern is anchored at both ends so a match always covers the whole
//! input. Digit classes are spelled `[0-9]` because `\d` also matches
//! non-ASCII digits.

use regex::Regex;
use std::sync::LazyLock;

/// Local part, `@`, one or more domain labels, then a TLD of 2+ letters.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+(?:\.[a-zA-Z0-9-]+)*\.[a-zA-Z]{2,}$")
        .expect("EMAIL_REGEX is a valid regex pattern")
});

static USERNAME_CHARSET_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9_]+$").expect("USERNAME_CHARSET_REGEX is a valid regex pattern")
});

/// Optional `+20` / `20` / `0` prefix, operator code (captured), 8 digits.
///
/// Each prefix gives a distinct total length (10, 11, 12, 13), so the
/// captured operator code is unambiguous.
static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\+?20|0)?([0-9]{2})[0-9]{8}$").expect("PHONE_REGEX is a valid regex pattern")
});

pub(super) fn is_email(input: &str) -> bool {
    EMAIL_REGEX.is_match(input)
}

pub(super) fn is_username_charset(input: &str) -> bool {
    USERNAME_CHARSET_REGEX.is_match(input)
}

/// Return the operator code if `input` has the shape of a phone number.
pub(super) fn phone_operator_code(input: &str) -> Option<&str> {
    PHONE_REGEX
        .captures(input)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
