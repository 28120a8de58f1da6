//! National ID parsing.
//!
//! Layout of the 14 ASCII digits:
//!
//! ```text
//! 2 98 12 25 12 3456 7
//! | |  |  |  |  |    check digit (not verified)
//! | |  |  |  |  serial
//! | |  |  |  governorate code
//! | |  |  day
//! | |  month
//! | two-digit year
//! century digit (2 = 1900s, 3 = 2000s)
//! ```

use super::types::Rejection;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::BTreeSet;

/// Number of digits in a national ID.
pub const NATIONAL_ID_LEN: usize = 14;

/// Fields derived from a valid national ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NationalId {
    /// 1900 or 2000, from the century digit.
    pub century_base: i32,
    /// Birth date encoded at positions 1-6.
    pub birth_date: NaiveDate,
    /// Two-digit governorate code at positions 7-8.
    pub governorate: String,
}

impl NationalId {
    /// Birth year (century base plus the two-digit year).
    pub fn birth_year(&self) -> i32 {
        self.birth_date.year()
    }
}

/// Parse `input` in stages, stopping at the first failure.
pub(super) fn parse(
    input: &str,
    governorates: &BTreeSet<String>,
) -> Result<NationalId, Rejection> {
    let actual = input.chars().count();
    if actual != NATIONAL_ID_LEN {
        return Err(Rejection::WrongLength {
            expected: NATIONAL_ID_LEN,
            actual,
        });
    }

    let digits = input.as_bytes();
    if !digits.iter().all(u8::is_ascii_digit) {
        return Err(Rejection::NonDigit);
    }

    let century_base = match digits[0] {
        b'2' => 1900,
        b'3' => 2000,
        other => return Err(Rejection::UnknownCentury(char::from(other))),
    };

    let year = century_base + two_digits(&digits[1..3]) as i32;
    let month = two_digits(&digits[3..5]);
    let day = two_digits(&digits[5..7]);

    let birth_date =
        NaiveDate::from_ymd_opt(year, month, day).ok_or(Rejection::InvalidDate { year, month, day })?;

    // All bytes are ASCII digits, so byte slicing lands on char boundaries.
    let governorate = &input[7..9];
    if !governorates.contains(governorate) {
        return Err(Rejection::UnknownGovernorate(governorate.to_string()));
    }

    Ok(NationalId {
        century_base,
        birth_date,
        governorate: governorate.to_string(),
    })
}

fn two_digits(pair: &[u8]) -> u32 {
    u32::from(pair[0] - b'0') * 10 + u32::from(pair[1] - b'0')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::default_governorate_codes;

    fn governorates() -> BTreeSet<String> {
        default_governorate_codes().into_iter().collect()
    }

    #[test]
    fn parses_derived_fields() {
        let id = parse("29812251234567", &governorates()).unwrap();
        assert_eq!(id.century_base, 1900);
        assert_eq!(id.birth_date, NaiveDate::from_ymd_opt(1998, 12, 25).unwrap());
        assert_eq!(id.birth_year(), 1998);
        assert_eq!(id.governorate, "12");
    }

    #[test]
    fn century_three_maps_to_2000s() {
        let id = parse("30501010112345", &governorates()).unwrap();
        assert_eq!(id.century_base, 2000);
        assert_eq!(id.birth_date, NaiveDate::from_ymd_opt(2005, 1, 1).unwrap());
        assert_eq!(id.governorate, "01");
    }

    #[test]
    fn length_is_counted_in_characters() {
        // 13 ASCII digits plus one two-byte character: 15 bytes, 14 chars.
        let err = parse("2981225123456é", &governorates()).unwrap_err();
        assert_eq!(err, Rejection::NonDigit);
    }

    #[test]
    fn two_digits_reads_decimal_pairs() {
        assert_eq!(two_digits(b"00"), 0);
        assert_eq!(two_digits(b"07"), 7);
        assert_eq!(two_digits(b"99"), 99);
    }
}
