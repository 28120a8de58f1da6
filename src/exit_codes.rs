//! Exit code constants for the idcheck CLI.
//!
//! - 0: Success (value accepted, or a non-validating command completed)
//! - 1: User error (bad args, unreadable or invalid rules file)
//! - 2: Validation failure (value rejected)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or an invalid rules file.
pub const USER_ERROR: i32 = 1;

/// Validation failure: the checked value was rejected.
pub const VALIDATION_FAILURE: i32 = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, VALIDATION_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn exit_codes_have_expected_values() {
        assert_eq!(SUCCESS, 0);
        assert_eq!(USER_ERROR, 1);
        assert_eq!(VALIDATION_FAILURE, 2);
    }
}
