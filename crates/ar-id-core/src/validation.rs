//! # Validation Module
//!
//! Low-level building blocks shared by every identification rule set.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Building Blocks                                    │
//! │                                                                         │
//! │  raw "AR20-12345678-6"                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  strip_country_prefix   → "20-12345678-6"                              │
//! │       │                                                                 │
//! │       ├──► has_only_allowed_characters  (digits - . whitespace)        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  normalize              → "20123456786"                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  is_valid_cuit          → compute_check_digit(first 10) == last        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use ar_id_core::validation::{is_valid_cuit, normalize};
//!
//! let digits = normalize("20-12345678-6");
//! assert_eq!(digits, "20123456786");
//! assert!(is_valid_cuit(&digits));
//! ```

use crate::error::{ValidationError, ValidationResult};

/// Country prefix the host may prepend to identifiers.
pub const COUNTRY_PREFIX: &str = "AR";

/// Number of digits in a CUIT/CUIL, check digit included.
pub const CUIT_LENGTH: usize = 11;

/// Positional weights of the official CUIT/CUIL check digit rule.
pub const CHECK_DIGIT_WEIGHTS: [u32; 10] = [5, 4, 3, 2, 7, 6, 5, 4, 3, 2];

// =============================================================================
// String Helpers
// =============================================================================

/// Strips every character that is not an ASCII digit.
///
/// Does not check length or checksum. Idempotent.
///
/// ## Example
/// ```rust
/// use ar_id_core::validation::normalize;
///
/// assert_eq!(normalize("20.12345678.6"), "20123456786");
/// assert_eq!(normalize("abc"), "");
/// ```
pub fn normalize(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Removes a leading `AR` prefix.
///
/// Only an exact, case-sensitive match at position 0 is removed. An `AR`
/// further inside the string is left for the later stages.
pub fn strip_country_prefix(input: &str) -> &str {
    input.strip_prefix(COUNTRY_PREFIX).unwrap_or(input)
}

/// Checks that the input holds only digits, hyphens, periods and whitespace.
///
/// An empty input is rejected.
///
/// ## Example
/// ```rust
/// use ar_id_core::validation::has_only_allowed_characters;
///
/// assert!(has_only_allowed_characters("20 12345678-6"));
/// assert!(!has_only_allowed_characters("20x12345678"));
/// assert!(!has_only_allowed_characters(""));
/// ```
pub fn has_only_allowed_characters(input: &str) -> bool {
    !input.is_empty()
        && input
            .chars()
            .all(|c| c.is_ascii_digit() || c == '-' || c == '.' || c.is_whitespace())
}

// =============================================================================
// Check Digit
// =============================================================================

/// Computes the CUIT/CUIL check digit of ten leading digits.
///
/// ## Rule
/// ```text
/// sum   = Σ weight[i] * digit[i]      weights 5 4 3 2 7 6 5 4 3 2
/// delta = 11 - (sum mod 11)
///
/// delta == 11 → 0
/// delta == 10 → 9
/// otherwise   → delta
/// ```
///
/// ## Example
/// ```rust
/// use ar_id_core::validation::compute_check_digit;
///
/// assert_eq!(compute_check_digit(&[2, 0, 1, 2, 3, 4, 5, 6, 7, 8]), Ok(6));
/// assert!(compute_check_digit(&[2, 0]).is_err());
/// ```
pub fn compute_check_digit(ten_digits: &[u8]) -> ValidationResult<u8> {
    if ten_digits.len() != CHECK_DIGIT_WEIGHTS.len() {
        return Err(ValidationError::CheckDigitInput {
            len: ten_digits.len(),
        });
    }

    let mut sum = 0u32;
    let weighted = ten_digits.iter().zip(CHECK_DIGIT_WEIGHTS.iter());
    for (position, (&digit, &weight)) in weighted.enumerate() {
        if digit > 9 {
            return Err(ValidationError::NotADigit {
                position,
                value: digit,
            });
        }
        sum += weight * u32::from(digit);
    }

    let digit = match 11 - sum % 11 {
        11 => 0,
        10 => 9,
        delta => delta as u8,
    };

    Ok(digit)
}

/// Returns `(expected, supplied)` check digits of a normalized CUIT.
///
/// Everything but the last digit feeds the check digit rule, so inputs that
/// are not 11 digits long surface as `CheckDigitInput`.
pub(crate) fn check_digits(normalized: &str) -> ValidationResult<(u8, u8)> {
    let digits = to_digits(normalized)?;
    let Some((&supplied, leading)) = digits.split_last() else {
        return Err(ValidationError::CheckDigitInput { len: 0 });
    };

    let expected = compute_check_digit(leading)?;
    Ok((expected, supplied))
}

/// Converts a digit string into digit values.
fn to_digits(normalized: &str) -> ValidationResult<Vec<u8>> {
    normalized
        .bytes()
        .enumerate()
        .map(|(position, b)| match b {
            b'0'..=b'9' => Ok(b - b'0'),
            other => Err(ValidationError::NotADigit {
                position,
                value: other,
            }),
        })
        .collect()
}

/// Checks the length and check digit of a normalized CUIT/CUIL.
///
/// Returns `false` for anything that is not exactly 11 ASCII digits.
///
/// ## Example
/// ```rust
/// use ar_id_core::validation::is_valid_cuit;
///
/// assert!(is_valid_cuit("20123456786"));
/// assert!(!is_valid_cuit("20123456780"));
/// assert!(!is_valid_cuit("2012345678"));
/// ```
pub fn is_valid_cuit(normalized: &str) -> bool {
    if normalized.len() != CUIT_LENGTH {
        return false;
    }

    matches!(check_digits(normalized), Ok((expected, actual)) if expected == actual)
}

// =============================================================================
// Unit Tests
// =============================================================================
