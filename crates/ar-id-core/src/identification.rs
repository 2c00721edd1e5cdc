//! # Identification Module
//!
//! Rule sets and host entry points for CUIT/CUIL, DNI and other documents.
//!
//! ## Checkout Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Partner editor: Save                                                   │
//! │                                                                         │
//! │  operator types "20-12345678-0", type label "CUIT"                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  identification_check(raw, label)                                      │
//! │       │                                                                 │
//! │       ├── true  → normalize_identifier(raw) → save "20123456780"       │
//! │       │                                                                 │
//! │       └── false → cuit_details(raw) → popup with verdict.summary()     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## CUIT/CUIL Messages
//! Character set, length and check digit are all evaluated. The header message
//! comes first, then one line per failed character or length check. A wrong
//! check digit alone produces only the header.

use crate::error::ValidationResult;
use crate::types::{IdentificationKind, ValidationOutcome, Verdict};
use crate::validation::{
    check_digits, has_only_allowed_characters, normalize, strip_country_prefix, CUIT_LENGTH,
};

/// Accepted DNI lengths, in digits.
pub const DNI_LENGTHS: std::ops::RangeInclusive<usize> = 7..=8;

/// Minimum digit count for document types without their own rules.
pub const OTHER_MIN_DIGITS: usize = 6;

pub const CUIT_REQUIRED: &str = "CUIT/CUIL is required";
pub const CUIT_INVALID_CHARACTERS: &str = "Only digits, hyphens, periods and spaces are allowed";
pub const CUIT_INVALID_LENGTH: &str = "CUIT/CUIL must have exactly 11 digits";
pub const DNI_REQUIRED: &str = "DNI is required";
pub const DNI_INVALID_LENGTH: &str = "DNI must be 7 or 8 digits";
pub const OTHER_REQUIRED: &str = "Identifier is required";
pub const OTHER_TOO_SHORT: &str = "Identifier must have at least 6 digits";

fn cuit_valid_message(raw: &str) -> String {
    format!("CUIT/CUIL {raw} is valid")
}

fn cuit_invalid_message(raw: &str) -> String {
    format!("{raw} is not a valid CUIT/CUIL number")
}

fn is_blank(raw: &str) -> bool {
    raw.trim().is_empty()
}

// =============================================================================
// Rule Sets
// =============================================================================

fn try_validate_cuit(raw: &str) -> ValidationResult<Verdict> {
    let kind = IdentificationKind::Cuit;
    if is_blank(raw) {
        return Ok(Verdict::rejected(kind, raw, vec![CUIT_REQUIRED.to_string()]));
    }

    let candidate = strip_country_prefix(raw);
    let characters_ok = has_only_allowed_characters(candidate);
    let normalized = normalize(candidate);
    let length_ok = normalized.len() == CUIT_LENGTH;

    let checksum_ok = if length_ok {
        let (expected, actual) = check_digits(&normalized)?;
        expected == actual
    } else {
        false
    };

    if characters_ok && length_ok && checksum_ok {
        return Ok(Verdict::accepted(
            kind,
            raw,
            normalized,
            vec![cuit_valid_message(raw)],
        ));
    }

    let mut messages = vec![cuit_invalid_message(raw)];
    if !characters_ok {
        messages.push(CUIT_INVALID_CHARACTERS.to_string());
    }
    if !length_ok {
        messages.push(CUIT_INVALID_LENGTH.to_string());
    }

    Ok(Verdict::rejected(kind, raw, messages))
}

fn try_validate_dni(raw: &str) -> ValidationResult<Verdict> {
    let kind = IdentificationKind::Dni;
    if is_blank(raw) {
        return Ok(Verdict::rejected(kind, raw, vec![DNI_REQUIRED.to_string()]));
    }

    // Normalization leaves digits only, so the length is the whole rule.
    let normalized = normalize(strip_country_prefix(raw));
    if DNI_LENGTHS.contains(&normalized.len()) {
        Ok(Verdict::accepted(kind, raw, normalized, Vec::new()))
    } else {
        Ok(Verdict::rejected(kind, raw, vec![DNI_INVALID_LENGTH.to_string()]))
    }
}

fn try_validate_other(raw: &str) -> ValidationResult<Verdict> {
    let kind = IdentificationKind::Other;
    if is_blank(raw) {
        return Ok(Verdict::rejected(kind, raw, vec![OTHER_REQUIRED.to_string()]));
    }

    let normalized = normalize(strip_country_prefix(raw));
    if normalized.len() >= OTHER_MIN_DIGITS {
        Ok(Verdict::accepted(kind, raw, normalized, Vec::new()))
    } else {
        Ok(Verdict::rejected(kind, raw, vec![OTHER_TOO_SHORT.to_string()]))
    }
}

/// Runs the rule set of `kind` and settles internal faults.
fn details(kind: IdentificationKind, raw: Option<&str>) -> ValidationOutcome {
    let raw = raw.unwrap_or_default();
    let result = match kind {
        IdentificationKind::Cuit => try_validate_cuit(raw),
        IdentificationKind::Dni => try_validate_dni(raw),
        IdentificationKind::Other => try_validate_other(raw),
    };

    ValidationOutcome::settle(kind, raw, result)
}

// =============================================================================
// Verdict Entry Points
// =============================================================================

/// Validates a CUIT/CUIL and explains the result.
///
/// ## Example
/// ```rust
/// use ar_id_core::identification::validate_cuit;
///
/// let verdict = validate_cuit("20-12345678-6");
/// assert!(verdict.is_valid());
/// assert_eq!(verdict.formatted_value(), "20123456786");
///
/// let verdict = validate_cuit("1234567890");
/// assert!(!verdict.is_valid());
/// assert_eq!(verdict.messages().len(), 2);
/// ```
pub fn validate_cuit(raw: &str) -> Verdict {
    cuit_details(Some(raw)).into_verdict()
}

/// Validates a DNI: 7 or 8 digits after normalization.
///
/// ## Example
/// ```rust
/// use ar_id_core::identification::validate_dni;
///
/// assert!(validate_dni("12.345.678").is_valid());
/// assert!(!validate_dni("123456").is_valid());
/// ```
pub fn validate_dni(raw: &str) -> Verdict {
    dni_details(Some(raw)).into_verdict()
}

/// Validates an identifier of any other document type: at least 6 digits.
pub fn validate_other(raw: &str) -> Verdict {
    details(IdentificationKind::Other, Some(raw)).into_verdict()
}

/// Full CUIT/CUIL diagnostics for the host. Absent input is reported as required.
pub fn cuit_details(raw: Option<&str>) -> ValidationOutcome {
    details(IdentificationKind::Cuit, raw)
}

/// Full DNI diagnostics for the host. Absent input is reported as required.
pub fn dni_details(raw: Option<&str>) -> ValidationOutcome {
    details(IdentificationKind::Dni, raw)
}

/// Diagnostics for an identifier whose rule set is chosen from `type_label`.
///
/// See [`IdentificationKind::from_label`] for the classification.
pub fn identification_details(raw: Option<&str>, type_label: Option<&str>) -> ValidationOutcome {
    details(IdentificationKind::from_label(type_label), raw)
}

// =============================================================================
// Boolean Entry Points
// =============================================================================

/// Returns whether `raw` is a valid CUIT/CUIL.
pub fn cuit_check(raw: Option<&str>) -> bool {
    cuit_details(raw).is_valid()
}

/// Returns whether `raw` is a valid DNI.
pub fn dni_check(raw: Option<&str>) -> bool {
    dni_details(raw).is_valid()
}

/// Generic dispatcher used by the partner editor.
///
/// ## Routing
/// ```text
/// label contains "cuit" or "cuil"  → CUIT/CUIL rules
/// label contains "dni"             → DNI rules
/// anything else / no label         → at least 6 digits
/// ```
///
/// ## Example
/// ```rust
/// use ar_id_core::identification::identification_check;
///
/// assert!(identification_check(Some("20-12345678-6"), Some("CUIT")));
/// assert!(identification_check(Some("12345678"), Some("dni")));
/// assert!(identification_check(Some("AB123456"), Some("Passport")));
/// assert!(!identification_check(None, Some("CUIT")));
/// ```
pub fn identification_check(raw: Option<&str>, type_label: Option<&str>) -> bool {
    identification_details(raw, type_label).is_valid()
}

/// Digits-only form stored on the partner record.
///
/// Absent input gives an empty string. Does not validate.
pub fn normalize_identifier(raw: Option<&str>) -> String {
    raw.map(|raw| normalize(strip_country_prefix(raw)))
        .unwrap_or_default()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_cuit_valid() {
        let verdict = validate_cuit("20123456786");
        assert!(verdict.is_valid());
        assert_eq!(verdict.kind(), IdentificationKind::Cuit);
        assert_eq!(verdict.messages(), ["CUIT/CUIL 20123456786 is valid"]);
        assert_eq!(verdict.formatted_value(), "20123456786");
        assert_eq!(verdict.original_value(), "20123456786");
    }

    #[test]
    fn test_validate_cuit_formatting_invariance() {
        for raw in ["20-12345678-6", "20.12345678.6", "20 12345678 6", "20123456786"] {
            let verdict = validate_cuit(raw);
            assert!(verdict.is_valid(), "{raw} should be valid");
            assert_eq!(verdict.formatted_value(), "20123456786");
            assert_eq!(verdict.original_value(), raw);
        }
    }

    #[test]
    fn test_validate_cuit_check_digit_only_failure() {
        let verdict = validate_cuit("20123456780");
        assert!(!verdict.is_valid());
        assert_eq!(verdict.messages(), ["20123456780 is not a valid CUIT/CUIL number"]);
        assert_eq!(verdict.formatted_value(), "");

        let verdict = validate_cuit("20-12345678-1");
        assert_eq!(verdict.messages().len(), 1);
    }

    #[test]
    fn test_validate_cuit_length() {
        for raw in ["1234567890", "123456789012"] {
            let verdict = validate_cuit(raw);
            assert!(!verdict.is_valid());
            assert_eq!(verdict.messages()[0], format!("{raw} is not a valid CUIT/CUIL number"));
            assert!(verdict.messages().iter().any(|m| m == CUIT_INVALID_LENGTH));
            assert!(!verdict.messages().iter().any(|m| m == CUIT_INVALID_CHARACTERS));
        }
    }

    #[test]
    fn test_validate_cuit_characters() {
        // 11 characters, but none of them digits
        let verdict = validate_cuit("abcdefghijk");
        assert!(!verdict.is_valid());
        assert_eq!(
            verdict.messages(),
            [
                "abcdefghijk is not a valid CUIT/CUIL number",
                CUIT_INVALID_CHARACTERS,
                CUIT_INVALID_LENGTH,
            ]
        );
    }

    #[test]
    fn test_validate_cuit_letters_around_valid_digits() {
        // Normalizes to a valid CUIT but the raw text has letters
        let verdict = validate_cuit("20x12345678y6");
        assert!(!verdict.is_valid());
        assert_eq!(verdict.messages().len(), 2);
        assert_eq!(verdict.messages()[1], CUIT_INVALID_CHARACTERS);
    }

    #[test]
    fn test_validate_cuit_country_prefix() {
        let prefixed = validate_cuit("AR20123456786");
        assert!(prefixed.is_valid());
        assert_eq!(prefixed.formatted_value(), "20123456786");
        assert_eq!(prefixed.original_value(), "AR20123456786");

        // Only an exact leading "AR" is a prefix
        assert!(!validate_cuit("ar20123456786").is_valid());
        assert!(!validate_cuit("20AR123456786").is_valid());
        assert!(!validate_cuit(" AR20123456786").is_valid());
    }

    #[test]
    fn test_validate_cuit_required() {
        for raw in ["", "   "] {
            let verdict = validate_cuit(raw);
            assert!(!verdict.is_valid());
            assert_eq!(verdict.messages(), [CUIT_REQUIRED]);
        }

        let outcome = cuit_details(None);
        assert!(!outcome.is_fault());
        assert_eq!(outcome.verdict().messages(), [CUIT_REQUIRED]);
        assert_eq!(outcome.verdict().original_value(), "");
    }

    #[test]
    fn test_validate_dni() {
        assert!(validate_dni("1234567").is_valid());
        assert!(validate_dni("12345678").is_valid());
        assert!(validate_dni("12.345.678").is_valid());
        assert!(validate_dni("AR12345678").is_valid());

        for raw in ["123456", "123456789"] {
            let verdict = validate_dni(raw);
            assert!(!verdict.is_valid());
            assert_eq!(verdict.messages(), [DNI_INVALID_LENGTH]);
            assert_eq!(verdict.formatted_value(), "");
        }
    }

    #[test]
    fn test_validate_dni_formatted_only_when_valid() {
        let verdict = validate_dni("12.345.678");
        assert_eq!(verdict.formatted_value(), "12345678");
        assert_eq!(verdict.original_value(), "12.345.678");
        assert!(verdict.messages().is_empty());
    }

    #[test]
    fn test_validate_dni_required() {
        assert_eq!(validate_dni("").messages(), [DNI_REQUIRED]);
        assert_eq!(dni_details(None).verdict().messages(), [DNI_REQUIRED]);
        assert!(!dni_check(None));
    }

    #[test]
    fn test_validate_dni_non_digit_input() {
        let verdict = validate_dni("abcdefgh");
        assert!(!verdict.is_valid());
        assert_eq!(verdict.messages(), [DNI_INVALID_LENGTH]);
    }

    #[test]
    fn test_validate_other() {
        assert!(validate_other("AB123456").is_valid());
        assert!(validate_other("AR123456").is_valid());
        assert!(!validate_other("AR12345").is_valid());
        assert!(validate_other("123456").is_valid());
        assert_eq!(validate_other("12345").messages(), [OTHER_TOO_SHORT]);
        assert_eq!(validate_other("").messages(), [OTHER_REQUIRED]);
    }

    #[test]
    fn test_identification_check_routing() {
        // Valid DNI, not a CUIT, passes the fallback
        let dni = Some("12345678");
        assert!(!identification_check(dni, Some("CUIT")));
        assert!(!identification_check(dni, Some("cuil")));
        assert!(identification_check(dni, Some("DNI")));
        assert!(identification_check(dni, Some("Passport")));

        // Valid CUIT fails the DNI length rule
        let cuit = Some("20-12345678-6");
        assert!(identification_check(cuit, Some("Cuit")));
        assert!(!identification_check(cuit, Some("dni")));
        assert!(identification_check(cuit, None));

        assert!(!identification_check(Some("12345"), Some("Passport")));
        assert!(!identification_check(None, Some("Passport")));
    }

    #[test]
    fn test_identification_details_kind() {
        let outcome = identification_details(Some("12345678"), Some("DNI"));
        assert_eq!(outcome.verdict().kind(), IdentificationKind::Dni);

        let outcome = identification_details(Some("12345678"), Some("LE"));
        assert_eq!(outcome.verdict().kind(), IdentificationKind::Other);
    }

    #[test]
    fn test_boolean_checks() {
        assert!(cuit_check(Some("20172543597")));
        assert!(cuit_check(Some("AR20123456786")));
        assert!(!cuit_check(Some("12345678901")));
        assert!(!cuit_check(Some("")));
        assert!(!cuit_check(None));

        assert!(dni_check(Some("1234567")));
        assert!(!dni_check(Some("123456789")));
    }

    #[test]
    fn test_normalize_identifier() {
        assert_eq!(normalize_identifier(Some("20-12345678-6")), "20123456786");
        assert_eq!(normalize_identifier(Some("AR20123456786")), "20123456786");
        assert_eq!(normalize_identifier(None), "");
    }

    #[test]
    fn test_invalid_verdicts_always_explain() {
        let inputs = ["", "x", "AR", "20123456780", "abcdefghijk", "1", "20-12345678-6"];
        for raw in inputs {
            for verdict in [validate_cuit(raw), validate_dni(raw), validate_other(raw)] {
                if verdict.is_valid() {
                    assert!(!verdict.formatted_value().is_empty());
                } else {
                    assert!(!verdict.messages().is_empty(), "{raw:?} {:?}", verdict.kind());
                    assert!(verdict.formatted_value().is_empty());
                }
            }
        }
    }
}
