//! # Domain Types
//!
//! Value types produced by the identification validator.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌────────────────────┐   ┌─────────────────────┐                      │
//! │  │ IdentificationKind │   │      Verdict        │                      │
//! │  │  ────────────────  │   │  ─────────────────  │                      │
//! │  │  Cuit              │   │  kind               │                      │
//! │  │  Dni               │   │  valid              │                      │
//! │  │  Other             │   │  messages           │                      │
//! │  └────────────────────┘   │  formatted_value    │                      │
//! │                           │  original_value     │                      │
//! │  ┌────────────────────┐   └─────────────────────┘                      │
//! │  │ ValidationOutcome  │                                                 │
//! │  │  Checked(Verdict)  │   regular result, valid or not                 │
//! │  │  Faulted(Verdict)  │   internal fault, always invalid               │
//! │  └────────────────────┘                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Verdicts are built once per call and never mutated afterwards.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use ts_rs::TS;

use crate::error::ValidationError;

/// Prefix of the message reported for internal faults.
pub const FAULT_MESSAGE_PREFIX: &str = "Error validating identifier";

// =============================================================================
// Identification Kind
// =============================================================================

/// Which rule set an identifier is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum IdentificationKind {
    /// CUIT or CUIL: 11 digits with a trailing check digit.
    Cuit,

    /// National identity number: 7 or 8 digits.
    Dni,

    /// Any other document type. Only a minimum digit count is enforced.
    Other,
}

impl IdentificationKind {
    /// Classifies a free-form identification type label.
    ///
    /// Case-insensitive substring match: `cuit`/`cuil` first, then `dni`.
    /// Anything else, including a missing label, is `Other`.
    ///
    /// ## Example
    /// ```rust
    /// use ar_id_core::IdentificationKind;
    ///
    /// assert_eq!(IdentificationKind::from_label(Some("CUIL")), IdentificationKind::Cuit);
    /// assert_eq!(IdentificationKind::from_label(Some("dni")), IdentificationKind::Dni);
    /// assert_eq!(IdentificationKind::from_label(Some("Passport")), IdentificationKind::Other);
    /// assert_eq!(IdentificationKind::from_label(None), IdentificationKind::Other);
    /// ```
    pub fn from_label(label: Option<&str>) -> Self {
        let label = match label {
            Some(label) => label.to_lowercase(),
            None => return IdentificationKind::Other,
        };

        if label.contains("cuit") || label.contains("cuil") {
            IdentificationKind::Cuit
        } else if label.contains("dni") {
            IdentificationKind::Dni
        } else {
            IdentificationKind::Other
        }
    }

    /// Human-readable name used in messages.
    pub const fn display_name(&self) -> &'static str {
        match self {
            IdentificationKind::Cuit => "CUIT/CUIL",
            IdentificationKind::Dni => "DNI",
            IdentificationKind::Other => "Identifier",
        }
    }

    /// Suffix of the `formatted_*` / `original_*` keys in host JSON.
    pub const fn field_suffix(&self) -> &'static str {
        match self {
            IdentificationKind::Cuit => "cuit",
            IdentificationKind::Dni => "dni",
            IdentificationKind::Other => "identifier",
        }
    }
}

impl std::fmt::Display for IdentificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

// =============================================================================
// Verdict
// =============================================================================

/// Result of validating one identifier.
///
/// ## Invariants
/// - `formatted_value` is empty unless `valid` is true
/// - `messages` is never empty when `valid` is false
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Verdict {
    kind: IdentificationKind,
    valid: bool,
    messages: Vec<String>,
    formatted_value: String,
    original_value: String,
}

impl Verdict {
    /// Builds a passing verdict.
    pub(crate) fn accepted(
        kind: IdentificationKind,
        original: &str,
        formatted: String,
        messages: Vec<String>,
    ) -> Self {
        Verdict {
            kind,
            valid: true,
            messages,
            formatted_value: formatted,
            original_value: original.to_string(),
        }
    }

    /// Builds a failing verdict. Falls back to a generic message when the
    /// caller supplied none.
    pub(crate) fn rejected(kind: IdentificationKind, original: &str, mut messages: Vec<String>) -> Self {
        if messages.is_empty() {
            messages.push(format!("Invalid {}", kind.display_name()));
        }

        Verdict {
            kind,
            valid: false,
            messages,
            formatted_value: String::new(),
            original_value: original.to_string(),
        }
    }

    /// Builds the verdict reported for an internal fault.
    pub(crate) fn fault(kind: IdentificationKind, original: &str, err: &ValidationError) -> Self {
        Verdict::rejected(kind, original, vec![format!("{FAULT_MESSAGE_PREFIX}: {err}")])
    }

    pub fn kind(&self) -> IdentificationKind {
        self.kind
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Digits-only canonical form. Empty unless the verdict is valid.
    pub fn formatted_value(&self) -> &str {
        &self.formatted_value
    }

    /// The input exactly as the caller supplied it.
    pub fn original_value(&self) -> &str {
        &self.original_value
    }

    /// Messages joined one per line, as shown in the checkout error popup.
    pub fn summary(&self) -> String {
        self.messages.join("\n")
    }

    /// Renders the object shape the checkout frontend expects.
    ///
    /// ```text
    /// { "valid": false,
    ///   "messages": ["..."],
    ///   "formatted_cuit": "",
    ///   "original_cuit": "20-12345678-0" }
    /// ```
    pub fn to_host_json(&self) -> Value {
        let suffix = self.kind.field_suffix();
        let messages = self.messages.iter().cloned().map(Value::String).collect();

        let mut map = Map::new();
        map.insert("valid".to_string(), Value::Bool(self.valid));
        map.insert("messages".to_string(), Value::Array(messages));
        map.insert(
            format!("formatted_{suffix}"),
            Value::String(self.formatted_value.clone()),
        );
        map.insert(
            format!("original_{suffix}"),
            Value::String(self.original_value.clone()),
        );

        Value::Object(map)
    }
}

// =============================================================================
// Validation Outcome
// =============================================================================

/// What an entry point hands back to the host.
///
/// Both variants carry a verdict so the host can render them the same way.
/// `Faulted` marks a failure of the validator itself, not a bad identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// The identifier went through the rules. It may still be invalid.
    Checked(Verdict),

    /// The validator hit an internal fault. The verdict is always invalid.
    Faulted(Verdict),
}

impl ValidationOutcome {
    /// Settles an internal pipeline result into an outcome.
    pub(crate) fn settle(
        kind: IdentificationKind,
        original: &str,
        result: Result<Verdict, ValidationError>,
    ) -> Self {
        match result {
            Ok(verdict) => ValidationOutcome::Checked(verdict),
            Err(err) => ValidationOutcome::Faulted(Verdict::fault(kind, original, &err)),
        }
    }

    pub fn verdict(&self) -> &Verdict {
        match self {
            ValidationOutcome::Checked(verdict) | ValidationOutcome::Faulted(verdict) => verdict,
        }
    }

    pub fn into_verdict(self) -> Verdict {
        match self {
            ValidationOutcome::Checked(verdict) | ValidationOutcome::Faulted(verdict) => verdict,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.verdict().is_valid()
    }

    pub fn is_fault(&self) -> bool {
        matches!(self, ValidationOutcome::Faulted(_))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_label() {
        assert_eq!(IdentificationKind::from_label(Some("CUIT")), IdentificationKind::Cuit);
        assert_eq!(IdentificationKind::from_label(Some("cuil")), IdentificationKind::Cuit);
        assert_eq!(
            IdentificationKind::from_label(Some("AFIP CUIT (Persona)")),
            IdentificationKind::Cuit
        );
        assert_eq!(IdentificationKind::from_label(Some("DNI")), IdentificationKind::Dni);
        assert_eq!(IdentificationKind::from_label(Some("Dni")), IdentificationKind::Dni);
        assert_eq!(IdentificationKind::from_label(Some("Passport")), IdentificationKind::Other);
        assert_eq!(IdentificationKind::from_label(Some("D.N.I")), IdentificationKind::Other);
        assert_eq!(IdentificationKind::from_label(Some("")), IdentificationKind::Other);
        assert_eq!(IdentificationKind::from_label(None), IdentificationKind::Other);
    }

    #[test]
    fn test_rejected_never_has_empty_messages() {
        let verdict = Verdict::rejected(IdentificationKind::Dni, "x", Vec::new());
        assert!(!verdict.is_valid());
        assert_eq!(verdict.messages(), ["Invalid DNI"]);
        assert_eq!(verdict.formatted_value(), "");
    }

    #[test]
    fn test_summary_joins_lines() {
        let verdict = Verdict::rejected(
            IdentificationKind::Cuit,
            "abc",
            vec!["first".to_string(), "second".to_string()],
        );
        assert_eq!(verdict.summary(), "first\nsecond");
    }

    #[test]
    fn test_host_json_keys_follow_kind() {
        let verdict = Verdict::accepted(
            IdentificationKind::Dni,
            "12.345.678",
            "12345678".to_string(),
            Vec::new(),
        );
        let json = verdict.to_host_json();
        assert_eq!(json["valid"], true);
        assert_eq!(json["formatted_dni"], "12345678");
        assert_eq!(json["original_dni"], "12.345.678");
        assert!(json.get("formatted_cuit").is_none());
        assert_eq!(json.as_object().map(|map| map.len()), Some(4));

        let verdict = Verdict::rejected(IdentificationKind::Cuit, "1", vec!["bad".to_string()]);
        let json = verdict.to_host_json();
        assert_eq!(json["formatted_cuit"], "");
        assert_eq!(json["original_cuit"], "1");
        assert_eq!(json["messages"][0], "bad");
    }

    #[test]
    fn test_settle_converts_fault() {
        let outcome = ValidationOutcome::settle(
            IdentificationKind::Cuit,
            "20123456786",
            Err(ValidationError::CheckDigitInput { len: 3 }),
        );
        assert!(outcome.is_fault());
        assert!(!outcome.is_valid());
        assert_eq!(
            outcome.verdict().messages(),
            ["Error validating identifier: check digit requires exactly 10 digits, got 3"]
        );
        assert_eq!(outcome.verdict().original_value(), "20123456786");
        assert_eq!(outcome.verdict().formatted_value(), "");
    }

    #[test]
    fn test_verdict_serializes_for_frontend() {
        let verdict = Verdict::rejected(IdentificationKind::Other, "", vec!["m".to_string()]);
        let json = serde_json::to_value(&verdict).unwrap();
        assert_eq!(json["kind"], "other");
        assert_eq!(json["valid"], false);
        assert_eq!(json["original_value"], "");
    }
}
