//! # Error Types
//!
//! Internal fault types for ar-id-core.
//!
//! ## Error vs Invalid
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Two Different Outcomes                               │
//! │                                                                         │
//! │  "20-12345678-0"  ──► Verdict { valid: false, messages: [...] }        │
//! │                       Regular outcome, NOT an error                    │
//! │                                                                         │
//! │  check digit fed 9 digits ──► ValidationError::CheckDigitInput         │
//! │                       Internal fault, settled into                     │
//! │                       ValidationOutcome::Faulted at the entry point    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A bad identifier typed by an operator never produces a `ValidationError`.
//! These variants only surface when the low-level building blocks are called
//! with inputs the pipeline itself would never hand them.

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Internal validation faults.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The check digit algorithm needs exactly ten leading digits.
    #[error("check digit requires exactly 10 digits, got {len}")]
    CheckDigitInput { len: usize },

    /// A digit slot held something outside `0..=9`.
    #[error("value {value} at position {position} is not a decimal digit")]
    NotADigit { position: usize, value: u8 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for internal validation steps.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::CheckDigitInput { len: 9 };
        assert_eq!(err.to_string(), "check digit requires exactly 10 digits, got 9");

        let err = ValidationError::NotADigit {
            position: 3,
            value: 12,
        };
        assert_eq!(
            err.to_string(),
            "value 12 at position 3 is not a decimal digit"
        );
    }
}
