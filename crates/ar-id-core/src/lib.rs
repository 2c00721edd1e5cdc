//! # ar-id-core: Argentine Identification Validation
//!
//! Pure validation of CUIT/CUIL and DNI numbers for the checkout flow.
//! No I/O, no global state: every function is safe to call from any thread.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │           Host (POS partner editor / ar-id-check)               │   │
//! │  │    identification_check ──► cuit_details ──► popup / output    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ ar-id-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────────┐  ┌──────────────┐  ┌──────────────┐         │   │
//! │  │   │  validation  │  │identification│  │    types     │         │   │
//! │  │   │  normalize   │  │  CUIT rules  │  │   Verdict    │         │   │
//! │  │   │  check digit │  │  DNI rules   │  │   Outcome    │         │   │
//! │  │   └──────────────┘  └──────────────┘  └──────────────┘         │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STATE • PURE FUNCTIONS                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`validation`] - Normalization, character set, check digit
//! - [`identification`] - CUIT/CUIL, DNI and fallback rule sets, host entry points
//! - [`types`] - `Verdict`, `IdentificationKind`, `ValidationOutcome`
//! - [`error`] - Internal fault type
//!
//! ## Example Usage
//!
//! ```rust
//! use ar_id_core::{cuit_details, identification_check};
//!
//! assert!(identification_check(Some("20-17254359-7"), Some("CUIT")));
//!
//! let outcome = cuit_details(Some("20-12345678-0"));
//! assert!(!outcome.is_valid());
//! assert_eq!(
//!     outcome.verdict().summary(),
//!     "20-12345678-0 is not a valid CUIT/CUIL number"
//! );
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod identification;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{ValidationError, ValidationResult};
pub use identification::{
    cuit_check, cuit_details, dni_check, dni_details, identification_check,
    identification_details, normalize_identifier, validate_cuit, validate_dni, validate_other,
};
pub use types::{IdentificationKind, ValidationOutcome, Verdict};
pub use validation::{compute_check_digit, has_only_allowed_characters, is_valid_cuit, normalize};
