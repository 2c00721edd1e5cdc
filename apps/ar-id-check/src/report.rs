//! # Output Rendering
//!
//! Turns outcomes into the lines written to stdout.
//!
//! ```text
//! text:  OK   20-12345678-6
//!        FAIL 1234567890
//!            1234567890 is not a valid CUIT/CUIL number
//!            CUIT/CUIL must have exactly 11 digits
//!
//! json:  {"formatted_cuit":"","messages":[...],"original_cuit":"1234567890","valid":false}
//! ```

use ar_id_core::ValidationOutcome;

use crate::config::OutputFormat;

/// Renders one outcome, without a trailing newline.
pub fn render(outcome: &ValidationOutcome, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => render_text(outcome),
        OutputFormat::Json => outcome.verdict().to_host_json().to_string(),
    }
}

fn render_text(outcome: &ValidationOutcome) -> String {
    let verdict = outcome.verdict();
    let status = if verdict.is_valid() { "OK  " } else { "FAIL" };

    let mut out = format!("{status} {}", verdict.original_value());
    if !verdict.is_valid() {
        for message in verdict.messages() {
            out.push_str("\n    ");
            out.push_str(message);
        }
    }
    out
}
