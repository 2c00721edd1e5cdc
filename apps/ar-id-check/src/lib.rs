//! # ar-id-check
//!
//! Command-line checker over [`ar_id_core`].
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Cli::parse()  ──►  CliConfig::load()  ──►  RunSettings                │
//! │                                                   │                     │
//! │  identifiers (args, or stdin lines)  ─────────────┤                     │
//! │                                                   ▼                     │
//! │                          identification_details(raw, label)            │
//! │                                                   │                     │
//! │                                                   ▼                     │
//! │                          report::render ──► stdout                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cli;
pub mod config;
pub mod report;

use std::io::{BufRead, Write};

use anyhow::Context;
use ar_id_core::identification_details;
use tracing::{debug, warn};

use crate::cli::RunSettings;

/// Counts collected over one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub checked: usize,
    pub invalid: usize,
    pub faults: usize,
}

impl RunSummary {
    /// True when every identifier passed.
    pub fn all_valid(&self) -> bool {
        self.invalid == 0
    }
}

/// Checks every identifier and writes one rendered outcome per identifier.
///
/// With no `identifiers`, reads them from `input`, one per line; blank lines
/// are skipped.
pub fn run<R, W>(
    settings: &RunSettings,
    identifiers: &[String],
    input: R,
    mut out: W,
) -> anyhow::Result<RunSummary>
where
    R: BufRead,
    W: Write,
{
    let identifiers = if identifiers.is_empty() {
        read_identifiers(input)?
    } else {
        identifiers.to_vec()
    };

    let mut summary = RunSummary::default();
    for raw in &identifiers {
        let label = settings.type_label.as_str();
        let outcome = identification_details(Some(raw.as_str()), Some(label));
        let verdict = outcome.verdict();

        summary.checked += 1;
        if !verdict.is_valid() {
            summary.invalid += 1;
        }
        if outcome.is_fault() {
            summary.faults += 1;
            warn!(identifier = %raw, message = %verdict.summary(), "Validator fault");
        } else {
            debug!(
                identifier = %raw,
                kind = %verdict.kind(),
                valid = verdict.is_valid(),
                "Identifier checked"
            );
        }

        writeln!(out, "{}", report::render(&outcome, settings.format))
            .context("Failed to write result")?;
    }

    out.flush().context("Failed to flush output")?;
    Ok(summary)
}

fn read_identifiers<R: BufRead>(input: R) -> anyhow::Result<Vec<String>> {
    let mut identifiers = Vec::new();
    for line in input.lines() {
        let line = line.context("Failed to read identifiers from stdin")?;
        let line = line.trim_end_matches('\r');
        if !line.trim().is_empty() {
            identifiers.push(line.to_string());
        }
    }
    Ok(identifiers)
}
