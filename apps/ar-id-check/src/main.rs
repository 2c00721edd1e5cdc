//! # ar-id-check
//!
//! Validates Argentine CUIT/CUIL and DNI numbers from the command line.
//!
//! ```text
//! $ ar-id-check 20-12345678-6 20123456780
//! OK   20-12345678-6
//! FAIL 20123456780
//!     20123456780 is not a valid CUIT/CUIL number
//!
//! $ cat dnis.txt | ar-id-check --type DNI --format json
//! ```

use std::io;
use std::process::ExitCode;

use ar_id_check::cli::Cli;
use ar_id_check::config::CliConfig;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match CliConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("ar-id-check: {e}");
            return ExitCode::from(2);
        }
    };

    // Initialize tracing (stderr, so stdout stays machine-readable)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_writer(io::stderr)
        .init();

    let settings = cli.settings(&config);
    info!(
        type_label = %settings.type_label,
        format = %settings.format,
        "Configuration loaded"
    );

    let stdin = io::stdin();
    match ar_id_check::run(&settings, &cli.identifiers, stdin.lock(), io::stdout().lock()) {
        Ok(summary) => {
            info!(
                checked = summary.checked,
                invalid = summary.invalid,
                faults = summary.faults,
                "Run complete"
            );
            if summary.all_valid() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            error!(error = ?e, "Run failed");
            eprintln!("ar-id-check: {e:#}");
            ExitCode::from(2)
        }
    }
}
