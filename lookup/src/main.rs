//! `address-index`: print the position of an address in a distribution file.
//!
//! Usage: `address-index --file <PATH> <TARGET>`
//! Output: one stdout line, either
//!   `The index of address <TARGET> is: <N>` or
//!   `Address <TARGET> not found in the JSON file.`
//!
//! Exit status: 0 on completion, 1 when absent under `--fail-on-missing`,
//! 2 on usage, file-access or parse errors. Logs and diagnostics go to stderr.

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use address_index::address::validate_account_address;
use address_index::config::LookupConfig;
use address_index::lookup::lookup_address_index;
use address_index::report::render_outcome;

const EXIT_NOT_FOUND: u8 = 1;
const EXIT_FAILURE: u8 = 2;

fn init_logging(config: &LookupConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_directive()));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .init();
}

/// Print `err` to stderr. Lookup errors embed their source in the message.
fn report_error(err: &dyn std::error::Error) {
    eprintln!("error: {err}");
}

fn main() -> ExitCode {
    let config = LookupConfig::parse();
    init_logging(&config);

    tracing::info!(
        file = %config.file.display(),
        address = %config.target,
        "looking up address"
    );

    if config.strict {
        if let Err(e) = validate_account_address(&config.target) {
            report_error(&e);
            return ExitCode::from(EXIT_FAILURE);
        }
    }

    let outcome = match lookup_address_index(&config.file, &config.target) {
        Ok(outcome) => outcome,
        Err(e) => {
            report_error(&e);
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    println!("{}", render_outcome(&config.target, outcome));

    if outcome.is_found() {
        ExitCode::SUCCESS
    } else {
        tracing::warn!(address = %config.target, "address not found");
        if config.fail_on_missing {
            ExitCode::from(EXIT_NOT_FOUND)
        } else {
            ExitCode::SUCCESS
        }
    }
}
