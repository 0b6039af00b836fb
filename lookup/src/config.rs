//! Command-line configuration.
//!
//! Every input may come from a flag or from the environment; the flag wins.

use std::path::PathBuf;

use clap::Parser;

/// Environment variable naming the distribution document.
pub const ENV_FILE: &str = "ADDRESS_INDEX_FILE";
/// Environment variable carrying the target address.
pub const ENV_TARGET: &str = "ADDRESS_INDEX_TARGET";

/// Crate-local default log filter when `RUST_LOG` is unset.
const DEFAULT_LEVEL: &str = "warn";

/// Find the index of an address in a distribution JSON file.
#[derive(Debug, Clone, Parser)]
#[command(name = "address-index", version)]
pub struct LookupConfig {
    /// Address to search for (compared case-insensitively)
    #[arg(env = ENV_TARGET)]
    pub target: String,

    /// Path to the JSON array of `{ "address": ... }` entries
    #[arg(short, long, env = ENV_FILE)]
    pub file: PathBuf,

    /// Exit with status 1 when the address is absent
    #[arg(long)]
    pub fail_on_missing: bool,

    /// Reject targets that are not 0x-prefixed 20-byte hex addresses
    #[arg(long)]
    pub strict: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl LookupConfig {
    /// Log filter directive derived from `--verbose`.
    #[must_use]
    pub fn log_directive(&self) -> String {
        let level = match self.verbose {
            0 => DEFAULT_LEVEL,
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        format!("address_index={level}")
    }
}
