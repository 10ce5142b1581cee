//! Command-line surface.

use clap::Parser;

use crate::derive::DerivationMode;

/// Brute-force an AES-256 key drawn from a weak, counter-derived scheme.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Key-derivation scheme the target was generated with.
    #[arg(long, value_enum)]
    pub mode: DerivationMode,

    /// Apply the 255-state PRNG mask on top of the derived key. Defaults
    /// to the historical behavior for `mode` (on for ascii-hex/raw-le,
    /// off for the factory modes) when not given.
    #[arg(long, value_parser = clap::builder::BoolishValueParser::new())]
    pub mask: Option<bool>,

    /// The target ciphertext block, as 32 hex characters (16 bytes).
    #[arg(long)]
    pub ciphertext: String,

    /// Refuse `factory`/`factory-reversed` instead of relying on the
    /// pinned, non-standard LCG recurrence used to reproduce them.
    #[arg(long, default_value_t = false)]
    pub portable_only: bool,

    /// Number of worker threads. Defaults to the detected hardware
    /// concurrency.
    #[arg(long)]
    pub threads: Option<usize>,
}
