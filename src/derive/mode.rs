//! Key derivation: expand a 32-bit search counter into a 32-byte AES-256
//! candidate key under one of four recognized schemes.
//!
//! Every mode's output consists of four 8-byte groups that are each
//! identical to a fixed 8-byte seed derived from the counter; the modes
//! differ only in how that seed is built.

use super::lcg::Lcg;
use crate::aes::Key256;

/// The four recognized key-derivation schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DerivationMode {
    /// Format `counter` as an 8-character lowercase hex string; the 8
    /// ASCII bytes form the seed, repeated four times across 32 bytes.
    #[value(name = "ascii-hex")]
    AsciiHex,
    /// The 32-byte key is eight copies of `counter.swap_bytes()`.
    #[value(name = "raw-le")]
    RawLittleEndian,
    /// The key is eight successive outputs of a counter-seeded LCG,
    /// stored little-endian.
    Factory,
    /// As `Factory`, but each LCG output is byte-swapped before storage.
    #[value(name = "factory-reversed")]
    FactoryReversed,
}

impl DerivationMode {
    /// Whether this mode depends on the non-portable pinned LCG (see
    /// `derive::lcg`).
    pub fn is_factory(self) -> bool {
        matches!(self, DerivationMode::Factory | DerivationMode::FactoryReversed)
    }

    /// The historical default for `--mask`: on for the two textual/raw
    /// modes, off for the two factory modes.
    pub fn default_mask_enabled(self) -> bool {
        !self.is_factory()
    }

    /// Stable, lowercase name for diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            DerivationMode::AsciiHex => "ascii-hex",
            DerivationMode::RawLittleEndian => "raw-le",
            DerivationMode::Factory => "factory",
            DerivationMode::FactoryReversed => "factory-reversed",
        }
    }
}

/// Expand `counter` into a 32-byte candidate key under `mode`.
pub fn derive_key(mode: DerivationMode, counter: u32) -> Key256 {
    match mode {
        DerivationMode::AsciiHex => derive_ascii_hex(counter),
        DerivationMode::RawLittleEndian => derive_raw_little_endian(counter),
        DerivationMode::Factory => derive_factory(counter, false),
        DerivationMode::FactoryReversed => derive_factory(counter, true),
    }
}

fn derive_ascii_hex(counter: u32) -> Key256 {
    let seed = format!("{counter:08x}");
    let seed = seed.as_bytes();
    debug_assert_eq!(seed.len(), 8);

    let mut key = [0u8; 32];
    for chunk in key.chunks_exact_mut(8) {
        chunk.copy_from_slice(seed);
    }
    key
}

fn derive_raw_little_endian(counter: u32) -> Key256 {
    let seed = counter.swap_bytes().to_le_bytes();

    let mut key = [0u8; 32];
    for chunk in key.chunks_exact_mut(4) {
        chunk.copy_from_slice(&seed);
    }
    key
}

fn derive_factory(counter: u32, reversed: bool) -> Key256 {
    let mut lcg = Lcg::seeded(counter);

    let mut key = [0u8; 32];
    for chunk in key.chunks_exact_mut(4) {
        let mut value = lcg.next_u32();
        if reversed {
            value = value.swap_bytes();
        }
        chunk.copy_from_slice(&value.to_le_bytes());
    }
    key
}
