//! The options a search is bound to at startup.

use crate::aes;
use crate::aes::Block;
use crate::derive::DerivationMode;

use super::error::{Result, SearchError};

/// The enumerated options bound at startup: derivation mode, whether the
/// PRNG mask is applied, and the target ciphertext block.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub mode: DerivationMode,
    pub use_prng_mask: bool,
    pub ciphertext: Block,
    /// When `true`, `Factory`/`FactoryReversed` are rejected at
    /// configuration time instead of relying on the pinned, non-standard
    /// LCG recurrence in [`crate::derive`].
    pub portable_only: bool,
    /// Worker thread count; `None` defers to
    /// `std::thread::available_parallelism()`.
    pub threads: Option<usize>,
}

impl SearchConfig {
    /// Build and validate a configuration.
    ///
    /// `mask` overrides `mode.default_mask_enabled()` when given.
    pub fn new(
        mode: DerivationMode,
        mask: Option<bool>,
        ciphertext: &[u8],
        portable_only: bool,
        threads: Option<usize>,
    ) -> Result<Self> {
        if ciphertext.len() != aes::AES_BLOCK_SIZE {
            return Err(SearchError::InvalidCiphertextLength(ciphertext.len()));
        }
        if portable_only && mode.is_factory() {
            return Err(SearchError::UnsupportedMode(mode.name()));
        }
        if !aes::is_hardware_supported() {
            return Err(SearchError::HardwareUnsupported);
        }

        let mut block = [0u8; aes::AES_BLOCK_SIZE];
        block.copy_from_slice(ciphertext);

        Ok(SearchConfig {
            mode,
            use_prng_mask: mask.unwrap_or_else(|| mode.default_mask_enabled()),
            ciphertext: block,
            portable_only,
            threads,
        })
    }

    /// Number of worker threads to spawn.
    pub fn worker_count(&self) -> usize {
        self.threads.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        })
    }
}
