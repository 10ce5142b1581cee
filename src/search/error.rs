//! Error and result types for configuring and running a search.

use std::fmt;

/// Result alias used throughout the search driver.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can prevent a search from starting, or that abort one in
/// progress. Per-candidate evaluation is total and never produces one of
/// these.
#[derive(Debug)]
pub enum SearchError {
    /// The supplied ciphertext was not exactly 16 bytes.
    InvalidCiphertextLength(usize),
    /// `Factory` or `FactoryReversed` was selected while
    /// `SearchConfig::portable_only` rules out the pinned LCG.
    UnsupportedMode(&'static str),
    /// The current CPU lacks the AES-NI/SSE2 instructions the primitive
    /// requires.
    HardwareUnsupported,
    /// A compile-time invariant the driver depends on did not hold, e.g.
    /// the PRNG table failing its own shape check.
    InternalInvariantViolation(&'static str),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::InvalidCiphertextLength(len) => {
                write!(f, "ciphertext must be exactly 16 bytes, got {len}")
            }
            SearchError::UnsupportedMode(mode) => {
                write!(f, "derivation mode {mode} requires --portable-only=false")
            }
            SearchError::HardwareUnsupported => {
                write!(f, "CPU does not support the required AES-NI/SSE2 instructions")
            }
            SearchError::InternalInvariantViolation(what) => {
                write!(f, "internal invariant violated: {what}")
            }
        }
    }
}

impl std::error::Error for SearchError {}
