//! A pinned linear-congruential generator standing in for the host
//! `srand()`/`rand()` pair the `Factory` derivation modes were originally
//! built against.
//!
//! The original source seeds the platform's `rand()` with the counter and
//! takes eight successive outputs. `rand()`'s exact recurrence is
//! unspecified by libc and differs across platforms, so a faithful,
//! portable reimplementation has to pick one recurrence and document it
//! rather than guess at whatever glibc happens to do. This module pins
//! the classic BSD `rand()` recurrence:
//!
//! ```text
//! state' = (state * 1103515245 + 12345) mod 2^31
//! output = state' & 0x7fffffff
//! ```
//!
//! `SearchConfig::portable_only` lets a caller disable the two `Factory`
//! modes outright instead of depending on this pinned, non-standard
//! generator.

/// A BSD-`rand()`-style linear-congruential generator, seeded with a
/// 32-bit counter.
pub struct Lcg {
    state: u32,
}

impl Lcg {
    /// Seed the generator the way `srand(counter)` would.
    pub fn seeded(counter: u32) -> Self {
        Lcg { state: counter }
    }

    /// Produce the next pseudo-random 32-bit value, as `rand()` would.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(1_103_515_245)
            .wrapping_add(12_345)
            & 0x7fff_ffff;
        self.state
    }
}
