//! Parallel AES-256 key-recovery against a family of weak counter-derived
//! keys.
//!
//! The core is organized leaf-to-root: [`aes`] is the hardware-backed
//! AES-256 primitive, [`derive`] turns a search counter into a candidate
//! key, [`prng`] optionally masks that key with a fixed table, and
//! [`search`] drives the parallel sweep over the counter space and
//! reports hits.

#[cfg(not(target_arch = "x86_64"))]
compile_error!("aes256-bruteforce requires x86_64 AES-NI/SSE2 intrinsics");

pub mod aes;
pub mod derive;
pub mod prng;
pub mod search;
