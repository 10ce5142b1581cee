//! AES-256 Core Implementation (hardware AES-NI)
//!
//! This module provides the AES-256 key schedule and single-block
//! encrypt/decrypt operations used by the rest of the crate. Unlike a
//! table-driven software implementation, every round transform here maps
//! directly onto the x86-64 AES-NI instruction set (`aesenc`, `aesdec`,
//! `aesimc`, `aeskeygenassist`, ...), because the search driver evaluates
//! billions of candidate keys and needs one key schedule and one block
//! decryption per candidate at hardware speed.
//!
//! # Disclaimer
//!
//! This implementation is provided "as is". The key-derivation and PRNG
//! mask paths built on top of it are not audited for timing; only the
//! AES round instructions themselves are constant-time.
//!
//! # Features
//!
//! - AES-256 only: a 32-byte key, 14 rounds.
//! - `schedule_full` produces both the encryption and decryption round
//!   keys; `schedule_encrypt_only` produces just the 15 encryption round
//!   keys, for callers that never decrypt.
//! - `encrypt_block`/`decrypt_block` apply a schedule to one 16-byte
//!   block.
//!
//! # Usage
//!
//! Call [`is_hardware_supported`] once before using any other function in
//! this module. `schedule_full`, `schedule_encrypt_only`,
//! `encrypt_block`, and `decrypt_block` assume AES-NI and SSE2 are
//! available and do not re-check; the check is pushed up to
//! configuration time (see `search::config`) so these primitives stay
//! total once that precondition holds.
//!
//! # Notes
//! - The key schedule is stored as a flat `[__m128i; 28]` rather than a
//!   multi-dimensional array.
//! - Round-key materialization never casts byte buffers to wider integer
//!   pointers; keys and blocks move in and out of lanes via
//!   `load128`/`store128` only.

use super::simd::{self, Lane};

/// AES block size is fixed at 16 bytes.
pub const AES_BLOCK_SIZE: usize = 16;

/// AES-256 key size is fixed at 32 bytes.
pub const AES_256_KEY_SIZE: usize = 32;

const ENC_ROUNDS: usize = 14;
const ENC_SCHEDULE_LEN: usize = ENC_ROUNDS + 1; // round keys 0..=14
const FULL_SCHEDULE_LEN: usize = ENC_SCHEDULE_LEN + (ENC_ROUNDS - 1); // + invmixcol(13..=1)

/// A 16-byte block: a plaintext, a ciphertext, or one round key.
pub type Block = [u8; AES_BLOCK_SIZE];

/// A 32-byte AES-256 key.
pub type Key256 = [u8; AES_256_KEY_SIZE];

/// The full AES-256 key schedule: 15 encryption round keys followed by
/// 13 `InvMixColumns`-preprocessed decryption round keys.
///
/// Indices `0..=14` are the encryption schedule. Indices `15..=27` are
/// `InvMixColumns` applied to encryption round keys 13, 12, ..., 1 in
/// that order; round keys 0 and 14 are shared between directions and
/// are not duplicated. [`schedule_encrypt_only`] leaves indices
/// `15..=27` zeroed rather than meaningfully populated.
#[derive(Clone, Copy)]
pub struct KeySchedule256 {
    round_keys: [Lane; FULL_SCHEDULE_LEN],
}

/// Returns whether this CPU exposes the AES-NI and SSE2 features this
/// module's primitives require. Callers must check this before calling
/// any other function in the module; the primitives themselves perform
/// no runtime feature detection.
pub fn is_hardware_supported() -> bool {
    is_x86_feature_detected!("aes") && is_x86_feature_detected!("sse2")
}

/// Produce the 15 AES-256 encryption round keys for `key`. Indices
/// `15..=27` of the returned schedule are zeroed, not meaningfully
/// populated — use [`schedule_full`] if decryption is needed.
pub fn schedule_encrypt_only(key: &Key256) -> KeySchedule256 {
    unsafe { schedule_encrypt_only_impl(key) }
}

/// Produce the full 28-entry AES-256 key schedule (encryption and
/// decryption round keys) for `key`.
pub fn schedule_full(key: &Key256) -> KeySchedule256 {
    unsafe { schedule_full_impl(key) }
}

/// Encrypt one 16-byte block under `schedule`.
pub fn encrypt_block(schedule: &KeySchedule256, plaintext: &Block) -> Block {
    unsafe { encrypt_block_impl(schedule, plaintext) }
}

/// Decrypt one 16-byte block under `schedule`. `schedule` must have been
/// produced by [`schedule_full`]; a schedule from [`schedule_encrypt_only`]
/// decrypts to garbage since its decryption round keys are zeroed.
pub fn decrypt_block(schedule: &KeySchedule256, ciphertext: &Block) -> Block {
    unsafe { decrypt_block_impl(schedule, ciphertext) }
}

impl KeySchedule256 {
    /// Read out round-key entry `index` (0..=27) as bytes. Used by
    /// conformance tests to check individual round keys against published
    /// test vectors; not needed by the search driver itself.
    pub fn round_key_bytes(&self, index: usize) -> Block {
        let mut out = [0u8; AES_BLOCK_SIZE];
        unsafe { simd::store128(&mut out, self.round_keys[index]) };
        out
    }
}

/// Assist A: produces even-indexed round keys from the previous even key.
/// `keygen` is `aeskeygenassist(prev_odd, RCON)`.
#[target_feature(enable = "aes,sse2")]
unsafe fn key_assist_even(prev_even: Lane, keygen: Lane) -> Lane {
    let temp2 = simd::shuffle_hi_word(keygen);
    let mut temp1 = prev_even;
    let mut temp4 = simd::shift_left_4_bytes(temp1);
    temp1 = simd::xor128(temp1, temp4);
    temp4 = simd::shift_left_4_bytes(temp4);
    temp1 = simd::xor128(temp1, temp4);
    temp4 = simd::shift_left_4_bytes(temp4);
    temp1 = simd::xor128(temp1, temp4);
    simd::xor128(temp1, temp2)
}

/// Assist B: produces odd-indexed round keys from the just-computed even key.
#[target_feature(enable = "aes,sse2")]
unsafe fn key_assist_odd(even: Lane, prev_odd: Lane) -> Lane {
    let keygen = simd::key_gen_assist::<0x00>(even);
    let temp2 = simd::shuffle_second_word(keygen);
    let mut temp3 = prev_odd;
    let mut temp4 = simd::shift_left_4_bytes(temp3);
    temp3 = simd::xor128(temp3, temp4);
    temp4 = simd::shift_left_4_bytes(temp4);
    temp3 = simd::xor128(temp3, temp4);
    temp4 = simd::shift_left_4_bytes(temp4);
    temp3 = simd::xor128(temp3, temp4);
    simd::xor128(temp3, temp2)
}

#[target_feature(enable = "aes,sse2")]
unsafe fn schedule_encrypt_only_impl(key: &Key256) -> KeySchedule256 {
    let mut round_keys = [simd::zero128(); FULL_SCHEDULE_LEN];

    let mut low: Block = [0u8; 16];
    let mut high: Block = [0u8; 16];
    low.copy_from_slice(&key[0..16]);
    high.copy_from_slice(&key[16..32]);

    let mut temp1 = simd::load128(&low);
    let mut temp3 = simd::load128(&high);
    round_keys[0] = temp1;
    round_keys[1] = temp3;

    // Seven Assist-A applications, interleaved with six Assist-B
    // applications, reach the fifteenth round key (index 14). Round
    // constants per spec: 0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40.
    let temp2 = simd::key_gen_assist::<0x01>(temp3);
    temp1 = key_assist_even(temp1, temp2);
    round_keys[2] = temp1;
    temp3 = key_assist_odd(temp1, temp3);
    round_keys[3] = temp3;

    let temp2 = simd::key_gen_assist::<0x02>(temp3);
    temp1 = key_assist_even(temp1, temp2);
    round_keys[4] = temp1;
    temp3 = key_assist_odd(temp1, temp3);
    round_keys[5] = temp3;

    let temp2 = simd::key_gen_assist::<0x04>(temp3);
    temp1 = key_assist_even(temp1, temp2);
    round_keys[6] = temp1;
    temp3 = key_assist_odd(temp1, temp3);
    round_keys[7] = temp3;

    let temp2 = simd::key_gen_assist::<0x08>(temp3);
    temp1 = key_assist_even(temp1, temp2);
    round_keys[8] = temp1;
    temp3 = key_assist_odd(temp1, temp3);
    round_keys[9] = temp3;

    let temp2 = simd::key_gen_assist::<0x10>(temp3);
    temp1 = key_assist_even(temp1, temp2);
    round_keys[10] = temp1;
    temp3 = key_assist_odd(temp1, temp3);
    round_keys[11] = temp3;

    let temp2 = simd::key_gen_assist::<0x20>(temp3);
    temp1 = key_assist_even(temp1, temp2);
    round_keys[12] = temp1;
    temp3 = key_assist_odd(temp1, temp3);
    round_keys[13] = temp3;

    let temp2 = simd::key_gen_assist::<0x40>(temp3);
    temp1 = key_assist_even(temp1, temp2);
    round_keys[14] = temp1;

    KeySchedule256 { round_keys }
}

#[target_feature(enable = "aes,sse2")]
unsafe fn schedule_full_impl(key: &Key256) -> KeySchedule256 {
    let mut schedule = schedule_encrypt_only_impl(key);
    for (dst, src) in (15..FULL_SCHEDULE_LEN).zip((1..ENC_ROUNDS).rev()) {
        schedule.round_keys[dst] = simd::inv_mix_columns(schedule.round_keys[src]);
    }
    schedule
}

#[target_feature(enable = "aes,sse2")]
unsafe fn encrypt_block_impl(schedule: &KeySchedule256, plaintext: &Block) -> Block {
    let mut state = simd::load128(plaintext);

    // Key whitening.
    state = simd::xor128(state, schedule.round_keys[0]);
    for round_key in &schedule.round_keys[1..ENC_ROUNDS] {
        state = simd::enc_round(state, *round_key);
    }
    state = simd::enc_last_round(state, schedule.round_keys[ENC_ROUNDS]);

    let mut out = [0u8; AES_BLOCK_SIZE];
    simd::store128(&mut out, state);
    out
}

#[target_feature(enable = "aes,sse2")]
unsafe fn decrypt_block_impl(schedule: &KeySchedule256, ciphertext: &Block) -> Block {
    let mut state = simd::load128(ciphertext);

    state = simd::xor128(state, schedule.round_keys[ENC_ROUNDS]);
    for round_key in &schedule.round_keys[ENC_SCHEDULE_LEN..FULL_SCHEDULE_LEN] {
        state = simd::dec_round(state, *round_key);
    }
    state = simd::dec_last_round(state, schedule.round_keys[0]);

    let mut out = [0u8; AES_BLOCK_SIZE];
    simd::store128(&mut out, state);
    out
}
