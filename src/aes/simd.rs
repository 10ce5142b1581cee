//! Thin, named wrappers over the x86-64 AES-NI intrinsics.
//!
//! `aes_core.rs` is written in terms of these names (`enc_round`,
//! `key_assist_even`, ...) rather than raw `_mm_*` calls, so the key
//! schedule and block transforms read as AES steps instead of intrinsic
//! soup. Every function here requires the caller to have already
//! established that the `aes` and `sse2` target features are available
//! (see `aes_core::is_hardware_supported`); none of them re-check.

#![allow(clippy::missing_safety_doc)]

use std::arch::x86_64::*;

pub type Lane = __m128i;

#[inline]
#[target_feature(enable = "sse2")]
pub unsafe fn zero128() -> Lane {
    _mm_setzero_si128()
}

/// Load 16 bytes into a lane. The pointer need not be 16-byte aligned.
#[inline]
#[target_feature(enable = "sse2")]
pub unsafe fn load128(bytes: &[u8; 16]) -> Lane {
    _mm_loadu_si128(bytes.as_ptr() as *const Lane)
}

/// Store a lane into 16 bytes. The pointer need not be 16-byte aligned.
#[inline]
#[target_feature(enable = "sse2")]
pub unsafe fn store128(out: &mut [u8; 16], lane: Lane) {
    _mm_storeu_si128(out.as_mut_ptr() as *mut Lane, lane);
}

#[inline]
#[target_feature(enable = "sse2")]
pub unsafe fn xor128(a: Lane, b: Lane) -> Lane {
    _mm_xor_si128(a, b)
}

/// One `aesenc` round: SubBytes, ShiftRows, MixColumns, AddRoundKey.
#[inline]
#[target_feature(enable = "aes")]
pub unsafe fn enc_round(state: Lane, round_key: Lane) -> Lane {
    _mm_aesenc_si128(state, round_key)
}

/// The final encryption round: SubBytes, ShiftRows, AddRoundKey (no MixColumns).
#[inline]
#[target_feature(enable = "aes")]
pub unsafe fn enc_last_round(state: Lane, round_key: Lane) -> Lane {
    _mm_aesenclast_si128(state, round_key)
}

/// One `aesdec` round (equivalent inverse cipher form).
#[inline]
#[target_feature(enable = "aes")]
pub unsafe fn dec_round(state: Lane, round_key: Lane) -> Lane {
    _mm_aesdec_si128(state, round_key)
}

/// The final decryption round.
#[inline]
#[target_feature(enable = "aes")]
pub unsafe fn dec_last_round(state: Lane, round_key: Lane) -> Lane {
    _mm_aesdeclast_si128(state, round_key)
}

/// InvMixColumns, used to preprocess encryption round keys into the form
/// consumed by the equivalent inverse cipher.
#[inline]
#[target_feature(enable = "aes")]
pub unsafe fn inv_mix_columns(round_key: Lane) -> Lane {
    _mm_aesimc_si128(round_key)
}

/// One step of the AES-256 key-generation assist (S-box substitution +
/// RotWord folded into the hardware primitive), parameterized by the
/// round constant `RCON`.
#[inline]
#[target_feature(enable = "aes")]
pub unsafe fn key_gen_assist<const RCON: i32>(key: Lane) -> Lane {
    _mm_aeskeygenassist_si128::<RCON>(key)
}

#[inline]
#[target_feature(enable = "sse2")]
pub unsafe fn shuffle_hi_word(a: Lane) -> Lane {
    // Broadcasts the high 32-bit lane across the 128-bit word (0xff == [3,3,3,3]).
    _mm_shuffle_epi32::<0xff>(a)
}

#[inline]
#[target_feature(enable = "sse2")]
pub unsafe fn shuffle_second_word(a: Lane) -> Lane {
    // Broadcasts the second-highest 32-bit lane (0xaa == [2,2,2,2]).
    _mm_shuffle_epi32::<0xaa>(a)
}

#[inline]
#[target_feature(enable = "sse2")]
pub unsafe fn shift_left_4_bytes(a: Lane) -> Lane {
    _mm_slli_si128::<4>(a)
}
