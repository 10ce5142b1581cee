//! The data-parallel sweep over the 32-bit counter space.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use crate::aes;
use crate::derive;
use crate::prng;

use super::config::SearchConfig;
use super::reporter::Reporter;

/// Total number of distinct counters, `2^32`.
const COUNTER_SPACE: u64 = 1u64 << 32;

/// How many counters a worker processes between cancellation checks.
/// Coarse-grained on purpose: the spec forbids checking per candidate.
const CANCEL_CHECK_STRIDE: u64 = 4096;

/// Tallies from one completed (or cancelled) sweep.
#[derive(Debug, Default, Clone, Copy)]
pub struct SearchStats {
    pub counters_evaluated: u64,
    pub candidates_evaluated: u64,
    pub hits: u64,
}

/// Sweep the full counter space under `config`, reporting every hit to
/// `reporter`. Partitions `[0, 2^32)` into `config.worker_count()`
/// contiguous sub-ranges and runs one thread per sub-range.
///
/// `cancel`, if given, is polled at coarse intervals; when set, workers
/// stop taking new counters but still finish the counter in flight.
pub fn run(
    config: &SearchConfig,
    reporter: &(dyn Reporter + Sync),
    cancel: Option<&AtomicBool>,
) -> SearchStats {
    let worker_count = config.worker_count().max(1);
    let counters_evaluated = AtomicU64::new(0);
    let candidates_evaluated = AtomicU64::new(0);
    let hits = AtomicU64::new(0);

    let base_chunk = COUNTER_SPACE / worker_count as u64;
    let remainder = COUNTER_SPACE % worker_count as u64;

    std::thread::scope(|scope| {
        let mut start = 0u64;
        for worker_index in 0..worker_count {
            let chunk_len = base_chunk + u64::from(worker_index < remainder as usize);
            let end = start + chunk_len;
            let range = start..end;
            start = end;

            let counters_evaluated = &counters_evaluated;
            let candidates_evaluated = &candidates_evaluated;
            let hits = &hits;

            scope.spawn(move || {
                sweep_range(config, reporter, cancel, range, counters_evaluated, candidates_evaluated, hits);
            });
        }
    });

    SearchStats {
        counters_evaluated: counters_evaluated.load(Ordering::Relaxed),
        candidates_evaluated: candidates_evaluated.load(Ordering::Relaxed),
        hits: hits.load(Ordering::Relaxed),
    }
}

#[allow(clippy::too_many_arguments)]
pub(super) fn sweep_range(
    config: &SearchConfig,
    reporter: &(dyn Reporter + Sync),
    cancel: Option<&AtomicBool>,
    range: std::ops::Range<u64>,
    counters_evaluated: &AtomicU64,
    candidates_evaluated: &AtomicU64,
    hits: &AtomicU64,
) {
    for (offset, counter_u64) in range.enumerate() {
        if offset as u64 % CANCEL_CHECK_STRIDE == 0 {
            if let Some(cancel) = cancel {
                if cancel.load(Ordering::Relaxed) {
                    return;
                }
            }
        }

        let counter = counter_u64 as u32;
        let base_key = derive::derive_key(config.mode, counter);

        if config.use_prng_mask {
            for state in 0..prng::STATE_COUNT as u32 {
                let masked = prng::mask(&base_key, state);
                evaluate_candidate(config, reporter, &masked, candidates_evaluated, hits);
            }
        } else {
            evaluate_candidate(config, reporter, &base_key, candidates_evaluated, hits);
        }

        counters_evaluated.fetch_add(1, Ordering::Relaxed);
    }
}

fn evaluate_candidate(
    config: &SearchConfig,
    reporter: &(dyn Reporter + Sync),
    key: &aes::Key256,
    candidates_evaluated: &AtomicU64,
    hits: &AtomicU64,
) {
    let schedule = aes::schedule_full(key);
    let plaintext = aes::decrypt_block(&schedule, &config.ciphertext);
    candidates_evaluated.fetch_add(1, Ordering::Relaxed);

    if plaintext == [0u8; aes::AES_BLOCK_SIZE] {
        reporter.report(key);
        hits.fetch_add(1, Ordering::Relaxed);
    }
}
