//! The hit-reporting sink.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::aes::Key256;

/// Receives a hit key as soon as the driver finds one.
///
/// Implementations must serialize whole reports: one hit's bytes must not
/// interleave with another's. The driver only holds whatever lock an
/// implementation uses for the duration of one `report` call, never across
/// candidate evaluation.
pub trait Reporter: Sync {
    fn report(&self, key: &Key256);
}

/// Prints each hit as a labeled, four-row hex dump to stdout.
pub struct HexDumpReporter {
    out: Mutex<io::Stdout>,
}

impl HexDumpReporter {
    pub fn new() -> Self {
        HexDumpReporter {
            out: Mutex::new(io::stdout()),
        }
    }
}

impl Default for HexDumpReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for HexDumpReporter {
    fn report(&self, key: &Key256) {
        let mut line = String::with_capacity(32 * 3 + 8);
        line.push_str("Key candidate:\n");
        for (i, byte) in key.iter().enumerate() {
            line.push_str(&format!("{byte:02x} "));
            if i % 8 == 7 {
                line.push('\n');
            }
        }
        line.push('\n');

        let stdout = self.out.lock().unwrap_or_else(|e| e.into_inner());
        let mut stdout = stdout;
        let _ = stdout.write_all(line.as_bytes());
    }
}

/// Collects hits in memory instead of printing them; used by tests.
#[derive(Default)]
pub struct CollectingReporter {
    hits: Mutex<Vec<Key256>>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        CollectingReporter::default()
    }

    pub fn into_hits(self) -> Vec<Key256> {
        self.hits.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

impl Reporter for CollectingReporter {
    fn report(&self, key: &Key256) {
        let mut hits = self.hits.lock().unwrap_or_else(|e| e.into_inner());
        hits.push(*key);
    }
}
