//! Fuzz target for `FrameScan::new`.
//!
//! Tests that scanning arbitrary byte input with arbitrary window lengths
//! either succeeds with coherent results or fails gracefully, never panics.

#![no_main]

use libfuzzer_sys::fuzz_target;
use repscan::scan::{FrameScan, SortMode};

fuzz_target!(|input: (&[u8], u8)| {
    let (data, k) = input;
    let k = k as usize;

    // Limit input size to keep iterations fast
    if data.len() > 512 {
        return;
    }

    match FrameScan::new(data, k, 0, SortMode::None) {
        Ok(scan) => {
            // A successful scan implies the length was in range
            assert!(k >= 1 && k <= data.len());

            // Every member has the window length and a positive count
            for subseq in scan.subseqs() {
                assert!(!subseq.is_empty());
            }
            for (_, count) in scan.counts() {
                assert!(*count >= 1);
            }
        }
        Err(err) => {
            // Rejection only happens for out-of-range lengths
            assert!(err.length == 0 || err.length > data.len());
        }
    }
});
