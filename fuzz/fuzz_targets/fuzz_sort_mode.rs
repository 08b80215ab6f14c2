//! Fuzz target for `SortMode` parsing.
//!
//! Arbitrary tokens must parse to a recognized mode or produce a
//! `SortModeError` carrying the token back, never panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use repscan::scan::SortMode;

fuzz_target!(|token: &str| {
    match token.parse::<SortMode>() {
        Ok(_) => {
            let normalized = token.to_ascii_lowercase();
            assert!(matches!(
                normalized.as_str(),
                "none" | "d" | "descending" | "a" | "ascending"
            ));
        }
        Err(err) => assert!(err.to_string().contains(token)),
    }
});
