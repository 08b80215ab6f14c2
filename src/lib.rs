//! # repscan
//!
//! A frame-aware repeat counter for biological sequences.
//!
//! Given a sequence and a window length `k`, repscan enumerates every
//! distinct window that occurs when the sequence is chunked into
//! non-overlapping pieces starting from each of the `k` phase offsets,
//! then counts overlap-inclusive occurrences of each window across the
//! full sequence and produces a sorted, threshold-filtered frequency
//! table. Scanning every phase guarantees no window is missed because of
//! an unlucky chunk boundary.
//!
//! # Example
//!
//! ```rust
//! use repscan::{FrameScan, SortMode};
//!
//! let scan = FrameScan::new("ATGCATGCATGC", 3, 0, SortMode::Descending)?;
//!
//! assert_eq!(scan.subseqs(), ["ATG", "CAT", "GCA", "TGC"]);
//! assert_eq!(scan.counts()[0], ("ATG".to_string(), 3));
//! # Ok::<(), repscan::error::WindowLengthError>(())
//! ```
//!
//! The [`builder::RepeatScanner`] builder offers the same scan with a
//! fluent configuration API and FASTA file entry points; the `repscan`
//! binary wraps it in a small CLI.

pub mod builder;
pub mod cli;
pub mod error;
pub mod input;
pub mod run;
pub mod scan;

pub use crate::{
    builder::RepeatScanner,
    error::{RepScanError, SortModeError, WindowLengthError},
    scan::{FrameScan, SortMode},
};
