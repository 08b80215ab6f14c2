//! Frame-aware subsequence enumeration and counting.
//!
//! Scanning a sequence in non-overlapping chunks of length `k` can miss a
//! window that straddles a chunk boundary. This module scans from every
//! phase offset `0..k`, unions the chunks into one canonical set, and then
//! counts overlap-inclusive occurrences of each member across the full
//! sequence. Counting is done in a single sliding-window pass, which is
//! equivalent to a per-subsequence full scan because every chunk produced
//! by some offset is itself a sliding window of the sequence.
//!
//! # Example
//!
//! ```rust
//! use repscan::scan::{FrameScan, SortMode};
//!
//! let scan = FrameScan::new("ATGCATGCATGC", 3, 0, SortMode::None)?;
//!
//! assert_eq!(scan.subseqs(), ["ATG", "CAT", "GCA", "TGC"]);
//! assert_eq!(scan.count_of("ATG"), Some(3));
//! assert_eq!(scan.count_of("CAT"), Some(2));
//! # Ok::<(), repscan::error::WindowLengthError>(())
//! ```

use std::{collections::BTreeSet, str::FromStr};

use bytes::Bytes;
use clap::ValueEnum;
use rustc_hash::FxHashMap;

use crate::error::{SortModeError, WindowLengthError};

#[cfg(feature = "tracing")]
use tracing::debug;

/// Ordering applied to the frequency table.
///
/// Ties are always broken alphabetically ascending, regardless of the
/// count direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortMode {
    /// Keep enumeration order (alphabetical, ascending).
    #[default]
    None,
    /// Highest counts first.
    #[value(alias = "d")]
    Descending,
    /// Lowest counts first.
    #[value(alias = "a")]
    Ascending,
}

impl FromStr for SortMode {
    type Err = SortModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "d" | "descending" => Ok(Self::Descending),
            "a" | "ascending" => Ok(Self::Ascending),
            _ => Err(SortModeError(s.to_string())),
        }
    }
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Descending => write!(f, "descending"),
            Self::Ascending => write!(f, "ascending"),
        }
    }
}

/// The immutable result of one frame scan.
///
/// Holds the canonical subsequence set (ascending, never filtered) and the
/// frequency table (ordered per [`SortMode`], filtered by the threshold).
/// Both are computed once at construction; there are no mutating methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameScan {
    subseqs: Vec<String>,
    counts: Vec<(String, u64)>,
}

impl FrameScan {
    /// Scans `sequence` for windows of `length` characters.
    ///
    /// The sequence is ASCII-uppercased before any processing. Entries
    /// whose occurrence count is strictly below `threshold` are dropped
    /// from the frequency table (the subsequence set is never filtered).
    ///
    /// # Errors
    ///
    /// Returns [`WindowLengthError`] if `length` is zero or exceeds the
    /// sequence length. Validation happens before any scanning work; there
    /// is no partial result.
    pub fn new<S: AsRef<[u8]>>(
        sequence: S,
        length: usize,
        threshold: u64,
        sort: SortMode,
    ) -> Result<Self, WindowLengthError> {
        let sequence = sequence.as_ref();
        if length == 0 || length > sequence.len() {
            return Err(WindowLengthError {
                length,
                sequence_length: sequence.len(),
            });
        }

        let seq = Bytes::from(sequence.to_ascii_uppercase());
        let subseqs = enumerate_subseqs(&seq, length);
        let occurrences = occurrence_counts(&seq, length);

        #[cfg(feature = "tracing")]
        debug!(
            length,
            distinct = subseqs.len(),
            "enumerated subsequences across all frames"
        );

        let mut counts: Vec<(Bytes, u64)> = subseqs
            .iter()
            .map(|s| (s.clone(), occurrences.get(s).copied().unwrap_or(0)))
            .collect();
        sort_table(&mut counts, sort);
        counts.retain(|(_, count)| *count >= threshold);

        Ok(Self {
            subseqs: subseqs.iter().map(to_string).collect(),
            counts: counts
                .into_iter()
                .map(|(s, count)| (to_string(&s), count))
                .collect(),
        })
    }

    /// The canonical subsequence set, alphabetically ascending.
    #[must_use]
    pub fn subseqs(&self) -> &[String] {
        &self.subseqs
    }

    /// The frequency table, ordered and threshold-filtered.
    #[must_use]
    pub fn counts(&self) -> &[(String, u64)] {
        &self.counts
    }

    /// Looks up `subseq` in the frequency table.
    ///
    /// Returns `None` for subsequences that never occur or were filtered
    /// out by the threshold.
    #[must_use]
    pub fn count_of(&self, subseq: &str) -> Option<u64> {
        self.counts
            .iter()
            .find(|(s, _)| s == subseq)
            .map(|(_, count)| *count)
    }

    /// Number of entries in the frequency table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if the frequency table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Collects every chunk of `length` bytes produced by partitioning the
/// sequence from each phase offset `0..length`, discarding short tails.
///
/// The `BTreeSet` collapses duplicates across offsets and yields the set
/// in ascending byte order, which for ASCII sequences is alphabetical.
fn enumerate_subseqs(seq: &Bytes, length: usize) -> Vec<Bytes> {
    let mut set = BTreeSet::new();
    for offset in 0..length {
        let mut i = offset;
        while i + length <= seq.len() {
            set.insert(seq.slice(i..i + length));
            i += length;
        }
    }
    set.into_iter().collect()
}

/// Counts every sliding window of `length` bytes in one pass.
///
/// Occurrences that share characters are counted separately, so `"AAA"`
/// in `"AAAA"` counts 2.
fn occurrence_counts(seq: &Bytes, length: usize) -> FxHashMap<Bytes, u64> {
    let mut counts = FxHashMap::default();
    for i in 0..=seq.len() - length {
        *counts.entry(seq.slice(i..i + length)).or_insert(0) += 1;
    }
    counts
}

/// Reorders the table by count, ties alphabetical ascending.
///
/// `SortMode::None` leaves the alphabetical enumeration order untouched.
fn sort_table(table: &mut [(Bytes, u64)], mode: SortMode) {
    match mode {
        SortMode::None => {}
        SortMode::Descending => {
            table.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        }
        SortMode::Ascending => {
            table.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        }
    }
}

fn to_string(bytes: &Bytes) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
