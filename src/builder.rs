//! Builder pattern API for ergonomic repeat scanning.
//!
//! # Example
//!
//! ```rust
//! use repscan::builder::RepeatScanner;
//!
//! let scan = RepeatScanner::new()
//!     .length(3)
//!     .threshold(2)
//!     .scan("ATGCATGCATGC")?;
//!
//! for (subseq, count) in scan.counts() {
//!     println!("{subseq}: {count}");
//! }
//! # Ok::<(), repscan::error::WindowLengthError>(())
//! ```

use std::{io::Write, path::Path};

use crate::{
    cli::OutputFormat,
    error::{RepScanError, WindowLengthError},
    run::{scan_fasta, write_scans, RecordScan},
    scan::{FrameScan, SortMode},
};

/// A builder for configuring repeat scans.
///
/// Defaults mirror the construction contract: window length 3, threshold 0
/// (no filtering), no sorting, table output. Window-length validation
/// happens when a scan runs, since the bound depends on the sequence
/// being scanned.
#[derive(Debug, Clone)]
pub struct RepeatScanner {
    length: usize,
    threshold: u64,
    sort: SortMode,
    format: OutputFormat,
}

impl Default for RepeatScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl RepeatScanner {
    /// Creates a new `RepeatScanner` builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            length: 3,
            threshold: 0,
            sort: SortMode::None,
            format: OutputFormat::Table,
        }
    }

    /// Sets the window length (default 3).
    ///
    /// The length must be at least 1 and no longer than the scanned
    /// sequence; scans report [`WindowLengthError`] otherwise.
    #[must_use]
    pub fn length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Sets the minimum occurrence count (default 0, no filtering).
    ///
    /// Table entries with counts strictly below the threshold are dropped;
    /// entries equal to it are retained.
    #[must_use]
    pub fn threshold(mut self, threshold: u64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Sets the frequency-table sort order (default [`SortMode::None`]).
    #[must_use]
    pub fn sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    /// Sets the output format for [`scan_to_writer()`](Self::scan_to_writer).
    #[must_use]
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Scans a single in-memory sequence.
    ///
    /// # Errors
    ///
    /// Returns [`WindowLengthError`] if the configured length is zero or
    /// exceeds the sequence length.
    ///
    /// # Example
    ///
    /// ```rust
    /// use repscan::builder::RepeatScanner;
    /// use repscan::scan::SortMode;
    ///
    /// let scan = RepeatScanner::new()
    ///     .sort(SortMode::Descending)
    ///     .scan("ATGCATGCATGC")?;
    ///
    /// assert_eq!(scan.counts()[0], ("ATG".to_string(), 3));
    /// # Ok::<(), repscan::error::WindowLengthError>(())
    /// ```
    pub fn scan<S: AsRef<[u8]>>(&self, sequence: S) -> Result<FrameScan, WindowLengthError> {
        FrameScan::new(sequence, self.length, self.threshold, self.sort)
    }

    /// Scans every record in the FASTA file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if any
    /// record is shorter than the configured window length.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use repscan::builder::RepeatScanner;
    ///
    /// let scans = RepeatScanner::new().length(4).scan_file("genome.fa")?;
    /// println!("Scanned {} records", scans.len());
    /// # Ok::<(), repscan::error::RepScanError>(())
    /// ```
    pub fn scan_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<RecordScan>, RepScanError> {
        scan_fasta(path, self.length, self.threshold, self.sort)
    }

    /// Scans a FASTA file and writes the tables to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, any record is shorter
    /// than the window length, or the output cannot be written.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use repscan::builder::RepeatScanner;
    /// use repscan::cli::OutputFormat;
    /// use std::fs::File;
    /// use std::io::BufWriter;
    ///
    /// let file = File::create("repeats.tsv")?;
    /// RepeatScanner::new()
    ///     .threshold(2)
    ///     .format(OutputFormat::Tsv)
    ///     .scan_to_writer("genome.fa", BufWriter::new(file))?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn scan_to_writer<P, W>(&self, path: P, writer: W) -> Result<(), RepScanError>
    where
        P: AsRef<Path>,
        W: Write,
    {
        let scans = self.scan_file(path)?;
        write_scans(writer, &scans, self.format)
    }

    /// Returns the configured window length.
    #[must_use]
    pub fn get_length(&self) -> usize {
        self.length
    }

    /// Returns the configured minimum occurrence count.
    #[must_use]
    pub fn get_threshold(&self) -> u64 {
        self.threshold
    }

    /// Returns the configured sort order.
    #[must_use]
    pub fn get_sort(&self) -> SortMode {
        self.sort
    }

    /// Returns the configured output format.
    #[must_use]
    pub fn get_format(&self) -> OutputFormat {
        self.format
    }
}
