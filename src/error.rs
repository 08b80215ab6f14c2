//! Error types for repscan.
//!
//! All scan-level errors are validation failures detected eagerly on
//! construction inputs; they are reported synchronously and never produce
//! a partial result. The crate-level [`RepScanError`] additionally covers
//! the CLI's I/O surface.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in repscan operations.
#[derive(Debug, Error)]
pub enum RepScanError {
    /// Window length is zero or exceeds the sequence length.
    #[error("invalid window length {length}: must be between 1 and the sequence length ({sequence_length})")]
    InvalidWindowLength {
        length: usize,
        sequence_length: usize,
    },

    /// Unrecognized sort mode token.
    #[error("invalid sort mode '{mode}': expected none, descending (d), or ascending (a)")]
    InvalidSortMode { mode: String },

    /// Failed to read sequence file.
    #[error("failed to read sequence file '{path}': {source}")]
    SequenceRead {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },

    /// Failed to parse sequence record.
    #[error("failed to parse sequence record: {details}")]
    SequenceParse { details: String },

    /// Failed to write output.
    #[error("failed to write output: {source}")]
    WriteError {
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize JSON output.
    #[error("failed to serialize JSON: {source}")]
    JsonError {
        #[source]
        source: serde_json::Error,
    },
}

/// Error for an invalid window length.
///
/// Carries the sequence length so callers can see why the bound failed:
/// a window can never be longer than the sequence it is cut from.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("window length {length} is out of range: must be between 1 and the sequence length ({sequence_length})")]
pub struct WindowLengthError {
    /// The invalid length that was provided.
    pub length: usize,
    /// Length of the sequence being scanned.
    pub sequence_length: usize,
}

/// Error for an unrecognized sort mode token.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("'{0}' is not a recognized sort mode: expected none, descending (d), or ascending (a)")]
pub struct SortModeError(pub String);

impl From<std::io::Error> for RepScanError {
    fn from(source: std::io::Error) -> Self {
        RepScanError::WriteError { source }
    }
}

impl From<serde_json::Error> for RepScanError {
    fn from(source: serde_json::Error) -> Self {
        RepScanError::JsonError { source }
    }
}

impl From<WindowLengthError> for RepScanError {
    fn from(err: WindowLengthError) -> Self {
        RepScanError::InvalidWindowLength {
            length: err.length,
            sequence_length: err.sequence_length,
        }
    }
}

impl From<SortModeError> for RepScanError {
    fn from(err: SortModeError) -> Self {
        RepScanError::InvalidSortMode { mode: err.0 }
    }
}
