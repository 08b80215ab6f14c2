//! Input source abstraction for file and stdin.
//!
//! The CLI accepts a FASTA file path or reads from standard input when the
//! path is omitted or given as `-`, so `repscan` composes in Unix
//! pipelines (`cat genome.fa | repscan 3`).

use std::{
    fs::File,
    io::{self, Read},
    path::{Path, PathBuf},
};

use crate::error::RepScanError;

/// Input source for sequence scanning.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Input {
    /// Read from a file at the specified path.
    File(PathBuf),
    /// Read from standard input.
    #[default]
    Stdin,
}

impl Input {
    /// Creates an `Input` from an optional path.
    ///
    /// `None` or `-` select stdin; anything else is treated as a file path.
    ///
    /// # Example
    ///
    /// ```rust
    /// use repscan::input::Input;
    /// use std::path::Path;
    ///
    /// assert!(matches!(Input::from_option(None), Input::Stdin));
    /// assert!(matches!(Input::from_option(Some(Path::new("-"))), Input::Stdin));
    /// assert!(matches!(Input::from_option(Some(Path::new("genome.fa"))), Input::File(_)));
    /// ```
    #[must_use]
    pub fn from_option(path: Option<&Path>) -> Self {
        match path {
            None => Self::Stdin,
            Some(p) if p.as_os_str() == "-" => Self::Stdin,
            Some(p) => Self::File(p.to_path_buf()),
        }
    }

    /// Opens the source as a reader for the FASTA parser.
    ///
    /// # Errors
    ///
    /// Returns [`RepScanError::SequenceRead`] if the file cannot be opened.
    pub fn open(&self) -> Result<Box<dyn Read>, RepScanError> {
        match self {
            Self::File(path) => {
                let file = File::open(path).map_err(|source| RepScanError::SequenceRead {
                    source,
                    path: path.clone(),
                })?;
                Ok(Box::new(file))
            }
            Self::Stdin => Ok(Box::new(io::stdin())),
        }
    }

    /// Returns the file path if this is a file input.
    #[must_use]
    pub fn as_path(&self) -> Option<&Path> {
        match self {
            Self::File(path) => Some(path),
            Self::Stdin => None,
        }
    }
}

impl std::fmt::Display for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Stdin => write!(f, "<stdin>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_option_none_is_stdin() {
        assert_eq!(Input::from_option(None), Input::Stdin);
    }

    #[test]
    fn from_option_dash_is_stdin() {
        assert_eq!(Input::from_option(Some(Path::new("-"))), Input::Stdin);
    }

    #[test]
    fn from_option_path_is_file() {
        let input = Input::from_option(Some(Path::new("genome.fa")));
        assert_eq!(input.as_path(), Some(Path::new("genome.fa")));
    }

    #[test]
    fn open_missing_file_fails() {
        let input = Input::File(PathBuf::from("/nonexistent/path/to/file.fa"));
        assert!(matches!(
            input.open(),
            Err(RepScanError::SequenceRead { .. })
        ));
    }

    #[test]
    fn display() {
        assert_eq!(Input::Stdin.to_string(), "<stdin>");
        assert_eq!(
            Input::File(PathBuf::from("genome.fa")).to_string(),
            "genome.fa"
        );
    }
}
