//! Command-line interface definition.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::scan::SortMode;

/// A frame-aware repeat counter for biological sequences in FASTA files.
#[derive(Parser, Debug)]
#[command(name = "repscan")]
#[command(version, author, about, long_about = None)]
pub struct Args {
    /// Window length of the subsequences to count
    #[arg(value_parser = parse_length, default_value = "3")]
    pub length: usize,

    /// Path to a FASTA file ("-" or omitted reads stdin)
    pub path: Option<PathBuf>,

    /// Minimum occurrence count (subsequences below this are excluded)
    #[arg(short, long, default_value = "0")]
    pub threshold: u64,

    /// Sort order for the frequency table
    #[arg(short, long, value_enum, default_value = "none")]
    pub sort: SortMode,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Suppress informational output (only output frequency tables)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Output format for frequency tables.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    /// Per-record tables (>{id}, then {subseq}\t{count} rows)
    #[default]
    Table,
    /// Flat tab-separated rows ({id}\t{subseq}\t{count})
    Tsv,
    /// JSON array of records
    Json,
}

fn parse_length(s: &str) -> Result<usize, String> {
    let length: usize = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;
    if length == 0 {
        return Err("window length must be at least 1".to_string());
    }
    Ok(length)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_length_accepts_positive() {
        assert_eq!(parse_length("3"), Ok(3));
        assert_eq!(parse_length("21"), Ok(21));
    }

    #[test]
    fn parse_length_rejects_zero() {
        assert!(parse_length("0").is_err());
    }

    #[test]
    fn parse_length_rejects_non_numeric() {
        assert!(parse_length("abc").is_err());
        assert!(parse_length("-1").is_err());
    }

    #[test]
    fn args_defaults() {
        let args = Args::parse_from(["repscan"]);
        assert_eq!(args.length, 3);
        assert!(args.path.is_none());
        assert_eq!(args.threshold, 0);
        assert_eq!(args.sort, SortMode::None);
        assert!(!args.quiet);
    }

    #[test]
    fn args_sort_aliases() {
        let args = Args::parse_from(["repscan", "3", "--sort", "d"]);
        assert_eq!(args.sort, SortMode::Descending);
        let args = Args::parse_from(["repscan", "3", "--sort", "a"]);
        assert_eq!(args.sort, SortMode::Ascending);
    }
}
