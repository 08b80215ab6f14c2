//! FASTA scanning and output.
//!
//! Reads FASTA records from a file or stdin, scans every record
//! independently on rayon worker threads (the scan is pure and re-entrant,
//! so records never share mutable state), and writes per-record frequency
//! tables in the selected output format, preserving input order.

use std::{io::Write, path::Path};

use bio::io::fasta;
use rayon::prelude::*;

use crate::{
    cli::OutputFormat,
    error::RepScanError,
    input::Input,
    scan::{FrameScan, SortMode},
};

#[cfg(feature = "tracing")]
use tracing::info;

/// One scanned FASTA record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordScan {
    /// FASTA record id.
    pub id: String,
    /// Scan result for the record's sequence.
    pub scan: FrameScan,
}

/// Scans every record from `input` and writes the tables to `out`.
///
/// # Errors
///
/// Returns an error if the input cannot be read or parsed, any record is
/// shorter than the window length, or the output cannot be written.
pub fn run<W: Write>(
    input: &Input,
    length: usize,
    threshold: u64,
    sort: SortMode,
    format: OutputFormat,
    out: W,
) -> Result<(), RepScanError> {
    let scans = scan_input(input, length, threshold, sort)?;
    write_scans(out, &scans, format)
}

/// Scans every FASTA record in the file at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if any record
/// is shorter than the window length.
///
/// # Example
///
/// ```rust,no_run
/// use repscan::run::scan_fasta;
/// use repscan::scan::SortMode;
///
/// let scans = scan_fasta("genome.fa", 3, 0, SortMode::Descending)?;
/// for record in &scans {
///     println!("{}: {} distinct subsequences", record.id, record.scan.subseqs().len());
/// }
/// # Ok::<(), repscan::error::RepScanError>(())
/// ```
pub fn scan_fasta<P: AsRef<Path>>(
    path: P,
    length: usize,
    threshold: u64,
    sort: SortMode,
) -> Result<Vec<RecordScan>, RepScanError> {
    let input = Input::File(path.as_ref().to_path_buf());
    scan_input(&input, length, threshold, sort)
}

/// Scans every record from an [`Input`] source.
///
/// # Errors
///
/// Returns an error if the source cannot be read or parsed, or if any
/// record is shorter than the window length.
pub fn scan_input(
    input: &Input,
    length: usize,
    threshold: u64,
    sort: SortMode,
) -> Result<Vec<RecordScan>, RepScanError> {
    let records = read_records(input)?;

    #[cfg(feature = "tracing")]
    info!(
        records = records.len(),
        length,
        source = %input,
        "scanning records"
    );

    scan_records(records, length, threshold, sort)
}

/// Scans already-loaded records in parallel, preserving input order.
///
/// A record shorter than the window length fails the whole scan; there is
/// no silent truncation.
pub fn scan_records(
    records: Vec<(String, Vec<u8>)>,
    length: usize,
    threshold: u64,
    sort: SortMode,
) -> Result<Vec<RecordScan>, RepScanError> {
    records
        .into_par_iter()
        .map(|(id, seq)| {
            FrameScan::new(&seq, length, threshold, sort)
                .map(|scan| RecordScan { id, scan })
                .map_err(RepScanError::from)
        })
        .collect()
}

fn read_records(input: &Input) -> Result<Vec<(String, Vec<u8>)>, RepScanError> {
    let reader = fasta::Reader::new(input.open()?);
    let mut records = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| RepScanError::SequenceParse {
            details: e.to_string(),
        })?;
        records.push((record.id().to_string(), record.seq().to_vec()));
    }
    Ok(records)
}

/// Writes scanned records to `out` in the requested format.
///
/// # Errors
///
/// Returns an error if the output cannot be written or serialized.
pub fn write_scans<W: Write>(
    mut out: W,
    scans: &[RecordScan],
    format: OutputFormat,
) -> Result<(), RepScanError> {
    match format {
        OutputFormat::Table => {
            for record in scans {
                writeln!(out, ">{}", record.id)?;
                for (subseq, count) in record.scan.counts() {
                    writeln!(out, "{subseq}\t{count}")?;
                }
            }
        }
        OutputFormat::Tsv => {
            for record in scans {
                for (subseq, count) in record.scan.counts() {
                    writeln!(out, "{}\t{subseq}\t{count}", record.id)?;
                }
            }
        }
        OutputFormat::Json => {
            #[derive(serde::Serialize)]
            struct Entry<'a> {
                subseq: &'a str,
                count: u64,
            }
            #[derive(serde::Serialize)]
            struct Record<'a> {
                id: &'a str,
                subseqs: &'a [String],
                counts: Vec<Entry<'a>>,
            }
            let json_data: Vec<Record<'_>> = scans
                .iter()
                .map(|r| Record {
                    id: &r.id,
                    subseqs: r.scan.subseqs(),
                    counts: r
                        .scan
                        .counts()
                        .iter()
                        .map(|(subseq, count)| Entry {
                            subseq,
                            count: *count,
                        })
                        .collect(),
                })
                .collect();
            serde_json::to_writer_pretty(&mut out, &json_data)?;
            writeln!(out)?;
        }
    }

    out.flush()?;
    Ok(())
}
