//! Probe runner: one pass from input file to written report.
//!
//! # Pipeline
//!
//! ```text
//! read_input() → [text: byte length line] → parse_input()
//!   → CandidateTable::compute() → compare() → write report
//! ```
//!
//! A load failure aborts the run before any candidate is computed. Not
//! matching the reference is a normal outcome and returns `Ok`.

use std::io::{self, Write};

use thiserror::Error;
use tracing::{info, warn};

use crate::candidates::CandidateTable;
use crate::config::{ProbeConfig, ReportFormat};
use crate::input::{parse_input, read_input, LoadError};
use crate::report::{compare, JsonReport, ProbeReport};

/// Failure of a probe run.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The input could not be read or parsed.
    #[error(transparent)]
    Load(#[from] LoadError),
    /// Writing the report failed.
    #[error("cannot write report: {0}")]
    Output(#[from] io::Error),
    /// Encoding the JSON report failed.
    #[error("cannot encode report: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Run the probe described by `config`, writing the report to `out`.
///
/// # Errors
///
/// Returns [`ProbeError::Load`] for unreadable or malformed input and
/// [`ProbeError::Output`] / [`ProbeError::Encode`] if the report cannot be
/// written.
pub fn run_probe<W: Write>(config: &ProbeConfig, out: &mut W) -> Result<ProbeReport, ProbeError> {
    let raw = read_input(&config.input)?;
    let input_len = raw.len();
    info!(path = %config.input.display(), bytes = input_len, "input read");

    if config.format == ReportFormat::Text {
        writeln!(out, "File bytes length: {input_len}")?;
    }

    let doc = parse_input(&config.input, raw)?;
    let table = CandidateTable::compute(&doc);
    let report = compare(&table, &config.reference);

    match config.format {
        ReportFormat::Text => report.write_text(out)?,
        ReportFormat::Json => {
            let json = JsonReport::new(&config.input, input_len, &report);
            serde_json::to_writer_pretty(&mut *out, &json)?;
            writeln!(out)?;
        }
    }
    out.flush()?;

    match report.primary_match() {
        Some(primary) => info!(
            %primary,
            matches = report.matching_variants().len(),
            "reference reproduced"
        ),
        None => warn!(
            reference = %config.reference,
            "no candidate canonicalization reproduced the reference"
        ),
    }
    Ok(report)
}
