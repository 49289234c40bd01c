//! Comparison against the reference digest and report rendering.
//!
//! Variants can coincide byte-for-byte on a given input (a document with no
//! nulls, no non-ASCII text and no line feeds renders identically under the
//! last three variants). Such rows always match or miss together, so the
//! report names the first matching row as the primary match and lists the
//! others as identical output rather than as independent evidence.

use std::io::{self, Write};
use std::path::Path;

use hashprobe_kernel::hash::HexDigest;
use hashprobe_kernel::variant::Variant;
use serde::Serialize;

use crate::candidates::CandidateTable;

/// Column width of the variant name in the text table.
pub const NAME_WIDTH: usize = 30;

/// Suffix appended to matching rows.
pub const MATCH_MARKER: &str = "  <-- MATCH";

/// Follow-up checks printed when nothing matched.
pub const SUGGESTIONS: [&str; 3] = [
    "Check if the reference hash was computed after adding the 'ChecksumSHA256' field (it should NOT).",
    "Check encoding used by the producer (UTF-16 vs UTF-8).",
    "Paste the exact JSON emitted by the producer into the input file and re-run.",
];

/// One row of the comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateOutcome {
    pub variant: Variant,
    pub digest: HexDigest,
    /// Digest equals the reference.
    pub matches: bool,
    /// Earliest row with the same digest, when this row repeats it.
    pub same_as: Option<Variant>,
}

/// Result of comparing a [`CandidateTable`] against a reference digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    pub reference: HexDigest,
    pub outcomes: Vec<CandidateOutcome>,
}

/// Compare every candidate against `reference`.
///
/// Both sides are lower-case [`HexDigest`]s, so the comparison is
/// case-insensitive with respect to how the reference was supplied.
#[must_use]
pub fn compare(table: &CandidateTable, reference: &HexDigest) -> ProbeReport {
    let mut outcomes: Vec<CandidateOutcome> = Vec::with_capacity(table.len());
    for row in table.rows() {
        let same_as = outcomes
            .iter()
            .find(|earlier| earlier.digest == row.digest)
            .map(|earlier| earlier.variant);
        outcomes.push(CandidateOutcome {
            variant: row.variant,
            digest: row.digest.clone(),
            matches: row.digest == *reference,
            same_as,
        });
    }
    ProbeReport {
        reference: reference.clone(),
        outcomes,
    }
}

impl ProbeReport {
    /// Whether any variant reproduced the reference.
    #[must_use]
    pub fn matched(&self) -> bool {
        self.outcomes.iter().any(|o| o.matches)
    }

    /// Every matching variant, in report order.
    #[must_use]
    pub fn matching_variants(&self) -> Vec<Variant> {
        self.outcomes
            .iter()
            .filter(|o| o.matches)
            .map(|o| o.variant)
            .collect()
    }

    /// First matching variant in report order.
    #[must_use]
    pub fn primary_match(&self) -> Option<Variant> {
        self.outcomes.iter().find(|o| o.matches).map(|o| o.variant)
    }

    /// Write the candidate table and summary as text.
    ///
    /// # Errors
    ///
    /// Propagates write failures from `out`.
    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "Computed candidate hashes:")?;
        for o in &self.outcomes {
            let marker = if o.matches { MATCH_MARKER } else { "" };
            writeln!(
                out,
                "{:<width$} {}{marker}",
                o.variant.name(),
                o.digest,
                width = NAME_WIDTH
            )?;
        }

        writeln!(out)?;
        if let Some(primary) = self.primary_match() {
            writeln!(
                out,
                "FOUND MATCH. The matching canonicalization is the one marked '<-- MATCH'."
            )?;
            writeln!(out, "Primary match: {primary}")?;
            let identical: Vec<&str> = self
                .outcomes
                .iter()
                .filter(|o| o.matches && o.same_as.is_some())
                .map(|o| o.variant.name())
                .collect();
            if !identical.is_empty() {
                writeln!(
                    out,
                    "Identical bytes for this input: {}",
                    identical.join(", ")
                )?;
            }
        } else {
            writeln!(out, "No match found among candidate canonicalizations.")?;
            writeln!(out, "If none match, try these additional checks:")?;
            for suggestion in SUGGESTIONS {
                writeln!(out, "- {suggestion}")?;
            }
        }
        Ok(())
    }
}

/// Serializable form of a [`ProbeReport`] for `--format json`.
#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    pub input: String,
    pub input_len: usize,
    pub reference: String,
    pub candidates: Vec<JsonCandidate>,
    pub matched: bool,
    pub primary_match: Option<&'static str>,
    pub suggestions: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonCandidate {
    pub name: &'static str,
    pub digest: String,
    pub matches: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub same_as: Option<&'static str>,
}

impl JsonReport {
    #[must_use]
    pub fn new(input: &Path, input_len: usize, report: &ProbeReport) -> Self {
        let matched = report.matched();
        Self {
            input: input.display().to_string(),
            input_len,
            reference: report.reference.to_string(),
            candidates: report
                .outcomes
                .iter()
                .map(|o| JsonCandidate {
                    name: o.variant.name(),
                    digest: o.digest.to_string(),
                    matches: o.matches,
                    same_as: o.same_as.map(Variant::name),
                })
                .collect(),
            matched,
            primary_match: report.primary_match().map(Variant::name),
            suggestions: if matched {
                Vec::new()
            } else {
                SUGGESTIONS.to_vec()
            },
        }
    }
}
