//! Candidate table: one digest per variant, in report order.

use hashprobe_kernel::document::Document;
use hashprobe_kernel::hash::HexDigest;
use hashprobe_kernel::variant::Variant;
use tracing::debug;

/// A variant together with the digest of its rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub variant: Variant,
    pub digest: HexDigest,
}

/// Digests of every [`Variant`] for one document, in [`Variant::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateTable {
    rows: Vec<Candidate>,
}

impl CandidateTable {
    /// Render and hash every variant of `doc`.
    #[must_use]
    pub fn compute(doc: &Document) -> Self {
        let rows = Variant::ALL
            .iter()
            .map(|&variant| {
                let digest = variant.digest(doc);
                debug!(%variant, %digest, "candidate digest");
                Candidate { variant, digest }
            })
            .collect();
        Self { rows }
    }

    #[must_use]
    pub fn rows(&self) -> &[Candidate] {
        &self.rows
    }

    /// Digest computed for `variant`.
    #[must_use]
    pub fn get(&self, variant: Variant) -> Option<&HexDigest> {
        self.rows
            .iter()
            .find(|row| row.variant == variant)
            .map(|row| &row.digest)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
