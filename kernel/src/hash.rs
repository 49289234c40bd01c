//! SHA-256 hex digests.
//!
//! Every digest in the probe, computed or supplied, is a [`HexDigest`]:
//! 64 lower-case hex characters. Supplied digests are lower-cased on parse,
//! so equality is case-insensitive with respect to the original input.

use std::fmt;
use std::str::FromStr;

use sha2::{Digest, Sha256};
use thiserror::Error;

/// Length of a SHA-256 digest in hex characters.
pub const SHA256_HEX_LEN: usize = 64;

/// A SHA-256 digest as lower-case hex.
///
/// Invariant: exactly [`SHA256_HEX_LEN`] chars from `[0-9a-f]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HexDigest(String);

/// Rejected reference digest.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DigestParseError {
    #[error("digest contains non-hex character {ch:?} at position {position}")]
    NonHex { position: usize, ch: char },
    #[error("digest must be {SHA256_HEX_LEN} hex characters, got {actual}")]
    Length { actual: usize },
}

impl HexDigest {
    /// Parse a hex digest in either case. Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`DigestParseError`] if the trimmed input contains a non-hex
    /// character or is not exactly [`SHA256_HEX_LEN`] characters long.
    pub fn parse(s: &str) -> Result<Self, DigestParseError> {
        let trimmed = s.trim();
        if let Some((position, ch)) = trimmed
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_hexdigit())
        {
            return Err(DigestParseError::NonHex { position, ch });
        }
        if trimmed.len() != SHA256_HEX_LEN {
            return Err(DigestParseError::Length {
                actual: trimmed.len(),
            });
        }
        Ok(Self(trimmed.to_ascii_lowercase()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for HexDigest {
    type Err = DigestParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for HexDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// SHA-256 of `data` as a [`HexDigest`].
#[must_use]
pub fn sha256_hex(data: &[u8]) -> HexDigest {
    HexDigest(hex::encode(Sha256::digest(data)))
}
