//! Parsed input document.
//!
//! A [`Document`] owns the raw bytes read from storage, the parsed value,
//! and the null-stripped copy derived from it. All three are fixed at
//! construction; variants only borrow them.
//!
//! Nesting is bounded by [`MAX_DEPTH`]. The bound is checked on the raw text
//! before parsing, so the recursive parser, [`strip_nulls`] and the writer
//! only ever see trees within it.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::strip::strip_nulls;

/// Deepest accepted container nesting (`[1]` has depth 1). Matches the
/// default recursion limit of the producers' JSON tooling.
pub const MAX_DEPTH: usize = 1000;

/// Why input bytes could not become a [`Document`].
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Input is not valid UTF-8.
    #[error("input is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    /// Input is not valid JSON.
    #[error("cannot parse JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Containers are nested deeper than [`MAX_DEPTH`].
    #[error("cannot parse JSON: nesting depth {actual} exceeds the limit of {max_depth}")]
    DepthExceeded { max_depth: usize, actual: usize },
}

/// Raw bytes plus the two value trees the variants serialize.
#[derive(Debug, Clone)]
pub struct Document {
    raw: Vec<u8>,
    value: Value,
    stripped: Value,
}

impl Document {
    /// Decode `raw` as UTF-8, parse it as JSON and derive the stripped copy.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Utf8`] for invalid UTF-8 and
    /// [`DocumentError::Json`] for anything `serde_json` rejects (including a
    /// leading byte-order mark and `NaN`/`Infinity` literals), and
    /// [`DocumentError::DepthExceeded`] past [`MAX_DEPTH`].
    pub fn parse(raw: Vec<u8>) -> Result<Self, DocumentError> {
        let text = std::str::from_utf8(&raw)?;
        let actual = nesting_depth(text);
        if actual > MAX_DEPTH {
            return Err(DocumentError::DepthExceeded {
                max_depth: MAX_DEPTH,
                actual,
            });
        }

        // serde_json's own limit (128) is far below MAX_DEPTH.
        let mut de = serde_json::Deserializer::from_str(text);
        de.disable_recursion_limit();
        let value = Value::deserialize(&mut de)?;
        de.end()?;
        Ok(Self::from_parts(raw, value))
    }

    /// Build a document from bytes and an already-parsed value.
    ///
    /// `value` is not depth-checked; callers own that bound.
    #[must_use]
    pub fn from_parts(raw: Vec<u8>, value: Value) -> Self {
        let stripped = strip_nulls(&value);
        Self {
            raw,
            value,
            stripped,
        }
    }

    /// The bytes exactly as read.
    #[must_use]
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// The parsed value, key order as in the input.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The parsed value with null object members removed.
    #[must_use]
    pub fn stripped(&self) -> &Value {
        &self.stripped
    }
}

/// Maximum container nesting in `text`, ignoring brackets inside strings.
///
/// Iterative, so it is safe on input of any depth. Malformed text still
/// yields a number; the parser reports the actual syntax error.
fn nesting_depth(text: &str) -> usize {
    let mut depth = 0usize;
    let mut max = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for b in text.bytes() {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'[' | b'{' => {
                depth += 1;
                max = max.max(depth);
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    max
}
