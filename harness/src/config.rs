//! Probe configuration.
//!
//! The probe has exactly three knobs: which file to read, which digest to
//! look for, and how to print the result. Defaults reproduce the classic
//! invocation (a `license.json` in the working directory checked against the
//! digest shown by the producer's preview screen).

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use hashprobe_kernel::hash::HexDigest;
use thiserror::Error;

/// Input file read when no path is configured.
pub const DEFAULT_INPUT: &str = "license.json";

/// Reference digest used when none is configured.
pub const DEFAULT_REFERENCE: &str =
    "1dff99099d9f120ddb47223def5d1ae5b1de9ba3a7cb0fe90fff1a8bd2273e35";

/// Output format of the probe report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Human-readable table (default).
    #[default]
    Text,
    /// Pretty-printed JSON object.
    Json,
}

/// Unrecognized `--format` value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown report format {0:?} (expected \"text\" or \"json\")")]
pub struct UnknownFormat(pub String);

impl FromStr for ReportFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Everything a probe run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// JSON document to probe.
    pub input: PathBuf,
    /// Digest the candidates are compared against.
    pub reference: HexDigest,
    /// Report format written to the output sink.
    pub format: ReportFormat,
}

impl ProbeConfig {
    /// Text-format config for `input` and `reference`.
    pub fn new(input: impl Into<PathBuf>, reference: HexDigest) -> Self {
        Self {
            input: input.into(),
            reference,
            format: ReportFormat::default(),
        }
    }

    #[must_use]
    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }
}
