//! `hashprobe`: find which JSON serialization reproduces a known SHA-256.
//!
//! Usage: `hashprobe [--input PATH] [--reference HEX] [--format text|json]`
//!
//! Exit codes: 0 when the report was written (match or not), 1 when the
//! input cannot be read or parsed, 2 for invalid arguments.

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use hashprobe_harness::config::{ProbeConfig, ReportFormat, DEFAULT_INPUT, DEFAULT_REFERENCE};
use hashprobe_harness::runner::run_probe;
use hashprobe_kernel::hash::HexDigest;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Parser, Debug)]
#[command(
    name = "hashprobe",
    version,
    about = "Hash a JSON document under several canonicalizations and report which one reproduces a reference SHA-256"
)]
struct Cli {
    /// JSON document to probe.
    #[arg(long, short, env = "HASHPROBE_INPUT", default_value = DEFAULT_INPUT)]
    input: PathBuf,
    /// Reference SHA-256 (64 hex characters, any case).
    #[arg(long, short, env = "HASHPROBE_REFERENCE", default_value = DEFAULT_REFERENCE)]
    reference: HexDigest,
    /// Report format.
    #[arg(long, default_value_t = ReportFormat::Text)]
    format: ReportFormat,
}

impl Cli {
    fn into_config(self) -> ProbeConfig {
        ProbeConfig::new(self.input, self.reference).with_format(self.format)
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    let config = cli.into_config();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run_probe(&config, &mut out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            let _ = out.flush();
            // The `error:` line is the user-facing report; the event carries the source chain.
            debug!(error = ?err, "probe aborted");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
