//! Tiny binary that hashes a fixture under every variant and prints
//! deterministic output lines for cross-process verification.
//!
//! Used by the cross-process determinism tests to verify that variant bytes
//! do not depend on process state (cwd, locale, env).
//!
//! Usage: `variants_fixture` `<fixture-path>`
//! Output: `input_len=<n>` followed by one `<variant>=<hex digest>` line per
//! variant, in report order.

use hashprobe_harness::input::load_document;
use hashprobe_kernel::variant::Variant;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let fixture_path = args
        .get(1)
        .expect("usage: variants_fixture <fixture-path>");

    let doc = load_document(fixture_path.as_ref())
        .unwrap_or_else(|e| panic!("cannot load fixture at {fixture_path}: {e}"));

    println!("input_len={}", doc.raw().len());
    for &variant in Variant::ALL {
        println!("{variant}={}", variant.digest(&doc));
    }
}
