//! Shared helpers for lock tests: fixture paths and golden digests.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Workspace root (two levels above this crate's manifest).
///
/// # Panics
///
/// Panics if the crate is not nested at `tests/lock` inside the workspace.
#[must_use]
pub fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(Path::parent)
        .expect("lock crate lives at <workspace>/tests/lock")
        .to_path_buf()
}

/// Absolute path of a file under `tests/fixtures`.
#[must_use]
pub fn fixture_path(name: &str) -> PathBuf {
    workspace_root().join("tests/fixtures").join(name)
}

/// Golden values recorded for one fixture file.
#[derive(Debug, Clone)]
pub struct GoldenFixture {
    pub input_len: usize,
    /// Variant name → lower-case hex digest.
    pub digests: BTreeMap<String, String>,
}

/// Load `tests/fixtures/golden_digests.json`.
///
/// # Panics
///
/// Panics if the golden file is missing or malformed. Test-only invariant.
#[must_use]
pub fn golden_fixtures() -> BTreeMap<String, GoldenFixture> {
    let path = fixture_path("golden_digests.json");
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()));
    let value: serde_json::Value =
        serde_json::from_str(&contents).expect("golden digests are valid JSON");

    value
        .as_object()
        .expect("golden file is an object keyed by fixture name")
        .iter()
        .map(|(name, entry)| {
            let input_len = entry["input_len"]
                .as_u64()
                .and_then(|n| usize::try_from(n).ok())
                .expect("input_len is a non-negative integer");
            let digests = entry["digests"]
                .as_object()
                .expect("digests is an object")
                .iter()
                .map(|(variant, digest)| {
                    let digest = digest.as_str().expect("digest is a string");
                    (variant.clone(), digest.to_string())
                })
                .collect();
            (name.clone(), GoldenFixture { input_len, digests })
        })
        .collect()
}
