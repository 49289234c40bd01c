//! Golden digest lock tests.
//!
//! Proves:
//! 1. Every variant of every fixture hashes to the recorded golden digest
//! 2. The golden file covers exactly the variant set (no stale or missing names)
//! 3. The harness candidate table agrees with direct kernel digests
//! 4. A golden digest used as the reference is reported as the primary match

use hashprobe_harness::candidates::CandidateTable;
use hashprobe_harness::input::load_document;
use hashprobe_harness::report::compare;
use hashprobe_kernel::hash::HexDigest;
use hashprobe_kernel::variant::Variant;
use lock_tests::{fixture_path, golden_fixtures};

// ---------------------------------------------------------------------------
// 1. Digests
// ---------------------------------------------------------------------------

#[test]
fn every_fixture_matches_golden_digests() {
    let golden = golden_fixtures();
    assert!(!golden.is_empty(), "golden file lists no fixtures");

    for (name, expected) in &golden {
        let doc = load_document(&fixture_path(name)).unwrap();
        assert_eq!(doc.raw().len(), expected.input_len, "{name}: input length");
        for &variant in Variant::ALL {
            let digest = variant.digest(&doc);
            assert_eq!(
                Some(digest.as_str()),
                expected.digests.get(variant.name()).map(String::as_str),
                "{name}: {variant} digest drifted"
            );
        }
    }
}

// ---------------------------------------------------------------------------
// 2. Coverage
// ---------------------------------------------------------------------------

#[test]
fn golden_file_covers_exactly_the_variant_set() {
    let names: Vec<&str> = Variant::ALL.iter().map(|v| v.name()).collect();
    for (fixture, expected) in golden_fixtures() {
        let mut recorded: Vec<&str> = expected.digests.keys().map(String::as_str).collect();
        let mut wanted = names.clone();
        recorded.sort_unstable();
        wanted.sort_unstable();
        assert_eq!(recorded, wanted, "{fixture}: variant names differ");
    }
}

// ---------------------------------------------------------------------------
// 3. Harness agrees with kernel
// ---------------------------------------------------------------------------

#[test]
fn candidate_table_matches_kernel_digests() {
    for name in golden_fixtures().keys() {
        let doc = load_document(&fixture_path(name)).unwrap();
        let table = CandidateTable::compute(&doc);
        for &variant in Variant::ALL {
            assert_eq!(table.get(variant), Some(&variant.digest(&doc)), "{variant}");
        }
    }
}

// ---------------------------------------------------------------------------
// 4. Golden reference is found
// ---------------------------------------------------------------------------

#[test]
fn ascii_reference_selects_ensure_ascii_variant() {
    let golden = golden_fixtures();
    let sample = &golden["license_sample.json"];
    let reference =
        HexDigest::parse(&sample.digests["sorted_minified_ensure_ascii"]).unwrap();

    let doc = load_document(&fixture_path("license_sample.json")).unwrap();
    let report = compare(&CandidateTable::compute(&doc), &reference);
    assert_eq!(report.matching_variants(), vec![Variant::SortedMinifiedEnsureAscii]);
}

#[test]
fn stripped_reference_selects_no_nulls_variant() {
    let golden = golden_fixtures();
    let sample = &golden["license_sample.json"];
    let reference = HexDigest::parse(&sample.digests["no_nulls_sorted_minified"]).unwrap();

    let doc = load_document(&fixture_path("license_sample.json")).unwrap();
    let report = compare(&CandidateTable::compute(&doc), &reference);
    assert_eq!(report.primary_match(), Some(Variant::NoNullsSortedMinified));
    // Minified output has no raw line feeds, so the CRLF variant coincides.
    assert_eq!(
        report.matching_variants(),
        vec![Variant::NoNullsSortedMinified, Variant::SortedMinifiedCrlf]
    );
}
