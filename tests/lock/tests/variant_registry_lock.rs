//! Variant registry governance lock tests.
//!
//! Proves:
//! 1. The variant set has the expected count (catches forgotten additions to ALL)
//! 2. All variant names are unique
//! 3. All names are lower snake case and fit the report name column
//! 4. Report order is pinned
//! 5. Sorted-key variants sort at every depth, insertion variants never do

use std::collections::BTreeSet;

use hashprobe_harness::report::NAME_WIDTH;
use hashprobe_kernel::document::Document;
use hashprobe_kernel::variant::Variant;

// ---------------------------------------------------------------------------
// 1. Count
// ---------------------------------------------------------------------------

#[test]
fn variant_set_count() {
    assert_eq!(
        Variant::ALL.len(),
        7,
        "expected 7 variants; if you added one, update this count and the golden digests"
    );
}

// ---------------------------------------------------------------------------
// 2. Unique names
// ---------------------------------------------------------------------------

#[test]
fn variant_names_unique() {
    let mut seen = BTreeSet::new();
    for variant in Variant::ALL {
        assert!(seen.insert(variant.name()), "duplicate name: {variant}");
    }
}

// ---------------------------------------------------------------------------
// 3. Naming convention
// ---------------------------------------------------------------------------

#[test]
fn variant_names_are_snake_case_and_fit_column() {
    for variant in Variant::ALL {
        let name = variant.name();
        assert!(
            name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'),
            "{name} is not lower snake case"
        );
        assert!(name.len() < NAME_WIDTH, "{name} overflows the name column");
    }
}

// ---------------------------------------------------------------------------
// 4. Order
// ---------------------------------------------------------------------------

#[test]
fn report_order_is_pinned() {
    assert_eq!(
        Variant::ALL,
        &[
            Variant::RawFileBytes,
            Variant::PrettyUtf8,
            Variant::MinifiedUtf8,
            Variant::SortedMinifiedUtf8,
            Variant::NoNullsSortedMinified,
            Variant::SortedMinifiedEnsureAscii,
            Variant::SortedMinifiedCrlf,
        ]
    );
}

// ---------------------------------------------------------------------------
// 5. Key order
// ---------------------------------------------------------------------------

fn object_keys_in_order(bytes: &[u8]) -> Vec<String> {
    let value: serde_json::Value = serde_json::from_slice(bytes).unwrap();
    let mut keys = Vec::new();
    collect_keys(&value, &mut keys);
    keys
}

fn collect_keys(value: &serde_json::Value, keys: &mut Vec<String>) {
    match value {
        serde_json::Value::Object(map) => {
            for (k, v) in map {
                keys.push(k.clone());
                collect_keys(v, keys);
            }
        }
        serde_json::Value::Array(items) => {
            for item in items {
                collect_keys(item, keys);
            }
        }
        _ => {}
    }
}

#[test]
fn key_order_per_variant() {
    let doc = Document::parse(br#"{"z":{"y":1,"b":2},"a":[{"q":1,"c":2}]}"#.to_vec()).unwrap();
    let insertion = ["z", "y", "b", "a", "q", "c"];
    let sorted = ["a", "c", "q", "z", "b", "y"];

    for &variant in Variant::ALL {
        let rendered = variant.render(&doc);
        let keys = object_keys_in_order(&rendered);
        let expected: &[&str] = match variant {
            Variant::RawFileBytes | Variant::PrettyUtf8 | Variant::MinifiedUtf8 => &insertion,
            _ => &sorted,
        };
        assert_eq!(keys, expected, "{variant}");
    }
}
