//! Shared helpers for hashprobe benchmark suites.

use hashprobe_kernel::document::Document;
use serde_json::{json, Map, Value};

/// Build a license-shaped document with `records` entries.
///
/// Each entry mixes the shapes the variants treat differently: non-ASCII
/// text, nulls in objects and arrays, decimal and exponent numbers, and
/// keys that are not in sorted order.
///
/// # Panics
///
/// Panics if the generated JSON fails to reparse. Benchmark setup failures are fatal.
#[must_use]
pub fn sample_document(records: usize) -> Document {
    let mut entries = Vec::with_capacity(records);
    for i in 0..records {
        let mut entry = Map::new();
        entry.insert("serial".into(), json!(format!("LIC-{i:06}")));
        entry.insert("owner".into(), json!("Zoë Ångström 🚀"));
        entry.insert("expires".into(), Value::Null);
        entry.insert("price".into(), json!(12.5 + f64::from(u32::try_from(i % 1000).unwrap_or(0))));
        entry.insert("ratio".into(), json!(1.0e-7));
        entry.insert("tags".into(), json!(["a", null, "b"]));
        entry.insert("active".into(), json!(i % 2 == 0));
        entries.push(Value::Object(entry));
    }
    let root = json!({ "version": 3, "licenses": entries, "comment": null });
    let raw = serde_json::to_vec_pretty(&root).expect("serialize sample");
    Document::parse(raw).expect("reparse sample")
}
