//! JSON writer: the single serialization-for-hashing implementation.
//!
//! `serde_json`'s own serializer is never used to produce hashed bytes. Its
//! float formatting and escaping defaults differ from the producers whose
//! hashes this tool has to reproduce, so every byte emitted here is decided
//! by an explicit [`JsonStyle`].
//!
//! # Rules
//!
//! 1. [`Layout::Compact`] separators are exactly `,` and `:`.
//! 2. [`Layout::Indented`] puts every element or member on its own line,
//!    indented by `width` spaces per depth, with `": "` between key and value.
//!    Empty containers stay `[]` and `{}`.
//! 3. [`KeyOrder::Sorted`] orders object keys by code point at every depth
//!    (identical to UTF-8 byte order). [`KeyOrder::Insertion`] keeps document
//!    order.
//! 4. Strings are escaped per [`Escape`], numbers are rendered per
//!    [`render_number`].

mod escape;
mod number;

pub use escape::Escape;
pub use number::render_number;

use serde_json::Value;

/// Whitespace layout of the emitted document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// No insignificant whitespace.
    Compact,
    /// One element per line, `usize` spaces per nesting level.
    Indented(usize),
}

/// Order in which object members are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOrder {
    /// Document order, as parsed.
    Insertion,
    /// Lexicographic by key at every nesting level.
    Sorted,
}

/// Full set of choices that determine the bytes of a serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonStyle {
    pub layout: Layout,
    pub key_order: KeyOrder,
    pub escape: Escape,
}

impl JsonStyle {
    /// Two-space indentation, document key order, non-ASCII literal.
    pub const PRETTY: Self = Self {
        layout: Layout::Indented(2),
        key_order: KeyOrder::Insertion,
        escape: Escape::Utf8,
    };

    /// No whitespace, document key order, non-ASCII literal.
    pub const MINIFIED: Self = Self {
        layout: Layout::Compact,
        key_order: KeyOrder::Insertion,
        escape: Escape::Utf8,
    };

    /// No whitespace, sorted keys, non-ASCII literal.
    pub const SORTED_MINIFIED: Self = Self {
        layout: Layout::Compact,
        key_order: KeyOrder::Sorted,
        escape: Escape::Utf8,
    };

    /// No whitespace, sorted keys, every non-ASCII char `\u`-escaped.
    pub const SORTED_MINIFIED_ASCII: Self = Self {
        layout: Layout::Compact,
        key_order: KeyOrder::Sorted,
        escape: Escape::Ascii,
    };
}

/// Serialize `value` into bytes according to `style`.
///
/// Infallible: every `serde_json::Value` has a rendering under every style.
/// Recurses once per nesting level; documents are bounded by
/// [`crate::document::MAX_DEPTH`].
#[must_use]
pub fn write_json(value: &Value, style: &JsonStyle) -> Vec<u8> {
    let mut buf = Vec::new();
    write_value(&mut buf, value, style, 0);
    buf
}

/// Replace every `\n` byte with `\r\n`.
#[must_use]
pub fn lf_to_crlf(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len());
    for &b in bytes {
        if b == b'\n' {
            out.push(b'\r');
        }
        out.push(b);
    }
    out
}

fn write_value(buf: &mut Vec<u8>, value: &Value, style: &JsonStyle, depth: usize) {
    match value {
        Value::Null => buf.extend_from_slice(b"null"),
        Value::Bool(b) => {
            if *b {
                buf.extend_from_slice(b"true");
            } else {
                buf.extend_from_slice(b"false");
            }
        }
        Value::Number(n) => {
            let literal = n.to_string();
            buf.extend_from_slice(render_number(&literal).as_bytes());
        }
        Value::String(s) => escape::write_string(buf, s, style.escape),
        Value::Array(items) => {
            if items.is_empty() {
                buf.extend_from_slice(b"[]");
                return;
            }
            buf.push(b'[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    buf.push(b',');
                }
                newline(buf, style.layout, depth + 1);
                write_value(buf, item, style, depth + 1);
            }
            newline(buf, style.layout, depth);
            buf.push(b']');
        }
        Value::Object(map) => {
            if map.is_empty() {
                buf.extend_from_slice(b"{}");
                return;
            }
            let mut members: Vec<(&String, &Value)> = map.iter().collect();
            if style.key_order == KeyOrder::Sorted {
                members.sort_by(|a, b| a.0.cmp(b.0));
            }

            buf.push(b'{');
            for (i, (key, item)) in members.into_iter().enumerate() {
                if i > 0 {
                    buf.push(b',');
                }
                newline(buf, style.layout, depth + 1);
                escape::write_string(buf, key, style.escape);
                match style.layout {
                    Layout::Compact => buf.push(b':'),
                    Layout::Indented(_) => buf.extend_from_slice(b": "),
                }
                write_value(buf, item, style, depth + 1);
            }
            newline(buf, style.layout, depth);
            buf.push(b'}');
        }
    }
}

fn newline(buf: &mut Vec<u8>, layout: Layout, depth: usize) {
    if let Layout::Indented(width) = layout {
        buf.push(b'\n');
        buf.resize(buf.len() + width * depth, b' ');
    }
}
