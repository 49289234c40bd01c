//! String escaping.
//!
//! Both modes use the short escapes `\"`, `\\`, `\b`, `\f`, `\n`, `\r`, `\t`
//! and write every other escaped char as `\u` plus four lower-case hex digits.

use std::io::Write;

/// Which characters are escaped inside string literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escape {
    /// Escape only `"`, `\` and U+0000..U+001F. Everything else is written
    /// as literal UTF-8.
    Utf8,
    /// Additionally escape every char outside printable ASCII
    /// (U+0020..U+007E), DEL included. Chars above U+FFFF become a UTF-16
    /// surrogate pair.
    Ascii,
}

pub(super) fn write_string(buf: &mut Vec<u8>, s: &str, escape: Escape) {
    buf.push(b'"');
    for ch in s.chars() {
        match ch {
            '"' => buf.extend_from_slice(b"\\\""),
            '\\' => buf.extend_from_slice(b"\\\\"),
            '\n' => buf.extend_from_slice(b"\\n"),
            '\r' => buf.extend_from_slice(b"\\r"),
            '\t' => buf.extend_from_slice(b"\\t"),
            '\u{0008}' => buf.extend_from_slice(b"\\b"),
            '\u{000c}' => buf.extend_from_slice(b"\\f"),
            c if c < '\u{0020}' => write_unit(buf, c as u16),
            c if escape == Escape::Ascii && !(' '..='~').contains(&c) => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    write_unit(buf, *unit);
                }
            }
            c => {
                let mut utf8_buf = [0u8; 4];
                buf.extend_from_slice(c.encode_utf8(&mut utf8_buf).as_bytes());
            }
        }
    }
    buf.push(b'"');
}

fn write_unit(buf: &mut Vec<u8>, unit: u16) {
    let _ = write!(buf, "\\u{unit:04x}");
}
