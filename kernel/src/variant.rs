//! The fixed set of candidate canonicalizations.
//!
//! Each [`Variant`] is a pure function from a [`Document`] to bytes. The set
//! and its order are closed: reports print variants in [`Variant::ALL`]
//! order and lock tests pin the names.

use std::borrow::Cow;

use crate::canon::{lf_to_crlf, write_json, JsonStyle};
use crate::document::Document;
use crate::hash::{sha256_hex, HexDigest};

/// Declares `Variant`, `name()`, `ALL` and `Display` from one list.
macro_rules! define_variants {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => $name:literal
        ),+ $(,)?
    ) => {
        /// One candidate canonicalization of the input document.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Variant {
            $(
                $(#[$meta])*
                $variant,
            )+
        }

        impl Variant {
            /// Stable report name (snake case).
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $( Self::$variant => $name, )+
                }
            }

            /// All variants in report order.
            pub const ALL: &[Variant] = &[
                $( Self::$variant, )+
            ];
        }

        impl core::fmt::Display for Variant {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

define_variants! {
    /// The file bytes as read, unparsed.
    RawFileBytes => "raw_file_bytes",

    /// Two-space indentation, document key order, non-ASCII literal.
    PrettyUtf8 => "pretty_utf8",

    /// No whitespace, document key order, non-ASCII literal.
    MinifiedUtf8 => "minified_utf8",

    /// No whitespace, keys sorted at every depth, non-ASCII literal.
    SortedMinifiedUtf8 => "sorted_minified_utf8",

    /// Null object members removed, then as `SortedMinifiedUtf8`.
    NoNullsSortedMinified => "no_nulls_sorted_minified",

    /// Null object members removed, sorted, minified, non-ASCII escaped.
    SortedMinifiedEnsureAscii => "sorted_minified_ensure_ascii",

    /// `NoNullsSortedMinified` with every LF expanded to CRLF.
    SortedMinifiedCrlf => "sorted_minified_crlf",
}

impl Variant {
    /// Look a variant up by its report name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.name() == name)
    }

    /// The exact bytes this variant hashes.
    #[must_use]
    pub fn render(self, doc: &Document) -> Cow<'_, [u8]> {
        match self {
            Self::RawFileBytes => Cow::Borrowed(doc.raw()),
            Self::PrettyUtf8 => Cow::Owned(write_json(doc.value(), &JsonStyle::PRETTY)),
            Self::MinifiedUtf8 => Cow::Owned(write_json(doc.value(), &JsonStyle::MINIFIED)),
            Self::SortedMinifiedUtf8 => {
                Cow::Owned(write_json(doc.value(), &JsonStyle::SORTED_MINIFIED))
            }
            Self::NoNullsSortedMinified => {
                Cow::Owned(write_json(doc.stripped(), &JsonStyle::SORTED_MINIFIED))
            }
            Self::SortedMinifiedEnsureAscii => Cow::Owned(write_json(
                doc.stripped(),
                &JsonStyle::SORTED_MINIFIED_ASCII,
            )),
            Self::SortedMinifiedCrlf => Cow::Owned(lf_to_crlf(&write_json(
                doc.stripped(),
                &JsonStyle::SORTED_MINIFIED,
            ))),
        }
    }

    /// SHA-256 of [`Variant::render`].
    #[must_use]
    pub fn digest(self, doc: &Document) -> HexDigest {
        sha256_hex(&self.render(doc))
    }
}
