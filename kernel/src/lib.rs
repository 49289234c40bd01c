//! hashprobe kernel: the deterministic core of hashprobe.
//!
//! # API Surface
//!
//! - [`document::Document::parse`] -- raw bytes into a parsed document
//! - [`variant::Variant::render`] / [`variant::Variant::digest`] -- one
//!   candidate canonicalization of a document, and its SHA-256
//! - [`hash::HexDigest::parse`] -- accept a reference digest
//!
//! # Module Dependency Direction
//!
//! `canon`, `strip`, `hash` ← `document` ← `variant`
//!
//! One-way only. No I/O anywhere in the kernel.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod canon;
pub mod document;
pub mod hash;
pub mod strip;
pub mod variant;
