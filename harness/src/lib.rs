//! hashprobe harness: runs the kernel's variants against one input file.
//!
//! The harness owns I/O and presentation: reading the input, building the
//! candidate table, comparing it with the reference digest and writing the
//! report. Every byte that gets hashed comes from the kernel.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod candidates;
pub mod config;
pub mod input;
pub mod report;
pub mod runner;
