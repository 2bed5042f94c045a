//! pagetrace - memory-access trace coalescer
//!
//! Reads a trace of `<hex-address> <op>` lines and merges consecutive accesses
//! to the same 4 KiB page into one record per run, noting whether the page was
//! read, written, or both.

#![warn(missing_docs, rust_2024_compatibility)]

pub mod coalesce;
pub mod error;
pub mod logging;
pub mod trace;

pub use coalesce::{Access, Coalescer, Group, Summary, coalesce, run, write_groups};
pub use error::{Error, ParseErrorKind, Result};
pub use trace::{Op, PageNumber, Record, page_of, read_trace};
