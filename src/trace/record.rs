//! Trace records and line parsing

use std::io::BufRead;

use tracing::warn;

use super::{PageNumber, page_of};
use crate::error::{Error, ParseErrorKind, Result};

/// Memory operation kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Load from memory
    Read,
    /// Store to memory
    Write,
}

impl Op {
    /// Classify an operation token. Only `R` is a read; every other token is a write.
    pub fn from_token(token: &str) -> Self {
        if token == "R" { Op::Read } else { Op::Write }
    }
}

/// A single memory access
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    /// Virtual address accessed
    pub address: u64,
    /// Operation performed
    pub op: Op,
}

impl Record {
    /// Create a record
    pub fn new(address: u64, op: Op) -> Self {
        Self { address, op }
    }

    /// Parse a `<hex-address> <op>` line. Exactly two tokens are accepted.
    pub fn parse(line: &str) -> std::result::Result<Self, ParseErrorKind> {
        let mut tokens = line.split_whitespace();
        let (addr, op) = match (tokens.next(), tokens.next()) {
            (Some(addr), Some(op)) => (addr, op),
            (first, _) => {
                return Err(ParseErrorKind::MissingField {
                    found: usize::from(first.is_some()),
                });
            }
        };
        let extra = tokens.count();
        if extra > 0 {
            return Err(ParseErrorKind::TrailingField { found: 2 + extra });
        }

        let digits = addr
            .strip_prefix("0x")
            .or_else(|| addr.strip_prefix("0X"))
            .unwrap_or(addr);
        let address = u64::from_str_radix(digits, 16).map_err(|_| {
            ParseErrorKind::InvalidAddress {
                token: addr.to_string(),
            }
        })?;

        Ok(Self::new(address, Op::from_token(op)))
    }

    /// Page this record touches
    #[inline]
    pub fn page(&self) -> PageNumber {
        page_of(self.address)
    }
}

/// Read and parse a whole trace, failing on the first malformed line.
pub fn read_trace<R: BufRead>(reader: R) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    for (idx, raw) in reader.split(b'\n').enumerate() {
        let raw = raw?;
        let bytes = raw.strip_suffix(b"\r").unwrap_or(&raw[..]);
        let parsed = std::str::from_utf8(bytes)
            .map_err(|_| ParseErrorKind::InvalidUtf8)
            .and_then(Record::parse);
        match parsed {
            Ok(record) => records.push(record),
            Err(kind) => {
                let content = String::from_utf8_lossy(bytes).into_owned();
                warn!(line = idx + 1, content = %content, "malformed trace line");
                return Err(Error::Parse {
                    line: idx + 1,
                    content,
                    kind,
                });
            }
        }
    }
    Ok(records)
}
