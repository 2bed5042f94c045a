//! Run-length coalescing of consecutive same-page accesses

use std::fmt;
use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::Result;
use crate::trace::{Op, PageNumber, Record, read_trace};

/// Operations observed within one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Access {
    /// At least one read
    pub read: bool,
    /// At least one write
    pub write: bool,
}

impl Access {
    /// Fold an operation in
    pub fn record(&mut self, op: Op) {
        match op {
            Op::Read => self.read = true,
            Op::Write => self.write = true,
        }
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.read {
            f.write_str("R")?;
        }
        if self.write {
            f.write_str("W")?;
        }
        Ok(())
    }
}

/// A closed run of accesses to one page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group {
    /// Page touched by every access in the run
    pub page: PageNumber,
    /// Union of operations in the run
    pub access: Access,
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:5x} {}", self.page, self.access)
    }
}

/// Incremental coalescing state.
///
/// Feed records with [`push`](Self::push); each call returns the group it
/// closed, if the page changed. Call [`finish`](Self::finish) once the input
/// is exhausted to flush the trailing group.
#[derive(Debug, Default)]
pub struct Coalescer {
    open: Option<Group>,
}

impl Coalescer {
    /// Create a coalescer with no open group
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one record in, returning the previous group if this record starts a new run
    pub fn push(&mut self, record: Record) -> Option<Group> {
        let page = record.page();
        let closed = if self.open.is_some_and(|group| group.page == page) {
            None
        } else {
            self.open.replace(Group {
                page,
                access: Access::default(),
            })
        };
        if let Some(group) = self.open.as_mut() {
            group.access.record(record.op);
        }
        closed
    }

    /// Flush the trailing group
    pub fn finish(self) -> Option<Group> {
        self.open
    }
}

/// Coalesce a whole trace
pub fn coalesce<I>(records: I) -> Vec<Group>
where
    I: IntoIterator<Item = Record>,
{
    let mut coalescer = Coalescer::new();
    let mut groups: Vec<Group> = records
        .into_iter()
        .filter_map(|record| coalescer.push(record))
        .collect();
    groups.extend(coalescer.finish());
    groups
}

/// Write one line per group
pub fn write_groups<W: Write>(groups: &[Group], mut out: W) -> Result<()> {
    for group in groups {
        writeln!(out, "{group}")?;
    }
    Ok(())
}

/// Counts from one [`run`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Records parsed from the input
    pub records: usize,
    /// Groups written to the output
    pub groups: usize,
}

/// Read a full trace from `input`, coalesce it and write the groups to `out`.
///
/// The input is parsed completely before anything is written, so a malformed
/// line produces no output.
pub fn run<R: BufRead, W: Write>(input: R, out: W) -> Result<Summary> {
    let records = read_trace(input)?;
    let groups = coalesce(records.iter().copied());
    write_groups(&groups, out)?;

    let summary = Summary {
        records: records.len(),
        groups: groups.len(),
    };
    debug!(records = summary.records, groups = summary.groups, "coalesced trace");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(address: u64, op: Op) -> Record {
        Record::new(address, op)
    }

    fn render(input: &str) -> String {
        let mut out = Vec::new();
        run(input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn access_flags() {
        let mut access = Access::default();
        assert_eq!(access.to_string(), "");
        access.record(Op::Write);
        assert_eq!(access.to_string(), "W");
        access.record(Op::Read);
        assert_eq!(access.to_string(), "RW");
    }

    #[test]
    fn group_format_pads_page() {
        let group = Group {
            page: 1,
            access: Access {
                read: true,
                write: false,
            },
        };
        assert_eq!(group.to_string(), "0x    1 R");

        let wide = Group {
            page: 0x1abcf2,
            access: Access {
                read: false,
                write: true,
            },
        };
        assert_eq!(wide.to_string(), "0x1abcf2 W");

        let empty = Group {
            page: 0,
            access: Access::default(),
        };
        assert_eq!(empty.to_string(), "0x    0 ");
    }

    #[test]
    fn push_closes_on_page_change() {
        let mut c = Coalescer::new();
        assert_eq!(c.push(rec(0x1000, Op::Read)), None);
        assert_eq!(c.push(rec(0x1ff8, Op::Write)), None);
        let closed = c.push(rec(0x2000, Op::Read)).unwrap();
        assert_eq!(closed.page, 1);
        assert_eq!(closed.access.to_string(), "RW");

        let last = c.finish().unwrap();
        assert_eq!(last.page, 2);
        assert_eq!(last.access.to_string(), "R");
    }

    #[test]
    fn finish_on_empty_is_none() {
        assert_eq!(Coalescer::new().finish(), None);
        assert!(coalesce(Vec::new()).is_empty());
    }

    #[test]
    fn revisited_page_is_a_new_run() {
        let groups = coalesce([
            rec(0x1000, Op::Read),
            rec(0x2000, Op::Write),
            rec(0x1004, Op::Read),
        ]);
        let pages: Vec<_> = groups.iter().map(|g| g.page).collect();
        assert_eq!(pages, vec![1, 2, 1]);
    }

    #[test]
    fn page_zero_run_is_emitted() {
        let groups = coalesce([rec(0x0, Op::Write), rec(0xfff, Op::Write)]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].to_string(), "0x    0 W");
    }

    #[test]
    fn two_pages_scenario() {
        let out = render("1000 R\n1004 R\n2000 W\n2010 R\n");
        assert_eq!(out, "0x    1 R\n0x    2 RW\n");
    }

    #[test]
    fn single_page_mixed_scenario() {
        assert_eq!(render("1000 R\n1004 W\n1008 R\n"), "0x    1 RW\n");
    }

    #[test]
    fn empty_input_writes_nothing() {
        let mut out = Vec::new();
        let summary = run("".as_bytes(), &mut out).unwrap();
        assert!(out.is_empty());
        assert_eq!(
            summary,
            Summary {
                records: 0,
                groups: 0
            }
        );
    }

    #[test]
    fn malformed_line_writes_nothing() {
        let mut out = Vec::new();
        let err = run("1000 R\n2000 W\nbad\n".as_bytes(), &mut out).unwrap_err();
        assert!(matches!(err, crate::Error::Parse { line: 3, .. }));
        assert!(out.is_empty());
    }

    #[test]
    fn summary_counts() {
        let mut out = Vec::new();
        let summary = run("1000 R\n1004 R\n2000 W\n2010 R\n".as_bytes(), &mut out).unwrap();
        assert_eq!(summary.records, 4);
        assert_eq!(summary.groups, 2);
    }
}
