//! Raw memory-access trace: records, operations and page arithmetic

mod page;
mod record;

pub use page::{PAGE_SHIFT, PAGE_SIZE, PageNumber, page_of};
pub use record::{Op, Record, read_trace};
