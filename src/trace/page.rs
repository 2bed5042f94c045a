//! Page arithmetic

/// Page number type
pub type PageNumber = u64;

/// Number of low address bits addressing within a page
pub const PAGE_SHIFT: u32 = 12;

/// Page size in bytes
pub const PAGE_SIZE: u64 = 1 << PAGE_SHIFT;

/// Page containing `address`
#[inline]
pub fn page_of(address: u64) -> PageNumber {
    address >> PAGE_SHIFT
}
