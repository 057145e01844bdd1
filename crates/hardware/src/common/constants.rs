//! Global System Constants.
//!
//! This module defines the fixed geometry of the simulated address space. It includes:
//! 1. **Page Geometry:** Page size, offset width and the masks derived from them.
//! 2. **Address Space:** Number of logical pages and the size of the backing store.
//! 3. **Translation Caches:** TLB capacity and the default physical frame count.

/// Page size in bytes.
pub const PAGE_SIZE: usize = 256;

/// Number of bits occupied by the page offset (`log2(PAGE_SIZE)`).
pub const OFFSET_BITS: u32 = 8;

/// Mask for extracting the page offset from an address.
pub const OFFSET_MASK: u32 = (PAGE_SIZE as u32) - 1;

/// Number of logical (virtual) pages in the address space.
pub const V_PAGES: usize = 256;

/// Mask for extracting the logical page number after shifting out the offset.
pub const VPAGE_MASK: u32 = (V_PAGES as u32) - 1;

/// Size of the backing store in bytes: one page-sized block per logical page.
pub const BACKING_STORE_SIZE: usize = V_PAGES * PAGE_SIZE;

/// Number of entries in the TLB.
pub const TLB_CAPACITY: usize = 16;

/// Default number of physical frames.
pub const DEFAULT_PHYSICAL_PAGES: usize = 256;

const _: () = assert!(1 << OFFSET_BITS == PAGE_SIZE);
const _: () = assert!(V_PAGES.is_power_of_two());
