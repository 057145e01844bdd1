//! # Geometry Constant Tests

use vmsim_core::common::constants::{
    BACKING_STORE_SIZE, DEFAULT_PHYSICAL_PAGES, OFFSET_MASK, VPAGE_MASK,
};
use vmsim_core::common::{OFFSET_BITS, PAGE_SIZE, TLB_CAPACITY, V_PAGES};

#[test]
fn page_geometry() {
    assert_eq!(PAGE_SIZE, 256);
    assert_eq!(OFFSET_BITS, 8);
    assert_eq!(OFFSET_MASK, 0xFF);
    assert_eq!(VPAGE_MASK, 0xFF);
}

#[test]
fn address_space_geometry() {
    assert_eq!(V_PAGES, 256);
    assert_eq!(BACKING_STORE_SIZE, 65536);
    assert_eq!(TLB_CAPACITY, 16);
    assert_eq!(DEFAULT_PHYSICAL_PAGES, V_PAGES);
}
