//! # Address Codec Tests
//!
//! Splitting logical addresses into page and offset, and composing physical
//! addresses from a frame and an offset.

use proptest::prelude::*;
use rstest::rstest;
use vmsim_core::common::{PhysAddr, VirtAddr};

#[rstest]
#[case(0, 0, 0)]
#[case(1, 0, 1)]
#[case(255, 0, 255)]
#[case(256, 1, 0)]
#[case(1000, 3, 232)]
#[case(0x1234, 0x12, 0x34)]
#[case(65535, 255, 255)]
fn decode_splits_page_and_offset(#[case] raw: u32, #[case] page: usize, #[case] offset: usize) {
    assert_eq!(VirtAddr::new(raw).decode(), (page, offset));
}

#[test]
fn decode_ignores_bits_above_sixteen() {
    assert_eq!(VirtAddr::new(65536).decode(), (0, 0));
    assert_eq!(VirtAddr::new(0xFFFF_1234).decode(), (0x12, 0x34));
}

#[test]
fn encode_places_frame_above_offset() {
    assert_eq!(PhysAddr::encode(0, 0).val(), 0);
    assert_eq!(PhysAddr::encode(3, 232).val(), 1000);
    assert_eq!(PhysAddr::encode(127, 255).val(), 32767);
}

#[test]
fn encode_masks_offset_to_page() {
    assert_eq!(PhysAddr::encode(1, 0x1FF).val(), 0x1FF);
    assert_eq!(PhysAddr::encode(1, 0x1FF).frame(), 1);
}

#[test]
fn display_prints_decimal() {
    assert_eq!(VirtAddr::new(16916).to_string(), "16916");
    assert_eq!(PhysAddr::encode(0, 20).to_string(), "20");
    assert_eq!(VirtAddr::from(7).val(), 7);
}

proptest! {
    #[test]
    fn decode_then_encode_preserves_low_sixteen_bits(raw in any::<u32>()) {
        let (page, offset) = VirtAddr::new(raw).decode();
        prop_assert!(page < 256);
        prop_assert!(offset < 256);
        prop_assert_eq!(PhysAddr::encode(page, offset).val(), raw & 0xFFFF);
    }
}
