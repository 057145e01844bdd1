//! # Page Table Tests
//!
//! Direct lookup, fresh frame assignment and victim eviction once every frame
//! is bound.

use pretty_assertions::assert_eq;
use rstest::rstest;
use vmsim_core::config::ReplacementStrategy;
use vmsim_core::mmu::page_table::{Fault, PageTable};

#[rstest]
#[case(ReplacementStrategy::Fifo)]
#[case(ReplacementStrategy::Lru)]
fn every_page_starts_unmapped(#[case] strategy: ReplacementStrategy) {
    let mut table = PageTable::new(8, strategy);
    for page in 0..256 {
        assert_eq!(table.lookup(page), None);
    }
    assert_eq!(table.mapped(), 0);
    assert!(!table.is_full());
}

#[test]
fn fresh_frames_are_handed_out_in_order() {
    let mut table = PageTable::new(4, ReplacementStrategy::Fifo);
    for (i, page) in [9, 200, 3, 17].into_iter().enumerate() {
        assert_eq!(
            table.fault(page),
            Fault {
                frame: i,
                evicted: None
            }
        );
    }
    assert!(table.is_full());
    assert_eq!(table.lookup(200), Some(1));
    assert_eq!(table.owner(3), Some(2));
}

#[test]
fn fifo_evicts_oldest_mapping() {
    let mut table = PageTable::new(2, ReplacementStrategy::Fifo);
    let _ = table.fault(0);
    let _ = table.fault(1);
    assert_eq!(table.lookup(0), Some(0));

    let fault = table.fault(2);
    assert_eq!(
        fault,
        Fault {
            frame: 0,
            evicted: Some(0)
        }
    );
    assert_eq!(table.frame_of(0), None);
    assert_eq!(table.frame_of(2), Some(0));
    assert_eq!(table.owner(0), Some(2));
    assert_eq!(table.eviction_order(), vec![1, 2]);
}

#[test]
fn lru_evicts_least_recent_mapping() {
    let mut table = PageTable::new(2, ReplacementStrategy::Lru);
    let _ = table.fault(0);
    let _ = table.fault(1);
    assert_eq!(table.lookup(0), Some(0));

    let fault = table.fault(2);
    assert_eq!(
        fault,
        Fault {
            frame: 1,
            evicted: Some(1)
        }
    );
    assert_eq!(table.eviction_order(), vec![0, 2]);
}

#[test]
fn frame_of_does_not_promote() {
    let mut table = PageTable::new(2, ReplacementStrategy::Lru);
    let _ = table.fault(0);
    let _ = table.fault(1);
    assert_eq!(table.frame_of(0), Some(0));
    assert_eq!(table.fault(2).evicted, Some(0));
}

#[rstest]
#[case(ReplacementStrategy::Fifo, vec![0, 1, 2])]
#[case(ReplacementStrategy::Lru, vec![1, 2, 0])]
fn touch_records_access(#[case] strategy: ReplacementStrategy, #[case] expected: Vec<usize>) {
    let mut table = PageTable::new(4, strategy);
    for page in 0..3 {
        let _ = table.fault(page);
    }
    table.touch(0);
    table.touch(9);
    assert_eq!(table.eviction_order(), expected);
}

#[rstest]
#[case(300)]
#[case(usize::MAX)]
fn surplus_frames_are_not_tracked(#[case] frames: usize) {
    let mut table = PageTable::new(frames, ReplacementStrategy::Fifo);
    assert_eq!(table.frames(), 256);
    for page in 0..256 {
        assert_eq!(table.fault(page).evicted, None);
    }
    assert_eq!(table.mapped(), 256);
    assert!(table.is_full());
    assert_eq!(table.owner(256), None);
}

#[test]
fn mappings_list_pages_in_order() {
    let mut table = PageTable::new(4, ReplacementStrategy::Fifo);
    let _ = table.fault(5);
    let _ = table.fault(1);
    assert_eq!(table.mappings().collect::<Vec<_>>(), vec![(1, 1), (5, 0)]);
}

#[test]
#[should_panic(expected = "mapped logical page")]
fn fault_on_mapped_page_panics() {
    let mut table = PageTable::new(4, ReplacementStrategy::Fifo);
    let _ = table.fault(5);
    let _ = table.fault(5);
}
