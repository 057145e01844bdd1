//! # TLB Tests
//!
//! Associative lookup, slot filling, victim selection and invalidation.

use pretty_assertions::assert_eq;
use rstest::rstest;
use vmsim_core::config::ReplacementStrategy;
use vmsim_core::mmu::tlb::{Tlb, TlbEntry};

fn entry(page: usize, frame: usize) -> TlbEntry {
    TlbEntry { page, frame }
}

#[rstest]
#[case(ReplacementStrategy::Fifo)]
#[case(ReplacementStrategy::Lru)]
fn empty_tlb_misses(#[case] strategy: ReplacementStrategy) {
    let mut tlb = Tlb::new(16, strategy);
    assert_eq!(tlb.capacity(), 16);
    assert!(tlb.is_empty());
    assert_eq!(tlb.lookup(0), None);
    assert_eq!(tlb.policy_name(), strategy.as_str());
}

#[test]
fn install_then_hit() {
    let mut tlb = Tlb::new(16, ReplacementStrategy::Fifo);
    assert_eq!(tlb.install(7, 3), None);
    assert_eq!(tlb.lookup(7), Some(3));
    assert_eq!(tlb.probe(7), Some(3));
    assert_eq!(tlb.lookup(8), None);
    assert_eq!(tlb.len(), 1);
}

#[test]
fn fills_free_slots_in_order() {
    let mut tlb = Tlb::new(4, ReplacementStrategy::Fifo);
    for page in 0..4 {
        assert_eq!(tlb.install(page, page + 10), None);
    }
    let entries: Vec<_> = tlb.entries().collect();
    assert_eq!(
        entries,
        vec![entry(0, 10), entry(1, 11), entry(2, 12), entry(3, 13)]
    );
}

#[test]
fn fifo_replaces_oldest_despite_hits() {
    let mut tlb = Tlb::new(2, ReplacementStrategy::Fifo);
    let _ = tlb.install(0, 0);
    let _ = tlb.install(1, 1);
    assert_eq!(tlb.lookup(0), Some(0));
    assert_eq!(tlb.install(2, 2), Some(entry(0, 0)));
    assert_eq!(tlb.probe(0), None);
    assert_eq!(tlb.eviction_order(), vec![entry(1, 1), entry(2, 2)]);
}

#[test]
fn lru_replaces_least_recent() {
    let mut tlb = Tlb::new(2, ReplacementStrategy::Lru);
    let _ = tlb.install(0, 0);
    let _ = tlb.install(1, 1);
    assert_eq!(tlb.lookup(0), Some(0));
    assert_eq!(tlb.install(2, 2), Some(entry(1, 1)));
    assert_eq!(tlb.eviction_order(), vec![entry(0, 0), entry(2, 2)]);
}

#[test]
fn probe_does_not_promote() {
    let mut tlb = Tlb::new(2, ReplacementStrategy::Lru);
    let _ = tlb.install(0, 0);
    let _ = tlb.install(1, 1);
    assert_eq!(tlb.probe(0), Some(0));
    assert_eq!(tlb.install(2, 2), Some(entry(0, 0)));
}

#[rstest]
#[case(ReplacementStrategy::Fifo)]
#[case(ReplacementStrategy::Lru)]
fn never_exceeds_capacity(#[case] strategy: ReplacementStrategy) {
    let mut tlb = Tlb::new(16, strategy);
    for page in 0..100 {
        let evicted = tlb.install(page, page % 7);
        assert_eq!(evicted.is_some(), page >= 16);
        assert!(tlb.len() <= 16);
    }
    assert_eq!(tlb.len(), 16);
}

#[rstest]
#[case(ReplacementStrategy::Fifo)]
#[case(ReplacementStrategy::Lru)]
fn invalidate_frees_slot_for_reuse(#[case] strategy: ReplacementStrategy) {
    let mut tlb = Tlb::new(2, strategy);
    let _ = tlb.install(0, 5);
    let _ = tlb.install(1, 6);

    assert_eq!(tlb.invalidate(0), Some(entry(0, 5)));
    assert_eq!(tlb.invalidate(0), None);
    assert_eq!(tlb.len(), 1);

    // The freed slot is filled without evicting page 1.
    assert_eq!(tlb.install(2, 5), None);
    assert_eq!(tlb.probe(1), Some(6));
    assert_eq!(tlb.probe(2), Some(5));
}

#[test]
#[should_panic(expected = "already holds")]
fn duplicate_install_panics() {
    let mut tlb = Tlb::new(4, ReplacementStrategy::Fifo);
    let _ = tlb.install(3, 0);
    let _ = tlb.install(3, 1);
}
