//! # MMU Translation Path Tests
//!
//! TLB first, then the page table, then fault service. Also covers the TLB
//! shootdown that keeps a reclaimed frame from being reached through a stale
//! TLB entry.

use pretty_assertions::assert_eq;
use vmsim_core::common::PAGE_SIZE;
use vmsim_core::config::ReplacementStrategy;
use vmsim_core::memory::PhysicalMemory;
use vmsim_core::mmu::{Mmu, Outcome};

use crate::common::{addr, config, expected_byte, patterned_store};

fn setup(policy: ReplacementStrategy, frames: usize) -> (Mmu, PhysicalMemory, Vec<u8>) {
    let config = config(policy, frames);
    (
        Mmu::new(&config),
        PhysicalMemory::new(frames),
        patterned_store(),
    )
}

#[test]
fn first_access_faults_into_frame_zero() {
    let (mut mmu, mut memory, store) = setup(ReplacementStrategy::Fifo, 4);
    let result = mmu.translate(addr(66, 20), &mut memory, &store);

    assert_eq!(result.page, 66);
    assert_eq!(result.frame, 0);
    assert_eq!(result.paddr.val(), 20);
    assert_eq!(
        result.outcome,
        Outcome::PageFault {
            evicted: None,
            tlb_shootdown: false
        }
    );
    assert_eq!(memory.frame(0), &store[66 * PAGE_SIZE..67 * PAGE_SIZE]);
    assert_eq!(memory.read_byte(result.paddr), expected_byte(66, 20));
}

#[test]
fn second_access_hits_tlb() {
    let (mut mmu, mut memory, store) = setup(ReplacementStrategy::Fifo, 4);
    let _ = mmu.translate(addr(1, 0), &mut memory, &store);
    let result = mmu.translate(addr(1, 200), &mut memory, &store);
    assert_eq!(result.outcome, Outcome::TlbHit);
    assert_eq!(result.paddr.val(), 200);
}

#[test]
fn tlb_miss_falls_back_to_page_table() {
    let mut config = config(ReplacementStrategy::Fifo, 8);
    config.memory.tlb_size = 1;
    let mut mmu = Mmu::new(&config);
    let mut memory = PhysicalMemory::new(8);
    let store = patterned_store();

    let _ = mmu.translate(addr(0, 0), &mut memory, &store);
    let _ = mmu.translate(addr(1, 0), &mut memory, &store);
    let result = mmu.translate(addr(0, 5), &mut memory, &store);

    assert_eq!(result.outcome, Outcome::PageTableHit);
    assert_eq!(result.frame, 0);
    // The page-table hit was installed in the TLB.
    assert_eq!(mmu.tlb.probe(0), Some(0));
    assert_eq!(mmu.tlb.probe(1), None);
}

#[test]
fn eviction_invalidates_victim_tlb_entry() {
    let (mut mmu, mut memory, store) = setup(ReplacementStrategy::Fifo, 2);
    let _ = mmu.translate(addr(0, 0), &mut memory, &store);
    let _ = mmu.translate(addr(1, 0), &mut memory, &store);

    let result = mmu.translate(addr(2, 0), &mut memory, &store);
    assert_eq!(
        result.outcome,
        Outcome::PageFault {
            evicted: Some(0),
            tlb_shootdown: true
        }
    );
    assert_eq!(result.frame, 0);
    assert_eq!(mmu.tlb.probe(0), None);
    assert_eq!(mmu.tlb.probe(2), Some(0));

    // Page 0 must fault again instead of reading page 2's data.
    let again = mmu.translate(addr(0, 9), &mut memory, &store);
    assert!(again.outcome.is_fault());
    assert_eq!(memory.read_byte(again.paddr), expected_byte(0, 9));
}

#[test]
fn eviction_without_tlb_entry_reports_no_shootdown() {
    let mut config = config(ReplacementStrategy::Fifo, 2);
    config.memory.tlb_size = 1;
    let mut mmu = Mmu::new(&config);
    let mut memory = PhysicalMemory::new(2);
    let store = patterned_store();

    let _ = mmu.translate(addr(0, 0), &mut memory, &store);
    let _ = mmu.translate(addr(1, 0), &mut memory, &store);
    let result = mmu.translate(addr(2, 0), &mut memory, &store);
    assert_eq!(
        result.outcome,
        Outcome::PageFault {
            evicted: Some(0),
            tlb_shootdown: false
        }
    );
}

#[test]
fn tlb_hit_promotes_page_under_lru() {
    let (mut mmu, mut memory, store) = setup(ReplacementStrategy::Lru, 2);
    let _ = mmu.translate(addr(0, 0), &mut memory, &store);
    let _ = mmu.translate(addr(1, 0), &mut memory, &store);
    let hit = mmu.translate(addr(0, 1), &mut memory, &store);
    assert_eq!(hit.outcome, Outcome::TlbHit);
    assert_eq!(mmu.page_table.eviction_order(), vec![1, 0]);

    let result = mmu.translate(addr(2, 0), &mut memory, &store);
    assert_eq!(
        result.outcome,
        Outcome::PageFault {
            evicted: Some(1),
            tlb_shootdown: true
        }
    );
}
