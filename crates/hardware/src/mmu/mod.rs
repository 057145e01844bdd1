//! Memory Management Unit (MMU).
//!
//! This module implements logical-to-physical address translation through a
//! two-level hierarchy: a small associative TLB in front of a full direct-mapped
//! page table. A miss in both is a page fault, serviced by copying the page from
//! the backing store into a frame chosen by the replacement policy.

/// Direct-mapped page table with one entry per logical page.
pub mod page_table;

/// Translation Lookaside Buffer (TLB) for caching page-to-frame translations.
pub mod tlb;

use crate::common::{PhysAddr, VirtAddr};
use crate::config::Config;
use crate::memory::{PageSource, PhysicalMemory};

use self::page_table::PageTable;
use self::tlb::Tlb;

/// Where a translation was resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The TLB held the mapping.
    TlbHit,
    /// The TLB missed but the page table held the mapping.
    PageTableHit,
    /// Neither held it; the page was loaded from the backing store.
    PageFault {
        /// Logical page whose frame was reclaimed, if any.
        evicted: Option<usize>,
        /// Whether a TLB entry for the evicted page was invalidated.
        tlb_shootdown: bool,
    },
}

impl Outcome {
    /// Returns `true` for [`Outcome::PageFault`].
    pub const fn is_fault(self) -> bool {
        matches!(self, Self::PageFault { .. })
    }
}

/// Result of translating one logical address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TranslationResult {
    /// Logical page number.
    pub page: usize,
    /// Physical frame number.
    pub frame: usize,
    /// Translated physical address.
    pub paddr: PhysAddr,
    /// How the translation was resolved.
    pub outcome: Outcome,
}

/// Memory Management Unit: TLB plus page table.
#[derive(Debug)]
pub struct Mmu {
    /// Associative translation cache.
    pub tlb: Tlb,
    /// Full page table.
    pub page_table: PageTable,
}

impl Mmu {
    /// Creates an MMU with empty TLB and page table, both using the configured policy.
    pub fn new(config: &Config) -> Self {
        Self {
            tlb: Tlb::new(config.memory.tlb_size, config.policy),
            page_table: PageTable::new(config.memory.usable_frames(), config.policy),
        }
    }

    /// Translates a logical address, servicing a page fault if necessary.
    ///
    /// The TLB is consulted first; a TLB hit still counts as an access for the page
    /// table's replacement order. On a TLB miss the page table is consulted, and on
    /// a page table miss a frame is assigned and filled from `store`. Every TLB miss
    /// ends with exactly one TLB install. When a fault reclaims another page's frame,
    /// that page's TLB entry is invalidated before the new mapping is installed.
    ///
    /// # Arguments
    ///
    /// * `vaddr` - Logical address to translate
    /// * `memory` - Physical memory receiving faulted-in pages
    /// * `store` - Backing store supplying page contents
    pub fn translate<S: PageSource + ?Sized>(
        &mut self,
        vaddr: VirtAddr,
        memory: &mut PhysicalMemory,
        store: &S,
    ) -> TranslationResult {
        let (page, offset) = vaddr.decode();

        let (frame, outcome) = if let Some(frame) = self.tlb.lookup(page) {
            self.page_table.touch(page);
            (frame, Outcome::TlbHit)
        } else {
            let (frame, outcome) = match self.page_table.lookup(page) {
                Some(frame) => (frame, Outcome::PageTableHit),
                None => self.service_fault(page, memory, store),
            };
            if let Some(old) = self.tlb.install(page, frame) {
                tracing::trace!(page = old.page, frame = old.frame, "TLB eviction");
            }
            (frame, outcome)
        };

        TranslationResult {
            page,
            frame,
            paddr: PhysAddr::encode(frame, offset),
            outcome,
        }
    }

    fn service_fault<S: PageSource + ?Sized>(
        &mut self,
        page: usize,
        memory: &mut PhysicalMemory,
        store: &S,
    ) -> (usize, Outcome) {
        let fault = self.page_table.fault(page);
        let tlb_shootdown = fault
            .evicted
            .is_some_and(|victim| self.tlb.invalidate(victim).is_some());
        memory.copy_page(fault.frame, store.page(page));

        tracing::debug!(
            page,
            frame = fault.frame,
            evicted = ?fault.evicted,
            tlb_shootdown,
            "page fault"
        );
        (
            fault.frame,
            Outcome::PageFault {
                evicted: fault.evicted,
                tlb_shootdown,
            },
        )
    }
}
