//! Translation driver.
//!
//! The `Translator` owns every piece of mutable simulation state (MMU, physical
//! memory, statistics) and borrows the backing store for the length of the run. It
//! processes one logical address at a time to completion:
//! decode, TLB lookup, page-table lookup or fault, TLB install, address formation,
//! and finally the byte read from physical memory.

use crate::common::{PhysAddr, Result, VirtAddr};
use crate::config::Config;
use crate::memory::{PageSource, PhysicalMemory};
use crate::mmu::{Mmu, Outcome};
use crate::stats::TranslationStats;

/// Record of one translated address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Translation {
    /// Address as issued by the trace.
    pub logical: VirtAddr,
    /// Address it translated to.
    pub physical: PhysAddr,
    /// Byte stored at `physical`.
    pub value: u8,
    /// How the translation was resolved.
    pub outcome: Outcome,
}

impl Translation {
    /// The stored byte interpreted as a signed value.
    pub const fn signed_value(&self) -> i8 {
        i8::from_ne_bytes([self.value])
    }
}

/// Drives a trace through the MMU and accumulates statistics.
#[derive(Debug)]
pub struct Translator<'a, S: PageSource + ?Sized> {
    mmu: Mmu,
    memory: PhysicalMemory,
    store: &'a S,
    stats: TranslationStats,
}

impl<'a, S: PageSource + ?Sized> Translator<'a, S> {
    /// Builds empty translation state for `config`, reading pages from `store`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `config` fails validation.
    pub fn new(config: &Config, store: &'a S) -> Result<Self> {
        config.validate()?;
        tracing::info!(
            policy = %config.policy,
            frames = config.memory.usable_frames(),
            tlb_size = config.memory.tlb_size,
            "translator ready"
        );
        Ok(Self {
            mmu: Mmu::new(config),
            memory: PhysicalMemory::new(config.memory.usable_frames()),
            store,
            stats: TranslationStats::default(),
        })
    }

    /// Translates one logical address and reads the byte it points to.
    pub fn translate(&mut self, logical: VirtAddr) -> Translation {
        let result = self.mmu.translate(logical, &mut self.memory, self.store);
        let value = self.memory.read_byte(result.paddr);
        self.stats.record(result.outcome);

        tracing::trace!(
            logical = logical.val(),
            physical = result.paddr.val(),
            value,
            outcome = ?result.outcome,
            "translated"
        );
        Translation {
            logical,
            physical: result.paddr,
            value,
            outcome: result.outcome,
        }
    }

    /// Translates every address of `trace`, calling `observe` after each one.
    pub fn run_with<I, F>(&mut self, trace: I, mut observe: F) -> &TranslationStats
    where
        I: IntoIterator<Item = VirtAddr>,
        F: FnMut(&Translation),
    {
        for logical in trace {
            let translation = self.translate(logical);
            observe(&translation);
        }
        tracing::info!(
            addresses = self.stats.addresses,
            page_faults = self.stats.page_faults,
            tlb_hits = self.stats.tlb_hits,
            "trace complete"
        );
        &self.stats
    }

    /// Translates every address of `trace`.
    pub fn run<I>(&mut self, trace: I) -> &TranslationStats
    where
        I: IntoIterator<Item = VirtAddr>,
    {
        self.run_with(trace, |_| {})
    }

    /// Statistics so far.
    pub const fn stats(&self) -> &TranslationStats {
        &self.stats
    }

    /// The MMU (TLB and page table).
    pub const fn mmu(&self) -> &Mmu {
        &self.mmu
    }

    /// Simulated physical memory.
    pub const fn memory(&self) -> &PhysicalMemory {
        &self.memory
    }
}
