//! Translation statistics collection and reporting.
//!
//! This module tracks the outcome of every translated address. It provides:
//! 1. **Outcome counts:** TLB hits, page-table hits and page faults, which always
//!    sum to the number of addresses translated.
//! 2. **Replacement activity:** Evictions of mapped pages and TLB invalidations
//!    they caused.
//! 3. **Reporting:** The two-line fault/hit summary plus an optional sectioned report.

use std::time::Instant;

use crate::mmu::Outcome;

/// Translation statistics.
#[derive(Clone, Debug)]
pub struct TranslationStats {
    start_time: Instant,
    /// Addresses translated.
    pub addresses: u64,
    /// Translations resolved by the TLB.
    pub tlb_hits: u64,
    /// Translations that missed the TLB but hit the page table.
    pub page_table_hits: u64,
    /// Translations that required loading a page from the backing store.
    pub page_faults: u64,
    /// Page faults that reclaimed a frame from another mapped page.
    pub evictions: u64,
    /// TLB entries invalidated because their page was evicted.
    pub tlb_invalidations: u64,
}

impl Default for TranslationStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            addresses: 0,
            tlb_hits: 0,
            page_table_hits: 0,
            page_faults: 0,
            evictions: 0,
            tlb_invalidations: 0,
        }
    }
}

/// Section names for selective stats output.
///
/// Pass an empty slice to [`TranslationStats::print_sections`] to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "tlb", "page_table"];

impl TranslationStats {
    /// Counts one translated address.
    pub fn record(&mut self, outcome: Outcome) {
        self.addresses += 1;
        match outcome {
            Outcome::TlbHit => self.tlb_hits += 1,
            Outcome::PageTableHit => self.page_table_hits += 1,
            Outcome::PageFault {
                evicted,
                tlb_shootdown,
            } => {
                self.page_faults += 1;
                if evicted.is_some() {
                    self.evictions += 1;
                }
                if tlb_shootdown {
                    self.tlb_invalidations += 1;
                }
            }
        }
    }

    /// Translations that missed the TLB.
    pub const fn tlb_misses(&self) -> u64 {
        self.page_table_hits + self.page_faults
    }

    /// TLB hit rate as a percentage; `0.0` before any address.
    pub fn tlb_hit_rate(&self) -> f64 {
        percent(self.tlb_hits, self.addresses)
    }

    /// Page fault rate as a percentage; `0.0` before any address.
    pub fn page_fault_rate(&self) -> f64 {
        percent(self.page_faults, self.addresses)
    }

    /// The two-line result: page faults first, then TLB hits.
    pub fn summary(&self) -> String {
        format!(
            "Page Faults = {}\nTLB Hits = {}",
            self.page_faults, self.tlb_hits
        )
    }

    /// Prints only the requested report sections to stdout.
    ///
    /// Each element of `sections` should be one of `"summary"`, `"tlb"` or
    /// `"page_table"`. Pass an empty slice to print all sections.
    pub fn print_sections(&self, sections: &[String]) {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let seconds = self.start_time.elapsed().as_secs_f64();

        println!("\n==========================================================");
        println!("ADDRESS TRANSLATION STATISTICS");
        println!("==========================================================");
        if want("summary") {
            println!("host_seconds             {seconds:.4} s");
            println!("addresses                {}", self.addresses);
            println!("----------------------------------------------------------");
        }
        if want("tlb") {
            println!("TLB");
            println!(
                "  tlb.hits               {} ({:.2}%)",
                self.tlb_hits,
                self.tlb_hit_rate()
            );
            println!("  tlb.misses             {}", self.tlb_misses());
            println!("  tlb.invalidations      {}", self.tlb_invalidations);
            println!("----------------------------------------------------------");
        }
        if want("page_table") {
            println!("PAGE TABLE");
            println!(
                "  pt.hits                {} ({:.2}%)",
                self.page_table_hits,
                percent(self.page_table_hits, self.addresses)
            );
            println!(
                "  pt.faults              {} ({:.2}%)",
                self.page_faults,
                self.page_fault_rate()
            );
            println!("  pt.evictions           {}", self.evictions);
        }
        println!("==========================================================");
    }

    /// Prints all report sections to stdout.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}

fn percent(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        (part as f64 / total as f64) * 100.0
    }
}
