//! Demand-paged virtual memory simulator library.
//!
//! This crate models the address-translation path of a memory management unit:
//! 1. **Addressing:** Decomposition of logical addresses into page and offset.
//! 2. **MMU:** A 16-entry associative TLB in front of a direct-mapped page table.
//! 3. **Replacement:** Interchangeable FIFO and LRU policies driving both structures.
//! 4. **Memory:** Frame-granular physical memory filled on demand from a mapped backing store.
//! 5. **Simulation:** Trace reading, the translation loop, and hit/fault statistics.

/// Common types and constants (addresses, geometry, errors).
pub mod common;
/// Simulator configuration (defaults, replacement strategy, JSON loading).
pub mod config;
/// Physical memory and backing store.
pub mod memory;
/// TLB, page table and the translation path.
pub mod mmu;
/// FIFO and LRU replacement policies.
pub mod policy;
/// Trace reader and translation driver.
pub mod sim;
/// Translation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::{Config, ReplacementStrategy};
/// Backing store opened from a file or built from bytes.
pub use crate::memory::BackingStore;
/// Translation driver; construct with `Translator::new`.
pub use crate::sim::Translator;
