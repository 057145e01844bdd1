//! Memory subsystem.
//!
//! 1. **Physical Memory:** Frame-granular byte buffer owned by the translator.
//! 2. **Backing Store:** Read-only page source (memory-mapped file or in-memory bytes).

/// Read-only backing store and the [`PageSource`] seam.
pub mod backing;

/// Frame-granular simulated main memory.
pub mod physical;

pub use backing::{BackingStore, PageSource};
pub use physical::PhysicalMemory;
