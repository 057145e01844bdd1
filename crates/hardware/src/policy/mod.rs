//! Replacement Policies.
//!
//! Implements the algorithms that decide which occupied node of a bounded
//! translation cache is reused when a new mapping arrives and the cache is full.
//! The same policy family drives both the TLB (nodes are TLB slots) and the page
//! table (nodes are logical pages).
//!
//! # Policies
//!
//! - `Fifo`: First-In, First-Out.
//! - `Lru`: Least Recently Used.

/// First-In, First-Out replacement policy.
pub mod fifo;

/// Least Recently Used replacement policy.
pub mod lru;

/// Arena-backed doubly linked list shared by both policies.
pub mod order;

use std::fmt;

pub use fifo::FifoPolicy;
pub use lru::LruPolicy;
pub use order::ReplacementOrder;

/// Trait for translation-cache replacement policies.
///
/// A policy owns the eviction order of its cache. The cache tells it when a node
/// is filled, hit, or vacated, and asks it for a victim when no node is free. The
/// cache itself decides how a key is located (by scan or by index).
pub trait ReplacementPolicy: Send + Sync + fmt::Debug {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Updates the policy state when a resident node is hit.
    fn update(&mut self, node: usize);

    /// Links a node that has just been filled.
    fn insert(&mut self, node: usize);

    /// Unlinks a node that is being vacated. Returns `false` if it was not resident.
    fn remove(&mut self, node: usize) -> bool;

    /// Identifies the node to evict, or `None` if nothing is resident.
    fn get_victim(&self) -> Option<usize>;

    /// Resident nodes, next victim first.
    fn eviction_order(&self) -> Vec<usize>;

    /// Number of resident nodes.
    fn len(&self) -> usize;

    /// Returns `true` if no node is resident.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
