//! Least Recently Used (LRU) Replacement Policy.
//!
//! This policy evicts the node that has not been accessed for the longest time.
//! Resident nodes are kept in a recency list: head is the Most Recently Used node
//! and tail the Least Recently Used one. A hit splices the node out and relinks it
//! at the head.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `update()`: O(1) relink once the node is known
//!   - `insert()`, `remove()`, `get_victim()`: O(1)
//! - **Space Complexity:** O(N) where N is the number of nodes
//! - **Best Case:** Accesses with good temporal locality
//! - **Worst Case:** Cyclic scans larger than the cache (thrashing)

use super::ReplacementPolicy;
use super::order::ReplacementOrder;

/// LRU Policy state.
#[derive(Clone, Debug)]
pub struct LruPolicy {
    /// Recency order: head is MRU, tail is LRU.
    order: ReplacementOrder,
}

impl LruPolicy {
    /// Creates a new LRU policy over nodes `0..nodes`.
    pub fn new(nodes: usize) -> Self {
        Self {
            order: ReplacementOrder::new(nodes),
        }
    }
}

impl ReplacementPolicy for LruPolicy {
    fn name(&self) -> &'static str {
        "lru"
    }

    /// Moves the accessed node to the MRU position.
    fn update(&mut self, node: usize) {
        self.order.move_to_front(node);
    }

    /// New arrivals count as the most recent access.
    fn insert(&mut self, node: usize) {
        self.order.push_front(node);
    }

    fn remove(&mut self, node: usize) -> bool {
        self.order.unlink(node)
    }

    /// Returns the node at the LRU position.
    fn get_victim(&self) -> Option<usize> {
        self.order.tail()
    }

    fn eviction_order(&self) -> Vec<usize> {
        self.order.iter_rev().collect()
    }

    fn len(&self) -> usize {
        self.order.len()
    }
}
