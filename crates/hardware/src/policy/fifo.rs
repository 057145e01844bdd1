//! First-In, First-Out (FIFO) Replacement Policy.
//!
//! This policy evicts the node that was filled earliest, regardless of how often
//! it was hit afterwards. Arrivals are appended at the tail and victims are taken
//! from the head. When nothing is ever vacated out of turn this behaves exactly
//! like a circular write cursor over the slots.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `update()`: O(1) (no-op)
//!   - `insert()`, `remove()`, `get_victim()`: O(1)
//! - **Space Complexity:** O(N) where N is the number of nodes
//! - **Best Case:** Streaming accesses where all pages have equal importance
//! - **Worst Case:** Workloads with strong temporal locality (hot pages age out)

use super::ReplacementPolicy;
use super::order::ReplacementOrder;

/// FIFO Policy state.
#[derive(Clone, Debug)]
pub struct FifoPolicy {
    /// Arrival order: head is the oldest resident node.
    order: ReplacementOrder,
}

impl FifoPolicy {
    /// Creates a new FIFO policy over nodes `0..nodes`.
    pub fn new(nodes: usize) -> Self {
        Self {
            order: ReplacementOrder::new(nodes),
        }
    }
}

impl ReplacementPolicy for FifoPolicy {
    fn name(&self) -> &'static str {
        "fifo"
    }

    /// Hits do not change arrival order.
    fn update(&mut self, _node: usize) {}

    fn insert(&mut self, node: usize) {
        self.order.push_back(node);
    }

    fn remove(&mut self, node: usize) -> bool {
        self.order.unlink(node)
    }

    /// Returns the oldest arrival.
    fn get_victim(&self) -> Option<usize> {
        self.order.head()
    }

    fn eviction_order(&self) -> Vec<usize> {
        self.order.iter().collect()
    }

    fn len(&self) -> usize {
        self.order.len()
    }
}
