//! Translation Lookaside Buffer (TLB).
//!
//! A small fully associative cache of logical-page to physical-frame mappings.
//! The key space is much larger than the buffer, so entries are located by
//! comparing the stored page of every resident slot. Slot reuse is decided by the
//! run's replacement policy.

use crate::config::ReplacementStrategy;
use crate::policy::ReplacementPolicy;

/// A single resident TLB mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TlbEntry {
    /// Logical page number (tag).
    pub page: usize,
    /// Physical frame number (data).
    pub frame: usize,
}

/// Translation Lookaside Buffer structure.
#[derive(Debug)]
pub struct Tlb {
    /// One slot per entry; `None` marks a free slot.
    slots: Vec<Option<TlbEntry>>,
    /// Eviction order over slot indices.
    policy: Box<dyn ReplacementPolicy>,
}

impl Tlb {
    /// Creates an empty TLB with `capacity` slots.
    pub fn new(capacity: usize, strategy: ReplacementStrategy) -> Self {
        Self {
            slots: vec![None; capacity],
            policy: strategy.build(capacity),
        }
    }

    /// Number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of resident entries.
    pub fn len(&self) -> usize {
        self.policy.len()
    }

    /// Returns `true` if no entry is resident.
    pub fn is_empty(&self) -> bool {
        self.policy.is_empty()
    }

    /// Name of the replacement policy in use.
    pub fn policy_name(&self) -> &'static str {
        self.policy.name()
    }

    /// Scans resident slots for `page`.
    fn find(&self, page: usize) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| matches!(slot, Some(e) if e.page == page))
    }

    /// Looks up a logical page.
    ///
    /// On a hit the policy records the access (LRU promotes the slot).
    ///
    /// # Returns
    ///
    /// The mapped frame, or `None` on a miss.
    pub fn lookup(&mut self, page: usize) -> Option<usize> {
        let slot = self.find(page)?;
        self.policy.update(slot);
        self.slots[slot].map(|e| e.frame)
    }

    /// Returns the frame cached for `page` without touching the replacement order.
    pub fn probe(&self, page: usize) -> Option<usize> {
        self.find(page).and_then(|slot| self.slots[slot].map(|e| e.frame))
    }

    /// Installs a mapping after a miss.
    ///
    /// Uses the lowest free slot if there is one; otherwise the policy's victim is
    /// overwritten.
    ///
    /// # Returns
    ///
    /// The entry that was evicted to make room, if any.
    ///
    /// # Panics
    ///
    /// Panics if `page` is already resident or the policy has no victim for a full
    /// buffer. Both mean the translation path broke an invariant.
    pub fn install(&mut self, page: usize, frame: usize) -> Option<TlbEntry> {
        assert!(
            self.find(page).is_none(),
            "TLB already holds logical page {page}"
        );

        let (slot, evicted) = if let Some(free) = self.slots.iter().position(Option::is_none) {
            (free, None)
        } else {
            let Some(victim) = self.policy.get_victim() else {
                unreachable!("full TLB has no replacement victim");
            };
            assert!(self.policy.remove(victim), "TLB victim {victim} was not resident");
            (victim, self.slots[victim].take())
        };

        self.slots[slot] = Some(TlbEntry { page, frame });
        self.policy.insert(slot);
        assert!(
            self.policy.len() <= self.capacity(),
            "TLB exceeded its capacity"
        );
        evicted
    }

    /// Drops the entry for `page`, freeing its slot.
    ///
    /// Called when the page table evicts `page` so no stale translation survives.
    pub fn invalidate(&mut self, page: usize) -> Option<TlbEntry> {
        let slot = self.find(page)?;
        assert!(self.policy.remove(slot), "TLB slot {slot} was not resident");
        self.slots[slot].take()
    }

    /// Resident entries in slot order.
    pub fn entries(&self) -> impl Iterator<Item = TlbEntry> + '_ {
        self.slots.iter().filter_map(|slot| *slot)
    }

    /// Resident entries, next victim first.
    pub fn eviction_order(&self) -> Vec<TlbEntry> {
        self.policy
            .eviction_order()
            .into_iter()
            .filter_map(|slot| self.slots[slot])
            .collect()
    }
}
