//! Page Table.
//!
//! A direct-mapped table with one entry per logical page. The logical page number
//! is both the lookup key and the node index handed to the replacement policy, so
//! finding an entry never requires a search; only the eviction order is traversed.
//!
//! Frames are handed out in ascending order until every frame is in use. After
//! that each fault reclaims the frame of the policy's victim.

use crate::common::constants::V_PAGES;
use crate::config::ReplacementStrategy;
use crate::policy::ReplacementPolicy;

/// Result of servicing a page fault.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fault {
    /// Frame now bound to the faulting page.
    pub frame: usize,
    /// Logical page that lost `frame`, if the frame was reclaimed.
    pub evicted: Option<usize>,
}

/// Page table structure.
#[derive(Debug)]
pub struct PageTable {
    /// Indexed by logical page; `None` is the unmapped sentinel.
    entries: Vec<Option<usize>>,
    /// Reverse map, indexed by frame.
    owners: Vec<Option<usize>>,
    /// Eviction order over logical pages.
    policy: Box<dyn ReplacementPolicy>,
}

impl PageTable {
    /// Creates an empty page table backed by `frames` physical frames.
    ///
    /// At most `V_PAGES` frames are tracked; more could never be bound.
    pub fn new(frames: usize, strategy: ReplacementStrategy) -> Self {
        Self {
            entries: vec![None; V_PAGES],
            owners: vec![None; frames.min(V_PAGES)],
            policy: strategy.build(V_PAGES),
        }
    }

    /// Number of physical frames available.
    pub fn frames(&self) -> usize {
        self.owners.len()
    }

    /// Number of mapped logical pages.
    pub fn mapped(&self) -> usize {
        self.policy.len()
    }

    /// Returns `true` once no fresh frame is left and faults must evict.
    pub fn is_full(&self) -> bool {
        self.mapped() >= self.frames()
    }

    /// Looks up a logical page.
    ///
    /// On a hit the policy records the access (LRU promotes the page).
    pub fn lookup(&mut self, page: usize) -> Option<usize> {
        let frame = self.entries[page]?;
        self.policy.update(page);
        Some(frame)
    }

    /// Records an access to a mapped page that was resolved by the TLB.
    ///
    /// Keeps the page table's recency order in step with every access, not just
    /// the ones that miss the TLB.
    pub fn touch(&mut self, page: usize) {
        if self.entries[page].is_some() {
            self.policy.update(page);
        }
    }

    /// Returns the frame mapped to `page` without touching the replacement order.
    pub fn frame_of(&self, page: usize) -> Option<usize> {
        self.entries.get(page).copied().flatten()
    }

    /// Returns the logical page currently bound to `frame`.
    pub fn owner(&self, frame: usize) -> Option<usize> {
        self.owners.get(frame).copied().flatten()
    }

    /// Services a miss on `page` by binding it to a frame.
    ///
    /// Takes the next unused frame while any remain; otherwise unmaps the policy's
    /// victim and reuses its frame. Memory contents are left to the caller.
    ///
    /// # Panics
    ///
    /// Panics if `page` is already mapped, if a full table has no victim, or if the
    /// reclaimed frame is not owned by the victim.
    pub fn fault(&mut self, page: usize) -> Fault {
        assert!(
            self.entries[page].is_none(),
            "page fault on mapped logical page {page}"
        );

        let fault = if self.is_full() {
            let Some(victim) = self.policy.get_victim() else {
                unreachable!("full page table has no replacement victim");
            };
            assert!(self.policy.remove(victim), "victim page {victim} was not resident");
            let Some(frame) = self.entries[victim].take() else {
                panic!("victim page {victim} is not mapped");
            };
            assert_eq!(
                self.owners[frame],
                Some(victim),
                "frame {frame} is not owned by victim page {victim}"
            );
            Fault {
                frame,
                evicted: Some(victim),
            }
        } else {
            let frame = self.mapped();
            assert_eq!(self.owners[frame], None, "fresh frame {frame} already owned");
            Fault {
                frame,
                evicted: None,
            }
        };

        self.entries[page] = Some(fault.frame);
        self.owners[fault.frame] = Some(page);
        self.policy.insert(page);
        fault
    }

    /// Mapped `(page, frame)` pairs in page order.
    pub fn mappings(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(page, &frame)| frame.map(|f| (page, f)))
    }

    /// Mapped pages, next victim first.
    pub fn eviction_order(&self) -> Vec<usize> {
        self.policy.eviction_order()
    }
}
