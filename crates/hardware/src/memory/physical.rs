//! Simulated physical memory.
//!
//! A flat byte buffer carved into page-sized frames. Frames are only ever written
//! by page-fault servicing, which copies a whole page from the backing store.

use crate::common::{PAGE_SIZE, PhysAddr};

/// Main memory divided into `frames` frames of `PAGE_SIZE` bytes.
#[derive(Clone, Debug)]
pub struct PhysicalMemory {
    bytes: Vec<u8>,
}

impl PhysicalMemory {
    /// Allocates zeroed memory for `frames` frames.
    pub fn new(frames: usize) -> Self {
        Self {
            bytes: vec![0; frames * PAGE_SIZE],
        }
    }

    /// Size of the buffer in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if no frame was allocated.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Number of frames.
    pub fn frames(&self) -> usize {
        self.bytes.len() / PAGE_SIZE
    }

    /// Overwrites `frame` with one page of data.
    ///
    /// # Panics
    ///
    /// Panics if `page` is not exactly one page long or `frame` is out of range.
    pub fn copy_page(&mut self, frame: usize, page: &[u8]) {
        assert_eq!(page.len(), PAGE_SIZE, "page copy must be exactly one page");
        let start = frame * PAGE_SIZE;
        assert!(start + PAGE_SIZE <= self.bytes.len(), "frame {frame} out of bounds");
        self.bytes[start..start + PAGE_SIZE].copy_from_slice(page);
    }

    /// Reads a single byte.
    ///
    /// # Panics
    ///
    /// Panics if `addr` lies outside physical memory.
    pub fn read_byte(&self, addr: PhysAddr) -> u8 {
        let offset = addr.val() as usize;
        assert!(
            offset < self.bytes.len(),
            "physical read at {offset} out of bounds ({} bytes)",
            self.bytes.len()
        );
        self.bytes[offset]
    }

    /// Borrows the contents of `frame`.
    pub fn frame(&self, frame: usize) -> &[u8] {
        let start = frame * PAGE_SIZE;
        &self.bytes[start..start + PAGE_SIZE]
    }
}
