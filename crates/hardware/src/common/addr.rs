//! Logical and Physical Address types.
//!
//! This module defines strong types for logical and physical addresses to prevent
//! accidental mixing of address spaces. It provides the following:
//! 1. **Type Safety:** Distinguishes logical (virtual) from physical addresses at compile time.
//! 2. **Address Codec:** Splits an address into `(page, offset)` and composes a frame
//!    and offset back into a physical address.
//! 3. **Masking:** Decoding never fails; out-of-range bits are masked off.

use std::fmt;

use super::constants::{OFFSET_BITS, OFFSET_MASK, VPAGE_MASK};

/// A logical address as issued by the simulated program.
///
/// Only the low 16 bits participate in translation: 8 bits of page number and
/// 8 bits of offset. Higher bits are ignored by [`VirtAddr::decode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VirtAddr(pub u32);

/// A physical address into simulated main memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PhysAddr(pub u32);

impl VirtAddr {
    /// Creates a new logical address from a raw value.
    #[inline(always)]
    pub const fn new(addr: u32) -> Self {
        Self(addr)
    }

    /// Returns the raw address value.
    #[inline(always)]
    pub const fn val(self) -> u32 {
        self.0
    }

    /// Extracts the offset within the page.
    #[inline(always)]
    pub const fn page_offset(self) -> usize {
        (self.0 & OFFSET_MASK) as usize
    }

    /// Extracts the logical page number.
    #[inline(always)]
    pub const fn page(self) -> usize {
        ((self.0 >> OFFSET_BITS) & VPAGE_MASK) as usize
    }

    /// Decomposes the address into `(logical_page, offset)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use vmsim_core::common::VirtAddr;
    ///
    /// assert_eq!(VirtAddr::new(0x1234).decode(), (0x12, 0x34));
    /// // Bits above the page number are masked off.
    /// assert_eq!(VirtAddr::new(0x0001_1234).decode(), (0x12, 0x34));
    /// ```
    #[inline(always)]
    pub const fn decode(self) -> (usize, usize) {
        (self.page(), self.page_offset())
    }
}

impl PhysAddr {
    /// Creates a new physical address from a raw value.
    #[inline(always)]
    pub const fn new(addr: u32) -> Self {
        Self(addr)
    }

    /// Composes a physical address from a frame number and an offset.
    ///
    /// The offset is masked to the page; the frame is shifted into place unmasked
    /// because the frame count is configurable.
    ///
    /// # Examples
    ///
    /// ```
    /// use vmsim_core::common::PhysAddr;
    ///
    /// assert_eq!(PhysAddr::encode(3, 0x20).val(), 0x0320);
    /// ```
    #[inline(always)]
    pub const fn encode(frame: usize, offset: usize) -> Self {
        Self(((frame as u32) << OFFSET_BITS) | (offset as u32 & OFFSET_MASK))
    }

    /// Returns the raw address value.
    #[inline(always)]
    pub const fn val(self) -> u32 {
        self.0
    }

    /// Returns the physical frame number.
    #[inline(always)]
    pub const fn frame(self) -> usize {
        (self.0 >> OFFSET_BITS) as usize
    }
}

impl From<u32> for VirtAddr {
    fn from(addr: u32) -> Self {
        Self(addr)
    }
}

impl fmt::Display for VirtAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for PhysAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
