//! Common types used throughout the simulator.
//!
//! 1. **Address Types:** Strong types for logical and physical addresses plus the codec.
//! 2. **Constants:** Page geometry, address-space size and TLB capacity.
//! 3. **Error Handling:** The recoverable error taxonomy and crate `Result` alias.

/// Address type definitions and the address codec.
pub mod addr;

/// Fixed geometry of the simulated machine.
pub mod constants;

/// Error types.
pub mod error;

pub use addr::{PhysAddr, VirtAddr};
pub use constants::{OFFSET_BITS, PAGE_SIZE, TLB_CAPACITY, V_PAGES};
pub use error::{Result, VmError};
