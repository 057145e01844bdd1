//! Trace-driven simulation: reading addresses and running them through the MMU.

/// Address trace reader.
pub mod trace;
/// Trace-driven translation loop.
pub mod translator;

pub use trace::TraceReader;
pub use translator::{Translation, Translator};
