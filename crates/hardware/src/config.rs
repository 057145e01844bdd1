//! Configuration system for the translation simulator.
//!
//! This module defines the configuration structures used to parameterize a run. It provides:
//! 1. **Defaults:** Baseline geometry (frame count, TLB size).
//! 2. **Structures:** Memory geometry and the replacement strategy chosen for the run.
//! 3. **Loading:** JSON deserialization and validation before any address is processed.
//!
//! The CLI starts from `Config::default()` or a JSON file and overrides fields from flags.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::common::constants::{DEFAULT_PHYSICAL_PAGES, TLB_CAPACITY, V_PAGES};
use crate::common::{Result, VmError};
use crate::policy::{FifoPolicy, LruPolicy, ReplacementPolicy};

/// Default configuration constants.
mod defaults {
    use super::{DEFAULT_PHYSICAL_PAGES, TLB_CAPACITY};

    /// Number of physical frames (one per logical page).
    pub const PHYSICAL_PAGES: usize = DEFAULT_PHYSICAL_PAGES;

    /// Translation Lookaside Buffer entry count.
    pub const TLB_SIZE: usize = TLB_CAPACITY;
}

/// Replacement algorithms shared by the TLB and the page table.
///
/// One variant is chosen per run; the TLB and the page table each get their own
/// instance of it via [`ReplacementStrategy::build`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplacementStrategy {
    /// First In First Out: evicts the oldest arrival regardless of later accesses.
    #[default]
    #[serde(alias = "FIFO", alias = "Fifo")]
    Fifo,
    /// Least Recently Used: evicts the entry whose last access is oldest.
    #[serde(alias = "LRU", alias = "Lru")]
    Lru,
}

impl ReplacementStrategy {
    /// Instantiates a fresh policy of this variant over nodes `0..nodes`.
    pub fn build(self, nodes: usize) -> Box<dyn ReplacementPolicy> {
        match self {
            Self::Fifo => Box::new(FifoPolicy::new(nodes)),
            Self::Lru => Box::new(LruPolicy::new(nodes)),
        }
    }

    /// Lowercase name, as accepted on the command line.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fifo => "fifo",
            Self::Lru => "lru",
        }
    }
}

impl FromStr for ReplacementStrategy {
    type Err = VmError;

    /// Parses `fifo` or `lru`, ignoring case.
    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("fifo") {
            Ok(Self::Fifo)
        } else if s.eq_ignore_ascii_case("lru") {
            Ok(Self::Lru)
        } else {
            Err(VmError::InvalidStrategy(s.to_owned()))
        }
    }
}

impl fmt::Display for ReplacementStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use vmsim_core::config::{Config, ReplacementStrategy};
///
/// let config = Config::default();
/// assert_eq!(config.memory.physical_pages, 256);
/// assert_eq!(config.policy, ReplacementStrategy::Fifo);
///
/// let config = Config::from_json(r#"{ "memory": { "physical_pages": 128 }, "policy": "LRU" }"#).unwrap();
/// assert_eq!(config.memory.physical_pages, 128);
/// assert_eq!(config.memory.tlb_size, 16);
/// assert_eq!(config.policy, ReplacementStrategy::Lru);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Physical memory and TLB geometry.
    #[serde(default)]
    pub memory: MemoryConfig,
    /// Replacement strategy for both the TLB and the page table.
    #[serde(default)]
    pub policy: ReplacementStrategy,
}

/// Physical memory and translation cache geometry.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Number of physical frames available to the page table.
    #[serde(default = "MemoryConfig::default_physical_pages")]
    pub physical_pages: usize,

    /// Number of TLB entries.
    #[serde(default = "MemoryConfig::default_tlb_size")]
    pub tlb_size: usize,
}

impl MemoryConfig {
    fn default_physical_pages() -> usize {
        defaults::PHYSICAL_PAGES
    }

    fn default_tlb_size() -> usize {
        defaults::TLB_SIZE
    }

    /// Frames that can ever hold a page: the configured count, capped at the
    /// number of logical pages.
    pub fn usable_frames(&self) -> usize {
        self.physical_pages.min(V_PAGES)
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            physical_pages: defaults::PHYSICAL_PAGES,
            tlb_size: defaults::TLB_SIZE,
        }
    }
}

impl Config {
    /// Parses a configuration from a JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Reads and parses a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| VmError::io(path, e))?;
        Self::from_json(&text)
    }

    /// Checks the geometry before any structure is allocated.
    ///
    /// A frame count above the number of logical pages is accepted, but the page
    /// table can never map more pages than exist, so only
    /// [`MemoryConfig::usable_frames`] frames are allocated.
    pub fn validate(&self) -> Result<()> {
        let frames = self.memory.physical_pages;
        if frames == 0 {
            return Err(VmError::InvalidConfig(
                "physical page count must be positive".into(),
            ));
        }
        if frames > V_PAGES {
            tracing::warn!(
                frames,
                logical_pages = V_PAGES,
                "frames beyond the logical page count will never be used"
            );
        }
        if self.memory.tlb_size == 0 {
            return Err(VmError::InvalidConfig("TLB size must be positive".into()));
        }
        Ok(())
    }
}
