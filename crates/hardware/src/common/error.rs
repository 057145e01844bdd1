//! Error definitions.
//!
//! This module defines the recoverable error taxonomy of the simulator. It provides:
//! 1. **Configuration Errors:** Unknown replacement strategies and out-of-range geometry.
//! 2. **I/O Errors:** Backing store and trace files that cannot be opened, mapped or read.
//! 3. **Result Alias:** A crate-wide [`Result`] type.
//!
//! Internal invariant violations (a frame bound twice, a TLB over capacity) are not
//! represented here; they panic.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for simulator operations.
pub type Result<T> = std::result::Result<T, VmError>;

/// Errors reported before or while setting up a translation run.
#[derive(Error, Debug)]
pub enum VmError {
    /// The replacement strategy name is neither `fifo` nor `lru`.
    #[error("invalid replacement strategy '{0}' (expected fifo or lru)")]
    InvalidStrategy(String),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A file could not be opened or read.
    #[error("could not read '{}': {source}", path.display())]
    Io {
        /// File being accessed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The backing store could not be memory-mapped.
    #[error("could not map backing store '{}': {source}", path.display())]
    Mmap {
        /// Backing store path.
        path: PathBuf,
        /// Error reported by `mmap(2)`.
        #[source]
        source: io::Error,
    },

    /// The backing store is shorter than one page per logical page.
    #[error("backing store '{}' is {len} bytes, expected at least {required}", path.display())]
    BackingStoreTooSmall {
        /// Backing store path.
        path: PathBuf,
        /// Actual file length in bytes.
        len: u64,
        /// Required length in bytes.
        required: usize,
    },

    /// A JSON configuration file could not be parsed.
    #[error("invalid configuration file: {0}")]
    Json(#[from] serde_json::Error),
}

impl VmError {
    /// Wraps an I/O error with the path that produced it.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
