//! Backing store.
//!
//! The backing store holds one page-sized block for every logical page. It is
//! opened once, read-only, and consulted on page faults only. On Unix the file is
//! mapped with `mmap(2)` so a fault touches just the page it needs; elsewhere it is
//! read into memory up front.

use std::fs::File;
use std::path::{Path, PathBuf};

use crate::common::constants::BACKING_STORE_SIZE;
use crate::common::{PAGE_SIZE, Result, V_PAGES, VmError};

/// A read-only source of page contents.
///
/// Implemented by [`BackingStore`] and by plain byte slices so the translation path
/// can be driven from in-memory data.
pub trait PageSource {
    /// Returns the `PAGE_SIZE` bytes of logical page `page`.
    fn page(&self, page: usize) -> &[u8];
}

impl PageSource for [u8] {
    fn page(&self, page: usize) -> &[u8] {
        let start = page * PAGE_SIZE;
        &self[start..start + PAGE_SIZE]
    }
}

impl PageSource for Vec<u8> {
    fn page(&self, page: usize) -> &[u8] {
        self.as_slice().page(page)
    }
}

#[derive(Debug)]
enum Storage {
    #[cfg(unix)]
    Mapped { ptr: std::ptr::NonNull<u8>, len: usize },
    Owned(Vec<u8>),
}

/// Read-only backing store file.
#[derive(Debug)]
pub struct BackingStore {
    storage: Storage,
    path: PathBuf,
}

// SAFETY: the mapping is private and read-only; nothing writes through `ptr`.
unsafe impl Send for BackingStore {}
// SAFETY: as above, shared access only ever reads.
unsafe impl Sync for BackingStore {}

impl BackingStore {
    /// Opens and maps a backing store file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be opened, is shorter than
    /// `V_PAGES * PAGE_SIZE` bytes, or cannot be mapped.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| VmError::io(path, e))?;
        let len = file.metadata().map_err(|e| VmError::io(path, e))?.len();
        if len < BACKING_STORE_SIZE as u64 {
            return Err(VmError::BackingStoreTooSmall {
                path: path.to_path_buf(),
                len,
                required: BACKING_STORE_SIZE,
            });
        }

        let storage = Self::map(&file, path)?;
        tracing::info!(path = %path.display(), bytes = len, "opened backing store");
        Ok(Self {
            storage,
            path: path.to_path_buf(),
        })
    }

    #[cfg(unix)]
    fn map(file: &File, path: &Path) -> Result<Storage> {
        use std::os::fd::AsRawFd;
        use std::ptr::{self, NonNull};

        // SAFETY: a fresh private read-only mapping of an open descriptor; the
        // length was checked against the file size above.
        let raw = unsafe {
            libc::mmap(
                ptr::null_mut(),
                BACKING_STORE_SIZE,
                libc::PROT_READ,
                libc::MAP_PRIVATE,
                file.as_raw_fd(),
                0,
            )
        };
        if raw == libc::MAP_FAILED {
            return Err(VmError::Mmap {
                path: path.to_path_buf(),
                source: std::io::Error::last_os_error(),
            });
        }
        let Some(ptr) = NonNull::new(raw.cast::<u8>()) else {
            return Err(VmError::Mmap {
                path: path.to_path_buf(),
                source: std::io::Error::other("mmap returned a null mapping"),
            });
        };
        Ok(Storage::Mapped {
            ptr,
            len: BACKING_STORE_SIZE,
        })
    }

    #[cfg(not(unix))]
    fn map(file: &File, path: &Path) -> Result<Storage> {
        use std::io::Read;

        let mut bytes = Vec::with_capacity(BACKING_STORE_SIZE);
        let _ = file
            .take(BACKING_STORE_SIZE as u64)
            .read_to_end(&mut bytes)
            .map_err(|e| VmError::io(path, e))?;
        Ok(Storage::Owned(bytes))
    }

    /// Wraps in-memory contents as a backing store.
    ///
    /// # Errors
    ///
    /// Fails if `bytes` is shorter than `V_PAGES * PAGE_SIZE`.
    pub fn from_bytes(mut bytes: Vec<u8>) -> Result<Self> {
        if bytes.len() < BACKING_STORE_SIZE {
            return Err(VmError::BackingStoreTooSmall {
                path: PathBuf::from("<memory>"),
                len: bytes.len() as u64,
                required: BACKING_STORE_SIZE,
            });
        }
        bytes.truncate(BACKING_STORE_SIZE);
        Ok(Self {
            storage: Storage::Owned(bytes),
            path: PathBuf::from("<memory>"),
        })
    }

    /// Path the store was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of logical pages held.
    pub const fn pages(&self) -> usize {
        V_PAGES
    }

    /// The whole store as a byte slice.
    pub fn as_slice(&self) -> &[u8] {
        match &self.storage {
            #[cfg(unix)]
            // SAFETY: `ptr` points to a live mapping of `len` readable bytes that
            // stays mapped until `drop`.
            Storage::Mapped { ptr, len } => unsafe {
                std::slice::from_raw_parts(ptr.as_ptr(), *len)
            },
            Storage::Owned(bytes) => bytes.as_slice(),
        }
    }
}

impl PageSource for BackingStore {
    fn page(&self, page: usize) -> &[u8] {
        self.as_slice().page(page)
    }
}

impl Drop for BackingStore {
    /// Unmaps the file if it was mapped.
    fn drop(&mut self) {
        #[cfg(unix)]
        if let Storage::Mapped { ptr, len } = self.storage {
            // SAFETY: the mapping was created by `map` with this exact length and
            // no borrow of it outlives `self`.
            let rc = unsafe { libc::munmap(ptr.as_ptr().cast(), len) };
            debug_assert_eq!(rc, 0, "munmap failed");
        }
    }
}
