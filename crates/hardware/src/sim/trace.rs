//! Address trace reader.
//!
//! A trace is a text stream of decimal logical addresses separated by any
//! whitespace. Any integer that fits in 64 bits is accepted, negative ones
//! included; only its low 32 bits are kept and translation masks them further.
//! Reading stops at end of input or at the first token that is not an integer; a
//! malformed token is logged and treated as the end of the trace, so every address
//! before it still counts.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::common::{Result, VirtAddr, VmError};

/// Iterator over the logical addresses of a trace.
#[derive(Debug)]
pub struct TraceReader<R> {
    reader: R,
    line: String,
    line_no: usize,
    pending: std::vec::IntoIter<String>,
    rejected: Option<String>,
    done: bool,
}

impl TraceReader<BufReader<File>> {
    /// Opens a trace file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| VmError::io(path, e))?;
        tracing::info!(path = %path.display(), "opened trace");
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> TraceReader<R> {
    /// Wraps any buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            line_no: 0,
            pending: Vec::new().into_iter(),
            rejected: None,
            done: false,
        }
    }

    /// The token that ended the trace early, if any.
    pub fn rejected(&self) -> Option<&str> {
        self.rejected.as_deref()
    }

    /// Reads lines until one yields tokens. Returns `false` at end of input.
    fn refill(&mut self) -> bool {
        loop {
            self.line.clear();
            match self.reader.read_line(&mut self.line) {
                Ok(0) => return false,
                Ok(_) => {
                    self.line_no += 1;
                    let tokens: Vec<String> =
                        self.line.split_whitespace().map(str::to_owned).collect();
                    if !tokens.is_empty() {
                        self.pending = tokens.into_iter();
                        return true;
                    }
                }
                Err(e) => {
                    tracing::warn!(
                        line = self.line_no + 1,
                        error = %e,
                        "trace read failed; ending trace"
                    );
                    return false;
                }
            }
        }
    }
}

impl<R: BufRead> Iterator for TraceReader<R> {
    type Item = VirtAddr;

    fn next(&mut self) -> Option<VirtAddr> {
        if self.done {
            return None;
        }
        let token = if let Some(token) = self.pending.next() {
            token
        } else if self.refill() {
            self.pending.next()?
        } else {
            self.done = true;
            return None;
        };
        if let Ok(addr) = token.parse::<i64>() {
            Some(VirtAddr::new(low_bits(addr)))
        } else {
            tracing::warn!(
                line = self.line_no,
                token = %token,
                "malformed trace entry; ending trace"
            );
            self.rejected = Some(token);
            self.done = true;
            None
        }
    }
}

/// Two's-complement low 32 bits, so `-1` reaches the last byte of the last page.
#[allow(clippy::cast_sign_loss)]
const fn low_bits(addr: i64) -> u32 {
    addr as u32
}
