//! Command-line record accumulation and argument splitting.

use super::{read_full, Procfs};
use pl_common::{Error, ProcessId, Result};
use std::collections::TryReserveError;
use std::ffi::OsStr;
use std::fs::File;
use std::ops::Range;
use std::os::unix::ffi::OsStrExt;
use tracing::trace;

/// Growth step for the accumulation buffer.
const CHUNK_SIZE: usize = 4096;

/// An argument vector read from the command-line record.
///
/// Owns the raw bytes of the record; [`args`](CommandLine::args) and
/// [`arg`](CommandLine::arg) yield views borrowing from them. Views and
/// storage are released together when the `CommandLine` drops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    raw: Vec<u8>,
    bounds: Vec<Range<usize>>,
}

impl CommandLine {
    /// Number of arguments.
    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    /// `true` when there are no arguments. Never the case for a value
    /// returned by [`Procfs::cmdline`], which fails on empty records.
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    /// Argument at `index`, in invocation order.
    pub fn arg(&self, index: usize) -> Option<&OsStr> {
        self.bounds
            .get(index)
            .map(|r| OsStr::from_bytes(&self.raw[r.clone()]))
    }

    /// Iterate the arguments in invocation order.
    pub fn args(&self) -> impl ExactSizeIterator<Item = &OsStr> {
        self.bounds
            .iter()
            .map(|r| OsStr::from_bytes(&self.raw[r.clone()]))
    }

    /// Owned, lossily decoded copies of the arguments.
    pub fn to_string_vec(&self) -> Vec<String> {
        self.args().map(|a| a.to_string_lossy().into_owned()).collect()
    }

    /// Split an already-terminated record into one argument per segment.
    fn from_terminated(raw: Vec<u8>) -> std::result::Result<Self, TryReserveError> {
        let terminators = raw.iter().filter(|&&b| b == 0).count();
        let mut bounds: Vec<Range<usize>> = Vec::new();
        bounds.try_reserve_exact(terminators)?;

        let mut arg_start = 0;
        for (i, &b) in raw.iter().enumerate() {
            if b == 0 {
                bounds.push(arg_start..i);
                arg_start = i + 1;
            }
        }

        Ok(CommandLine { raw, bounds })
    }
}

impl Procfs {
    /// Read the full argument vector of `pid`.
    ///
    /// The record is accumulated in fixed-size growth steps, so arbitrarily
    /// long command lines cost a bounded number of reallocations. An empty
    /// record reports [`Error::NotFound`]: a record torn down mid-read is
    /// indistinguishable from an absent process.
    ///
    /// Precondition: `pid` is valid.
    pub fn cmdline(&self, pid: ProcessId) -> Result<CommandLine> {
        assert!(
            pid.is_valid(),
            "cmdline called with the invalid-pid sentinel"
        );
        trace!(pid = pid.0, "reading cmdline record");

        let mut file =
            File::open(self.pid_entry(pid, "cmdline")).map_err(|e| Error::from_open(pid.0, e))?;

        let alloc_failed = |_| Error::Allocation { pid: pid.0 };

        let mut raw: Vec<u8> = Vec::new();
        loop {
            raw.try_reserve(CHUNK_SIZE).map_err(alloc_failed)?;
            let start = raw.len();
            raw.resize(start + CHUNK_SIZE, 0);
            let n = read_full(&mut file, &mut raw[start..])?;
            raw.truncate(start + n);
            if n < CHUNK_SIZE {
                break;
            }
        }

        if raw.is_empty() {
            return Err(Error::NotFound { pid: pid.0 });
        }

        // The record normally ends with a terminator already, but that is
        // not guaranteed.
        if raw.last() != Some(&0) {
            raw.try_reserve(1).map_err(alloc_failed)?;
            raw.push(0);
        }

        CommandLine::from_terminated(raw).map_err(alloc_failed)
    }
}
