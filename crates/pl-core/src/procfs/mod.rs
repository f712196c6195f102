//! Read paths over the per-process virtual filesystem.
//!
//! Each operation opens, reads, and releases its own handle; nothing is
//! cached or shared between calls. The records themselves are described in
//! `proc(5)`: a single-line `stat` record whose second field is free text,
//! an `exe` symlink to the backing executable, and a NUL-delimited
//! `cmdline` byte stream.

mod cmdline;
mod exe;
mod stat;

pub use cmdline::CommandLine;
pub use stat::{StatInfo, StatRequest};

use crate::ticks::TickConversion;
use pl_common::ProcessId;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Default mount point of the process-information filesystem.
pub const DEFAULT_ROOT: &str = "/proc";

/// Accessor for a procfs mount.
///
/// Holds the mount root and the start-time conversion choice; carries no
/// other state, so one instance can serve any number of concurrent calls.
/// An alternate root pointing at any directory laid out like procfs makes
/// every read path testable without live processes.
#[derive(Debug, Clone)]
pub struct Procfs {
    root: PathBuf,
    conversion: TickConversion,
}

impl Default for Procfs {
    fn default() -> Self {
        Self::new()
    }
}

impl Procfs {
    /// Accessor for the system mount at `/proc`.
    pub fn new() -> Self {
        Self::with_root(DEFAULT_ROOT)
    }

    /// Accessor for an alternate root laid out like procfs.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            conversion: TickConversion::default(),
        }
    }

    /// Override how start-time ticks are converted to milliseconds.
    pub fn tick_conversion(mut self, conversion: TickConversion) -> Self {
        self.conversion = conversion;
        self
    }

    /// The mount root this accessor reads from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub(crate) fn conversion(&self) -> TickConversion {
        self.conversion
    }

    /// Path of one entry under the per-process directory.
    pub(crate) fn pid_entry(&self, pid: ProcessId, entry: &str) -> PathBuf {
        let mut path = self.root.join(pid.0.to_string());
        path.push(entry);
        path
    }
}

/// Fill `buf` from `file` until it is full or EOF, tolerating short reads.
///
/// Returns the number of bytes placed in `buf`; a return shorter than the
/// buffer means EOF was reached.
pub(crate) fn read_full(file: &mut File, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut len = 0;
    while len < buf.len() {
        match file.read(&mut buf[len..]) {
            Ok(0) => break,
            Ok(n) => len += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(len)
}
