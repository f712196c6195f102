//! Aggregate per-process snapshot combining the three read paths.

use crate::procfs::{Procfs, StatRequest};
use pl_common::{Error, ProcessId, Result};
use serde::Serialize;
use std::path::PathBuf;
use tracing::trace;

/// One process described in a single pass over its procfs entries.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessSnapshot {
    pub pid: ProcessId,
    pub parent_id: Option<ProcessId>,
    /// Start time since boot, in milliseconds.
    pub start_time_ms: Option<u64>,
    /// Resolved executable path; `None` when the link could not be read.
    pub exe: Option<PathBuf>,
    /// Final component of `exe`.
    pub name: Option<String>,
    /// Argument vector; empty for processes without a cmdline record
    /// (kernel threads).
    pub argv: Vec<String>,
}

impl Procfs {
    /// Capture stat, exe, and cmdline state of `pid` in one call.
    ///
    /// An unresolvable exe link and an absent cmdline record are normal
    /// (kernel threads, privileged processes) and leave their fields
    /// empty; a stat failure fails the whole snapshot.
    pub fn snapshot(&self, pid: ProcessId) -> Result<ProcessSnapshot> {
        trace!(pid = pid.0, "capturing process snapshot");

        let stat = self.stat_info(pid, StatRequest::default())?;
        let exe = self.exe_path(pid);
        let name = exe
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned());
        let argv = match self.cmdline(pid) {
            Ok(cmd) => cmd.to_string_vec(),
            Err(Error::NotFound { .. }) => Vec::new(),
            Err(err) => return Err(err),
        };

        Ok(ProcessSnapshot {
            pid,
            parent_id: stat.parent_id,
            start_time_ms: stat.start_time_ms,
            exe,
            name,
            argv,
        })
    }
}
