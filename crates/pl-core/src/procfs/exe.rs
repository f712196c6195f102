//! Executable-image path resolution via the per-process `exe` link.

use super::Procfs;
use pl_common::ProcessId;
use std::os::unix::ffi::OsStrExt;
use std::path::PathBuf;
use tracing::{debug, trace};

impl Procfs {
    /// Resolve the absolute path of the executable backing `pid`.
    ///
    /// `None` means the link could not be resolved: the process is gone,
    /// access was refused, or the entry is not a link. That is an expected
    /// outcome for short-lived or privileged processes, not an error.
    pub fn exe_path(&self, pid: ProcessId) -> Option<PathBuf> {
        assert!(
            pid.is_valid(),
            "exe_path called with the invalid-pid sentinel"
        );
        trace!(pid = pid.0, "resolving exe link");

        match std::fs::read_link(self.pid_entry(pid, "exe")) {
            Ok(target) => Some(target),
            Err(err) => {
                debug!(pid = pid.0, %err, "exe link unresolved");
                None
            }
        }
    }

    /// Resolve the executable path into a caller-supplied byte buffer.
    ///
    /// Writes at most `buf.len() - 1` path bytes followed by a NUL
    /// terminator and returns the number of path bytes written (terminator
    /// excluded); a path longer than the buffer is silently truncated.
    /// Returns 0 with an empty terminated buffer when the link cannot be
    /// resolved.
    ///
    /// Precondition: `buf` has room for at least the terminator.
    pub fn exe_path_into(&self, pid: ProcessId, buf: &mut [u8]) -> usize {
        assert!(
            !buf.is_empty(),
            "exe_path_into needs room for the terminator"
        );

        let Some(target) = self.exe_path(pid) else {
            buf[0] = 0;
            return 0;
        };

        let bytes = target.as_os_str().as_bytes();
        let len = bytes.len().min(buf.len() - 1);
        if len < bytes.len() {
            debug!(pid = pid.0, want = bytes.len(), got = len, "exe path truncated");
        }
        buf[..len].copy_from_slice(&bytes[..len]);
        buf[len] = 0;
        len
    }
}
