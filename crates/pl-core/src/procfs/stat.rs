//! Parent-pid and start-time extraction from the per-process `stat` record.

use super::{read_full, Procfs};
use crate::ticks;
use pl_common::{Error, ProcessId, Result};
use serde::Serialize;
use std::fs::File;
use tracing::trace;

/// Stat record prefix size. The embedded name field is kernel-truncated
/// and every field up to the start-time counter is a small integer, so
/// this prefix always covers the tail we scan.
const STAT_PREFIX_LEN: usize = 512;

/// Token position of the parent pid in the tail after the name field.
const TAIL_IDX_PPID: usize = 1;
/// Token position of the start-time tick count in the tail.
const TAIL_IDX_START_TICKS: usize = 19;

/// Which stat outputs the caller wants.
///
/// Requesting neither output is a caller bug (the read would be a no-op)
/// and trips an assertion in [`Procfs::stat_info`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatRequest {
    pub parent_id: bool,
    pub start_time: bool,
}

impl Default for StatRequest {
    fn default() -> Self {
        Self {
            parent_id: true,
            start_time: true,
        }
    }
}

impl StatRequest {
    /// Request only the parent pid.
    pub fn parent_id_only() -> Self {
        Self {
            parent_id: true,
            start_time: false,
        }
    }

    /// Request only the start time.
    pub fn start_time_only() -> Self {
        Self {
            parent_id: false,
            start_time: true,
        }
    }
}

/// Outputs of a stat read. Only requested fields are populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatInfo {
    /// Parent process id, if requested.
    pub parent_id: Option<ProcessId>,
    /// Start time since boot in milliseconds, if requested.
    pub start_time_ms: Option<u64>,
}

impl Procfs {
    /// Read parent pid and/or start time for `pid`.
    ///
    /// The start-time tick count is converted using the configured
    /// [`TickConversion`](crate::ticks::TickConversion) and the clock-tick
    /// rate queried at call time.
    ///
    /// Preconditions: `pid` is valid and at least one output is requested.
    pub fn stat_info(&self, pid: ProcessId, request: StatRequest) -> Result<StatInfo> {
        assert!(
            pid.is_valid(),
            "stat_info called with the invalid-pid sentinel"
        );
        assert!(
            request.parent_id || request.start_time,
            "stat_info called with no outputs requested"
        );

        trace!(pid = pid.0, "reading stat record");

        let mut file =
            File::open(self.pid_entry(pid, "stat")).map_err(|e| Error::from_open(pid.0, e))?;

        let mut buf = [0u8; STAT_PREFIX_LEN];
        let len = read_full(&mut file, &mut buf)?;
        if len == 0 {
            return Err(Error::Parse {
                pid: pid.0,
                reason: "empty stat record".into(),
            });
        }

        let (ppid, ticks) = parse_stat_tail(&buf[..len]).map_err(|reason| Error::Parse {
            pid: pid.0,
            reason: reason.into(),
        })?;

        let mut info = StatInfo {
            parent_id: None,
            start_time_ms: None,
        };
        if request.parent_id {
            info.parent_id = Some(ProcessId(ppid));
        }
        if request.start_time {
            info.start_time_ms = Some(
                self.conversion()
                    .to_millis(ticks, ticks::clock_ticks_per_second()),
            );
        }
        Ok(info)
    }
}

/// Extract `(ppid, start ticks)` from a stat record prefix.
///
/// The name field may itself contain `)` and whitespace, so the tail is
/// anchored on the rightmost `)` in the record: the fixed-schema fields
/// after the true field boundary never contain one.
fn parse_stat_tail(buf: &[u8]) -> std::result::Result<(u32, u64), &'static str> {
    let close = buf
        .iter()
        .rposition(|&b| b == b')')
        .ok_or("name field delimiter missing")?;
    let tail =
        std::str::from_utf8(&buf[close + 1..]).map_err(|_| "stat tail is not valid text")?;

    let mut fields = tail.split_ascii_whitespace();
    let ppid: u32 = fields
        .nth(TAIL_IDX_PPID)
        .ok_or("stat tail too short for parent pid")?
        .parse()
        .map_err(|_| "parent pid is not an integer")?;
    let ticks: u64 = fields
        .nth(TAIL_IDX_START_TICKS - TAIL_IDX_PPID - 1)
        .ok_or("stat tail too short for start time")?
        .parse()
        .map_err(|_| "start-time tick count is not an integer")?;

    Ok((ppid, ticks))
}
