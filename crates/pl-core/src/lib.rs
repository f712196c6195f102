//! Process metadata extraction from the per-process virtual filesystem.
//!
//! Three independent read paths, each keyed by a [`ProcessId`]:
//!
//! - [`Procfs::stat_info`]: parent pid and start time from the `stat`
//!   record, with tick-to-millisecond conversion
//! - [`Procfs::exe_path`]: absolute path of the backing executable, via
//!   the `exe` symlink
//! - [`Procfs::cmdline`]: the NUL-delimited argument vector as borrowed
//!   views over one owned buffer
//!
//! Every call is synchronous and self-contained: it opens, uses, and
//! releases its own file handle, so a [`Procfs`] can be shared across
//! threads freely. Liveness is never re-checked; a result may describe a
//! process that exited mid-read.

pub mod procfs;
pub mod snapshot;
pub mod ticks;

pub use pl_common::{Error, ProcessId, Result};
pub use procfs::{CommandLine, Procfs, StatInfo, StatRequest};
pub use snapshot::ProcessSnapshot;
pub use ticks::{clock_ticks_per_second, TickConversion};
