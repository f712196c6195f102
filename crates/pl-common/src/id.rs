//! Process identity types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Process ID wrapper with display formatting.
///
/// [`ProcessId::INVALID`] is the reserved "no process" sentinel. Handing it
/// to any read path is a caller bug and trips an assertion there; it is
/// never reported as a runtime failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProcessId(pub u32);

impl ProcessId {
    /// Reserved sentinel denoting "no process".
    pub const INVALID: ProcessId = ProcessId(u32::MAX);

    /// Whether this id may be passed to a read path.
    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProcessId {
    fn from(pid: u32) -> Self {
        ProcessId(pid)
    }
}
