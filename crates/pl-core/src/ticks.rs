//! Scheduler-tick to wall-clock conversion.

use serde::{Deserialize, Serialize};

/// Tick rate assumed when the OS cannot report one.
const FALLBACK_TICKS_PER_SEC: u64 = 100;

/// How a raw start-time tick count becomes milliseconds.
///
/// Two readings of "convert ticks to milliseconds" exist among consumers of
/// this record, and they disagree by a factor of `rate² / 10⁶`. Both are
/// kept as distinct, selectable conversions; [`Procfs`](crate::Procfs)
/// defaults to [`TickConversion::WallClock`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TickConversion {
    /// `ticks * 1000 / rate`: ticks divided by the per-millisecond rate,
    /// yielding elapsed wall-clock milliseconds.
    #[default]
    WallClock,
    /// `ticks * (rate / 1000)`: ticks scaled by the rate expressed in
    /// ticks per millisecond, evaluated in floating point. At the common
    /// rate of 100 this yields a tenth of a tick per unit.
    TicksPerMilli,
}

impl TickConversion {
    /// Convert `ticks` at `ticks_per_sec` into milliseconds.
    pub fn to_millis(self, ticks: u64, ticks_per_sec: u64) -> u64 {
        match self {
            TickConversion::WallClock => ticks.saturating_mul(1000) / ticks_per_sec.max(1),
            TickConversion::TicksPerMilli => {
                (ticks as f64 * (ticks_per_sec as f64 / 1000.0)) as u64
            }
        }
    }
}

/// Clock-tick rate (ticks per second) reported by the OS.
///
/// Falls back to 100 when `sysconf` cannot provide a usable value.
pub fn clock_ticks_per_second() -> u64 {
    // SAFETY: sysconf only reads a configuration value.
    let rate = unsafe { libc::sysconf(libc::_SC_CLK_TCK) };
    if rate > 0 {
        rate as u64
    } else {
        FALLBACK_TICKS_PER_SEC
    }
}
