//! Luby restart schedule.

use crate::error::ConfigError;
use crate::restart::RestartSchedule;
use crate::split::Split;

/// A restart schedule following the Luby sequence, scaled by a unit length.
///
/// The Luby sequence 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8, … repeats
/// each completed prefix before doubling, which gives a universal schedule
/// for restarted randomized searches (Luby, Sinclair & Zuckerman, 1993).
/// Each run length is `unit * luby(i)`; multiplications saturate rather
/// than wrap.
#[derive(Debug, Clone)]
pub struct LubyRestartSchedule {
    unit: usize,
    step: u64,
}

impl LubyRestartSchedule {
    /// Creates the schedule with the given unit run length.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Zero`] if `unit` is 0.
    pub fn new(unit: usize) -> Result<Self, ConfigError> {
        if unit == 0 {
            return Err(ConfigError::Zero { name: "unit" });
        }
        Ok(Self { unit, step: 0 })
    }
}

/// The i-th element of the Luby sequence (0-based).
fn luby(i: u64) -> u64 {
    // Find the smallest subsequence 2^seq - 1 containing index i, then
    // reduce i into earlier repetitions until it lands on a power boundary.
    let mut size: u64 = 1;
    let mut seq: u32 = 0;
    let mut i = i;
    while size < i + 1 {
        seq += 1;
        size = 2 * size + 1;
    }
    while size - 1 != i {
        size = (size - 1) / 2;
        seq -= 1;
        i %= size;
    }
    1u64 << seq
}

impl RestartSchedule for LubyRestartSchedule {
    fn next_run_length(&mut self) -> usize {
        let factor = luby(self.step);
        self.step = self.step.saturating_add(1);
        let factor = usize::try_from(factor).unwrap_or(usize::MAX);
        self.unit.saturating_mul(factor)
    }

    fn reset(&mut self) {
        self.step = 0;
    }
}

impl Split for LubyRestartSchedule {
    fn split(&self) -> Self {
        Self {
            unit: self.unit,
            step: 0,
        }
    }
}
