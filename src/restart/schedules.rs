//! The restart-schedule trait and its basic variants.

use crate::error::ConfigError;
use crate::split::Split;

/// A stateful generator of run lengths for successive restarts of a search.
///
/// The sequence is deterministic given the schedule's parameters and the
/// number of calls made so far. Every returned length is strictly positive.
pub trait RestartSchedule: Split {
    /// Returns the next run length, advancing the internal cursor.
    fn next_run_length(&mut self) -> usize;

    /// Rewinds the cursor to the start of the sequence. Parameters are
    /// unchanged.
    fn reset(&mut self);
}

/// A schedule that returns the same run length on every call.
#[derive(Debug, Clone)]
pub struct ConstantRestartSchedule {
    length: usize,
}

impl ConstantRestartSchedule {
    /// Creates a schedule that always returns `length`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Zero`] if `length` is 0.
    pub fn new(length: usize) -> Result<Self, ConfigError> {
        if length == 0 {
            return Err(ConfigError::Zero { name: "length" });
        }
        Ok(Self { length })
    }
}

impl RestartSchedule for ConstantRestartSchedule {
    fn next_run_length(&mut self) -> usize {
        self.length
    }

    fn reset(&mut self) {}
}

impl Split for ConstantRestartSchedule {
    fn split(&self) -> Self {
        self.clone()
    }
}

/// The Variable Annealing Length (VAL) schedule: an exponentially growing
/// sequence of run lengths.
///
/// The first run length is `r0` (default 1000); each subsequent call doubles
/// the previous length. Once doubling would overflow, the schedule saturates
/// at `usize::MAX` and returns that value forever — it never wraps.
///
/// Short early runs let the annealer cool quickly through many random
/// starts; later runs are long enough to anneal properly.
#[derive(Debug, Clone)]
pub struct VariableAnnealingLength {
    r0: usize,
    next: usize,
}

impl VariableAnnealingLength {
    const DEFAULT_INITIAL_LENGTH: usize = 1000;

    /// Creates the schedule with the default initial run length of 1000.
    pub fn new() -> Self {
        Self {
            r0: Self::DEFAULT_INITIAL_LENGTH,
            next: Self::DEFAULT_INITIAL_LENGTH,
        }
    }

    /// Creates the schedule with initial run length `r0`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Zero`] if `r0` is 0.
    pub fn with_initial_length(r0: usize) -> Result<Self, ConfigError> {
        if r0 == 0 {
            return Err(ConfigError::Zero { name: "r0" });
        }
        Ok(Self { r0, next: r0 })
    }
}

impl Default for VariableAnnealingLength {
    fn default() -> Self {
        Self::new()
    }
}

impl RestartSchedule for VariableAnnealingLength {
    fn next_run_length(&mut self) -> usize {
        let length = self.next;
        self.next = self.next.saturating_mul(2);
        length
    }

    fn reset(&mut self) {
        self.next = self.r0;
    }
}

impl Split for VariableAnnealingLength {
    fn split(&self) -> Self {
        // The parallel worker begins its own schedule from the start,
        // not from this instance's current cursor.
        Self {
            r0: self.r0,
            next: self.r0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_constant_returns_length_indefinitely() {
        let mut s = ConstantRestartSchedule::new(42).unwrap();
        for _ in 0..100 {
            assert_eq!(s.next_run_length(), 42);
        }
        s.reset();
        assert_eq!(s.next_run_length(), 42);
    }

    #[test]
    fn test_constant_rejects_zero() {
        assert_eq!(
            ConstantRestartSchedule::new(0).err(),
            Some(ConfigError::Zero { name: "length" })
        );
    }

    #[test]
    fn test_val_doubles_from_default() {
        let mut s = VariableAnnealingLength::new();
        assert_eq!(s.next_run_length(), 1000);
        assert_eq!(s.next_run_length(), 2000);
        assert_eq!(s.next_run_length(), 4000);
        assert_eq!(s.next_run_length(), 8000);
        s.reset();
        assert_eq!(s.next_run_length(), 1000);
    }

    #[test]
    fn test_val_saturates_instead_of_wrapping() {
        let mut s = VariableAnnealingLength::with_initial_length(usize::MAX / 2 + 1).unwrap();
        assert_eq!(s.next_run_length(), usize::MAX / 2 + 1);
        for _ in 0..10 {
            assert_eq!(s.next_run_length(), usize::MAX);
        }
    }

    #[test]
    fn test_val_eventually_saturates_from_small_r0() {
        let mut s = VariableAnnealingLength::new();
        let mut previous = 0usize;
        for _ in 0..200 {
            let length = s.next_run_length();
            assert!(length > 0);
            assert!(length >= previous, "sequence must be non-decreasing");
            previous = length;
        }
        assert_eq!(previous, usize::MAX);
    }

    #[test]
    fn test_val_rejects_zero() {
        assert!(VariableAnnealingLength::with_initial_length(0).is_err());
    }

    #[test]
    fn test_val_split_starts_fresh() {
        let mut a = VariableAnnealingLength::new();
        a.next_run_length();
        a.next_run_length();
        let mut b = a.split();
        assert_eq!(b.next_run_length(), 1000, "split cursor starts at r0");
        assert_eq!(a.next_run_length(), 4000, "split must not disturb the original");
    }

    proptest! {
        #[test]
        fn prop_schedules_deterministic_after_reset(r0 in 1usize..1_000_000, n in 1usize..64) {
            let mut s = VariableAnnealingLength::with_initial_length(r0).unwrap();
            let first: Vec<usize> = (0..n).map(|_| s.next_run_length()).collect();
            s.reset();
            let second: Vec<usize> = (0..n).map(|_| s.next_run_length()).collect();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_split_matches_reset_sequence(r0 in 1usize..1_000_000, burn in 0usize..16) {
            let mut s = VariableAnnealingLength::with_initial_length(r0).unwrap();
            for _ in 0..burn {
                s.next_run_length();
            }
            let mut t = s.split();
            s.reset();
            for _ in 0..8 {
                prop_assert_eq!(t.next_run_length(), s.next_run_length());
            }
        }
    }
}
