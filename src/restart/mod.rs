//! Restart schedules: run-length sequence generators.
//!
//! A restart schedule decides how long each successive run of a restarted
//! search should be. Schedules are stateful iterators: deterministic given
//! their parameters and call count, resettable, and splittable for parallel
//! use (a split copy always begins its own sequence from the start).

mod luby;
mod schedules;

pub use luby::LubyRestartSchedule;
pub use schedules::{ConstantRestartSchedule, RestartSchedule, VariableAnnealingLength};
