//! Table state and the countdown
//!
//! All behavior lives here and is platform-free:
//! - State is owned by [`Tracker`], never global
//! - Mutation only through [`Tracker::dispatch`] and scheduler ticks
//! - Output goes through the traits in [`ports`]

pub mod cards;
pub mod command;
pub mod counters;
pub mod ports;
pub mod timer;

#[cfg(test)]
pub(crate) mod testing;

pub use cards::{CardAppearance, CardStore};
pub use command::{Command, Tracker};
pub use counters::{CounterId, CounterStore};
pub use ports::{BeepCount, BeepSink, Controls, DisplaySink, Host, Scheduler, TaskId};
pub use timer::{ColorZone, TimerController, TimerPhase, format_time, parse_duration};
