//! Outbound interfaces the tracker drives
//!
//! The browser shell implements these against the DOM, Web Audio and
//! `setInterval`; tests implement them with a recorder.

use super::counters::CounterId;
use super::timer::ColorZone;

/// Receives display updates
pub trait DisplaySink {
    fn set_counter_text(&mut self, id: CounterId, value: i64);
    /// Replay the short "pulse" animation on a counter
    fn pulse_counter(&mut self, id: CounterId);
    fn set_timer_text(&mut self, text: &str);
    fn set_timer_zone(&mut self, zone: ColorZone);
    fn set_controls_enabled(&mut self, controls: Controls);
    fn set_card_color(&mut self, id: CounterId, css: &str);
    fn set_card_name(&mut self, id: CounterId, name: &str);
    /// Expose saved snapshot text for the operator to copy
    fn show_snapshot(&mut self, text: &str);
}

/// Number of beeps in one alert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeepCount {
    /// Countdown warning
    Single,
    /// Time's up
    Triple,
}

impl BeepCount {
    pub fn count(self) -> u32 {
        match self {
            BeepCount::Single => 1,
            BeepCount::Triple => 3,
        }
    }
}

/// Fire-and-forget audio
pub trait BeepSink {
    fn play_beeps(&mut self, count: BeepCount);
}

/// Handle for a repeating task started through a [`Scheduler`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub i32);

/// Repeating wall-clock callbacks
///
/// Each firing must be routed back to [`crate::Tracker::tick`].
pub trait Scheduler {
    fn start_repeating(&mut self, interval_ms: u32) -> TaskId;
    fn cancel(&mut self, task: TaskId);
}

/// Everything a [`crate::Tracker`] needs from its environment
pub trait Host: DisplaySink + BeepSink + Scheduler {}

impl<T: DisplaySink + BeepSink + Scheduler> Host for T {}

/// Which timer controls accept input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub start: bool,
    pub pause: bool,
    pub duration: bool,
}

impl Controls {
    /// Countdown running: only pause is available
    pub const RUNNING: Controls = Controls {
        start: false,
        pause: true,
        duration: false,
    };

    /// Stopped for any reason: start and duration editing available
    pub const STOPPED: Controls = Controls {
        start: true,
        pause: false,
        duration: true,
    };
}
