//! Browser platform layer
//!
//! Binds the tracker's outbound traits to the page:
//! - `dom`: display updates on the page elements
//! - `interval`: `setInterval`-backed repeating ticks
//! - [`WebHost`]: bundles both with the audio beeper

pub mod dom;
pub mod interval;

pub use dom::DomDisplay;
pub use interval::IntervalScheduler;

use crate::audio::Beeper;
use crate::tracker::{
    BeepCount, BeepSink, ColorZone, Controls, CounterId, DisplaySink, Scheduler, TaskId,
};

/// Everything the tracker talks to in the browser
pub struct WebHost {
    pub display: DomDisplay,
    pub beeper: Beeper,
    pub scheduler: IntervalScheduler,
}

impl DisplaySink for WebHost {
    fn set_counter_text(&mut self, id: CounterId, value: i64) {
        self.display.set_counter_text(id, value);
    }

    fn pulse_counter(&mut self, id: CounterId) {
        self.display.pulse_counter(id);
    }

    fn set_timer_text(&mut self, text: &str) {
        self.display.set_timer_text(text);
    }

    fn set_timer_zone(&mut self, zone: ColorZone) {
        self.display.set_timer_zone(zone);
    }

    fn set_controls_enabled(&mut self, controls: Controls) {
        self.display.set_controls_enabled(controls);
    }

    fn set_card_color(&mut self, id: CounterId, css: &str) {
        self.display.set_card_color(id, css);
    }

    fn set_card_name(&mut self, id: CounterId, name: &str) {
        self.display.set_card_name(id, name);
    }

    fn show_snapshot(&mut self, text: &str) {
        self.display.show_snapshot(text);
    }
}

impl BeepSink for WebHost {
    fn play_beeps(&mut self, count: BeepCount) {
        self.beeper.play_beeps(count);
    }
}

impl Scheduler for WebHost {
    fn start_repeating(&mut self, interval_ms: u32) -> TaskId {
        self.scheduler.start_repeating(interval_ms)
    }

    fn cancel(&mut self, task: TaskId) {
        self.scheduler.cancel(task);
    }
}
