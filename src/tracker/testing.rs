//! Recording host for unit tests

use super::counters::CounterId;
use super::ports::{BeepCount, BeepSink, Controls, DisplaySink, Scheduler, TaskId};
use super::timer::ColorZone;

/// One recorded host call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CounterText(CounterId, i64),
    Pulse(CounterId),
    TimerText(String),
    Zone(ColorZone),
    Controls(Controls),
    CardColor(CounterId, String),
    CardName(CounterId, String),
    Snapshot(String),
    Beep(BeepCount),
    StartRepeating(u32),
    Cancel(TaskId),
}

#[derive(Debug, Default)]
pub struct RecordingHost {
    pub calls: Vec<Call>,
    next_task: i32,
    active: Vec<TaskId>,
}

impl RecordingHost {
    pub fn active_tasks(&self) -> usize {
        self.active.len()
    }

    pub fn beeps(&self) -> Vec<BeepCount> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Beep(b) => Some(*b),
                _ => None,
            })
            .collect()
    }

    pub fn last_zone(&self) -> Option<ColorZone> {
        self.calls.iter().rev().find_map(|c| match c {
            Call::Zone(z) => Some(*z),
            _ => None,
        })
    }

    pub fn last_timer_text(&self) -> Option<String> {
        self.calls.iter().rev().find_map(|c| match c {
            Call::TimerText(t) => Some(t.clone()),
            _ => None,
        })
    }

    pub fn last_controls(&self) -> Option<Controls> {
        self.calls.iter().rev().find_map(|c| match c {
            Call::Controls(c) => Some(*c),
            _ => None,
        })
    }

    pub fn last_snapshot(&self) -> Option<String> {
        self.calls.iter().rev().find_map(|c| match c {
            Call::Snapshot(s) => Some(s.clone()),
            _ => None,
        })
    }
}

impl DisplaySink for RecordingHost {
    fn set_counter_text(&mut self, id: CounterId, value: i64) {
        self.calls.push(Call::CounterText(id, value));
    }

    fn pulse_counter(&mut self, id: CounterId) {
        self.calls.push(Call::Pulse(id));
    }

    fn set_timer_text(&mut self, text: &str) {
        self.calls.push(Call::TimerText(text.to_string()));
    }

    fn set_timer_zone(&mut self, zone: ColorZone) {
        self.calls.push(Call::Zone(zone));
    }

    fn set_controls_enabled(&mut self, controls: Controls) {
        self.calls.push(Call::Controls(controls));
    }

    fn set_card_color(&mut self, id: CounterId, css: &str) {
        self.calls.push(Call::CardColor(id, css.to_string()));
    }

    fn set_card_name(&mut self, id: CounterId, name: &str) {
        self.calls.push(Call::CardName(id, name.to_string()));
    }

    fn show_snapshot(&mut self, text: &str) {
        self.calls.push(Call::Snapshot(text.to_string()));
    }
}

impl BeepSink for RecordingHost {
    fn play_beeps(&mut self, count: BeepCount) {
        self.calls.push(Call::Beep(count));
    }
}

impl Scheduler for RecordingHost {
    fn start_repeating(&mut self, interval_ms: u32) -> TaskId {
        self.next_task += 1;
        let task = TaskId(self.next_task);
        self.active.push(task);
        self.calls.push(Call::StartRepeating(interval_ms));
        task
    }

    fn cancel(&mut self, task: TaskId) {
        self.active.retain(|t| *t != task);
        self.calls.push(Call::Cancel(task));
    }
}
