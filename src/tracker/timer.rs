//! Countdown timer state machine
//!
//! Driven by a one-second repeating task. The controller owns the task
//! handle: starting is a no-op while running and cancelling is idempotent,
//! so ticks only ever arrive while [`TimerPhase::Running`].

use super::ports::{BeepCount, Controls, DisplaySink, Host, Scheduler, TaskId};
use crate::consts::{
    DANGER_THRESHOLD_SECS, DEFAULT_DURATION_SECS, TICK_INTERVAL_MS, WARNING_THRESHOLD_SECS,
};

/// Run state of the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    /// Ready to start (initial, after reset or a new duration)
    Idle,
    /// Ticking once per second
    Running,
    /// Stopped mid-countdown, resumable
    Paused,
    /// Reached zero
    Expired,
}

/// Display color of the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorZone {
    #[default]
    Normal,
    Warning,
    Danger,
}

impl ColorZone {
    /// Danger takes precedence over warning
    pub fn for_remaining(secs: u32) -> Self {
        if secs <= DANGER_THRESHOLD_SECS {
            ColorZone::Danger
        } else if secs <= WARNING_THRESHOLD_SECS {
            ColorZone::Warning
        } else {
            ColorZone::Normal
        }
    }

    /// CSS custom property used for the timer text color
    pub fn css_var(self) -> &'static str {
        match self {
            ColorZone::Normal => "var(--text-primary)",
            ColorZone::Warning => "var(--warning)",
            ColorZone::Danger => "var(--danger)",
        }
    }
}

/// Parse operator duration input.
///
/// Reads the leading integer the way a number field's text is read
/// (`"45s"` is 45, `"1.5"` is 1). Anything that isn't a positive integer
/// falls back to [`DEFAULT_DURATION_SECS`].
pub fn parse_duration(input: &str) -> u32 {
    let s = input.trim();
    let unsigned = s.strip_prefix('+').unwrap_or(s);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    match unsigned[..digits_end].parse::<u32>() {
        Ok(secs) if secs > 0 => secs,
        _ => DEFAULT_DURATION_SECS,
    }
}

/// Format seconds as `MM:SS` (minutes are not wrapped at an hour)
pub fn format_time(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// The countdown
#[derive(Debug, Clone)]
pub struct TimerController {
    remaining: u32,
    duration: u32,
    phase: TimerPhase,
    task: Option<TaskId>,
}

impl Default for TimerController {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION_SECS)
    }
}

impl TimerController {
    /// Idle timer loaded with `duration` (0 falls back to the default)
    pub fn new(duration: u32) -> Self {
        let duration = if duration == 0 {
            DEFAULT_DURATION_SECS
        } else {
            duration
        };
        Self {
            remaining: duration,
            duration,
            phase: TimerPhase::Idle,
            task: None,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == TimerPhase::Running
    }

    /// Paint the current time, zone and control state
    pub fn render(&self, display: &mut impl DisplaySink) {
        self.show_time(display);
        display.set_controls_enabled(if self.is_running() {
            Controls::RUNNING
        } else {
            Controls::STOPPED
        });
    }

    /// Load a new duration. Ignored while running.
    pub fn configure(&mut self, input: &str, display: &mut impl DisplaySink) {
        if self.is_running() {
            return;
        }
        self.duration = parse_duration(input);
        self.remaining = self.duration;
        self.phase = TimerPhase::Idle;
        self.show_time(display);
    }

    pub fn start(&mut self, host: &mut impl Host) {
        if self.is_running() {
            return;
        }
        self.phase = TimerPhase::Running;
        self.task = Some(host.start_repeating(TICK_INTERVAL_MS));
        host.set_controls_enabled(Controls::RUNNING);
        log::info!("Timer started at {}", format_time(self.remaining));
    }

    /// One scheduled firing
    pub fn tick(&mut self, host: &mut impl Host) {
        if !self.is_running() {
            return;
        }

        if self.remaining == 0 {
            self.cancel_task(host);
            self.phase = TimerPhase::Expired;
            host.play_beeps(BeepCount::Triple);
            host.set_controls_enabled(Controls::STOPPED);
            log::info!("Timer expired");
            return;
        }

        self.remaining -= 1;
        self.show_time(host);

        // Two independent conditions: entering 15, and every second of the last 10
        if self.remaining == WARNING_THRESHOLD_SECS || self.remaining <= DANGER_THRESHOLD_SECS {
            host.play_beeps(BeepCount::Single);
        }
    }

    pub fn pause(&mut self, host: &mut (impl DisplaySink + Scheduler)) {
        if !self.is_running() {
            return;
        }
        self.cancel_task(host);
        self.phase = TimerPhase::Paused;
        host.set_controls_enabled(Controls::STOPPED);
        log::info!("Timer paused at {}", format_time(self.remaining));
    }

    /// Stop and reload the configured duration
    pub fn reset(&mut self, host: &mut (impl DisplaySink + Scheduler)) {
        self.pause(host);
        self.remaining = self.duration;
        self.phase = TimerPhase::Idle;
        host.set_timer_text(&format_time(self.remaining));
        host.set_timer_zone(ColorZone::Normal);
        host.set_controls_enabled(Controls::STOPPED);
    }

    fn show_time(&self, display: &mut impl DisplaySink) {
        display.set_timer_text(&format_time(self.remaining));
        display.set_timer_zone(ColorZone::for_remaining(self.remaining));
    }

    /// Safe to call repeatedly
    fn cancel_task(&mut self, scheduler: &mut impl Scheduler) {
        if let Some(task) = self.task.take() {
            scheduler.cancel(task);
        }
    }
}
