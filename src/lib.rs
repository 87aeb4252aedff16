//! Board Tally - a table-side aid for board games
//!
//! Core modules:
//! - `tracker`: Counters, card appearance and the countdown state machine
//! - `persistence`: Copy/paste JSON snapshots of the table
//! - `color`: Picker hex to card tint
//! - `settings`: Preferences kept in LocalStorage
//! - `platform`: DOM and interval bindings (wasm only)
//! - `audio`: Web Audio beeps (wasm only)

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod color;
pub mod persistence;
#[cfg(target_arch = "wasm32")]
pub mod platform;
pub mod settings;
pub mod tracker;

pub use persistence::{LoadError, SessionSnapshot};
pub use settings::Settings;
pub use tracker::{Command, Host, Tracker};

/// Table configuration constants
pub mod consts {
    /// Counter/card slots on the table
    pub const NUM_COUNTERS: u8 = 6;

    /// Timer duration when none (or garbage) is configured
    pub const DEFAULT_DURATION_SECS: u32 = 60;
    /// Countdown tick period
    pub const TICK_INTERVAL_MS: u32 = 1000;
    /// Timer turns amber at or below this
    pub const WARNING_THRESHOLD_SECS: u32 = 15;
    /// Timer turns red and beeps every second at or below this
    pub const DANGER_THRESHOLD_SECS: u32 = 10;

    /// Alpha applied to card tints
    pub const CARD_OPACITY: f32 = 0.7;
}
