//! Player preferences
//!
//! Persisted separately from table snapshots in LocalStorage.

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_DURATION_SECS;

/// Preferences that survive a page reload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Last duration entered in the timer box (seconds)
    pub timer_duration_secs: u32,

    // === Audio ===
    /// Beep volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Silence all beeps
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            timer_duration_secs: DEFAULT_DURATION_SECS,
            master_volume: 1.0,
            muted: false,
        }
    }
}

impl Settings {
    /// Remember a newly configured duration (0 means "use the default")
    pub fn set_timer_duration(&mut self, secs: u32) {
        self.timer_duration_secs = if secs == 0 {
            DEFAULT_DURATION_SECS
        } else {
            secs
        };
    }

    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Flip mute, returning the new state
    pub fn toggle_muted(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    /// Volume beeps should actually play at
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume
        }
    }

    /// Parse stored JSON, tolerating missing fields
    pub fn from_json(json: &str) -> Option<Self> {
        serde_json::from_str::<Self>(json).ok().map(|mut s| {
            s.set_master_volume(s.master_volume);
            s.set_timer_duration(s.timer_duration_secs);
            s
        })
    }

    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "board_tally_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Some(settings) = Self::from_json(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.timer_duration_secs, 60);
        assert!(!s.muted);
        assert_eq!(s.effective_volume(), 1.0);
    }

    #[test]
    fn test_mute_silences() {
        let mut s = Settings::default();
        assert!(s.toggle_muted());
        assert_eq!(s.effective_volume(), 0.0);
        assert!(!s.toggle_muted());
    }

    #[test]
    fn test_from_json_partial_and_clamped() {
        let s = Settings::from_json(r#"{"timer_duration_secs": 0, "master_volume": 3.5}"#).unwrap();
        assert_eq!(s.timer_duration_secs, 60);
        assert_eq!(s.master_volume, 1.0);
        assert!(!s.muted);

        assert!(Settings::from_json("nope").is_none());
    }
}
