//! Timer beeps using Web Audio API
//!
//! Procedurally generated tones - no external files needed!

use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

use crate::tracker::{BeepCount, BeepSink};

/// Tone length (seconds)
const BEEP_DURATION: f64 = 0.1;
/// Silence between consecutive beeps (seconds)
const BEEP_GAP: f64 = 0.1;
/// Countdown warning pitch
const SINGLE_FREQ: f32 = 440.0;
/// Time's-up pitch
const TRIPLE_FREQ: f32 = 1200.0;
/// Peak gain before volume scaling
const BEEP_GAIN: f32 = 0.1;

/// Beep generator
pub struct Beeper {
    ctx: Option<AudioContext>,
    volume: f32,
}

impl Default for Beeper {
    fn default() -> Self {
        Self::new()
    }
}

impl Beeper {
    pub fn new() -> Self {
        // Try to create audio context (may fail if not in secure context)
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        Self { ctx, volume: 1.0 }
    }

    /// Resume audio context (required after user gesture)
    pub fn resume(&self) {
        if let Some(ctx) = &self.ctx {
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }
        }
    }

    /// Effective volume (0.0 - 1.0); 0 silences
    pub fn set_volume(&mut self, vol: f32) {
        self.volume = vol.clamp(0.0, 1.0);
    }

    /// Create an oscillator with gain envelope
    fn create_osc(&self, ctx: &AudioContext, freq: f32) -> Option<(OscillatorNode, GainNode)> {
        let osc = ctx.create_oscillator().ok()?;
        let gain = ctx.create_gain().ok()?;

        osc.set_type(OscillatorType::Sine);
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(&ctx.destination()).ok()?;

        Some((osc, gain))
    }

    /// Short sine blip starting at `t` with an anti-pop ramp
    fn schedule_beep(&self, ctx: &AudioContext, freq: f32, t: f64) {
        let Some((osc, gain)) = self.create_osc(ctx, freq) else {
            return;
        };

        gain.gain().set_value_at_time(BEEP_GAIN * self.volume, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.001, t + BEEP_DURATION)
            .ok();

        osc.start_with_when(t).ok();
        osc.stop_with_when(t + BEEP_DURATION).ok();
    }
}

impl BeepSink for Beeper {
    fn play_beeps(&mut self, count: BeepCount) {
        if self.volume <= 0.0 {
            return;
        }
        let Some(ctx) = &self.ctx else { return };

        self.resume();

        let freq = match count {
            BeepCount::Single => SINGLE_FREQ,
            BeepCount::Triple => TRIPLE_FREQ,
        };
        let now = ctx.current_time();
        for i in 0..count.count() {
            let t = now + f64::from(i) * (BEEP_DURATION + BEEP_GAP);
            self.schedule_beep(ctx, freq, t);
        }
    }
}
