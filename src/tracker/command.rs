//! Typed UI commands and the single dispatch entry point

use super::cards::CardStore;
use super::counters::{CounterId, CounterStore};
use super::ports::{DisplaySink, Host};
use super::timer::TimerController;
use crate::persistence::{self, LoadError};

/// A discrete operator action, translated from a raw UI event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add `delta` to counter `id` (unknown ids ignored)
    Adjust { id: u8, delta: i64 },
    Start,
    Pause,
    Reset,
    /// Raw text of the duration input
    Configure(String),
    Save,
    /// Raw text of the snapshot box
    Load(String),
    /// Picker value (`#rrggbb`) for a card
    SetColor { id: CounterId, hex: String },
    Rename { id: CounterId, name: String },
}

/// All live table state
#[derive(Debug, Clone, Default)]
pub struct Tracker {
    pub counters: CounterStore,
    pub cards: CardStore,
    pub timer: TimerController,
}

impl Tracker {
    /// Fresh table with the timer loaded to `duration` seconds
    pub fn new(duration: u32) -> Self {
        Self {
            counters: CounterStore::new(),
            cards: CardStore::new(),
            timer: TimerController::new(duration),
        }
    }

    /// Paint initial state
    pub fn init(&self, display: &mut impl DisplaySink) {
        for (id, value) in self.counters.iter() {
            display.set_counter_text(id, value);
        }
        self.timer.render(display);
    }

    /// Apply one command. Only `Load` can fail; the caller surfaces the error.
    pub fn dispatch(&mut self, command: Command, host: &mut impl Host) -> Result<(), LoadError> {
        match command {
            Command::Adjust { id, delta } => self.counters.adjust(id, delta, host),
            Command::Start => self.timer.start(host),
            Command::Pause => self.timer.pause(host),
            Command::Reset => self.timer.reset(host),
            Command::Configure(input) => self.timer.configure(&input, host),
            Command::Save => {
                let text = self.save();
                host.show_snapshot(&text);
                log::info!("Game state saved ({} bytes)", text.len());
            }
            Command::Load(text) => {
                let report = persistence::load(&text, &mut self.counters, &mut self.cards, host)
                    .inspect_err(|e| log::error!("Error loading game state: {e:?}"))?;
                log::info!(
                    "Game state loaded: {} counters, {} colors, {} names",
                    report.counters,
                    report.colors,
                    report.names
                );
            }
            Command::SetColor { id, hex } => self.cards.set_color_hex(id, &hex, host),
            Command::Rename { id, name } => self.cards.rename(id, name),
        }
        Ok(())
    }

    /// Scheduler firing
    pub fn tick(&mut self, host: &mut impl Host) {
        self.timer.tick(host);
    }

    pub fn save(&self) -> String {
        persistence::save(&self.counters, &self.cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::ports::{BeepCount, Controls};
    use crate::tracker::testing::{Call, RecordingHost};
    use crate::tracker::timer::{ColorZone, TimerPhase};

    fn id(n: u8) -> CounterId {
        CounterId::new(n).unwrap()
    }

    #[test]
    fn test_init_paints_everything() {
        let tracker = Tracker::new(90);
        let mut host = RecordingHost::default();
        tracker.init(&mut host);

        assert_eq!(host.calls[0], Call::CounterText(id(1), 0));
        assert_eq!(host.last_timer_text().as_deref(), Some("01:30"));
        assert_eq!(host.last_zone(), Some(ColorZone::Normal));
        assert_eq!(host.last_controls(), Some(Controls::STOPPED));
    }

    #[test]
    fn test_full_session() {
        let mut tracker = Tracker::default();
        let mut host = RecordingHost::default();

        let commands = vec![
            Command::Adjust { id: 1, delta: 1 },
            Command::Adjust { id: 1, delta: 1 },
            Command::Adjust { id: 2, delta: -1 },
            Command::SetColor { id: id(1), hex: "#ff0000".into() },
            Command::Rename { id: id(1), name: "Red".into() },
            Command::Configure("3".into()),
            Command::Start,
        ];
        for command in commands {
            tracker.dispatch(command, &mut host).unwrap();
        }
        for _ in 0..4 {
            tracker.tick(&mut host);
        }
        assert_eq!(tracker.timer.phase(), TimerPhase::Expired);
        assert_eq!(host.beeps().last(), Some(&BeepCount::Triple));

        tracker.dispatch(Command::Save, &mut host).unwrap();
        let saved = host.last_snapshot().unwrap();

        let mut other = Tracker::default();
        other.dispatch(Command::Load(saved), &mut host).unwrap();
        assert_eq!(other.counters, tracker.counters);
        assert_eq!(other.cards, tracker.cards);
        assert_eq!(other.counters.get(id(1)), 2);
        assert_eq!(other.cards.get(id(1)).name, "Red");
    }

    #[test]
    fn test_load_failure_surfaces() {
        let mut tracker = Tracker::default();
        let mut host = RecordingHost::default();
        tracker.dispatch(Command::Adjust { id: 3, delta: 4 }, &mut host).unwrap();

        let result = tracker.dispatch(Command::Load("not json".into()), &mut host);
        assert!(matches!(result, Err(LoadError::InvalidSnapshot(_))));
        assert_eq!(tracker.counters.get(id(3)), 4);
    }
}
