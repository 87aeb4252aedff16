//! The six table counters

use std::fmt;

use super::ports::DisplaySink;
use crate::consts::NUM_COUNTERS;

/// Identifier of one counter slot (and of the card it sits on), `1..=6`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CounterId(u8);

impl CounterId {
    /// Returns `None` for slots outside `1..=NUM_COUNTERS`
    pub fn new(id: u8) -> Option<Self> {
        (1..=NUM_COUNTERS).contains(&id).then_some(Self(id))
    }

    /// Parse an id as it appears in element ids and snapshot keys ("1".."6")
    pub fn parse(s: &str) -> Option<Self> {
        s.trim().parse::<u8>().ok().and_then(Self::new)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Zero-based slot index
    fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    /// All slots in display order
    pub fn all() -> impl Iterator<Item = CounterId> {
        (1..=NUM_COUNTERS).map(CounterId)
    }
}

impl fmt::Display for CounterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Counter values, one per slot, unbounded in both directions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CounterStore {
    values: [i64; NUM_COUNTERS as usize],
}

impl CounterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: CounterId) -> i64 {
        self.values[id.index()]
    }

    /// Add `delta` to a counter and notify the display.
    ///
    /// Raw ids that don't name a slot are ignored.
    pub fn adjust(&mut self, id: u8, delta: i64, display: &mut impl DisplaySink) {
        let Some(id) = CounterId::new(id) else {
            log::debug!("Ignoring adjust for unknown counter {}", id);
            return;
        };
        let slot = &mut self.values[id.index()];
        *slot = slot.saturating_add(delta);
        display.set_counter_text(id, *slot);
        display.pulse_counter(id);
    }

    /// Overwrite a counter without visual feedback (restore path)
    pub fn set(&mut self, id: CounterId, value: i64) {
        self.values[id.index()] = value;
    }

    /// `(id, value)` pairs in slot order
    pub fn iter(&self) -> impl Iterator<Item = (CounterId, i64)> + '_ {
        CounterId::all().map(|id| (id, self.get(id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::testing::{Call, RecordingHost};
    use proptest::prelude::*;

    #[test]
    fn test_counter_id_range() {
        assert!(CounterId::new(0).is_none());
        assert!(CounterId::new(7).is_none());
        assert_eq!(CounterId::new(6).map(CounterId::get), Some(6));
        assert_eq!(CounterId::parse(" 3 "), CounterId::new(3));
        assert!(CounterId::parse("x").is_none());
        assert_eq!(CounterId::all().count(), 6);
    }

    #[test]
    fn test_adjust_updates_display_and_pulses() {
        let mut store = CounterStore::new();
        let mut host = RecordingHost::default();
        store.adjust(2, 1, &mut host);
        store.adjust(2, -3, &mut host);

        let id = CounterId::new(2).unwrap();
        assert_eq!(store.get(id), -2);
        assert_eq!(
            host.calls,
            vec![
                Call::CounterText(id, 1),
                Call::Pulse(id),
                Call::CounterText(id, -2),
                Call::Pulse(id),
            ]
        );
    }

    #[test]
    fn test_adjust_unknown_id_is_noop() {
        let mut store = CounterStore::new();
        let mut host = RecordingHost::default();
        store.adjust(0, 1, &mut host);
        store.adjust(9, 1, &mut host);
        assert_eq!(store, CounterStore::new());
        assert!(host.calls.is_empty());
    }

    #[test]
    fn test_adjust_saturates() {
        let mut store = CounterStore::new();
        let mut host = RecordingHost::default();
        let id = CounterId::new(1).unwrap();
        store.set(id, i64::MAX);
        store.adjust(1, 1, &mut host);
        assert_eq!(store.get(id), i64::MAX);
    }

    proptest! {
        #[test]
        fn prop_adjust_sums_deltas(id in 1u8..=6, deltas in prop::collection::vec(-1000i64..1000, 0..50)) {
            let mut store = CounterStore::new();
            let mut host = RecordingHost::default();
            for &d in &deltas {
                store.adjust(id, d, &mut host);
            }
            let id = CounterId::new(id).unwrap();
            prop_assert_eq!(store.get(id), deltas.iter().sum::<i64>());
            // Other slots untouched
            for (other, value) in store.iter() {
                if other != id {
                    prop_assert_eq!(value, 0);
                }
            }
        }
    }
}
