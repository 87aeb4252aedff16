//! Per-card appearance: tint and player label

use super::counters::CounterId;
use super::ports::DisplaySink;
use crate::color::Rgb;
use crate::consts::NUM_COUNTERS;

/// Look of one card
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardAppearance {
    /// CSS background, `None` until the card is first tinted
    pub color: Option<String>,
    pub name: String,
}

/// Appearance of every card, indexed like the counters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardStore {
    cards: [CardAppearance; NUM_COUNTERS as usize],
}

impl CardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: CounterId) -> &CardAppearance {
        &self.cards[usize::from(id.get() - 1)]
    }

    fn get_mut(&mut self, id: CounterId) -> &mut CardAppearance {
        &mut self.cards[usize::from(id.get() - 1)]
    }

    /// Tint a card from a picker value. Malformed hex is ignored.
    pub fn set_color_hex(&mut self, id: CounterId, hex: &str, display: &mut impl DisplaySink) {
        match Rgb::from_hex(hex) {
            Some(rgb) => self.set_color(id, rgb.to_card_css(), display),
            None => log::warn!("Ignoring malformed color {:?} for card {}", hex, id),
        }
    }

    /// Apply a CSS color string as-is
    pub fn set_color(&mut self, id: CounterId, css: String, display: &mut impl DisplaySink) {
        display.set_card_color(id, &css);
        self.get_mut(id).color = Some(css);
    }

    /// Record a label typed into the card header
    pub fn rename(&mut self, id: CounterId, name: impl Into<String>) {
        self.get_mut(id).name = name.into();
    }

    /// Restore a label and push it to the header input
    pub fn restore_name(&mut self, id: CounterId, name: String, display: &mut impl DisplaySink) {
        display.set_card_name(id, &name);
        self.get_mut(id).name = name;
    }

    pub fn iter(&self) -> impl Iterator<Item = (CounterId, &CardAppearance)> {
        CounterId::all().map(|id| (id, self.get(id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::testing::{Call, RecordingHost};

    #[test]
    fn test_set_color_hex() {
        let mut cards = CardStore::new();
        let mut host = RecordingHost::default();
        let id = CounterId::new(4).unwrap();

        cards.set_color_hex(id, "#00ff00", &mut host);
        assert_eq!(cards.get(id).color.as_deref(), Some("rgba(0, 255, 0, 0.7)"));
        assert_eq!(
            host.calls,
            vec![Call::CardColor(id, "rgba(0, 255, 0, 0.7)".to_string())]
        );

        // Bad input keeps the previous tint
        cards.set_color_hex(id, "green", &mut host);
        assert_eq!(cards.get(id).color.as_deref(), Some("rgba(0, 255, 0, 0.7)"));
        assert_eq!(host.calls.len(), 1);
    }

    #[test]
    fn test_rename_is_silent() {
        let mut cards = CardStore::new();
        let id = CounterId::new(1).unwrap();
        cards.rename(id, "Alice");
        assert_eq!(cards.get(id).name, "Alice");
        assert_eq!(cards.get(CounterId::new(2).unwrap()).name, "");
    }
}
