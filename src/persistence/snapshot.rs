//! Session snapshot JSON codec
//!
//! Wire shape:
//!
//! ```json
//! {"counters": {"1": 3, ...}, "colors": {"1": "rgba(...)", ...}, "names": {"1": "Ana", ...}}
//! ```
//!
//! All three sections are optional on load. Keys are counter ids as strings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::tracker::{CardStore, CounterId, CounterStore, DisplaySink};

/// Why a pasted snapshot was rejected
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Nothing was pasted
    #[error("Please paste game JSON into the text box first.")]
    EmptyInput,

    /// Text is not a snapshot object
    #[error("Invalid game state JSON. Please check the text box content.")]
    InvalidSnapshot(#[source] serde_json::Error),
}

/// Serializable table state
///
/// Values are optional so a hand-edited `null` is skipped instead of
/// rejecting the whole paste.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counters: Option<BTreeMap<String, Option<i64>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<BTreeMap<String, Option<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub names: Option<BTreeMap<String, Option<String>>>,
}

/// How many entries a load actually applied
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeReport {
    pub counters: usize,
    pub colors: usize,
    pub names: usize,
}

impl SessionSnapshot {
    /// Capture every counter, color and name
    pub fn capture(counters: &CounterStore, cards: &CardStore) -> Self {
        let counters = counters
            .iter()
            .map(|(id, value)| (id.to_string(), Some(value)))
            .collect();
        let colors = cards
            .iter()
            .map(|(id, card)| (id.to_string(), Some(card.color.clone().unwrap_or_default())))
            .collect();
        let names = cards
            .iter()
            .map(|(id, card)| (id.to_string(), Some(card.name.clone())))
            .collect();

        Self {
            counters: Some(counters),
            colors: Some(colors),
            names: Some(names),
        }
    }

    pub fn to_json(&self) -> String {
        // String-keyed maps of integers and strings cannot fail to serialize
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Parse pasted text without touching any live state
    pub fn parse(text: &str) -> Result<Self, LoadError> {
        if text.trim().is_empty() {
            return Err(LoadError::EmptyInput);
        }
        // Derived struct visitors also accept arrays; only an object is a snapshot
        let value: serde_json::Value = serde_json::from_str(text).map_err(LoadError::InvalidSnapshot)?;
        if !value.is_object() {
            return Err(LoadError::InvalidSnapshot(serde::de::Error::custom(
                "snapshot must be a JSON object",
            )));
        }
        serde_json::from_value(value).map_err(LoadError::InvalidSnapshot)
    }

    /// Merge into live state, section by section.
    ///
    /// Unknown ids, null values and empty colors are skipped.
    pub fn apply(
        self,
        counters: &mut CounterStore,
        cards: &mut CardStore,
        display: &mut impl DisplaySink,
    ) -> MergeReport {
        let mut report = MergeReport::default();

        for (id, value) in known_entries(self.counters) {
            counters.set(id, value);
            display.set_counter_text(id, value);
            report.counters += 1;
        }

        for (id, color) in known_entries(self.colors) {
            if color.is_empty() {
                continue;
            }
            cards.set_color(id, color, display);
            report.colors += 1;
        }

        for (id, name) in known_entries(self.names) {
            cards.restore_name(id, name, display);
            report.names += 1;
        }

        report
    }
}

/// Entries of an optional section whose key names a live card and whose value is set
fn known_entries<T>(section: Option<BTreeMap<String, Option<T>>>) -> impl Iterator<Item = (CounterId, T)> {
    section
        .into_iter()
        .flatten()
        .filter_map(|(key, value)| Some((CounterId::parse(&key)?, value?)))
}

/// Serialize the whole table
pub fn save(counters: &CounterStore, cards: &CardStore) -> String {
    SessionSnapshot::capture(counters, cards).to_json()
}

/// Parse `text` and merge it into live state; nothing changes on error
pub fn load(
    text: &str,
    counters: &mut CounterStore,
    cards: &mut CardStore,
    display: &mut impl DisplaySink,
) -> Result<MergeReport, LoadError> {
    let snapshot = SessionSnapshot::parse(text)?;
    Ok(snapshot.apply(counters, cards, display))
}
