//! Manual save/restore of the table
//!
//! Features:
//! - Snapshot of counters, card colors and card names as one JSON object
//! - Copy/paste transport through a text box (no storage of our own)
//! - Additive merge on load: only keys present in the snapshot change
//! - Parse-then-apply, so a bad paste never half-applies

pub mod snapshot;

pub use snapshot::{LoadError, MergeReport, SessionSnapshot, load, save};
