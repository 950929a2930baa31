//! Core type definitions for the low-temperature settings panel.
//!
//! This crate defines the configuration record that the panel edits and
//! synchronizes, together with its range constraints:
//! - [`LowTempSettings`] — the four-field record, camelCase on the wire
//! - [`ValidationError`] — a field failed its declared range
//!
//! Range validation happens at the boundary (before persisting or
//! transmitting a record), never while the user is editing.

mod settings;

pub use settings::{
    LowTempSettings, ValidationError, SAMPLE_COUNT_RANGE, TARGET_VALUE_RANGE, WAIT_MINUTES_RANGE,
};
