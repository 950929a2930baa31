//! View-facing panel surface.
//!
//! The rendering layer is out of scope for this crate; this module
//! provides the data it binds to: descriptors for the three numeric
//! inputs with their declared min/max, and the single status indicator.

use lowtemp_types::{SAMPLE_COUNT_RANGE, TARGET_VALUE_RANGE, WAIT_MINUTES_RANGE};

/// Descriptor for one numeric input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    /// Wire name of the field.
    pub name: &'static str,
    /// Display label.
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    /// Display unit suffix.
    pub unit: &'static str,
}

/// The three numeric inputs, in display order. Min/max mirror the
/// validation ranges.
pub const PANEL_FIELDS: [FieldSpec; 3] = [
    FieldSpec {
        name: "targetValue",
        label: "Target temperature",
        min: *TARGET_VALUE_RANGE.start(),
        max: *TARGET_VALUE_RANGE.end(),
        unit: "°C",
    },
    FieldSpec {
        name: "waitMinutes",
        label: "Wait time",
        min: *WAIT_MINUTES_RANGE.start() as f64,
        max: *WAIT_MINUTES_RANGE.end() as f64,
        unit: "min",
    },
    FieldSpec {
        name: "sampleCount",
        label: "Read count",
        min: *SAMPLE_COUNT_RANGE.start() as f64,
        max: *SAMPLE_COUNT_RANGE.end() as f64,
        unit: "x",
    },
];

/// The mutually-exclusive status indicator.
///
/// Precedence: loading, then validation error, then saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelStatus {
    /// Nothing to report.
    Idle,
    /// Waiting for the server's initial push.
    Loading,
    /// A save just completed or was confirmed.
    Saved,
    /// The current record fails range validation.
    Invalid(String),
}
