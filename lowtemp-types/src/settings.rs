//! The low-temperature measurement settings record.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use thiserror::Error;

/// Accepted range for `target_value`, in °C.
pub const TARGET_VALUE_RANGE: RangeInclusive<f64> = -50.0..=30.0;

/// Accepted range for `wait_minutes`.
pub const WAIT_MINUTES_RANGE: RangeInclusive<u32> = 1..=999;

/// Accepted range for `sample_count`.
pub const SAMPLE_COUNT_RANGE: RangeInclusive<u32> = 1..=10;

/// The low-temperature measurement configuration record.
///
/// This is the single entity the panel edits and synchronizes. The wire
/// and cache shape uses camelCase field names:
///
/// ```json
/// {"enabled":false,"targetValue":-32.0,"waitMinutes":200,"sampleCount":10}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LowTempSettings {
    /// Whether low-temperature measurement is active.
    pub enabled: bool,
    /// Target temperature in °C.
    pub target_value: f64,
    /// Minutes to wait before reading.
    pub wait_minutes: u32,
    /// Number of readings taken per measurement.
    pub sample_count: u32,
}

impl LowTempSettings {
    /// Checks every field against its declared range.
    ///
    /// Returns the first violated range. A record must pass this check
    /// before it is persisted or transmitted.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !TARGET_VALUE_RANGE.contains(&self.target_value) {
            return Err(ValidationError::TargetValue(self.target_value));
        }
        if !WAIT_MINUTES_RANGE.contains(&self.wait_minutes) {
            return Err(ValidationError::WaitMinutes(self.wait_minutes));
        }
        if !SAMPLE_COUNT_RANGE.contains(&self.sample_count) {
            return Err(ValidationError::SampleCount(self.sample_count));
        }
        Ok(())
    }

    /// Serializes to the JSON wire/cache shape.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parses from the JSON wire/cache shape. Does not range-validate.
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

impl Default for LowTempSettings {
    /// The fixed fallback record used when no valid cached value exists.
    fn default() -> Self {
        Self {
            enabled: false,
            target_value: -32.0,
            wait_minutes: 200,
            sample_count: 10,
        }
    }
}

/// A field failed its range check.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("targetValue {0} is outside [-50, 30]")]
    TargetValue(f64),

    #[error("waitMinutes {0} is outside [1, 999]")]
    WaitMinutes(u32),

    #[error("sampleCount {0} is outside [1, 10]")]
    SampleCount(u32),
}
