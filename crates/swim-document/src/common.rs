//! Nodes shared across the scenario tree
//!
//! Times are RFC 3339 timestamps and durations ISO 8601 durations, both kept
//! as text; their conversion belongs to the codec layer.

use serde::{Deserialize, Serialize};

fn enabled_by_default() -> bool {
    true
}

/// Time span between two timestamps
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeInterval {
    pub start: String,
    pub end: String,
}

/// Cost of an airspace during a time span
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostInterval {
    pub id: String,
    pub start: String,
    pub end: String,
    pub cost: f64,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

impl CostInterval {
    #[must_use]
    pub fn time_interval(&self) -> TimeInterval {
        TimeInterval {
            start: self.start.clone(),
            end: self.end.clone(),
        }
    }
}

/// Track deviation tolerance
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackError {
    pub cross_track_error: f64,
    pub altitude_error: f64,
    /// Degrees
    pub opening_bearing_error: f64,
    /// Degrees
    pub closing_bearing_error: f64,
    pub timing_error: String,
}

/// Track point deviation tolerance
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackPointError {
    pub horizontal_error: f64,
    pub vertical_error: f64,
    pub timing_error: String,
}

/// Error tolerance block
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Errors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_track_error: Option<TrackError>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_take_off_error: Option<TrackPointError>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_landing_error: Option<TrackPointError>,
}

/// Depiction rendering family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbology {
    #[serde(rename = "TACTICAL_POINT")]
    TacticalPoint,
    #[serde(rename = "TACTICAL_SYMBOL")]
    TacticalSymbol,
}

/// Map depiction of the owning object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Depiction {
    pub symbology: Symbology,
    pub sidc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}
