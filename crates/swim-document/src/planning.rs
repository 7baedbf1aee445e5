//! Waypoint and trajectory nodes

use serde::{Deserialize, Serialize};

use crate::common::Depiction;
use crate::geometry::Position;

/// Route waypoint
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Waypoint {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
    pub designator: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dtg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eto: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ato: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depiction: Option<Depiction>,
}

impl Waypoint {
    #[must_use]
    pub fn position(&self) -> Position {
        Position::new(self.latitude, self.longitude, self.altitude)
    }
}

/// Waypoint list
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Waypoints {
    #[serde(default)]
    pub waypoint: Vec<Waypoint>,
}

/// Planned trajectory
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trajectory {
    #[serde(default)]
    pub waypoint: Vec<Waypoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depiction: Option<Depiction>,
}
