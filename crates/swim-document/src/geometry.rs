//! Geodetic and shape nodes

use serde::{Deserialize, Serialize};

/// Geodetic location in degrees
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Geodetic position in degrees and metres
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
}

impl Position {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude,
        }
    }
}

/// Altitude reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Datum {
    /// Above mean sea level
    #[default]
    #[serde(rename = "ASL")]
    Asl,
    /// Above ground level
    #[serde(rename = "AGL")]
    Agl,
    /// Above ground reference
    #[serde(rename = "AGR")]
    Agr,
}

/// Geodetic rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sector {
    pub south_west: Location,
    pub north_east: Location,
}

/// Sector extruded between two altitudes
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeometricBox {
    pub south_west: Location,
    pub north_east: Location,
    pub bottom: f64,
    pub top: f64,
}

impl GeometricBox {
    #[must_use]
    pub fn sector(&self) -> Sector {
        Sector {
            south_west: self.south_west,
            north_east: self.north_east,
        }
    }
}

/// Box airspace along a centre line
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxShape {
    pub begin: Location,
    pub end: Location,
    pub left_width: f64,
    pub right_width: f64,
    pub bottom: f64,
    pub top: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom_datum: Option<Datum>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_datum: Option<Datum>,
}

/// Capped cylinder airspace
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cylinder {
    pub center: Location,
    pub radius: f64,
    pub bottom: f64,
    pub top: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom_datum: Option<Datum>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_datum: Option<Datum>,
}

/// Sphere airspace
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sphere {
    pub center: Position,
    pub radius: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center_datum: Option<Datum>,
}
