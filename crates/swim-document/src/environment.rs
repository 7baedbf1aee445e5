//! Environment and globe nodes

use serde::{Deserialize, Serialize};

use crate::geometry::{GeometricBox, Location, Sector};

/// Globe model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlobeModel {
    /// WGS84 ellipsoid
    Earth,
    /// Spherical earth
    Sphere,
}

/// Globe the scenario is projected on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Globe {
    pub model: GlobeModel,
}

/// Planning grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningGrid {
    pub south_west: Location,
    pub north_east: Location,
    pub bottom: f64,
    pub top: f64,
    /// Cells along the first axis
    pub division: u32,
}

impl PlanningGrid {
    #[must_use]
    pub fn geometric_box(&self) -> GeometricBox {
        GeometricBox {
            south_west: self.south_west,
            north_east: self.north_east,
            bottom: self.bottom,
            top: self.top,
        }
    }

    #[must_use]
    pub fn sector(&self) -> Sector {
        self.geometric_box().sector()
    }
}

/// Planning continuum
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningContinuum {
    pub south_west: Location,
    pub north_east: Location,
    pub bottom: f64,
    pub top: f64,
    /// Sampling resolution in metres
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<f64>,
}

impl PlanningContinuum {
    #[must_use]
    pub fn geometric_box(&self) -> GeometricBox {
        GeometricBox {
            south_west: self.south_west,
            north_east: self.north_east,
            bottom: self.bottom,
            top: self.top,
        }
    }

    #[must_use]
    pub fn sector(&self) -> Sector {
        self.geometric_box().sector()
    }
}

/// Planning environment; exactly one alternative is populated
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<PlanningGrid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continuum: Option<PlanningContinuum>,
}
