//! Obstacle and aircraft nodes

use serde::{Deserialize, Serialize};

use crate::common::{CostInterval, Depiction};
use crate::geometry::{BoxShape, Cylinder, Datum, Location, Position, Sphere};

/// Box obstacle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObstacleBox {
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
    pub cost_interval: CostInterval,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depiction: Option<Depiction>,
}

impl ObstacleBox {
    #[must_use]
    pub fn from_shape(shape: BoxShape, cost_interval: CostInterval) -> Self {
        Self {
            begin: shape.begin,
            end: shape.end,
            left_width: shape.left_width,
            right_width: shape.right_width,
            bottom: shape.bottom,
            top: shape.top,
            bottom_datum: shape.bottom_datum,
            top_datum: shape.top_datum,
            cost_interval,
            depiction: None,
        }
    }

    #[must_use]
    pub fn shape(&self) -> BoxShape {
        BoxShape {
            begin: self.begin,
            end: self.end,
            left_width: self.left_width,
            right_width: self.right_width,
            bottom: self.bottom,
            top: self.top,
            bottom_datum: self.bottom_datum,
            top_datum: self.top_datum,
        }
    }
}

/// Cylinder obstacle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObstacleCylinder {
    pub center: Location,
    pub radius: f64,
    pub bottom: f64,
    pub top: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom_datum: Option<Datum>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_datum: Option<Datum>,
    pub cost_interval: CostInterval,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depiction: Option<Depiction>,
}

impl ObstacleCylinder {
    #[must_use]
    pub fn from_shape(shape: Cylinder, cost_interval: CostInterval) -> Self {
        Self {
            center: shape.center,
            radius: shape.radius,
            bottom: shape.bottom,
            top: shape.top,
            bottom_datum: shape.bottom_datum,
            top_datum: shape.top_datum,
            cost_interval,
            depiction: None,
        }
    }

    #[must_use]
    pub fn shape(&self) -> Cylinder {
        Cylinder {
            center: self.center,
            radius: self.radius,
            bottom: self.bottom,
            top: self.top,
            bottom_datum: self.bottom_datum,
            top_datum: self.top_datum,
        }
    }
}

/// Sphere obstacle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObstacleSphere {
    pub center: Position,
    pub radius: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center_datum: Option<Datum>,
    pub cost_interval: CostInterval,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depiction: Option<Depiction>,
}

impl ObstacleSphere {
    #[must_use]
    pub fn from_shape(shape: Sphere, cost_interval: CostInterval) -> Self {
        Self {
            center: shape.center,
            radius: shape.radius,
            center_datum: shape.center_datum,
            cost_interval,
            depiction: None,
        }
    }

    #[must_use]
    pub fn shape(&self) -> Sphere {
        Sphere {
            center: self.center,
            radius: self.radius,
            center_datum: self.center_datum,
        }
    }
}

/// One obstacle; exactly one alternative is populated
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObstacleNode {
    #[serde(rename = "box", default, skip_serializing_if = "Option::is_none")]
    pub box_: Option<ObstacleBox>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cylinder: Option<ObstacleCylinder>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sphere: Option<ObstacleSphere>,
}

/// Obstacle list
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Obstacles {
    #[serde(default)]
    pub obstacle: Vec<ObstacleNode>,
}

/// Aircraft type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AircraftType {
    #[serde(rename = "A_320")]
    A320,
    #[serde(rename = "IRIS")]
    Iris,
}

/// Combat identification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CombatIdentification {
    Friend,
    Hostile,
    Neutral,
    Unknown,
}

/// Aircraft performance envelope
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capabilities {
    pub approach_rate_of_descent: f64,
    pub approach_speed: f64,
    pub cruise_climb_speed: f64,
    pub cruise_descent_speed: f64,
    pub cruise_rate_of_climb: f64,
    pub cruise_rate_of_descent: f64,
    pub cruise_speed: f64,
    /// Degrees
    pub maximum_angle_of_climb: f64,
    pub maximum_angle_of_climb_speed: f64,
    pub maximum_glide_speed: f64,
    pub maximum_rate_of_climb: f64,
    pub maximum_rate_of_climb_speed: f64,
    pub maximum_rate_of_descent: f64,
    pub maximum_rate_of_descent_speed: f64,
    pub maximum_speed: f64,
}

/// Aircraft flying the scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Aircraft {
    #[serde(rename = "type")]
    pub aircraft_type: AircraftType,
    pub center: Position,
    pub radius: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center_datum: Option<Datum>,
    pub cid: CombatIdentification,
    pub cost_interval: CostInterval,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depiction: Option<Depiction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<Capabilities>,
}

impl Aircraft {
    /// Body of the aircraft as a sphere obstacle
    #[must_use]
    pub fn obstacle_sphere(&self) -> ObstacleSphere {
        ObstacleSphere {
            center: self.center,
            radius: self.radius,
            center_datum: self.center_datum,
            cost_interval: self.cost_interval.clone(),
            depiction: self.depiction.clone(),
        }
    }
}
