//! Scenario root node

use serde::{Deserialize, Serialize};

use crate::connection::{Datalink, Swim};
use crate::environment::{Environment, Globe};
use crate::obstacle::{Aircraft, Obstacles};
use crate::planner::Planner;
use crate::planning::{Trajectory, Waypoints};

/// Scenario document root
///
/// `globe`, `environment`, `planner`, `datalink` and `swim` are required by
/// the schema; they are optional here so an incomplete document still
/// parses and is rejected by the codec with the missing field named.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    pub threshold: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub globe: Option<Globe>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<Environment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obstacles: Option<Obstacles>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aircraft: Option<Aircraft>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waypoints: Option<Waypoints>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trajectory: Option<Trajectory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planner: Option<Planner>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datalink: Option<Datalink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swim: Option<Swim>,
}
