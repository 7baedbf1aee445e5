//! Mission-planning scenario

use std::sync::Arc;

use crate::aircraft::Aircraft;
use crate::connection::{Datalink, SwimConnection};
use crate::environment::Environment;
use crate::globe::{Globe, Sector};
use crate::interval::Timestamp;
use crate::obstacle::Obstacle;
use crate::planner::Planner;
use crate::planning::{Trajectory, Waypoint};

/// Complete planning configuration
///
/// The planner shares the scenario's environment and aircraft.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub id: String,
    pub time: Option<Timestamp>,
    /// Cost threshold at which the mission counts as completed
    pub threshold: f64,
    pub globe: Globe,
    pub sector: Sector,
    pub environment: Arc<Environment>,
    pub obstacles: Vec<Obstacle>,
    pub aircraft: Option<Arc<Aircraft>>,
    pub waypoints: Vec<Waypoint>,
    pub trajectory: Option<Trajectory>,
    pub planner: Planner,
    pub datalink: Datalink,
    pub swim: SwimConnection,
}

impl Scenario {
    #[inline]
    #[must_use]
    pub fn has_time(&self) -> bool {
        self.time.is_some()
    }

    #[inline]
    #[must_use]
    pub fn has_obstacles(&self) -> bool {
        !self.obstacles.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn has_aircraft(&self) -> bool {
        self.aircraft.is_some()
    }

    #[inline]
    #[must_use]
    pub fn has_waypoints(&self) -> bool {
        !self.waypoints.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn has_trajectory(&self) -> bool {
        self.trajectory.is_some()
    }

    /// Whether the planner plans within this scenario's environment
    #[must_use]
    pub fn planner_is_bound(&self) -> bool {
        Arc::ptr_eq(&self.planner.environment, &self.environment)
            && match (&self.planner.aircraft, &self.aircraft) {
                (Some(planned), Some(own)) => Arc::ptr_eq(planned, own),
                (None, None) => true,
                _ => false,
            }
    }
}
