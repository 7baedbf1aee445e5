//! Waypoints and trajectories

use chrono::Duration;

use crate::depiction::Depiction;
use crate::error::{GeometryError, GeometryResult};
use crate::geom::Position;
use crate::interval::Timestamp;

/// Position along a route with planning annotations
#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
    pub position: Position,
    pub designator: String,
    pub cost: Option<f64>,
    /// Distance to go in metres
    pub dtg: Option<f64>,
    /// Time to go
    pub ttg: Option<Duration>,
    /// Estimated time over
    pub eto: Option<Timestamp>,
    /// Actual time over
    pub ato: Option<Timestamp>,
    pub depiction: Option<Depiction>,
}

impl Waypoint {
    #[must_use]
    pub fn new(position: Position, designator: impl Into<String>) -> Self {
        Self {
            position,
            designator: designator.into(),
            cost: None,
            dtg: None,
            ttg: None,
            eto: None,
            ato: None,
            depiction: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn reference_position(&self) -> Position {
        self.position
    }
}

/// Ordered sequence of waypoints
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Trajectory {
    pub waypoints: Vec<Waypoint>,
    pub depiction: Option<Depiction>,
}

impl Trajectory {
    #[must_use]
    pub fn new(waypoints: Vec<Waypoint>) -> Self {
        Self {
            waypoints,
            depiction: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Position of the first waypoint
    ///
    /// # Errors
    /// Returns [`GeometryError::NoReferencePosition`] for an empty trajectory
    pub fn reference_position(&self) -> GeometryResult<Position> {
        self.waypoints
            .first()
            .map(Waypoint::reference_position)
            .ok_or_else(|| GeometryError::NoReferencePosition("empty trajectory".to_string()))
    }

    /// Sum of the waypoint costs that are known
    #[must_use]
    pub fn cost(&self) -> f64 {
        self.waypoints.iter().filter_map(|w| w.cost).sum()
    }
}
