//! Obstacles
//!
//! Airspace volumes with a time-varying cost the planner has to account for.

use crate::airspace::{BoxAirspace, CappedCylinder, SphereAirspace};
use crate::depiction::Depiction;
use crate::geom::Position;
use crate::interval::{CostInterval, Timestamp};

/// Volume of an obstacle
#[derive(Debug, Clone, PartialEq)]
pub enum ObstacleShape {
    Box(BoxAirspace),
    Cylinder(CappedCylinder),
    Sphere(SphereAirspace),
}

impl ObstacleShape {
    /// Shape name used in diagnostics
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Box(_) => "box",
            Self::Cylinder(_) => "cylinder",
            Self::Sphere(_) => "sphere",
        }
    }

    /// Position depictions of this shape are anchored at
    #[must_use]
    pub fn reference_position(&self) -> Position {
        match self {
            Self::Box(airspace) => airspace.reference_position(),
            Self::Cylinder(airspace) => airspace.reference_position(),
            Self::Sphere(airspace) => airspace.reference_position(),
        }
    }
}

/// Airspace volume with a cost interval
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub shape: ObstacleShape,
    pub cost_interval: CostInterval,
    pub depiction: Option<Depiction>,
}

impl Obstacle {
    #[must_use]
    pub fn new(shape: ObstacleShape, cost_interval: CostInterval) -> Self {
        Self {
            shape,
            cost_interval,
            depiction: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_depiction(mut self, depiction: Depiction) -> Self {
        self.depiction = Some(depiction);
        self
    }

    #[inline]
    #[must_use]
    pub fn reference_position(&self) -> Position {
        self.shape.reference_position()
    }

    /// Cost of traversing this obstacle at a time
    #[inline]
    #[must_use]
    pub fn cost_at(&self, time: &Timestamp) -> f64 {
        self.cost_interval.cost_at(time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airspace::AltitudeBounds;
    use crate::geom::{AltitudeDatum, LatLon};
    use crate::interval::TimeInterval;
    use chrono::DateTime;

    #[test]
    fn reference_position_follows_shape() {
        let time = DateTime::parse_from_rfc3339("2024-03-01T12:00:00Z").unwrap();
        let interval = CostInterval::new("ci", TimeInterval::new(time, time), 10.0);

        let cylinder = CappedCylinder::new(
            LatLon::from_degrees(5.0, 6.0),
            100.0,
            AltitudeBounds::new(50.0, 150.0),
        )
        .unwrap();
        let obstacle = Obstacle::new(ObstacleShape::Cylinder(cylinder), interval.clone());
        assert_eq!(obstacle.shape.name(), "cylinder");
        assert_eq!(obstacle.reference_position().altitude, 50.0);
        assert_eq!(obstacle.cost_at(&time), 10.0);

        let sphere = SphereAirspace::new(
            Position::from_degrees(1.0, 1.0, 300.0),
            20.0,
            AltitudeDatum::AboveGroundLevel,
        )
        .unwrap();
        let obstacle = Obstacle::new(ObstacleShape::Sphere(sphere), interval);
        assert_eq!(obstacle.reference_position(), Position::from_degrees(1.0, 1.0, 300.0));
    }
}
