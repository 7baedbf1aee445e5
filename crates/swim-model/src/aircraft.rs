//! Aircraft
//!
//! An aircraft is a sphere-shaped airspace with a combat identification,
//! a cost interval and performance capabilities.

use std::fmt;

use crate::airspace::SphereAirspace;
use crate::depiction::Depiction;
use crate::geom::{Angle, Position};
use crate::interval::CostInterval;

/// Supported aircraft types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AircraftType {
    /// Airbus A320 airliner
    A320,
    /// 3DR Iris quadcopter
    Iris,
}

impl fmt::Display for AircraftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A320 => write!(f, "A320"),
            Self::Iris => write!(f, "Iris"),
        }
    }
}

/// Combat identification of an aircraft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CombatIdentification {
    Friend,
    Hostile,
    Neutral,
    #[default]
    Unknown,
}

/// Performance envelope of an aircraft
///
/// Speeds in metres per second, rates in metres per second of vertical
/// speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Capabilities {
    pub approach_rate_of_descent: f64,
    pub approach_speed: f64,
    pub cruise_climb_speed: f64,
    pub cruise_descent_speed: f64,
    pub cruise_rate_of_climb: f64,
    pub cruise_rate_of_descent: f64,
    pub cruise_speed: f64,
    pub maximum_angle_of_climb: Angle,
    pub maximum_angle_of_climb_speed: f64,
    pub maximum_glide_speed: f64,
    pub maximum_rate_of_climb: f64,
    pub maximum_rate_of_climb_speed: f64,
    pub maximum_rate_of_descent: f64,
    pub maximum_rate_of_descent_speed: f64,
    pub maximum_speed: f64,
}

impl Capabilities {
    /// Nominal A320 performance
    #[must_use]
    pub fn a320() -> Self {
        Self {
            approach_rate_of_descent: 3.8,
            approach_speed: 72.0,
            cruise_climb_speed: 149.0,
            cruise_descent_speed: 149.0,
            cruise_rate_of_climb: 5.1,
            cruise_rate_of_descent: 5.1,
            cruise_speed: 230.0,
            maximum_angle_of_climb: Angle::from_degrees(10.0),
            maximum_angle_of_climb_speed: 82.0,
            maximum_glide_speed: 108.0,
            maximum_rate_of_climb: 12.7,
            maximum_rate_of_climb_speed: 129.0,
            maximum_rate_of_descent: 17.8,
            maximum_rate_of_descent_speed: 154.0,
            maximum_speed: 257.0,
        }
    }

    /// Nominal Iris performance
    #[must_use]
    pub fn iris() -> Self {
        Self {
            approach_rate_of_descent: 1.0,
            approach_speed: 5.0,
            cruise_climb_speed: 8.0,
            cruise_descent_speed: 8.0,
            cruise_rate_of_climb: 2.0,
            cruise_rate_of_descent: 1.5,
            cruise_speed: 10.0,
            maximum_angle_of_climb: Angle::from_degrees(90.0),
            maximum_angle_of_climb_speed: 5.0,
            maximum_glide_speed: 10.0,
            maximum_rate_of_climb: 5.0,
            maximum_rate_of_climb_speed: 5.0,
            maximum_rate_of_descent: 3.0,
            maximum_rate_of_descent_speed: 5.0,
            maximum_speed: 18.0,
        }
    }

    /// Nominal performance of an aircraft type
    #[must_use]
    pub fn nominal(kind: AircraftType) -> Self {
        match kind {
            AircraftType::A320 => Self::a320(),
            AircraftType::Iris => Self::iris(),
        }
    }
}

/// Aircraft flying the scenario
#[derive(Debug, Clone, PartialEq)]
pub struct Aircraft {
    pub kind: AircraftType,
    pub body: SphereAirspace,
    pub cid: CombatIdentification,
    pub cost_interval: CostInterval,
    pub depiction: Option<Depiction>,
    /// Explicit capabilities; `None` uses the nominal ones of the type
    pub capabilities: Option<Capabilities>,
}

impl Aircraft {
    #[must_use]
    pub fn new(
        kind: AircraftType,
        body: SphereAirspace,
        cid: CombatIdentification,
        cost_interval: CostInterval,
    ) -> Self {
        Self {
            kind,
            body,
            cid,
            cost_interval,
            depiction: None,
            capabilities: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = Some(capabilities);
        self
    }

    #[inline]
    #[must_use]
    pub fn with_depiction(mut self, depiction: Depiction) -> Self {
        self.depiction = Some(depiction);
        self
    }

    /// Capabilities in effect
    #[must_use]
    pub fn effective_capabilities(&self) -> Capabilities {
        self.capabilities
            .unwrap_or_else(|| Capabilities::nominal(self.kind))
    }

    #[inline]
    #[must_use]
    pub fn position(&self) -> Position {
        self.body.center()
    }

    #[inline]
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.body.radius()
    }

    #[inline]
    #[must_use]
    pub fn reference_position(&self) -> Position {
        self.body.reference_position()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::AltitudeDatum;
    use crate::interval::TimeInterval;
    use chrono::DateTime;

    fn iris() -> Aircraft {
        let time = DateTime::parse_from_rfc3339("2024-03-01T12:00:00Z").unwrap();
        Aircraft::new(
            AircraftType::Iris,
            SphereAirspace::new(
                Position::from_degrees(1.0, 2.0, 50.0),
                5.0,
                AltitudeDatum::default(),
            )
            .unwrap(),
            CombatIdentification::Friend,
            CostInterval::new("iris", TimeInterval::new(time, time), 0.0),
        )
    }

    #[test]
    fn nominal_capabilities_apply_without_explicit_ones() {
        let aircraft = iris();
        assert_eq!(aircraft.effective_capabilities(), Capabilities::iris());

        let mut custom = Capabilities::iris();
        custom.cruise_speed = 12.5;
        let aircraft = aircraft.with_capabilities(custom);
        assert_eq!(aircraft.effective_capabilities().cruise_speed, 12.5);
    }

    #[test]
    fn aircraft_reference_is_body_centre() {
        let aircraft = iris();
        assert_eq!(aircraft.reference_position(), Position::from_degrees(1.0, 2.0, 50.0));
        assert_eq!(aircraft.radius(), 5.0);
        assert_eq!(aircraft.kind.to_string(), "Iris");
    }
}
