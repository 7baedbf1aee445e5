//! SWIM Scenario Domain Model
//!
//! Typed runtime model of an aerial mission-planning scenario: globe
//! geodesy, airspace shapes, obstacles, aircraft, planning environments,
//! planners with their capability properties, datalinks and SWIM
//! connections.
//!
//! # Architecture
//!
//! ```text
//! Scenario
//!   ├── Globe ── Sector ── Environment (grid | continuum)
//!   ├── Obstacles (box | cylinder | sphere) + cost intervals + depictions
//!   ├── Aircraft (A320 | Iris) + capabilities
//!   ├── Waypoints, Trajectory
//!   ├── Planner ──► Arc<Environment>, Arc<Aircraft>
//!   ├── Datalink (simulated | dronekit | mavlink)
//!   └── SwimConnection (simulated | live) + subscriptions
//! ```
//!
//! Values are constructed once and not mutated afterwards; the planner
//! shares environment and aircraft through [`std::sync::Arc`].

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod aircraft;
pub mod airspace;
pub mod connection;
pub mod depiction;
pub mod environment;
pub mod error;
pub mod geom;
pub mod globe;
pub mod interval;
pub mod obstacle;
pub mod planner;
pub mod planning;
pub mod scenario;
pub mod track;

pub use aircraft::{Aircraft, AircraftType, Capabilities, CombatIdentification};
pub use airspace::{AltitudeBounds, BoxAirspace, CappedCylinder, SphereAirspace};
pub use connection::{
    Datalink, DatalinkKind, SimulatedDatalink, SwimConnection, SwimConnectionKind, SwimProtocol,
};
pub use depiction::{
    Depiction, DepictionAnnotation, MilStd2525SymbolFactory, SymbolFactory, SymbolIdentifier,
    Symbology, TacticalDepiction,
};
pub use environment::{Environment, PlanningContinuum, PlanningGrid};
pub use error::{GeometryError, GeometryResult, SymbolError};
pub use geom::{AltitudeDatum, Angle, LatLon, Position, Vec3};
pub use globe::{GeodeticExtent, Globe, GlobeKind, OrientedBox, Sector};
pub use interval::{CostInterval, TimeInterval, Timestamp};
pub use obstacle::{Obstacle, ObstacleShape};
pub use planner::{Capability, CostPolicy, Planner, PlannerAlgorithm, PlannerKind, RiskPolicy};
pub use planning::{Trajectory, Waypoint};
pub use scenario::Scenario;
pub use track::{TrackError, TrackErrors, TrackPointError};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the scenario model
    pub use crate::planner::{
        AnytimeProperties, DynamicProperties, HeuristicProperties, NeighborProperties,
        OnlineProperties, SamplingProperties,
    };
    pub use crate::{
        Aircraft, AltitudeDatum, Angle, Capability, Datalink, Environment, Globe, LatLon,
        Obstacle, Planner, PlannerAlgorithm, PlannerKind, Position, Scenario, Sector,
        SwimConnection,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn version_is_set() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn grid_environment_from_sector() {
        let globe = Globe::earth();
        let sector = Sector::from_corners(
            LatLon::from_degrees(40.0, -75.0),
            LatLon::from_degrees(40.1, -74.9),
        );
        let bounds = globe.compute_bounding_box(&sector, 0.0, 500.0).unwrap();
        let grid = PlanningGrid::new(bounds, 10).unwrap();

        let environment = Arc::new(Environment::Grid(grid));
        let planner = Planner::new(PlannerAlgorithm::ThetaStar, None, Arc::clone(&environment));

        assert!(Arc::ptr_eq(&planner.environment, &environment));
        assert!(environment.normalizer() > 10_000.0);
        assert!(!planner.has_capability(Capability::Anytime));
    }
}
