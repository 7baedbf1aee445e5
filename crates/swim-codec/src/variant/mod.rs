//! Codecs for the tagged families of the scenario tree

mod aircraft;
mod connection;
mod depiction;
mod environment;
mod obstacle;
mod planner;
mod planning;

pub use aircraft::{AircraftCodec, CapabilitiesCodec};
pub use connection::{DatalinkCodec, SimulatedDatalinkCodec, SwimCodec};
pub use depiction::DepictionCodec;
pub use environment::{ContinuumCodec, EnvironmentCodec, GridCodec};
pub use obstacle::{ObstacleCodec, ObstaclesCodec};
pub use planner::PlannerCodec;
pub use planning::{TrajectoryCodec, WaypointCodec, WaypointsCodec};
