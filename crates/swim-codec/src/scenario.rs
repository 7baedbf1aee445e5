//! Scenario codec
//!
//! Decoding walks the document in a fixed order so every codec finds the
//! context it depends on: the globe before any geometry, the environment
//! before obstacles, aircraft and environment before the planner. Encoding
//! follows the same order and writes optional nodes only when the scenario
//! has them.

use std::sync::Arc;

use swim_document as doc;
use swim_model::Scenario;

use crate::codec::{exactly_one, finite, required, Codec};
use crate::error::ConversionResult;
use crate::geometry::{GlobeCodec, SectorCodec};
use crate::leaf::TimeCodec;
use crate::variant::{
    AircraftCodec, DatalinkCodec, EnvironmentCodec, ObstaclesCodec, PlannerCodec, SwimCodec,
    TrajectoryCodec, WaypointsCodec,
};

/// Scenario document to scenario
#[derive(Debug, Clone, Copy, Default)]
pub struct ScenarioCodec;

impl Codec for ScenarioCodec {
    type External = doc::Scenario;
    type Internal = Scenario;

    fn decode(&self, node: &doc::Scenario) -> ConversionResult<Scenario> {
        decode_scenario(node)
    }

    fn encode(&self, scenario: &Scenario) -> ConversionResult<doc::Scenario> {
        encode_scenario(scenario)
    }
}

/// Decode a scenario document
///
/// # Errors
/// Returns the first [`crate::ConversionError`] met in decode order
pub fn decode_scenario(node: &doc::Scenario) -> ConversionResult<Scenario> {
    tracing::debug!(id = %node.id, "decoding scenario");

    let time = node
        .time
        .as_deref()
        .map(|time| TimeCodec.parse("scenario.time", time))
        .transpose()?;
    let threshold = finite("scenario.threshold", node.threshold)?;
    let globe = GlobeCodec.decode(required(node.globe.as_ref(), "scenario.globe")?)?;

    let environment_node = required(node.environment.as_ref(), "scenario.environment")?;
    let sector_node = exactly_one(
        "environment",
        [
            ("grid", environment_node.grid.map(|grid| grid.sector())),
            ("continuum", environment_node.continuum.map(|continuum| continuum.sector())),
        ],
    )?;
    let sector = SectorCodec.decode(&sector_node)?;
    let environment = Arc::new(EnvironmentCodec::new(&globe).decode(environment_node)?);

    let obstacles = node
        .obstacles
        .as_ref()
        .map(|obstacles| ObstaclesCodec.decode(obstacles))
        .transpose()?
        .unwrap_or_default();
    let aircraft = node
        .aircraft
        .as_ref()
        .map(|aircraft| AircraftCodec.decode(aircraft).map(Arc::new))
        .transpose()?;
    let waypoints = node
        .waypoints
        .as_ref()
        .map(|waypoints| WaypointsCodec.decode(waypoints))
        .transpose()?
        .unwrap_or_default();
    let trajectory = node
        .trajectory
        .as_ref()
        .map(|trajectory| TrajectoryCodec.decode(trajectory))
        .transpose()?;

    let planner = PlannerCodec::new(aircraft.as_ref(), &environment)
        .decode(required(node.planner.as_ref(), "scenario.planner")?)?;
    let datalink = DatalinkCodec.decode(required(node.datalink.as_ref(), "scenario.datalink")?)?;
    let swim = SwimCodec.decode(required(node.swim.as_ref(), "scenario.swim")?)?;

    tracing::debug!(
        id = %node.id,
        environment = environment.name(),
        obstacles = obstacles.len(),
        waypoints = waypoints.len(),
        planner = %planner.algorithm(),
        "decoded scenario"
    );

    Ok(Scenario {
        id: node.id.clone(),
        time,
        threshold,
        globe,
        sector,
        environment,
        obstacles,
        aircraft,
        waypoints,
        trajectory,
        planner,
        datalink,
        swim,
    })
}

/// Encode a scenario into a document
///
/// # Errors
/// Returns the first [`crate::ConversionError`] met in encode order
pub fn encode_scenario(scenario: &Scenario) -> ConversionResult<doc::Scenario> {
    tracing::debug!(id = %scenario.id, "encoding scenario");

    let node = doc::Scenario {
        id: scenario.id.clone(),
        time: scenario
            .time
            .as_ref()
            .filter(|_| scenario.has_time())
            .map(|time| TimeCodec.format(time)),
        threshold: scenario.threshold,
        globe: Some(GlobeCodec.encode(&scenario.globe)?),
        environment: Some(EnvironmentCodec::new(&scenario.globe).encode(&scenario.environment)?),
        obstacles: if scenario.has_obstacles() {
            Some(ObstaclesCodec.encode(&scenario.obstacles)?)
        } else {
            None
        },
        aircraft: scenario
            .aircraft
            .as_deref()
            .filter(|_| scenario.has_aircraft())
            .map(|aircraft| AircraftCodec.encode(aircraft))
            .transpose()?,
        waypoints: if scenario.has_waypoints() {
            Some(WaypointsCodec.encode(&scenario.waypoints)?)
        } else {
            None
        },
        trajectory: scenario
            .trajectory
            .as_ref()
            .filter(|_| scenario.has_trajectory())
            .map(|trajectory| TrajectoryCodec.encode(trajectory))
            .transpose()?,
        planner: Some(
            PlannerCodec::new(scenario.aircraft.as_ref(), &scenario.environment)
                .encode(&scenario.planner)?,
        ),
        datalink: Some(DatalinkCodec.encode(&scenario.datalink)?),
        swim: Some(SwimCodec.encode(&scenario.swim)?),
    };

    tracing::debug!(id = %scenario.id, "encoded scenario");
    Ok(node)
}
