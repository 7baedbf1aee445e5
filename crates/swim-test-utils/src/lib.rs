//! Testing utilities for the SWIM scenario workspace
//!
//! Shared document fixtures, tracing setup and float assertions.

#![allow(missing_docs)]

use std::sync::Once;

use swim_document::{
    Aircraft, AircraftType, AlgorithmBlocks, Anytime, BoxShape, CombatIdentification, CostInterval,
    CostPolicy, Cylinder, Datalink, Datum, Depiction, Distribution, Dynamic, Environment, Errors,
    Extension, Globe, GlobeModel, Heuristic, HeuristicAlgorithm, Location, Neighbors, ObstacleBox,
    ObstacleCylinder, ObstacleNode, ObstacleSphere, Obstacles, Online, Planner, PlanningContinuum,
    PlanningGrid, Position, QualityVariant, RiskPolicy, Sampling, Scenario, SimulatedDatalink,
    SimulatedSwim, Sphere, Strategy, Subscriptions, Swim, SwimProtocol, Symbology, TrackError,
    TrackPointError, Trajectory, Waypoint, Waypoints,
};
use swim_model::{Capability, PlannerAlgorithm};

static TRACING: Once = Once::new();

/// Install a test subscriber honouring `RUST_LOG`, once per process
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Assert two floats differ by at most `tolerance`
#[track_caller]
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} within {tolerance}, got {actual}"
    );
}

pub fn cost_interval(id: &str) -> CostInterval {
    CostInterval {
        id: id.to_string(),
        start: "2024-06-01T08:00:00Z".to_string(),
        end: "2024-06-01T20:00:00Z".to_string(),
        cost: 25.0,
        enabled: true,
    }
}

pub fn symbol(symbology: Symbology, sidc: &str) -> Depiction {
    Depiction {
        symbology,
        sidc: sidc.to_string(),
        text: None,
        image: None,
    }
}

pub fn box_obstacle() -> ObstacleNode {
    let shape = BoxShape {
        begin: Location::new(0.0, 0.0),
        end: Location::new(0.0, 1.0),
        left_width: 500.0,
        right_width: 500.0,
        bottom: 0.0,
        top: 200.0,
        bottom_datum: Some(Datum::Asl),
        top_datum: Some(Datum::Asl),
    };
    ObstacleNode {
        box_: Some(ObstacleBox::from_shape(shape, cost_interval("restricted"))),
        ..ObstacleNode::default()
    }
}

pub fn cylinder_obstacle() -> ObstacleNode {
    let shape = Cylinder {
        center: Location::new(0.5, 0.5),
        radius: 1500.0,
        bottom: 0.0,
        top: 3000.0,
        bottom_datum: Some(Datum::Agl),
        top_datum: Some(Datum::Asl),
    };
    let mut cylinder = ObstacleCylinder::from_shape(shape, cost_interval("tower"));
    cylinder.depiction = Some(Depiction {
        text: Some("tower".to_string()),
        ..symbol(Symbology::TacticalPoint, "GHGPGPP--------")
    });
    ObstacleNode {
        cylinder: Some(cylinder),
        ..ObstacleNode::default()
    }
}

pub fn sphere_obstacle() -> ObstacleNode {
    let shape = Sphere {
        center: Position::new(0.8, 0.2, 1200.0),
        radius: 400.0,
        center_datum: Some(Datum::Asl),
    };
    ObstacleNode {
        sphere: Some(ObstacleSphere::from_shape(shape, cost_interval("storm"))),
        ..ObstacleNode::default()
    }
}

pub fn aircraft() -> Aircraft {
    Aircraft {
        aircraft_type: AircraftType::Iris,
        center: Position::new(0.1, 0.1, 300.0),
        radius: 5.0,
        center_datum: Some(Datum::Asl),
        cid: CombatIdentification::Friend,
        cost_interval: cost_interval("iris"),
        depiction: Some(symbol(Symbology::TacticalSymbol, "SFAPMFQ--------")),
        capabilities: None,
    }
}

pub fn waypoint(designator: &str, latitude: f64, longitude: f64) -> Waypoint {
    Waypoint {
        latitude,
        longitude,
        altitude: 300.0,
        designator: designator.to_string(),
        ..Waypoint::default()
    }
}

pub fn grid(division: u32) -> Environment {
    Environment {
        grid: Some(PlanningGrid {
            south_west: Location::new(0.0, 0.0),
            north_east: Location::new(1.0, 1.0),
            bottom: 0.0,
            top: 1000.0,
            division,
        }),
        continuum: None,
    }
}

pub fn continuum() -> Environment {
    Environment {
        grid: None,
        continuum: Some(PlanningContinuum {
            south_west: Location::new(0.0, 0.0),
            north_east: Location::new(1.0, 1.0),
            bottom: 0.0,
            top: 1000.0,
            resolution: Some(100.0),
        }),
    }
}

fn track_point_error() -> TrackPointError {
    TrackPointError {
        horizontal_error: 10.0,
        vertical_error: 5.0,
        timing_error: "PT30S".to_string(),
    }
}

pub fn errors() -> Errors {
    Errors {
        max_track_error: Some(TrackError {
            cross_track_error: 50.0,
            altitude_error: 20.0,
            opening_bearing_error: 15.0,
            closing_bearing_error: 10.0,
            timing_error: "PT1M".to_string(),
        }),
        max_take_off_error: Some(track_point_error()),
        max_landing_error: Some(track_point_error()),
    }
}

/// Blocks for exactly the capabilities of an algorithm
pub fn blocks_for(algorithm: PlannerAlgorithm) -> AlgorithmBlocks {
    let has = |capability| algorithm.has_capability(capability);
    AlgorithmBlocks {
        anytime: has(Capability::Anytime).then_some(Anytime {
            minimum_quality: 0.2,
            maximum_quality: 0.9,
            quality_improvement: 0.05,
        }),
        dynamic: has(Capability::Dynamic).then_some(Dynamic {
            significant_change: 0.3,
        }),
        online: has(Capability::Online).then(|| Online {
            min_deliberation: Some("PT15S".to_string()),
            max_deliberation: Some("PT2M".to_string()),
            errors: Some(errors()),
        }),
        sampling: has(Capability::Sampling).then_some(Sampling {
            bias: 5,
            distribution: Distribution::Gaussian,
            epsilon: 100.0,
            extension: Extension::Feasible,
            goal_threshold: 10.0,
            max_iterations: 2500,
            strategy: Strategy::Connect,
        }),
        heuristic: has(Capability::Heuristic).then_some(Heuristic {
            algorithm: HeuristicAlgorithm::BkRrt,
            quality_bound: 2,
            variant: QualityVariant::Enhanced,
        }),
        neighbors: has(Capability::NeighborLimited).then_some(Neighbors { neighbor_limit: 15 }),
    }
}

/// Planner node populating the slot of `algorithm`
pub fn planner(algorithm: PlannerAlgorithm) -> Planner {
    let mut planner = Planner::new(CostPolicy::Average, RiskPolicy::Safety);
    if let Some(slot) = planner.slot_mut(algorithm.tag()) {
        *slot = Some(blocks_for(algorithm));
    }
    planner
}

pub fn datalink() -> Datalink {
    Datalink {
        downlink_period: "PT1S".to_string(),
        simulated: Some(SimulatedDatalink {
            error_probability: Some(0.01),
            errors: Some(errors()),
            uplink_delay: "PT0.5S".to_string(),
        }),
        ..Datalink::default()
    }
}

pub fn swim() -> Swim {
    Swim {
        simulated: Some(SimulatedSwim {
            resource_directory: "swim/resources".to_string(),
            update_probability: 0.5,
            update_quantity: 3,
        }),
        live: None,
        subscriptions: Some(Subscriptions {
            protocol: vec![SwimProtocol::Aixm, SwimProtocol::Iwxxm],
        }),
    }
}

/// Smallest valid scenario: required nodes only
pub fn minimal_scenario() -> Scenario {
    Scenario {
        id: "minimal".to_string(),
        threshold: 0.0,
        globe: Some(Globe {
            model: GlobeModel::Earth,
        }),
        environment: Some(continuum()),
        planner: Some(planner(PlannerAlgorithm::ForwardAStar)),
        datalink: Some(datalink()),
        swim: Some(swim()),
        ..Scenario::default()
    }
}

/// Scenario populating every optional node
pub fn full_scenario() -> Scenario {
    Scenario {
        id: "full".to_string(),
        time: Some("2024-06-01T10:00:00Z".to_string()),
        threshold: 0.75,
        globe: Some(Globe {
            model: GlobeModel::Earth,
        }),
        environment: Some(grid(10)),
        obstacles: Some(Obstacles {
            obstacle: vec![box_obstacle(), cylinder_obstacle(), sphere_obstacle()],
        }),
        aircraft: Some(aircraft()),
        waypoints: Some(Waypoints {
            waypoint: vec![waypoint("ORIGIN", 0.1, 0.1), waypoint("DEST", 0.9, 0.9)],
        }),
        trajectory: Some(Trajectory {
            waypoint: vec![waypoint("ORIGIN", 0.1, 0.1), waypoint("DEST", 0.9, 0.9)],
            depiction: Some(symbol(Symbology::TacticalPoint, "GFGPGPRP-------")),
        }),
        planner: Some(planner(PlannerAlgorithm::HeuristicRrt)),
        datalink: Some(datalink()),
        swim: Some(swim()),
    }
}
