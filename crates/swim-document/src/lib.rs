//! SWIM Scenario Document Schema
//!
//! Closed, tag-discriminated records mirroring the scenario document tree.
//! Every "one of" node is a record with one optional slot per alternative;
//! exactly one slot is expected to be populated, which the codec layer
//! enforces.
//!
//! Field names follow the camelCase schema names so the same types serve
//! XML, JSON and YAML documents.
//!
//! ```text
//! scenario
//!   ├── id, time?, threshold
//!   ├── globe (earth | sphere)
//!   ├── environment (grid | continuum)
//!   ├── obstacles? [box | cylinder | sphere]
//!   ├── aircraft?
//!   ├── waypoints?, trajectory?
//!   ├── planner (astar | thetastar | ... | oadrrt) + capability blocks
//!   ├── datalink (simulated | dronekit | mavlink)
//!   └── swim (simulated | live) + subscriptions?
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod common;
pub mod connection;
pub mod environment;
pub mod geometry;
pub mod obstacle;
pub mod planner;
pub mod planning;
pub mod scenario;

pub use common::{
    CostInterval, Depiction, Errors, Symbology, TimeInterval, TrackError, TrackPointError,
};
pub use connection::{
    Datalink, DronekitDatalink, LiveSwim, MavlinkDatalink, SimulatedDatalink, SimulatedSwim,
    Subscriptions, Swim, SwimProtocol,
};
pub use environment::{Environment, Globe, GlobeModel, PlanningContinuum, PlanningGrid};
pub use geometry::{BoxShape, Cylinder, Datum, GeometricBox, Location, Position, Sector, Sphere};
pub use obstacle::{
    Aircraft, AircraftType, Capabilities, CombatIdentification, ObstacleBox, ObstacleCylinder,
    ObstacleNode, ObstacleSphere, Obstacles,
};
pub use planner::{
    AlgorithmBlocks, Anytime, CostPolicy, Distribution, Dynamic, Extension, Heuristic,
    HeuristicAlgorithm, Neighbors, Online, Planner, QualityVariant, RiskPolicy, Sampling, Strategy,
};
pub use planning::{Trajectory, Waypoint, Waypoints};
pub use scenario::Scenario;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod integration_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn absent_optionals_are_not_serialized() {
        let node = ObstacleNode {
            sphere: Some(ObstacleSphere {
                center: Position::new(1.0, 2.0, 3.0),
                radius: 10.0,
                center_datum: None,
                cost_interval: CostInterval {
                    id: "ci".into(),
                    start: "2024-01-01T00:00:00Z".into(),
                    end: "2024-01-01T01:00:00Z".into(),
                    cost: 5.0,
                    enabled: true,
                },
                depiction: None,
            }),
            ..ObstacleNode::default()
        };

        let json = serde_json::to_value(&node).unwrap();
        assert!(json.get("box").is_none());
        assert!(json["sphere"].get("centerDatum").is_none());
        assert!(json["sphere"].get("depiction").is_none());
        assert_eq!(json["sphere"]["costInterval"]["id"], "ci");
    }

    #[test]
    fn schema_names_are_used() {
        let json = r#"{
            "type": "A_320",
            "center": { "latitude": 1.0, "longitude": 2.0, "altitude": 3.0 },
            "radius": 25.0,
            "cid": "FRIEND",
            "costInterval": {
                "id": "a320",
                "start": "2024-01-01T00:00:00Z",
                "end": "2024-01-01T00:00:00Z",
                "cost": 0.0
            }
        }"#;
        let aircraft: Aircraft = serde_json::from_str(json).unwrap();
        assert_eq!(aircraft.aircraft_type, AircraftType::A320);
        assert_eq!(aircraft.cid, CombatIdentification::Friend);
        assert!(aircraft.cost_interval.enabled);
        assert!(aircraft.capabilities.is_none());
    }

    #[test]
    fn planner_reports_populated_slots() {
        let mut planner = Planner::new(CostPolicy::Average, RiskPolicy::Safety);
        assert!(planner.populated().is_empty());

        if let Some(slot) = planner.slot_mut("hrrt") {
            *slot = Some(AlgorithmBlocks::default());
        }
        let populated = planner.populated();
        assert_eq!(populated.len(), 1);
        assert_eq!(populated[0].0, "hrrt");
        assert!(planner.slot_mut("dijkstra").is_none());
    }

    #[test]
    fn heuristic_algorithm_names() {
        let heuristic = Heuristic {
            algorithm: HeuristicAlgorithm::IkRrt,
            quality_bound: 3,
            variant: QualityVariant::Enhanced,
        };
        let json = serde_json::to_string(&heuristic).unwrap();
        assert_eq!(
            json,
            r#"{"algorithm":"IkRRT","qualityBound":3,"variant":"ENHANCED"}"#
        );
    }

    #[test]
    fn subscriptions_read_protocol_names() {
        let subscriptions = Subscriptions {
            protocol: vec![SwimProtocol::Aixm, SwimProtocol::Iwxxm],
        };
        let json = serde_json::to_string(&subscriptions).unwrap();
        assert_eq!(json, r#"{"protocol":["AIXM","IWXXM"]}"#);
        assert_eq!(serde_json::from_str::<Subscriptions>(&json).unwrap(), subscriptions);

        let empty: Subscriptions = serde_json::from_str("{}").unwrap();
        assert!(empty.protocol.is_empty());
        assert!(serde_json::from_str::<Subscriptions>(r#"{"protocol":["SMTP"]}"#).is_err());
    }
}
