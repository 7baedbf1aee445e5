//! SWIM Scenario Codec
//!
//! Bidirectional conversion between the scenario document tree of
//! `swim-document` and the domain model of `swim-model`.
//!
//! # Architecture
//!
//! ```text
//! Codec (decode / encode)
//!   ├── leaf      location, position, datum, duration, time, intervals, track errors
//!   ├── geometry  box, cylinder, sphere, sector, geometric box, globe
//!   ├── variant   depiction, aircraft, obstacles, environment, planner,
//!   │             datalink, swim, waypoints, trajectory
//!   ├── mixin     planner capability blocks (extract / inject)
//!   └── scenario  fixed-order orchestration
//! ```
//!
//! Codecs are stateless or borrow their context, so one document can be
//! decoded on many threads at once. Every conversion returns the first
//! [`ConversionError`] it meets.
//!
//! # Example
//! ```
//! use swim_codec::prelude::*;
//!
//! let document = swim_document::Globe { model: swim_document::GlobeModel::Sphere };
//! let globe = GlobeCodec.decode(&document).unwrap();
//! assert_eq!(GlobeCodec.encode(&globe).unwrap(), document);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod codec;
pub mod error;
pub mod geometry;
pub mod leaf;
pub mod mixin;
pub mod scenario;
pub mod variant;

pub use codec::Codec;
pub use error::{ConversionError, ConversionResult};
pub use geometry::{
    BoxCodec, CylinderCodec, GeometricBoxCodec, GlobeCodec, SectorCodec, SphereCodec,
};
pub use leaf::{
    CostIntervalCodec, DatumCodec, DurationCodec, ErrorsCodec, LocationCodec, PositionCodec,
    TimeCodec, TimeIntervalCodec, TrackErrorCodec, TrackPointErrorCodec,
};
pub use scenario::{decode_scenario, encode_scenario, ScenarioCodec};
pub use variant::{
    AircraftCodec, CapabilitiesCodec, ContinuumCodec, DatalinkCodec, DepictionCodec,
    EnvironmentCodec, GridCodec, ObstacleCodec, ObstaclesCodec, PlannerCodec,
    SimulatedDatalinkCodec, SwimCodec, TrajectoryCodec, WaypointCodec, WaypointsCodec,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for scenario conversion
    pub use crate::{
        decode_scenario, encode_scenario, Codec, ConversionError, ConversionResult,
        EnvironmentCodec, GeometricBoxCodec, GlobeCodec, PlannerCodec, ScenarioCodec,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn version_is_set() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn missing_globe_is_reported() {
        let node = swim_document::Scenario {
            id: "incomplete".into(),
            threshold: 0.5,
            ..swim_document::Scenario::default()
        };
        assert_eq!(
            decode_scenario(&node).unwrap_err(),
            ConversionError::missing("scenario.globe")
        );
    }
}
