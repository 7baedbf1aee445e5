//! Capability mixins
//!
//! Each mixin moves one capability block between a planner and the
//! algorithm slot of a planner node. `extract` reads the planner's
//! properties into a block; `inject` writes a block into the planner. Both
//! report [`ConversionError::UnsupportedVariant`] for an algorithm without
//! the capability, so a mixin never applies to the wrong planner.

pub mod anytime;
pub mod dynamic;
pub mod heuristic;
pub mod neighbors;
pub mod online;
pub mod sampling;

use swim_model::Planner;

use crate::error::ConversionError;

fn lacks(capability: &'static str, planner: &Planner) -> ConversionError {
    ConversionError::unsupported(capability, planner.algorithm().tag())
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::sync::Arc;

    use swim_model::{
        Environment, Globe, LatLon, PlanningContinuum, Planner, PlannerAlgorithm, Sector,
    };

    pub(crate) fn planner(algorithm: PlannerAlgorithm) -> Planner {
        let sector =
            Sector::from_corners(LatLon::from_degrees(0.0, 0.0), LatLon::from_degrees(0.1, 0.1));
        let bounds = Globe::earth()
            .compute_bounding_box(&sector, 0.0, 100.0)
            .expect("valid bounds");
        let continuum = PlanningContinuum::new(bounds, 10.0).expect("valid continuum");
        Planner::new(algorithm, None, Arc::new(Environment::Continuum(continuum)))
    }
}
