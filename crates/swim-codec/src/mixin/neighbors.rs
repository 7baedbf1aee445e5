//! Neighbour limit

use swim_document as doc;
use swim_model::planner::NeighborProperties;
use swim_model::Planner;

use super::lacks;
use crate::error::{ConversionError, ConversionResult};

const CAPABILITY: &str = "neighbour limit";

/// Read the neighbour block of a planner
///
/// # Errors
/// Returns [`ConversionError::UnsupportedVariant`] for a planner without a
/// neighbour limit
pub fn extract(planner: &Planner) -> ConversionResult<doc::Neighbors> {
    let properties = planner.kind.neighbors().ok_or_else(|| lacks(CAPABILITY, planner))?;
    Ok(doc::Neighbors {
        neighbor_limit: u64::from(properties.neighbor_limit),
    })
}

/// Write a neighbour block into a planner
///
/// # Errors
/// Returns [`ConversionError::UnsupportedVariant`] for a planner without a
/// neighbour limit and [`ConversionError::MalformedValue`] for a limit
/// beyond 32 bits
pub fn inject(block: &doc::Neighbors, planner: &mut Planner) -> ConversionResult<()> {
    let neighbor_limit = u32::try_from(block.neighbor_limit).map_err(|_| {
        ConversionError::malformed(
            "neighbors.neighborLimit",
            format!("{} exceeds {}", block.neighbor_limit, u32::MAX),
        )
    })?;
    let tag = planner.algorithm().tag();
    let properties = planner
        .kind
        .neighbors_mut()
        .ok_or_else(|| ConversionError::unsupported(CAPABILITY, tag))?;
    *properties = NeighborProperties { neighbor_limit };
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mixin::fixtures::planner;
    use swim_model::PlannerAlgorithm;

    #[test]
    fn limit_is_narrowed_to_u32() {
        let mut arrt = planner(PlannerAlgorithm::AnytimeRrt);
        inject(&doc::Neighbors { neighbor_limit: 15 }, &mut arrt).unwrap();
        assert_eq!(arrt.kind.neighbors().map(|n| n.neighbor_limit), Some(15));

        let err = inject(
            &doc::Neighbors {
                neighbor_limit: u64::from(u32::MAX) + 1,
            },
            &mut arrt,
        )
        .unwrap_err();
        assert!(matches!(err, ConversionError::MalformedValue { .. }));
    }

    #[test]
    fn basic_rrt_has_no_limit() {
        let brrt = planner(PlannerAlgorithm::BasicRrt);
        assert_eq!(
            extract(&brrt).unwrap_err(),
            ConversionError::unsupported(CAPABILITY, "brrt")
        );
    }
}
