//! Dynamic repair threshold

use swim_document as doc;
use swim_model::planner::DynamicProperties;
use swim_model::Planner;

use super::lacks;
use crate::codec::finite;
use crate::error::{ConversionError, ConversionResult};

const CAPABILITY: &str = "dynamic capability";

/// Read the dynamic block of a planner
///
/// # Errors
/// Returns [`ConversionError::UnsupportedVariant`] for a planner that is
/// not dynamic
pub fn extract(planner: &Planner) -> ConversionResult<doc::Dynamic> {
    let properties = planner.kind.dynamic().ok_or_else(|| lacks(CAPABILITY, planner))?;
    Ok(doc::Dynamic {
        significant_change: properties.significant_change,
    })
}

/// Write a dynamic block into a planner
///
/// # Errors
/// Returns [`ConversionError::UnsupportedVariant`] for a planner that is
/// not dynamic
pub fn inject(block: &doc::Dynamic, planner: &mut Planner) -> ConversionResult<()> {
    let significant_change = finite("dynamic.significantChange", block.significant_change)?;
    let tag = planner.algorithm().tag();
    let properties = planner
        .kind
        .dynamic_mut()
        .ok_or_else(|| ConversionError::unsupported(CAPABILITY, tag))?;
    *properties = DynamicProperties { significant_change };
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mixin::fixtures::planner;
    use swim_model::PlannerAlgorithm;

    #[test]
    fn dynamic_planners_accept_the_block() {
        let block = doc::Dynamic {
            significant_change: 0.25,
        };
        for algorithm in [PlannerAlgorithm::AdStar, PlannerAlgorithm::DynamicRrt] {
            let mut target = planner(algorithm);
            inject(&block, &mut target).unwrap();
            assert_eq!(extract(&target).unwrap(), block);
        }
        assert!(inject(&block, &mut planner(PlannerAlgorithm::AraStar)).is_err());
    }
}
