//! Heuristic sampling guidance

use swim_document as doc;
use swim_model::planner::{HeuristicAlgorithm, HeuristicProperties, QualityVariant};
use swim_model::Planner;

use super::lacks;
use crate::error::{ConversionError, ConversionResult};

const CAPABILITY: &str = "heuristic capability";

fn algorithm_from_doc(algorithm: doc::HeuristicAlgorithm) -> HeuristicAlgorithm {
    match algorithm {
        doc::HeuristicAlgorithm::BkRrt => HeuristicAlgorithm::BkRrt,
        doc::HeuristicAlgorithm::IkRrt => HeuristicAlgorithm::IkRrt,
    }
}

fn algorithm_to_doc(algorithm: HeuristicAlgorithm) -> doc::HeuristicAlgorithm {
    match algorithm {
        HeuristicAlgorithm::BkRrt => doc::HeuristicAlgorithm::BkRrt,
        HeuristicAlgorithm::IkRrt => doc::HeuristicAlgorithm::IkRrt,
    }
}

fn variant_from_doc(variant: doc::QualityVariant) -> QualityVariant {
    match variant {
        doc::QualityVariant::Enhanced => QualityVariant::Enhanced,
        doc::QualityVariant::Original => QualityVariant::Original,
    }
}

fn variant_to_doc(variant: QualityVariant) -> doc::QualityVariant {
    match variant {
        QualityVariant::Enhanced => doc::QualityVariant::Enhanced,
        QualityVariant::Original => doc::QualityVariant::Original,
    }
}

/// Read the heuristic block of a planner
///
/// # Errors
/// Returns [`ConversionError::UnsupportedVariant`] for a planner without
/// heuristic guidance
pub fn extract(planner: &Planner) -> ConversionResult<doc::Heuristic> {
    let properties = planner.kind.heuristic().ok_or_else(|| lacks(CAPABILITY, planner))?;
    Ok(doc::Heuristic {
        algorithm: algorithm_to_doc(properties.algorithm),
        quality_bound: properties.quality_bound,
        variant: variant_to_doc(properties.variant),
    })
}

/// Write a heuristic block into a planner
///
/// # Errors
/// Returns [`ConversionError::UnsupportedVariant`] for a planner without
/// heuristic guidance
pub fn inject(block: &doc::Heuristic, planner: &mut Planner) -> ConversionResult<()> {
    let tag = planner.algorithm().tag();
    let properties = planner
        .kind
        .heuristic_mut()
        .ok_or_else(|| ConversionError::unsupported(CAPABILITY, tag))?;
    *properties = HeuristicProperties {
        algorithm: algorithm_from_doc(block.algorithm),
        quality_bound: block.quality_bound,
        variant: variant_from_doc(block.variant),
    };
    Ok(())
}
