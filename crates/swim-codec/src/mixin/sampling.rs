//! Tree sampling parameters

use swim_document as doc;
use swim_model::planner::{Distribution, Extension, SamplingProperties, Strategy};
use swim_model::Planner;

use super::lacks;
use crate::codec::finite;
use crate::error::{ConversionError, ConversionResult};

const CAPABILITY: &str = "sampling capability";

fn distribution_from_doc(distribution: doc::Distribution) -> Distribution {
    match distribution {
        doc::Distribution::Uniform => Distribution::Uniform,
        doc::Distribution::Gaussian => Distribution::Gaussian,
    }
}

fn distribution_to_doc(distribution: Distribution) -> doc::Distribution {
    match distribution {
        Distribution::Uniform => doc::Distribution::Uniform,
        Distribution::Gaussian => doc::Distribution::Gaussian,
    }
}

fn extension_from_doc(extension: doc::Extension) -> Extension {
    match extension {
        doc::Extension::Linear => Extension::Linear,
        doc::Extension::Feasible => Extension::Feasible,
    }
}

fn extension_to_doc(extension: Extension) -> doc::Extension {
    match extension {
        Extension::Linear => doc::Extension::Linear,
        Extension::Feasible => doc::Extension::Feasible,
    }
}

fn strategy_from_doc(strategy: doc::Strategy) -> Strategy {
    match strategy {
        doc::Strategy::Extend => Strategy::Extend,
        doc::Strategy::Connect => Strategy::Connect,
    }
}

fn strategy_to_doc(strategy: Strategy) -> doc::Strategy {
    match strategy {
        Strategy::Extend => doc::Strategy::Extend,
        Strategy::Connect => doc::Strategy::Connect,
    }
}

/// Read the sampling block of a planner
///
/// # Errors
/// Returns [`ConversionError::UnsupportedVariant`] for a planner that does
/// not sample
pub fn extract(planner: &Planner) -> ConversionResult<doc::Sampling> {
    let properties = planner.kind.sampling().ok_or_else(|| lacks(CAPABILITY, planner))?;
    Ok(doc::Sampling {
        bias: properties.bias,
        distribution: distribution_to_doc(properties.distribution),
        epsilon: properties.epsilon,
        extension: extension_to_doc(properties.extension),
        goal_threshold: properties.goal_threshold,
        max_iterations: properties.max_iterations,
        strategy: strategy_to_doc(properties.strategy),
    })
}

/// Write a sampling block into a planner
///
/// # Errors
/// Returns [`ConversionError::UnsupportedVariant`] for a planner that does
/// not sample and [`ConversionError::MalformedValue`] for a goal bias
/// outside `0..=100` percent
pub fn inject(block: &doc::Sampling, planner: &mut Planner) -> ConversionResult<()> {
    if !(0..=SamplingProperties::MAX_BIAS).contains(&block.bias) {
        return Err(ConversionError::malformed(
            "sampling.bias",
            format!("bias {} outside 0..={}", block.bias, SamplingProperties::MAX_BIAS),
        ));
    }
    let sampling = SamplingProperties {
        bias: block.bias,
        distribution: distribution_from_doc(block.distribution),
        epsilon: finite("sampling.epsilon", block.epsilon)?,
        extension: extension_from_doc(block.extension),
        goal_threshold: finite("sampling.goalThreshold", block.goal_threshold)?,
        max_iterations: block.max_iterations,
        strategy: strategy_from_doc(block.strategy),
    };

    let tag = planner.algorithm().tag();
    let properties = planner
        .kind
        .sampling_mut()
        .ok_or_else(|| ConversionError::unsupported(CAPABILITY, tag))?;
    *properties = sampling;
    Ok(())
}
