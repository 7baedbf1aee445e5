//! Anytime quality bounds

use swim_document as doc;
use swim_model::planner::AnytimeProperties;
use swim_model::Planner;

use super::lacks;
use crate::codec::finite;
use crate::error::{ConversionError, ConversionResult};

const CAPABILITY: &str = "anytime capability";

/// Read the anytime block of a planner
///
/// # Errors
/// Returns [`ConversionError::UnsupportedVariant`] for a planner that is
/// not anytime
pub fn extract(planner: &Planner) -> ConversionResult<doc::Anytime> {
    let properties = planner.kind.anytime().ok_or_else(|| lacks(CAPABILITY, planner))?;
    Ok(doc::Anytime {
        minimum_quality: properties.minimum_quality,
        maximum_quality: properties.maximum_quality,
        quality_improvement: properties.quality_improvement,
    })
}

/// Write an anytime block into a planner
///
/// # Errors
/// Returns [`ConversionError::UnsupportedVariant`] for a planner that is
/// not anytime and [`ConversionError::MalformedValue`] for inverted or
/// non-finite quality bounds
pub fn inject(block: &doc::Anytime, planner: &mut Planner) -> ConversionResult<()> {
    let minimum_quality = finite("anytime.minimumQuality", block.minimum_quality)?;
    let maximum_quality = finite("anytime.maximumQuality", block.maximum_quality)?;
    let quality_improvement = finite("anytime.qualityImprovement", block.quality_improvement)?;
    if minimum_quality > maximum_quality {
        return Err(ConversionError::malformed(
            "anytime",
            format!("minimum quality {minimum_quality} exceeds maximum quality {maximum_quality}"),
        ));
    }

    let tag = planner.algorithm().tag();
    let properties = planner
        .kind
        .anytime_mut()
        .ok_or_else(|| ConversionError::unsupported(CAPABILITY, tag))?;
    *properties = AnytimeProperties {
        minimum_quality,
        maximum_quality,
        quality_improvement,
    };
    Ok(())
}
