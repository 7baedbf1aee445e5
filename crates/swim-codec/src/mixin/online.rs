//! Online deliberation and error tolerances

use swim_document as doc;
use swim_model::planner::OnlineProperties;
use swim_model::Planner;

use super::lacks;
use crate::codec::Codec;
use crate::error::{ConversionError, ConversionResult};
use crate::leaf::{DurationCodec, ErrorsCodec};

const CAPABILITY: &str = "online capability";

/// Read the online block of a planner; unset bounds stay absent
///
/// # Errors
/// Returns [`ConversionError::UnsupportedVariant`] for a planner that is
/// not online
pub fn extract(planner: &Planner) -> ConversionResult<doc::Online> {
    let properties = planner.kind.online().ok_or_else(|| lacks(CAPABILITY, planner))?;
    Ok(doc::Online {
        min_deliberation: properties.minimum_deliberation.as_ref().map(|d| DurationCodec.format(d)),
        max_deliberation: properties.maximum_deliberation.as_ref().map(|d| DurationCodec.format(d)),
        errors: properties.errors.as_ref().map(|e| ErrorsCodec.encode(e)).transpose()?,
    })
}

/// Write an online block into a planner
///
/// # Errors
/// Returns [`ConversionError::UnsupportedVariant`] for a planner that is
/// not online and [`ConversionError::MalformedValue`] for unreadable or
/// inverted deliberation bounds
pub fn inject(block: &doc::Online, planner: &mut Planner) -> ConversionResult<()> {
    let minimum_deliberation = block
        .min_deliberation
        .as_deref()
        .map(|d| DurationCodec.parse("online.minDeliberation", d))
        .transpose()?;
    let maximum_deliberation = block
        .max_deliberation
        .as_deref()
        .map(|d| DurationCodec.parse("online.maxDeliberation", d))
        .transpose()?;
    if let (Some(minimum), Some(maximum)) = (minimum_deliberation, maximum_deliberation) {
        if minimum > maximum {
            return Err(ConversionError::malformed(
                "online",
                "minimum deliberation exceeds maximum deliberation",
            ));
        }
    }
    let errors = block.errors.as_ref().map(|e| ErrorsCodec.decode(e)).transpose()?;

    let tag = planner.algorithm().tag();
    let properties = planner
        .kind
        .online_mut()
        .ok_or_else(|| ConversionError::unsupported(CAPABILITY, tag))?;
    *properties = OnlineProperties {
        minimum_deliberation,
        maximum_deliberation,
        errors,
    };
    Ok(())
}
