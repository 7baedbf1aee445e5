//! Error types for scenario conversion
//!
//! Every codec fails fast with the first error it meets. Failures are
//! deterministic functions of the input and are never retried.

use swim_model::GeometryError;

/// Errors raised while decoding or encoding a scenario
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    /// Discriminant not recognised or deliberately unimplemented
    #[error("unsupported {kind}: {tag}")]
    UnsupportedVariant { kind: &'static str, tag: String },

    /// Leaf value cannot be converted
    #[error("malformed value for {field}: {reason}")]
    MalformedValue { field: String, reason: String },

    /// Required node is absent
    #[error("missing required field: {0}")]
    MissingRequiredField(String),

    /// Geodesy or shape construction failed
    #[error("geometry error: {0}")]
    Geometry(#[from] GeometryError),
}

impl ConversionError {
    /// Create unsupported variant error
    pub fn unsupported(kind: &'static str, tag: impl Into<String>) -> Self {
        Self::UnsupportedVariant {
            kind,
            tag: tag.into(),
        }
    }

    /// Create malformed value error
    pub fn malformed(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedValue {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create missing field error
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingRequiredField(field.into())
    }

    /// Short name of the error class
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::UnsupportedVariant { .. } => "unsupported_variant",
            Self::MalformedValue { .. } => "malformed_value",
            Self::MissingRequiredField(_) => "missing_required_field",
            Self::Geometry(_) => "geometry",
        }
    }
}

/// Result type alias for conversions
pub type ConversionResult<T> = Result<T, ConversionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_error_display() {
        let err = ConversionError::unsupported("datalink", "mavlink");
        assert_eq!(err.to_string(), "unsupported datalink: mavlink");

        let err =
            ConversionError::malformed("datalink.downlinkPeriod", "expected ISO 8601 duration");
        assert_eq!(
            err.to_string(),
            "malformed value for datalink.downlinkPeriod: expected ISO 8601 duration"
        );

        let err = ConversionError::missing("planner");
        assert_eq!(err.to_string(), "missing required field: planner");
        assert_eq!(err.category(), "missing_required_field");
    }

    #[test]
    fn geometry_errors_convert() {
        let err: ConversionError = GeometryError::degenerate_sector("empty").into();
        assert!(matches!(err, ConversionError::Geometry(_)));
        assert!(err.to_string().starts_with("geometry error"));
    }
}
