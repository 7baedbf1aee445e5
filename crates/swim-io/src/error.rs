//! Error types for scenario file I/O
//!
//! Covers the two boundaries of the crate:
//! - ingress (file → document → model)
//! - egress (model → document → file)

use std::path::PathBuf;

use swim_codec::ConversionError;

/// Errors raised while reading or writing scenario files
#[derive(Debug, thiserror::Error)]
pub enum ScenarioIoError {
    /// No format registered for the file extension
    #[error("no format registered for extension: '{0}'")]
    NoFormatForExtension(String),

    /// Document text does not match the schema
    #[error("syntax error in {path}: {message}")]
    Syntax { path: PathBuf, message: String },

    /// IO error during file read or write
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Document exceeds the configured size limit
    #[error("{path} is {size} bytes, limit is {limit}")]
    TooLarge { path: PathBuf, size: u64, limit: u64 },

    /// Format writer failed
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// Document and model disagree
    #[error("conversion error: {0}")]
    Conversion(#[from] ConversionError),
}

impl ScenarioIoError {
    /// Create syntax error for path
    pub fn syntax_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Syntax {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create serialization error
    pub fn serialization(message: impl std::fmt::Display) -> Self {
        Self::Serialization(message.to_string())
    }
}

/// Result type alias for scenario I/O
pub type IoResult<T> = Result<T, ScenarioIoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_display() {
        let err = ScenarioIoError::NoFormatForExtension("toml".to_string());
        assert_eq!(err.to_string(), "no format registered for extension: 'toml'");

        let err = ScenarioIoError::syntax_error("mission.json", "expected value at line 1");
        assert_eq!(err.to_string(), "syntax error in mission.json: expected value at line 1");

        let err = ScenarioIoError::TooLarge {
            path: "big.xml".into(),
            size: 2048,
            limit: 1024,
        };
        assert_eq!(err.to_string(), "big.xml is 2048 bytes, limit is 1024");
    }

    #[test]
    fn conversion_errors_convert() {
        let err: ScenarioIoError = ConversionError::missing("scenario.globe").into();
        assert!(matches!(err, ScenarioIoError::Conversion(_)));
        assert_eq!(
            err.to_string(),
            "conversion error: missing required field: scenario.globe"
        );
    }
}
