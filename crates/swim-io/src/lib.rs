//! SWIM Scenario I/O
//!
//! Reads and writes scenario files in XML, JSON and YAML. Documents pass
//! through the [`swim_codec`] layer on the way in and out, so callers only
//! ever see the domain model.
//!
//! ```text
//! file ──(DocumentFormat::parse)──> swim_document::Scenario
//!      ──(decode_scenario)────────> swim_model::Scenario
//!
//! swim_model::Scenario ──(encode_scenario)───────> swim_document::Scenario
//!                      ──(DocumentFormat::render)─> file
//! ```
//!
//! The format is chosen by file extension through a [`FormatRegistry`].
//!
//! # Example
//! ```
//! use std::path::Path;
//! use swim_io::{DocumentFormat, FormatKind, IoConfig, ScenarioFiles};
//!
//! let files = ScenarioFiles::new(IoConfig::new().with_default_format(FormatKind::Yaml));
//! let format = files.format_for(Path::new("mission.json")).unwrap();
//! assert_eq!(format.kind(), FormatKind::Json);
//! ```

#![warn(unreachable_pub)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod files;
pub mod formats;

pub use config::IoConfig;
pub use error::{IoResult, ScenarioIoError};
pub use files::{ScenarioFiles, ScenarioReader, ScenarioWriter};
pub use formats::{
    default_formats, DocumentFormat, FormatKind, FormatRegistry, JsonFormat, XmlFormat, YamlFormat,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        DocumentFormat, FormatKind, IoConfig, IoResult, ScenarioFiles, ScenarioIoError,
        ScenarioReader, ScenarioWriter,
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
    fn default_registry_covers_all_formats() {
        let registry = default_formats();
        let extensions = registry.all_extensions();
        for extension in ["xml", "json", "yaml", "yml"] {
            assert!(extensions.contains(&extension), "{extension} not registered");
        }
    }
}
