//! Scenario reader and writer over the file system

use std::fs;
use std::path::Path;

use swim_codec::{decode_scenario, encode_scenario};
use swim_document as doc;
use swim_model::Scenario;
use tracing::{debug, info};

use crate::config::IoConfig;
use crate::error::{IoResult, ScenarioIoError};
use crate::formats::{default_formats, DocumentFormat, FormatRegistry};

/// Source of decoded scenarios
pub trait ScenarioReader {
    /// Read and decode the scenario at `path`
    ///
    /// # Errors
    /// Returns [`ScenarioIoError`] on I/O, syntax or conversion failure
    fn read_scenario(&self, path: &Path) -> IoResult<Scenario>;
}

/// Sink for encoded scenarios
pub trait ScenarioWriter {
    /// Encode and write `scenario` to `path`
    ///
    /// # Errors
    /// Returns [`ScenarioIoError`] on conversion, serialization or I/O failure
    fn write_scenario(&self, path: &Path, scenario: &Scenario) -> IoResult<()>;
}

/// File-backed scenario reader and writer
///
/// The format is picked from the file extension. Paths without an extension
/// use the configured default format; unknown extensions are rejected.
#[derive(Debug, Default)]
pub struct ScenarioFiles {
    config: IoConfig,
    registry: FormatRegistry,
}

impl ScenarioFiles {
    /// Create with the built-in formats
    #[must_use]
    pub fn new(config: IoConfig) -> Self {
        Self::with_registry(config, default_formats())
    }

    /// Create with a custom format registry
    #[must_use]
    pub fn with_registry(config: IoConfig, registry: FormatRegistry) -> Self {
        Self { config, registry }
    }

    /// Get configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &IoConfig {
        &self.config
    }

    /// Resolve the format for `path`
    ///
    /// # Errors
    /// Returns [`ScenarioIoError::NoFormatForExtension`] if nothing matches
    pub fn format_for(&self, path: &Path) -> IoResult<&dyn DocumentFormat> {
        let Some(extension) = path.extension() else {
            let kind = self.config.default_format;
            return self
                .registry
                .get(kind)
                .ok_or_else(|| ScenarioIoError::NoFormatForExtension(kind.to_string()));
        };
        self.registry.find_for_path(path).ok_or_else(|| {
            ScenarioIoError::NoFormatForExtension(extension.to_string_lossy().into_owned())
        })
    }

    /// Read the document tree at `path` without decoding it
    ///
    /// # Errors
    /// Returns [`ScenarioIoError`] on I/O or syntax failure, or if the file
    /// exceeds [`IoConfig::max_document_size`]
    pub fn read_document(&self, path: &Path) -> IoResult<doc::Scenario> {
        let format = self.format_for(path)?;

        let size = fs::metadata(path)
            .map_err(|e| ScenarioIoError::io_error(path, e))?
            .len();
        let limit = self.config.max_document_size;
        if size > limit {
            return Err(ScenarioIoError::TooLarge {
                path: path.to_path_buf(),
                size,
                limit,
            });
        }

        let content = fs::read_to_string(path).map_err(|e| ScenarioIoError::io_error(path, e))?;
        debug!(path = %path.display(), format = %format.kind(), size, "parsing scenario document");
        format.parse(path, &content)
    }

    /// Write a document tree to `path`
    ///
    /// # Errors
    /// Returns [`ScenarioIoError`] on serialization or I/O failure
    pub fn write_document(&self, path: &Path, document: &doc::Scenario) -> IoResult<()> {
        let format = self.format_for(path)?;
        let text = format.render(document, self.config.pretty)?;
        debug!(
            path = %path.display(),
            format = %format.kind(),
            size = text.len(),
            "writing scenario document"
        );
        fs::write(path, text).map_err(|e| ScenarioIoError::io_error(path, e))
    }
}

impl ScenarioReader for ScenarioFiles {
    fn read_scenario(&self, path: &Path) -> IoResult<Scenario> {
        let document = self.read_document(path)?;
        let scenario = decode_scenario(&document)?;
        info!(path = %path.display(), id = %scenario.id, "scenario read");
        Ok(scenario)
    }
}

impl ScenarioWriter for ScenarioFiles {
    fn write_scenario(&self, path: &Path, scenario: &Scenario) -> IoResult<()> {
        let document = encode_scenario(scenario)?;
        self.write_document(path, &document)?;
        info!(path = %path.display(), id = %scenario.id, "scenario written");
        Ok(())
    }
}
