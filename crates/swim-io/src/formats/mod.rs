//! Scenario document formats
//!
//! Every format reads and writes the same [`swim_document::Scenario`] tree:
//! - XML via quick-xml, rooted at `<scenario>`
//! - JSON via serde_json
//! - YAML via serde_yaml

use std::path::Path;

use swim_document::Scenario;

use crate::error::IoResult;

mod json;
mod xml;
mod yaml;

pub use json::JsonFormat;
pub use xml::XmlFormat;
pub use yaml::YamlFormat;

/// Built-in format identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatKind {
    Xml,
    Json,
    Yaml,
}

impl FormatKind {
    /// Canonical extension (without dot)
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Xml => "xml",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl std::fmt::Display for FormatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Text format for scenario documents
///
/// Implement this trait to add support for new file formats.
pub trait DocumentFormat: Send + Sync {
    /// Format identifier
    fn kind(&self) -> FormatKind;

    /// Supported file extensions (without dot)
    fn extensions(&self) -> &[&str];

    /// Parse document text; `path` only labels errors
    ///
    /// # Errors
    /// Returns [`crate::ScenarioIoError::Syntax`] if the text is not a scenario
    fn parse(&self, path: &Path, content: &str) -> IoResult<Scenario>;

    /// Render a document as text
    ///
    /// # Errors
    /// Returns [`crate::ScenarioIoError::Serialization`] if the writer fails
    fn render(&self, scenario: &Scenario, pretty: bool) -> IoResult<String>;

    /// Check if this format handles the given path
    fn can_handle(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| {
                self.extensions()
                    .iter()
                    .any(|known| known.eq_ignore_ascii_case(ext))
            })
    }
}

/// Formats keyed by file extension
pub struct FormatRegistry {
    formats: Vec<Box<dyn DocumentFormat>>,
}

impl Default for FormatRegistry {
    fn default() -> Self {
        default_formats()
    }
}

impl std::fmt::Debug for FormatRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormatRegistry")
            .field("extensions", &self.all_extensions())
            .finish()
    }
}

impl FormatRegistry {
    /// Create empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            formats: Vec::new(),
        }
    }

    /// Register a format; a later registration wins for shared extensions
    pub fn register<F: DocumentFormat + 'static>(&mut self, format: F) {
        self.formats.insert(0, Box::new(format));
    }

    /// Find format for path
    #[must_use]
    pub fn find_for_path(&self, path: &Path) -> Option<&dyn DocumentFormat> {
        self.formats
            .iter()
            .find(|format| format.can_handle(path))
            .map(|format| &**format)
    }

    /// Find format by identifier
    #[must_use]
    pub fn get(&self, kind: FormatKind) -> Option<&dyn DocumentFormat> {
        self.formats
            .iter()
            .find(|format| format.kind() == kind)
            .map(|format| &**format)
    }

    /// Get all registered extensions
    #[must_use]
    pub fn all_extensions(&self) -> Vec<&str> {
        self.formats
            .iter()
            .flat_map(|format| format.extensions())
            .copied()
            .collect()
    }
}

/// Create registry with the XML, JSON and YAML formats
#[inline]
#[must_use]
pub fn default_formats() -> FormatRegistry {
    let mut registry = FormatRegistry::new();
    registry.register(XmlFormat);
    registry.register(JsonFormat);
    registry.register(YamlFormat);
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_match_by_extension() {
        let registry = default_formats();

        let found = registry.find_for_path(Path::new("missions/alpha.xml"));
        assert_eq!(found.map(|format| format.kind()), Some(FormatKind::Xml));

        let found = registry.find_for_path(Path::new("alpha.YML"));
        assert_eq!(found.map(|format| format.kind()), Some(FormatKind::Yaml));

        assert!(registry.find_for_path(Path::new("alpha.toml")).is_none());
        assert!(registry.find_for_path(Path::new("alpha")).is_none());
    }

    #[test]
    fn registry_lookup_by_kind() {
        let registry = default_formats();
        for kind in [FormatKind::Xml, FormatKind::Json, FormatKind::Yaml] {
            let format = registry.get(kind).unwrap();
            assert!(format.extensions().contains(&kind.extension()));
        }
        assert!(FormatRegistry::new().get(FormatKind::Json).is_none());
    }

    #[test]
    fn registry_debug() {
        let debug_str = format!("{:?}", default_formats());
        assert!(debug_str.contains("FormatRegistry"));
        assert!(debug_str.contains("json"));
    }
}
