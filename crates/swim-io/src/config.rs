//! I/O configuration

use crate::formats::FormatKind;

/// Scenario file I/O configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IoConfig {
    /// Largest document accepted on read, in bytes
    pub max_document_size: u64,
    /// Whether written documents are indented
    pub pretty: bool,
    /// Format used for paths without an extension
    pub default_format: FormatKind,
}

impl IoConfig {
    /// Default size limit (10 MiB)
    pub const DEFAULT_MAX_DOCUMENT_SIZE: u64 = 10 * 1024 * 1024;

    /// Create new configuration with defaults
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document size limit
    #[inline]
    #[must_use]
    pub const fn with_max_document_size(mut self, bytes: u64) -> Self {
        self.max_document_size = bytes;
        self
    }

    /// Enable or disable indented output
    #[inline]
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Set the fallback format
    #[inline]
    #[must_use]
    pub const fn with_default_format(mut self, format: FormatKind) -> Self {
        self.default_format = format;
        self
    }
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            max_document_size: Self::DEFAULT_MAX_DOCUMENT_SIZE,
            pretty: true,
            default_format: FormatKind::Xml,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = IoConfig::default();
        assert_eq!(config.max_document_size, 10 * 1024 * 1024);
        assert!(config.pretty);
        assert_eq!(config.default_format, FormatKind::Xml);
    }

    #[test]
    fn config_builder() {
        let config = IoConfig::new()
            .with_max_document_size(4096)
            .with_pretty(false)
            .with_default_format(FormatKind::Yaml);

        assert_eq!(config.max_document_size, 4096);
        assert!(!config.pretty);
        assert_eq!(config.default_format, FormatKind::Yaml);
    }
}
