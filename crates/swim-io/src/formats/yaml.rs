//! YAML scenario format

use std::path::Path;

use swim_document::Scenario;

use super::{DocumentFormat, FormatKind};
use crate::error::{IoResult, ScenarioIoError};

/// YAML documents via serde_yaml
///
/// serde_yaml always writes block style, so `pretty` has no effect.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlFormat;

impl DocumentFormat for YamlFormat {
    fn kind(&self) -> FormatKind {
        FormatKind::Yaml
    }

    fn extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }

    fn parse(&self, path: &Path, content: &str) -> IoResult<Scenario> {
        serde_yaml::from_str(content)
            .map_err(|e| ScenarioIoError::syntax_error(path, e.to_string()))
    }

    fn render(&self, scenario: &Scenario, _pretty: bool) -> IoResult<String> {
        serde_yaml::to_string(scenario).map_err(ScenarioIoError::serialization)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_schema_names() {
        let text = "id: yaml-mission\nthreshold: 0.5\nglobe:\n  model: sphere\n";
        let scenario = YamlFormat.parse(Path::new("m.yaml"), text).unwrap();
        assert_eq!(scenario.id, "yaml-mission");
        assert_eq!(
            scenario.globe.map(|globe| globe.model),
            Some(swim_document::GlobeModel::Sphere)
        );
    }

    #[test]
    fn unknown_alternatives_are_syntax_errors() {
        let text = "id: m\nthreshold: 0\nglobe:\n  model: moon\n";
        let err = YamlFormat.parse(Path::new("m.yaml"), text).unwrap_err();
        assert!(matches!(err, ScenarioIoError::Syntax { .. }));
    }
}
