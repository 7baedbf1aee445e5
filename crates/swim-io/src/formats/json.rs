//! JSON scenario format

use std::path::Path;

use swim_document::Scenario;

use super::{DocumentFormat, FormatKind};
use crate::error::{IoResult, ScenarioIoError};

/// JSON documents via serde_json
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormat;

impl DocumentFormat for JsonFormat {
    fn kind(&self) -> FormatKind {
        FormatKind::Json
    }

    fn extensions(&self) -> &[&str] {
        &["json"]
    }

    fn parse(&self, path: &Path, content: &str) -> IoResult<Scenario> {
        serde_json::from_str(content)
            .map_err(|e| ScenarioIoError::syntax_error(path, e.to_string()))
    }

    fn render(&self, scenario: &Scenario, pretty: bool) -> IoResult<String> {
        let rendered = if pretty {
            serde_json::to_string_pretty(scenario)
        } else {
            serde_json::to_string(scenario)
        };
        rendered.map_err(ScenarioIoError::serialization)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syntax_errors_name_the_path() {
        let err = JsonFormat
            .parse(Path::new("broken.json"), "{ \"id\": ")
            .unwrap_err();
        match err {
            ScenarioIoError::Syntax { path, .. } => assert_eq!(path, Path::new("broken.json")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn compact_output_has_no_newlines() {
        let scenario = Scenario {
            id: "compact".into(),
            threshold: 1.0,
            ..Scenario::default()
        };
        let text = JsonFormat.render(&scenario, false).unwrap();
        assert_eq!(text, r#"{"id":"compact","threshold":1.0}"#);
    }
}
