//! XML scenario format

use std::path::Path;

use serde::Serialize;
use swim_document::Scenario;

use super::{DocumentFormat, FormatKind};
use crate::error::{IoResult, ScenarioIoError};

const ROOT: &str = "scenario";

/// XML documents via quick-xml, rooted at `<scenario>`
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlFormat;

impl DocumentFormat for XmlFormat {
    fn kind(&self) -> FormatKind {
        FormatKind::Xml
    }

    fn extensions(&self) -> &[&str] {
        &["xml"]
    }

    fn parse(&self, path: &Path, content: &str) -> IoResult<Scenario> {
        quick_xml::de::from_str(content)
            .map_err(|e| ScenarioIoError::syntax_error(path, e.to_string()))
    }

    fn render(&self, scenario: &Scenario, pretty: bool) -> IoResult<String> {
        let mut buffer = String::new();
        let mut serializer = quick_xml::se::Serializer::with_root(&mut buffer, Some(ROOT))
            .map_err(ScenarioIoError::serialization)?;
        if pretty {
            serializer.indent(' ', 2);
        }
        scenario
            .serialize(serializer)
            .map_err(ScenarioIoError::serialization)?;
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use swim_document::{Subscriptions, Swim, SwimProtocol};

    use super::*;

    fn scenario() -> Scenario {
        Scenario {
            id: "xml-mission".into(),
            threshold: 0.25,
            ..Scenario::default()
        }
    }

    #[test]
    fn documents_are_rooted_at_scenario() {
        let text = XmlFormat.render(&scenario(), false).unwrap();
        assert!(text.starts_with("<scenario>"));
        assert!(text.contains("<id>xml-mission</id>"));
        assert!(text.ends_with("</scenario>"));
    }

    #[test]
    fn pretty_output_is_indented() {
        let text = XmlFormat.render(&scenario(), true).unwrap();
        assert!(text.contains("\n  <id>xml-mission</id>"));
    }

    #[test]
    fn parses_rendered_text() {
        let text = XmlFormat.render(&scenario(), true).unwrap();
        let parsed = XmlFormat.parse(Path::new("m.xml"), &text).unwrap();
        assert_eq!(parsed, scenario());
    }

    #[test]
    fn protocol_lists_read_back() {
        let scenario = Scenario {
            swim: Some(Swim {
                subscriptions: Some(Subscriptions {
                    protocol: vec![SwimProtocol::Aixm, SwimProtocol::Fixm],
                }),
                ..Swim::default()
            }),
            ..scenario()
        };
        let text = XmlFormat.render(&scenario, false).unwrap();
        assert!(text.contains("<protocol>AIXM</protocol><protocol>FIXM</protocol>"));
        let parsed = XmlFormat.parse(Path::new("m.xml"), &text).unwrap();
        assert_eq!(parsed, scenario);
    }

    #[test]
    fn truncated_documents_are_syntax_errors() {
        let err = XmlFormat
            .parse(Path::new("m.xml"), "<scenario><id>cut")
            .unwrap_err();
        assert!(matches!(err, ScenarioIoError::Syntax { .. }));
    }
}
