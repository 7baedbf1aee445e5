//! Timestamp codec

use chrono::{DateTime, NaiveDateTime, SecondsFormat};
use swim_model::Timestamp;

use crate::codec::Codec;
use crate::error::{ConversionError, ConversionResult};

const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// RFC 3339 text to offset timestamp
///
/// Text without an offset is read as UTC. Encoding writes `Z` for a zero
/// offset and keeps any other offset.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeCodec;

impl TimeCodec {
    /// Parse a timestamp, naming `field` in errors
    ///
    /// # Errors
    /// Returns [`ConversionError::MalformedValue`] if `text` is not a timestamp
    pub fn parse(&self, field: &str, text: &str) -> ConversionResult<Timestamp> {
        let text = text.trim();
        DateTime::parse_from_rfc3339(text)
            .or_else(|_| {
                NaiveDateTime::parse_from_str(text, NAIVE_FORMAT)
                    .map(|naive| naive.and_utc().fixed_offset())
            })
            .map_err(|e| ConversionError::malformed(field, format!("'{text}': {e}")))
    }

    /// Canonical text of a timestamp
    #[must_use]
    pub fn format(&self, time: &Timestamp) -> String {
        time.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }
}

impl Codec for TimeCodec {
    type External = String;
    type Internal = Timestamp;

    fn decode(&self, text: &String) -> ConversionResult<Timestamp> {
        self.parse("time", text)
    }

    fn encode(&self, time: &Timestamp) -> ConversionResult<String> {
        Ok(self.format(time))
    }
}
