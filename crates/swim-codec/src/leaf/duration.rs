//! ISO 8601 duration codec
//!
//! Accepts the day-time subset `[-]P[nD][T[nH][nM][n[.f]S]]`, letters in
//! either case, at least one component present. Calendar units (years,
//! months, weeks) have no fixed length and are rejected. Encoding emits the
//! canonical `PTnHnMn.nS` form with hours uncapped, and `PT0S` for zero.

use chrono::Duration;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::codec::Codec;
use crate::error::{ConversionError, ConversionResult};

static DURATION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)^([-+]?)P(?:([-+]?[0-9]+)D)?",
        r"(T(?:([-+]?[0-9]+)H)?(?:([-+]?[0-9]+)M)?(?:([-+]?[0-9]+)(?:[.,]([0-9]{0,9}))?S)?)?$",
    ))
    .expect("duration pattern is valid")
});

const NANOS_PER_SECOND: i128 = 1_000_000_000;

/// ISO 8601 text to signed duration
#[derive(Debug, Clone, Copy, Default)]
pub struct DurationCodec;

impl DurationCodec {
    /// Parse a duration, naming `field` in errors
    ///
    /// # Errors
    /// Returns [`ConversionError::MalformedValue`] if `text` is not a
    /// day-time duration or exceeds the representable range
    pub fn parse(&self, field: &str, text: &str) -> ConversionResult<Duration> {
        let malformed =
            |reason: &str| ConversionError::malformed(field, format!("'{text}': {reason}"));

        let captures = DURATION_PATTERN
            .captures(text.trim())
            .ok_or_else(|| malformed("expected ISO 8601 duration"))?;

        let days = captures.get(2);
        let time = captures.get(3);
        let hours = captures.get(4);
        let minutes = captures.get(5);
        let seconds = captures.get(6);
        let fraction = captures.get(7);

        if days.is_none() && time.is_none() {
            return Err(malformed("no duration component"));
        }
        if time.is_some_and(|t| t.as_str().len() == 1) {
            return Err(malformed("time designator without component"));
        }

        let component = |m: Option<regex::Match<'_>>, scale: i128| -> ConversionResult<i128> {
            m.map_or(Ok(0), |m| {
                m.as_str()
                    .parse::<i64>()
                    .map(|value| i128::from(value) * scale)
                    .map_err(|_| malformed("component out of range"))
            })
        };

        let mut total = component(days, 86_400 * NANOS_PER_SECOND)?
            + component(hours, 3_600 * NANOS_PER_SECOND)?
            + component(minutes, 60 * NANOS_PER_SECOND)?
            + component(seconds, NANOS_PER_SECOND)?;

        if let Some(fraction) = fraction.filter(|f| !f.as_str().is_empty()) {
            let digits = format!("{:0<9}", fraction.as_str());
            let nanos: i128 = digits
                .parse::<i64>()
                .map(i128::from)
                .map_err(|_| malformed("invalid fraction"))?;
            let negative = seconds.is_some_and(|s| s.as_str().starts_with('-'));
            total += if negative { -nanos } else { nanos };
        }

        if captures.get(1).is_some_and(|sign| sign.as_str() == "-") {
            total = -total;
        }

        from_nanos(total).ok_or_else(|| malformed("duration out of range"))
    }

    /// Canonical text of a duration
    #[must_use]
    pub fn format(&self, duration: &Duration) -> String {
        let total = to_nanos(duration);
        if total == 0 {
            return "PT0S".to_string();
        }

        let seconds = total.div_euclid(NANOS_PER_SECOND);
        let nanos = total.rem_euclid(NANOS_PER_SECOND);
        let borrowed = seconds < 0 && nanos > 0;
        let effective = if borrowed { seconds + 1 } else { seconds };

        let hours = effective / 3_600;
        let minutes = (effective % 3_600) / 60;
        let secs = effective % 60;

        let mut text = String::from("PT");
        if hours != 0 {
            text.push_str(&format!("{hours}H"));
        }
        if minutes != 0 {
            text.push_str(&format!("{minutes}M"));
        }
        if secs == 0 && nanos == 0 && text.len() > 2 {
            return text;
        }

        if borrowed && secs == 0 {
            text.push_str("-0");
        } else {
            text.push_str(&secs.to_string());
        }
        if nanos > 0 {
            let fraction = if borrowed { NANOS_PER_SECOND - nanos } else { nanos };
            let digits = format!("{fraction:09}");
            text.push('.');
            text.push_str(digits.trim_end_matches('0'));
        }
        text.push('S');
        text
    }
}

fn to_nanos(duration: &Duration) -> i128 {
    i128::from(duration.num_seconds()) * NANOS_PER_SECOND + i128::from(duration.subsec_nanos())
}

fn from_nanos(total: i128) -> Option<Duration> {
    let seconds = i64::try_from(total.div_euclid(NANOS_PER_SECOND)).ok()?;
    let nanos = i64::try_from(total.rem_euclid(NANOS_PER_SECOND)).ok()?;
    Duration::try_seconds(seconds)?.checked_add(&Duration::nanoseconds(nanos))
}

impl Codec for DurationCodec {
    type External = String;
    type Internal = Duration;

    fn decode(&self, text: &String) -> ConversionResult<Duration> {
        self.parse("duration", text)
    }

    fn encode(&self, duration: &Duration) -> ConversionResult<String> {
        Ok(self.format(duration))
    }
}
