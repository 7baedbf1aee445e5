//! Track error tolerance codecs

use swim_document as doc;
use swim_model::{Angle, TrackError, TrackErrors, TrackPointError};

use super::duration::DurationCodec;
use crate::codec::{finite, Codec};
use crate::error::ConversionResult;

/// Track error node to track tolerance
#[derive(Debug, Clone, Copy, Default)]
pub struct TrackErrorCodec;

impl Codec for TrackErrorCodec {
    type External = doc::TrackError;
    type Internal = TrackError;

    fn decode(&self, node: &doc::TrackError) -> ConversionResult<TrackError> {
        Ok(TrackError {
            cross_track_error: finite("maxTrackError.crossTrackError", node.cross_track_error)?,
            altitude_error: finite("maxTrackError.altitudeError", node.altitude_error)?,
            opening_bearing_error: Angle::from_degrees(finite(
                "maxTrackError.openingBearingError",
                node.opening_bearing_error,
            )?),
            closing_bearing_error: Angle::from_degrees(finite(
                "maxTrackError.closingBearingError",
                node.closing_bearing_error,
            )?),
            timing_error: DurationCodec.parse("maxTrackError.timingError", &node.timing_error)?,
        })
    }

    fn encode(&self, error: &TrackError) -> ConversionResult<doc::TrackError> {
        Ok(doc::TrackError {
            cross_track_error: error.cross_track_error,
            altitude_error: error.altitude_error,
            opening_bearing_error: error.opening_bearing_error.degrees(),
            closing_bearing_error: error.closing_bearing_error.degrees(),
            timing_error: DurationCodec.format(&error.timing_error),
        })
    }
}

/// Track point error node to point tolerance
#[derive(Debug, Clone, Copy, Default)]
pub struct TrackPointErrorCodec;

impl Codec for TrackPointErrorCodec {
    type External = doc::TrackPointError;
    type Internal = TrackPointError;

    fn decode(&self, node: &doc::TrackPointError) -> ConversionResult<TrackPointError> {
        Ok(TrackPointError {
            horizontal_error: finite("trackPointError.horizontalError", node.horizontal_error)?,
            vertical_error: finite("trackPointError.verticalError", node.vertical_error)?,
            timing_error: DurationCodec.parse("trackPointError.timingError", &node.timing_error)?,
        })
    }

    fn encode(&self, error: &TrackPointError) -> ConversionResult<doc::TrackPointError> {
        Ok(doc::TrackPointError {
            horizontal_error: error.horizontal_error,
            vertical_error: error.vertical_error,
            timing_error: DurationCodec.format(&error.timing_error),
        })
    }
}

/// Errors block to track tolerances; absent entries stay absent
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorsCodec;

impl Codec for ErrorsCodec {
    type External = doc::Errors;
    type Internal = TrackErrors;

    fn decode(&self, node: &doc::Errors) -> ConversionResult<TrackErrors> {
        Ok(TrackErrors {
            max_track_error: node
                .max_track_error
                .as_ref()
                .map(|e| TrackErrorCodec.decode(e))
                .transpose()?,
            max_take_off_error: node
                .max_take_off_error
                .as_ref()
                .map(|e| TrackPointErrorCodec.decode(e))
                .transpose()?,
            max_landing_error: node
                .max_landing_error
                .as_ref()
                .map(|e| TrackPointErrorCodec.decode(e))
                .transpose()?,
        })
    }

    fn encode(&self, errors: &TrackErrors) -> ConversionResult<doc::Errors> {
        Ok(doc::Errors {
            max_track_error: errors
                .max_track_error
                .as_ref()
                .map(|e| TrackErrorCodec.encode(e))
                .transpose()?,
            max_take_off_error: errors
                .max_take_off_error
                .as_ref()
                .map(|e| TrackPointErrorCodec.encode(e))
                .transpose()?,
            max_landing_error: errors
                .max_landing_error
                .as_ref()
                .map(|e| TrackPointErrorCodec.encode(e))
                .transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use pretty_assertions::assert_eq;

    #[test]
    fn track_error_bearings_are_degrees() {
        let node = doc::TrackError {
            cross_track_error: 50.0,
            altitude_error: 20.0,
            opening_bearing_error: 15.0,
            closing_bearing_error: 7.5,
            timing_error: "PT30S".into(),
        };
        let error = TrackErrorCodec.decode(&node).unwrap();
        assert_eq!(error.closing_bearing_error.degrees(), 7.5);
        assert_eq!(error.timing_error, Duration::seconds(30));
        assert_eq!(TrackErrorCodec.encode(&error).unwrap(), node);
    }

    #[test]
    fn partial_errors_stay_partial() {
        let node = doc::Errors {
            max_landing_error: Some(doc::TrackPointError {
                horizontal_error: 5.0,
                vertical_error: 2.0,
                timing_error: "PT1M".into(),
            }),
            ..doc::Errors::default()
        };
        let errors = ErrorsCodec.decode(&node).unwrap();
        assert!(errors.max_track_error.is_none());
        assert_eq!(errors.landing().timing_error, Duration::minutes(1));
        assert_eq!(ErrorsCodec.encode(&errors).unwrap(), node);
    }

    #[test]
    fn bad_timing_error_names_its_field() {
        let node = doc::TrackPointError {
            horizontal_error: 1.0,
            vertical_error: 1.0,
            timing_error: "soon".into(),
        };
        let err = TrackPointErrorCodec.decode(&node).unwrap_err();
        assert!(err.to_string().contains("trackPointError.timingError"));
    }
}
