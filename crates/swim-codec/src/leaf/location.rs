//! Location and position codecs

use swim_document as doc;
use swim_model::{Angle, LatLon, Position};

use crate::codec::{finite, Codec};
use crate::error::{ConversionError, ConversionResult};

fn latitude(field: &str, degrees: f64) -> ConversionResult<Angle> {
    if degrees.is_finite() && (-90.0..=90.0).contains(&degrees) {
        Ok(Angle::from_degrees(degrees))
    } else {
        Err(ConversionError::malformed(
            field,
            format!("latitude {degrees} outside [-90, 90]"),
        ))
    }
}

fn longitude(field: &str, degrees: f64) -> ConversionResult<Angle> {
    if degrees.is_finite() && (-180.0..=180.0).contains(&degrees) {
        Ok(Angle::from_degrees(degrees))
    } else {
        Err(ConversionError::malformed(
            field,
            format!("longitude {degrees} outside [-180, 180]"),
        ))
    }
}

/// Degrees to geodetic location
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationCodec;

impl Codec for LocationCodec {
    type External = doc::Location;
    type Internal = LatLon;

    fn decode(&self, location: &doc::Location) -> ConversionResult<LatLon> {
        Ok(LatLon::new(
            latitude("location.latitude", location.latitude)?,
            longitude("location.longitude", location.longitude)?,
        ))
    }

    fn encode(&self, location: &LatLon) -> ConversionResult<doc::Location> {
        Ok(doc::Location::new(
            location.latitude.degrees(),
            location.longitude.degrees(),
        ))
    }
}

/// Degrees and metres to geodetic position
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionCodec;

impl PositionCodec {
    /// Decode loose latitude, longitude and altitude fields
    pub(crate) fn decode_parts(
        &self,
        lat: f64,
        lon: f64,
        alt: f64,
    ) -> ConversionResult<Position> {
        Ok(Position::new(
            latitude("position.latitude", lat)?,
            longitude("position.longitude", lon)?,
            finite("position.altitude", alt)?,
        ))
    }
}

impl Codec for PositionCodec {
    type External = doc::Position;
    type Internal = Position;

    fn decode(&self, position: &doc::Position) -> ConversionResult<Position> {
        self.decode_parts(position.latitude, position.longitude, position.altitude)
    }

    fn encode(&self, position: &Position) -> ConversionResult<doc::Position> {
        Ok(doc::Position::new(
            position.latitude.degrees(),
            position.longitude.degrees(),
            position.altitude,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn out_of_range_latitude_is_malformed() {
        let err = LocationCodec
            .decode(&doc::Location::new(91.0, 0.0))
            .unwrap_err();
        assert!(matches!(
            err,
            ConversionError::MalformedValue { ref field, .. } if field == "location.latitude"
        ));
    }

    #[test]
    fn nan_altitude_is_malformed() {
        assert!(PositionCodec
            .decode(&doc::Position::new(0.0, 0.0, f64::NAN))
            .is_err());
    }

    proptest! {
        #[test]
        fn location_roundtrip_is_exact(lat in -90.0f64..=90.0, lon in -180.0f64..=180.0) {
            let location = doc::Location::new(lat, lon);
            let decoded = LocationCodec.decode(&location).unwrap();
            prop_assert_eq!(LocationCodec.encode(&decoded).unwrap(), location);
        }
    }
}
