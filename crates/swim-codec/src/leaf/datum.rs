//! Altitude datum codec

use swim_document as doc;
use swim_model::AltitudeDatum;

use crate::codec::Codec;
use crate::error::ConversionResult;

/// Altitude reference to datum
#[derive(Debug, Clone, Copy, Default)]
pub struct DatumCodec;

impl DatumCodec {
    /// Decode an optional datum, defaulting to above mean sea level
    pub fn decode_or_default(&self, datum: Option<&doc::Datum>) -> ConversionResult<AltitudeDatum> {
        datum.map_or(Ok(AltitudeDatum::default()), |datum| self.decode(datum))
    }

    /// Decode the reference key of a datum
    pub fn decode_key(&self, datum: &doc::Datum) -> ConversionResult<&'static str> {
        self.decode(datum).map(|datum| datum.as_key())
    }
}

impl Codec for DatumCodec {
    type External = doc::Datum;
    type Internal = AltitudeDatum;

    fn decode(&self, datum: &doc::Datum) -> ConversionResult<AltitudeDatum> {
        Ok(match datum {
            doc::Datum::Asl => AltitudeDatum::AboveMeanSeaLevel,
            doc::Datum::Agl => AltitudeDatum::AboveGroundLevel,
            doc::Datum::Agr => AltitudeDatum::AboveGroundReference,
        })
    }

    fn encode(&self, datum: &AltitudeDatum) -> ConversionResult<doc::Datum> {
        Ok(match datum {
            AltitudeDatum::AboveMeanSeaLevel => doc::Datum::Asl,
            AltitudeDatum::AboveGroundLevel => doc::Datum::Agl,
            AltitudeDatum::AboveGroundReference => doc::Datum::Agr,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_datum_is_mean_sea_level() {
        assert_eq!(
            DatumCodec.decode_or_default(None).unwrap(),
            AltitudeDatum::AboveMeanSeaLevel
        );
    }

    #[test]
    fn datum_maps_to_reference_key() {
        assert_eq!(
            DatumCodec.decode_key(&doc::Datum::Agl).unwrap(),
            "gov.nasa.worldwind.avkey.AboveGroundLevel"
        );
        for datum in [doc::Datum::Asl, doc::Datum::Agl, doc::Datum::Agr] {
            let internal = DatumCodec.decode(&datum).unwrap();
            assert_eq!(DatumCodec.encode(&internal).unwrap(), datum);
        }
    }
}
