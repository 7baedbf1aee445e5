//! Depiction codec

use swim_document as doc;
use swim_model::{
    Depiction, DepictionAnnotation, MilStd2525SymbolFactory, Position, SymbolFactory, Symbology,
};

use crate::codec::Codec;
use crate::error::{ConversionError, ConversionResult};

pub(crate) fn symbology_from_doc(symbology: doc::Symbology) -> Symbology {
    match symbology {
        doc::Symbology::TacticalPoint => Symbology::TacticalPoint,
        doc::Symbology::TacticalSymbol => Symbology::TacticalSymbol,
    }
}

pub(crate) fn symbology_to_doc(symbology: Symbology) -> doc::Symbology {
    match symbology {
        Symbology::TacticalPoint => doc::Symbology::TacticalPoint,
        Symbology::TacticalSymbol => doc::Symbology::TacticalSymbol,
    }
}

/// Depiction node to tactical depiction at the owner's reference position
#[derive(Debug, Clone, Copy)]
pub struct DepictionCodec {
    pub position: Position,
}

impl DepictionCodec {
    #[must_use]
    pub const fn new(position: Position) -> Self {
        Self { position }
    }

    /// Decode an optional depiction
    pub(crate) fn decode_optional(
        &self,
        node: Option<&doc::Depiction>,
    ) -> ConversionResult<Option<Depiction>> {
        node.map(|node| self.decode(node)).transpose()
    }

    /// Encode an optional depiction
    pub(crate) fn encode_optional(
        depiction: Option<&Depiction>,
    ) -> ConversionResult<Option<doc::Depiction>> {
        depiction
            .map(|depiction| Self::new(depiction.position()).encode(depiction))
            .transpose()
    }
}

impl Codec for DepictionCodec {
    type External = doc::Depiction;
    type Internal = Depiction;

    fn decode(&self, node: &doc::Depiction) -> ConversionResult<Depiction> {
        let mut factory = MilStd2525SymbolFactory::new();
        let tactical = factory
            .create(symbology_from_doc(node.symbology), &node.sidc, self.position)
            .map_err(|e| ConversionError::malformed("depiction.sidc", e.to_string()))?;

        let mut depiction = Depiction::new(tactical);
        if node.text.is_some() || node.image.is_some() {
            let annotation = DepictionAnnotation::new(node.text.clone().unwrap_or_default());
            depiction = depiction.with_annotation(match &node.image {
                Some(image) => annotation.with_image(image.clone()),
                None => annotation,
            });
        }
        Ok(depiction)
    }

    fn encode(&self, depiction: &Depiction) -> ConversionResult<doc::Depiction> {
        let annotation = depiction.annotation.as_ref();
        Ok(doc::Depiction {
            symbology: symbology_to_doc(depiction.symbology()),
            sidc: depiction.symbol_identifier().to_string(),
            text: annotation
                .map(|a| a.text.clone())
                .filter(|text| !text.is_empty()),
            image: annotation.and_then(|a| a.image.clone()),
        })
    }
}
