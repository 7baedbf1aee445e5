//! Globe, sector and geometric box codecs

use swim_document as doc;
use swim_model::{Globe, GlobeKind, OrientedBox, Sector};

use crate::codec::Codec;
use crate::error::ConversionResult;
use crate::leaf::LocationCodec;

/// Globe model to globe
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobeCodec;

impl Codec for GlobeCodec {
    type External = doc::Globe;
    type Internal = Globe;

    fn decode(&self, globe: &doc::Globe) -> ConversionResult<Globe> {
        Ok(match globe.model {
            doc::GlobeModel::Earth => Globe::earth(),
            doc::GlobeModel::Sphere => Globe::spherical_earth(),
        })
    }

    fn encode(&self, globe: &Globe) -> ConversionResult<doc::Globe> {
        let model = match globe.kind() {
            GlobeKind::Ellipsoidal => doc::GlobeModel::Earth,
            GlobeKind::Spherical => doc::GlobeModel::Sphere,
        };
        Ok(doc::Globe { model })
    }
}

/// Corner locations to sector
#[derive(Debug, Clone, Copy, Default)]
pub struct SectorCodec;

impl Codec for SectorCodec {
    type External = doc::Sector;
    type Internal = Sector;

    fn decode(&self, sector: &doc::Sector) -> ConversionResult<Sector> {
        let sector = Sector::from_corners(
            LocationCodec.decode(&sector.south_west)?,
            LocationCodec.decode(&sector.north_east)?,
        );
        sector.validate()?;
        Ok(sector)
    }

    fn encode(&self, sector: &Sector) -> ConversionResult<doc::Sector> {
        Ok(doc::Sector {
            south_west: LocationCodec.encode(&sector.south_west())?,
            north_east: LocationCodec.encode(&sector.north_east())?,
        })
    }
}

/// Extruded sector to oriented box on a globe
///
/// Decoding derives the box enclosing the extruded sector. Encoding reports
/// the geodetic extent a derived box keeps; other boxes are deprojected at
/// their bottom-lower-left and top-upper-right corners.
#[derive(Debug, Clone, Copy)]
pub struct GeometricBoxCodec<'a> {
    pub globe: &'a Globe,
}

impl<'a> GeometricBoxCodec<'a> {
    #[must_use]
    pub const fn new(globe: &'a Globe) -> Self {
        Self { globe }
    }
}

impl Codec for GeometricBoxCodec<'_> {
    type External = doc::GeometricBox;
    type Internal = OrientedBox;

    fn decode(&self, node: &doc::GeometricBox) -> ConversionResult<OrientedBox> {
        let sector = SectorCodec.decode(&node.sector())?;
        Ok(self.globe.compute_bounding_box(&sector, node.bottom, node.top)?)
    }

    fn encode(&self, bounds: &OrientedBox) -> ConversionResult<doc::GeometricBox> {
        let extent = self.globe.compute_extent(bounds)?;
        let sector = SectorCodec.encode(&extent.sector)?;
        Ok(doc::GeometricBox {
            south_west: sector.south_west,
            north_east: sector.north_east,
            bottom: extent.bottom,
            top: extent.top,
        })
    }
}
