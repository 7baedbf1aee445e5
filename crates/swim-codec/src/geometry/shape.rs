//! Airspace shape codecs

use swim_document as doc;
use swim_model::{AltitudeBounds, BoxAirspace, CappedCylinder, SphereAirspace};

use crate::codec::{finite, Codec};
use crate::error::ConversionResult;
use crate::leaf::{DatumCodec, LocationCodec, PositionCodec};

fn altitude_bounds(
    field: &str,
    bottom: f64,
    top: f64,
    bottom_datum: Option<&doc::Datum>,
    top_datum: Option<&doc::Datum>,
) -> ConversionResult<AltitudeBounds> {
    Ok(AltitudeBounds::new(
        finite(&format!("{field}.bottom"), bottom)?,
        finite(&format!("{field}.top"), top)?,
    )
    .with_datums(
        DatumCodec.decode_or_default(bottom_datum)?,
        DatumCodec.decode_or_default(top_datum)?,
    ))
}

/// Box shape node to box airspace
#[derive(Debug, Clone, Copy, Default)]
pub struct BoxCodec;

impl Codec for BoxCodec {
    type External = doc::BoxShape;
    type Internal = BoxAirspace;

    fn decode(&self, shape: &doc::BoxShape) -> ConversionResult<BoxAirspace> {
        let bounds = altitude_bounds(
            "box",
            shape.bottom,
            shape.top,
            shape.bottom_datum.as_ref(),
            shape.top_datum.as_ref(),
        )?;
        Ok(BoxAirspace::new(
            LocationCodec.decode(&shape.begin)?,
            LocationCodec.decode(&shape.end)?,
            shape.left_width,
            shape.right_width,
            bounds,
        )?)
    }

    fn encode(&self, airspace: &BoxAirspace) -> ConversionResult<doc::BoxShape> {
        let [begin, end] = airspace.locations();
        let (left_width, right_width) = airspace.widths();
        let bounds = airspace.altitude_bounds();
        Ok(doc::BoxShape {
            begin: LocationCodec.encode(&begin)?,
            end: LocationCodec.encode(&end)?,
            left_width,
            right_width,
            bottom: bounds.bottom,
            top: bounds.top,
            bottom_datum: Some(DatumCodec.encode(&bounds.bottom_datum)?),
            top_datum: Some(DatumCodec.encode(&bounds.top_datum)?),
        })
    }
}

/// Cylinder node to capped cylinder
#[derive(Debug, Clone, Copy, Default)]
pub struct CylinderCodec;

impl Codec for CylinderCodec {
    type External = doc::Cylinder;
    type Internal = CappedCylinder;

    fn decode(&self, shape: &doc::Cylinder) -> ConversionResult<CappedCylinder> {
        let bounds = altitude_bounds(
            "cylinder",
            shape.bottom,
            shape.top,
            shape.bottom_datum.as_ref(),
            shape.top_datum.as_ref(),
        )?;
        Ok(CappedCylinder::new(LocationCodec.decode(&shape.center)?, shape.radius, bounds)?)
    }

    fn encode(&self, cylinder: &CappedCylinder) -> ConversionResult<doc::Cylinder> {
        let bounds = cylinder.altitude_bounds();
        Ok(doc::Cylinder {
            center: LocationCodec.encode(&cylinder.center())?,
            radius: cylinder.radius(),
            bottom: bounds.bottom,
            top: bounds.top,
            bottom_datum: Some(DatumCodec.encode(&bounds.bottom_datum)?),
            top_datum: Some(DatumCodec.encode(&bounds.top_datum)?),
        })
    }
}

/// Sphere node to sphere airspace
#[derive(Debug, Clone, Copy, Default)]
pub struct SphereCodec;

impl Codec for SphereCodec {
    type External = doc::Sphere;
    type Internal = SphereAirspace;

    fn decode(&self, shape: &doc::Sphere) -> ConversionResult<SphereAirspace> {
        Ok(SphereAirspace::new(
            PositionCodec.decode(&shape.center)?,
            shape.radius,
            DatumCodec.decode_or_default(shape.center_datum.as_ref())?,
        )?)
    }

    fn encode(&self, sphere: &SphereAirspace) -> ConversionResult<doc::Sphere> {
        Ok(doc::Sphere {
            center: PositionCodec.encode(&sphere.center())?,
            radius: sphere.radius(),
            center_datum: Some(DatumCodec.encode(&sphere.datum())?),
        })
    }
}
