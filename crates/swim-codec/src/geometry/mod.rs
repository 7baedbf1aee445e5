//! Shape and region codecs

mod region;
mod shape;

pub use region::{GeometricBoxCodec, GlobeCodec, SectorCodec};
pub use shape::{BoxCodec, CylinderCodec, SphereCodec};
