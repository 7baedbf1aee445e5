//! Leaf value codecs

mod datum;
mod duration;
mod interval;
mod location;
mod time;
mod track;

pub use datum::DatumCodec;
pub use duration::DurationCodec;
pub use interval::{CostIntervalCodec, TimeIntervalCodec};
pub use location::{LocationCodec, PositionCodec};
pub use time::TimeCodec;
pub use track::{ErrorsCodec, TrackErrorCodec, TrackPointErrorCodec};
