//! Time and cost interval codecs

use swim_document as doc;
use swim_model::{CostInterval, TimeInterval};

use super::time::TimeCodec;
use crate::codec::{finite, Codec};
use crate::error::{ConversionError, ConversionResult};

/// Start and end text to time interval
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeIntervalCodec;

impl TimeIntervalCodec {
    fn decode_bounds(&self, field: &str, start: &str, end: &str) -> ConversionResult<TimeInterval> {
        let interval = TimeInterval::new(
            TimeCodec.parse(&format!("{field}.start"), start)?,
            TimeCodec.parse(&format!("{field}.end"), end)?,
        );
        if interval.is_inverted() {
            return Err(ConversionError::malformed(
                field,
                format!("end {end} precedes start {start}"),
            ));
        }
        Ok(interval)
    }
}

impl Codec for TimeIntervalCodec {
    type External = doc::TimeInterval;
    type Internal = TimeInterval;

    fn decode(&self, interval: &doc::TimeInterval) -> ConversionResult<TimeInterval> {
        self.decode_bounds("timeInterval", &interval.start, &interval.end)
    }

    fn encode(&self, interval: &TimeInterval) -> ConversionResult<doc::TimeInterval> {
        Ok(doc::TimeInterval {
            start: TimeCodec.format(&interval.lower),
            end: TimeCodec.format(&interval.upper),
        })
    }
}

/// Cost interval node to cost interval
#[derive(Debug, Clone, Copy, Default)]
pub struct CostIntervalCodec;

impl Codec for CostIntervalCodec {
    type External = doc::CostInterval;
    type Internal = CostInterval;

    fn decode(&self, node: &doc::CostInterval) -> ConversionResult<CostInterval> {
        let interval = TimeIntervalCodec.decode_bounds("costInterval", &node.start, &node.end)?;
        let cost = finite("costInterval.cost", node.cost)?;
        Ok(CostInterval::new(node.id.clone(), interval, cost).with_enabled(node.enabled))
    }

    fn encode(&self, interval: &CostInterval) -> ConversionResult<doc::CostInterval> {
        let bounds = TimeIntervalCodec.encode(&interval.interval)?;
        Ok(doc::CostInterval {
            id: interval.id.clone(),
            start: bounds.start,
            end: bounds.end,
            cost: interval.cost,
            enabled: interval.enabled,
        })
    }
}
