//! Time and cost intervals

use chrono::{DateTime, FixedOffset};

/// Timestamp with a fixed UTC offset
pub type Timestamp = DateTime<FixedOffset>;

/// Closed interval between two timestamps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeInterval {
    pub lower: Timestamp,
    pub upper: Timestamp,
}

impl TimeInterval {
    #[inline]
    #[must_use]
    pub const fn new(lower: Timestamp, upper: Timestamp) -> Self {
        Self { lower, upper }
    }

    /// Whether the upper bound precedes the lower bound
    #[inline]
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.upper < self.lower
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, time: &Timestamp) -> bool {
        self.lower <= *time && *time <= self.upper
    }
}

/// Cost applied to an airspace during a time interval
#[derive(Debug, Clone, PartialEq)]
pub struct CostInterval {
    pub id: String,
    pub interval: TimeInterval,
    pub cost: f64,
    pub enabled: bool,
}

impl CostInterval {
    /// Enabled cost interval
    #[must_use]
    pub fn new(id: impl Into<String>, interval: TimeInterval, cost: f64) -> Self {
        Self {
            id: id.into(),
            interval,
            cost,
            enabled: true,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Cost in effect at a time, zero when disabled or outside the interval
    #[must_use]
    pub fn cost_at(&self, time: &Timestamp) -> f64 {
        if self.enabled && self.interval.contains(time) {
            self.cost
        } else {
            0.0
        }
    }
}
