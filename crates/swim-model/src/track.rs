//! Aircraft track error tolerances

use chrono::Duration;

use crate::geom::Angle;

/// Tolerated deviation from a planned track
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackError {
    /// Lateral deviation in metres
    pub cross_track_error: f64,
    /// Vertical deviation in metres
    pub altitude_error: f64,
    pub opening_bearing_error: Angle,
    pub closing_bearing_error: Angle,
    pub timing_error: Duration,
}

impl TrackError {
    pub const ZERO: TrackError = TrackError {
        cross_track_error: 0.0,
        altitude_error: 0.0,
        opening_bearing_error: Angle::ZERO,
        closing_bearing_error: Angle::ZERO,
        timing_error: Duration::zero(),
    };
}

impl Default for TrackError {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Tolerated deviation at a single track point such as take-off or landing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackPointError {
    pub horizontal_error: f64,
    pub vertical_error: f64,
    pub timing_error: Duration,
}

impl TrackPointError {
    pub const ZERO: TrackPointError = TrackPointError {
        horizontal_error: 0.0,
        vertical_error: 0.0,
        timing_error: Duration::zero(),
    };
}

impl Default for TrackPointError {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Error tolerances of an online planner or a simulated datalink
///
/// Absent tolerances are treated as [`TrackError::ZERO`] and
/// [`TrackPointError::ZERO`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackErrors {
    pub max_track_error: Option<TrackError>,
    pub max_take_off_error: Option<TrackPointError>,
    pub max_landing_error: Option<TrackPointError>,
}

impl TrackErrors {
    #[inline]
    #[must_use]
    pub fn track(&self) -> TrackError {
        self.max_track_error.unwrap_or_default()
    }

    #[inline]
    #[must_use]
    pub fn take_off(&self) -> TrackPointError {
        self.max_take_off_error.unwrap_or_default()
    }

    #[inline]
    #[must_use]
    pub fn landing(&self) -> TrackPointError {
        self.max_landing_error.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_errors_default_to_zero() {
        let errors = TrackErrors::default();
        assert_eq!(errors.track(), TrackError::ZERO);
        assert_eq!(errors.take_off(), TrackPointError::ZERO);
        assert_eq!(errors.landing(), TrackPointError::ZERO);
    }
}
