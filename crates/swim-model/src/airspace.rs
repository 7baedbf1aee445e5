//! Airspace shapes
//!
//! Volumes bounded by geodetic locations and altitudes. Each altitude bound
//! carries its own [`AltitudeDatum`].

use crate::error::{GeometryError, GeometryResult};
use crate::geom::{AltitudeDatum, LatLon, Position};

fn check_length(name: &str, value: f64) -> GeometryResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(GeometryError::invalid_shape(format!(
            "{name} must be finite and non-negative, got {value}"
        )))
    }
}

fn check_altitude(name: &str, value: f64) -> GeometryResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GeometryError::invalid_shape(format!(
            "{name} must be finite, got {value}"
        )))
    }
}

/// Lower and upper altitude bounds with their datums
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AltitudeBounds {
    pub bottom: f64,
    pub top: f64,
    pub bottom_datum: AltitudeDatum,
    pub top_datum: AltitudeDatum,
}

impl AltitudeBounds {
    /// Bounds referenced to mean sea level
    #[inline]
    #[must_use]
    pub fn new(bottom: f64, top: f64) -> Self {
        Self {
            bottom,
            top,
            ..Self::default()
        }
    }

    #[inline]
    #[must_use]
    pub fn with_datums(mut self, bottom_datum: AltitudeDatum, top_datum: AltitudeDatum) -> Self {
        self.bottom_datum = bottom_datum;
        self.top_datum = top_datum;
        self
    }

    fn validate(&self) -> GeometryResult<()> {
        check_altitude("bottom altitude", self.bottom)?;
        check_altitude("top altitude", self.top)
    }
}

/// Box spanned along a centre line between two locations
///
/// Extends `left_width` metres to the left and `right_width` metres to the
/// right of the line from `begin` to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxAirspace {
    begin: LatLon,
    end: LatLon,
    left_width: f64,
    right_width: f64,
    altitudes: AltitudeBounds,
}

impl BoxAirspace {
    /// # Errors
    /// Returns [`GeometryError::InvalidShape`] for negative or non-finite
    /// widths and non-finite altitudes
    pub fn new(
        begin: LatLon,
        end: LatLon,
        left_width: f64,
        right_width: f64,
        altitudes: AltitudeBounds,
    ) -> GeometryResult<Self> {
        check_length("left width", left_width)?;
        check_length("right width", right_width)?;
        altitudes.validate()?;
        Ok(Self {
            begin,
            end,
            left_width,
            right_width,
            altitudes,
        })
    }

    /// Centre line as `[begin, end]`
    #[inline]
    #[must_use]
    pub fn locations(&self) -> [LatLon; 2] {
        [self.begin, self.end]
    }

    /// Widths as `(left, right)`
    #[inline]
    #[must_use]
    pub fn widths(&self) -> (f64, f64) {
        (self.left_width, self.right_width)
    }

    /// Altitudes as `(bottom, top)`
    #[inline]
    #[must_use]
    pub fn altitudes(&self) -> (f64, f64) {
        (self.altitudes.bottom, self.altitudes.top)
    }

    #[inline]
    #[must_use]
    pub fn altitude_bounds(&self) -> &AltitudeBounds {
        &self.altitudes
    }

    /// Midpoint of the centre line at the bottom altitude
    #[must_use]
    pub fn reference_position(&self) -> Position {
        Position::from_location(LatLon::midpoint(self.begin, self.end), self.altitudes.bottom)
    }
}

/// Vertical cylinder capped at two altitudes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CappedCylinder {
    center: LatLon,
    radius: f64,
    altitudes: AltitudeBounds,
}

impl CappedCylinder {
    /// # Errors
    /// Returns [`GeometryError::InvalidShape`] for a negative or non-finite
    /// radius and non-finite altitudes
    pub fn new(center: LatLon, radius: f64, altitudes: AltitudeBounds) -> GeometryResult<Self> {
        check_length("radius", radius)?;
        altitudes.validate()?;
        Ok(Self {
            center,
            radius,
            altitudes,
        })
    }

    #[inline]
    #[must_use]
    pub fn center(&self) -> LatLon {
        self.center
    }

    #[inline]
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Altitudes as `(bottom, top)`
    #[inline]
    #[must_use]
    pub fn altitudes(&self) -> (f64, f64) {
        (self.altitudes.bottom, self.altitudes.top)
    }

    #[inline]
    #[must_use]
    pub fn altitude_bounds(&self) -> &AltitudeBounds {
        &self.altitudes
    }

    /// Centre at the bottom altitude
    #[must_use]
    pub fn reference_position(&self) -> Position {
        Position::from_location(self.center, self.altitudes.bottom)
    }
}

/// Sphere around a centre position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereAirspace {
    center: Position,
    radius: f64,
    datum: AltitudeDatum,
}

impl SphereAirspace {
    /// # Errors
    /// Returns [`GeometryError::InvalidShape`] for a negative or non-finite
    /// radius or a non-finite centre altitude
    pub fn new(center: Position, radius: f64, datum: AltitudeDatum) -> GeometryResult<Self> {
        check_length("radius", radius)?;
        check_altitude("centre altitude", center.altitude)?;
        Ok(Self {
            center,
            radius,
            datum,
        })
    }

    #[inline]
    #[must_use]
    pub fn center(&self) -> Position {
        self.center
    }

    #[inline]
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    #[must_use]
    pub fn datum(&self) -> AltitudeDatum {
        self.datum
    }

    /// Altitudes as `(centre, centre + radius)`
    #[inline]
    #[must_use]
    pub fn altitudes(&self) -> (f64, f64) {
        (self.center.altitude, self.center.altitude + self.radius)
    }

    /// Move the sphere to a new centre
    pub fn move_to(&mut self, center: Position) {
        self.center = center;
    }

    #[inline]
    #[must_use]
    pub fn reference_position(&self) -> Position {
        self.center
    }
}
