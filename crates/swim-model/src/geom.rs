//! Geodetic primitives
//!
//! Angles, geodetic locations and positions, Cartesian vectors and the
//! altitude reference datum shared by every airspace shape.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Planar or geodetic angle
///
/// Stored in degrees so that angles read from documents convert back
/// without rounding.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Angle {
    degrees: f64,
}

impl Angle {
    /// Zero angle
    pub const ZERO: Angle = Angle { degrees: 0.0 };

    /// Create from degrees
    #[inline]
    #[must_use]
    pub const fn from_degrees(degrees: f64) -> Self {
        Self { degrees }
    }

    /// Create from radians
    #[inline]
    #[must_use]
    pub fn from_radians(radians: f64) -> Self {
        Self {
            degrees: radians.to_degrees(),
        }
    }

    /// Angle in degrees
    #[inline]
    #[must_use]
    pub const fn degrees(&self) -> f64 {
        self.degrees
    }

    /// Angle in radians
    #[inline]
    #[must_use]
    pub fn radians(&self) -> f64 {
        self.degrees.to_radians()
    }

    #[inline]
    #[must_use]
    pub fn sin(&self) -> f64 {
        self.radians().sin()
    }

    #[inline]
    #[must_use]
    pub fn cos(&self) -> f64 {
        self.radians().cos()
    }

    /// Midpoint between two angles (no wrap-around handling)
    #[inline]
    #[must_use]
    pub fn midpoint(a: Angle, b: Angle) -> Angle {
        Angle::from_degrees((a.degrees + b.degrees) / 2.0)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees)
    }
}

/// Geodetic location without altitude
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LatLon {
    pub latitude: Angle,
    pub longitude: Angle,
}

impl LatLon {
    #[inline]
    #[must_use]
    pub const fn new(latitude: Angle, longitude: Angle) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    #[inline]
    #[must_use]
    pub const fn from_degrees(latitude: f64, longitude: f64) -> Self {
        Self::new(Angle::from_degrees(latitude), Angle::from_degrees(longitude))
    }

    /// Great-circle-naive midpoint used for airspace reference locations
    #[inline]
    #[must_use]
    pub fn midpoint(a: LatLon, b: LatLon) -> LatLon {
        LatLon::new(
            Angle::midpoint(a.latitude, b.latitude),
            Angle::midpoint(a.longitude, b.longitude),
        )
    }
}

/// Geodetic location with altitude in metres
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub latitude: Angle,
    pub longitude: Angle,
    pub altitude: f64,
}

impl Position {
    #[inline]
    #[must_use]
    pub const fn new(latitude: Angle, longitude: Angle, altitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude,
        }
    }

    #[inline]
    #[must_use]
    pub fn from_degrees(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self::new(
            Angle::from_degrees(latitude),
            Angle::from_degrees(longitude),
            altitude,
        )
    }

    #[inline]
    #[must_use]
    pub fn from_location(location: LatLon, altitude: f64) -> Self {
        Self::new(location.latitude, location.longitude, altitude)
    }

    /// Drop the altitude component
    #[inline]
    #[must_use]
    pub fn location(&self) -> LatLon {
        LatLon::new(self.latitude, self.longitude)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.6}, {:.6}, {:.3} m)",
            self.latitude.degrees(),
            self.longitude.degrees(),
            self.altitude
        )
    }
}

/// Cartesian point or direction in globe coordinates (metres)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);

    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    #[must_use]
    pub fn dot(&self, other: &Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    #[must_use]
    pub fn cross(&self, other: &Vec3) -> Vec3 {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    #[inline]
    #[must_use]
    pub fn length(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction, `None` for the zero vector
    #[must_use]
    pub fn normalize(&self) -> Option<Vec3> {
        let length = self.length();
        if length == 0.0 || !length.is_finite() {
            None
        } else {
            Some(*self * (1.0 / length))
        }
    }

    #[inline]
    #[must_use]
    pub fn distance_to(&self, other: &Vec3) -> f64 {
        (*self - *other).length()
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f64) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

/// Altitude reference datum of an airspace bound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AltitudeDatum {
    /// Altitude relative to mean sea level
    #[default]
    AboveMeanSeaLevel,
    /// Altitude relative to the terrain below
    AboveGroundLevel,
    /// Altitude relative to a ground reference point
    AboveGroundReference,
}

impl AltitudeDatum {
    pub const ABOVE_MEAN_SEA_LEVEL_KEY: &'static str = "gov.nasa.worldwind.avkey.AboveMeanSeaLevel";
    pub const ABOVE_GROUND_LEVEL_KEY: &'static str = "gov.nasa.worldwind.avkey.AboveGroundLevel";
    pub const ABOVE_GROUND_REFERENCE_KEY: &'static str =
        "gov.nasa.worldwind.avkey.AboveGroundReference";

    /// Reference key understood by the rendering layer
    #[must_use]
    pub const fn as_key(&self) -> &'static str {
        match self {
            Self::AboveMeanSeaLevel => Self::ABOVE_MEAN_SEA_LEVEL_KEY,
            Self::AboveGroundLevel => Self::ABOVE_GROUND_LEVEL_KEY,
            Self::AboveGroundReference => Self::ABOVE_GROUND_REFERENCE_KEY,
        }
    }

    /// Resolve a reference key
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            Self::ABOVE_MEAN_SEA_LEVEL_KEY => Some(Self::AboveMeanSeaLevel),
            Self::ABOVE_GROUND_LEVEL_KEY => Some(Self::AboveGroundLevel),
            Self::ABOVE_GROUND_REFERENCE_KEY => Some(Self::AboveGroundReference),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_degrees_roundtrip() {
        let angle = Angle::from_degrees(47.25);
        assert!((angle.degrees() - 47.25).abs() < 1e-12);
        assert!((Angle::from_degrees(180.0).radians() - std::f64::consts::PI).abs() < 1e-15);
    }

    #[test]
    fn vec3_cross_is_orthogonal() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-2.0, 0.5, 4.0);
        let c = a.cross(&b);
        assert!(c.dot(&a).abs() < 1e-12);
        assert!(c.dot(&b).abs() < 1e-12);
    }

    #[test]
    fn zero_vector_has_no_direction() {
        assert!(Vec3::ZERO.normalize().is_none());
        let unit = Vec3::new(0.0, 3.0, 4.0).normalize().unwrap();
        assert!((unit.length() - 1.0).abs() < 1e-15);
    }

    #[test]
    fn datum_keys() {
        for datum in [
            AltitudeDatum::AboveMeanSeaLevel,
            AltitudeDatum::AboveGroundLevel,
            AltitudeDatum::AboveGroundReference,
        ] {
            assert_eq!(AltitudeDatum::from_key(datum.as_key()), Some(datum));
        }
        assert_eq!(AltitudeDatum::from_key("bogus"), None);
        assert_eq!(AltitudeDatum::default(), AltitudeDatum::AboveMeanSeaLevel);
    }
}
