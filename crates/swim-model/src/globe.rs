//! Globe geodesy
//!
//! Projection between geodetic positions and Cartesian globe points on an
//! ellipsoid of revolution, local east/north/up frames, and derivation of
//! oriented bounding boxes from geodetic sectors.
//!
//! Cartesian coordinates are earth-centred, earth-fixed: `x` towards the
//! prime meridian on the equator, `z` towards the north pole.

use crate::error::{GeometryError, GeometryResult};
use crate::geom::{Angle, LatLon, Position, Vec3};

/// Globe model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlobeKind {
    /// WGS84 reference ellipsoid
    Ellipsoidal,
    /// Sphere with the mean earth radius
    Spherical,
}

/// Ellipsoidal globe used to project scenario geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Globe {
    kind: GlobeKind,
    equatorial_radius: f64,
    polar_radius: f64,
}

impl Globe {
    pub const WGS84_EQUATORIAL_RADIUS: f64 = 6_378_137.0;
    pub const WGS84_POLAR_RADIUS: f64 = 6_356_752.314_245;
    pub const MEAN_EARTH_RADIUS: f64 = 6_371_008.8;

    const MAX_ITERATIONS: usize = 16;
    /// Lattice points per sector edge sampled for bounding boxes
    const BOUNDING_SAMPLES: usize = 9;

    /// WGS84 earth
    #[inline]
    #[must_use]
    pub const fn earth() -> Self {
        Self {
            kind: GlobeKind::Ellipsoidal,
            equatorial_radius: Self::WGS84_EQUATORIAL_RADIUS,
            polar_radius: Self::WGS84_POLAR_RADIUS,
        }
    }

    /// Spherical earth with the mean earth radius
    #[inline]
    #[must_use]
    pub const fn spherical_earth() -> Self {
        Self {
            kind: GlobeKind::Spherical,
            equatorial_radius: Self::MEAN_EARTH_RADIUS,
            polar_radius: Self::MEAN_EARTH_RADIUS,
        }
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> GlobeKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn equatorial_radius(&self) -> f64 {
        self.equatorial_radius
    }

    #[inline]
    #[must_use]
    pub const fn polar_radius(&self) -> f64 {
        self.polar_radius
    }

    /// First eccentricity squared
    #[inline]
    #[must_use]
    pub fn eccentricity_squared(&self) -> f64 {
        let a = self.equatorial_radius;
        let b = self.polar_radius;
        (a * a - b * b) / (a * a)
    }

    fn prime_vertical_radius(&self, latitude: Angle) -> f64 {
        let sin = latitude.sin();
        self.equatorial_radius / (1.0 - self.eccentricity_squared() * sin * sin).sqrt()
    }

    /// Project a geodetic position to a Cartesian globe point
    #[must_use]
    pub fn compute_point_from_position(&self, position: &Position) -> Vec3 {
        let e2 = self.eccentricity_squared();
        let n = self.prime_vertical_radius(position.latitude);
        let (sin_lat, cos_lat) = (position.latitude.sin(), position.latitude.cos());
        let (sin_lon, cos_lon) = (position.longitude.sin(), position.longitude.cos());
        let h = position.altitude;

        Vec3::new(
            (n + h) * cos_lat * cos_lon,
            (n + h) * cos_lat * sin_lon,
            (n * (1.0 - e2) + h) * sin_lat,
        )
    }

    /// Project a Cartesian globe point back to a geodetic position
    ///
    /// Uses fixed-point iteration on the geodetic latitude; converges to
    /// sub-millimetre altitude precision within a few iterations.
    ///
    /// # Errors
    /// Returns [`GeometryError::Projection`] for non-finite points or the
    /// globe centre.
    pub fn compute_position_from_point(&self, point: &Vec3) -> GeometryResult<Position> {
        if !(point.x.is_finite() && point.y.is_finite() && point.z.is_finite()) {
            return Err(GeometryError::Projection(format!(
                "non-finite point ({}, {}, {})",
                point.x, point.y, point.z
            )));
        }
        if point.length() == 0.0 {
            return Err(GeometryError::Projection("point at globe centre".to_string()));
        }

        let e2 = self.eccentricity_squared();
        let p = (point.x * point.x + point.y * point.y).sqrt();
        let longitude = point.y.atan2(point.x);

        let mut latitude = point.z.atan2(p * (1.0 - e2));
        for _ in 0..Self::MAX_ITERATIONS {
            let n = self.prime_vertical_radius(Angle::from_radians(latitude));
            let next = (point.z + e2 * n * latitude.sin()).atan2(p);
            let converged = (next - latitude).abs() < 1e-15;
            latitude = next;
            if converged {
                break;
            }
        }

        let latitude = Angle::from_radians(latitude);
        let n = self.prime_vertical_radius(latitude);
        let altitude = p * latitude.cos()
            + (point.z + e2 * n * latitude.sin()) * latitude.sin()
            - n;

        Ok(Position::new(latitude, Angle::from_radians(longitude), altitude))
    }

    /// Local east, north and up unit vectors at a location
    #[must_use]
    pub fn local_frame(&self, location: &LatLon) -> [Vec3; 3] {
        let (sin_lat, cos_lat) = (location.latitude.sin(), location.latitude.cos());
        let (sin_lon, cos_lon) = (location.longitude.sin(), location.longitude.cos());

        let east = Vec3::new(-sin_lon, cos_lon, 0.0);
        let north = Vec3::new(-sin_lat * cos_lon, -sin_lat * sin_lon, cos_lat);
        let up = Vec3::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat);
        [east, north, up]
    }

    /// Derive the oriented volume enclosing a sector between two altitudes
    ///
    /// The box is aligned with the local frame at the sector centroid and
    /// spans every sample of a lattice over the sector at both altitudes.
    /// It keeps the [`GeodeticExtent`] it was derived from.
    ///
    /// # Errors
    /// - [`GeometryError::DegenerateSector`] if the sector spans no area
    /// - [`GeometryError::ZeroVolume`] if `top` does not exceed `bottom`
    pub fn compute_bounding_box(
        &self,
        sector: &Sector,
        bottom: f64,
        top: f64,
    ) -> GeometryResult<OrientedBox> {
        sector.validate()?;
        if !(bottom.is_finite() && top.is_finite()) {
            return Err(GeometryError::invalid_shape(format!(
                "non-finite altitudes [{bottom}, {top}]"
            )));
        }
        if top <= bottom {
            return Err(GeometryError::ZeroVolume {
                axis: "t",
                length: top - bottom,
            });
        }

        let centroid = sector.centroid();
        let axes = self.local_frame(&centroid);
        let anchor = self.compute_point_from_position(&Position::from_location(centroid, bottom));

        let mut min = [f64::INFINITY; 3];
        let mut max = [f64::NEG_INFINITY; 3];
        for location in sector.lattice(Self::BOUNDING_SAMPLES) {
            for altitude in [bottom, top] {
                let position = Position::from_location(location, altitude);
                let offset = self.compute_point_from_position(&position) - anchor;
                for (axis, (lo, hi)) in axes.iter().zip(min.iter_mut().zip(max.iter_mut())) {
                    let projection = offset.dot(axis);
                    *lo = lo.min(projection);
                    *hi = hi.max(projection);
                }
            }
        }

        let origin = axes
            .iter()
            .zip(min)
            .fold(anchor, |point, (axis, offset)| point + *axis * offset);
        let lengths = [max[0] - min[0], max[1] - min[1], max[2] - min[2]];

        Ok(OrientedBox::new(origin, axes, lengths)?.with_extent(GeodeticExtent {
            sector: *sector,
            bottom,
            top,
        }))
    }

    /// Geodetic extent of a box
    ///
    /// Boxes derived by [`Globe::compute_bounding_box`] report the extent
    /// they were derived from. Other boxes are deprojected at their
    /// bottom-lower-left and top-upper-right corners.
    ///
    /// # Errors
    /// Returns [`GeometryError::Projection`] if a corner cannot be deprojected
    pub fn compute_extent(&self, bounds: &OrientedBox) -> GeometryResult<GeodeticExtent> {
        if let Some(extent) = bounds.extent() {
            return Ok(*extent);
        }
        let bottom = self.compute_position_from_point(&bounds.bottom_lower_left())?;
        let top = self.compute_position_from_point(&bounds.top_upper_right())?;
        Ok(GeodeticExtent {
            sector: Sector::from_corners(bottom.location(), top.location()),
            bottom: bottom.altitude,
            top: top.altitude,
        })
    }
}

impl Default for Globe {
    fn default() -> Self {
        Self::earth()
    }
}

/// Geodetic rectangle bounded by latitudes and longitudes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sector {
    pub min_latitude: Angle,
    pub max_latitude: Angle,
    pub min_longitude: Angle,
    pub max_longitude: Angle,
}

impl Sector {
    #[inline]
    #[must_use]
    pub const fn new(
        min_latitude: Angle,
        max_latitude: Angle,
        min_longitude: Angle,
        max_longitude: Angle,
    ) -> Self {
        Self {
            min_latitude,
            max_latitude,
            min_longitude,
            max_longitude,
        }
    }

    /// Sector spanned by south-west and north-east corners
    #[inline]
    #[must_use]
    pub fn from_corners(south_west: LatLon, north_east: LatLon) -> Self {
        Self::new(
            south_west.latitude,
            north_east.latitude,
            south_west.longitude,
            north_east.longitude,
        )
    }

    #[inline]
    #[must_use]
    pub fn south_west(&self) -> LatLon {
        LatLon::new(self.min_latitude, self.min_longitude)
    }

    #[inline]
    #[must_use]
    pub fn north_east(&self) -> LatLon {
        LatLon::new(self.max_latitude, self.max_longitude)
    }

    #[inline]
    #[must_use]
    pub fn centroid(&self) -> LatLon {
        LatLon::midpoint(self.south_west(), self.north_east())
    }

    /// Evenly spaced `n × n` locations covering the sector, corners included
    #[must_use]
    pub fn lattice(&self, n: usize) -> Vec<LatLon> {
        let n = n.max(2);
        let step = |min: Angle, max: Angle, i: usize| {
            let fraction = i as f64 / (n - 1) as f64;
            Angle::from_degrees(min.degrees() + (max.degrees() - min.degrees()) * fraction)
        };
        (0..n)
            .flat_map(|i| {
                (0..n).map(move |j| {
                    LatLon::new(
                        step(self.min_latitude, self.max_latitude, i),
                        step(self.min_longitude, self.max_longitude, j),
                    )
                })
            })
            .collect()
    }

    /// Check the sector spans a finite, non-empty area
    ///
    /// # Errors
    /// Returns [`GeometryError::DegenerateSector`] otherwise
    pub fn validate(&self) -> GeometryResult<()> {
        let bounds = [
            self.min_latitude,
            self.max_latitude,
            self.min_longitude,
            self.max_longitude,
        ];
        if bounds.iter().any(|a| !a.radians().is_finite()) {
            return Err(GeometryError::degenerate_sector("non-finite bounds"));
        }
        if self.min_latitude >= self.max_latitude {
            return Err(GeometryError::degenerate_sector(format!(
                "latitude span [{}, {}] is empty",
                self.min_latitude, self.max_latitude
            )));
        }
        if self.min_longitude >= self.max_longitude {
            return Err(GeometryError::degenerate_sector(format!(
                "longitude span [{}, {}] is empty",
                self.min_longitude, self.max_longitude
            )));
        }
        Ok(())
    }
}

/// Sector extruded between two altitudes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeodeticExtent {
    pub sector: Sector,
    pub bottom: f64,
    pub top: f64,
}

/// Oriented box in globe coordinates
///
/// Spanned from `origin` along three orthonormal axes `r`, `s` and `t` by
/// positive lengths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedBox {
    origin: Vec3,
    axes: [Vec3; 3],
    lengths: [f64; 3],
    extent: Option<GeodeticExtent>,
}

impl OrientedBox {
    const AXIS_NAMES: [&'static str; 3] = ["r", "s", "t"];
    /// Slack in metres for points on a face
    const CONTAINMENT_TOLERANCE: f64 = 1e-6;

    /// Create a box from origin, unit axes and extents
    ///
    /// # Errors
    /// Returns [`GeometryError::ZeroVolume`] if an extent is not positive
    pub fn new(origin: Vec3, axes: [Vec3; 3], lengths: [f64; 3]) -> GeometryResult<Self> {
        for (axis, length) in Self::AXIS_NAMES.iter().zip(lengths) {
            if !(length.is_finite() && length > 0.0) {
                return Err(GeometryError::ZeroVolume { axis, length });
            }
        }
        Ok(Self {
            origin,
            axes,
            lengths,
            extent: None,
        })
    }

    /// Attach the geodetic extent the box encloses
    #[inline]
    #[must_use]
    pub fn with_extent(mut self, extent: GeodeticExtent) -> Self {
        self.extent = Some(extent);
        self
    }

    /// Geodetic extent the box was derived from, if any
    #[inline]
    #[must_use]
    pub fn extent(&self) -> Option<&GeodeticExtent> {
        self.extent.as_ref()
    }

    #[inline]
    #[must_use]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    #[inline]
    #[must_use]
    pub fn unit_axes(&self) -> [Vec3; 3] {
        self.axes
    }

    #[inline]
    #[must_use]
    pub fn r_length(&self) -> f64 {
        self.lengths[0]
    }

    #[inline]
    #[must_use]
    pub fn s_length(&self) -> f64 {
        self.lengths[1]
    }

    #[inline]
    #[must_use]
    pub fn t_length(&self) -> f64 {
        self.lengths[2]
    }

    /// Length of the box diagonal
    #[inline]
    #[must_use]
    pub fn diameter(&self) -> f64 {
        self.lengths.iter().map(|l| l * l).sum::<f64>().sqrt()
    }

    /// Corner selected by the far (`true`) or near (`false`) side of each axis
    #[must_use]
    pub fn corner(&self, r: bool, s: bool, t: bool) -> Vec3 {
        [r, s, t]
            .iter()
            .zip(self.axes.iter().zip(self.lengths))
            .filter(|(far, _)| **far)
            .fold(self.origin, |point, (_, (axis, length))| point + *axis * length)
    }

    #[inline]
    #[must_use]
    pub fn bottom_lower_left(&self) -> Vec3 {
        self.origin
    }

    #[inline]
    #[must_use]
    pub fn top_upper_right(&self) -> Vec3 {
        self.corner(true, true, true)
    }

    /// All eight corners, bottom face first
    #[must_use]
    pub fn corners(&self) -> [Vec3; 8] {
        [
            self.corner(false, false, false),
            self.corner(true, false, false),
            self.corner(true, true, false),
            self.corner(false, true, false),
            self.corner(false, false, true),
            self.corner(true, false, true),
            self.corner(true, true, true),
            self.corner(false, true, true),
        ]
    }

    #[must_use]
    pub fn center(&self) -> Vec3 {
        self.origin
            + self.axes[0] * (self.lengths[0] / 2.0)
            + self.axes[1] * (self.lengths[1] / 2.0)
            + self.axes[2] * (self.lengths[2] / 2.0)
    }

    /// Whether a point lies inside or on the box
    #[must_use]
    pub fn contains(&self, point: &Vec3) -> bool {
        let offset = *point - self.origin;
        self.axes
            .iter()
            .zip(self.lengths)
            .all(|(axis, length)| {
                let projection = offset.dot(axis);
                let tolerance = Self::CONTAINMENT_TOLERANCE;
                (-tolerance..=length + tolerance).contains(&projection)
            })
    }

    /// Sub-box at an offset along each axis with the given extents
    ///
    /// # Errors
    /// Returns [`GeometryError::ZeroVolume`] if an extent is not positive
    pub fn sub_box(&self, offsets: [f64; 3], lengths: [f64; 3]) -> GeometryResult<OrientedBox> {
        let origin = self
            .axes
            .iter()
            .zip(offsets)
            .fold(self.origin, |point, (axis, offset)| point + *axis * offset);
        OrientedBox::new(origin, self.axes, lengths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_sector() -> Sector {
        Sector::from_corners(LatLon::from_degrees(0.0, 0.0), LatLon::from_degrees(1.0, 1.0))
    }

    #[test]
    fn point_position_roundtrip() {
        let globe = Globe::earth();
        let position = Position::from_degrees(49.25, -123.1, 1234.5);
        let point = globe.compute_point_from_position(&position);
        let back = globe.compute_position_from_point(&point).unwrap();

        assert!((back.latitude.degrees() - 49.25).abs() < 1e-9);
        assert!((back.longitude.degrees() + 123.1).abs() < 1e-9);
        assert!((back.altitude - 1234.5).abs() < 1e-4);
    }

    #[test]
    fn equator_prime_meridian_point() {
        let globe = Globe::earth();
        let point = globe.compute_point_from_position(&Position::from_degrees(0.0, 0.0, 0.0));
        assert!((point.x - Globe::WGS84_EQUATORIAL_RADIUS).abs() < 1e-6);
        assert!(point.y.abs() < 1e-6);
        assert!(point.z.abs() < 1e-6);
    }

    #[test]
    fn polar_point_projects_back() {
        let globe = Globe::earth();
        let position = Position::from_degrees(90.0, 0.0, 500.0);
        let point = globe.compute_point_from_position(&position);
        let back = globe.compute_position_from_point(&point).unwrap();
        assert!((back.latitude.degrees() - 90.0).abs() < 1e-9);
        assert!((back.altitude - 500.0).abs() < 1e-3);
    }

    #[test]
    fn globe_centre_cannot_be_projected() {
        assert!(Globe::earth()
            .compute_position_from_point(&Vec3::ZERO)
            .is_err());
    }

    #[test]
    fn local_frame_is_orthonormal() {
        let frame = Globe::earth().local_frame(&LatLon::from_degrees(30.0, 45.0));
        for (i, a) in frame.iter().enumerate() {
            assert!((a.length() - 1.0).abs() < 1e-12);
            for b in frame.iter().skip(i + 1) {
                assert!(a.dot(b).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn bounding_box_keeps_its_extent() {
        let globe = Globe::earth();
        let bbox = globe.compute_bounding_box(&unit_sector(), 0.0, 1000.0).unwrap();

        let extent = globe.compute_extent(&bbox).unwrap();
        assert_eq!(extent.sector, unit_sector());
        assert_eq!((extent.bottom, extent.top), (0.0, 1000.0));
        assert!(bbox.sub_box([0.0; 3], [1.0; 3]).unwrap().extent().is_none());
    }

    #[test]
    fn bounding_box_extents_are_plausible() {
        let bbox = Globe::earth()
            .compute_bounding_box(&unit_sector(), 0.0, 1000.0)
            .unwrap();
        // one degree is roughly 111 km near the equator
        assert!((bbox.r_length() - 111_000.0).abs() < 2_000.0);
        assert!((bbox.s_length() - 110_500.0).abs() < 2_000.0);
        // vertical extent plus the curvature drop towards the corners
        assert!(bbox.t_length() > 1000.0 && bbox.t_length() < 2000.0);
        assert!(bbox.contains(&bbox.center()));
    }

    #[test]
    fn bounding_box_encloses_the_region() {
        let globe = Globe::earth();
        let sectors = [
            Sector::from_corners(LatLon::from_degrees(0.0, 0.0), LatLon::from_degrees(40.0, 1.0)),
            Sector::from_corners(LatLon::from_degrees(0.0, 0.0), LatLon::from_degrees(10.0, 10.0)),
            Sector::from_corners(
                LatLon::from_degrees(-60.0, -170.0),
                LatLon::from_degrees(60.0, 170.0),
            ),
        ];
        for sector in sectors {
            let bbox = globe.compute_bounding_box(&sector, 0.0, 100.0).unwrap();
            for location in sector.lattice(5) {
                for altitude in [0.0, 100.0] {
                    let position = Position::from_location(location, altitude);
                    let point = globe.compute_point_from_position(&position);
                    assert!(bbox.contains(&point), "{sector:?} misses {location:?} at {altitude}");
                }
            }
        }
    }

    #[test]
    fn boxes_without_extent_deproject_corners() {
        let globe = Globe::earth();
        let derived = globe.compute_bounding_box(&unit_sector(), 0.0, 1000.0).unwrap();
        let bare = OrientedBox::new(
            derived.origin(),
            derived.unit_axes(),
            [derived.r_length(), derived.s_length(), derived.t_length()],
        )
        .unwrap();

        let extent = globe.compute_extent(&bare).unwrap();
        let bottom = globe.compute_position_from_point(&bare.bottom_lower_left()).unwrap();
        assert_eq!(extent.sector.south_west(), bottom.location());
        assert_eq!(extent.bottom, bottom.altitude);
    }

    #[test]
    fn degenerate_sector_is_rejected() {
        let sector =
            Sector::from_corners(LatLon::from_degrees(1.0, 0.0), LatLon::from_degrees(1.0, 1.0));
        assert!(matches!(
            Globe::earth().compute_bounding_box(&sector, 0.0, 100.0),
            Err(GeometryError::DegenerateSector(_))
        ));
    }

    #[test]
    fn flat_box_is_rejected() {
        assert!(matches!(
            Globe::earth().compute_bounding_box(&unit_sector(), 100.0, 100.0),
            Err(GeometryError::ZeroVolume { axis: "t", .. })
        ));
    }

    proptest::proptest! {
        #[test]
        fn projection_roundtrip(
            lat in -89.9f64..89.9,
            lon in -179.9f64..179.9,
            alt in -500.0f64..20_000.0,
        ) {
            let globe = Globe::earth();
            let point = globe.compute_point_from_position(&Position::from_degrees(lat, lon, alt));
            let back = globe.compute_position_from_point(&point).unwrap();

            proptest::prop_assert!((back.latitude.degrees() - lat).abs() < 1e-9);
            proptest::prop_assert!((back.longitude.degrees() - lon).abs() < 1e-9);
            proptest::prop_assert!((back.altitude - alt).abs() < 1e-3);
        }
    }

    #[test]
    fn sub_box_offsets_along_axes() {
        let axes = [
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
        ];
        let bbox = OrientedBox::new(Vec3::ZERO, axes, [10.0, 20.0, 30.0]).unwrap();
        let cell = bbox.sub_box([5.0, 10.0, 15.0], [5.0, 10.0, 15.0]).unwrap();
        assert_eq!(cell.origin(), Vec3::new(5.0, 10.0, 15.0));
        assert_eq!(cell.top_upper_right(), bbox.top_upper_right());
        assert!((bbox.diameter() - 1400.0_f64.sqrt()).abs() < 1e-12);
    }
}
