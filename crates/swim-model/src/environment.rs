//! Planning environments
//!
//! The spatial domain a planner searches: a discretised grid of box cells or
//! a continuous region sampled at a resolution. Both are bounded by an
//! [`OrientedBox`] derived from a geodetic sector.

use crate::error::{GeometryError, GeometryResult};
use crate::globe::OrientedBox;

/// Regular grid of cells covering a box
///
/// The box is divided `division` times along `r`; `s` and `t` are divided
/// into as many cells as fit the resulting side length, at least one.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanningGrid {
    bounds: OrientedBox,
    cells: [u32; 3],
    normalizer: f64,
}

impl PlanningGrid {
    /// Divide a box into cells
    ///
    /// # Errors
    /// Returns [`GeometryError::InvalidShape`] for a zero division
    pub fn new(bounds: OrientedBox, division: u32) -> GeometryResult<Self> {
        if division == 0 {
            return Err(GeometryError::invalid_shape("grid division must be positive"));
        }

        let side = bounds.r_length() / f64::from(division);
        let s_cells = Self::cells_along(bounds.s_length(), side);
        let t_cells = Self::cells_along(bounds.t_length(), side);
        tracing::debug!(division, s_cells, t_cells, side, "dividing planning grid");

        Ok(Self {
            normalizer: bounds.diameter(),
            bounds,
            cells: [division, s_cells, t_cells],
        })
    }

    fn cells_along(length: f64, side: f64) -> u32 {
        let cells = (length / side).round();
        if cells >= f64::from(u32::MAX) {
            u32::MAX
        } else if cells >= 1.0 {
            cells as u32
        } else {
            1
        }
    }

    #[inline]
    #[must_use]
    pub fn bounds(&self) -> &OrientedBox {
        &self.bounds
    }

    /// Number of cells along `r`, `s` and `t`
    #[inline]
    #[must_use]
    pub fn cells(&self) -> [u32; 3] {
        self.cells
    }

    #[inline]
    #[must_use]
    pub fn normalizer(&self) -> f64 {
        self.normalizer
    }

    /// Whether the grid is subdivided into more than one cell
    #[must_use]
    pub fn has_children(&self) -> bool {
        self.cells.iter().any(|&c| c > 1)
    }

    /// Cell at grid indices, `None` when out of range
    #[must_use]
    pub fn cell(&self, r: u32, s: u32, t: u32) -> Option<OrientedBox> {
        let indices = [r, s, t];
        if indices.iter().zip(self.cells).any(|(&i, n)| i >= n) {
            return None;
        }

        let extents = [
            self.bounds.r_length(),
            self.bounds.s_length(),
            self.bounds.t_length(),
        ];
        let mut offsets = [0.0; 3];
        let mut lengths = [0.0; 3];
        for axis in 0..3 {
            lengths[axis] = extents[axis] / f64::from(self.cells[axis]);
            offsets[axis] = lengths[axis] * f64::from(indices[axis]);
        }
        self.bounds.sub_box(offsets, lengths).ok()
    }
}

/// Continuous planning region
#[derive(Debug, Clone, PartialEq)]
pub struct PlanningContinuum {
    bounds: OrientedBox,
    resolution: f64,
    normalizer: f64,
}

impl PlanningContinuum {
    /// Sampling resolution in metres when none is configured
    pub const DEFAULT_RESOLUTION: f64 = 50.0;

    /// # Errors
    /// Returns [`GeometryError::InvalidShape`] for a non-positive resolution
    pub fn new(bounds: OrientedBox, resolution: f64) -> GeometryResult<Self> {
        if !(resolution.is_finite() && resolution > 0.0) {
            return Err(GeometryError::invalid_shape(format!(
                "continuum resolution must be positive, got {resolution}"
            )));
        }
        Ok(Self {
            normalizer: bounds.diameter(),
            bounds,
            resolution,
        })
    }

    #[inline]
    #[must_use]
    pub fn bounds(&self) -> &OrientedBox {
        &self.bounds
    }

    #[inline]
    #[must_use]
    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    #[inline]
    #[must_use]
    pub fn normalizer(&self) -> f64 {
        self.normalizer
    }
}

/// Spatial planning domain
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Grid(PlanningGrid),
    Continuum(PlanningContinuum),
}

impl Environment {
    /// Environment kind used in diagnostics
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Grid(_) => "grid",
            Self::Continuum(_) => "continuum",
        }
    }

    #[must_use]
    pub fn bounds(&self) -> &OrientedBox {
        match self {
            Self::Grid(grid) => grid.bounds(),
            Self::Continuum(continuum) => continuum.bounds(),
        }
    }

    /// Length normalising distances into costs
    #[must_use]
    pub fn normalizer(&self) -> f64 {
        match self {
            Self::Grid(grid) => grid.normalizer(),
            Self::Continuum(continuum) => continuum.normalizer(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Vec3;

    fn unit_axes() -> [Vec3; 3] {
        [
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
        ]
    }

    fn bounds(r: f64, s: f64, t: f64) -> OrientedBox {
        OrientedBox::new(Vec3::ZERO, unit_axes(), [r, s, t]).unwrap()
    }

    #[test]
    fn grid_cell_counts_follow_side_length() {
        let grid = PlanningGrid::new(bounds(1000.0, 2400.0, 100.0), 10).unwrap();
        // side 100: s = round(24) and t = round(1)
        assert_eq!(grid.cells(), [10, 24, 1]);
        assert!(grid.has_children());
    }

    #[test]
    fn thin_dimension_gets_one_cell() {
        let grid = PlanningGrid::new(bounds(1000.0, 1000.0, 10.0), 4).unwrap();
        assert_eq!(grid.cells()[2], 1);
        let cell = grid.cell(0, 0, 0).unwrap();
        assert!((cell.t_length() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn first_cell_reveals_division() {
        let grid = PlanningGrid::new(bounds(900.0, 300.0, 300.0), 3).unwrap();
        let cell = grid.cell(0, 0, 0).unwrap();
        assert_eq!((grid.bounds().r_length() / cell.r_length()).round(), 3.0);

        let last = grid.cell(2, 0, 0).unwrap();
        assert_eq!(last.top_upper_right().x, 900.0);
        assert!(grid.cell(3, 0, 0).is_none());
    }

    #[test]
    fn zero_division_is_rejected() {
        assert!(PlanningGrid::new(bounds(1.0, 1.0, 1.0), 0).is_err());
    }

    #[test]
    fn continuum_normalizer_is_diameter() {
        let continuum = PlanningContinuum::new(bounds(3.0, 4.0, 12.0), 1.0).unwrap();
        assert_eq!(continuum.normalizer(), 13.0);
        assert!(PlanningContinuum::new(bounds(1.0, 1.0, 1.0), 0.0).is_err());

        let environment = Environment::Continuum(continuum);
        assert_eq!(environment.name(), "continuum");
        assert_eq!(environment.normalizer(), 13.0);
    }
}
