//! Planning environment codecs

use swim_document as doc;
use swim_model::{Environment, Globe, PlanningContinuum, PlanningGrid};

use crate::codec::{exactly_one, Codec};
use crate::error::{ConversionError, ConversionResult};
use crate::geometry::GeometricBoxCodec;

/// Division recovered from the size of the first cell, 1 for an undivided grid
fn division_of(grid: &PlanningGrid) -> u32 {
    if !grid.has_children() {
        return 1;
    }
    let Some(cell) = grid.cell(0, 0, 0) else {
        return grid.cells()[0];
    };
    let exact = grid.bounds().r_length() / cell.r_length();
    let ratio = exact.round();
    if (exact - ratio).abs() > 1e-6 {
        tracing::debug!(exact, division = ratio, "rounding grid division");
    }
    if ratio >= f64::from(u32::MAX) {
        u32::MAX
    } else if ratio >= 1.0 {
        ratio as u32
    } else {
        1
    }
}

/// Grid node to planning grid on a globe
#[derive(Debug, Clone, Copy)]
pub struct GridCodec<'a> {
    pub globe: &'a Globe,
}

impl Codec for GridCodec<'_> {
    type External = doc::PlanningGrid;
    type Internal = PlanningGrid;

    fn decode(&self, node: &doc::PlanningGrid) -> ConversionResult<PlanningGrid> {
        if node.division == 0 {
            return Err(ConversionError::malformed("grid.division", "division must be positive"));
        }
        let bounds = GeometricBoxCodec::new(self.globe).decode(&node.geometric_box())?;
        Ok(PlanningGrid::new(bounds, node.division)?)
    }

    fn encode(&self, grid: &PlanningGrid) -> ConversionResult<doc::PlanningGrid> {
        let bounds = GeometricBoxCodec::new(self.globe).encode(grid.bounds())?;
        Ok(doc::PlanningGrid {
            south_west: bounds.south_west,
            north_east: bounds.north_east,
            bottom: bounds.bottom,
            top: bounds.top,
            division: division_of(grid),
        })
    }
}

/// Continuum node to planning continuum on a globe
#[derive(Debug, Clone, Copy)]
pub struct ContinuumCodec<'a> {
    pub globe: &'a Globe,
}

impl Codec for ContinuumCodec<'_> {
    type External = doc::PlanningContinuum;
    type Internal = PlanningContinuum;

    fn decode(&self, node: &doc::PlanningContinuum) -> ConversionResult<PlanningContinuum> {
        let bounds = GeometricBoxCodec::new(self.globe).decode(&node.geometric_box())?;
        let resolution = node.resolution.unwrap_or(PlanningContinuum::DEFAULT_RESOLUTION);
        Ok(PlanningContinuum::new(bounds, resolution)?)
    }

    fn encode(&self, continuum: &PlanningContinuum) -> ConversionResult<doc::PlanningContinuum> {
        let bounds = GeometricBoxCodec::new(self.globe).encode(continuum.bounds())?;
        Ok(doc::PlanningContinuum {
            south_west: bounds.south_west,
            north_east: bounds.north_east,
            bottom: bounds.bottom,
            top: bounds.top,
            resolution: Some(continuum.resolution()),
        })
    }
}

enum Alternative<'n> {
    Grid(&'n doc::PlanningGrid),
    Continuum(&'n doc::PlanningContinuum),
}

/// Environment node to grid or continuum on a globe
#[derive(Debug, Clone, Copy)]
pub struct EnvironmentCodec<'a> {
    pub globe: &'a Globe,
}

impl<'a> EnvironmentCodec<'a> {
    #[must_use]
    pub const fn new(globe: &'a Globe) -> Self {
        Self { globe }
    }
}

impl Codec for EnvironmentCodec<'_> {
    type External = doc::Environment;
    type Internal = Environment;

    fn decode(&self, node: &doc::Environment) -> ConversionResult<Environment> {
        let globe = self.globe;
        let environment = match exactly_one(
            "environment",
            [
                ("grid", node.grid.as_ref().map(Alternative::Grid)),
                ("continuum", node.continuum.as_ref().map(Alternative::Continuum)),
            ],
        )? {
            Alternative::Grid(grid) => Environment::Grid(GridCodec { globe }.decode(grid)?),
            Alternative::Continuum(continuum) => {
                Environment::Continuum(ContinuumCodec { globe }.decode(continuum)?)
            }
        };
        tracing::debug!(
            environment = environment.name(),
            normalizer = environment.normalizer(),
            "decoded environment"
        );
        Ok(environment)
    }

    fn encode(&self, environment: &Environment) -> ConversionResult<doc::Environment> {
        let globe = self.globe;
        Ok(match environment {
            Environment::Grid(grid) => doc::Environment {
                grid: Some(GridCodec { globe }.encode(grid)?),
                continuum: None,
            },
            Environment::Continuum(continuum) => doc::Environment {
                grid: None,
                continuum: Some(ContinuumCodec { globe }.encode(continuum)?),
            },
        })
    }
}
