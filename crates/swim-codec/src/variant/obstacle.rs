//! Obstacle codecs

use swim_document as doc;
use swim_model::{Obstacle, ObstacleShape};

use super::depiction::DepictionCodec;
use crate::codec::{exactly_one, Codec};
use crate::error::ConversionResult;
use crate::geometry::{BoxCodec, CylinderCodec, SphereCodec};
use crate::leaf::CostIntervalCodec;

enum Alternative<'n> {
    Box(&'n doc::ObstacleBox),
    Cylinder(&'n doc::ObstacleCylinder),
    Sphere(&'n doc::ObstacleSphere),
}

/// Obstacle node to obstacle
#[derive(Debug, Clone, Copy, Default)]
pub struct ObstacleCodec;

impl ObstacleCodec {
    fn finish(
        &self,
        shape: ObstacleShape,
        cost_interval: &doc::CostInterval,
        depiction: Option<&doc::Depiction>,
    ) -> ConversionResult<Obstacle> {
        let depiction = DepictionCodec::new(shape.reference_position()).decode_optional(depiction)?;
        let mut obstacle = Obstacle::new(shape, CostIntervalCodec.decode(cost_interval)?);
        obstacle.depiction = depiction;
        Ok(obstacle)
    }
}

impl Codec for ObstacleCodec {
    type External = doc::ObstacleNode;
    type Internal = Obstacle;

    fn decode(&self, node: &doc::ObstacleNode) -> ConversionResult<Obstacle> {
        let alternative = exactly_one(
            "obstacle",
            [
                ("box", node.box_.as_ref().map(Alternative::Box)),
                ("cylinder", node.cylinder.as_ref().map(Alternative::Cylinder)),
                ("sphere", node.sphere.as_ref().map(Alternative::Sphere)),
            ],
        )?;

        match alternative {
            Alternative::Box(external) => self.finish(
                ObstacleShape::Box(BoxCodec.decode(&external.shape())?),
                &external.cost_interval,
                external.depiction.as_ref(),
            ),
            Alternative::Cylinder(external) => self.finish(
                ObstacleShape::Cylinder(CylinderCodec.decode(&external.shape())?),
                &external.cost_interval,
                external.depiction.as_ref(),
            ),
            Alternative::Sphere(external) => self.finish(
                ObstacleShape::Sphere(SphereCodec.decode(&external.shape())?),
                &external.cost_interval,
                external.depiction.as_ref(),
            ),
        }
    }

    fn encode(&self, obstacle: &Obstacle) -> ConversionResult<doc::ObstacleNode> {
        let cost_interval = CostIntervalCodec.encode(&obstacle.cost_interval)?;
        let depiction = DepictionCodec::encode_optional(obstacle.depiction.as_ref())?;

        let mut node = doc::ObstacleNode::default();
        match &obstacle.shape {
            ObstacleShape::Box(airspace) => {
                let mut external =
                    doc::ObstacleBox::from_shape(BoxCodec.encode(airspace)?, cost_interval);
                external.depiction = depiction;
                node.box_ = Some(external);
            }
            ObstacleShape::Cylinder(cylinder) => {
                let mut external = doc::ObstacleCylinder::from_shape(
                    CylinderCodec.encode(cylinder)?,
                    cost_interval,
                );
                external.depiction = depiction;
                node.cylinder = Some(external);
            }
            ObstacleShape::Sphere(sphere) => {
                let mut external =
                    doc::ObstacleSphere::from_shape(SphereCodec.encode(sphere)?, cost_interval);
                external.depiction = depiction;
                node.sphere = Some(external);
            }
        }
        Ok(node)
    }
}

/// Obstacle list to obstacles in document order
#[derive(Debug, Clone, Copy, Default)]
pub struct ObstaclesCodec;

impl Codec for ObstaclesCodec {
    type External = doc::Obstacles;
    type Internal = Vec<Obstacle>;

    fn decode(&self, node: &doc::Obstacles) -> ConversionResult<Vec<Obstacle>> {
        node.obstacle.iter().map(|o| ObstacleCodec.decode(o)).collect()
    }

    fn encode(&self, obstacles: &Vec<Obstacle>) -> ConversionResult<doc::Obstacles> {
        Ok(doc::Obstacles {
            obstacle: obstacles
                .iter()
                .map(|o| ObstacleCodec.encode(o))
                .collect::<ConversionResult<_>>()?,
        })
    }
}
