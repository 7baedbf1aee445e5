//! Waypoint and trajectory codecs

use swim_document as doc;
use swim_model::{Trajectory, Waypoint};

use super::depiction::DepictionCodec;
use crate::codec::{finite, Codec};
use crate::error::ConversionResult;
use crate::leaf::{DurationCodec, PositionCodec, TimeCodec};

/// Waypoint node to waypoint
#[derive(Debug, Clone, Copy, Default)]
pub struct WaypointCodec;

impl Codec for WaypointCodec {
    type External = doc::Waypoint;
    type Internal = Waypoint;

    fn decode(&self, node: &doc::Waypoint) -> ConversionResult<Waypoint> {
        let position = PositionCodec.decode_parts(node.latitude, node.longitude, node.altitude)?;
        let mut waypoint = Waypoint::new(position, node.designator.clone());
        waypoint.cost = node.cost.map(|c| finite("waypoint.cost", c)).transpose()?;
        waypoint.dtg = node.dtg.map(|d| finite("waypoint.dtg", d)).transpose()?;
        waypoint.ttg = node
            .ttg
            .as_deref()
            .map(|t| DurationCodec.parse("waypoint.ttg", t))
            .transpose()?;
        waypoint.eto = node.eto.as_deref().map(|t| TimeCodec.parse("waypoint.eto", t)).transpose()?;
        waypoint.ato = node.ato.as_deref().map(|t| TimeCodec.parse("waypoint.ato", t)).transpose()?;
        waypoint.depiction = DepictionCodec::new(waypoint.reference_position())
            .decode_optional(node.depiction.as_ref())?;
        Ok(waypoint)
    }

    fn encode(&self, waypoint: &Waypoint) -> ConversionResult<doc::Waypoint> {
        let position = PositionCodec.encode(&waypoint.position)?;
        Ok(doc::Waypoint {
            latitude: position.latitude,
            longitude: position.longitude,
            altitude: position.altitude,
            designator: waypoint.designator.clone(),
            cost: waypoint.cost,
            dtg: waypoint.dtg,
            ttg: waypoint.ttg.as_ref().map(|t| DurationCodec.format(t)),
            eto: waypoint.eto.as_ref().map(|t| TimeCodec.format(t)),
            ato: waypoint.ato.as_ref().map(|t| TimeCodec.format(t)),
            depiction: DepictionCodec::encode_optional(waypoint.depiction.as_ref())?,
        })
    }
}

/// Waypoint list to waypoints in document order
#[derive(Debug, Clone, Copy, Default)]
pub struct WaypointsCodec;

impl Codec for WaypointsCodec {
    type External = doc::Waypoints;
    type Internal = Vec<Waypoint>;

    fn decode(&self, node: &doc::Waypoints) -> ConversionResult<Vec<Waypoint>> {
        node.waypoint.iter().map(|w| WaypointCodec.decode(w)).collect()
    }

    fn encode(&self, waypoints: &Vec<Waypoint>) -> ConversionResult<doc::Waypoints> {
        Ok(doc::Waypoints {
            waypoint: waypoints
                .iter()
                .map(|w| WaypointCodec.encode(w))
                .collect::<ConversionResult<_>>()?,
        })
    }
}

/// Trajectory node to trajectory
///
/// A trajectory depiction is anchored at the first waypoint, so a depicted
/// trajectory needs at least one.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrajectoryCodec;

impl Codec for TrajectoryCodec {
    type External = doc::Trajectory;
    type Internal = Trajectory;

    fn decode(&self, node: &doc::Trajectory) -> ConversionResult<Trajectory> {
        let waypoints = node
            .waypoint
            .iter()
            .map(|w| WaypointCodec.decode(w))
            .collect::<ConversionResult<Vec<_>>>()?;
        let mut trajectory = Trajectory::new(waypoints);
        if let Some(depiction) = &node.depiction {
            let anchor = trajectory.reference_position()?;
            trajectory.depiction = Some(DepictionCodec::new(anchor).decode(depiction)?);
        }
        Ok(trajectory)
    }

    fn encode(&self, trajectory: &Trajectory) -> ConversionResult<doc::Trajectory> {
        Ok(doc::Trajectory {
            waypoint: trajectory
                .waypoints
                .iter()
                .map(|w| WaypointCodec.encode(w))
                .collect::<ConversionResult<_>>()?,
            depiction: DepictionCodec::encode_optional(trajectory.depiction.as_ref())?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConversionError;
    use chrono::Duration;
    use pretty_assertions::assert_eq;
    use swim_model::GeometryError;

    fn waypoint(designator: &str) -> doc::Waypoint {
        doc::Waypoint {
            latitude: 47.5,
            longitude: 8.5,
            altitude: 600.0,
            designator: designator.into(),
            ttg: Some("PT4M".into()),
            eto: Some("2024-06-01T08:00:00Z".into()),
            ..doc::Waypoint::default()
        }
    }

    fn depiction() -> doc::Depiction {
        doc::Depiction {
            symbology: doc::Symbology::TacticalPoint,
            sidc: "GFGPGPRP-------".into(),
            text: Some("WP".into()),
            image: None,
        }
    }

    #[test]
    fn waypoint_annotations_roundtrip() {
        let node = waypoint("ALPHA");
        let decoded = WaypointCodec.decode(&node).unwrap();
        assert_eq!(decoded.ttg, Some(Duration::minutes(4)));
        assert!(decoded.ato.is_none());
        assert_eq!(WaypointCodec.encode(&decoded).unwrap(), node);
    }

    #[test]
    fn trajectory_depiction_is_anchored_at_first_waypoint() {
        let node = doc::Trajectory {
            waypoint: vec![waypoint("A"), waypoint("B")],
            depiction: Some(depiction()),
        };
        let trajectory = TrajectoryCodec.decode(&node).unwrap();
        assert_eq!(
            trajectory.depiction.as_ref().map(|d| d.position()),
            Some(trajectory.waypoints[0].position)
        );
    }

    #[test]
    fn depicted_empty_trajectory_has_no_anchor() {
        let node = doc::Trajectory {
            waypoint: Vec::new(),
            depiction: Some(depiction()),
        };
        let err = TrajectoryCodec.decode(&node).unwrap_err();
        assert!(matches!(err, ConversionError::Geometry(GeometryError::NoReferencePosition(_))));
    }
}
