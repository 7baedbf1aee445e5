//! Aircraft codecs

use swim_document as doc;
use swim_model::{Aircraft, AircraftType, Angle, Capabilities, CombatIdentification, SphereAirspace};

use super::depiction::DepictionCodec;
use crate::codec::{finite, Codec};
use crate::error::ConversionResult;
use crate::leaf::{CostIntervalCodec, DatumCodec, PositionCodec};

fn aircraft_type_from_doc(kind: doc::AircraftType) -> AircraftType {
    match kind {
        doc::AircraftType::A320 => AircraftType::A320,
        doc::AircraftType::Iris => AircraftType::Iris,
    }
}

fn aircraft_type_to_doc(kind: AircraftType) -> doc::AircraftType {
    match kind {
        AircraftType::A320 => doc::AircraftType::A320,
        AircraftType::Iris => doc::AircraftType::Iris,
    }
}

fn cid_from_doc(cid: doc::CombatIdentification) -> CombatIdentification {
    match cid {
        doc::CombatIdentification::Friend => CombatIdentification::Friend,
        doc::CombatIdentification::Hostile => CombatIdentification::Hostile,
        doc::CombatIdentification::Neutral => CombatIdentification::Neutral,
        doc::CombatIdentification::Unknown => CombatIdentification::Unknown,
    }
}

fn cid_to_doc(cid: CombatIdentification) -> doc::CombatIdentification {
    match cid {
        CombatIdentification::Friend => doc::CombatIdentification::Friend,
        CombatIdentification::Hostile => doc::CombatIdentification::Hostile,
        CombatIdentification::Neutral => doc::CombatIdentification::Neutral,
        CombatIdentification::Unknown => doc::CombatIdentification::Unknown,
    }
}

/// Capabilities node to performance envelope
#[derive(Debug, Clone, Copy, Default)]
pub struct CapabilitiesCodec;

impl Codec for CapabilitiesCodec {
    type External = doc::Capabilities;
    type Internal = Capabilities;

    fn decode(&self, node: &doc::Capabilities) -> ConversionResult<Capabilities> {
        let field = |name: &str, value: f64| finite(&format!("capabilities.{name}"), value);
        Ok(Capabilities {
            approach_rate_of_descent: field(
                "approachRateOfDescent",
                node.approach_rate_of_descent,
            )?,
            approach_speed: field("approachSpeed", node.approach_speed)?,
            cruise_climb_speed: field("cruiseClimbSpeed", node.cruise_climb_speed)?,
            cruise_descent_speed: field("cruiseDescentSpeed", node.cruise_descent_speed)?,
            cruise_rate_of_climb: field("cruiseRateOfClimb", node.cruise_rate_of_climb)?,
            cruise_rate_of_descent: field("cruiseRateOfDescent", node.cruise_rate_of_descent)?,
            cruise_speed: field("cruiseSpeed", node.cruise_speed)?,
            maximum_angle_of_climb: Angle::from_degrees(field(
                "maximumAngleOfClimb",
                node.maximum_angle_of_climb,
            )?),
            maximum_angle_of_climb_speed: field(
                "maximumAngleOfClimbSpeed",
                node.maximum_angle_of_climb_speed,
            )?,
            maximum_glide_speed: field("maximumGlideSpeed", node.maximum_glide_speed)?,
            maximum_rate_of_climb: field("maximumRateOfClimb", node.maximum_rate_of_climb)?,
            maximum_rate_of_climb_speed: field(
                "maximumRateOfClimbSpeed",
                node.maximum_rate_of_climb_speed,
            )?,
            maximum_rate_of_descent: field("maximumRateOfDescent", node.maximum_rate_of_descent)?,
            maximum_rate_of_descent_speed: field(
                "maximumRateOfDescentSpeed",
                node.maximum_rate_of_descent_speed,
            )?,
            maximum_speed: field("maximumSpeed", node.maximum_speed)?,
        })
    }

    fn encode(&self, capabilities: &Capabilities) -> ConversionResult<doc::Capabilities> {
        Ok(doc::Capabilities {
            approach_rate_of_descent: capabilities.approach_rate_of_descent,
            approach_speed: capabilities.approach_speed,
            cruise_climb_speed: capabilities.cruise_climb_speed,
            cruise_descent_speed: capabilities.cruise_descent_speed,
            cruise_rate_of_climb: capabilities.cruise_rate_of_climb,
            cruise_rate_of_descent: capabilities.cruise_rate_of_descent,
            cruise_speed: capabilities.cruise_speed,
            maximum_angle_of_climb: capabilities.maximum_angle_of_climb.degrees(),
            maximum_angle_of_climb_speed: capabilities.maximum_angle_of_climb_speed,
            maximum_glide_speed: capabilities.maximum_glide_speed,
            maximum_rate_of_climb: capabilities.maximum_rate_of_climb,
            maximum_rate_of_climb_speed: capabilities.maximum_rate_of_climb_speed,
            maximum_rate_of_descent: capabilities.maximum_rate_of_descent,
            maximum_rate_of_descent_speed: capabilities.maximum_rate_of_descent_speed,
            maximum_speed: capabilities.maximum_speed,
        })
    }
}

/// Aircraft node to aircraft
#[derive(Debug, Clone, Copy, Default)]
pub struct AircraftCodec;

impl Codec for AircraftCodec {
    type External = doc::Aircraft;
    type Internal = Aircraft;

    fn decode(&self, node: &doc::Aircraft) -> ConversionResult<Aircraft> {
        let body = SphereAirspace::new(
            PositionCodec.decode(&node.center)?,
            node.radius,
            DatumCodec.decode_or_default(node.center_datum.as_ref())?,
        )?;
        let mut aircraft = Aircraft::new(
            aircraft_type_from_doc(node.aircraft_type),
            body,
            cid_from_doc(node.cid),
            CostIntervalCodec.decode(&node.cost_interval)?,
        );
        aircraft.depiction = DepictionCodec::new(aircraft.reference_position())
            .decode_optional(node.depiction.as_ref())?;
        aircraft.capabilities = node
            .capabilities
            .as_ref()
            .map(|c| CapabilitiesCodec.decode(c))
            .transpose()?;
        Ok(aircraft)
    }

    fn encode(&self, aircraft: &Aircraft) -> ConversionResult<doc::Aircraft> {
        Ok(doc::Aircraft {
            aircraft_type: aircraft_type_to_doc(aircraft.kind),
            center: PositionCodec.encode(&aircraft.position())?,
            radius: aircraft.radius(),
            center_datum: Some(DatumCodec.encode(&aircraft.body.datum())?),
            cid: cid_to_doc(aircraft.cid),
            cost_interval: CostIntervalCodec.encode(&aircraft.cost_interval)?,
            depiction: DepictionCodec::encode_optional(aircraft.depiction.as_ref())?,
            capabilities: aircraft
                .capabilities
                .as_ref()
                .map(|c| CapabilitiesCodec.encode(c))
                .transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn node() -> doc::Aircraft {
        doc::Aircraft {
            aircraft_type: doc::AircraftType::Iris,
            center: doc::Position::new(40.0, -75.0, 120.0),
            radius: 5.0,
            center_datum: Some(doc::Datum::Asl),
            cid: doc::CombatIdentification::Friend,
            cost_interval: doc::CostInterval {
                id: "iris".into(),
                start: "2024-01-01T00:00:00Z".into(),
                end: "2024-01-01T00:00:00Z".into(),
                cost: 0.0,
                enabled: true,
            },
            depiction: Some(doc::Depiction {
                symbology: doc::Symbology::TacticalSymbol,
                sidc: "SFAPMFQ--------".into(),
                text: None,
                image: None,
            }),
            capabilities: None,
        }
    }

    #[test]
    fn nominal_capabilities_apply_when_absent() {
        let aircraft = AircraftCodec.decode(&node()).unwrap();
        assert!(aircraft.capabilities.is_none());
        assert_eq!(aircraft.effective_capabilities(), Capabilities::iris());
        assert_eq!(aircraft.depiction.as_ref().map(|d| d.position()), Some(aircraft.position()));
        assert_eq!(AircraftCodec.encode(&aircraft).unwrap(), node());
    }

    #[test]
    fn a320_takes_airliner_capabilities() {
        let mut external = node();
        external.aircraft_type = doc::AircraftType::A320;
        external.radius = 40.0;

        let aircraft = AircraftCodec.decode(&external).unwrap();
        assert_eq!(aircraft.kind, AircraftType::A320);
        assert!(aircraft.capabilities.is_none());
        let capabilities = aircraft.effective_capabilities();
        assert_eq!(capabilities, Capabilities::a320());
        assert_eq!(capabilities.cruise_speed, 230.0);
        assert_eq!(capabilities.maximum_angle_of_climb.degrees(), 10.0);

        let encoded = AircraftCodec.encode(&aircraft).unwrap();
        assert_eq!(encoded.aircraft_type, doc::AircraftType::A320);
        assert_eq!(encoded, external);
    }

    #[test]
    fn explicit_capabilities_are_kept() {
        let mut external = node();
        external.capabilities = Some(CapabilitiesCodec.encode(&Capabilities::a320()).unwrap());
        let aircraft = AircraftCodec.decode(&external).unwrap();
        assert_eq!(aircraft.capabilities, Some(Capabilities::a320()));
        assert_eq!(
            AircraftCodec.encode(&aircraft).unwrap().capabilities.map(|c| c.maximum_angle_of_climb),
            Some(10.0)
        );
    }
}
