//! Datalink and SWIM connection codecs

use swim_document as doc;
use swim_model::{
    Datalink, DatalinkKind, SimulatedDatalink, SwimConnection, SwimConnectionKind, SwimProtocol,
};

use crate::codec::{exactly_one, Codec};
use crate::error::{ConversionError, ConversionResult};
use crate::leaf::{DurationCodec, ErrorsCodec};

fn probability(field: &str, value: f64) -> ConversionResult<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ConversionError::malformed(field, format!("probability {value} outside [0, 1]")))
    }
}

fn protocol_from_doc(protocol: doc::SwimProtocol) -> SwimProtocol {
    match protocol {
        doc::SwimProtocol::Aixm => SwimProtocol::Aixm,
        doc::SwimProtocol::Amxm => SwimProtocol::Amxm,
        doc::SwimProtocol::Fixm => SwimProtocol::Fixm,
        doc::SwimProtocol::Iwxxm => SwimProtocol::Iwxxm,
        doc::SwimProtocol::Wxxm => SwimProtocol::Wxxm,
    }
}

fn protocol_to_doc(protocol: SwimProtocol) -> doc::SwimProtocol {
    match protocol {
        SwimProtocol::Aixm => doc::SwimProtocol::Aixm,
        SwimProtocol::Amxm => doc::SwimProtocol::Amxm,
        SwimProtocol::Fixm => doc::SwimProtocol::Fixm,
        SwimProtocol::Iwxxm => doc::SwimProtocol::Iwxxm,
        SwimProtocol::Wxxm => doc::SwimProtocol::Wxxm,
    }
}

/// Simulated datalink node to simulation parameters
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedDatalinkCodec;

impl Codec for SimulatedDatalinkCodec {
    type External = doc::SimulatedDatalink;
    type Internal = SimulatedDatalink;

    fn decode(&self, node: &doc::SimulatedDatalink) -> ConversionResult<SimulatedDatalink> {
        Ok(SimulatedDatalink {
            error_probability: node
                .error_probability
                .map(|p| probability("datalink.simulated.errorProbability", p))
                .transpose()?,
            errors: node.errors.as_ref().map(|e| ErrorsCodec.decode(e)).transpose()?,
            uplink_delay: DurationCodec
                .parse("datalink.simulated.uplinkDelay", &node.uplink_delay)?,
        })
    }

    fn encode(&self, datalink: &SimulatedDatalink) -> ConversionResult<doc::SimulatedDatalink> {
        Ok(doc::SimulatedDatalink {
            error_probability: datalink.error_probability,
            errors: datalink.errors.as_ref().map(|e| ErrorsCodec.encode(e)).transpose()?,
            uplink_delay: DurationCodec.format(&datalink.uplink_delay),
        })
    }
}

enum DatalinkAlternative<'n> {
    Simulated(&'n doc::SimulatedDatalink),
    Dronekit(&'n doc::DronekitDatalink),
    Mavlink,
}

/// Datalink node to datalink
///
/// MAVLink datalinks are representable in both trees but have no
/// conversion; either direction reports them as unsupported.
#[derive(Debug, Clone, Copy, Default)]
pub struct DatalinkCodec;

impl Codec for DatalinkCodec {
    type External = doc::Datalink;
    type Internal = Datalink;

    fn decode(&self, node: &doc::Datalink) -> ConversionResult<Datalink> {
        let kind = match exactly_one(
            "datalink",
            [
                ("simulated", node.simulated.as_ref().map(DatalinkAlternative::Simulated)),
                ("dronekit", node.dronekit.as_ref().map(DatalinkAlternative::Dronekit)),
                ("mavlink", node.mavlink.as_ref().map(|_| DatalinkAlternative::Mavlink)),
            ],
        )? {
            DatalinkAlternative::Simulated(simulated) => {
                DatalinkKind::Simulated(SimulatedDatalinkCodec.decode(simulated)?)
            }
            DatalinkAlternative::Dronekit(dronekit) => DatalinkKind::Dronekit {
                host: dronekit.host.clone(),
                port: dronekit.port,
            },
            DatalinkAlternative::Mavlink => {
                return Err(ConversionError::unsupported("datalink", "mavlink"));
            }
        };
        let downlink_period =
            DurationCodec.parse("datalink.downlinkPeriod", &node.downlink_period)?;
        Ok(Datalink::new(downlink_period, kind))
    }

    fn encode(&self, datalink: &Datalink) -> ConversionResult<doc::Datalink> {
        let mut node = doc::Datalink {
            downlink_period: DurationCodec.format(&datalink.downlink_period),
            ..doc::Datalink::default()
        };
        match &datalink.kind {
            DatalinkKind::Simulated(simulated) => {
                node.simulated = Some(SimulatedDatalinkCodec.encode(simulated)?);
            }
            DatalinkKind::Dronekit { host, port } => {
                node.dronekit = Some(doc::DronekitDatalink {
                    host: host.clone(),
                    port: *port,
                });
            }
            DatalinkKind::Mavlink => {
                return Err(ConversionError::unsupported("datalink", "mavlink"));
            }
        }
        Ok(node)
    }
}

enum SwimAlternative<'n> {
    Simulated(&'n doc::SimulatedSwim),
    Live(&'n doc::LiveSwim),
}

/// SWIM node to connection with subscriptions
///
/// Repeated protocols collapse into one subscription. Encoding lists them
/// in protocol order and omits an empty list.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwimCodec;

impl Codec for SwimCodec {
    type External = doc::Swim;
    type Internal = SwimConnection;

    fn decode(&self, node: &doc::Swim) -> ConversionResult<SwimConnection> {
        let kind = match exactly_one(
            "swim",
            [
                ("simulated", node.simulated.as_ref().map(SwimAlternative::Simulated)),
                ("live", node.live.as_ref().map(SwimAlternative::Live)),
            ],
        )? {
            SwimAlternative::Simulated(simulated) => SwimConnectionKind::Simulated {
                resource_directory: simulated.resource_directory.clone(),
                update_probability: probability(
                    "swim.simulated.updateProbability",
                    simulated.update_probability,
                )?,
                update_quantity: simulated.update_quantity,
            },
            SwimAlternative::Live(live) => SwimConnectionKind::Live {
                endpoint: live.endpoint.clone(),
            },
        };

        let mut connection = SwimConnection::new(kind);
        for protocol in node.subscriptions.iter().flat_map(|s| &s.protocol) {
            if !connection.subscribe(protocol_from_doc(*protocol)) {
                tracing::warn!(?protocol, "ignoring duplicate swim subscription");
            }
        }
        Ok(connection)
    }

    fn encode(&self, connection: &SwimConnection) -> ConversionResult<doc::Swim> {
        let mut node = doc::Swim::default();
        match &connection.kind {
            SwimConnectionKind::Simulated {
                resource_directory,
                update_probability,
                update_quantity,
            } => {
                node.simulated = Some(doc::SimulatedSwim {
                    resource_directory: resource_directory.clone(),
                    update_probability: *update_probability,
                    update_quantity: *update_quantity,
                });
            }
            SwimConnectionKind::Live { endpoint } => {
                node.live = Some(doc::LiveSwim {
                    endpoint: endpoint.clone(),
                });
            }
        }
        if connection.has_subscriptions() {
            node.subscriptions = Some(doc::Subscriptions {
                protocol: connection.subscriptions().map(protocol_to_doc).collect(),
            });
        }
        Ok(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use pretty_assertions::assert_eq;

    #[test]
    fn simulated_datalink_roundtrip() {
        let node = doc::Datalink {
            downlink_period: "PT1S".into(),
            simulated: Some(doc::SimulatedDatalink {
                error_probability: Some(0.05),
                errors: None,
                uplink_delay: "PT0.5S".into(),
            }),
            ..doc::Datalink::default()
        };
        let datalink = DatalinkCodec.decode(&node).unwrap();
        assert_eq!(datalink.downlink_period, Duration::seconds(1));
        assert_eq!(DatalinkCodec.encode(&datalink).unwrap(), node);
    }

    #[test]
    fn mavlink_is_unsupported() {
        let node = doc::Datalink {
            downlink_period: "PT1S".into(),
            mavlink: Some(doc::MavlinkDatalink::default()),
            ..doc::Datalink::default()
        };
        assert_eq!(
            DatalinkCodec.decode(&node).unwrap_err(),
            ConversionError::unsupported("datalink", "mavlink")
        );
    }

    #[test]
    fn duplicate_subscriptions_collapse() {
        let node = doc::Swim {
            live: Some(doc::LiveSwim {
                endpoint: "tcp://localhost:61616".into(),
            }),
            subscriptions: Some(doc::Subscriptions {
                protocol: vec![
                    doc::SwimProtocol::Wxxm,
                    doc::SwimProtocol::Aixm,
                    doc::SwimProtocol::Wxxm,
                ],
            }),
            ..doc::Swim::default()
        };
        let swim = SwimCodec.decode(&node).unwrap();
        let encoded = SwimCodec.encode(&swim).unwrap();
        assert_eq!(
            encoded.subscriptions.unwrap().protocol,
            vec![doc::SwimProtocol::Aixm, doc::SwimProtocol::Wxxm]
        );
    }

    #[test]
    fn update_probability_is_bounded() {
        let node = doc::Swim {
            simulated: Some(doc::SimulatedSwim {
                resource_directory: "swim/".into(),
                update_probability: 1.5,
                update_quantity: 2,
            }),
            ..doc::Swim::default()
        };
        assert!(matches!(
            SwimCodec.decode(&node),
            Err(ConversionError::MalformedValue { .. })
        ));
    }
}
