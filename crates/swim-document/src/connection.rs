//! Datalink and SWIM nodes

use serde::de::value::StrDeserializer;
use serde::de::IntoDeserializer;
use serde::{Deserialize, Deserializer, Serialize};

use crate::common::Errors;

/// Simulated datalink
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulatedDatalink {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_probability: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Errors>,
    pub uplink_delay: String,
}

/// DroneKit bridge datalink
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DronekitDatalink {
    pub host: String,
    pub port: u16,
}

/// MAVLink datalink
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MavlinkDatalink {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Datalink; exactly one alternative is populated
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Datalink {
    pub downlink_period: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simulated: Option<SimulatedDatalink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dronekit: Option<DronekitDatalink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mavlink: Option<MavlinkDatalink>,
}

/// SWIM protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SwimProtocol {
    Aixm,
    Amxm,
    Fixm,
    Iwxxm,
    Wxxm,
}

/// Subscribed protocols
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscriptions {
    #[serde(default, deserialize_with = "protocol_names")]
    pub protocol: Vec<SwimProtocol>,
}

/// Reads protocols as plain names so element-per-name XML lists decode
fn protocol_names<'de, D>(deserializer: D) -> Result<Vec<SwimProtocol>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<String>::deserialize(deserializer)?
        .iter()
        .map(|name| {
            let name: StrDeserializer<'_, D::Error> = name.as_str().into_deserializer();
            SwimProtocol::deserialize(name)
        })
        .collect()
}

/// Simulated SWIM connection
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulatedSwim {
    pub resource_directory: String,
    pub update_probability: f64,
    pub update_quantity: u32,
}

/// Live SWIM connection
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveSwim {
    pub endpoint: String,
}

/// SWIM connection; exactly one alternative is populated
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Swim {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simulated: Option<SimulatedSwim>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live: Option<LiveSwim>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscriptions: Option<Subscriptions>,
}
