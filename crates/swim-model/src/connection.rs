//! Datalinks and SWIM connections

use std::collections::BTreeSet;
use std::fmt;

use chrono::Duration;

use crate::track::TrackErrors;

/// Simulated datalink parameters
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SimulatedDatalink {
    /// Probability of a simulated error per downlink, `None` for never
    pub error_probability: Option<f64>,
    pub errors: Option<TrackErrors>,
    pub uplink_delay: Duration,
}

/// Datalink implementation
#[derive(Debug, Clone, PartialEq)]
pub enum DatalinkKind {
    Simulated(SimulatedDatalink),
    /// Live link through a DroneKit bridge
    Dronekit { host: String, port: u16 },
    /// Native MAVLink connection; representable but not yet codable
    Mavlink,
}

impl DatalinkKind {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Simulated(_) => "simulated",
            Self::Dronekit { .. } => "dronekit",
            Self::Mavlink => "mavlink",
        }
    }
}

/// Telemetry and command channel to the aircraft
#[derive(Debug, Clone, PartialEq)]
pub struct Datalink {
    pub downlink_period: Duration,
    pub kind: DatalinkKind,
}

impl Datalink {
    #[must_use]
    pub fn new(downlink_period: Duration, kind: DatalinkKind) -> Self {
        Self {
            downlink_period,
            kind,
        }
    }
}

/// SWIM data protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SwimProtocol {
    /// Aeronautical information exchange model
    Aixm,
    /// Aerodrome mapping exchange model
    Amxm,
    /// Flight information exchange model
    Fixm,
    /// ICAO weather information exchange model
    Iwxxm,
    /// Weather information exchange model
    Wxxm,
}

impl SwimProtocol {
    /// Protocols in subscription order
    pub const ALL: [SwimProtocol; 5] = [
        SwimProtocol::Aixm,
        SwimProtocol::Amxm,
        SwimProtocol::Fixm,
        SwimProtocol::Iwxxm,
        SwimProtocol::Wxxm,
    ];
}

impl fmt::Display for SwimProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Aixm => "AIXM",
            Self::Amxm => "AMXM",
            Self::Fixm => "FIXM",
            Self::Iwxxm => "IWXXM",
            Self::Wxxm => "WXXM",
        };
        f.write_str(name)
    }
}

/// SWIM connection implementation
#[derive(Debug, Clone, PartialEq)]
pub enum SwimConnectionKind {
    /// Replays SWIM messages from a resource directory
    Simulated {
        resource_directory: String,
        update_probability: f64,
        update_quantity: u32,
    },
    /// Subscribes to a live SWIM endpoint
    Live { endpoint: String },
}

impl SwimConnectionKind {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Simulated { .. } => "simulated",
            Self::Live { .. } => "live",
        }
    }
}

/// Data-feed connection with its protocol subscriptions
#[derive(Debug, Clone, PartialEq)]
pub struct SwimConnection {
    pub kind: SwimConnectionKind,
    subscriptions: BTreeSet<SwimProtocol>,
}

impl SwimConnection {
    #[must_use]
    pub fn new(kind: SwimConnectionKind) -> Self {
        Self {
            kind,
            subscriptions: BTreeSet::new(),
        }
    }

    /// Subscribe to a protocol, returning `false` if already subscribed
    pub fn subscribe(&mut self, protocol: SwimProtocol) -> bool {
        self.subscriptions.insert(protocol)
    }

    pub fn unsubscribe(&mut self, protocol: SwimProtocol) -> bool {
        self.subscriptions.remove(&protocol)
    }

    #[inline]
    #[must_use]
    pub fn has_subscribed(&self, protocol: SwimProtocol) -> bool {
        self.subscriptions.contains(&protocol)
    }

    #[inline]
    #[must_use]
    pub fn has_subscriptions(&self) -> bool {
        !self.subscriptions.is_empty()
    }

    /// Subscribed protocols in protocol order
    pub fn subscriptions(&self) -> impl Iterator<Item = SwimProtocol> + '_ {
        self.subscriptions.iter().copied()
    }
}
