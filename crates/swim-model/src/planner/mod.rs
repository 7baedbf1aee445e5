//! Planners
//!
//! A [`Planner`] couples an algorithm with the environment it searches, the
//! aircraft it plans for, and cost and risk policies. Algorithms are closed
//! under [`PlannerKind`]; each variant carries the property bags of the
//! capabilities it implements.
//!
//! | Algorithm | Capabilities |
//! |---|---|
//! | `astar`, `thetastar` | none |
//! | `arastar` | anytime |
//! | `adstar` | anytime, dynamic |
//! | `oadstar` | anytime, dynamic, online |
//! | `brrt`, `rrtstar` | sampling |
//! | `hrrt` | sampling, heuristic, neighbour limit |
//! | `drrt` | sampling, heuristic, dynamic, neighbour limit |
//! | `arrt` | sampling, anytime, neighbour limit |
//! | `adrrt` | sampling, anytime, dynamic, neighbour limit |
//! | `oadrrt` | sampling, anytime, dynamic, online, neighbour limit |

mod capabilities;

pub use capabilities::{
    AnytimeProperties, Capability, Distribution, DynamicProperties, Extension, HeuristicAlgorithm,
    HeuristicProperties, NeighborProperties, OnlineProperties, QualityVariant, SamplingProperties,
    Strategy,
};

use std::fmt;
use std::sync::Arc;

use crate::aircraft::Aircraft;
use crate::environment::Environment;

/// Planner algorithm without its properties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PlannerAlgorithm {
    /// Forward A*
    ForwardAStar,
    /// Theta*
    ThetaStar,
    /// Anytime repairing A*
    AraStar,
    /// Anytime dynamic A*
    AdStar,
    /// Online anytime dynamic A*
    OadStar,
    /// Basic RRT
    BasicRrt,
    /// RRT*
    RrtStar,
    /// Heuristic RRT
    HeuristicRrt,
    /// Dynamic heuristic RRT
    DynamicRrt,
    /// Anytime RRT
    AnytimeRrt,
    /// Anytime dynamic RRT
    AnytimeDynamicRrt,
    /// Online anytime dynamic RRT
    OnlineAnytimeDynamicRrt,
}

impl PlannerAlgorithm {
    pub const ALL: [PlannerAlgorithm; 12] = [
        PlannerAlgorithm::ForwardAStar,
        PlannerAlgorithm::ThetaStar,
        PlannerAlgorithm::AraStar,
        PlannerAlgorithm::AdStar,
        PlannerAlgorithm::OadStar,
        PlannerAlgorithm::BasicRrt,
        PlannerAlgorithm::RrtStar,
        PlannerAlgorithm::HeuristicRrt,
        PlannerAlgorithm::DynamicRrt,
        PlannerAlgorithm::AnytimeRrt,
        PlannerAlgorithm::AnytimeDynamicRrt,
        PlannerAlgorithm::OnlineAnytimeDynamicRrt,
    ];

    /// Document discriminant
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::ForwardAStar => "astar",
            Self::ThetaStar => "thetastar",
            Self::AraStar => "arastar",
            Self::AdStar => "adstar",
            Self::OadStar => "oadstar",
            Self::BasicRrt => "brrt",
            Self::RrtStar => "rrtstar",
            Self::HeuristicRrt => "hrrt",
            Self::DynamicRrt => "drrt",
            Self::AnytimeRrt => "arrt",
            Self::AnytimeDynamicRrt => "adrrt",
            Self::OnlineAnytimeDynamicRrt => "oadrrt",
        }
    }

    /// Capabilities implemented by the algorithm
    #[must_use]
    pub const fn capabilities(&self) -> &'static [Capability] {
        use Capability::{Anytime, Dynamic, Heuristic, NeighborLimited, Online, Sampling};
        match self {
            Self::ForwardAStar | Self::ThetaStar => &[],
            Self::AraStar => &[Anytime],
            Self::AdStar => &[Anytime, Dynamic],
            Self::OadStar => &[Anytime, Dynamic, Online],
            Self::BasicRrt | Self::RrtStar => &[Sampling],
            Self::HeuristicRrt => &[Sampling, Heuristic, NeighborLimited],
            Self::DynamicRrt => &[Sampling, Heuristic, Dynamic, NeighborLimited],
            Self::AnytimeRrt => &[Sampling, Anytime, NeighborLimited],
            Self::AnytimeDynamicRrt => &[Sampling, Anytime, Dynamic, NeighborLimited],
            Self::OnlineAnytimeDynamicRrt => {
                &[Sampling, Anytime, Dynamic, Online, NeighborLimited]
            }
        }
    }

    #[must_use]
    pub fn has_capability(&self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }
}

impl fmt::Display for PlannerAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Planner algorithm with its capability properties
#[derive(Debug, Clone, PartialEq)]
pub enum PlannerKind {
    ForwardAStar,
    ThetaStar,
    AraStar {
        anytime: AnytimeProperties,
    },
    AdStar {
        anytime: AnytimeProperties,
        dynamic: DynamicProperties,
    },
    OadStar {
        anytime: AnytimeProperties,
        dynamic: DynamicProperties,
        online: OnlineProperties,
    },
    BasicRrt {
        sampling: SamplingProperties,
    },
    RrtStar {
        sampling: SamplingProperties,
    },
    HeuristicRrt {
        sampling: SamplingProperties,
        heuristic: HeuristicProperties,
        neighbors: NeighborProperties,
    },
    DynamicRrt {
        sampling: SamplingProperties,
        heuristic: HeuristicProperties,
        dynamic: DynamicProperties,
        neighbors: NeighborProperties,
    },
    AnytimeRrt {
        sampling: SamplingProperties,
        anytime: AnytimeProperties,
        neighbors: NeighborProperties,
    },
    AnytimeDynamicRrt {
        sampling: SamplingProperties,
        anytime: AnytimeProperties,
        dynamic: DynamicProperties,
        neighbors: NeighborProperties,
    },
    OnlineAnytimeDynamicRrt {
        sampling: SamplingProperties,
        anytime: AnytimeProperties,
        dynamic: DynamicProperties,
        online: OnlineProperties,
        neighbors: NeighborProperties,
    },
}

impl PlannerKind {
    /// Algorithm with default properties for each capability
    #[must_use]
    pub fn with_defaults(algorithm: PlannerAlgorithm) -> Self {
        let anytime = AnytimeProperties::default();
        let dynamic = DynamicProperties::default();
        let online = OnlineProperties::default();
        let sampling = SamplingProperties::default();
        let heuristic = HeuristicProperties::default();
        let neighbors = NeighborProperties::default();

        match algorithm {
            PlannerAlgorithm::ForwardAStar => Self::ForwardAStar,
            PlannerAlgorithm::ThetaStar => Self::ThetaStar,
            PlannerAlgorithm::AraStar => Self::AraStar { anytime },
            PlannerAlgorithm::AdStar => Self::AdStar { anytime, dynamic },
            PlannerAlgorithm::OadStar => Self::OadStar {
                anytime,
                dynamic,
                online,
            },
            PlannerAlgorithm::BasicRrt => Self::BasicRrt { sampling },
            PlannerAlgorithm::RrtStar => Self::RrtStar { sampling },
            PlannerAlgorithm::HeuristicRrt => Self::HeuristicRrt {
                sampling,
                heuristic,
                neighbors,
            },
            PlannerAlgorithm::DynamicRrt => Self::DynamicRrt {
                sampling,
                heuristic,
                dynamic,
                neighbors,
            },
            PlannerAlgorithm::AnytimeRrt => Self::AnytimeRrt {
                sampling,
                anytime,
                neighbors,
            },
            PlannerAlgorithm::AnytimeDynamicRrt => Self::AnytimeDynamicRrt {
                sampling,
                anytime,
                dynamic,
                neighbors,
            },
            PlannerAlgorithm::OnlineAnytimeDynamicRrt => Self::OnlineAnytimeDynamicRrt {
                sampling,
                anytime,
                dynamic,
                online,
                neighbors,
            },
        }
    }

    #[must_use]
    pub const fn algorithm(&self) -> PlannerAlgorithm {
        match self {
            Self::ForwardAStar => PlannerAlgorithm::ForwardAStar,
            Self::ThetaStar => PlannerAlgorithm::ThetaStar,
            Self::AraStar { .. } => PlannerAlgorithm::AraStar,
            Self::AdStar { .. } => PlannerAlgorithm::AdStar,
            Self::OadStar { .. } => PlannerAlgorithm::OadStar,
            Self::BasicRrt { .. } => PlannerAlgorithm::BasicRrt,
            Self::RrtStar { .. } => PlannerAlgorithm::RrtStar,
            Self::HeuristicRrt { .. } => PlannerAlgorithm::HeuristicRrt,
            Self::DynamicRrt { .. } => PlannerAlgorithm::DynamicRrt,
            Self::AnytimeRrt { .. } => PlannerAlgorithm::AnytimeRrt,
            Self::AnytimeDynamicRrt { .. } => PlannerAlgorithm::AnytimeDynamicRrt,
            Self::OnlineAnytimeDynamicRrt { .. } => PlannerAlgorithm::OnlineAnytimeDynamicRrt,
        }
    }

    #[must_use]
    pub fn anytime(&self) -> Option<&AnytimeProperties> {
        match self {
            Self::AraStar { anytime }
            | Self::AdStar { anytime, .. }
            | Self::OadStar { anytime, .. }
            | Self::AnytimeRrt { anytime, .. }
            | Self::AnytimeDynamicRrt { anytime, .. }
            | Self::OnlineAnytimeDynamicRrt { anytime, .. } => Some(anytime),
            _ => None,
        }
    }

    pub fn anytime_mut(&mut self) -> Option<&mut AnytimeProperties> {
        match self {
            Self::AraStar { anytime }
            | Self::AdStar { anytime, .. }
            | Self::OadStar { anytime, .. }
            | Self::AnytimeRrt { anytime, .. }
            | Self::AnytimeDynamicRrt { anytime, .. }
            | Self::OnlineAnytimeDynamicRrt { anytime, .. } => Some(anytime),
            _ => None,
        }
    }

    #[must_use]
    pub fn dynamic(&self) -> Option<&DynamicProperties> {
        match self {
            Self::AdStar { dynamic, .. }
            | Self::OadStar { dynamic, .. }
            | Self::DynamicRrt { dynamic, .. }
            | Self::AnytimeDynamicRrt { dynamic, .. }
            | Self::OnlineAnytimeDynamicRrt { dynamic, .. } => Some(dynamic),
            _ => None,
        }
    }

    pub fn dynamic_mut(&mut self) -> Option<&mut DynamicProperties> {
        match self {
            Self::AdStar { dynamic, .. }
            | Self::OadStar { dynamic, .. }
            | Self::DynamicRrt { dynamic, .. }
            | Self::AnytimeDynamicRrt { dynamic, .. }
            | Self::OnlineAnytimeDynamicRrt { dynamic, .. } => Some(dynamic),
            _ => None,
        }
    }

    #[must_use]
    pub fn online(&self) -> Option<&OnlineProperties> {
        match self {
            Self::OadStar { online, .. } | Self::OnlineAnytimeDynamicRrt { online, .. } => {
                Some(online)
            }
            _ => None,
        }
    }

    pub fn online_mut(&mut self) -> Option<&mut OnlineProperties> {
        match self {
            Self::OadStar { online, .. } | Self::OnlineAnytimeDynamicRrt { online, .. } => {
                Some(online)
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn sampling(&self) -> Option<&SamplingProperties> {
        match self {
            Self::BasicRrt { sampling }
            | Self::RrtStar { sampling }
            | Self::HeuristicRrt { sampling, .. }
            | Self::DynamicRrt { sampling, .. }
            | Self::AnytimeRrt { sampling, .. }
            | Self::AnytimeDynamicRrt { sampling, .. }
            | Self::OnlineAnytimeDynamicRrt { sampling, .. } => Some(sampling),
            _ => None,
        }
    }

    pub fn sampling_mut(&mut self) -> Option<&mut SamplingProperties> {
        match self {
            Self::BasicRrt { sampling }
            | Self::RrtStar { sampling }
            | Self::HeuristicRrt { sampling, .. }
            | Self::DynamicRrt { sampling, .. }
            | Self::AnytimeRrt { sampling, .. }
            | Self::AnytimeDynamicRrt { sampling, .. }
            | Self::OnlineAnytimeDynamicRrt { sampling, .. } => Some(sampling),
            _ => None,
        }
    }

    #[must_use]
    pub fn heuristic(&self) -> Option<&HeuristicProperties> {
        match self {
            Self::HeuristicRrt { heuristic, .. } | Self::DynamicRrt { heuristic, .. } => {
                Some(heuristic)
            }
            _ => None,
        }
    }

    pub fn heuristic_mut(&mut self) -> Option<&mut HeuristicProperties> {
        match self {
            Self::HeuristicRrt { heuristic, .. } | Self::DynamicRrt { heuristic, .. } => {
                Some(heuristic)
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn neighbors(&self) -> Option<&NeighborProperties> {
        match self {
            Self::HeuristicRrt { neighbors, .. }
            | Self::DynamicRrt { neighbors, .. }
            | Self::AnytimeRrt { neighbors, .. }
            | Self::AnytimeDynamicRrt { neighbors, .. }
            | Self::OnlineAnytimeDynamicRrt { neighbors, .. } => Some(neighbors),
            _ => None,
        }
    }

    pub fn neighbors_mut(&mut self) -> Option<&mut NeighborProperties> {
        match self {
            Self::HeuristicRrt { neighbors, .. }
            | Self::DynamicRrt { neighbors, .. }
            | Self::AnytimeRrt { neighbors, .. }
            | Self::AnytimeDynamicRrt { neighbors, .. }
            | Self::OnlineAnytimeDynamicRrt { neighbors, .. } => Some(neighbors),
            _ => None,
        }
    }
}

/// Aggregation of costs along a path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CostPolicy {
    Minimum,
    Maximum,
    #[default]
    Average,
}

/// Treatment of risky airspace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RiskPolicy {
    Avoidance,
    #[default]
    Safety,
    Effectiveness,
    Ignorance,
}

/// Configured planner
#[derive(Debug, Clone, PartialEq)]
pub struct Planner {
    pub kind: PlannerKind,
    pub aircraft: Option<Arc<Aircraft>>,
    pub environment: Arc<Environment>,
    pub cost_policy: CostPolicy,
    pub risk_policy: RiskPolicy,
}

impl Planner {
    /// Planner with default capability properties and policies
    #[must_use]
    pub fn new(
        algorithm: PlannerAlgorithm,
        aircraft: Option<Arc<Aircraft>>,
        environment: Arc<Environment>,
    ) -> Self {
        Self {
            kind: PlannerKind::with_defaults(algorithm),
            aircraft,
            environment,
            cost_policy: CostPolicy::default(),
            risk_policy: RiskPolicy::default(),
        }
    }

    #[inline]
    #[must_use]
    pub fn with_policies(mut self, cost_policy: CostPolicy, risk_policy: RiskPolicy) -> Self {
        self.cost_policy = cost_policy;
        self.risk_policy = risk_policy;
        self
    }

    #[inline]
    #[must_use]
    pub fn algorithm(&self) -> PlannerAlgorithm {
        self.kind.algorithm()
    }

    #[inline]
    #[must_use]
    pub fn has_capability(&self, capability: Capability) -> bool {
        self.algorithm().has_capability(capability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Vec3;
    use crate::globe::OrientedBox;
    use crate::environment::PlanningContinuum;

    fn environment() -> Arc<Environment> {
        let axes = [
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
        ];
        let bounds = OrientedBox::new(Vec3::ZERO, axes, [10.0, 10.0, 10.0]).unwrap();
        Arc::new(Environment::Continuum(PlanningContinuum::new(bounds, 1.0).unwrap()))
    }

    #[test]
    fn accessors_agree_with_capability_table() {
        for algorithm in PlannerAlgorithm::ALL {
            let kind = PlannerKind::with_defaults(algorithm);
            assert_eq!(kind.algorithm(), algorithm);
            assert_eq!(kind.anytime().is_some(), algorithm.has_capability(Capability::Anytime));
            assert_eq!(kind.dynamic().is_some(), algorithm.has_capability(Capability::Dynamic));
            assert_eq!(kind.online().is_some(), algorithm.has_capability(Capability::Online));
            assert_eq!(kind.sampling().is_some(), algorithm.has_capability(Capability::Sampling));
            assert_eq!(kind.heuristic().is_some(), algorithm.has_capability(Capability::Heuristic));
            assert_eq!(
                kind.neighbors().is_some(),
                algorithm.has_capability(Capability::NeighborLimited)
            );
        }
    }

    #[test]
    fn tags_are_unique() {
        let mut tags: Vec<_> = PlannerAlgorithm::ALL.iter().map(PlannerAlgorithm::tag).collect();
        tags.sort_unstable();
        tags.dedup();
        assert_eq!(tags.len(), PlannerAlgorithm::ALL.len());
    }

    #[test]
    fn mutable_accessor_updates_properties() {
        let mut planner = Planner::new(PlannerAlgorithm::HeuristicRrt, None, environment());
        if let Some(neighbors) = planner.kind.neighbors_mut() {
            neighbors.neighbor_limit = 15;
        }
        assert_eq!(planner.kind.neighbors().map(|n| n.neighbor_limit), Some(15));
        assert!(planner.kind.anytime_mut().is_none());
        assert!(planner.has_capability(Capability::Heuristic));
        assert!(!planner.has_capability(Capability::Online));
    }
}
