//! Capability property bags shared by planner algorithms

use chrono::Duration;

use crate::track::TrackErrors;

/// Capability a planner algorithm may implement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Capability {
    /// Improves solution quality over time
    Anytime,
    /// Repairs plans after environment changes
    Dynamic,
    /// Replans while the aircraft is in flight
    Online,
    /// Samples the environment instead of searching a graph
    Sampling,
    /// Guides sampling with a heuristic
    Heuristic,
    /// Bounds the neighbours considered per expansion
    NeighborLimited,
}

impl Capability {
    pub const ALL: [Capability; 6] = [
        Capability::Anytime,
        Capability::Dynamic,
        Capability::Online,
        Capability::Sampling,
        Capability::Heuristic,
        Capability::NeighborLimited,
    ];
}

/// Quality bounds of an anytime planner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnytimeProperties {
    pub minimum_quality: f64,
    pub maximum_quality: f64,
    pub quality_improvement: f64,
}

impl Default for AnytimeProperties {
    fn default() -> Self {
        Self {
            minimum_quality: 0.0,
            maximum_quality: 1.0,
            quality_improvement: 0.1,
        }
    }
}

/// Change threshold of a dynamic planner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DynamicProperties {
    /// Share of changed cost above which a plan is repaired
    pub significant_change: f64,
}

impl Default for DynamicProperties {
    fn default() -> Self {
        Self {
            significant_change: 0.5,
        }
    }
}

/// Deliberation window and error tolerances of an online planner
///
/// Absent deliberation bounds fall back to the defaults below rather than
/// to zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OnlineProperties {
    pub minimum_deliberation: Option<Duration>,
    pub maximum_deliberation: Option<Duration>,
    pub errors: Option<TrackErrors>,
}

impl OnlineProperties {
    pub const DEFAULT_MINIMUM_DELIBERATION_SECONDS: i64 = 10;
    pub const DEFAULT_MAXIMUM_DELIBERATION_SECONDS: i64 = 60;

    /// Minimum deliberation in effect
    #[must_use]
    pub fn effective_minimum_deliberation(&self) -> Duration {
        self.minimum_deliberation
            .unwrap_or_else(|| Duration::seconds(Self::DEFAULT_MINIMUM_DELIBERATION_SECONDS))
    }

    /// Maximum deliberation in effect
    #[must_use]
    pub fn effective_maximum_deliberation(&self) -> Duration {
        self.maximum_deliberation
            .unwrap_or_else(|| Duration::seconds(Self::DEFAULT_MAXIMUM_DELIBERATION_SECONDS))
    }
}

/// Sample distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Distribution {
    #[default]
    Uniform,
    Gaussian,
}

/// Tree extension technique
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Extension {
    #[default]
    Linear,
    Feasible,
}

/// Tree growth strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    #[default]
    Extend,
    Connect,
}

/// Sampling parameters of a tree planner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingProperties {
    /// Goal bias in percent
    pub bias: i32,
    pub distribution: Distribution,
    /// Maximum extension distance in metres
    pub epsilon: f64,
    pub extension: Extension,
    /// Distance in metres at which the goal counts as reached
    pub goal_threshold: f64,
    pub max_iterations: u32,
    pub strategy: Strategy,
}

impl SamplingProperties {
    pub const MAX_BIAS: i32 = 100;
}

impl Default for SamplingProperties {
    fn default() -> Self {
        Self {
            bias: 5,
            distribution: Distribution::default(),
            epsilon: 250.0,
            extension: Extension::default(),
            goal_threshold: 5.0,
            max_iterations: 3000,
            strategy: Strategy::default(),
        }
    }
}

/// Heuristic sampling algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HeuristicAlgorithm {
    /// Boltzmann kRRT
    #[default]
    BkRrt,
    /// Iterative kRRT
    IkRrt,
}

/// Quality computation variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QualityVariant {
    #[default]
    Enhanced,
    Original,
}

/// Heuristic guidance of a tree planner
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HeuristicProperties {
    pub algorithm: HeuristicAlgorithm,
    pub quality_bound: i32,
    pub variant: QualityVariant,
}

/// Neighbour limit of an expansion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeighborProperties {
    pub neighbor_limit: u32,
}

impl Default for NeighborProperties {
    fn default() -> Self {
        Self { neighbor_limit: 5 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn online_defaults_are_not_zero() {
        let online = OnlineProperties::default();
        assert_eq!(online.effective_minimum_deliberation(), Duration::seconds(10));
        assert_eq!(online.effective_maximum_deliberation(), Duration::seconds(60));

        let online = OnlineProperties {
            maximum_deliberation: Some(Duration::seconds(5)),
            ..OnlineProperties::default()
        };
        assert_eq!(online.effective_maximum_deliberation(), Duration::seconds(5));
        assert_eq!(online.effective_minimum_deliberation(), Duration::seconds(10));
    }

    #[test]
    fn sampling_defaults() {
        let sampling = SamplingProperties::default();
        assert!(sampling.bias <= SamplingProperties::MAX_BIAS);
        assert_eq!(sampling.strategy, Strategy::Extend);
    }
}
