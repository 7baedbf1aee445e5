//! Planner nodes
//!
//! A planner node populates exactly one algorithm slot. Each slot holds the
//! capability blocks of its algorithm; blocks for capabilities the algorithm
//! lacks must stay empty.

use serde::{Deserialize, Serialize};

use crate::common::Errors;

/// Path cost aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CostPolicy {
    Minimum,
    Maximum,
    Average,
}

/// Risk treatment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskPolicy {
    Avoidance,
    Safety,
    Effectiveness,
    Ignorance,
}

/// Anytime quality bounds
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Anytime {
    pub minimum_quality: f64,
    pub maximum_quality: f64,
    pub quality_improvement: f64,
}

/// Dynamic repair threshold
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dynamic {
    pub significant_change: f64,
}

/// Online deliberation and error tolerances
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Online {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_deliberation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_deliberation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Errors>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Distribution {
    Uniform,
    Gaussian,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Extension {
    Linear,
    Feasible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Strategy {
    Extend,
    Connect,
}

/// Tree sampling parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sampling {
    /// Goal bias in percent
    pub bias: i32,
    pub distribution: Distribution,
    pub epsilon: f64,
    pub extension: Extension,
    pub goal_threshold: f64,
    pub max_iterations: u32,
    pub strategy: Strategy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeuristicAlgorithm {
    #[serde(rename = "BkRRT")]
    BkRrt,
    #[serde(rename = "IkRRT")]
    IkRrt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum QualityVariant {
    Enhanced,
    Original,
}

/// Heuristic sampling guidance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Heuristic {
    pub algorithm: HeuristicAlgorithm,
    pub quality_bound: i32,
    pub variant: QualityVariant,
}

/// Expansion neighbour limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Neighbors {
    pub neighbor_limit: u64,
}

/// Capability blocks of an algorithm slot
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmBlocks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anytime: Option<Anytime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic: Option<Dynamic>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub online: Option<Online>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sampling: Option<Sampling>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heuristic: Option<Heuristic>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighbors: Option<Neighbors>,
}

/// Planner configuration; exactly one algorithm slot is populated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planner {
    pub cost_policy: CostPolicy,
    pub risk_policy: RiskPolicy,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub astar: Option<AlgorithmBlocks>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thetastar: Option<AlgorithmBlocks>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arastar: Option<AlgorithmBlocks>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adstar: Option<AlgorithmBlocks>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oadstar: Option<AlgorithmBlocks>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brrt: Option<AlgorithmBlocks>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rrtstar: Option<AlgorithmBlocks>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hrrt: Option<AlgorithmBlocks>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drrt: Option<AlgorithmBlocks>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrt: Option<AlgorithmBlocks>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adrrt: Option<AlgorithmBlocks>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oadrrt: Option<AlgorithmBlocks>,
}

impl Planner {
    /// Planner with policies and no algorithm slot populated
    #[must_use]
    pub fn new(cost_policy: CostPolicy, risk_policy: RiskPolicy) -> Self {
        Self {
            cost_policy,
            risk_policy,
            astar: None,
            thetastar: None,
            arastar: None,
            adstar: None,
            oadstar: None,
            brrt: None,
            rrtstar: None,
            hrrt: None,
            drrt: None,
            arrt: None,
            adrrt: None,
            oadrrt: None,
        }
    }

    /// Populated algorithm slots with their tags
    #[must_use]
    pub fn populated(&self) -> Vec<(&'static str, &AlgorithmBlocks)> {
        [
            ("astar", &self.astar),
            ("thetastar", &self.thetastar),
            ("arastar", &self.arastar),
            ("adstar", &self.adstar),
            ("oadstar", &self.oadstar),
            ("brrt", &self.brrt),
            ("rrtstar", &self.rrtstar),
            ("hrrt", &self.hrrt),
            ("drrt", &self.drrt),
            ("arrt", &self.arrt),
            ("adrrt", &self.adrrt),
            ("oadrrt", &self.oadrrt),
        ]
        .into_iter()
        .filter_map(|(tag, slot)| slot.as_ref().map(|blocks| (tag, blocks)))
        .collect()
    }

    /// Mutable algorithm slot for a tag, `None` for unknown tags
    pub fn slot_mut(&mut self, tag: &str) -> Option<&mut Option<AlgorithmBlocks>> {
        let slot = match tag {
            "astar" => &mut self.astar,
            "thetastar" => &mut self.thetastar,
            "arastar" => &mut self.arastar,
            "adstar" => &mut self.adstar,
            "oadstar" => &mut self.oadstar,
            "brrt" => &mut self.brrt,
            "rrtstar" => &mut self.rrtstar,
            "hrrt" => &mut self.hrrt,
            "drrt" => &mut self.drrt,
            "arrt" => &mut self.arrt,
            "adrrt" => &mut self.adrrt,
            "oadrrt" => &mut self.oadrrt,
            _ => return None,
        };
        Some(slot)
    }
}
