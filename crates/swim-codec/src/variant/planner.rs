//! Planner codec

use std::sync::Arc;

use swim_document as doc;
use swim_model::{
    Aircraft, Capability, CostPolicy, Environment, Planner, PlannerAlgorithm, RiskPolicy,
};

use crate::codec::Codec;
use crate::error::{ConversionError, ConversionResult};
use crate::mixin;

fn cost_policy_from_doc(policy: doc::CostPolicy) -> CostPolicy {
    match policy {
        doc::CostPolicy::Minimum => CostPolicy::Minimum,
        doc::CostPolicy::Maximum => CostPolicy::Maximum,
        doc::CostPolicy::Average => CostPolicy::Average,
    }
}

fn cost_policy_to_doc(policy: CostPolicy) -> doc::CostPolicy {
    match policy {
        CostPolicy::Minimum => doc::CostPolicy::Minimum,
        CostPolicy::Maximum => doc::CostPolicy::Maximum,
        CostPolicy::Average => doc::CostPolicy::Average,
    }
}

fn risk_policy_from_doc(policy: doc::RiskPolicy) -> RiskPolicy {
    match policy {
        doc::RiskPolicy::Avoidance => RiskPolicy::Avoidance,
        doc::RiskPolicy::Safety => RiskPolicy::Safety,
        doc::RiskPolicy::Effectiveness => RiskPolicy::Effectiveness,
        doc::RiskPolicy::Ignorance => RiskPolicy::Ignorance,
    }
}

fn risk_policy_to_doc(policy: RiskPolicy) -> doc::RiskPolicy {
    match policy {
        RiskPolicy::Avoidance => doc::RiskPolicy::Avoidance,
        RiskPolicy::Safety => doc::RiskPolicy::Safety,
        RiskPolicy::Effectiveness => doc::RiskPolicy::Effectiveness,
        RiskPolicy::Ignorance => doc::RiskPolicy::Ignorance,
    }
}

/// Block name of a capability inside an algorithm slot
const fn block_name(capability: Capability) -> &'static str {
    match capability {
        Capability::Anytime => "anytime",
        Capability::Dynamic => "dynamic",
        Capability::Online => "online",
        Capability::Sampling => "sampling",
        Capability::Heuristic => "heuristic",
        Capability::NeighborLimited => "neighbors",
    }
}

fn block_present(blocks: &doc::AlgorithmBlocks, capability: Capability) -> bool {
    match capability {
        Capability::Anytime => blocks.anytime.is_some(),
        Capability::Dynamic => blocks.dynamic.is_some(),
        Capability::Online => blocks.online.is_some(),
        Capability::Sampling => blocks.sampling.is_some(),
        Capability::Heuristic => blocks.heuristic.is_some(),
        Capability::NeighborLimited => blocks.neighbors.is_some(),
    }
}

/// Planner node to planner bound to the scenario's aircraft and environment
///
/// The populated slot selects the algorithm. Its blocks must match the
/// algorithm's capabilities exactly: a block for a capability the algorithm
/// lacks is malformed, a missing block for one it has is a missing field.
#[derive(Debug, Clone, Copy)]
pub struct PlannerCodec<'a> {
    pub aircraft: Option<&'a Arc<Aircraft>>,
    pub environment: &'a Arc<Environment>,
}

impl<'a> PlannerCodec<'a> {
    #[must_use]
    pub const fn new(
        aircraft: Option<&'a Arc<Aircraft>>,
        environment: &'a Arc<Environment>,
    ) -> Self {
        Self {
            aircraft,
            environment,
        }
    }

    fn inject(
        &self,
        tag: &str,
        blocks: &doc::AlgorithmBlocks,
        planner: &mut Planner,
    ) -> ConversionResult<()> {
        let algorithm = planner.algorithm();
        for capability in Capability::ALL {
            let field = || format!("planner.{tag}.{}", block_name(capability));
            match (algorithm.has_capability(capability), block_present(blocks, capability)) {
                (true, false) => return Err(ConversionError::missing(field())),
                (false, true) => {
                    return Err(ConversionError::malformed(
                        field(),
                        format!("{algorithm} has no {} block", block_name(capability)),
                    ))
                }
                _ => {}
            }
        }

        if let Some(block) = &blocks.sampling {
            mixin::sampling::inject(block, planner)?;
        }
        if let Some(block) = &blocks.anytime {
            mixin::anytime::inject(block, planner)?;
        }
        if let Some(block) = &blocks.dynamic {
            mixin::dynamic::inject(block, planner)?;
        }
        if let Some(block) = &blocks.online {
            mixin::online::inject(block, planner)?;
        }
        if let Some(block) = &blocks.heuristic {
            mixin::heuristic::inject(block, planner)?;
        }
        if let Some(block) = &blocks.neighbors {
            mixin::neighbors::inject(block, planner)?;
        }
        Ok(())
    }

    fn extract(planner: &Planner) -> ConversionResult<doc::AlgorithmBlocks> {
        let has = |capability| planner.has_capability(capability);
        Ok(doc::AlgorithmBlocks {
            anytime: has(Capability::Anytime)
                .then(|| mixin::anytime::extract(planner))
                .transpose()?,
            dynamic: has(Capability::Dynamic)
                .then(|| mixin::dynamic::extract(planner))
                .transpose()?,
            online: has(Capability::Online)
                .then(|| mixin::online::extract(planner))
                .transpose()?,
            sampling: has(Capability::Sampling)
                .then(|| mixin::sampling::extract(planner))
                .transpose()?,
            heuristic: has(Capability::Heuristic)
                .then(|| mixin::heuristic::extract(planner))
                .transpose()?,
            neighbors: has(Capability::NeighborLimited)
                .then(|| mixin::neighbors::extract(planner))
                .transpose()?,
        })
    }
}

impl Codec for PlannerCodec<'_> {
    type External = doc::Planner;
    type Internal = Planner;

    fn decode(&self, node: &doc::Planner) -> ConversionResult<Planner> {
        let populated = node.populated();
        let (tag, blocks) = match populated.as_slice() {
            [] => return Err(ConversionError::unsupported("planner", "none")),
            [single] => *single,
            [first, rest @ ..] => {
                let others: Vec<&str> = rest.iter().map(|(tag, _)| *tag).collect();
                return Err(ConversionError::malformed(
                    "planner",
                    format!("multiple alternatives populated: {}, {}", first.0, others.join(", ")),
                ));
            }
        };
        let algorithm = PlannerAlgorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.tag() == tag)
            .ok_or_else(|| ConversionError::unsupported("planner", tag))?;

        let mut planner =
            Planner::new(algorithm, self.aircraft.cloned(), Arc::clone(self.environment))
                .with_policies(
                    cost_policy_from_doc(node.cost_policy),
                    risk_policy_from_doc(node.risk_policy),
                );
        self.inject(tag, blocks, &mut planner)?;

        tracing::debug!(algorithm = %algorithm, "decoded planner");
        Ok(planner)
    }

    fn encode(&self, planner: &Planner) -> ConversionResult<doc::Planner> {
        let mut node = doc::Planner::new(
            cost_policy_to_doc(planner.cost_policy),
            risk_policy_to_doc(planner.risk_policy),
        );
        let tag = planner.algorithm().tag();
        let slot = node
            .slot_mut(tag)
            .ok_or_else(|| ConversionError::unsupported("planner", tag))?;
        *slot = Some(Self::extract(planner)?);
        Ok(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swim_model::{Globe, LatLon, PlanningContinuum, Sector};

    fn environment() -> Arc<Environment> {
        let sector =
            Sector::from_corners(LatLon::from_degrees(0.0, 0.0), LatLon::from_degrees(0.1, 0.1));
        let bounds = Globe::earth().compute_bounding_box(&sector, 0.0, 500.0).unwrap();
        Arc::new(Environment::Continuum(PlanningContinuum::new(bounds, 25.0).unwrap()))
    }

    fn node(tag: &str, blocks: doc::AlgorithmBlocks) -> doc::Planner {
        let mut node = doc::Planner::new(doc::CostPolicy::Maximum, doc::RiskPolicy::Avoidance);
        if let Some(slot) = node.slot_mut(tag) {
            *slot = Some(blocks);
        }
        node
    }

    #[test]
    fn graph_planner_shares_the_environment() {
        let environment = environment();
        let planner = PlannerCodec::new(None, &environment)
            .decode(&node("thetastar", doc::AlgorithmBlocks::default()))
            .unwrap();
        assert_eq!(planner.algorithm(), PlannerAlgorithm::ThetaStar);
        assert_eq!(planner.cost_policy, CostPolicy::Maximum);
        assert!(Arc::ptr_eq(&planner.environment, &environment));
    }

    #[test]
    fn stray_block_is_malformed() {
        let environment = environment();
        let blocks = doc::AlgorithmBlocks {
            dynamic: Some(doc::Dynamic {
                significant_change: 0.5,
            }),
            ..doc::AlgorithmBlocks::default()
        };
        let err = PlannerCodec::new(None, &environment)
            .decode(&node("astar", blocks))
            .unwrap_err();
        assert!(matches!(
            err,
            ConversionError::MalformedValue { ref field, .. } if field == "planner.astar.dynamic"
        ));
    }

    #[test]
    fn missing_block_is_reported() {
        let environment = environment();
        let err = PlannerCodec::new(None, &environment)
            .decode(&node("arastar", doc::AlgorithmBlocks::default()))
            .unwrap_err();
        assert_eq!(err, ConversionError::missing("planner.arastar.anytime"));
    }

    #[test]
    fn empty_planner_is_unsupported() {
        let environment = environment();
        let node = doc::Planner::new(doc::CostPolicy::Average, doc::RiskPolicy::Safety);
        assert_eq!(
            PlannerCodec::new(None, &environment).decode(&node).unwrap_err(),
            ConversionError::unsupported("planner", "none")
        );
    }
}
