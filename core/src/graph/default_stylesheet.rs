//! Baseline rules that seed every cascade.

use crate::css::{
    ElementKind, PropertyKind, RankDirection, Routing, Rule, RuleSet, Selector, StyleSet,
};
use crate::error::Error;

/// The graph-level values a provider seeds its cascade with.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "kebab-case"))]
pub struct Baseline {
    pub routing: Routing,
    pub rank_direction: RankDirection,
    /// Minimum distance between ranks, in inches.
    pub rank_separation: f32,
    pub concentrate_edges: bool,
}

impl Default for Baseline {
    fn default() -> Self {
        Self {
            routing: Routing::Orthogonal,
            rank_direction: RankDirection::LeftToRight,
            rank_separation: 1.0,
            concentrate_edges: true,
        }
    }
}

impl Baseline {
    /// The style set of the graph rule.
    ///
    /// It always holds exactly routing, rank direction, rank separation and
    /// edge concentration.
    pub fn styles(&self) -> Result<StyleSet, Error> {
        StyleSet::new()
            .with(PropertyKind::Routing, self.routing)?
            .with(PropertyKind::RankDirection, self.rank_direction)?
            .with(PropertyKind::RankSeparation, self.rank_separation)?
            .with(PropertyKind::ConcentrateEdges, self.concentrate_edges)
    }
}

/// Supplies the rules a cascade starts out with.
///
/// Providers only choose the baseline values. The shape of the resulting rule
/// set is fixed: a graph rule, then a null rule standing in for vertices, then
/// one standing in for edges. Vertices and edges are left to the rendering
/// backend, and whatever rules the application appends compete with these on
/// specificity and declaration order alone.
pub trait DefaultRuleProvider {
    fn baseline(&self) -> Baseline;

    fn default_rules(&self) -> Result<RuleSet, Error> {
        let baseline = self.baseline();
        log::debug!("Seeding default rules from {:?}", baseline);

        let mut rule_set = RuleSet::new();
        rule_set.append_rule(Rule::new(
            Selector::element(ElementKind::Graph),
            baseline.styles()?,
        ));
        rule_set.append_rule(Rule::null());
        rule_set.append_rule(Rule::null());

        Ok(rule_set)
    }
}

/// The stock provider, carrying a configurable baseline.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StandardRules {
    baseline: Baseline,
}

impl StandardRules {
    pub fn new(baseline: Baseline) -> Self {
        Self { baseline }
    }
}

impl DefaultRuleProvider for StandardRules {
    fn baseline(&self) -> Baseline {
        self.baseline.clone()
    }
}

/// Construct the stock default rule set.
pub fn default_rules() -> Result<RuleSet, Error> {
    StandardRules::default().default_rules()
}
