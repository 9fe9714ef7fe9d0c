//! Memoized style resolution

use crate::css::element::ElementFacts;
use crate::css::stylesheet::RuleSet;
use crate::css::style_set::StyleSet;
use fnv::FnvHashMap;

/// Resolves styles against a frozen rule set, remembering the result for each
/// distinct set of element facts.
///
/// Results are always equal to calling `RuleSet::resolve` directly.
pub struct StyleCache {
    rule_set: RuleSet,
    resolved: FnvHashMap<ElementFacts, StyleSet>,
}

impl StyleCache {
    pub fn new(rule_set: RuleSet) -> Self {
        Self {
            rule_set,
            resolved: FnvHashMap::default(),
        }
    }

    pub fn rule_set(&self) -> &RuleSet {
        &self.rule_set
    }

    /// Give the rule set back, discarding everything cached.
    pub fn into_rule_set(self) -> RuleSet {
        self.rule_set
    }

    pub fn resolve(&mut self, facts: &ElementFacts) -> &StyleSet {
        if !self.resolved.contains_key(facts) {
            let computed = self.rule_set.resolve(facts);
            log::debug!(
                "Resolved {} properties for new {} facts {:?}",
                computed.len(),
                facts.kind(),
                facts
            );
            self.resolved.insert(facts.clone(), computed);
        }

        &self.resolved[facts]
    }

    /// The number of distinct element facts resolved so far.
    pub fn len(&self) -> usize {
        self.resolved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolved.is_empty()
    }

    pub fn clear(&mut self) {
        self.resolved.clear();
    }
}
