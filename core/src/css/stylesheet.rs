//! Rules and rule sets

use crate::css::element::ElementFacts;
use crate::css::selector::Selector;
use crate::css::specificity::Specificity;
use crate::css::style_set::{MergePolicy, StyleSet};

/// A rule consists of a set of properties applied to elements matching a
/// particular selector.
///
/// The style set is frozen once it is handed to the rule.
#[derive(Clone, Debug, PartialEq)]
pub struct Rule {
    /// The selector that determines if this rule matches an element.
    selector: Selector,

    /// The properties this rule declares.
    styles: StyleSet,
}

impl Rule {
    pub fn new(selector: Selector, styles: StyleSet) -> Self {
        Self { selector, styles }
    }

    /// The null rule.
    ///
    /// It never matches and declares nothing. Providers return it where an
    /// element kind gets no explicit styling, leaving everything to the
    /// rendering backend.
    pub fn null() -> Self {
        Self {
            selector: Selector::never(),
            styles: StyleSet::new(),
        }
    }

    pub fn is_null(&self) -> bool {
        self.selector.is_never() && self.styles.is_empty()
    }

    /// Determine if a rule applies to an element.
    ///
    /// A rule matching an element does not in and of itself determine if its
    /// properties end up applied. Multiple rules can match at one time with
    /// conflicting values; the rule set settles those by specificity and
    /// declaration order.
    pub fn select(&self, facts: &ElementFacts) -> bool {
        self.selector.matches(facts)
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    pub fn styles(&self) -> &StyleSet {
        &self.styles
    }

    pub fn specificity(&self) -> Specificity {
        self.selector.specificity()
    }
}

/// A rule set consists of all rules declared for a rendering session, in
/// declaration order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Append all of another rule set's rules after this one's.
    pub fn append(&mut self, other: RuleSet) {
        self.rules.extend(other.rules);
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Compute the effective style of an element.
    ///
    /// Matching rules are applied from least to most specific, and in
    /// declaration order among equally specific rules, each overwriting the
    /// properties of the ones before it. Properties no rule declares are left
    /// out of the result.
    pub fn resolve(&self, facts: &ElementFacts) -> StyleSet {
        self.resolve_with(facts, &MergePolicy::default())
    }

    /// Compute the effective style of an element, merging with `policy`.
    pub fn resolve_with(&self, facts: &ElementFacts, policy: &MergePolicy) -> StyleSet {
        let mut matched: Vec<&Rule> = self.rules.iter().filter(|rule| rule.select(facts)).collect();

        // `sort_by_key` is stable, which keeps declaration order among ties.
        matched.sort_by_key(|rule| rule.specificity());

        matched
            .into_iter()
            .fold(StyleSet::new(), |mut computed, rule| {
                log::trace!(
                    "Rule {} applies to {} ({} properties)",
                    rule.selector(),
                    facts.kind(),
                    rule.styles().len()
                );
                computed.merge(rule.styles(), policy);
                computed
            })
    }
}

impl From<Vec<Rule>> for RuleSet {
    fn from(rules: Vec<Rule>) -> Self {
        Self { rules }
    }
}

impl Extend<Rule> for RuleSet {
    fn extend<I: IntoIterator<Item = Rule>>(&mut self, iter: I) {
        self.rules.extend(iter);
    }
}
