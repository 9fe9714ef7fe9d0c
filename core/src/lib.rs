//! Cascading style resolution for graph renderers.
//!
//! Style rules pair a selector over an element's kind, classes and id with a
//! set of typed properties. A `RuleSet` resolves, for any graph, vertex or
//! edge, the properties that apply to it once every matching rule has been
//! cascaded by specificity and declaration order. Properties no rule declares
//! are left for the rendering backend to default.
//!
//! ```rust
//! use graphcss_core::css::{ArrowType, ElementFacts, ElementKind, PropertyKind, Rule, Selector, StyleSet, Value};
//! use graphcss_core::graph::default_rules;
//!
//! let mut rules = default_rules()?;
//! rules.append_rule(Rule::new(
//!     Selector::element(ElementKind::Edge),
//!     StyleSet::new().with(PropertyKind::ArrowHead, ArrowType::Vee)?,
//! ));
//!
//! let styles = rules.resolve(&ElementFacts::new(ElementKind::Edge));
//! assert_eq!(styles.get(PropertyKind::ArrowHead), Some(&Value::Arrow(ArrowType::Vee)));
//! # Ok::<(), graphcss_core::Error>(())
//! ```

pub mod css;
mod error;
pub mod graph;

pub use error::Error;
