//! Style matching and cascade resolution

mod cache;
mod combinators;
mod element;
mod property;
mod selector;
mod specificity;
mod style_set;
mod stylesheet;
mod values;


pub use cache::StyleCache;
pub use combinators::Combinator;
pub use element::{ElementFacts, ElementKind};
pub use property::PropertyKind;
pub use selector::Selector;
pub use specificity::Specificity;
pub use style_set::{MergePolicy, StyleSet};
pub use stylesheet::{Rule, RuleSet};
pub use values::{
    ArrowType, CompassPoint, LineStyle, NodeShape, RankDirection, Routing, Value, ValueType,
};

/// The value a property is set to. See `Value`.
pub type PropertyValue = Value;
