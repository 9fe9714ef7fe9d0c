//! Selector combinators

use crate::css::element::{ElementFacts, ElementKind};
use crate::css::specificity::Specificity;
use std::fmt;

/// A selector consists of a particular set of combinators; this lists all of
/// the combinators supported by the style engine.
///
/// There are no structural combinators. Graph elements are matched on their
/// own facts only, never on their position relative to other elements.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// This combinator matches any element.
    Any,

    /// This combinator matches no element at all.
    Never,

    /// This combinator matches elements by kind.
    IsElement(ElementKind),

    /// This combinator matches a particular element class.
    HasClass(String),

    /// This combinator matches an element's ID.
    HasId(String),
}

impl Combinator {
    /// Evaluate the combinator against an element.
    pub fn eval(&self, facts: &ElementFacts) -> bool {
        match self {
            Self::Any => true,
            Self::Never => false,
            Self::IsElement(kind) => facts.kind() == *kind,
            Self::HasClass(target_class) => facts.has_class(target_class),
            Self::HasId(target_id) => facts.id() == Some(target_id.as_str()),
        }
    }

    /// Determine how much specificity this combinator contributes to rules
    /// that include it.
    pub fn specificity(&self) -> Specificity {
        match self {
            Self::Any => Default::default(),
            Self::Never => Default::default(),
            Self::IsElement(_) => Specificity::element(),
            Self::HasClass(_) => Specificity::class(),
            Self::HasId(_) => Specificity::id(),
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("*"),
            Self::Never => f.write_str(":never"),
            Self::IsElement(kind) => write!(f, "{}", kind),
            Self::HasClass(class) => write!(f, ".{}", class),
            Self::HasId(id) => write!(f, "#{}", id),
        }
    }
}
