//! Compound selectors

use crate::css::combinators::Combinator;
use crate::css::element::{ElementFacts, ElementKind};
use crate::css::specificity::Specificity;
use crate::error::Error;
use smallvec::{smallvec, SmallVec};
use std::fmt;

/// A conjunction of combinators.
///
/// A selector matches an element when every one of its combinators does, and
/// its specificity is the sum of theirs. `edge.critical` thus outranks both
/// `edge` and `.critical` on their own.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Selector {
    combinators: SmallVec<[Combinator; 2]>,
}

impl Selector {
    /// Build a selector out of combinators.
    ///
    /// An empty list is rejected rather than treated as universal; use
    /// `Selector::any` to match everything.
    pub fn from_combinators(
        combinators: impl IntoIterator<Item = Combinator>,
    ) -> Result<Self, Error> {
        let combinators: SmallVec<[Combinator; 2]> = combinators.into_iter().collect();
        if combinators.is_empty() {
            return Err(Error::InvalidSelector("selector has no combinators"));
        }

        Ok(Self { combinators })
    }

    pub fn any() -> Self {
        Self {
            combinators: smallvec![Combinator::Any],
        }
    }

    /// A selector that never matches. This is what the null rule carries.
    pub fn never() -> Self {
        Self {
            combinators: smallvec![Combinator::Never],
        }
    }

    pub fn element(kind: ElementKind) -> Self {
        Self {
            combinators: smallvec![Combinator::IsElement(kind)],
        }
    }

    pub fn class(class: impl Into<String>) -> Self {
        Self {
            combinators: smallvec![Combinator::HasClass(class.into())],
        }
    }

    pub fn id(id: impl Into<String>) -> Self {
        Self {
            combinators: smallvec![Combinator::HasId(id.into())],
        }
    }

    /// Narrow this selector with one more combinator.
    pub fn and(mut self, combinator: Combinator) -> Self {
        self.combinators.push(combinator);
        self
    }

    pub fn combinators(&self) -> &[Combinator] {
        &self.combinators
    }

    pub fn is_never(&self) -> bool {
        self.combinators.contains(&Combinator::Never)
    }

    /// Determine if this selector applies to an element.
    pub fn matches(&self, facts: &ElementFacts) -> bool {
        self.combinators.iter().all(|combi| combi.eval(facts))
    }

    pub fn specificity(&self) -> Specificity {
        self.combinators.iter().map(Combinator::specificity).sum()
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = self
            .combinators
            .iter()
            .filter(|combi| **combi != Combinator::Any)
            .peekable();

        if parts.peek().is_none() {
            return f.write_str("*");
        }

        for combi in parts {
            write!(f, "{}", combi)?;
        }

        Ok(())
    }
}
