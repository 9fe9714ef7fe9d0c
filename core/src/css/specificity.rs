//! Selector specificity

use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// A measure of the sorting weight of individual style rules.
///
/// Selectors gain specificity by way of id, class, or element combinators.
/// These combinators are counted separately, with the resulting specificity
/// ordered by the id, class, and element components in that order. A single id
/// therefore outweighs any number of classes. The universal selector
/// contributes nothing and sorts lowest.
///
/// Ties between equally-specific rules are not broken here; the cascade keeps
/// such rules in declaration order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Specificity {
    id: u32,
    class: u32,
    element: u32,
}

impl From<(u32, u32, u32)> for Specificity {
    fn from(components: (u32, u32, u32)) -> Self {
        Self {
            id: components.0,
            class: components.1,
            element: components.2,
        }
    }
}

impl Add for Specificity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            id: self.id + rhs.id,
            class: self.class + rhs.class,
            element: self.element + rhs.element,
        }
    }
}

impl AddAssign for Specificity {
    fn add_assign(&mut self, rhs: Self) {
        self.id += rhs.id;
        self.class += rhs.class;
        self.element += rhs.element;
    }
}

impl Sum for Specificity {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

impl Specificity {
    pub fn id() -> Self {
        Self::from((1, 0, 0))
    }

    pub fn class() -> Self {
        Self::from((0, 1, 0))
    }

    pub fn element() -> Self {
        Self::from((0, 0, 1))
    }
}
