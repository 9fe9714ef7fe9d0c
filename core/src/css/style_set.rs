//! Declared and resolved style sets

use crate::css::property::PropertyKind;
use crate::css::values::Value;
use crate::error::Error;
use indexmap::IndexMap;
use smallvec::SmallVec;

/// A mapping from property kinds to values.
///
/// Each kind appears at most once. Putting a kind that is already present
/// replaces its value in place, so iteration follows the order in which kinds
/// were first declared. Equality ignores that order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleSet {
    properties: IndexMap<PropertyKind, Value>,
}

impl StyleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, replacing any previous value for the same kind.
    ///
    /// Fails without touching the set if the value's type is not the one the
    /// kind accepts, or if a float value is not finite.
    pub fn put(&mut self, kind: PropertyKind, value: impl Into<Value>) -> Result<(), Error> {
        let value = value.into();
        let expected = kind.value_type();
        let found = value.value_type();
        if expected != found {
            return Err(Error::TypeMismatch {
                kind,
                expected,
                found,
            });
        }

        if let Value::Float(n) = value {
            if !n.is_finite() {
                return Err(Error::InvalidValue { kind, value: n });
            }
        }

        self.properties.insert(kind, value);
        Ok(())
    }

    /// Builder form of `put`.
    pub fn with(mut self, kind: PropertyKind, value: impl Into<Value>) -> Result<Self, Error> {
        self.put(kind, value)?;
        Ok(self)
    }

    pub fn get(&self, kind: PropertyKind) -> Option<&Value> {
        self.properties.get(&kind)
    }

    pub fn contains(&self, kind: PropertyKind) -> bool {
        self.properties.contains_key(&kind)
    }

    pub fn remove(&mut self, kind: PropertyKind) -> Option<Value> {
        self.properties.shift_remove(&kind)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PropertyKind, &Value)> + '_ {
        self.properties.iter().map(|(kind, value)| (*kind, value))
    }

    pub fn kinds(&self) -> impl Iterator<Item = PropertyKind> + '_ {
        self.properties.keys().copied()
    }

    /// Merge another style set into this one.
    ///
    /// Every property of `other` replaces the value held here, except for
    /// properties the policy protects that this set already holds.
    pub fn merge(&mut self, other: &StyleSet, policy: &MergePolicy) {
        for (kind, value) in other.properties.iter() {
            if policy.is_protected(*kind) && self.properties.contains_key(kind) {
                continue;
            }

            self.properties.insert(*kind, *value);
        }
    }
}

impl<'a> IntoIterator for &'a StyleSet {
    type Item = (&'a PropertyKind, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, PropertyKind, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.iter()
    }
}

/// Decides which side wins when two style sets declare the same property.
///
/// The default policy protects nothing, so the incoming set always wins. A
/// protected property keeps the first value merged in for it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MergePolicy {
    protected: SmallVec<[PropertyKind; 4]>,
}

impl MergePolicy {
    pub fn overwrite() -> Self {
        Self::default()
    }

    pub fn protect(mut self, kind: PropertyKind) -> Self {
        if !self.protected.contains(&kind) {
            self.protected.push(kind);
        }
        self
    }

    pub fn is_protected(&self, kind: PropertyKind) -> bool {
        self.protected.contains(&kind)
    }
}
