use crate::css::{PropertyKind, ValueType};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Property {kind} expects a {expected} value, got {found}")]
    TypeMismatch {
        kind: PropertyKind,
        expected: ValueType,
        found: ValueType,
    },

    #[error("Property {kind} cannot hold the non-finite value {value}")]
    InvalidValue { kind: PropertyKind, value: f32 },

    #[error("Invalid selector: {0}")]
    InvalidSelector(&'static str),
}
