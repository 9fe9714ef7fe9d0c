//! Graphviz DOT attribute adapter
//!
//! Turns a resolved `StyleSet` into the `key=value` attribute list DOT attaches
//! to a graph, node or edge statement. Document serialization is left to the
//! caller.

mod attributes;
mod keywords;


pub use attributes::DotAttributes;

use graphcss_core::css::{ElementKind, PropertyKind, StyleSet, Value};

/// Options controlling attribute generation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "kebab-case"))]
pub struct DotOptions {
    /// Emit Graphviz's own default for every applicable property the style set
    /// leaves unset, instead of omitting it.
    pub fill_defaults: bool,
}

/// Map the resolved style of one element to DOT attributes.
///
/// Only properties scoped to `kind` are emitted; anything else in `styles` is
/// dropped with a warning. Attributes come out in `PropertyKind` declaration
/// order, with the three vertex outline properties folded into one `style`
/// attribute.
pub fn attributes(kind: ElementKind, styles: &StyleSet, options: &DotOptions) -> DotAttributes {
    for stray in styles.kinds().filter(|property| property.scope() != kind) {
        log::warn!(
            "Dropping {} from {} attributes; it only applies to {} elements",
            stray,
            kind,
            stray.scope()
        );
    }

    let lookup = |property: PropertyKind| -> Option<Value> {
        match styles.get(property) {
            Some(value) => Some(*value),
            None if options.fill_defaults => Some(property.backend_default()),
            None => None,
        }
    };

    let mut attrs = DotAttributes::new();
    for property in PropertyKind::ALL.iter().copied() {
        if property.scope() != kind {
            continue;
        }

        match property {
            PropertyKind::NodeLineStyle => {
                if let Some(style) = node_style(&lookup) {
                    attrs.push("style", style);
                }
            }
            PropertyKind::NodeFilled | PropertyKind::NodeRounded => {}
            _ => {
                if let Some(value) = lookup(property) {
                    attrs.push(keywords::attribute_name(property), keywords::value(&value));
                }
            }
        }
    }

    attrs
}

/// Fold the vertex outline properties into a single comma-separated `style`.
fn node_style(lookup: &dyn Fn(PropertyKind) -> Option<Value>) -> Option<String> {
    let mut parts = Vec::new();

    if let Some(Value::LineStyle(line)) = lookup(PropertyKind::NodeLineStyle) {
        parts.push(keywords::line_style(line));
    }
    if let Some(Value::Bool(true)) = lookup(PropertyKind::NodeFilled) {
        parts.push("filled");
    }
    if let Some(Value::Bool(true)) = lookup(PropertyKind::NodeRounded) {
        parts.push("rounded");
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(","))
    }
}

/// Attributes for an element with no styles beyond the backend's own.
pub fn default_attributes(kind: ElementKind) -> DotAttributes {
    attributes(
        kind,
        &StyleSet::new(),
        &DotOptions {
            fill_defaults: true,
        },
    )
}
