//! Property names

use crate::css::element::ElementKind;
use crate::css::values::{
    ArrowType, CompassPoint, LineStyle, NodeShape, RankDirection, Routing, Value, ValueType,
};
use std::fmt;

/// The list of style properties that we care about.
///
/// Note that a couple of rules apply to what constitutes a property:
///
/// 1. Each property accepts values of exactly one `ValueType`.
/// 2. Each property styles exactly one kind of element. Arrow properties style
/// edges, since arrows are drawn at the ends of edges.
/// 3. The values of these properties are not stored here. See `Value`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PropertyKind {
    Routing,
    RankDirection,
    RankSeparation,
    ConcentrateEdges,
    ArrowHead,
    ArrowTail,
    ArrowScale,
    NodeShape,
    NodeLineStyle,
    NodeFilled,
    NodeRounded,
    EdgeLineStyle,
    EdgeDecorate,
    HeadPort,
    TailPort,
}

impl PropertyKind {
    /// Every property, in declaration order.
    pub const ALL: [PropertyKind; 15] = [
        Self::Routing,
        Self::RankDirection,
        Self::RankSeparation,
        Self::ConcentrateEdges,
        Self::ArrowHead,
        Self::ArrowTail,
        Self::ArrowScale,
        Self::NodeShape,
        Self::NodeLineStyle,
        Self::NodeFilled,
        Self::NodeRounded,
        Self::EdgeLineStyle,
        Self::EdgeDecorate,
        Self::HeadPort,
        Self::TailPort,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Routing => "routing",
            Self::RankDirection => "rank-direction",
            Self::RankSeparation => "rank-separation",
            Self::ConcentrateEdges => "concentrate-edges",
            Self::ArrowHead => "arrow-head",
            Self::ArrowTail => "arrow-tail",
            Self::ArrowScale => "arrow-scale",
            Self::NodeShape => "node-shape",
            Self::NodeLineStyle => "node-line-style",
            Self::NodeFilled => "node-filled",
            Self::NodeRounded => "node-rounded",
            Self::EdgeLineStyle => "edge-line-style",
            Self::EdgeDecorate => "edge-decorate",
            Self::HeadPort => "head-port",
            Self::TailPort => "tail-port",
        }
    }

    /// The type of value this property accepts.
    pub fn value_type(self) -> ValueType {
        match self {
            Self::Routing => ValueType::Routing,
            Self::RankDirection => ValueType::RankDirection,
            Self::RankSeparation | Self::ArrowScale => ValueType::Float,
            Self::ConcentrateEdges
            | Self::NodeFilled
            | Self::NodeRounded
            | Self::EdgeDecorate => ValueType::Bool,
            Self::ArrowHead | Self::ArrowTail => ValueType::Arrow,
            Self::NodeShape => ValueType::Shape,
            Self::NodeLineStyle | Self::EdgeLineStyle => ValueType::LineStyle,
            Self::HeadPort | Self::TailPort => ValueType::Port,
        }
    }

    /// The kind of element this property styles.
    pub fn scope(self) -> ElementKind {
        match self {
            Self::Routing | Self::RankDirection | Self::RankSeparation | Self::ConcentrateEdges => {
                ElementKind::Graph
            }
            Self::NodeShape | Self::NodeLineStyle | Self::NodeFilled | Self::NodeRounded => {
                ElementKind::Vertex
            }
            Self::ArrowHead
            | Self::ArrowTail
            | Self::ArrowScale
            | Self::EdgeLineStyle
            | Self::EdgeDecorate
            | Self::HeadPort
            | Self::TailPort => ElementKind::Edge,
        }
    }

    /// The value a rendering backend uses when this property is left unset.
    ///
    /// The cascade never fills these in; resolved style sets only carry what
    /// some rule declared. Backend adapters consult this instead.
    pub fn backend_default(self) -> Value {
        match self {
            Self::Routing => Routing::Spline.into(),
            Self::RankDirection => RankDirection::TopToBottom.into(),
            Self::RankSeparation => Value::Float(0.5),
            Self::ConcentrateEdges => Value::Bool(false),
            Self::ArrowHead | Self::ArrowTail => ArrowType::Normal.into(),
            Self::ArrowScale => Value::Float(1.0),
            Self::NodeShape => NodeShape::Ellipse.into(),
            Self::NodeLineStyle | Self::EdgeLineStyle => LineStyle::Solid.into(),
            Self::NodeFilled | Self::NodeRounded | Self::EdgeDecorate => Value::Bool(false),
            Self::HeadPort | Self::TailPort => CompassPoint::Center.into(),
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
