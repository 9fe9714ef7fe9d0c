//! Style value types

use std::fmt;

/// How edges are routed between vertices.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Routing {
    None,
    Line,
    Polyline,
    Curved,
    Orthogonal,
    Spline,
}

/// The direction in which ranks are laid out.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum RankDirection {
    TopToBottom,
    BottomToTop,
    LeftToRight,
    RightToLeft,
}

/// Arrowhead shapes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ArrowType {
    Normal,
    Inv,
    Dot,
    Odot,
    Vee,
    Tee,
    Diamond,
    Odiamond,
    Box,
    Crow,
    None,
}

/// Vertex outline shapes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum NodeShape {
    Ellipse,
    Circle,
    Box,
    Record,
    Plaintext,
    Diamond,
    Hexagon,
    Note,
    Component,
}

/// Stroke pattern used for vertex outlines and edges.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum LineStyle {
    Solid,
    Dashed,
    Dotted,
    Bold,
    Invisible,
}

/// The side of a vertex an edge attaches to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CompassPoint {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
    Center,
}

/// The type tag of a `Value`.
///
/// Every `PropertyKind` declares exactly one of these, and a style set refuses
/// to store a value whose tag disagrees with its kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueType {
    Bool,
    Float,
    Routing,
    RankDirection,
    Arrow,
    Shape,
    LineStyle,
    Port,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bool => "boolean",
            Self::Float => "float",
            Self::Routing => "routing",
            Self::RankDirection => "rank direction",
            Self::Arrow => "arrow",
            Self::Shape => "shape",
            Self::LineStyle => "line style",
            Self::Port => "port",
        })
    }
}

/// All possible value types a property can be assigned.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Value {
    /// A flag such as `concentrate-edges`.
    Bool(bool),

    /// A dimensionless real quantity, such as a scale factor or a separation
    /// in inches.
    Float(f32),

    Routing(Routing),

    RankDirection(RankDirection),

    Arrow(ArrowType),

    Shape(NodeShape),

    LineStyle(LineStyle),

    Port(CompassPoint),
}

impl Value {
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Bool(_) => ValueType::Bool,
            Self::Float(_) => ValueType::Float,
            Self::Routing(_) => ValueType::Routing,
            Self::RankDirection(_) => ValueType::RankDirection,
            Self::Arrow(_) => ValueType::Arrow,
            Self::Shape(_) => ValueType::Shape,
            Self::LineStyle(_) => ValueType::LineStyle,
            Self::Port(_) => ValueType::Port,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Self::Float(n)
    }
}

impl From<Routing> for Value {
    fn from(r: Routing) -> Self {
        Self::Routing(r)
    }
}

impl From<RankDirection> for Value {
    fn from(d: RankDirection) -> Self {
        Self::RankDirection(d)
    }
}

impl From<ArrowType> for Value {
    fn from(a: ArrowType) -> Self {
        Self::Arrow(a)
    }
}

impl From<NodeShape> for Value {
    fn from(s: NodeShape) -> Self {
        Self::Shape(s)
    }
}

impl From<LineStyle> for Value {
    fn from(s: LineStyle) -> Self {
        Self::LineStyle(s)
    }
}

impl From<CompassPoint> for Value {
    fn from(p: CompassPoint) -> Self {
        Self::Port(p)
    }
}
