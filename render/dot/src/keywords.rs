//! DOT spellings of property names and values.

use graphcss_core::css::{
    ArrowType, CompassPoint, LineStyle, NodeShape, PropertyKind, RankDirection, Routing, Value,
};

pub fn attribute_name(property: PropertyKind) -> &'static str {
    match property {
        PropertyKind::Routing => "splines",
        PropertyKind::RankDirection => "rankdir",
        PropertyKind::RankSeparation => "ranksep",
        PropertyKind::ConcentrateEdges => "concentrate",
        PropertyKind::ArrowHead => "arrowhead",
        PropertyKind::ArrowTail => "arrowtail",
        PropertyKind::ArrowScale => "arrowsize",
        PropertyKind::NodeShape => "shape",
        PropertyKind::NodeLineStyle
        | PropertyKind::NodeFilled
        | PropertyKind::NodeRounded
        | PropertyKind::EdgeLineStyle => "style",
        PropertyKind::EdgeDecorate => "decorate",
        PropertyKind::HeadPort => "headport",
        PropertyKind::TailPort => "tailport",
    }
}

pub fn value(value: &Value) -> String {
    match value {
        Value::Bool(b) => b.to_string(),
        Value::Float(n) => n.to_string(),
        Value::Routing(r) => routing(*r).to_string(),
        Value::RankDirection(d) => rank_direction(*d).to_string(),
        Value::Arrow(a) => arrow(*a).to_string(),
        Value::Shape(s) => shape(*s).to_string(),
        Value::LineStyle(s) => line_style(*s).to_string(),
        Value::Port(p) => port(*p).to_string(),
    }
}

fn routing(routing: Routing) -> &'static str {
    match routing {
        Routing::None => "none",
        Routing::Line => "line",
        Routing::Polyline => "polyline",
        Routing::Curved => "curved",
        Routing::Orthogonal => "ortho",
        Routing::Spline => "spline",
    }
}

fn rank_direction(direction: RankDirection) -> &'static str {
    match direction {
        RankDirection::TopToBottom => "TB",
        RankDirection::BottomToTop => "BT",
        RankDirection::LeftToRight => "LR",
        RankDirection::RightToLeft => "RL",
    }
}

fn arrow(arrow: ArrowType) -> &'static str {
    match arrow {
        ArrowType::Normal => "normal",
        ArrowType::Inv => "inv",
        ArrowType::Dot => "dot",
        ArrowType::Odot => "odot",
        ArrowType::Vee => "vee",
        ArrowType::Tee => "tee",
        ArrowType::Diamond => "diamond",
        ArrowType::Odiamond => "odiamond",
        ArrowType::Box => "box",
        ArrowType::Crow => "crow",
        ArrowType::None => "none",
    }
}

fn shape(shape: NodeShape) -> &'static str {
    match shape {
        NodeShape::Ellipse => "ellipse",
        NodeShape::Circle => "circle",
        NodeShape::Box => "box",
        NodeShape::Record => "record",
        NodeShape::Plaintext => "plaintext",
        NodeShape::Diamond => "diamond",
        NodeShape::Hexagon => "hexagon",
        NodeShape::Note => "note",
        NodeShape::Component => "component",
    }
}

pub fn line_style(style: LineStyle) -> &'static str {
    match style {
        LineStyle::Solid => "solid",
        LineStyle::Dashed => "dashed",
        LineStyle::Dotted => "dotted",
        LineStyle::Bold => "bold",
        LineStyle::Invisible => "invis",
    }
}

fn port(point: CompassPoint) -> &'static str {
    match point {
        CompassPoint::North => "n",
        CompassPoint::NorthEast => "ne",
        CompassPoint::East => "e",
        CompassPoint::SouthEast => "se",
        CompassPoint::South => "s",
        CompassPoint::SouthWest => "sw",
        CompassPoint::West => "w",
        CompassPoint::NorthWest => "nw",
        CompassPoint::Center => "c",
    }
}
