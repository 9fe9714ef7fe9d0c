//! Shared fixtures for the cross-crate scenario tests.

use graphcss_core::css::{ElementFacts, ElementKind, RuleSet, StyleCache};
use graphcss_render_dot::DotOptions;
use std::fmt::Write;

/// A miniature application graph model.
pub struct TestGraph {
    pub id: &'static str,
    pub vertices: Vec<TestVertex>,
    pub edges: Vec<TestEdge>,
}

pub struct TestVertex {
    pub id: &'static str,
    pub classes: Vec<&'static str>,
}

pub struct TestEdge {
    pub from: &'static str,
    pub to: &'static str,
    pub classes: Vec<&'static str>,
}

impl TestGraph {
    pub fn graph_facts(&self) -> ElementFacts {
        ElementFacts::new(ElementKind::Graph).with_id(self.id)
    }
}

impl TestVertex {
    pub fn facts(&self) -> ElementFacts {
        ElementFacts::new(ElementKind::Vertex)
            .with_id(self.id)
            .with_classes(self.classes.iter().copied())
    }
}

impl TestEdge {
    pub fn facts(&self) -> ElementFacts {
        ElementFacts::new(ElementKind::Edge).with_classes(self.classes.iter().copied())
    }
}

/// Style every element of `graph` and write it out as a DOT digraph.
pub fn render_dot(graph: &TestGraph, rule_set: RuleSet, options: &DotOptions) -> String {
    let mut cache = StyleCache::new(rule_set);
    let mut out = String::new();

    let graph_attrs = graphcss_render_dot::attributes(
        ElementKind::Graph,
        cache.resolve(&graph.graph_facts()),
        options,
    );
    let _ = writeln!(out, "digraph {} {{", graph.id);
    if !graph_attrs.is_empty() {
        let _ = writeln!(out, "  graph {};", graph_attrs);
    }

    for vertex in &graph.vertices {
        let attrs =
            graphcss_render_dot::attributes(ElementKind::Vertex, cache.resolve(&vertex.facts()), options);
        if attrs.is_empty() {
            let _ = writeln!(out, "  {};", vertex.id);
        } else {
            let _ = writeln!(out, "  {} {};", vertex.id, attrs);
        }
    }

    for edge in &graph.edges {
        let attrs =
            graphcss_render_dot::attributes(ElementKind::Edge, cache.resolve(&edge.facts()), options);
        if attrs.is_empty() {
            let _ = writeln!(out, "  {} -> {};", edge.from, edge.to);
        } else {
            let _ = writeln!(out, "  {} -> {} {};", edge.from, edge.to, attrs);
        }
    }

    out.push_str("}\n");
    out
}
