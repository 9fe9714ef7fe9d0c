//! End-to-end styling scenarios: default rules, application rules, cascade
//! and DOT output.

use graphcss_core::css::{
    ArrowType, Combinator, ElementFacts, ElementKind, LineStyle, NodeShape, PropertyKind,
    RankDirection, Rule, RuleSet, Selector, StyleCache, StyleSet, Value,
};
use graphcss_core::graph::{default_rules, Baseline, DefaultRuleProvider, StandardRules};
use graphcss_render_dot::DotOptions;
use graphcss_tests::{render_dot, TestEdge, TestGraph, TestVertex};
use pretty_assertions::assert_eq;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn pipeline_graph() -> TestGraph {
    TestGraph {
        id: "pipeline",
        vertices: vec![
            TestVertex {
                id: "fetch",
                classes: vec!["start"],
            },
            TestVertex {
                id: "build",
                classes: vec![],
            },
            TestVertex {
                id: "deploy",
                classes: vec!["critical"],
            },
        ],
        edges: vec![
            TestEdge {
                from: "fetch",
                to: "build",
                classes: vec![],
            },
            TestEdge {
                from: "build",
                to: "deploy",
                classes: vec!["critical"],
            },
        ],
    }
}

fn application_rules() -> RuleSet {
    let mut rules = default_rules().unwrap();
    rules.append_rule(Rule::new(
        Selector::element(ElementKind::Vertex),
        StyleSet::new()
            .with(PropertyKind::NodeShape, NodeShape::Box)
            .and_then(|s| s.with(PropertyKind::NodeRounded, true))
            .unwrap(),
    ));
    rules.append_rule(Rule::new(
        Selector::class("start"),
        StyleSet::new()
            .with(PropertyKind::NodeShape, NodeShape::Circle)
            .unwrap(),
    ));
    rules.append_rule(Rule::new(
        Selector::element(ElementKind::Edge),
        StyleSet::new()
            .with(PropertyKind::ArrowHead, ArrowType::Vee)
            .unwrap(),
    ));
    rules.append_rule(Rule::new(
        Selector::any().and(Combinator::HasClass("critical".to_string())),
        StyleSet::new()
            .with(PropertyKind::NodeFilled, true)
            .unwrap(),
    ));
    rules.append_rule(Rule::new(
        Selector::element(ElementKind::Edge).and(Combinator::HasClass("critical".to_string())),
        StyleSet::new()
            .with(PropertyKind::EdgeLineStyle, LineStyle::Bold)
            .and_then(|s| s.with(PropertyKind::ArrowScale, 1.5_f32))
            .unwrap(),
    ));
    rules.append_rule(Rule::new(
        Selector::id("pipeline"),
        StyleSet::new()
            .with(PropertyKind::RankDirection, RankDirection::TopToBottom)
            .unwrap(),
    ));
    rules
}

#[test]
fn default_rules_plus_edge_rule() {
    let mut rules = default_rules().unwrap();
    rules.append_rule(Rule::new(
        Selector::element(ElementKind::Edge),
        StyleSet::new()
            .with(PropertyKind::ArrowHead, ArrowType::Vee)
            .unwrap(),
    ));

    let resolved = rules.resolve(&ElementFacts::new(ElementKind::Edge));

    assert_eq!(resolved.len(), 1);
    assert_eq!(
        resolved.get(PropertyKind::ArrowHead),
        Some(&Value::Arrow(ArrowType::Vee))
    );
}

#[test]
fn pipeline_renders_to_dot() {
    init_logging();

    let dot = render_dot(&pipeline_graph(), application_rules(), &DotOptions::default());

    assert_eq!(
        dot,
        concat!(
            "digraph pipeline {\n",
            "  graph [splines=ortho, rankdir=TB, ranksep=1, concentrate=true];\n",
            "  fetch [shape=circle, style=rounded];\n",
            "  build [shape=box, style=rounded];\n",
            "  deploy [shape=box, style=\"filled,rounded\"];\n",
            "  fetch -> build [arrowhead=vee];\n",
            "  build -> deploy [arrowhead=vee, arrowsize=1.5, style=bold];\n",
            "}\n",
        )
    );
}

#[test]
fn pipeline_with_backend_defaults() {
    let graph = TestGraph {
        id: "g",
        vertices: vec![TestVertex {
            id: "only",
            classes: vec![],
        }],
        edges: vec![],
    };
    let rules = StandardRules::new(Baseline {
        concentrate_edges: false,
        ..Baseline::default()
    })
    .default_rules()
    .unwrap();

    let dot = render_dot(
        &graph,
        rules,
        &DotOptions {
            fill_defaults: true,
        },
    );

    assert_eq!(
        dot,
        concat!(
            "digraph g {\n",
            "  graph [splines=ortho, rankdir=LR, ranksep=1, concentrate=false];\n",
            "  only [shape=ellipse, style=solid];\n",
            "}\n",
        )
    );
}

#[test]
fn cache_agrees_with_direct_resolution_for_every_element() {
    let graph = pipeline_graph();
    let rules = application_rules();
    let mut cache = StyleCache::new(rules.clone());

    let mut all_facts = vec![graph.graph_facts()];
    all_facts.extend(graph.vertices.iter().map(TestVertex::facts));
    all_facts.extend(graph.edges.iter().map(TestEdge::facts));

    for facts in &all_facts {
        assert_eq!(cache.resolve(facts), &rules.resolve(facts));
    }
}

#[test]
fn rule_set_is_shareable_across_threads() {
    let rules = std::sync::Arc::new(application_rules());
    let facts = ElementFacts::new(ElementKind::Edge).with_class("critical");
    let expected = rules.resolve(&facts);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let rules = rules.clone();
            let facts = facts.clone();
            std::thread::spawn(move || rules.resolve(&facts))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
