//! Tests for the visual graph builder traversal.
mod common;
use common::*;
use sakuzu::graph::{
    GraphBuilder, MARKED_OPERATOR_STYLE, OPERATOR_STYLE, RankDir, VALUE_STYLE,
};
use sakuzu::model::{ModelDefinition, OperatorDefinition};

#[test]
fn test_add_scenario_nodes_and_edges() {
    let model = create_add_model();
    let graph = GraphBuilder::for_model(&model).build();

    let expected_label = "Add (op#0)\n input0 x\n input1 y\n output0 z";

    // One operator node plus three value nodes, three edges.
    assert_eq!(graph.nodes.len(), 4);
    assert_eq!(graph.edges.len(), 3);

    let op_node = &graph.nodes[0];
    assert_eq!(op_node.label, expected_label);
    assert_eq!(op_node.style, OPERATOR_STYLE);

    let value_ids: Vec<_> = graph.nodes[1..].iter().map(|n| n.id.as_str()).collect();
    assert_eq!(value_ids, vec!["x0", "y0", "z0"]);
    let value_labels: Vec<_> = graph.nodes[1..].iter().map(|n| n.label.as_str()).collect();
    assert_eq!(value_labels, vec!["x", "y", "z"]);
    for node in &graph.nodes[1..] {
        assert_eq!(node.style, VALUE_STYLE);
    }

    // value -> operator for inputs, operator -> value for the output.
    assert_eq!(graph.edges[0].from, "x0");
    assert_eq!(graph.edges[0].to, expected_label);
    assert_eq!(graph.edges[1].from, "y0");
    assert_eq!(graph.edges[1].to, expected_label);
    assert_eq!(graph.edges[2].from, expected_label);
    assert_eq!(graph.edges[2].to, "z0");
}

#[test]
fn test_operator_node_count_matches_operator_count() {
    let model = create_chain_model();
    let graph = GraphBuilder::for_model(&model).build();

    let operator_nodes = graph
        .nodes
        .iter()
        .filter(|n| n.style == OPERATOR_STYLE)
        .count();
    assert_eq!(operator_nodes, model.operators.len());
}

#[test]
fn test_builder_is_deterministic() {
    let model = create_rewrite_model();
    let first = GraphBuilder::for_model(&model)
        .with_rank_dir(RankDir::Tb)
        .with_marked([1])
        .build();
    let second = GraphBuilder::for_model(&model)
        .with_rank_dir(RankDir::Tb)
        .with_marked([1])
        .build();
    assert_eq!(first, second);
}

#[test]
fn test_rewritten_value_gets_fresh_identity() {
    let model = create_rewrite_model();
    let graph = GraphBuilder::for_model(&model).build();

    // Both generations of `z` exist, sharing the display label.
    let z_nodes: Vec<_> = graph.nodes.iter().filter(|n| n.label == "z").collect();
    assert_eq!(z_nodes.len(), 2);
    assert_eq!(z_nodes[0].id, "z0");
    assert_eq!(z_nodes[1].id, "z1");

    // The second operator consumes the first generation and produces the
    // second one.
    let relu_label = &graph.nodes.iter().find(|n| n.label.starts_with("Relu")).unwrap().id;
    assert!(
        graph
            .edges
            .iter()
            .any(|e| e.from == "z0" && &e.to == relu_label)
    );
    assert!(
        graph
            .edges
            .iter()
            .any(|e| &e.from == relu_label && e.to == "z1")
    );
    assert!(!graph.edges.iter().any(|e| &e.from == relu_label && e.to == "z0"));
}

#[test]
fn test_named_operator_label_includes_name_and_type() {
    let model = create_chain_model();
    let graph = GraphBuilder::for_model(&model).build();

    assert!(graph.nodes[0].label.starts_with("conv1/Conv (op#0)"));
}

#[test]
fn test_empty_operator_name_is_treated_as_unnamed() {
    let model = ModelDefinition {
        name: None,
        operators: vec![OperatorDefinition {
            name: Some(String::new()),
            op_type: "Relu".to_string(),
            inputs: vec!["x".to_string()],
            outputs: vec!["y".to_string()],
            doc_string: None,
        }],
    };
    let graph = GraphBuilder::for_model(&model).build();
    assert!(graph.nodes[0].label.starts_with("Relu (op#0)"));
}

#[test]
fn test_marked_operators_get_highlight_style() {
    let model = create_chain_model();
    let graph = GraphBuilder::for_model(&model).with_marked([0, 2]).build();

    let operator_styles: Vec<_> = graph
        .nodes
        .iter()
        .filter(|n| n.style == OPERATOR_STYLE || n.style == MARKED_OPERATOR_STYLE)
        .map(|n| n.style)
        .collect();
    assert_eq!(
        operator_styles,
        vec![MARKED_OPERATOR_STYLE, OPERATOR_STYLE, MARKED_OPERATOR_STYLE]
    );
}

#[test]
fn test_duplicate_input_name_reuses_the_value_node() {
    let model = ModelDefinition {
        name: None,
        operators: vec![OperatorDefinition {
            name: None,
            op_type: "Add".to_string(),
            inputs: vec!["x".to_string(), "x".to_string()],
            outputs: vec!["y".to_string()],
            doc_string: None,
        }],
    };
    let graph = GraphBuilder::for_model(&model).build();

    let x_nodes = graph.nodes.iter().filter(|n| n.label == "x").count();
    assert_eq!(x_nodes, 1);
    // Both positional inputs still contribute an edge.
    let x_edges = graph.edges.iter().filter(|e| e.from == "x0").count();
    assert_eq!(x_edges, 2);
}

#[test]
fn test_graph_header_settings() {
    let model = create_add_model();
    let graph = GraphBuilder::for_model(&model)
        .with_name("net")
        .with_rank_dir(RankDir::Bt)
        .build();
    assert_eq!(graph.name.as_deref(), Some("net"));
    assert_eq!(graph.rank_dir, RankDir::Bt);
}
