// tests/analyzer_scenarios.rs

mod common;
use crate::common::builders::PipelineBuilder;
use crate::common::init_tracing;

use serde_json::json;

use dagcheck::dag::GraphAnalyzer;
use dagcheck::types::{AnalysisReport, PipelineData};

fn analyze(pipeline: &PipelineData) -> AnalysisReport {
    init_tracing();
    GraphAnalyzer::new().analyze_pipeline(pipeline)
}

#[test]
fn scenario_chain_of_three() {
    let pipeline = PipelineBuilder::new()
        .nodes(&["A", "B", "C"])
        .chain(&["A", "B", "C"])
        .build();

    assert_eq!(
        analyze(&pipeline),
        AnalysisReport {
            num_nodes: 3,
            num_edges: 2,
            is_dag: true
        }
    );
}

#[test]
fn scenario_two_node_cycle() {
    let pipeline = PipelineBuilder::new()
        .nodes(&["A", "B"])
        .edge("A", "B")
        .edge("B", "A")
        .build();

    assert_eq!(
        analyze(&pipeline),
        AnalysisReport {
            num_nodes: 2,
            num_edges: 2,
            is_dag: false
        }
    );
}

#[test]
fn scenario_empty_pipeline() {
    assert_eq!(
        analyze(&PipelineData::default()),
        AnalysisReport {
            num_nodes: 0,
            num_edges: 0,
            is_dag: true
        }
    );
}

#[test]
fn scenario_undeclared_target() {
    let pipeline = PipelineBuilder::new().node("A").edge("A", "Z").build();

    assert_eq!(
        analyze(&pipeline),
        AnalysisReport {
            num_nodes: 1,
            num_edges: 1,
            is_dag: true
        }
    );
}

#[test]
fn isolated_nodes_only() {
    let pipeline = PipelineBuilder::new().nodes(&["A", "B", "C", "A"]).build();
    let report = analyze(&pipeline);

    assert!(report.is_dag);
    assert_eq!(report.num_nodes, 4);
    assert_eq!(report.num_edges, 0);
}

#[test]
fn forest_and_diamond_are_dags() {
    let pipeline = PipelineBuilder::new()
        .nodes(&["in", "left", "right", "out", "x", "y"])
        .edge("in", "left")
        .edge("in", "right")
        .edge("left", "out")
        .edge("right", "out")
        .edge("x", "y")
        .build();

    assert!(analyze(&pipeline).is_dag);
}

#[test]
fn long_cycle_behind_a_root_is_detected() {
    let pipeline = PipelineBuilder::new()
        .nodes(&["input", "a", "b", "c", "d"])
        .chain(&["input", "a", "b", "c", "d", "a"])
        .build();

    assert!(!analyze(&pipeline).is_dag);
}

#[test]
fn self_loop_only() {
    let pipeline = PipelineBuilder::new().node("A").edge("A", "A").build();
    assert!(!analyze(&pipeline).is_dag);
}

#[test]
fn malformed_records_count_but_do_not_participate() {
    let pipeline = PipelineBuilder::new()
        .nodes(&["A", "B"])
        .raw_node(None)
        .raw_node(Some(json!("")))
        .raw_node(Some(json!(0)))
        .raw_node(Some(json!(false)))
        .edge("A", "B")
        .raw_edge(Some(json!("B")), None)
        .raw_edge(None, Some(json!("A")))
        .build();

    assert_eq!(
        analyze(&pipeline),
        AnalysisReport {
            num_nodes: 6,
            num_edges: 3,
            is_dag: true
        }
    );
}

#[test]
fn numeric_ids_form_a_cycle() {
    let pipeline: PipelineData = serde_json::from_value(json!({
        "nodes": [{ "id": 1 }, { "id": 2 }],
        "edges": [
            { "source": 1, "target": 2 },
            { "source": 2, "target": 1 }
        ]
    }))
    .unwrap();

    assert_eq!(
        analyze(&pipeline),
        AnalysisReport {
            num_nodes: 2,
            num_edges: 2,
            is_dag: false
        }
    );
}

#[test]
fn numeric_and_string_ids_are_distinct_nodes() {
    // Would be a self-loop if both spellings named one node.
    let pipeline: PipelineData = serde_json::from_value(json!({
        "nodes": [{ "id": "1" }, { "id": 1 }],
        "edges": [
            { "source": "1", "target": 1 }
        ]
    }))
    .unwrap();

    let report = analyze(&pipeline);
    assert!(report.is_dag);
}

#[test]
fn identical_input_gives_identical_output() {
    let pipeline = PipelineBuilder::new()
        .nodes(&["A", "B", "C"])
        .edge("A", "B")
        .edge("C", "B")
        .edge("B", "C")
        .build();

    let analyzer = GraphAnalyzer::new();
    let first = analyzer.analyze_pipeline(&pipeline);
    let second = analyzer.analyze_pipeline(&pipeline);

    assert_eq!(first, second);
    assert!(!first.is_dag);
}

#[test]
fn editor_payload_deserializes_and_analyses() {
    let body = PipelineBuilder::new()
        .nodes(&["customInput-1", "llm-1", "customOutput-1"])
        .chain(&["customInput-1", "llm-1", "customOutput-1"])
        .to_editor_json();

    let pipeline: PipelineData = serde_json::from_value(body).unwrap();
    let report = analyze(&pipeline);

    assert_eq!(report.num_nodes, 3);
    assert_eq!(report.num_edges, 2);
    assert!(report.is_dag);
}
